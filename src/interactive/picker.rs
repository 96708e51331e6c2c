//! Distribution picker shown when no distribution was given

use crate::distributions::Registry;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// One entry of the picker
#[derive(Debug, Clone)]
pub struct Choice {
    pub name: String,
    pub label: String,
}

/// Menu state: a cursor over the known distributions
#[derive(Debug, Clone)]
pub struct Picker {
    pub choices: Vec<Choice>,
    pub selected: usize,
    pub chosen: Option<String>,
    pub should_quit: bool,
}

impl Picker {
    /// List every distribution of the registry, in registry order
    #[must_use]
    pub fn new(registry: &Registry) -> Self {
        let choices = registry
            .iter()
            .map(|d| Choice {
                name: d.name().to_string(),
                label: format!("{} ({}, {} tiles)", d.name(), d.language(), d.tile_count()),
            })
            .collect();

        Self {
            choices,
            selected: 0,
            chosen: None,
            should_quit: false,
        }
    }

    fn select_next(&mut self) {
        if !self.choices.is_empty() {
            self.selected = (self.selected + 1) % self.choices.len();
        }
    }

    fn select_previous(&mut self) {
        if !self.choices.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.choices.len() - 1);
        }
    }

    fn choose(&mut self) {
        self.chosen = self.choices.get(self.selected).map(|c| c.name.clone());
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Enter => self.choose(),
            KeyCode::Char(c) => {
                // Number keys pick directly
                if let Some(n) = c.to_digit(10)
                    && n >= 1
                    && (n as usize) <= self.choices.len()
                {
                    self.selected = n as usize - 1;
                    self.choose();
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(picker: &mut Picker, code: KeyCode) {
        picker.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn lists_registry_names() {
        let registry = Registry::builtin();
        let picker = Picker::new(&registry);
        let names: Vec<&str> = picker.choices.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, registry.names().collect::<Vec<_>>());
        assert_eq!(picker.choices[1].label, "french (fr, 102 tiles)");
    }

    #[test]
    fn arrows_wrap_around() {
        let mut picker = Picker::new(&Registry::builtin());
        press(&mut picker, KeyCode::Up);
        assert_eq!(picker.selected, picker.choices.len() - 1);
        press(&mut picker, KeyCode::Down);
        assert_eq!(picker.selected, 0);
        press(&mut picker, KeyCode::Down);
        press(&mut picker, KeyCode::Enter);
        assert_eq!(picker.chosen.as_deref(), Some("french"));
    }

    #[test]
    fn number_keys_choose() {
        let mut picker = Picker::new(&Registry::builtin());
        press(&mut picker, KeyCode::Char('9'));
        assert!(picker.chosen.is_none());
        press(&mut picker, KeyCode::Char('4'));
        assert_eq!(picker.chosen.as_deref(), Some("spanish"));
    }

    #[test]
    fn escape_quits_without_choice() {
        let mut picker = Picker::new(&Registry::builtin());
        press(&mut picker, KeyCode::Esc);
        assert!(picker.should_quit);
        assert!(picker.chosen.is_none());
    }
}
