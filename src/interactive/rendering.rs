//! TUI rendering with ratatui
//!
//! Hand, word count, insights and messages for the game interface.

use super::app::{App, MessageStyle};
use super::picker::Picker;
use crate::game::Phase;
use crate::output::formatters::{format_duration, tile_label, wrap_words};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    if app.session.is_finished() {
        render_finished(f, app, chunks[1]);
    } else {
        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(60), // Left panel
                Constraint::Percentage(40), // Right panel
            ])
            .split(chunks[1]);

        render_main_panel(f, app, main_chunks[0]);
        render_info_panel(f, app, main_chunks[1]);
    }

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Distribution menu shown before the first hand
pub fn picker_ui(f: &mut Frame, picker: &Picker) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(6),    // Menu
            Constraint::Length(1), // Help
        ])
        .split(f.area());

    render_title(f, "🎲 SCRABBLER - choose your tiles", chunks[0]);

    let items: Vec<ListItem> = picker
        .choices
        .iter()
        .enumerate()
        .map(|(i, choice)| {
            let (prefix, style) = if i == picker.selected {
                (
                    "▶ ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(Color::White))
            };
            ListItem::new(format!("{prefix}{}. {}", i + 1, choice.label)).style(style)
        })
        .collect();

    let menu = List::new(items).block(
        Block::default()
            .title(" Distribution ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(menu, chunks[1]);

    let help = Paragraph::new("↑/↓: Move | Enter: Start | 1-9: Pick | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "🎲 SCRABBLER - {} tiles",
        app.session.distribution().name()
    );
    render_title(f, &title, area);
}

fn render_title(f: &mut Frame, title: &str, area: Rect) {
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Hand
            Constraint::Min(5),    // Words
        ])
        .split(area);

    render_hand(f, app, chunks[0]);
    render_words(f, app, chunks[1]);
}

fn render_hand(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for tile in app.session.hand().iter() {
        let style = if tile.is_carried() {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else if tile.is_wildcard() {
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        };
        spans.push(Span::styled(
            format!(" {} ", tile_label(tile, app.show_points)),
            style.add_modifier(Modifier::REVERSED),
        ));
        spans.push(Span::raw(" "));
    }

    let title = match app.session.phase() {
        Phase::Drawing => format!(" Draw {} ", app.session.draw_count()),
        Phase::Playing => " Your hand ".to_string(),
    };

    let paragraph = Paragraph::new(vec![Line::from(""), Line::from(spans)])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_words(f: &mut Frame, app: &App, area: Rect) {
    let matches = app.session.matches();

    let mut content = vec![Line::from(match matches.len() {
        0 => "No word uses every tile".to_string(),
        1 => "1 word uses every tile".to_string(),
        n => format!("{n} words use every tile"),
    })];

    if app.show_insights {
        content.push(Line::from(""));
        let width = area.width.saturating_sub(4) as usize;
        for line in wrap_words(matches, width.max(8)) {
            content.push(Line::from(Span::styled(
                line.to_uppercase(),
                Style::default().fg(Color::Green),
            )));
        }
    } else if !matches.is_empty() {
        content.push(Line::from(Span::styled(
            "Ctrl+G to reveal",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Words ")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Pool gauge
            Constraint::Length(3), // Timer
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_pool_progress(f, app, chunks[0]);
    render_timer(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_pool_progress(f: &mut Frame, app: &App, area: Rect) {
    let total = app.session.distribution().tile_count();
    let played = app.session.played_tiles();
    let progress_pct = if total == 0 {
        0
    } else {
        (played * 100 / total).min(100) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Tiles Played ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!(
            "{played}/{total} | {} in pool",
            app.session.pool().len()
        ));

    f.render_widget(gauge, area);
}

fn render_timer(f: &mut Frame, app: &App, area: Rect) {
    let (text, color) = match (app.timer, app.remaining_time()) {
        (None, _) => ("no limit".to_string(), Color::DarkGray),
        (Some(_), _) if app.timed_out => ("time's up".to_string(), Color::Red),
        (Some(limit), None) => (format_duration(limit), Color::White),
        (Some(_), Some(left)) if left.as_secs() < 10 => (format_duration(left), Color::Red),
        (Some(_), Some(left)) => (format_duration(left), Color::Yellow),
    };

    let timer = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(Block::default().title(" Timer ").borders(Borders::ALL));
    f.render_widget(timer, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_finished(f: &mut Frame, app: &App, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "🎉 GAME FINISHED 🎉",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Words played: {}", app.session.play_count())),
        Line::from(format!("Tiles played: {}", app.session.played_tiles())),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = if app.session.is_finished() {
        (" Press Enter or 'q' to quit ", "", Color::Green)
    } else if app.timed_out {
        (" Time's up! | Enter for a new hand ", "", Color::Red)
    } else {
        match app.session.phase() {
            Phase::Drawing => (
                " Keep this hand? | Enter: yes | n: new hand | r: redraw ",
                "",
                Color::Cyan,
            ),
            Phase::Playing => (
                " Type a word | Enter to play | Ctrl+R for a new hand ",
                app.input_buffer.as_str(),
                Color::Yellow,
            ),
        }
    };

    let input = Paragraph::new(content.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = match app.session.phase() {
        Phase::Drawing => "Mode: Drawing",
        Phase::Playing => "Mode: Playing",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let words_text = format!("Words: {}", app.session.play_count());
    let words = Paragraph::new(words_text).alignment(Alignment::Center);
    f.render_widget(words, chunks[1]);

    let pool_text = format!("Pool: {}", app.session.pool().len());
    let pool = Paragraph::new(pool_text).alignment(Alignment::Center);
    f.render_widget(pool, chunks[2]);

    let help = Paragraph::new("Esc: Quit | Ctrl+G: Words | Ctrl+R: Reject")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
