//! Build script to generate embedded tile distributions
//!
//! Reads the distribution CSV tables and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const DISTRIBUTIONS: &[&str] = &["english", "french", "german", "spanish"];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("distributions.rs");

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated tile distributions").unwrap();
    writeln!(output).unwrap();

    for name in DISTRIBUTIONS {
        let input_path = format!("data/distributions/{name}.csv");
        generate_table(&input_path, &mut output, name);
        println!("cargo:rerun-if-changed={input_path}");
    }
}

fn generate_table(input_path: &str, output: &mut fs::File, name: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let const_name = name.to_uppercase();
    let mut total = 0u32;

    writeln!(output, "/// Tile table of the {name} edition: (letter, frequency, points)").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, u32, u32)] = &[").unwrap();

    // Skip the CSV header
    for (i, line) in content.lines().enumerate().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        assert!(
            fields.len() == 3,
            "{input_path}:{}: expected 3 fields, got {}",
            i + 1,
            fields.len()
        );
        let frequency: u32 = fields[1]
            .parse()
            .unwrap_or_else(|e| panic!("{input_path}:{}: bad frequency: {e}", i + 1));
        let points: u32 = fields[2]
            .parse()
            .unwrap_or_else(|e| panic!("{input_path}:{}: bad points: {e}", i + 1));
        total += frequency;

        writeln!(output, "    (\"{}\", {frequency}, {points}),", fields[0]).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of tiles in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_TILE_COUNT: usize = {total};").unwrap();
    writeln!(output).unwrap();
}
