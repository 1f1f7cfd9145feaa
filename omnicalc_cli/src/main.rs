//! # Omnicalc CLI
//!
//! Line-oriented terminal front end for the Omnicalc engine. This is a thin
//! boundary adapter: it owns the two pieces of session state (selected
//! operation, angle mode), collects raw field text, and displays whatever
//! string the core returns. All numeric policy lives in `omnicalc_core`.
//!
//! ## Commands at the menu prompt
//!
//! - a number or an operation key selects an operation
//! - `mode` toggles degrees/radians
//! - `json` dumps the catalog schema for LLM/API consumers
//! - `q` quits

use std::io::{self, BufRead, Write};

use omnicalc_core::angle::AngleMode;
use omnicalc_core::inputs::RawInputs;
use omnicalc_core::registry::{Catalog, Operation};

/// Print a prompt and read one trimmed line; None on EOF
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return None;
    }

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn print_menu(catalog: &Catalog, mode: AngleMode) {
    println!();
    println!("Angle mode: {} (type 'mode' to toggle)", mode.short_name());
    println!();
    for (i, (key, label)) in catalog.entries().iter().enumerate() {
        println!("  {:>2}. {:<18} {}", i + 1, key, label);
    }
    println!();
}

/// Resolve a menu entry from either a 1-based index or an operation key
fn select_operation(catalog: &Catalog, choice: &str) -> Option<Operation> {
    if let Ok(index) = choice.parse::<usize>() {
        let entries = catalog.entries();
        if index >= 1 && index <= entries.len() {
            return catalog.get(entries[index - 1].0);
        }
        return None;
    }
    catalog.get(choice)
}

fn run_operation(catalog: &Catalog, op: Operation, mode: AngleMode) {
    let descriptor = op.descriptor();
    println!();
    println!("{}", descriptor.label);

    let mut inputs = RawInputs::default();
    for field in &descriptor.fields {
        let hint = field
            .placeholder
            .map(|p| format!(" [{}]", p))
            .unwrap_or_default();
        let Some(text) = prompt_line(&format!("  {}{}: ", field.label, hint)) else {
            return;
        };
        inputs.set(field.id, text);
    }

    println!();
    match catalog.compute(descriptor.key, &inputs, mode) {
        Ok(text) => println!("{}", text),
        Err(e) => println!("Error: {}", e),
    }
}

fn main() {
    let catalog = Catalog::standard();
    let mut mode = AngleMode::Degrees;

    println!("Omnicalc - Interactive Calculator");
    println!("=================================");

    loop {
        print_menu(&catalog, mode);
        let Some(choice) = prompt_line("Select operation (number/key, 'json', 'mode', 'q'): ")
        else {
            break;
        };

        match choice.as_str() {
            "" => continue,
            "q" | "quit" | "exit" => break,
            "mode" => {
                mode = match mode {
                    AngleMode::Degrees => AngleMode::Radians,
                    AngleMode::Radians => AngleMode::Degrees,
                };
                println!("Angle mode set to {}", mode.short_name());
            }
            "json" => match serde_json::to_string_pretty(&catalog.descriptors()) {
                Ok(json) => println!("{}", json),
                Err(e) => println!("Error: {}", e),
            },
            other => match select_operation(&catalog, other) {
                Some(op) => run_operation(&catalog, op, mode),
                None => println!("Unknown operation: {}", other),
            },
        }
    }
}
