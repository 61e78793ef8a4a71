//! Display functions for line-mode output

use super::formatters::{honeycomb_rows, word_entry};
use crate::commands::SolveResult;
use crate::game::Color;
use colored::{ColoredString, Colorize};

/// Apply a game color to text
#[must_use]
pub fn paint(text: &str, color: Color) -> ColoredString {
    match color {
        Color::Black => text.normal(),
        Color::Blue => text.bright_blue(),
        Color::Green => text.green(),
        Color::Red => text.red(),
        Color::Purple => text.magenta(),
    }
}

/// Print a feedback message
pub fn print_message(text: &str, color: Color) {
    println!("{} {}", "»".bright_black(), paint(text, color).bold());
}

/// Print one word list entry
pub fn print_word(text: &str, color: Color) {
    println!("  • {}", paint(text, color));
}

/// Print the honeycomb with the center letter highlighted
pub fn print_honeycomb(letters: &str) {
    println!();
    for (row_index, row) in honeycomb_rows(letters).iter().enumerate() {
        if row_index == 2 {
            println!("    {}", row.bright_yellow().bold());
        } else {
            println!("    {}", row.bright_white());
        }
    }
    println!();
}

/// Print every solution of a puzzle
pub fn print_solve_result(result: &SolveResult) {
    let letters = result.puzzle.to_string();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} (center {})",
        letters.bright_yellow().bold(),
        result.puzzle.center().to_string().bright_yellow()
    );
    println!("{}", "─".repeat(60).cyan());

    print_honeycomb(&letters);

    for word in &result.words {
        let color = if word.pangram {
            Color::Blue
        } else {
            Color::Black
        };
        print_word(&word_entry(&word.word, word.points), color);
    }

    println!();
    if result.words.is_empty() {
        println!("{}", "No valid words found!".red().bold());
    } else {
        let pangrams = result.pangrams().count();
        println!(
            "{}",
            format!(
                "Found {} words ({} pangram{})! Total Score: {}",
                result.words.len(),
                pangrams,
                if pangrams == 1 { "" } else { "s" },
                result.total_score
            )
            .green()
            .bold()
        );
    }
}
