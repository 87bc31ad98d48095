//! Display functions for command results

use super::formatters::{create_progress_bar, word_list};
use crate::commands::{ExtendResult, LookupResult, StarterPick, SurveyResult};
use crate::dictionary::DictionaryStats;
use colored::Colorize;

const LIST_LIMIT: usize = 20;

/// Print the result of an anagram lookup
pub fn print_lookup_result(result: &LookupResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Anagrams of {} [{}]",
        result.word.to_uppercase().bright_yellow().bold(),
        result.signature
    );
    println!("{}", "─".repeat(60).cyan());

    if result.in_dictionary {
        println!("  In dictionary:  {}", "yes".green());
    } else {
        println!("  In dictionary:  {}", "no".red());
    }
    println!(
        "  Anagrams ({}):  {}",
        result.anagrams.len(),
        word_list(&result.anagrams, LIST_LIMIT)
    );

    if let Some(base) = &result.base {
        println!(
            "  Moves on {} ({}): {}",
            base.to_uppercase().bright_cyan(),
            result.accepted.len(),
            word_list(&result.accepted, LIST_LIMIT).green()
        );
    }
}

/// Print the result of a one-more-letter lookup
pub fn print_extend_result(result: &ExtendResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Extending {} ({} rule)",
        result.word.to_uppercase().bright_yellow().bold(),
        result.rule
    );
    println!("{}", "─".repeat(60).cyan());

    println!(
        "  Matches ({}): {}",
        result.matches.len(),
        word_list(&result.matches, LIST_LIMIT)
    );
    println!(
        "  Moves ({}):   {}",
        result.moves.len(),
        word_list(&result.moves, LIST_LIMIT).green()
    );
}

/// Print a run of starter words
pub fn print_starter_picks(picks: &[StarterPick]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STARTER WORDS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for (i, pick) in picks.iter().enumerate() {
        println!(
            "  {}. [{}] {} ({} anagrams)",
            (i + 1).to_string().bright_black(),
            pick.length,
            pick.word.to_uppercase().bright_white().bold(),
            pick.anagram_count
        );
    }
}

/// Print a playability survey
pub fn print_survey_result(result: &SurveyResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PLAYABILITY SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!(
        "\n  Threshold: {} one-more-letter anagrams",
        result.min_num_anagrams
    );

    for row in &result.rows {
        let bar = create_progress_bar(row.qualifying as f64, row.words as f64, 30);
        let pct = if row.words > 0 {
            row.qualifying as f64 / row.words as f64 * 100.0
        } else {
            0.0
        };
        let line = format!(
            "  {}: [{bar}] {:5}/{:<5} ({pct:5.1}%)",
            row.length, row.qualifying, row.words
        );

        if row.qualifying > 0 {
            println!("{}", line.green());
            println!("     e.g. {}", word_list(&row.sample, LIST_LIMIT).bright_black());
        } else {
            println!("{}", line.red());
        }
    }

    println!("\n  Time taken: {:.2}s", result.duration.as_secs_f64());
    if result.is_playable() {
        println!(
            "{}",
            "✅ Every starter length has a qualifying word".green().bold()
        );
    } else {
        println!(
            "{}",
            "❌ Some starter lengths have no qualifying word".red().bold()
        );
    }
}

/// Print dictionary statistics
pub fn print_stats(stats: &DictionaryStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DICTIONARY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("  Words:       {}", stats.total_words);
    println!("  Distinct:    {}", stats.distinct_words);
    println!("  Signatures:  {}", stats.signatures);

    println!("\n📈 {}", "By length:".bright_cyan().bold());
    let max = stats.words_by_length.values().copied().max().unwrap_or(0);
    for (length, &count) in &stats.words_by_length {
        let bar = create_progress_bar(count as f64, max as f64, 40);
        println!("  {length:3}: {} {count}", bar.green());
    }
}
