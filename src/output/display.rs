//! Display functions for command results

use super::formatters::{complexity_bar, validity_mark};
use crate::commands::{BenchmarkResult, ValidateSummary};
use crate::scoring::ScoreBreakdown;
use crate::service::GenerationResponse;
use colored::Colorize;

/// Print a generation response as a table
pub fn print_generation_response(response: &GenerationResponse, verbose: bool) {
    let data = &response.data;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Generated {} combinations ({} before filtering)",
        data.combinations.len().to_string().bright_yellow().bold(),
        data.total_generated
    );
    println!("{}", "─".repeat(60).cyan());

    for candidate in &data.combinations {
        if verbose {
            println!(
                "  {} {:<15} len {:<2} complexity {:>2} {}",
                validity_mark(candidate.is_valid),
                candidate.word,
                candidate.length,
                candidate.complexity,
                complexity_bar(candidate.complexity, 10)
            );
            if let Some(definition) = &candidate.definition {
                println!("      {}", definition.text.dimmed());
            }
        } else if candidate.is_valid {
            println!("  {} {}", validity_mark(true), candidate.word.bold());
        }
    }

    if data.truncated.status {
        let reason = data
            .truncated
            .reason
            .map_or_else(String::new, |r| r.to_string());
        println!("\n{} {}", "⚠ truncated:".yellow().bold(), reason);
    }

    let stats = &data.statistics;
    println!(
        "\n{} {} valid, {} invalid, avg length {:.1}, avg complexity {:.1}",
        "Stats:".bright_cyan().bold(),
        stats.valid_words.to_string().green(),
        stats.invalid_words.to_string().red(),
        stats.average_length,
        stats.average_complexity
    );

    let perf = &data.performance_metrics;
    println!(
        "{} {} ms, {:.1} combinations/s, {:.2} MB retained",
        "Timing:".bright_cyan().bold(),
        perf.duration_ms,
        perf.combinations_per_second,
        perf.memory_estimate_mb
    );

    if response.cache_info.hit {
        println!(
            "{} served from cache ({}s old)",
            "Cache:".bright_cyan().bold(),
            response.cache_info.age
        );
    }

    if let Some(error) = &response.error {
        println!(
            "\n{} {} — {}",
            "Degraded:".yellow().bold(),
            error.code,
            error.message
        );
    }
}

/// Print direct validation results
pub fn print_validate_summary(summary: &ValidateSummary) {
    println!();
    for result in &summary.results {
        print!("  {} {}", validity_mark(result.is_valid), result.word);
        if let Some(definition) = &result.definition {
            print!("  {}", definition.text.dimmed());
        }
        println!();
    }

    println!(
        "\n{} valid, {} invalid",
        summary.valid_count.to_string().green().bold(),
        summary.invalid_count.to_string().red()
    );

    if summary.degraded {
        println!(
            "{}",
            "⚠ dictionary partially unavailable; some results degraded".yellow()
        );
    }
}

/// Print a complexity score with its term-by-term breakdown
pub fn print_score_breakdown(breakdown: &ScoreBreakdown) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "COMPLEXITY:".bright_cyan().bold(),
        breakdown.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n  Score: {} / 10  {}",
        breakdown.score.to_string().bold(),
        complexity_bar(breakdown.score, 30)
    );
    println!("\n  Length term:      {:+.3}", breakdown.base);
    println!("  Uniqueness term:  {:+.3}", breakdown.uniqueness);
    println!(
        "  Repetition runs:  {:+.3}",
        -(breakdown.repetition_runs as f64)
    );
    println!(
        "  Alternations:     {:+.3}",
        0.5 * breakdown.alternations as f64
    );
}

/// Print benchmark statistics
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n  Pools:            {}", result.total_runs);
    println!("  Combinations:     {}", result.total_combinations);
    println!("  Valid words:      {}", result.total_valid);
    println!("  Truncated runs:   {}", result.truncated_runs);
    println!("  Duration:         {:.2?}", result.duration);
    println!("  Pools/sec:        {:.1}", result.runs_per_second);
    println!(
        "  Combinations/sec: {:.1}",
        result.combinations_per_second
    );
}
