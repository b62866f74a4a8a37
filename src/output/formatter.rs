use std::io::IsTerminal;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::compare::Comparison;
use crate::scoring::{contribution, Category, RankedDestination, WeightVector};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score with one decimal place ("68.5", "100.0")
pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format ranked destinations as a table with columns: Rank, Score, Name, Tier
/// No headers. Rank column: 3 chars (fits "99."), right-aligned.
/// Score column is right-aligned, 6 chars wide (fits "100.0" and over-100 totals).
pub fn format_ranked_table(ranked: &[RankedDestination], use_colors: bool) -> String {
    if ranked.is_empty() {
        return "No destinations match.".to_string();
    }

    let term_width = get_terminal_width();
    let index_width = 3;
    let score_width = 6;
    let tier_width = 9;
    let separator = "  ";

    ranked
        .iter()
        .map(|entry| {
            let dest = entry.scored.destination;
            let index_str = format!("{:>2}.", entry.rank);
            let score_padded = format!(
                "{:>width$}",
                format_score(entry.scored.weighted_score),
                width = score_width
            );
            let tier = format!("{:<width$}", dest.budget_tier.label(), width = tier_width);

            let full_name = match &dest.country {
                Some(country) => format!("{}, {}", dest.display_name(), country),
                None => dest.display_name().to_string(),
            };
            let fixed_width = index_width + 1 + score_width + separator.len() * 2 + tier_width;
            let name = if let Some(width) = term_width {
                if width > fixed_width + 10 {
                    truncate_name(&full_name, width - fixed_width)
                } else {
                    truncate_name(&full_name, 20)
                }
            } else {
                full_name
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}",
                    index_str.dimmed(),
                    score_padded.bold(),
                    separator,
                    tier.cyan(),
                    separator,
                    name
                )
            } else {
                format!(
                    "{} {}{}{}{}{}",
                    index_str, score_padded, separator, tier, separator, name
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Multi-line score breakdown for one destination (verbose mode)
pub fn format_ranked_detail(
    entry: &RankedDestination,
    weights: &WeightVector,
    use_colors: bool,
) -> String {
    let dest = entry.scored.destination;
    let heading = format!(
        "{}. {} ({}) - {}",
        entry.rank,
        dest.display_name(),
        dest.id,
        format_score(entry.scored.weighted_score)
    );
    let mut lines = vec![if use_colors {
        heading.bold().to_string()
    } else {
        heading
    }];

    for category in Category::ALL {
        let score = entry.scored.category_scores.get(category);
        let weight = weights.get(category);
        lines.push(format!(
            "  {:<12}{:>6} x {:>5} = {:>6}",
            category.label(),
            format_score(score),
            weight,
            format!("{:.2}", contribution(score, weight))
        ));
    }

    lines.join("\n")
}

/// Format ranked destinations as tab-separated values for scripting.
/// Columns: rank, id, weighted score, then the six category scores in
/// display order (no headers, no colors)
pub fn format_tsv(ranked: &[RankedDestination]) -> String {
    if ranked.is_empty() {
        return String::new();
    }

    ranked
        .iter()
        .map(|entry| {
            let mut fields = vec![
                entry.rank.to_string(),
                entry.scored.destination.id.clone(),
                format!("{:.2}", entry.scored.weighted_score),
            ];
            fields.extend(
                Category::ALL
                    .iter()
                    .map(|c| format!("{:.2}", entry.scored.category_scores.get(*c))),
            );
            fields.join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty-printed JSON of any serializable result
pub fn format_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize results as JSON")
}

/// Format a comparison as a category matrix followed by the ranking.
/// Category leaders are marked with `*` (and highlighted when colored).
pub fn format_comparison(comparison: &Comparison, use_colors: bool) -> String {
    let label_width = 12;
    let column_width = comparison
        .destinations
        .iter()
        .map(|d| d.display_name().chars().count())
        .max()
        .unwrap_or(0)
        .max(8)
        + 2;

    let mut lines = Vec::new();

    let mut header = format!("{:<width$}", "", width = label_width);
    for dest in comparison.destinations {
        header.push_str(&format!(
            "{:>width$}",
            truncate_name(dest.display_name(), column_width - 2),
            width = column_width
        ));
    }
    lines.push(if use_colors {
        header.bold().to_string()
    } else {
        header
    });

    for category in Category::ALL {
        let leaders = comparison.leaders(category);
        let mut row = format!("{:<width$}", category.label(), width = label_width);
        for dest in comparison.destinations {
            let Some(entry) = comparison.entry(&dest.id) else {
                continue;
            };
            let score = format_score(entry.scored.category_scores.get(category));
            let lead = leaders.contains(&dest.id.as_str());
            let cell = if lead {
                format!("{:>width$}", format!("*{}", score), width = column_width)
            } else {
                format!("{:>width$}", score, width = column_width)
            };
            if use_colors && lead {
                row.push_str(&cell.green().to_string());
            } else {
                row.push_str(&cell);
            }
        }
        lines.push(row);
    }

    let mut total = format!("{:<width$}", "Overall", width = label_width);
    for dest in comparison.destinations {
        if let Some(entry) = comparison.entry(&dest.id) {
            total.push_str(&format!(
                "{:>width$}",
                format_score(entry.scored.weighted_score),
                width = column_width
            ));
        }
    }
    lines.push(if use_colors {
        total.bold().to_string()
    } else {
        total
    });

    lines.push(String::new());
    lines.push(format_ranked_table(&comparison.ranking, use_colors));

    lines.join("\n")
}
