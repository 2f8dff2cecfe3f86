use std::io::IsTerminal;

use owo_colors::OwoColorize;

use crate::cloud::{Comparison, CostBreakdown};
use crate::pau::ScoreResult;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a dollar amount. Two decimals normally, four for sub-cent
/// amounts so operation costs don't round away to "$0.00".
pub fn format_money(amount: f64) -> String {
    if amount > 0.0 && amount < 0.01 {
        format!("${amount:.4}")
    } else {
        format!("${amount:.2}")
    }
}

/// Format a score result as a small report: headline scores first, then
/// every elective ranked. The two that count toward the final score are
/// marked and, when colors are on, shown in red.
pub fn format_score_result(result: &ScoreResult, use_colors: bool) -> String {
    let mut lines = Vec::new();

    let access = format!("{:.3}", result.access_score);
    let final_score = format!("{:.3}", result.final_score);
    if use_colors {
        lines.push(format!("Access score (max 10):  {}", access.bold()));
        lines.push(format!("Final score (max 14):   {}", final_score.bold()));
    } else {
        lines.push(format!("Access score (max 10):  {access}"));
        lines.push(format!("Final score (max 14):   {final_score}"));
    }

    lines.push(String::new());
    lines.push("Electives (best two count):".to_string());
    for (rank, elective) in result.electives.iter().enumerate() {
        let selected = rank < 2;
        let marker = if selected { '*' } else { ' ' };
        let line = format!(
            "  {marker} {:<18} {:>5.2}  (weighted {:.3})",
            elective.subject.label(),
            elective.grade,
            elective.weighted,
        );
        if selected && use_colors {
            lines.push(line.red().to_string());
        } else {
            lines.push(line);
        }
    }

    lines.join("\n")
}

/// Format one provider's monthly cost breakdown as a labelled column of
/// amounts.
pub fn format_cost_breakdown(breakdown: &CostBreakdown, use_colors: bool) -> String {
    let header = format!(
        "{} {} monthly estimate",
        breakdown.provider, breakdown.storage_class
    );
    let total = format_money(breakdown.total);

    let mut lines = Vec::new();
    if use_colors {
        lines.push(header.bold().to_string());
    } else {
        lines.push(header);
    }
    lines.push(format!("  Storage:     {:>10}", format_money(breakdown.storage)));
    lines.push(format!("  Retrieval:   {:>10}", format_money(breakdown.retrieval)));
    lines.push(format!("  Operations:  {:>10}", format_money(breakdown.operations)));
    lines.push(format!("  Network:     {:>10}", format_money(breakdown.network)));
    if use_colors {
        lines.push(format!("  Total:       {:>10}", total.bold()));
    } else {
        lines.push(format!("  Total:       {:>10}", total));
    }

    lines.join("\n")
}

/// Format the verdict of a two-provider comparison as one line.
pub fn format_comparison(
    first: &CostBreakdown,
    second: &CostBreakdown,
    comparison: &Comparison,
    use_colors: bool,
) -> String {
    if comparison.absolute_diff == 0.0 {
        return format!(
            "{} and {} cost the same ({}/mo)",
            first.provider,
            second.provider,
            format_money(first.total)
        );
    }

    let pricier = if comparison.cheaper == first.provider {
        second.provider
    } else {
        first.provider
    };
    let winner = comparison.cheaper.to_string();
    let saving = format!(
        "saves {}/mo ({:.1}% less than {})",
        format_money(comparison.absolute_diff),
        comparison.percent_diff,
        pricier
    );

    if use_colors {
        format!("{} is cheaper: {}", winner.green().bold(), saving)
    } else {
        format!("{winner} is cheaper: {saving}")
    }
}
