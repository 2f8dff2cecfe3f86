pub mod formatter;

pub use formatter::{
    format_comparison, format_cost_breakdown, format_money, format_score_result,
    should_use_colors,
};
