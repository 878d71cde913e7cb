use thiserror::Error;

/// Error type that captures degenerate spend-chart input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    #[error("no categories to chart")]
    NoCategories,
    #[error("chart supports at most {max} categories, got {count}")]
    TooManyCategories { count: usize, max: usize },
    #[error("no withdrawals recorded in any category")]
    NoWithdrawals,
}
