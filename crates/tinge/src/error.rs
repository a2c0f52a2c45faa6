//! Error types for rule definition and loading.

use thiserror::Error;

/// Errors that can occur when building or loading rule sets.
///
/// Note that *applying* rules never fails: unknown rule-set names and
/// unknown style identifiers are handled by documented fallbacks, not
/// errors. Only constructing rules (bad pattern, malformed YAML) can
/// produce a `RuleError`.
#[derive(Debug, Error)]
pub enum RuleError {
    /// Invalid regular expression pattern.
    #[error("invalid rule pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Malformed YAML rule-set definition.
    #[error("invalid rule set definition: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A rule must carry exactly one of `style` or `delegate`.
    #[error("rule {index} in set '{set}' must have exactly one of `style` or `delegate`")]
    InvalidAction { set: String, index: usize },
}

/// Result type for rule construction and loading.
pub type Result<T> = std::result::Result<T, RuleError>;
