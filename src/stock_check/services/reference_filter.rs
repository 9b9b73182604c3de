use crate::shared::error::StockCheckError;
use crate::shared::Result;
use regex::Regex;
use std::cell::Cell;

/// Maximum number of exclude patterns
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single exclude pattern
const MAX_PATTERN_LENGTH: usize = 255;

/// Reference patterns that never need stock: graphics (kibuzzard),
/// layout markers, test points and mounting holes.
pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &["^kibuzzard.*", "^LAYOUT.*", "^TP.*", "^H.*"];

/// ReferenceFilter - Decides which board references are skipped by the BOM
///
/// Patterns are regular expressions searched anywhere in the reference; use
/// `^` to anchor at the start. Tracks which patterns matched so unused
/// patterns can be reported after aggregation.
#[derive(Debug)]
pub struct ReferenceFilter {
    patterns: Vec<ExcludePattern>,
}

impl ReferenceFilter {
    /// Creates a filter from raw pattern strings
    ///
    /// # Arguments
    /// * `patterns` - Regular expressions, e.g. "^TP.*" or "^FID"
    ///
    /// # Returns
    /// A filter with no matches recorded yet
    ///
    /// # Errors
    /// - Too many patterns (> MAX_EXCLUDE_PATTERNS)
    /// - Empty or overlong pattern
    /// - Pattern that is not a valid regular expression
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            return Err(StockCheckError::Validation {
                message: format!(
                    "Too many exclusion patterns: {} (maximum: {})",
                    patterns.len(),
                    MAX_EXCLUDE_PATTERNS
                ),
            }
            .into());
        }

        let patterns = patterns
            .into_iter()
            .map(ExcludePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Filter built from [`DEFAULT_EXCLUDE_PATTERNS`]
    pub fn with_defaults() -> Self {
        Self {
            patterns: DEFAULT_EXCLUDE_PATTERNS
                .iter()
                .filter_map(|p| ExcludePattern::new(p.to_string()).ok())
                .collect(),
        }
    }

    /// Checks if a reference matches any exclusion pattern
    ///
    /// # Arguments
    /// * `reference` - Board reference designator, e.g. "TP3"
    ///
    /// # Returns
    /// true if at least one pattern matches. Each matching pattern is
    /// recorded for [`Self::unmatched_patterns`].
    pub fn is_excluded(&self, reference: &str) -> bool {
        // Every pattern is evaluated so that match tracking stays accurate.
        self.patterns
            .iter()
            .fold(false, |excluded, p| p.matches(reference) || excluded)
    }

    /// Patterns that did not match any reference so far
    pub fn unmatched_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| !p.matched.get())
            .map(|p| p.original.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[derive(Debug)]
struct ExcludePattern {
    original: String,
    regex: Regex,
    matched: Cell<bool>,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;
        let regex = Regex::new(&pattern).map_err(|e| StockCheckError::Validation {
            message: format!("Invalid exclusion pattern '{}': {}", pattern, e),
        })?;

        Ok(Self {
            original: pattern,
            regex,
            matched: Cell::new(false),
        })
    }

    fn matches(&self, reference: &str) -> bool {
        let is_match = self.regex.is_match(reference);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.trim().is_empty() {
        return Err(StockCheckError::Validation {
            message: "Exclusion pattern cannot be empty".to_string(),
        }
        .into());
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(StockCheckError::Validation {
            message: format!(
                "Exclusion pattern is too long ({} chars). Maximum: {} chars",
                pattern.len(),
                MAX_PATTERN_LENGTH
            ),
        }
        .into());
    }

    Ok(())
}
