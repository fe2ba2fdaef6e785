//! Configuration management for sort operations

use crate::core_sort::DEFAULT_INSERTION_THRESHOLD;
use crate::error::{SortError, SortResult};
use std::str::FromStr;

/// Largest accepted insertion sort threshold
pub const MAX_INSERTION_THRESHOLD: usize = 64;

/// Direction of the final order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Main configuration structure for sort operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortConfig {
    /// Ascending or descending result
    pub order: SortOrder,
    /// Allow the reflective adapter for types without a concrete one
    pub reflective_fallback: bool,
    /// Ranges at or below this length use insertion sort
    pub insertion_threshold: usize,
    /// Report the chosen adapter at info level
    pub debug: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            order: SortOrder::Ascending,
            reflective_fallback: true,
            insertion_threshold: DEFAULT_INSERTION_THRESHOLD,
            debug: false,
        }
    }
}

impl SortConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sort order
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Enable descending order
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.order = if reverse {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        };
        self
    }

    /// Enable or disable the reflective fallback
    pub fn with_reflective_fallback(mut self, enabled: bool) -> Self {
        self.reflective_fallback = enabled;
        self
    }

    /// Set the insertion sort threshold
    pub fn with_insertion_threshold(mut self, threshold: usize) -> Self {
        self.insertion_threshold = threshold;
        self
    }

    /// Enable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Validate configuration for consistency
    pub fn validate(&self) -> SortResult<()> {
        if self.insertion_threshold == 0 {
            return Err(SortError::invalid_config(
                "insertion threshold must be positive",
            ));
        }

        if self.insertion_threshold > MAX_INSERTION_THRESHOLD {
            return Err(SortError::invalid_config(&format!(
                "insertion threshold too large (maximum {MAX_INSERTION_THRESHOLD})"
            )));
        }

        Ok(())
    }

    /// Check if the result is descending
    pub fn is_reverse(&self) -> bool {
        matches!(self.order, SortOrder::Descending)
    }
}

impl FromStr for SortOrder {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ascending" | "asc" => Ok(SortOrder::Ascending),
            "descending" | "desc" | "reverse" => Ok(SortOrder::Descending),
            _ => Err(SortError::invalid_config(&format!("unknown sort order: {s}"))),
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        };
        write!(f, "{name}")
    }
}

/// Builder pattern for creating configurations
#[derive(Debug, Default)]
pub struct SortConfigBuilder {
    config: SortConfig,
}

impl SortConfigBuilder {
    /// Start building a new configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.config.order = order;
        self
    }

    pub fn reverse(mut self) -> Self {
        self.config.order = SortOrder::Descending;
        self
    }

    /// Only accept types with a concrete adapter
    pub fn strict(mut self) -> Self {
        self.config.reflective_fallback = false;
        self
    }

    pub fn insertion_threshold(mut self, threshold: usize) -> Self {
        self.config.insertion_threshold = threshold;
        self
    }

    pub fn debug(mut self) -> Self {
        self.config.debug = true;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> SortResult<SortConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Common configuration presets
pub mod presets {
    use super::*;

    pub fn ascending() -> SortConfig {
        SortConfig::default()
    }

    pub fn descending() -> SortConfig {
        SortConfig::default().with_order(SortOrder::Descending)
    }

    /// Concrete adapters only
    pub fn strict() -> SortConfig {
        SortConfig::default().with_reflective_fallback(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SortConfig::default();
        assert_eq!(config.order, SortOrder::Ascending);
        assert!(config.reflective_fallback);
        assert_eq!(config.insertion_threshold, DEFAULT_INSERTION_THRESHOLD);
        assert!(!config.debug);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = SortConfigBuilder::new()
            .reverse()
            .strict()
            .insertion_threshold(4)
            .build()
            .expect("Failed to build test config");

        assert!(config.is_reverse());
        assert!(!config.reflective_fallback);
        assert_eq!(config.insertion_threshold, 4);
    }

    #[test]
    fn test_sort_order_from_str() {
        assert_eq!(
            "DESC".parse::<SortOrder>().expect("Failed to parse desc"),
            SortOrder::Descending
        );
        assert_eq!(
            "ascending".parse::<SortOrder>().expect("Failed to parse ascending"),
            SortOrder::Ascending
        );
        assert!("sideways".parse::<SortOrder>().is_err());
        assert_eq!(SortOrder::Descending.to_string(), "descending");
    }

    #[test]
    fn test_validate_threshold() {
        let config = SortConfig::default().with_insertion_threshold(0);
        assert!(config.validate().is_err());

        let config = SortConfig::default().with_insertion_threshold(MAX_INSERTION_THRESHOLD + 1);
        assert!(config.validate().is_err());

        assert!(SortConfigBuilder::new().insertion_threshold(0).build().is_err());
    }

    #[test]
    fn test_presets() {
        assert!(!presets::ascending().is_reverse());
        assert!(presets::descending().is_reverse());
        assert!(!presets::strict().reflective_fallback);
        assert!(!SortConfig::new().with_reverse(true).with_reverse(false).is_reverse());
    }
}
