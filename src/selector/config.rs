use serde::{Deserialize, Serialize};

use crate::core::Range;
use crate::error::{ChartError, ChartResult};

/// Minimum selection width used when none is configured: one day in seconds.
pub const DEFAULT_MINIMUM_SPAN: f64 = 86_400.0;

/// Range selector bootstrap configuration.
///
/// Serializable so hosts can keep selector setup next to the rest of their
/// chart configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSelectorConfig {
    #[serde(default = "default_minimum_span")]
    pub minimum_span: f64,
    #[serde(default)]
    pub initial_selection: Option<Range>,
}

impl Default for RangeSelectorConfig {
    fn default() -> Self {
        Self {
            minimum_span: DEFAULT_MINIMUM_SPAN,
            initial_selection: None,
        }
    }
}

impl RangeSelectorConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_minimum_span(mut self, minimum_span: f64) -> Self {
        self.minimum_span = minimum_span;
        self
    }

    /// Seeds the selection shown before the first chart range arrives.
    #[must_use]
    pub fn with_initial_selection(mut self, selection: Range) -> Self {
        self.initial_selection = Some(selection);
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.minimum_span.is_finite() || self.minimum_span < 0.0 {
            return Err(ChartError::InvalidData(
                "range selector minimum span must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }

    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize range selector config: {e}"))
        })
    }

    /// Parses and validates a config.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse range selector config: {e}"))
        })?;
        config.validate()
    }
}

fn default_minimum_span() -> f64 {
    DEFAULT_MINIMUM_SPAN
}
