use bon::bon;

use crate::{DisplayLayoutError, DisplayLayoutResult};

const DEFAULT_FALLBACK_SCALING: f64 = 1.0;

fn validate_fallback_scaling(scaling: f64) -> DisplayLayoutResult<f64> {
    if !scaling.is_finite() {
        return Err(DisplayLayoutError::InvalidConfig {
            reason: "fallback scaling must be a finite number".into(),
        });
    }
    if scaling <= 0.0 {
        return Err(DisplayLayoutError::InvalidConfig {
            reason: "fallback scaling must be greater than zero".into(),
        });
    }
    if scaling > 10.0 {
        return Err(DisplayLayoutError::InvalidConfig {
            reason: "fallback scaling cannot be greater than 10".into(),
        });
    }
    Ok(scaling)
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayLayoutConfig {
    /// Scaling factor used whenever the measured one would divide by zero.
    pub fallback_scaling: f64,
    /// Whether moved windows are repainted immediately.
    pub redraw: bool,
    /// Whether the platform backend declares the process per-monitor DPI aware.
    ///
    /// Off by default. Scaling is measured against the virtualized
    /// coordinates a DPI-unaware process sees, and an aware process reads
    /// 100% on every monitor.
    pub dpi_aware: bool,
}

impl Default for DisplayLayoutConfig {
    fn default() -> Self {
        Self {
            fallback_scaling: DEFAULT_FALLBACK_SCALING,
            redraw: true,
            dpi_aware: false,
        }
    }
}

#[bon]
impl DisplayLayoutConfig {
    /// Creates a new display layout configuration using the builder pattern.
    ///
    /// # Example
    ///
    /// ```
    /// use display_layout_core::DisplayLayoutConfig;
    ///
    /// let config = DisplayLayoutConfig::builder().build();
    /// assert!(config.redraw);
    ///
    /// let config = DisplayLayoutConfig::builder()
    ///     .fallback_scaling(1.25)
    ///     .unwrap()
    ///     .redraw(false)
    ///     .build();
    /// assert_eq!(config.fallback_scaling, 1.25);
    /// ```
    #[builder]
    pub fn new(
        #[builder(
            default = DEFAULT_FALLBACK_SCALING,
            with = |scaling: f64| -> Result<_, DisplayLayoutError> {
                validate_fallback_scaling(scaling)
            },
        )]
        fallback_scaling: f64,
        #[builder(default = true)] redraw: bool,
        #[builder(default = false)] dpi_aware: bool,
    ) -> Self {
        Self {
            fallback_scaling,
            redraw,
            dpi_aware,
        }
    }
}

impl DisplayLayoutConfig {
    /// Fallback expressed as a percentage, the unit monitor scaling uses.
    #[must_use]
    pub fn fallback_scaling_percent(&self) -> f64 {
        self.fallback_scaling * 100.0
    }
}
