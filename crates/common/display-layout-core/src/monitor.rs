use tracing::warn;

use crate::{DisplayMode, MonitorInfo, Oblong};

/// One monitor's geometry and display mode, captured during a refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorSnapshot {
    /// OS device name, e.g. `\\.\DISPLAY1`.
    pub device_name: String,
    /// Full monitor rectangle in virtual-desktop coordinates.
    pub monitor_area: Oblong,
    /// Monitor rectangle minus taskbars and other reserved regions.
    pub work_area: Oblong,
    pub is_primary: bool,
    /// Width of the current display mode, zero when it could not be read.
    pub native_width: u32,
    /// Height of the current display mode, zero when it could not be read.
    pub native_height: u32,
    /// Native height relative to logical height, in percent. Zero when the
    /// display mode is unknown.
    pub scaling_percent: f64,
    /// Set when the logical height was zero and `scaling_percent` holds the
    /// configured fallback instead of a measurement.
    pub degraded: bool,
}

impl MonitorSnapshot {
    /// Builds a snapshot from raw OS data.
    ///
    /// `fallback_percent` replaces the scaling when the logical monitor
    /// height is zero.
    #[must_use]
    pub fn from_parts(
        info: MonitorInfo,
        mode: Option<DisplayMode>,
        fallback_percent: f64,
    ) -> Self {
        let logical_height = info.rect.height();
        let (native_width, native_height, scaling_percent, degraded) = match mode {
            None => (0, 0, 0.0, false),
            Some(mode) => match scaling_percent(mode.pixel_height, logical_height) {
                Some(percent) => (mode.pixel_width, mode.pixel_height, percent, false),
                None => {
                    warn!(
                        device = %info.device_name,
                        "Monitor reports zero height, using fallback scaling {fallback_percent}%"
                    );
                    (mode.pixel_width, mode.pixel_height, fallback_percent, true)
                }
            },
        };

        Self {
            monitor_area: Oblong::from_raw(info.rect),
            work_area: Oblong::from_raw(info.work_area),
            is_primary: info.is_primary(),
            device_name: info.device_name,
            native_width,
            native_height,
            scaling_percent,
            degraded,
        }
    }

    /// Width of the monitor rectangle as the OS reports it.
    #[must_use]
    pub fn logical_width(&self) -> i32 {
        self.monitor_area.width()
    }

    /// Height of the monitor rectangle as the OS reports it.
    #[must_use]
    pub fn logical_height(&self) -> i32 {
        self.monitor_area.height()
    }

    /// Monitor area in native pixels.
    ///
    /// Equal to [`monitor_area`](Self::monitor_area) when the scaling is unknown.
    #[must_use]
    pub fn native_area(&self) -> Oblong {
        self.scale_area(self.monitor_area)
    }

    /// Work area in native pixels.
    #[must_use]
    pub fn native_work_area(&self) -> Oblong {
        self.scale_area(self.work_area)
    }

    fn scale_area(&self, area: Oblong) -> Oblong {
        if self.scaling_percent > 0.0 {
            area.scaled(self.scaling_percent)
        } else {
            area
        }
    }
}

/// `round(native_height / logical_height * 100)`, or `None` when the logical
/// height is not positive.
#[must_use]
pub fn scaling_percent(native_height: u32, logical_height: i32) -> Option<f64> {
    if logical_height <= 0 {
        return None;
    }
    Some((f64::from(native_height) / f64::from(logical_height) * 100.0).round())
}
