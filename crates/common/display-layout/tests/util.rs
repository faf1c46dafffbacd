//! Common test utilities for display-layout integration tests

use display_layout::{
    DisplayBackend, DisplayLayoutError, DisplayLayoutResult, DisplayMode, MonitorHandle,
    MonitorInfo, RawRect, SystemMetric, WindowHandle,
};
use std::cell::Cell;
use std::env;

/// Check if integration tests against the live window system should run
#[allow(dead_code)]
pub fn should_run_integration_tests() -> bool {
    env::var("INTEGRATION_TEST")
        .map(|v| v == "1")
        .unwrap_or(false)
}

/// Install a test subscriber so `tracing` output shows up with `--nocapture`
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// One monitor at the origin plus a single shadowed window on it.
///
/// Every enumeration is counted so tests can tell cached reads from fresh ones.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct SingleMonitorBackend {
    pub width: i32,
    pub height: i32,
    pub enumerations: Cell<usize>,
    pub fail_enumeration: Cell<bool>,
}

#[allow(dead_code)]
pub const WINDOW: WindowHandle = WindowHandle(0x42);
#[allow(dead_code)]
const MONITOR: MonitorHandle = MonitorHandle(1);
#[allow(dead_code)]
const DEVICE: &str = r"\\.\DISPLAY1";

#[allow(dead_code)]
impl SingleMonitorBackend {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn enumeration_count(&self) -> usize {
        self.enumerations.get()
    }
}

impl DisplayBackend for SingleMonitorBackend {
    fn metric(&self, metric: SystemMetric) -> i32 {
        match metric {
            SystemMetric::VirtualWidth => self.width,
            SystemMetric::VirtualHeight => self.height,
            SystemMetric::MonitorCount => 1,
            SystemMetric::SameDisplayFormat => 1,
            SystemMetric::VirtualLeft | SystemMetric::VirtualTop => 0,
        }
    }

    fn enumerate_monitors(&self) -> DisplayLayoutResult<Vec<MonitorHandle>> {
        self.enumerations.set(self.enumerations.get() + 1);
        if self.fail_enumeration.get() {
            return Err(DisplayLayoutError::EnumerationFailed);
        }
        Ok(vec![MONITOR])
    }

    fn monitor_info(&self, monitor: MonitorHandle) -> DisplayLayoutResult<MonitorInfo> {
        if monitor != MONITOR {
            return Err(DisplayLayoutError::MonitorInfoUnavailable);
        }
        Ok(MonitorInfo {
            rect: RawRect::new(0, 0, self.width, self.height),
            work_area: RawRect::new(0, 0, self.width, self.height - 48),
            flags: display_layout::MONITORINFOF_PRIMARY,
            device_name: DEVICE.to_owned(),
        })
    }

    fn display_mode(&self, _device_name: &str) -> DisplayLayoutResult<DisplayMode> {
        Ok(DisplayMode {
            pixel_width: self.width as u32 * 3 / 2,
            pixel_height: self.height as u32 * 3 / 2,
        })
    }

    fn window_rect(&self, window: WindowHandle) -> DisplayLayoutResult<RawRect> {
        if window != WINDOW {
            return Err(DisplayLayoutError::InvalidWindow);
        }
        Ok(RawRect::new(93, 193, 707, 607))
    }

    fn extended_frame_bounds(&self, window: WindowHandle) -> DisplayLayoutResult<RawRect> {
        if window != WINDOW {
            return Err(DisplayLayoutError::InvalidWindow);
        }
        Ok(RawRect::new(100, 200, 700, 600))
    }

    fn nearest_monitor(&self, window: WindowHandle) -> Option<MonitorHandle> {
        (window == WINDOW).then_some(MONITOR)
    }

    fn move_window(
        &self,
        window: WindowHandle,
        _x: i32,
        _y: i32,
        _width: i32,
        _height: i32,
        _redraw: bool,
    ) -> bool {
        window == WINDOW
    }
}
