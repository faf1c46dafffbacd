use crate::{
    DisplayBackend, DisplayLayoutConfig, DisplayLayoutError, DisplayLayoutResult, DisplayMode,
    MonitorHandle, MonitorInfo, RawRect, SystemMetric, WindowHandle,
};
use tracing::debug;

/// Backend for targets without a monitor API. Every query reports
/// [`DisplayLayoutError::Unsupported`].
#[derive(Debug, Clone, Default)]
pub struct ImplDisplayBackend {}

impl ImplDisplayBackend {
    pub(crate) fn new(config: &DisplayLayoutConfig) -> Self {
        if config.dpi_aware {
            debug!("DPI awareness is not applicable on this platform");
        }
        Self {}
    }
}

impl DisplayBackend for ImplDisplayBackend {
    fn metric(&self, _metric: SystemMetric) -> i32 {
        0
    }

    fn enumerate_monitors(&self) -> DisplayLayoutResult<Vec<MonitorHandle>> {
        Err(DisplayLayoutError::Unsupported)
    }

    fn monitor_info(&self, _monitor: MonitorHandle) -> DisplayLayoutResult<MonitorInfo> {
        Err(DisplayLayoutError::Unsupported)
    }

    fn display_mode(&self, _device_name: &str) -> DisplayLayoutResult<DisplayMode> {
        Err(DisplayLayoutError::Unsupported)
    }

    fn window_rect(&self, _window: WindowHandle) -> DisplayLayoutResult<RawRect> {
        Err(DisplayLayoutError::Unsupported)
    }

    fn extended_frame_bounds(&self, _window: WindowHandle) -> DisplayLayoutResult<RawRect> {
        Err(DisplayLayoutError::Unsupported)
    }

    fn nearest_monitor(&self, _window: WindowHandle) -> Option<MonitorHandle> {
        None
    }

    fn move_window(
        &self,
        _window: WindowHandle,
        _x: i32,
        _y: i32,
        _width: i32,
        _height: i32,
        _redraw: bool,
    ) -> bool {
        false
    }
}
