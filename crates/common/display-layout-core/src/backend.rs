use crate::{DisplayLayoutResult, RawRect};

/// `dwFlags` bit marking the primary monitor.
pub const MONITORINFOF_PRIMARY: u32 = 0x0000_0001;

/// Opaque window handle (`HWND` on Windows) stored as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub isize);

/// Opaque monitor handle (`HMONITOR` on Windows) stored as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonitorHandle(pub isize);

/// System metrics read when refreshing the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemMetric {
    VirtualLeft,
    VirtualTop,
    VirtualWidth,
    VirtualHeight,
    MonitorCount,
    SameDisplayFormat,
}

/// Monitor information as the OS reports it, before any conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorInfo {
    pub rect: RawRect,
    pub work_area: RawRect,
    pub flags: u32,
    pub device_name: String,
}

impl MonitorInfo {
    #[must_use]
    pub fn is_primary(&self) -> bool {
        self.flags & MONITORINFOF_PRIMARY != 0
    }
}

/// Current display mode of a monitor in native pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMode {
    pub pixel_width: u32,
    pub pixel_height: u32,
}

/// Window-system capabilities the registry and the resolver are built on.
///
/// Every call is synchronous and expected to return promptly.
pub trait DisplayBackend {
    fn metric(&self, metric: SystemMetric) -> i32;

    /// Returns every monitor handle in the order the OS reports them.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayLayoutError::EnumerationFailed`](crate::DisplayLayoutError::EnumerationFailed)
    /// when the enumeration itself fails.
    fn enumerate_monitors(&self) -> DisplayLayoutResult<Vec<MonitorHandle>>;

    /// # Errors
    ///
    /// Returns an error when the monitor can not be queried.
    fn monitor_info(&self, monitor: MonitorHandle) -> DisplayLayoutResult<MonitorInfo>;

    /// # Errors
    ///
    /// Returns an error when no current display mode is available for the device.
    fn display_mode(&self, device_name: &str) -> DisplayLayoutResult<DisplayMode>;

    /// # Errors
    ///
    /// Returns an error when the handle does not name a window.
    fn window_rect(&self, window: WindowHandle) -> DisplayLayoutResult<RawRect>;

    /// # Errors
    ///
    /// Returns an error when the window does not expose extended frame bounds.
    fn extended_frame_bounds(&self, window: WindowHandle) -> DisplayLayoutResult<RawRect>;

    fn nearest_monitor(&self, window: WindowHandle) -> Option<MonitorHandle>;

    fn move_window(
        &self,
        window: WindowHandle,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        redraw: bool,
    ) -> bool;
}

/// Device name of the monitor nearest to `window`, straight from the OS.
///
/// Independent of any registry snapshot, so it can disagree with one taken
/// before the monitor layout changed.
pub fn screen_name_for_window<B: DisplayBackend + ?Sized>(
    backend: &B,
    window: WindowHandle,
) -> Option<String> {
    let monitor = backend.nearest_monitor(window)?;
    backend
        .monitor_info(monitor)
        .ok()
        .map(|info| info.device_name)
}
