use crate::{
    DisplayBackend, DisplayLayoutConfig, DisplayLayoutError, DisplayLayoutResult, DisplayMode,
    MonitorHandle, MonitorInfo, RawRect, SystemMetric, WindowHandle,
};
use std::ffi::OsString;
use std::os::windows::ffi::OsStringExt;
use std::sync::OnceLock;
use tracing::{debug, warn};

use windows_sys::Win32::{
    Foundation::{HWND, LPARAM, RECT},
    Graphics::{
        Dwm::{DWMWA_EXTENDED_FRAME_BOUNDS, DwmGetWindowAttribute},
        Gdi::{
            DEVMODEW, ENUM_CURRENT_SETTINGS, EnumDisplayMonitors, EnumDisplaySettingsW,
            GetMonitorInfoW, HDC, HMONITOR, MONITOR_DEFAULTTONEAREST, MONITORINFO, MONITORINFOEXW,
            MonitorFromWindow,
        },
    },
    UI::{
        HiDpi::{DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2, SetProcessDpiAwarenessContext},
        WindowsAndMessaging::{
            GetSystemMetrics, GetWindowRect, MoveWindow, SM_CMONITORS, SM_CXVIRTUALSCREEN,
            SM_CYVIRTUALSCREEN, SM_SAMEDISPLAYFORMAT, SM_XVIRTUALSCREEN, SM_YVIRTUALSCREEN,
        },
    },
};
use windows_sys::core::BOOL;

/// Win32 implementation of [`DisplayBackend`].
#[derive(Debug, Clone, Default)]
pub struct ImplDisplayBackend {}

impl ImplDisplayBackend {
    pub(crate) fn new(config: &DisplayLayoutConfig) -> Self {
        if config.dpi_aware {
            enable_per_monitor_dpi_awareness();
        }
        Self {}
    }
}

static DPI_AWARENESS: OnceLock<bool> = OnceLock::new();

/// Opts the process into per-monitor (v2) DPI awareness so monitor and window
/// rectangles come back in physical pixels.
///
/// Awareness is process-wide and can only be set once, so the call is made on
/// the first request and later requests return its outcome.
fn enable_per_monitor_dpi_awareness() -> bool {
    *DPI_AWARENESS.get_or_init(|| {
        let ok =
            unsafe { SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2) };
        if ok == 0 {
            // Fails when a manifest already set the awareness.
            warn!("Failed to set per-monitor DPI awareness, keeping the process default");
            false
        } else {
            debug!("Per-monitor DPI awareness enabled");
            true
        }
    })
}

#[inline]
fn hwnd(window: WindowHandle) -> HWND {
    window.0 as HWND
}

#[inline]
fn raw_rect(rect: &RECT) -> RawRect {
    RawRect::new(rect.left, rect.top, rect.right, rect.bottom)
}

fn wide_to_string(buffer: &[u16]) -> String {
    let len = buffer.iter().position(|&c| c == 0).unwrap_or(buffer.len());
    OsString::from_wide(&buffer[..len])
        .to_string_lossy()
        .into_owned()
}

fn to_wide_null(value: &str) -> Vec<u16> {
    value.encode_utf16().chain(std::iter::once(0)).collect()
}

unsafe extern "system" fn collect_monitor(
    monitor: HMONITOR,
    _hdc: HDC,
    _clip: *mut RECT,
    data: LPARAM,
) -> BOOL {
    let handles = unsafe { &mut *(data as *mut Vec<MonitorHandle>) };
    handles.push(MonitorHandle(monitor as isize));
    1
}

impl DisplayBackend for ImplDisplayBackend {
    fn metric(&self, metric: SystemMetric) -> i32 {
        let index = match metric {
            SystemMetric::VirtualLeft => SM_XVIRTUALSCREEN,
            SystemMetric::VirtualTop => SM_YVIRTUALSCREEN,
            SystemMetric::VirtualWidth => SM_CXVIRTUALSCREEN,
            SystemMetric::VirtualHeight => SM_CYVIRTUALSCREEN,
            SystemMetric::MonitorCount => SM_CMONITORS,
            SystemMetric::SameDisplayFormat => SM_SAMEDISPLAYFORMAT,
        };
        unsafe { GetSystemMetrics(index) }
    }

    fn enumerate_monitors(&self) -> DisplayLayoutResult<Vec<MonitorHandle>> {
        let mut handles: Vec<MonitorHandle> = Vec::new();
        let ok = unsafe {
            EnumDisplayMonitors(
                std::ptr::null_mut(),
                std::ptr::null(),
                Some(collect_monitor),
                &mut handles as *mut Vec<MonitorHandle> as LPARAM,
            )
        };
        if ok == 0 {
            return Err(DisplayLayoutError::EnumerationFailed);
        }
        Ok(handles)
    }

    fn monitor_info(&self, monitor: MonitorHandle) -> DisplayLayoutResult<MonitorInfo> {
        let mut info: MONITORINFOEXW = unsafe { std::mem::zeroed() };
        info.monitorInfo.cbSize = std::mem::size_of::<MONITORINFOEXW>() as u32;

        let ok = unsafe {
            GetMonitorInfoW(
                monitor.0 as HMONITOR,
                &mut info as *mut MONITORINFOEXW as *mut MONITORINFO,
            )
        };
        if ok == 0 {
            return Err(DisplayLayoutError::MonitorInfoUnavailable);
        }

        Ok(MonitorInfo {
            rect: raw_rect(&info.monitorInfo.rcMonitor),
            work_area: raw_rect(&info.monitorInfo.rcWork),
            flags: info.monitorInfo.dwFlags,
            device_name: wide_to_string(&info.szDevice),
        })
    }

    fn display_mode(&self, device_name: &str) -> DisplayLayoutResult<DisplayMode> {
        let name = to_wide_null(device_name);
        let mut mode: DEVMODEW = unsafe { std::mem::zeroed() };
        mode.dmSize = std::mem::size_of::<DEVMODEW>() as u16;

        let ok = unsafe { EnumDisplaySettingsW(name.as_ptr(), ENUM_CURRENT_SETTINGS, &mut mode) };
        if ok == 0 {
            return Err(DisplayLayoutError::DisplayModeUnavailable {
                device_name: device_name.to_owned(),
            });
        }

        Ok(DisplayMode {
            pixel_width: mode.dmPelsWidth,
            pixel_height: mode.dmPelsHeight,
        })
    }

    fn window_rect(&self, window: WindowHandle) -> DisplayLayoutResult<RawRect> {
        let mut rect: RECT = unsafe { std::mem::zeroed() };
        let ok = unsafe { GetWindowRect(hwnd(window), &mut rect) };
        if ok == 0 {
            return Err(DisplayLayoutError::InvalidWindow);
        }
        Ok(raw_rect(&rect))
    }

    fn extended_frame_bounds(&self, window: WindowHandle) -> DisplayLayoutResult<RawRect> {
        let mut rect: RECT = unsafe { std::mem::zeroed() };
        let hr = unsafe {
            DwmGetWindowAttribute(
                hwnd(window),
                DWMWA_EXTENDED_FRAME_BOUNDS as _,
                &mut rect as *mut RECT as *mut _,
                std::mem::size_of::<RECT>() as u32,
            )
        };
        if hr < 0 {
            return Err(DisplayLayoutError::platform(format!(
                "DwmGetWindowAttribute failed with HRESULT {hr:#010x}"
            )));
        }
        Ok(raw_rect(&rect))
    }

    fn nearest_monitor(&self, window: WindowHandle) -> Option<MonitorHandle> {
        let monitor = unsafe { MonitorFromWindow(hwnd(window), MONITOR_DEFAULTTONEAREST) };
        if monitor.is_null() {
            None
        } else {
            Some(MonitorHandle(monitor as isize))
        }
    }

    fn move_window(
        &self,
        window: WindowHandle,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        redraw: bool,
    ) -> bool {
        unsafe { MoveWindow(hwnd(window), x, y, width, height, BOOL::from(redraw)) != 0 }
    }
}
