//! Simulated window system shared by the display-layout-core integration tests

use display_layout_core::{
    DisplayBackend, DisplayLayoutError, DisplayLayoutResult, DisplayMode, MonitorHandle,
    MonitorInfo, RawRect, SystemMetric, WindowHandle,
};
use std::cell::RefCell;
use std::collections::HashMap;

/// A monitor as the simulated OS knows it.
#[derive(Debug, Clone)]
pub struct FakeMonitor {
    pub info: MonitorInfo,
    pub mode: Option<DisplayMode>,
    /// When set, querying this monitor's info fails.
    pub info_fails: bool,
}

/// A window as the simulated OS knows it.
#[derive(Debug, Clone)]
pub struct FakeWindow {
    pub rect: RawRect,
    pub frame: Option<RawRect>,
    pub nearest: Option<MonitorHandle>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCall {
    pub window: WindowHandle,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub redraw: bool,
}

#[derive(Debug, Default)]
pub struct FakeBackend {
    pub monitors: Vec<(MonitorHandle, FakeMonitor)>,
    pub windows: HashMap<WindowHandle, FakeWindow>,
    pub metrics: HashMap<SystemMetric, i32>,
    pub enumeration_fails: bool,
    pub move_fails: bool,
    pub moves: RefCell<Vec<MoveCall>>,
}

#[allow(dead_code)]
impl FakeBackend {
    /// Two side-by-side monitors: a 1080p primary and a 4K panel scaled to 200%.
    pub fn dual_monitor() -> Self {
        let mut backend = Self::default();
        backend.add_monitor(
            1,
            monitor_info(r"\\.\DISPLAY1", RawRect::new(0, 0, 1920, 1080), 40, true),
            Some(mode(1920, 1080)),
        );
        backend.add_monitor(
            2,
            monitor_info(r"\\.\DISPLAY2", RawRect::new(1920, 0, 3840, 1080), 0, false),
            Some(mode(3840, 2160)),
        );
        backend.set_virtual_desktop(0, 0, 3840, 1080);
        backend.metrics.insert(SystemMetric::MonitorCount, 2);
        backend.metrics.insert(SystemMetric::SameDisplayFormat, 0);
        backend
    }

    pub fn add_monitor(&mut self, handle: isize, info: MonitorInfo, mode: Option<DisplayMode>) {
        self.monitors.push((
            MonitorHandle(handle),
            FakeMonitor {
                info,
                mode,
                info_fails: false,
            },
        ));
    }

    pub fn fail_monitor_info(&mut self, handle: isize) {
        for (h, monitor) in &mut self.monitors {
            if h.0 == handle {
                monitor.info_fails = true;
            }
        }
    }

    pub fn set_virtual_desktop(&mut self, left: i32, top: i32, width: i32, height: i32) {
        self.metrics.insert(SystemMetric::VirtualLeft, left);
        self.metrics.insert(SystemMetric::VirtualTop, top);
        self.metrics.insert(SystemMetric::VirtualWidth, width);
        self.metrics.insert(SystemMetric::VirtualHeight, height);
    }

    pub fn add_window(
        &mut self,
        handle: isize,
        rect: RawRect,
        frame: Option<RawRect>,
        nearest: Option<isize>,
    ) -> WindowHandle {
        let window = WindowHandle(handle);
        self.windows.insert(
            window,
            FakeWindow {
                rect,
                frame,
                nearest: nearest.map(MonitorHandle),
            },
        );
        window
    }

    pub fn recorded_moves(&self) -> Vec<MoveCall> {
        self.moves.borrow().clone()
    }
}

impl DisplayBackend for FakeBackend {
    fn metric(&self, metric: SystemMetric) -> i32 {
        self.metrics.get(&metric).copied().unwrap_or_default()
    }

    fn enumerate_monitors(&self) -> DisplayLayoutResult<Vec<MonitorHandle>> {
        if self.enumeration_fails {
            return Err(DisplayLayoutError::EnumerationFailed);
        }
        Ok(self.monitors.iter().map(|(handle, _)| *handle).collect())
    }

    fn monitor_info(&self, monitor: MonitorHandle) -> DisplayLayoutResult<MonitorInfo> {
        self.monitors
            .iter()
            .find(|(handle, m)| *handle == monitor && !m.info_fails)
            .map(|(_, m)| m.info.clone())
            .ok_or(DisplayLayoutError::MonitorInfoUnavailable)
    }

    fn display_mode(&self, device_name: &str) -> DisplayLayoutResult<DisplayMode> {
        self.monitors
            .iter()
            .find(|(_, m)| m.info.device_name == device_name)
            .and_then(|(_, m)| m.mode)
            .ok_or_else(|| DisplayLayoutError::DisplayModeUnavailable {
                device_name: device_name.to_owned(),
            })
    }

    fn window_rect(&self, window: WindowHandle) -> DisplayLayoutResult<RawRect> {
        self.windows
            .get(&window)
            .map(|w| w.rect)
            .ok_or(DisplayLayoutError::InvalidWindow)
    }

    fn extended_frame_bounds(&self, window: WindowHandle) -> DisplayLayoutResult<RawRect> {
        self.windows
            .get(&window)
            .and_then(|w| w.frame)
            .ok_or_else(|| DisplayLayoutError::platform("frame bounds not supported"))
    }

    fn nearest_monitor(&self, window: WindowHandle) -> Option<MonitorHandle> {
        self.windows.get(&window).and_then(|w| w.nearest)
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
        self.moves.borrow_mut().push(MoveCall {
            window,
            x,
            y,
            width,
            height,
            redraw,
        });
        !self.move_fails && self.windows.contains_key(&window)
    }
}

/// Builds monitor info whose work area loses `taskbar` rows at the bottom.
pub fn monitor_info(name: &str, rect: RawRect, taskbar: i32, primary: bool) -> MonitorInfo {
    MonitorInfo {
        rect,
        work_area: RawRect::new(rect.left, rect.top, rect.right, rect.bottom - taskbar),
        flags: u32::from(primary),
        device_name: name.to_owned(),
    }
}

pub fn mode(pixel_width: u32, pixel_height: u32) -> DisplayMode {
    DisplayMode {
        pixel_width,
        pixel_height,
    }
}
