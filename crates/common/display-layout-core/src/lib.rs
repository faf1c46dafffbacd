mod backend;
mod config;
mod error;
mod monitor;
mod rect;
mod registry;
mod window;

pub use backend::{
    DisplayBackend, DisplayMode, MONITORINFOF_PRIMARY, MonitorHandle, MonitorInfo,
    SystemMetric, WindowHandle, screen_name_for_window,
};
pub use config::DisplayLayoutConfig;
pub use error::{DisplayLayoutError, DisplayLayoutResult};
pub use monitor::{MonitorSnapshot, scaling_percent};
pub use rect::{Oblong, RawRect, Size};
pub use registry::DisplayRegistry;
pub use window::{BorderInset, LogicalRect, Placement, WindowGeometry, place_window};
