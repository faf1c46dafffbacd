use tracing::{debug, warn};

use crate::{
    DisplayBackend, DisplayLayoutConfig, DisplayLayoutResult, MonitorSnapshot, Oblong,
    SystemMetric,
};

/// The monitor layout at the time of the last refresh.
///
/// A registry is never updated in place: [`DisplayRegistry::refresh`] builds
/// a new one and the caller swaps it in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayRegistry {
    pub monitors: Vec<MonitorSnapshot>,
    /// Monitor count as reported by the OS metric, which only counts
    /// display monitors and can differ from `monitors.len()`.
    pub monitor_count: i32,
    pub virtual_left: i32,
    pub virtual_top: i32,
    pub virtual_width: i32,
    pub virtual_height: i32,
    pub same_display_format: bool,
}

impl DisplayRegistry {
    /// Reads the current monitor layout through `backend`.
    ///
    /// Monitors whose info can not be queried are left out; monitors whose
    /// display mode can not be read keep zero native size and scaling.
    ///
    /// # Errors
    ///
    /// Returns an error only when the monitor enumeration itself fails.
    pub fn refresh<B: DisplayBackend + ?Sized>(
        backend: &B,
        config: &DisplayLayoutConfig,
    ) -> DisplayLayoutResult<Self> {
        let virtual_left = backend.metric(SystemMetric::VirtualLeft);
        let virtual_top = backend.metric(SystemMetric::VirtualTop);
        let virtual_width = backend.metric(SystemMetric::VirtualWidth);
        let virtual_height = backend.metric(SystemMetric::VirtualHeight);
        let monitor_count = backend.metric(SystemMetric::MonitorCount);
        let same_display_format = backend.metric(SystemMetric::SameDisplayFormat) != 0;

        let handles = backend.enumerate_monitors()?;
        debug!("Enumerated {} monitor handles", handles.len());

        let fallback_percent = config.fallback_scaling_percent();
        let monitors: Vec<MonitorSnapshot> = handles
            .into_iter()
            .filter_map(|handle| {
                let info = match backend.monitor_info(handle) {
                    Ok(info) => info,
                    Err(e) => {
                        warn!("Skipping monitor {handle:?}: {e}");
                        return None;
                    }
                };

                let mode = match backend.display_mode(&info.device_name) {
                    Ok(mode) => Some(mode),
                    Err(e) => {
                        debug!(
                            device = %info.device_name,
                            "No display mode, native size left at zero: {e}"
                        );
                        None
                    }
                };

                Some(MonitorSnapshot::from_parts(info, mode, fallback_percent))
            })
            .collect();

        debug!(
            "Display registry refreshed: {} monitors, virtual desktop {}x{} at ({}, {})",
            monitors.len(),
            virtual_width,
            virtual_height,
            virtual_left,
            virtual_top
        );

        Ok(Self {
            monitors,
            monitor_count,
            virtual_left,
            virtual_top,
            virtual_width,
            virtual_height,
            same_display_format,
        })
    }

    #[must_use]
    pub fn primary(&self) -> Option<&MonitorSnapshot> {
        self.monitors.iter().find(|m| m.is_primary)
    }

    #[must_use]
    pub fn by_device_name(&self, device_name: &str) -> Option<&MonitorSnapshot> {
        self.monitors.iter().find(|m| m.device_name == device_name)
    }

    /// Bounding box of all monitors, inclusive like the monitor areas.
    #[must_use]
    pub fn virtual_desktop(&self) -> Oblong {
        Oblong::new(
            self.virtual_left,
            self.virtual_top,
            self.virtual_left + self.virtual_width - 1,
            self.virtual_top + self.virtual_height - 1,
        )
    }
}
