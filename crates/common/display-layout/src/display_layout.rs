use crate::{
    BorderInset, DisplayBackend, DisplayLayoutConfig, DisplayLayoutResult, DisplayRegistry,
    ImplDisplayBackend, LogicalRect, Placement, WindowGeometry, WindowHandle, place_window,
    screen_name_for_window,
};

/// Entry point tying a backend, a configuration and the cached registry together.
///
/// The registry is read on first access and kept until [`refresh`](Self::refresh)
/// replaces it. Window lookups always go to the backend.
#[derive(Debug, Clone)]
pub struct DisplayLayout<B: DisplayBackend = ImplDisplayBackend> {
    backend: B,
    config: DisplayLayoutConfig,
    registry: Option<DisplayRegistry>,
}

impl DisplayLayout {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DisplayLayoutConfig::default())
    }

    #[must_use]
    pub fn with_config(config: DisplayLayoutConfig) -> Self {
        Self::with_backend(ImplDisplayBackend::new(&config), config)
    }
}

impl Default for DisplayLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: DisplayBackend> DisplayLayout<B> {
    #[must_use]
    pub fn with_backend(backend: B, config: DisplayLayoutConfig) -> Self {
        Self {
            backend,
            config,
            registry: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &DisplayLayoutConfig {
        &self.config
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Re-reads the monitor layout, discarding the previous registry.
    ///
    /// # Errors
    ///
    /// Returns an error when the monitor enumeration fails. The previous
    /// registry is kept in that case.
    pub fn refresh(&mut self) -> DisplayLayoutResult<&DisplayRegistry> {
        let registry = DisplayRegistry::refresh(&self.backend, &self.config)?;
        Ok(self.registry.insert(registry))
    }

    /// Returns the cached registry, reading it first if this is the first access.
    ///
    /// # Errors
    ///
    /// Returns an error when the initial read fails.
    pub fn registry(&mut self) -> DisplayLayoutResult<&DisplayRegistry> {
        match self.registry {
            Some(ref registry) => Ok(registry),
            None => self.refresh(),
        }
    }

    /// Returns the cached registry without touching the backend.
    #[must_use]
    pub fn cached_registry(&self) -> Option<&DisplayRegistry> {
        self.registry.as_ref()
    }

    /// Device name of the monitor nearest to `window`.
    #[must_use]
    pub fn screen_name_for_window(&self, window: WindowHandle) -> Option<String> {
        screen_name_for_window(&self.backend, window)
    }

    /// # Errors
    ///
    /// Returns [`DisplayLayoutError::InvalidWindow`](crate::DisplayLayoutError::InvalidWindow)
    /// when the window can not be queried.
    pub fn resolve_window(&self, window: WindowHandle) -> DisplayLayoutResult<WindowGeometry> {
        WindowGeometry::resolve(&self.backend, window, &self.config)
    }

    /// Moves `window` so its visible frame covers `target`.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayLayoutError::MoveFailed`](crate::DisplayLayoutError::MoveFailed)
    /// when the OS rejects the move.
    pub fn place_window(
        &self,
        window: WindowHandle,
        border: BorderInset,
        scaling_factor: f64,
        target: LogicalRect,
    ) -> DisplayLayoutResult<Placement> {
        place_window(
            &self.backend,
            window,
            border,
            scaling_factor,
            target,
            &self.config,
        )
    }

    /// Moves a resolved window so its visible frame covers `target`.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayLayoutError::MoveFailed`](crate::DisplayLayoutError::MoveFailed)
    /// when the OS rejects the move.
    pub fn place_geometry(
        &self,
        geometry: &WindowGeometry,
        target: LogicalRect,
    ) -> DisplayLayoutResult<Placement> {
        geometry.place(&self.backend, target, &self.config)
    }
}
