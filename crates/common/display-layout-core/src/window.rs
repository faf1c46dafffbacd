use tracing::{debug, warn};

use crate::{
    DisplayBackend, DisplayLayoutConfig, DisplayLayoutError, DisplayLayoutResult, RawRect, Size,
    WindowHandle, screen_name_for_window,
};

/// Per-edge difference between a window's outer rectangle and its visible frame.
///
/// Each edge is `window_rect.<edge> - extended_frame_bounds.<edge>`, so the
/// left and top values are usually negative and right and bottom positive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BorderInset {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl BorderInset {
    #[must_use]
    pub const fn between(window_rect: RawRect, frame: RawRect) -> Self {
        Self {
            left: window_rect.left - frame.left,
            top: window_rect.top - frame.top,
            right: window_rect.right - frame.right,
            bottom: window_rect.bottom - frame.bottom,
        }
    }
}

/// Where the caller wants the visible part of a window to end up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogicalRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl LogicalRect {
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Arguments handed to the OS move call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Placement {
    /// Shifts the origin by the border and grows the size by the border
    /// before dividing by the scaling factor. Sizes are truncated toward zero.
    ///
    /// A non-positive or non-finite `scaling_factor` is replaced by
    /// `fallback_scaling`.
    #[must_use]
    pub fn compute(
        border: BorderInset,
        scaling_factor: f64,
        target: LogicalRect,
        fallback_scaling: f64,
    ) -> Self {
        let scaling = if scaling_factor.is_finite() && scaling_factor > 0.0 {
            scaling_factor
        } else {
            fallback_scaling
        };

        let width = f64::from(target.width + border.left + border.right) / scaling;
        let height = f64::from(target.height + border.top + border.bottom) / scaling;

        Self {
            x: target.x - border.left,
            y: target.y - border.top,
            width: width as i32,
            height: height as i32,
        }
    }
}

/// Border and scaling of a single window, resolved on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowGeometry {
    pub handle: WindowHandle,
    /// Outer window rectangle, including any invisible resize border.
    pub window_rect: RawRect,
    /// Visible frame rectangle, absent for windows that do not report one.
    pub extended_frame_bounds: Option<RawRect>,
    pub border: BorderInset,
    /// Outer width divided by visible width.
    pub scaling_factor: f64,
    /// Device name of the nearest monitor at resolve time.
    pub nearest_monitor_name: Option<String>,
}

impl WindowGeometry {
    /// Derives border and scaling from the two window rectangles.
    #[must_use]
    pub fn from_rects(
        handle: WindowHandle,
        window_rect: RawRect,
        extended_frame_bounds: Option<RawRect>,
        fallback_scaling: f64,
    ) -> Self {
        let (border, scaling_factor) = match extended_frame_bounds {
            Some(frame) => {
                let border = BorderInset::between(window_rect, frame);
                let scaling_factor = if frame.width() == 0 {
                    warn!(
                        "Window {handle:?} has zero-width frame bounds, using fallback scaling {fallback_scaling}"
                    );
                    fallback_scaling
                } else {
                    f64::from(window_rect.width()) / f64::from(frame.width())
                };
                (border, scaling_factor)
            }
            None => (BorderInset::default(), 1.0),
        };

        Self {
            handle,
            window_rect,
            extended_frame_bounds,
            border,
            scaling_factor,
            nearest_monitor_name: None,
        }
    }

    /// Queries both rectangles of `window` and the nearest monitor.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayLayoutError::InvalidWindow`] when the window
    /// rectangle can not be read. Missing frame bounds are not an error.
    pub fn resolve<B: DisplayBackend + ?Sized>(
        backend: &B,
        window: WindowHandle,
        config: &DisplayLayoutConfig,
    ) -> DisplayLayoutResult<Self> {
        let window_rect = backend.window_rect(window).map_err(|e| {
            debug!("Failed to read window rect of {window:?}: {e}");
            DisplayLayoutError::InvalidWindow
        })?;

        let frame = match backend.extended_frame_bounds(window) {
            Ok(frame) => Some(frame),
            Err(e) => {
                debug!("No extended frame bounds for {window:?}: {e}");
                None
            }
        };

        let mut geometry =
            Self::from_rects(window, window_rect, frame, config.fallback_scaling);
        geometry.nearest_monitor_name = screen_name_for_window(backend, window);
        Ok(geometry)
    }

    #[must_use]
    pub fn window_size(&self) -> Size {
        self.window_rect.size()
    }

    #[must_use]
    pub fn frame_size(&self) -> Option<Size> {
        self.extended_frame_bounds.map(|frame| frame.size())
    }

    /// Places this window so its visible frame covers `target`.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayLayoutError::MoveFailed`] when the OS rejects the move.
    pub fn place<B: DisplayBackend + ?Sized>(
        &self,
        backend: &B,
        target: LogicalRect,
        config: &DisplayLayoutConfig,
    ) -> DisplayLayoutResult<Placement> {
        place_window(
            backend,
            self.handle,
            self.border,
            self.scaling_factor,
            target,
            config,
        )
    }
}

/// Moves `window` so that, after the OS applies its border and scaling, the
/// visible frame covers `target`.
///
/// # Errors
///
/// Returns [`DisplayLayoutError::MoveFailed`] when the OS rejects the move.
/// The move is not retried.
pub fn place_window<B: DisplayBackend + ?Sized>(
    backend: &B,
    window: WindowHandle,
    border: BorderInset,
    scaling_factor: f64,
    target: LogicalRect,
    config: &DisplayLayoutConfig,
) -> DisplayLayoutResult<Placement> {
    let placement = Placement::compute(border, scaling_factor, target, config.fallback_scaling);
    debug!("Placing {window:?} for {target:?} at {placement:?}");

    if backend.move_window(
        window,
        placement.x,
        placement.y,
        placement.width,
        placement.height,
        config.redraw,
    ) {
        Ok(placement)
    } else {
        warn!("Moving {window:?} to {placement:?} failed");
        Err(DisplayLayoutError::MoveFailed)
    }
}
