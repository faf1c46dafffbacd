pub use display_layout_core::*;

mod display_layout;
mod process;

pub use display_layout::*;

#[cfg(target_os = "windows")]
#[path = "windows/mod.rs"]
mod platform;

#[cfg(not(target_os = "windows"))]
#[path = "unsupported/mod.rs"]
mod platform;

pub use platform::impl_display_backend::ImplDisplayBackend;

// For platform specific util API's
pub use platform::utils;

/// Reads the current monitor layout with the platform backend and default config.
///
/// # Errors
///
/// Returns an error when monitors can not be enumerated on this platform.
pub fn current_registry() -> DisplayLayoutResult<DisplayRegistry> {
    let mut layout = DisplayLayout::new();
    layout.refresh().cloned()
}
