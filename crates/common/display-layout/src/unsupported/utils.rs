use crate::{DisplayLayoutError, DisplayLayoutResult, WindowHandle};

pub fn is_window(_window: WindowHandle) -> bool {
    false
}

pub fn windows_for_process(_process_name: &str) -> DisplayLayoutResult<Vec<WindowHandle>> {
    Err(DisplayLayoutError::Unsupported)
}
