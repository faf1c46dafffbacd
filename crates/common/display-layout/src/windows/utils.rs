use crate::process::process_name_matches;
use crate::{DisplayLayoutError, DisplayLayoutResult, WindowHandle};
use std::ffi::OsString;
use std::os::windows::ffi::OsStringExt;
use tracing::debug;
use windows_sys::Win32::{
    Foundation::{CloseHandle, HWND, LPARAM},
    System::{
        ProcessStatus::GetModuleBaseNameW,
        Threading::{OpenProcess, PROCESS_QUERY_INFORMATION, PROCESS_VM_READ},
    },
    UI::WindowsAndMessaging::{
        EnumWindows, GW_OWNER, GetWindow, GetWindowThreadProcessId, IsWindow, IsWindowVisible,
    },
};
use windows_sys::core::BOOL;

/// Returns whether `window` still refers to an existing window.
pub fn is_window(window: WindowHandle) -> bool {
    let hwnd = window.0 as HWND;
    !hwnd.is_null() && unsafe { IsWindow(hwnd) } != 0
}

/// Visible, unowned top-level windows whose process module name matches `process_name`.
///
/// The comparison ignores case and an `.exe` suffix. Windows whose process can
/// not be opened are skipped.
pub fn windows_for_process(process_name: &str) -> DisplayLayoutResult<Vec<WindowHandle>> {
    let mut candidates: Vec<HWND> = Vec::new();
    let ok = unsafe {
        EnumWindows(
            Some(collect_top_level),
            &mut candidates as *mut Vec<HWND> as LPARAM,
        )
    };
    if ok == 0 {
        return Err(DisplayLayoutError::platform("failed to enumerate windows"));
    }

    let matches: Vec<WindowHandle> = candidates
        .into_iter()
        .filter(|&hwnd| {
            match get_window_process_id(hwnd).and_then(get_process_name) {
                Ok(name) => process_name_matches(&name, process_name),
                Err(e) => {
                    debug!("Skipping window {:?}: {}", hwnd, e);
                    false
                }
            }
        })
        .map(|hwnd| WindowHandle(hwnd as isize))
        .collect();

    debug!(
        "Found {} window(s) for process {}",
        matches.len(),
        process_name
    );
    Ok(matches)
}

unsafe extern "system" fn collect_top_level(hwnd: HWND, data: LPARAM) -> BOOL {
    let candidates = unsafe { &mut *(data as *mut Vec<HWND>) };
    let visible = unsafe { IsWindowVisible(hwnd) } != 0;
    let unowned = unsafe { GetWindow(hwnd, GW_OWNER) }.is_null();
    if visible && unowned {
        candidates.push(hwnd);
    }
    1
}

pub(crate) fn get_window_process_id(hwnd: HWND) -> DisplayLayoutResult<u32> {
    let mut process_id = 0u32;
    unsafe {
        GetWindowThreadProcessId(hwnd, &mut process_id);
    }

    if process_id == 0 {
        return Err(DisplayLayoutError::platform("failed to get process ID"));
    }

    Ok(process_id)
}

pub(crate) fn get_process_name(process_id: u32) -> DisplayLayoutResult<String> {
    let process_handle =
        unsafe { OpenProcess(PROCESS_QUERY_INFORMATION | PROCESS_VM_READ, 0, process_id) };

    if process_handle.is_null() {
        return Err(DisplayLayoutError::platform("failed to open process"));
    }

    struct HandleGuard(windows_sys::Win32::Foundation::HANDLE);
    impl Drop for HandleGuard {
        fn drop(&mut self) {
            unsafe { CloseHandle(self.0) };
        }
    }
    let _guard = HandleGuard(process_handle);

    let mut buffer = [0u16; 260];
    let len = unsafe {
        GetModuleBaseNameW(
            process_handle,
            std::ptr::null_mut(),
            buffer.as_mut_ptr(),
            buffer.len() as u32,
        )
    };

    if len == 0 {
        return Err(DisplayLayoutError::platform("failed to get module name"));
    }

    Ok(OsString::from_wide(&buffer[..len as usize])
        .to_string_lossy()
        .into_owned())
}
