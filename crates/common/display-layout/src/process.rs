/// Compares process module names case-insensitively, ignoring a trailing `.exe`.
#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
pub(crate) fn process_name_matches(module_name: &str, wanted: &str) -> bool {
    let wanted = wanted.trim();
    !wanted.is_empty() && normalize(module_name) == normalize(wanted)
}

fn normalize(name: &str) -> String {
    let lower = name.to_lowercase();
    match lower.strip_suffix(".exe") {
        Some(stem) => stem.to_owned(),
        None => lower,
    }
}
