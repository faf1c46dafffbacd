//! Lists every monitor and, optionally, moves the windows of one process
//!
//! Without arguments it prints the monitor layout. Given a process name it
//! also resolves each of that process's top-level windows and places its
//! visible frame at logical (1, 1) with a 400x500 size.
//!
//! Usage: cargo run --example list_displays -- [process-name]

use display_layout::{DisplayLayout, LogicalRect, utils};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut layout = DisplayLayout::new();
    let registry = layout.registry()?;

    println!("🖥️  {} monitor(s)", registry.monitors.len());
    println!(
        "   Virtual desktop: {} (same format: {})",
        registry.virtual_desktop(),
        registry.same_display_format
    );
    println!();

    for monitor in &registry.monitors {
        let marker = if monitor.is_primary { " (primary)" } else { "" };
        println!("📺 {}{}", monitor.device_name, marker);
        println!("   Monitor area: {}", monitor.monitor_area);
        println!("   Work area:    {}", monitor.work_area);
        println!(
            "   Native:       {}x{} at {}%",
            monitor.native_width, monitor.native_height, monitor.scaling_percent
        );
        if monitor.degraded {
            println!("   ⚠️  Scaling could not be derived, using fallback");
        }
        println!();
    }

    let Some(process_name) = std::env::args().nth(1) else {
        return Ok(());
    };

    let windows = utils::windows_for_process(&process_name)?;
    if windows.is_empty() {
        println!("❌ No windows found for {process_name}");
        return Ok(());
    }

    let target = LogicalRect::new(1, 1, 400, 500);
    for window in windows {
        if !utils::is_window(window) {
            println!("⚠️  Window {:?} closed before it could be placed", window);
            continue;
        }
        let geometry = layout.resolve_window(window)?;
        println!("🪟 Window {:?}", window);
        println!(
            "   Screen: {}",
            geometry.nearest_monitor_name.as_deref().unwrap_or("Unknown")
        );
        println!("   Window size: {}", geometry.window_size());
        if let Some(frame) = geometry.frame_size() {
            println!("   Frame size:  {frame}");
        }
        println!(
            "   Border: left {} top {} right {} bottom {}",
            geometry.border.left, geometry.border.top, geometry.border.right, geometry.border.bottom
        );
        println!("   Scaling: {:.4}", geometry.scaling_factor);

        match layout.place_geometry(&geometry, target) {
            Ok(placement) => println!("   ✅ Moved to {placement:?}"),
            Err(e) => println!("   ❌ Move failed: {e}"),
        }
        println!();
    }

    Ok(())
}
