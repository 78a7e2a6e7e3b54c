//! Status indicators

use reelpick_core::CatalogMode;

/// Renders a coloured dot with a label.
pub fn status_indicator(status: &str, label: &str) -> String {
    let (color_class, pulse_class) = match status {
        "online" | "active" => ("bg-green-400", "status-pulse"),
        "warning" | "demo" => ("bg-yellow-400", ""),
        "error" | "offline" => ("bg-red-400", ""),
        _ => ("bg-gray-400", ""),
    };

    format!(
        r#"<div class="flex items-center space-x-2">
            <div class="w-2 h-2 {color_class} rounded-full {pulse_class}"></div>
            <span class="text-sm text-gray-400">{label}</span>
        </div>"#
    )
}

/// Navigation badge telling live lookups from demonstration data.
pub fn mode_badge(mode: CatalogMode, provider: &str) -> String {
    match mode {
        CatalogMode::Live => status_indicator("online", &format!("Live ({provider})")),
        CatalogMode::Demo => status_indicator("demo", "Demonstration data"),
    }
}
