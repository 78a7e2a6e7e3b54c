//! Notification components

use reelpick_core::export::escape_html;
use reelpick_search::{Notice, NoticeLevel};

/// Renders a notification toast.
///
/// `message` is inserted as-is; escape untrusted text first.
pub fn notification_toast(message: &str, toast_type: &str, dismissible: bool) -> String {
    let (bg_class, border_class, icon) = match toast_type {
        "success" => ("bg-green-800", "border-green-600", "✓"),
        "error" => ("bg-red-800", "border-red-600", "✗"),
        "warning" => ("bg-yellow-800", "border-yellow-600", "!"),
        "info" => ("bg-blue-800", "border-blue-600", "i"),
        _ => ("bg-gray-800", "border-gray-600", "•"),
    };

    let dismiss_button = if dismissible {
        r#"<button class="ml-4 text-gray-400 hover:text-white" onclick="this.parentElement.remove()">
            <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"></path>
            </svg>
        </button>"#
    } else {
        ""
    };

    format!(
        r#"<div role="alert" class="flex items-center p-4 mb-4 border rounded-lg {bg_class} {border_class} fadeInDown">
            <span class="mr-3">{icon}</span>
            <span class="flex-1 text-sm text-white">{message}</span>
            {dismiss_button}
        </div>"#
    )
}

/// Renders the notice attached to a search outcome, if any.
pub fn notice_banner(notice: Option<&Notice>) -> String {
    notice
        .map(|n| {
            let toast_type = match n.level {
                NoticeLevel::Info => "info",
                NoticeLevel::Warning => "warning",
                NoticeLevel::Error => "error",
            };
            notification_toast(&escape_html(&n.message), toast_type, true)
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_banner_escapes_message() {
        let html = notice_banner(Some(&Notice::warning("No films found for \"<b>\".")));

        assert!(html.contains("bg-yellow-800"));
        assert!(html.contains("&lt;b&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_no_notice_renders_nothing() {
        assert!(notice_banner(None).is_empty());
    }
}
