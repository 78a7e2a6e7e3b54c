//! Layout components - headers, cards, containers, navigation

/// Renders a page header with title and optional subtitle.
///
/// Used at the top of main content areas to establish page context.
pub fn page_header(title: &str, subtitle: Option<&str>) -> String {
    let subtitle_html = subtitle
        .map(|s| format!(r#"<p class="text-gray-400 mt-2">{s}</p>"#))
        .unwrap_or_default();

    format!(
        r#"<div class="mb-8">
            <h1 class="text-3xl font-bold text-white">{title}</h1>
            {subtitle_html}
        </div>"#
    )
}

/// Renders a card container with an optional heading.
pub fn card(title: Option<&str>, content: &str) -> String {
    let header_html = title
        .map(|t| format!(r#"<h3 class="text-lg font-semibold text-white mb-6">{t}</h3>"#))
        .unwrap_or_default();

    format!(
        r#"<div class="bg-gray-800 border border-gray-700 rounded-lg p-6 mb-6">
            {header_html}
            {content}
        </div>"#
    )
}

/// Renders the main navigation bar with the catalog mode on the right.
pub fn nav_bar(active_page: &str, mode_html: &str) -> String {
    let nav_item = |href: &str, label: &str, page: &str| {
        let active_class = if page == active_page {
            "nav-active text-reel-500 bg-reel-500 bg-opacity-10"
        } else {
            "text-gray-300 hover:text-reel-500 hover:bg-gray-700"
        };

        format!(
            r#"<a href="{href}" class="px-3 py-2 rounded-md text-sm font-medium transition-colors {active_class}">{label}</a>"#
        )
    };

    format!(
        r#"<nav class="bg-gray-800 border-b border-gray-700 sticky top-0 z-50 print:hidden">
            <div class="max-w-5xl mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center space-x-8">
                        <div class="text-2xl font-bold text-reel-500">Reelpick</div>
                        <div class="hidden md:flex space-x-6">
                            {}
                            {}
                        </div>
                    </div>
                    <div class="flex items-center space-x-4">
                        {mode_html}
                    </div>
                </div>
            </div>
        </nav>"#,
        nav_item("/", "Search", "search"),
        nav_item("/export/print", "Print view", "print"),
    )
}

/// Renders a button with Tailwind styling.
///
/// Variants: primary, secondary, danger, ghost.
pub fn button(text: &str, variant: &str, attributes: Option<&str>) -> String {
    let base_classes = "px-4 py-2 rounded-lg font-medium transition-colors focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-gray-900";

    let variant_classes = match variant {
        "primary" => "bg-reel-500 hover:bg-reel-600 text-white focus:ring-reel-500",
        "secondary" => "bg-gray-700 hover:bg-gray-600 text-white focus:ring-gray-500",
        "danger" => "bg-red-600 hover:bg-red-700 text-white focus:ring-red-500",
        "ghost" => "text-gray-300 hover:text-white hover:bg-gray-700 focus:ring-gray-500",
        _ => "bg-gray-600 hover:bg-gray-700 text-white focus:ring-gray-500",
    };

    let attrs = attributes.unwrap_or("");

    format!(r#"<button class="{base_classes} {variant_classes}" {attrs}>{text}</button>"#)
}

/// Renders a link styled like a [`button`].
pub fn link_button(text: &str, href: &str, variant: &str) -> String {
    let variant_classes = match variant {
        "primary" => "bg-reel-500 hover:bg-reel-600 text-white",
        _ => "bg-gray-700 hover:bg-gray-600 text-white",
    };

    format!(
        r#"<a href="{href}" class="inline-block px-4 py-2 rounded-lg font-medium text-sm transition-colors {variant_classes}">{text}</a>"#
    )
}

/// Renders an input field with Tailwind styling.
pub fn input(name: &str, placeholder: &str, input_type: &str, attributes: Option<&str>) -> String {
    let attrs = attributes.unwrap_or("");

    format!(
        r#"<input type="{input_type}" name="{name}" placeholder="{placeholder}"
                  class="w-full px-4 py-2 bg-gray-700 border border-gray-600 rounded-lg text-white placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-reel-500 focus:border-transparent"
                  {attrs} />"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_bar_highlights_active_page() {
        let html = nav_bar("search", "");

        assert!(html.contains(r#"href="/" class="px-3 py-2 rounded-md text-sm font-medium transition-colors nav-active"#));
        assert!(!html.contains(r#"href="/export/print" class="px-3 py-2 rounded-md text-sm font-medium transition-colors nav-active"#));
    }

    #[test]
    fn test_card_heading_is_optional() {
        let titled = card(Some("Find a film"), "<form></form>");
        assert!(titled.contains(r#"<h3 class="text-lg font-semibold text-white mb-6">Find a film</h3>"#));
        assert!(titled.contains("<form></form>"));

        assert!(!card(None, "body").contains("<h3"));
    }
}
