//! Full page handlers using component system
//!
//! Pages compose multiple components into complete HTML responses.
//! All pages use the same base layout with HTMX and Tailwind CSS.

pub mod search;

use axum::response::Html;

// Re-export page handlers
pub use search::{search_page, search_results_page};

use crate::components::layout;

/// Wraps `content` in the shared document shell.
pub fn render_page(title: &str, active_nav: &str, mode_html: &str, content: &str) -> Html<String> {
    let html = format!(
        r#"<!DOCTYPE html>
        <html lang="en">
        <head>
            <title>{} - Reelpick</title>
            <meta charset="utf-8">
            <meta name="viewport" content="width=device-width, initial-scale=1">
            <script src="https://cdn.tailwindcss.com"></script>
            <script src="https://unpkg.com/htmx.org@1.9.10"></script>
            <script>
                tailwind.config = {{
                    darkMode: 'class',
                    theme: {{
                        extend: {{
                            colors: {{
                                'reel': {{
                                    50: '#fff7ed',
                                    400: '#fb923c',
                                    500: '#f97316',
                                    600: '#ea580c',
                                    900: '#1c0a00'
                                }}
                            }}
                        }}
                    }}
                }}
            </script>
            <style>
                .htmx-indicator {{ opacity: 0; transition: opacity 0.3s; }}
                .htmx-request .htmx-indicator {{ opacity: 1; }}
                .htmx-request.htmx-indicator {{ opacity: 1; }}

                @keyframes pulse-green {{
                    0%, 100% {{ opacity: 1; }}
                    50% {{ opacity: 0.5; }}
                }}
                .status-pulse {{ animation: pulse-green 2s infinite; }}

                .fadeInDown {{
                    animation: fadeInDown 0.3s ease-out;
                }}

                @keyframes fadeInDown {{
                    from {{ opacity: 0; transform: translateY(-10px); }}
                    to {{ opacity: 1; transform: translateY(0); }}
                }}
            </style>
        </head>
        <body class="bg-gray-900 text-white min-h-screen font-sans">
            {}

            <main class="max-w-5xl mx-auto px-4 py-8">
                {}
            </main>
        </body>
        </html>"#,
        title,
        layout::nav_bar(active_nav, mode_html),
        content
    );

    Html(html)
}
