//! Search result components - movie cards, selection counter, results panel

use reelpick_core::export::escape_html;
use reelpick_core::{MovieRecord, ResultPicker};
use reelpick_search::Notice;

use crate::components::{activity, layout};

/// Renders one result with its checkbox.
///
/// Toggling the checkbox posts to `/htmx/pick/{generation}/{index}` and swaps
/// in the new selection counter.
pub fn movie_card(generation: u64, index: usize, record: &MovieRecord, checked: bool) -> String {
    let title = escape_html(&record.title);
    let checked_attr = if checked { "checked" } else { "" };

    let poster_html = record
        .poster_url
        .as_deref()
        .map(|url| {
            format!(
                r#"<img src="{}" alt="{title}" class="w-20 h-30 object-cover rounded" loading="lazy">"#,
                escape_html(url)
            )
        })
        .unwrap_or_else(|| {
            r#"<div class="w-20 h-30 bg-gray-700 rounded flex items-center justify-center text-2xl">🎬</div>"#
                .to_string()
        });

    let original_html = record
        .original_title
        .as_deref()
        .filter(|original| *original != record.title)
        .map(|original| {
            format!(
                r#"<p class="text-gray-500 text-sm italic">{}</p>"#,
                escape_html(original)
            )
        })
        .unwrap_or_default();

    format!(
        r##"<label class="flex items-start space-x-4 p-4 bg-gray-800 border border-gray-700 rounded-lg hover:border-reel-500 transition-colors cursor-pointer">
            <input type="checkbox" name="pick" value="{index}" {checked_attr}
                   class="mt-1 w-5 h-5 accent-reel-500"
                   hx-post="/htmx/pick/{generation}/{index}"
                   hx-target="#selection-counter"
                   hx-swap="outerHTML">
            {poster_html}
            <div class="flex-1 min-w-0">
                <h3 class="text-lg font-semibold text-white">{title} <span class="text-gray-400 font-normal">({year})</span></h3>
                {original_html}
                <p class="text-gray-400 text-sm mt-1">Director: {director} · Rating: {rating}</p>
                <p class="text-gray-300 text-sm mt-2 line-clamp-3">{summary}</p>
            </div>
        </label>"##,
        year = escape_html(&record.display_year()),
        director = escape_html(record.display_director()),
        rating = record.display_rating(),
        summary = escape_html(record.display_summary()),
    )
}

/// Renders the "n of m selected" counter swapped in after every toggle.
pub fn selection_counter(selected: usize, total: usize) -> String {
    format!(
        r#"<span id="selection-counter" class="text-sm text-gray-300"><strong class="text-white">{selected}</strong> of {total} selected</span>"#
    )
}

/// Renders the whole results area: notice, toolbar and cards.
pub fn results_panel(picker: &ResultPicker, notice: Option<&Notice>) -> String {
    let notice_html = activity::notice_banner(notice);

    if picker.is_empty() {
        let hint = if picker.query().is_some() {
            "Try another title."
        } else {
            "Type a film title above to start."
        };
        return format!(
            r#"<div id="results">
                {notice_html}
                <div class="text-center py-12 text-gray-400">{hint}</div>
            </div>"#
        );
    }

    let generation = picker.generation();
    let cards: String = picker
        .results()
        .iter()
        .enumerate()
        .map(|(i, record)| movie_card(generation, i, record, picker.is_checked(i)))
        .collect();
    let bulk_attrs = |action: &str| {
        format!(
            r##"hx-post="/htmx/pick/{generation}/{action}" hx-target="#results" hx-swap="outerHTML""##
        )
    };

    let toolbar = format!(
        r#"<div class="flex flex-wrap items-center justify-between gap-4 mb-4">
            {counter}
            <div class="flex flex-wrap gap-2">
                {all}
                {none}
                {csv}
                {print}
                {text}
                {posters}
            </div>
        </div>"#,
        counter = selection_counter(picker.selected_count(), picker.results().len()),
        all = layout::button("Select all", "ghost", Some(bulk_attrs("all").as_str())),
        none = layout::button("Clear", "ghost", Some(bulk_attrs("none").as_str())),
        csv = layout::link_button("Export CSV", "/export/csv", "primary"),
        print = layout::link_button("Print view", "/export/print", "secondary"),
        text = layout::link_button("Text list", "/export/print?format=text", "secondary"),
        posters = layout::link_button("Posters (ZIP)", "/export/posters.zip", "secondary"),
    );

    format!(
        r#"<div id="results">
            {notice_html}
            {toolbar}
            <div class="space-y-3">
                {cards}
            </div>
        </div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelpick_core::CatalogSource;

    #[test]
    fn test_movie_card_partial_record() {
        let record = MovieRecord::new("Tom & Jerry", CatalogSource::Tmdb);

        let html = movie_card(4, 2, &record, false);

        assert!(html.contains("Tom &amp; Jerry"));
        assert!(html.contains(r#"hx-post="/htmx/pick/4/2""#));
        assert!(html.contains(r##"hx-target="#selection-counter""##));
        assert!(html.trim_end().ends_with("</label>"));
        assert!(html.contains("Director: N/A"));
        assert!(!html.contains(" checked"));
    }

    #[test]
    fn test_results_panel_marks_checked_boxes() {
        let mut picker = ResultPicker::new();
        picker.replace_results(
            "Matrix",
            vec![
                MovieRecord::new("Inception", CatalogSource::Demo),
                MovieRecord::new("The Godfather", CatalogSource::Demo),
            ],
        );
        picker.toggle(1).unwrap();

        let html = results_panel(&picker, None);

        assert!(html.contains("<strong class=\"text-white\">1</strong> of 2 selected"));
        assert_eq!(html.matches("value=\"1\" checked").count(), 1);
        assert_eq!(html.matches("value=\"0\" checked").count(), 0);
        assert!(html.contains(r#"hx-post="/htmx/pick/1/all""#));
        assert!(html.contains(r#"hx-post="/htmx/pick/1/none""#));
        assert!(html.contains(r#"href="/export/print?format=text""#));
    }

    #[test]
    fn test_empty_results_after_search() {
        let mut picker = ResultPicker::new();
        picker.replace_results("zzqx", Vec::new());

        let html = results_panel(&picker, Some(&Notice::warning("No films found")));

        assert!(html.contains("Try another title."));
        assert!(html.contains("No films found"));
    }
}
