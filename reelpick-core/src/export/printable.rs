//! Print-friendly renderings of the selection.

use chrono::NaiveDateTime;

use crate::movie::MovieRecord;

/// Escapes text for inclusion in HTML element content or quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Numbered Markdown-style list, one block per film.
pub fn printable_text(records: &[&MovieRecord], generated_at: NaiveDateTime) -> String {
    let mut out = format!(
        "# FILM LIST\n\nDate: {}\n\n---\n\n",
        generated_at.format("%d/%m/%Y %H:%M")
    );

    if records.is_empty() {
        out.push_str("No film selected.\n");
        return out;
    }

    for (i, record) in records.iter().enumerate() {
        out.push_str(&format!("## {}. {}\n\n", i + 1, record.title));
        if let Some(original) = &record.original_title {
            out.push_str(&format!("**Original title:** {original}\n\n"));
        }
        out.push_str(&format!(
            "**Year:** {}\n\n**Director:** {}\n\n**Rating:** {}\n\n**Summary:** {}\n\n---\n\n",
            record.display_year(),
            record.display_director(),
            record.display_rating(),
            record.display_summary()
        ));
    }
    out
}

/// Standalone HTML page with a table of the selection, styled for printing.
pub fn printable_html(records: &[&MovieRecord], generated_at: NaiveDateTime) -> String {
    let rows: String = records
        .iter()
        .map(|record| {
            format!(
                r#"<tr>
                    <td>{}</td>
                    <td>{}</td>
                    <td>{}</td>
                    <td>{}</td>
                    <td class="summary">{}</td>
                    <td>{}</td>
                </tr>"#,
                escape_html(&record.title),
                escape_html(&record.display_year()),
                escape_html(record.display_director()),
                escape_html(&record.display_rating()),
                escape_html(record.display_summary()),
                record.source,
            )
        })
        .collect();

    let body = if records.is_empty() {
        r#"<p class="empty">No film selected.</p>"#.to_string()
    } else {
        format!(
            r#"<table>
                <thead>
                    <tr><th>Title</th><th>Year</th><th>Director</th><th>Rating</th><th>Summary</th><th>Source</th></tr>
                </thead>
                <tbody>
                {rows}
                </tbody>
            </table>"#
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Film list</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 2rem; }}
        table {{ border-collapse: collapse; width: 100%; }}
        th, td {{ border: 1px solid #ddd; padding: 8px; text-align: left; vertical-align: top; }}
        th {{ background-color: #4472C4; color: white; }}
        .title {{ text-align: center; font-size: 24px; color: #4472C4; }}
        .summary {{ max-width: 300px; word-wrap: break-word; }}
        @media print {{ .no-print {{ display: none; }} }}
    </style>
</head>
<body>
    <div class="title">Film list</div>
    <p><strong>Exported:</strong> {date}</p>
    <p><strong>Films:</strong> {count}</p>
    {body}
    <p class="no-print"><button onclick="window.print()">Print</button></p>
</body>
</html>"#,
        date = generated_at.format("%d/%m/%Y %H:%M"),
        count = records.len(),
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::movie::CatalogSource;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 31)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom & Jerry's"</b>"#),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_text_view_numbers_entries() {
        let a = MovieRecord::new("Inception", CatalogSource::Demo)
            .with_year(2010)
            .with_director("Christopher Nolan");
        let b = MovieRecord::new("Stalker", CatalogSource::Tmdb);

        let text = printable_text(&[&a, &b], at());

        assert!(text.contains("Date: 31/01/2024 09:30"));
        assert!(text.contains("## 1. Inception"));
        assert!(text.contains("## 2. Stalker"));
        assert!(text.contains("**Director:** N/A"));
    }

    #[test]
    fn test_text_view_full_entry() {
        let record = MovieRecord::new("Le Parrain", CatalogSource::Tmdb)
            .with_original_title("The Godfather")
            .with_year(1972)
            .with_director("Francis Ford Coppola")
            .with_rating(8.7)
            .with_summary("A crime family saga.");

        let text = printable_text(&[&record], at());

        assert_eq!(
            text,
            "# FILM LIST\n\nDate: 31/01/2024 09:30\n\n---\n\n\
             ## 1. Le Parrain\n\n\
             **Original title:** The Godfather\n\n\
             **Year:** 1972\n\n\
             **Director:** Francis Ford Coppola\n\n\
             **Rating:** 8.7/10\n\n\
             **Summary:** A crime family saga.\n\n---\n\n"
        );
    }

    #[test]
    fn test_empty_views_do_not_fail() {
        assert!(printable_text(&[], at()).contains("No film selected."));

        let html = printable_html(&[], at());
        assert!(html.contains("No film selected."));
        assert!(html.contains("<strong>Films:</strong> 0"));
    }

    #[test]
    fn test_html_view_escapes_fields() {
        let record = MovieRecord::new("<script>alert(1)</script>", CatalogSource::Tmdb);
        let html = printable_html(&[&record], at());

        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("<td>TMDB</td>"));
    }
}
