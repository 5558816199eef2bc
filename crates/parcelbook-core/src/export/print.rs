//! Print-ready HTML page

use super::sections::Section;
use super::ReportHeader;

const STYLE: &str = r#"      :root {
        color: #111827;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
        line-height: 1.5;
      }
      body {
        margin: 2.5rem;
        color: inherit;
      }
      .report-header h1 {
        margin: 0 0 0.4rem;
        font-size: 1.9rem;
      }
      .report-header p {
        margin: 0.2rem 0;
        color: #4b5563;
      }
      .meta {
        margin-top: 0.6rem;
        font-size: 0.9rem;
        color: #6b7280;
      }
      .entry {
        margin-top: 1.4rem;
        page-break-inside: avoid;
      }
      .entry h3 {
        margin: 0 0 0.35rem;
        font-size: 1rem;
        text-transform: uppercase;
        letter-spacing: 0.08em;
        color: #1f2937;
      }
      .entry p {
        margin: 0;
        white-space: pre-wrap;
      }"#;

const PRINT_SCRIPT: &str = r#"    <script>
      window.addEventListener('load', function () {
        window.focus();
        setTimeout(function () { window.print(); }, 120);
      });
      window.addEventListener('afterprint', function () {
        window.close();
      });
    </script>"#;

pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn render_section(section: &Section) -> String {
    format!(
        "    <section class=\"entry\">\n      <h3>{}</h3>\n      <p>{}</p>\n    </section>",
        escape_html(&section.label),
        escape_html(&section.value).replace('\n', "<br/>")
    )
}

/// Standalone page that opens the print dialog once loaded
pub fn render(header: &ReportHeader, sections: &[Section]) -> String {
    let title = escape_html(&header.title);
    let subtitle = if header.subtitle.is_empty() {
        String::new()
    } else {
        format!("\n      <p>{}</p>", escape_html(&header.subtitle))
    };
    let body: Vec<String> = sections.iter().map(render_section).collect();

    format!(
        "<!DOCTYPE html>
<html lang=\"ru\">
  <head>
    <meta charset=\"UTF-8\" />
    <title>{title}</title>
    <style>
{style}
    </style>
  </head>
  <body>
    <header class=\"report-header\">
      <h1>{title}</h1>{subtitle}
      <p class=\"meta\">Дата выгрузки: {generated}</p>
    </header>
{body}
{script}
  </body>
</html>
",
        title = title,
        style = STYLE,
        subtitle = subtitle,
        generated = escape_html(&header.generated_at),
        body = body.join("\n"),
        script = PRINT_SCRIPT,
    )
}
