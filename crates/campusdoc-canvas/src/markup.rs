//! HTML assembly for the single-canvas target
//!
//! Line-by-line translation of the segment sequence into styled markup:
//! keyword headings centered/bold/large, reference-number and date lines
//! styled distinctly, numbered list items indented, tables with the same
//! inverted-header/zebra convention as the paginated target, and the
//! footer as a three-column flex row. All user text is HTML-escaped.

use std::fmt::Write;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use campusdoc_ast::{FooterRow, Letterhead, Segment, Table};
use campusdoc_core::heading::{is_numbered_item, is_reference_line};
use campusdoc_core::HeadingPolicy;

use crate::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Render a segment sequence into a fixed-size single-page HTML document.
///
/// Pure function of its inputs; blank letterhead fields are replaced by
/// their defaults, and a missing logo simply omits the `<img>` element.
pub fn render_canvas(segments: &[Segment], letterhead: &Letterhead) -> String {
    let policy = HeadingPolicy::Keyword;
    let resolved = letterhead.resolved();

    let mut body = String::new();
    write_letterhead(&mut body, &resolved);

    for segment in segments {
        match segment {
            Segment::Text(run) => {
                for line in &run.lines {
                    write_text_line(&mut body, line, policy);
                }
            }
            Segment::Table(table) => write_table(&mut body, table),
            Segment::Footer(footer) => write_footer(&mut body, footer),
        }
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>document</title>
<style>
  * {{ box-sizing: border-box; margin: 0; }}
  .page {{
    width: {width}px;
    height: {height}px;
    padding: 40px 48px;
    background: #ffffff;
    color: #1a1a1a;
    font-family: Georgia, 'Times New Roman', serif;
    font-size: 14px;
    line-height: 1.5;
    border: 2px solid #1a1a1a;
  }}
  .letterhead {{ text-align: center; border-bottom: 2px solid #1a1a1a; padding-bottom: 10px; margin-bottom: 14px; }}
  .letterhead img {{ width: 72px; height: 72px; object-fit: contain; float: left; }}
  .letterhead .name {{ font-size: 22px; font-weight: bold; letter-spacing: 0.5px; }}
  .letterhead .detail {{ font-size: 12px; color: #333; }}
  .line {{ white-space: pre-wrap; }}
  .spacer {{ height: 0.5em; }}
  .heading {{ text-align: center; font-weight: bold; font-size: 17px; margin: 10px 0 6px; }}
  .ref-line {{ font-size: 13px; font-style: italic; color: #222; }}
  .numbered {{ padding-left: 24px; }}
  table {{ width: 100%; border-collapse: collapse; margin: 10px 0; font-size: 13px; }}
  th {{ background: #2c3e50; color: #ffffff; font-weight: bold; }}
  th, td {{ border: 1px solid #444; padding: 4px 8px; text-align: left; }}
  tbody tr:nth-child(even) {{ background: #e8edf2; }}
  tbody tr:nth-child(odd) {{ background: #f7f7f7; }}
  .footer-row {{ display: flex; justify-content: space-between; margin-top: 18px; }}
  .footer-row .left {{ text-align: left; }}
  .footer-row .center {{ text-align: center; }}
  .footer-row .right {{ text-align: right; font-weight: bold; }}
</style>
</head>
<body>
<div class="page">
{body}</div>
</body>
</html>
"#,
        width = CANVAS_WIDTH,
        height = CANVAS_HEIGHT,
        body = body,
    )
}

fn write_letterhead(body: &mut String, letterhead: &Letterhead) {
    body.push_str("<div class=\"letterhead\">\n");
    if let Some(logo) = &letterhead.logo {
        let _ = writeln!(
            body,
            "  <img src=\"data:{};base64,{}\" alt=\"logo\">",
            sniff_mime(&logo.bytes),
            BASE64.encode(&logo.bytes)
        );
    }
    let _ = writeln!(body, "  <div class=\"name\">{}</div>", escape(&letterhead.name));
    for detail in [
        &letterhead.affiliation,
        &letterhead.accreditation,
        &letterhead.certifications,
    ] {
        let _ = writeln!(body, "  <div class=\"detail\">{}</div>", escape(detail));
    }
    body.push_str("</div>\n");
}

fn write_text_line(body: &mut String, line: &str, policy: HeadingPolicy) {
    if line.trim().is_empty() {
        body.push_str("<div class=\"spacer\"></div>\n");
    } else if policy.is_heading(line) {
        let _ = writeln!(body, "<div class=\"heading\">{}</div>", escape(line.trim()));
    } else if is_reference_line(line) {
        let _ = writeln!(body, "<div class=\"ref-line\">{}</div>", escape(line));
    } else if is_numbered_item(line) {
        let _ = writeln!(body, "<div class=\"numbered\">{}</div>", escape(line.trim()));
    } else {
        let _ = writeln!(body, "<div class=\"line\">{}</div>", escape(line));
    }
}

fn write_table(body: &mut String, table: &Table) {
    let columns = table.column_count();
    if columns == 0 {
        return;
    }

    body.push_str("<table>\n<thead>\n<tr>");
    for col in 0..columns {
        let _ = write!(body, "<th>{}</th>", escape(table.header_cell(col)));
    }
    body.push_str("</tr>\n</thead>\n<tbody>\n");
    for row in 0..table.rows.len() {
        body.push_str("<tr>");
        for col in 0..columns {
            let _ = write!(body, "<td>{}</td>", escape(table.cell(row, col)));
        }
        body.push_str("</tr>\n");
    }
    body.push_str("</tbody>\n</table>\n");
}

fn write_footer(body: &mut String, footer: &FooterRow) {
    let _ = writeln!(
        body,
        "<div class=\"footer-row\">\
         <span class=\"left\">{}</span>\
         <span class=\"center\">{}</span>\
         <span class=\"right\">{}</span>\
         </div>",
        escape(&footer.left),
        escape(&footer.center),
        escape(&footer.right),
    );
}

/// Minimal HTML escape for text content and attribute values
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// PNG and JPEG are what the settings layer accepts; anything else is
/// served as PNG and left to the rasterizer's decoder
fn sniff_mime(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "image/jpeg"
    } else {
        if !bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
            log::debug!("logo bytes carry no known magic, serving as image/png");
        }
        "image/png"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campusdoc_ast::Logo;
    use campusdoc_core::segment;

    fn letterhead() -> Letterhead {
        Letterhead {
            name: "CITY COLLEGE".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_canvas_has_fixed_dimensions() {
        let html = render_canvas(&[], &letterhead());
        assert!(html.contains("width: 794px"));
        assert!(html.contains("height: 1123px"));
    }

    #[test]
    fn test_letterhead_rendered_with_defaults() {
        let html = render_canvas(&[], &Letterhead::default());
        assert!(html.contains(campusdoc_ast::letterhead::DEFAULT_NAME));
        assert!(html.contains(campusdoc_ast::letterhead::DEFAULT_AFFILIATION));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_logo_embedded_as_data_uri() {
        let lh = Letterhead {
            logo: Some(Logo { bytes: vec![0x89, b'P', b'N', b'G'] }),
            ..letterhead()
        };
        let html = render_canvas(&[], &lh);
        assert!(html.contains("data:image/png;base64,"));
    }

    #[test]
    fn test_jpeg_logo_mime_sniffed() {
        let lh = Letterhead {
            logo: Some(Logo { bytes: vec![0xFF, 0xD8, 0xFF, 0xE0] }),
            ..letterhead()
        };
        let html = render_canvas(&[], &lh);
        assert!(html.contains("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_keyword_heading_styled() {
        let html = render_canvas(&segment("EXAMINATION TIME TABLE"), &letterhead());
        assert!(html.contains("<div class=\"heading\">EXAMINATION TIME TABLE</div>"));
    }

    #[test]
    fn test_generic_all_caps_line_not_heading() {
        // Export policy divergence: preview would style this as a heading.
        let html = render_canvas(&segment("ANNUAL SPORTS MEET"), &letterhead());
        assert!(html.contains("<div class=\"line\">ANNUAL SPORTS MEET</div>"));
    }

    #[test]
    fn test_reference_and_numbered_lines_styled() {
        let html = render_canvas(
            &segment("Ref. No: GFGC/2024/117\n1. Report by 9 AM"),
            &letterhead(),
        );
        assert!(html.contains("class=\"ref-line\""));
        assert!(html.contains("class=\"numbered\""));
    }

    #[test]
    fn test_table_zebra_and_ragged_padding() {
        let html = render_canvas(&segment("[TABLE]\nA | B | C\n1 | 2\n[/TABLE]"), &letterhead());
        assert!(html.contains("<th>A</th><th>B</th><th>C</th>"));
        assert!(html.contains("<td>1</td><td>2</td><td></td>"));
        assert!(html.contains("nth-child(even)"));
    }

    #[test]
    fn test_empty_table_renders_nothing() {
        let html = render_canvas(&segment("[TABLE]\n\n[/TABLE]"), &letterhead());
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn test_footer_three_columns_right_bold() {
        let raw = "[FOOTER_ROW]\nCopy to: All | Read in all | PRINCIPAL\n[/FOOTER_ROW]";
        let html = render_canvas(&segment(raw), &letterhead());
        assert!(html.contains("<span class=\"left\">Copy to: All</span>"));
        assert!(html.contains("<span class=\"center\">Read in all</span>"));
        assert!(html.contains("<span class=\"right\">PRINCIPAL</span>"));
        assert!(html.contains(".footer-row .right { text-align: right; font-weight: bold; }"));
    }

    #[test]
    fn test_text_is_escaped() {
        let html = render_canvas(&segment("Fees < 500 & \"late\" marks"), &letterhead());
        assert!(html.contains("Fees &lt; 500 &amp; &quot;late&quot; marks"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let segments = segment("NOTICE\n[TABLE]\nA\n1\n[/TABLE]");
        let lh = letterhead();
        assert_eq!(render_canvas(&segments, &lh), render_canvas(&segments, &lh));
    }
}
