//! Plan-to-PDF writer
//!
//! Replays a planned page sequence against the `printpdf` backend: builtin
//! Helvetica fonts, rectangle fills and strokes for tables and borders,
//! and the letterhead logo embedded as an image on the first page. The
//! planner works from the top-left corner; PDF measures from the
//! bottom-left, so every y coordinate is flipped here and nowhere else.

use campusdoc_ast::Letterhead;
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, Image, ImageTransform, IndirectFontRef, Line, Mm, PdfDocument,
    PdfLayerReference, Point, Rect, Rgb,
};

use crate::error::Result;
use crate::layout::{PAGE_HEIGHT, PAGE_WIDTH};
use crate::plan::{DrawOp, Fill, Page, Tone};

const INK: (f32, f32, f32) = (0.1, 0.1, 0.1);
const PAPER: (f32, f32, f32) = (1.0, 1.0, 1.0);
const HEADER_DARK: (f32, f32, f32) = (0.17, 0.24, 0.31);
const ROW_EVEN: (f32, f32, f32) = (0.97, 0.97, 0.97);
const ROW_ODD: (f32, f32, f32) = (0.91, 0.93, 0.95);

/// Render dpi used when scaling the embedded logo
const LOGO_DPI: f32 = 300.0;

/// Serialize a planned page sequence into PDF bytes.
///
/// The logo bytes, when present on the letterhead, are decoded and placed
/// wherever the plan positioned its logo box; an undecodable logo is
/// logged and skipped, never a failure.
pub fn write_pdf(pages: &[Page], letterhead: &Letterhead, title: &str) -> Result<Vec<u8>> {
    let (doc, first_page, first_layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "content");
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    for (index, page) in pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) =
                doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "content");
            doc.get_page(page_index).get_layer(layer_index)
        };
        write_page(&layer, page, letterhead, &regular, &bold);
    }

    Ok(doc.save_to_bytes()?)
}

fn write_page(
    layer: &PdfLayerReference,
    page: &Page,
    letterhead: &Letterhead,
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
) {
    for op in &page.ops {
        match op {
            DrawOp::Text { x, y, size, bold: is_bold, tone, text } => {
                let rgb = match tone {
                    Tone::Ink => INK,
                    Tone::Paper => PAPER,
                };
                layer.set_fill_color(rgb_color(rgb));
                let font = if *is_bold { bold } else { regular };
                layer.use_text(text.clone(), *size, Mm(*x), Mm(flip(*y)), font);
            }
            DrawOp::RectFill { x, y, w, h, fill } => {
                let rgb = match fill {
                    Fill::HeaderDark => HEADER_DARK,
                    Fill::RowEven => ROW_EVEN,
                    Fill::RowOdd => ROW_ODD,
                };
                layer.set_fill_color(rgb_color(rgb));
                layer.add_rect(
                    Rect::new(Mm(*x), Mm(flip(y + h)), Mm(x + w), Mm(flip(*y)))
                        .with_mode(PaintMode::Fill)
                        .with_winding(WindingOrder::NonZero),
                );
            }
            DrawOp::RectStroke { x, y, w, h } => {
                layer.set_outline_color(rgb_color(INK));
                layer.set_outline_thickness(0.4);
                layer.add_rect(
                    Rect::new(Mm(*x), Mm(flip(y + h)), Mm(x + w), Mm(flip(*y)))
                        .with_mode(PaintMode::Stroke)
                        .with_winding(WindingOrder::NonZero),
                );
            }
            DrawOp::Rule { x1, x2, y } => {
                layer.set_outline_color(rgb_color(INK));
                layer.set_outline_thickness(0.6);
                layer.add_line(Line {
                    points: vec![
                        (Point::new(Mm(*x1), Mm(flip(*y))), false),
                        (Point::new(Mm(*x2), Mm(flip(*y))), false),
                    ],
                    is_closed: false,
                });
            }
            DrawOp::Logo { x, y, w, h } => {
                place_logo(layer, letterhead, *x, *y, *w, *h);
            }
        }
    }
}

/// Decode and place the letterhead logo; a decode failure degrades to "no
/// logo" with a warning, matching the render-without-logo contract
fn place_logo(layer: &PdfLayerReference, letterhead: &Letterhead, x: f32, y: f32, w: f32, h: f32) {
    let Some(logo) = &letterhead.logo else {
        return;
    };
    let decoded = match printpdf::image_crate::load_from_memory(&logo.bytes) {
        Ok(image) => image,
        Err(err) => {
            log::warn!("logo could not be decoded, rendering without it: {}", err);
            return;
        }
    };

    let px_w = decoded.width() as f32;
    let px_h = decoded.height() as f32;
    // Native placement size at LOGO_DPI, scaled into the planned box
    let native_w = px_w * 25.4 / LOGO_DPI;
    let native_h = px_h * 25.4 / LOGO_DPI;

    let image = Image::from_dynamic_image(&decoded);
    image.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(x)),
            translate_y: Some(Mm(flip(y + h))),
            scale_x: Some(w / native_w),
            scale_y: Some(h / native_h),
            dpi: Some(LOGO_DPI),
            ..Default::default()
        },
    );
}

/// Flip a top-origin y coordinate to PDF's bottom-origin space
fn flip(y: f32) -> f32 {
    PAGE_HEIGHT - y
}

fn rgb_color((r, g, b): (f32, f32, f32)) -> Color {
    Color::Rgb(Rgb::new(r, g, b, None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::paginate;
    use campusdoc_core::segment;

    #[test]
    fn test_write_pdf_produces_bytes() {
        let segments = segment("CIRCULAR\n\nClasses resume Monday.");
        let letterhead = Letterhead::default();
        let pages = paginate(&segments, &letterhead);
        let bytes = write_pdf(&pages, &letterhead, "circular").unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_multi_page_document_writes() {
        let long = (0..300).map(|i| format!("line {}", i)).collect::<Vec<_>>().join("\n");
        let letterhead = Letterhead::default();
        let pages = paginate(&segment(&long), &letterhead);
        assert!(pages.len() >= 2);
        let bytes = write_pdf(&pages, &letterhead, "long").unwrap();
        assert!(!bytes.is_empty());
    }

    #[test]
    fn test_undecodable_logo_degrades_to_no_logo() {
        let letterhead = Letterhead {
            logo: Some(campusdoc_ast::Logo { bytes: vec![0xde, 0xad, 0xbe, 0xef] }),
            ..Default::default()
        };
        let pages = paginate(&[], &letterhead);
        // Must not fail: the logo op is skipped with a warning.
        let bytes = write_pdf(&pages, &letterhead, "no-logo").unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
