use chrono::Datelike;
use pdf_writer::{Content, Date, Filter, Name, Pdf, Rect, Ref, Str, TextStr};

use crate::fonts::{Font, register_fonts, to_winansi_bytes};
use crate::model::{Color, DocumentOptions};

use super::{DrawOp, PageBuffer, Stroke};

const HEADER_BASELINE: f32 = 30.0; // from the page top
const FOOTER_BASELINE: f32 = 30.0; // from the page bottom
const RULE_OFFSET: f32 = 10.0;
const RULE_WIDTH: f32 = 0.5;
const BRAND_SIZE: f32 = 12.0;
const HEADER_SIZE: f32 = 10.0;
const FOOTER_SIZE: f32 = 8.0;

/// Bezier control-point factor for quarter circles.
const KAPPA: f32 = 0.552_284_8;

#[derive(Clone, Copy)]
enum Align {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy)]
struct ChromeStyle {
    font: Font,
    size: f32,
    color: Color,
}

fn aligned_text(text: String, align: Align, anchor_x: f32, y: f32, style: ChromeStyle) -> DrawOp {
    let w = style.font.text_width(&text, style.size);
    let x = match align {
        Align::Left => anchor_x,
        Align::Center => anchor_x - w / 2.0,
        Align::Right => anchor_x - w,
    };
    DrawOp::Text {
        x,
        y,
        font: style.font,
        size: style.size,
        color: style.color,
        text,
        char_spacing: 0.0,
    }
}

/// Header and footer bands for one page.
pub(super) fn chrome_ops(
    page_number: usize,
    title: &str,
    options: &DocumentOptions,
) -> Vec<DrawOp> {
    let g = &options.geometry;
    let p = &options.palette;
    let brand = &options.brand;
    let left = g.margins.left;
    let right = g.width - g.margins.right;
    let center = g.width / 2.0;
    let rule = Stroke {
        color: p.light_gray,
        width: RULE_WIDTH,
    };
    let brand_style = ChromeStyle {
        font: Font::Bold,
        size: BRAND_SIZE,
        color: p.primary,
    };
    let header = ChromeStyle {
        font: Font::Regular,
        size: HEADER_SIZE,
        color: p.text,
    };
    let footer = ChromeStyle {
        font: Font::Regular,
        size: FOOTER_SIZE,
        color: p.dark_gray,
    };

    let header_y = HEADER_BASELINE;
    let footer_y = g.height - FOOTER_BASELINE;
    let year = options.generated_on.year();
    let copyright = format!("\u{a9} {year} {}", brand.copyright_holder);

    vec![
        aligned_text(brand.site_name.clone(), Align::Left, left, header_y, brand_style),
        aligned_text(title.to_string(), Align::Center, center, header_y, header),
        aligned_text(format!("Page {page_number}"), Align::Right, right, header_y, header),
        DrawOp::Rule {
            x1: left,
            x2: right,
            y: header_y + RULE_OFFSET,
            stroke: rule,
        },
        DrawOp::Rule {
            x1: left,
            x2: right,
            y: footer_y - RULE_OFFSET,
            stroke: rule,
        },
        aligned_text(brand.site_url.clone(), Align::Left, left, footer_y, footer),
        aligned_text(copyright, Align::Center, center, footer_y, footer),
        aligned_text(brand.caption.clone(), Align::Right, right, footer_y, footer),
    ]
}

fn set_fill(content: &mut Content, color: Color) {
    let (r, g, b) = color.unit();
    content.set_fill_rgb(r, g, b);
}

fn set_stroke(content: &mut Content, stroke: Stroke) {
    let (r, g, b) = stroke.color.unit();
    content.set_stroke_rgb(r, g, b);
    content.set_line_width(stroke.width);
}

/// Closed rounded-rectangle path in PDF (bottom-up) coordinates.
fn rounded_rect_path(content: &mut Content, x: f32, bottom: f32, w: f32, h: f32, radius: f32) {
    let r = radius.min(w / 2.0).min(h / 2.0);
    let k = r * KAPPA;
    let (x2, top) = (x + w, bottom + h);
    content.move_to(x + r, bottom);
    content.line_to(x2 - r, bottom);
    content.cubic_to(x2 - r + k, bottom, x2, bottom + r - k, x2, bottom + r);
    content.line_to(x2, top - r);
    content.cubic_to(x2, top - r + k, x2 - r + k, top, x2 - r, top);
    content.line_to(x + r, top);
    content.cubic_to(x + r - k, top, x, top - r + k, x, top - r);
    content.line_to(x, bottom + r);
    content.cubic_to(x, bottom + r - k, x + r - k, bottom, x + r, bottom);
    content.close_path();
}

fn draw(content: &mut Content, op: &DrawOp, page_height: f32) {
    match op {
        DrawOp::Text {
            x,
            y,
            font,
            size,
            color,
            text,
            char_spacing,
        } => {
            let bytes = to_winansi_bytes(text);
            if bytes.is_empty() {
                return;
            }
            content.begin_text();
            content.set_font(Name(font.pdf_name().as_bytes()), *size);
            set_fill(content, *color);
            if *char_spacing != 0.0 {
                content.set_char_spacing(*char_spacing);
            }
            content.next_line(*x, page_height - *y);
            content.show(Str(&bytes));
            if *char_spacing != 0.0 {
                content.set_char_spacing(0.0);
            }
            content.end_text();
        }
        DrawOp::Rect {
            x,
            y,
            width,
            height,
            radius,
            fill,
            stroke,
        } => {
            content.save_state();
            if let Some(c) = fill {
                set_fill(content, *c);
            }
            if let Some(s) = stroke {
                set_stroke(content, *s);
            }
            let bottom = page_height - *y - *height;
            if *radius > 0.0 {
                rounded_rect_path(content, *x, bottom, *width, *height, *radius);
            } else {
                content.rect(*x, bottom, *width, *height);
            }
            match (fill, stroke) {
                (Some(_), Some(_)) => content.fill_nonzero_and_stroke(),
                (Some(_), None) => content.fill_nonzero(),
                (None, Some(_)) => content.stroke(),
                (None, None) => content.end_path(),
            };
            content.restore_state();
        }
        DrawOp::Rule { x1, x2, y, stroke } => {
            content.save_state();
            set_stroke(content, *stroke);
            content.move_to(*x1, page_height - *y);
            content.line_to(*x2, page_height - *y);
            content.stroke();
            content.restore_state();
        }
        DrawOp::Checkbox { x, y, size, stroke } => {
            content.save_state();
            set_stroke(content, *stroke);
            content.rect(*x, page_height - *y - *size, *size, *size);
            content.stroke();
            content.restore_state();
        }
    }
}

/// Serialise finished pages, stamping header and footer onto each.
pub(super) fn write(pages: &[PageBuffer], title: &str, options: &DocumentOptions) -> Vec<u8> {
    let mut pdf = Pdf::new();
    let mut next_id = 1i32;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let pages_id = alloc();
    let info_id = alloc();
    let fonts = register_fonts(&mut pdf, &mut alloc);

    let n = pages.len();
    let page_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();

    let g = options.geometry;
    for (i, page) in pages.iter().enumerate() {
        let mut content = Content::new();
        let chrome = chrome_ops(page.number, title, options);
        for op in chrome.iter().chain(page.ops.iter()) {
            draw(&mut content, op, g.height);
        }
        let raw = content.finish();
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(raw.as_slice(), 6);
        pdf.stream(content_ids[i], &compressed).filter(Filter::FlateDecode);
    }

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(n as i32);

    for i in 0..n {
        let mut page = pdf.page(page_ids[i]);
        page.media_box(Rect::new(0.0, 0.0, g.width, g.height))
            .parent(pages_id)
            .contents(content_ids[i]);
        let mut resources = page.resources();
        let mut font_dict = resources.fonts();
        for (font, font_ref) in &fonts {
            font_dict.pair(Name(font.pdf_name().as_bytes()), *font_ref);
        }
    }

    {
        let date = options.generated_on;
        let mut info = pdf.document_info(info_id);
        if !title.is_empty() {
            info.title(TextStr(title));
        }
        info.author(TextStr(&options.brand.copyright_holder));
        info.creator(TextStr("guide-pdf"));
        info.creation_date(
            Date::new(date.year() as u16)
                .month(date.month() as u8)
                .day(date.day() as u8),
        );
    }

    pdf.finish()
}
