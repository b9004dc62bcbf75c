//! Per-kind height estimators and renderers for section bodies.
//!
//! Estimation is a cheap character-count heuristic used only to decide page
//! breaks; rendering measures the real wrapped text and is what moves the
//! cursor. The two can disagree by a line or two.

use crate::fonts::Font;
use crate::model::{Color, Palette, Section, SectionKind, Typography};

use super::layout::{chars_per_line, estimate_lines, wrap_text};
use super::{Document, DrawOp, HEADING_GAP, SECTION_GAP, Stroke};

const BOX_PADDING: f32 = 10.0;
const BOX_GAP: f32 = 5.0;
const BOX_RADIUS: f32 = 3.0;
const CALLOUT_TINT: f32 = 0.12;
const EXAMPLE_TINT: f32 = 0.125;

const CHECKBOX_SIZE: f32 = 8.0;
const CHECKLIST_TEXT_X: f32 = 15.0;
const CHECKLIST_TEXT_INSET: f32 = 20.0;
const CHECKLIST_MIN_ITEM: f32 = 12.0;
const CHECKLIST_ITEM_GAP: f32 = 3.0;

/// Text treatment and frame of a boxed body.
struct BoxStyle {
    fill: Color,
    border: Stroke,
    radius: f32,
    font: Font,
    size: f32,
    line_h: f32,
    text_color: Color,
}

impl BoxStyle {
    fn callout(accent: Option<Color>, p: &Palette, t: &Typography) -> Self {
        Self {
            fill: accent.map_or(p.light_gray, |c| c.tint(CALLOUT_TINT)),
            border: Stroke {
                color: accent.unwrap_or(p.primary),
                width: 1.0,
            },
            radius: BOX_RADIUS,
            font: Font::Regular,
            size: t.body_size,
            line_h: t.body_line(),
            text_color: p.text,
        }
    }

    fn example(accent: Option<Color>, p: &Palette, t: &Typography) -> Self {
        let accent = accent.unwrap_or(p.secondary);
        Self {
            fill: accent.tint(EXAMPLE_TINT),
            border: Stroke {
                color: accent,
                width: 1.0,
            },
            ..Self::callout(None, p, t)
        }
    }

    fn code(p: &Palette, t: &Typography) -> Self {
        Self {
            fill: p.code_fill,
            border: Stroke {
                color: p.dark_gray,
                width: 0.5,
            },
            radius: 0.0,
            font: Font::Mono,
            size: t.code_size,
            line_h: t.code_line(),
            text_color: p.code_text,
        }
    }
}

/// Non-blank checklist lines with any leading bullet marker removed.
pub(super) fn checklist_items(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.strip_prefix(['-', '*', '\u{2022}', '\u{25A1}'])
                .map_or(line, str::trim_start)
        })
}

pub(super) fn estimate(doc: &Document, section: &Section) -> f32 {
    let t = doc.options.typography;
    let width = doc.content_width();

    let title_h = if section.title.trim().is_empty() {
        0.0
    } else {
        let per_line = chars_per_line(width, t.heading_size);
        estimate_lines(&section.title, per_line) as f32 * t.heading_line() + HEADING_GAP
    };

    let boxed = |size: f32, line_h: f32| {
        let per_line = chars_per_line(width - 2.0 * BOX_PADDING, size);
        estimate_lines(&section.content, per_line) as f32 * line_h + 2.0 * BOX_PADDING + BOX_GAP
    };

    let body_h = match section.kind {
        SectionKind::Text => {
            let per_line = chars_per_line(width, t.body_size);
            estimate_lines(&section.content, per_line) as f32 * t.body_line()
        }
        SectionKind::Callout | SectionKind::Example => boxed(t.body_size, t.body_line()),
        SectionKind::Code => boxed(t.code_size, t.code_line()),
        SectionKind::Checklist => {
            let per_line = chars_per_line(width - CHECKLIST_TEXT_INSET, t.body_size);
            checklist_items(&section.content)
                .map(|item| {
                    let h = estimate_lines(item, per_line) as f32 * t.body_line();
                    h.max(CHECKLIST_MIN_ITEM) + CHECKLIST_ITEM_GAP
                })
                .sum()
        }
    };

    title_h + body_h + SECTION_GAP
}

pub(super) fn render(doc: &mut Document, section: &Section) {
    let p = doc.options.palette;
    let t = doc.options.typography;
    match section.kind {
        SectionKind::Text => render_text(doc, &section.content),
        SectionKind::Callout => {
            render_box(doc, &section.content, &BoxStyle::callout(section.color, &p, &t))
        }
        SectionKind::Example => {
            render_box(doc, &section.content, &BoxStyle::example(section.color, &p, &t))
        }
        SectionKind::Code => render_box(doc, &section.content, &BoxStyle::code(&p, &t)),
        SectionKind::Checklist => render_checklist(doc, &section.content),
    }
}

fn render_text(doc: &mut Document, content: &str) {
    let t = doc.options.typography;
    let color = doc.options.palette.text;
    let lines = wrap_text(content, Font::Regular, t.body_size, doc.content_width());
    let left = doc.left();
    let h = doc.draw_lines(&lines, left, Font::Regular, t.body_size, color, t.body_line());
    doc.cursor += h;
}

fn render_box(doc: &mut Document, content: &str, style: &BoxStyle) {
    let width = doc.content_width();
    let left = doc.left();
    let lines = wrap_text(content, style.font, style.size, width - 2.0 * BOX_PADDING);
    let box_h = lines.len() as f32 * style.line_h + 2.0 * BOX_PADDING;

    let top = doc.cursor - BOX_PADDING;
    doc.push(DrawOp::Rect {
        x: left,
        y: top,
        width,
        height: box_h,
        radius: style.radius,
        fill: Some(style.fill),
        stroke: Some(style.border),
    });
    doc.draw_lines(
        &lines,
        left + BOX_PADDING,
        style.font,
        style.size,
        style.text_color,
        style.line_h,
    );
    doc.cursor += box_h + BOX_GAP;
}

fn render_checklist(doc: &mut Document, content: &str) {
    let t = doc.options.typography;
    let p = doc.options.palette;
    let left = doc.left();
    let text_width = doc.content_width() - CHECKLIST_TEXT_INSET;

    for item in checklist_items(content) {
        let box_top = doc.cursor - CHECKBOX_SIZE;
        doc.push(DrawOp::Checkbox {
            x: left,
            y: box_top,
            size: CHECKBOX_SIZE,
            stroke: Stroke {
                color: p.primary,
                width: 1.0,
            },
        });
        let lines = wrap_text(item, Font::Regular, t.body_size, text_width);
        let h = doc.draw_lines(
            &lines,
            left + CHECKLIST_TEXT_X,
            Font::Regular,
            t.body_size,
            p.text,
            t.body_line(),
        );
        doc.cursor += h.max(CHECKLIST_MIN_ITEM) + CHECKLIST_ITEM_GAP;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checklist_markers_are_stripped() {
        let content = "- A\n* B\n\u{2022} C\n\u{25A1} D\nE\n\n  \n";
        let items: Vec<&str> = checklist_items(content).collect();
        assert_eq!(items, vec!["A", "B", "C", "D", "E"]);
    }
}
