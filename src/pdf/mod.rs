mod layout;
mod sections;
mod writer;

use std::time::Instant;

use crate::error::Error;
use crate::fonts::Font;
use crate::model::{Color, DocumentOptions, Section, TocEntry};

use layout::{DOT_PITCH, LEADER_GAP, dot_leader, fit_to_width, wrap_text};

/// Band below the top margin kept free for the page header.
pub(crate) const HEADER_RESERVE: f32 = 50.0;
/// Band above the bottom margin kept free for the page footer.
pub(crate) const FOOTER_RESERVE: f32 = 60.0;

const SECTION_GAP: f32 = 15.0;
const HEADING_GAP: f32 = 10.0;
const SUBTITLE_GAP: f32 = 10.0;
const TITLE_GAP: f32 = 20.0;
const TOC_ENTRY_GAP: f32 = 5.0;
const TOC_HEADING: &str = "Table of Contents";

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Stroke {
    pub(crate) color: Color,
    pub(crate) width: f32,
}

/// A deferred drawing instruction. Coordinates are top-down: `y` grows
/// toward the bottom of the page and is flipped when the page is written.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum DrawOp {
    Text {
        x: f32,
        y: f32, // baseline
        font: Font,
        size: f32,
        color: Color,
        text: String,
        char_spacing: f32,
    },
    Rect {
        x: f32,
        y: f32, // top edge
        width: f32,
        height: f32,
        radius: f32, // 0 = sharp corners
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    Rule {
        x1: f32,
        x2: f32,
        y: f32,
        stroke: Stroke,
    },
    Checkbox {
        x: f32,
        y: f32, // top edge
        size: f32,
        stroke: Stroke,
    },
}

/// Draw instructions for one physical page. Header and footer are not
/// recorded here; they are stamped on every page when the document is written.
#[derive(Debug)]
pub(crate) struct PageBuffer {
    pub(crate) number: usize,
    pub(crate) ops: Vec<DrawOp>,
}

impl PageBuffer {
    fn new(number: usize) -> Self {
        Self {
            number,
            ops: Vec::new(),
        }
    }
}

/// Where an appended section ended up: 1-based page number and the cursor
/// before and after its content (the inter-section gap is not included).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionPlacement {
    pub page: usize,
    pub top: f32,
    pub bottom: f32,
}

/// Paginating layout engine. Content is appended in order; each append
/// measures, breaks the page if needed, draws and advances the cursor.
/// One instance produces one document and is consumed by [`Document::generate`].
pub struct Document {
    options: DocumentOptions,
    title: Option<String>,
    cursor: f32,
    finished: Vec<PageBuffer>,
    page: PageBuffer,
}

impl Document {
    pub fn new(options: DocumentOptions) -> Result<Self, Error> {
        let g = options.geometry;
        if !(g.width > 0.0 && g.height > 0.0) {
            return Err(Error::InvalidGeometry(format!(
                "page size {}x{}pt",
                g.width, g.height
            )));
        }
        let m = g.margins;
        if [m.top, m.bottom, m.left, m.right].iter().any(|v| !(*v >= 0.0)) {
            return Err(Error::InvalidGeometry(format!("negative margin in {m:?}")));
        }
        if !(g.content_width() > 0.0) {
            return Err(Error::InvalidGeometry(format!(
                "content width {:.1}pt after margins",
                g.content_width()
            )));
        }
        let usable = g.height - m.bottom - FOOTER_RESERVE - (m.top + HEADER_RESERVE);
        if !(usable > 0.0) {
            return Err(Error::InvalidGeometry(format!(
                "usable height {usable:.1}pt after margins, header and footer"
            )));
        }

        let top = m.top + HEADER_RESERVE;
        Ok(Self {
            options,
            title: None,
            cursor: top,
            finished: Vec::new(),
            page: PageBuffer::new(1),
        })
    }

    pub fn options(&self) -> &DocumentOptions {
        &self.options
    }

    /// Current vertical write position, in points from the top of the page.
    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    /// Pages so far, counting the one being written.
    pub fn page_count(&self) -> usize {
        self.finished.len() + 1
    }

    pub fn content_width(&self) -> f32 {
        self.options.geometry.content_width()
    }

    /// Space between the cursor and the footer reserve.
    pub fn remaining_height(&self) -> f32 {
        self.footer_limit() - self.cursor
    }

    fn page_top(&self) -> f32 {
        self.options.geometry.margins.top + HEADER_RESERVE
    }

    fn footer_limit(&self) -> f32 {
        let g = &self.options.geometry;
        g.height - g.margins.bottom - FOOTER_RESERVE
    }

    fn left(&self) -> f32 {
        self.options.geometry.margins.left
    }

    fn page_has_content(&self) -> bool {
        !self.page.ops.is_empty()
    }

    fn push(&mut self, op: DrawOp) {
        self.page.ops.push(op);
    }

    fn break_page(&mut self) {
        let next = PageBuffer::new(self.page.number + 1);
        let done = std::mem::replace(&mut self.page, next);
        log::debug!(
            "page {} finished with {} draw op(s) at cursor {:.1}",
            done.number,
            done.ops.len(),
            self.cursor
        );
        self.finished.push(done);
        self.cursor = self.page_top();
    }

    /// Draw pre-wrapped lines with the first baseline at the cursor.
    /// Returns the block height; the cursor is left for the caller to advance.
    fn draw_lines(
        &mut self,
        lines: &[String],
        x: f32,
        font: Font,
        size: f32,
        color: Color,
        line_h: f32,
    ) -> f32 {
        for (i, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let y = self.cursor + i as f32 * line_h;
            self.push(DrawOp::Text {
                x,
                y,
                font,
                size,
                color,
                text: line.clone(),
                char_spacing: 0.0,
            });
        }
        lines.len() as f32 * line_h
    }

    fn draw_title(&mut self, title: &str, subtitle: Option<&str>) {
        let t = self.options.typography;
        let p = self.options.palette;
        let width = self.content_width();
        let left = self.left();

        let lines = wrap_text(title, Font::Bold, t.title_size, width);
        let h = self.draw_lines(
            &lines,
            left,
            Font::Bold,
            t.title_size,
            p.primary,
            t.title_line(),
        );
        self.cursor += h;

        if let Some(sub) = subtitle {
            self.cursor += SUBTITLE_GAP;
            let lines = wrap_text(sub, Font::Regular, t.subheading_size, width);
            let h = self.draw_lines(
                &lines,
                left,
                Font::Regular,
                t.subheading_size,
                p.text,
                t.subheading_line(),
            );
            self.cursor += h;
        }

        self.cursor += TITLE_GAP;
    }

    fn draw_heading(&mut self, heading: &str, color: Color) {
        let t = self.options.typography;
        let lines = wrap_text(heading, Font::Bold, t.heading_size, self.content_width());
        let left = self.left();
        let h = self.draw_lines(
            &lines,
            left,
            Font::Bold,
            t.heading_size,
            color,
            t.heading_line(),
        );
        self.cursor += h + HEADING_GAP;
    }

    /// Draw the document title (and optional subtitle) at the cursor.
    /// Expected as the first append; the first title also becomes the
    /// document title shown in every page header.
    pub fn add_title(&mut self, title: &str, subtitle: Option<&str>) -> Result<(), Error> {
        if title.trim().is_empty() {
            return Err(Error::MissingField("title"));
        }
        if self.title.is_none() {
            self.title = Some(title.trim().to_string());
        }
        self.draw_title(title, subtitle.filter(|s| !s.trim().is_empty()));
        Ok(())
    }

    /// Append one section. Sections are never split: if the estimated height
    /// does not fit below the cursor the page is broken first. A section that
    /// is taller than an empty page is drawn anyway and overflows.
    pub fn add_section(&mut self, section: &Section) -> Result<SectionPlacement, Error> {
        if section.content.trim().is_empty() {
            return Err(Error::MissingField("content"));
        }

        let estimate = sections::estimate(self, section);
        let remaining = self.remaining_height();
        if estimate > remaining {
            if self.page_has_content() {
                log::debug!(
                    "page break before {:?}: estimated {estimate:.1}pt, \
                     {remaining:.1}pt left on page {}",
                    section.title,
                    self.page.number
                );
                self.break_page();
            } else {
                log::debug!(
                    "{:?} ({estimate:.1}pt) is taller than an empty page, drawing without a break",
                    section.title
                );
            }
        }

        let top = self.cursor;
        if !section.title.trim().is_empty() {
            let color = section.color.unwrap_or(self.options.palette.primary);
            self.draw_heading(&section.title, color);
        }
        sections::render(self, section);
        let bottom = self.cursor;

        log::debug!(
            "{} section {:?} on page {}: estimated {estimate:.1}pt, drew {:.1}pt",
            section.kind,
            section.title,
            self.page.number,
            bottom - top
        );
        let limit = self.footer_limit();
        if bottom > limit {
            log::warn!(
                "section {:?} runs {:.1}pt into the footer of page {}",
                section.title,
                bottom - limit,
                self.page.number
            );
        }

        self.cursor += SECTION_GAP;
        Ok(SectionPlacement {
            page: self.page.number,
            top,
            bottom,
        })
    }

    /// Draw a table of contents and end the page. Page numbers are printed as
    /// given; nothing checks them against the actual layout. Entries that do
    /// not fit above the footer continue on the next page.
    pub fn add_table_of_contents(&mut self, entries: &[TocEntry]) -> Result<(), Error> {
        if entries.iter().any(|e| e.title.trim().is_empty()) {
            return Err(Error::MissingField("table of contents entry title"));
        }

        let t = self.options.typography;
        let p = self.options.palette;
        let left = self.left();
        let width = self.content_width();
        let dot_w = Font::Regular.text_width(".", t.body_size);
        let entry_h = t.body_line() + TOC_ENTRY_GAP;

        // Keep the heading together with at least its first entry.
        let heading_h = t.title_line() + TITLE_GAP;
        if self.page_has_content() && self.cursor + heading_h + entry_h > self.footer_limit() {
            self.break_page();
        }
        self.draw_title(TOC_HEADING, None);

        for entry in entries {
            if self.cursor + t.body_line() > self.footer_limit() && self.page_has_content() {
                log::debug!(
                    "table of contents continues on page {} at {:?}",
                    self.page.number + 1,
                    entry.title
                );
                self.break_page();
            }

            let number = entry.page.to_string();
            let number_w = Font::Regular.text_width(&number, t.body_size);
            let title = fit_to_width(
                &entry.title,
                Font::Regular,
                t.body_size,
                width - number_w - LEADER_GAP,
            );
            let title_w = Font::Regular.text_width(&title, t.body_size);
            let y = self.cursor;
            let text = |x: f32, text: String, char_spacing: f32| DrawOp::Text {
                x,
                y,
                font: Font::Regular,
                size: t.body_size,
                color: p.text,
                text,
                char_spacing,
            };

            self.push(text(left, title, 0.0));
            self.push(text(left + width - number_w, number, 0.0));
            let leader = dot_leader(width, title_w, number_w);
            if leader.count > 0 {
                self.push(text(
                    left + leader.start_x,
                    ".".repeat(leader.count),
                    DOT_PITCH - dot_w,
                ));
            }

            self.cursor += entry_h;
        }

        self.break_page();
        Ok(())
    }

    /// Finish the last page and write the whole document as PDF bytes.
    pub fn generate(self) -> Result<Vec<u8>, Error> {
        let t0 = Instant::now();
        let Document {
            options,
            title,
            mut finished,
            page,
            ..
        } = self;
        finished.push(page);

        let title = title.unwrap_or_default();
        let bytes = writer::write(&finished, &title, &options);

        log::info!(
            "Generated {:?}: {} page(s), write={:.1}ms ({} bytes)",
            title,
            finished.len(),
            t0.elapsed().as_secs_f64() * 1000.0,
            bytes.len(),
        );
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::model::{PageGeometry, SectionKind};

    fn options() -> DocumentOptions {
        DocumentOptions::new(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
    }

    fn checkboxes(doc: &Document) -> usize {
        doc.finished
            .iter()
            .chain(std::iter::once(&doc.page))
            .flat_map(|p| p.ops.iter())
            .filter(|op| matches!(op, DrawOp::Checkbox { .. }))
            .count()
    }

    #[test]
    fn checklist_draws_one_box_per_non_empty_line() {
        let mut doc = Document::new(options()).unwrap();
        let section = Section::new(SectionKind::Checklist, "", "- A\n- B\n\n- C");
        doc.add_section(&section).unwrap();
        assert_eq!(checkboxes(&doc), 3);

        let item_texts: Vec<&str> = doc
            .page
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(item_texts, vec!["A", "B", "C"]);
    }

    #[test]
    fn checklist_with_wrapped_items_keeps_box_count() {
        let mut doc = Document::new(options()).unwrap();
        let long = "very long checklist entry ".repeat(12);
        let content = format!("{long}\n\u{25A1} short\n{long}\n   \n\u{2022} last");
        doc.add_section(&Section::new(SectionKind::Checklist, "Items", content))
            .unwrap();
        assert_eq!(checkboxes(&doc), 4);
    }

    #[test]
    fn callout_box_uses_accent_border_and_tinted_fill() {
        let mut doc = Document::new(options()).unwrap();
        let accent = Color::rgb(0x8B, 0x5C, 0xF6);
        doc.add_section(&Section::new(SectionKind::Callout, "", "Boxed").with_color(accent))
            .unwrap();
        let rect = doc
            .page
            .ops
            .iter()
            .find_map(|op| match op {
                DrawOp::Rect { radius, fill, stroke, .. } => Some((*radius, *fill, *stroke)),
                _ => None,
            })
            .unwrap();
        assert!(rect.0 > 0.0);
        assert_eq!(rect.2.map(|s| s.color), Some(accent));
        assert_ne!(rect.1, Some(accent));
    }

    #[test]
    fn code_box_has_sharp_corners_and_monospace_text() {
        let mut doc = Document::new(options()).unwrap();
        doc.add_section(&Section::new(SectionKind::Code, "", "let x = 1;"))
            .unwrap();
        let ops = &doc.page.ops;
        assert!(ops.iter().any(|op| matches!(op, DrawOp::Rect { radius, .. } if *radius == 0.0)));
        assert!(ops.iter().any(|op| matches!(op, DrawOp::Text { font: Font::Mono, .. })));
    }

    #[test]
    fn example_box_defaults_to_secondary_accent() {
        let mut doc = Document::new(options()).unwrap();
        doc.add_section(&Section::new(SectionKind::Example, "", "Before / after"))
            .unwrap();
        let secondary = doc.options.palette.secondary;
        assert!(doc.page.ops.iter().any(|op| matches!(
            op,
            DrawOp::Rect { stroke: Some(s), .. } if s.color == secondary
        )));
    }

    #[test]
    fn toc_leader_spans_title_to_page_number() {
        let mut doc = Document::new(options()).unwrap();
        doc.add_table_of_contents(&[TocEntry::new("Intro", 1), TocEntry::new("Pillars", 3)])
            .unwrap();
        let first_page = &doc.finished[0];
        let leaders: Vec<(f32, usize, f32)> = first_page
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { x, text, char_spacing, .. } if text.starts_with('.') => {
                    Some((*x, text.len(), *char_spacing))
                }
                _ => None,
            })
            .collect();
        assert_eq!(leaders.len(), 2);

        let left = doc.options.geometry.margins.left;
        let width = doc.content_width();
        let dot_w = Font::Regular.text_width(".", doc.options.typography.body_size);
        for (x, count, spacing) in leaders {
            assert!((dot_w + spacing - DOT_PITCH).abs() < 1e-4);
            let end = x + count as f32 * DOT_PITCH;
            assert!(end <= left + width);
            assert!(x > left);
        }
    }

    #[test]
    fn toc_overlong_title_is_cut_before_page_number() {
        let mut doc = Document::new(options()).unwrap();
        let title = "An extremely long table of contents entry title ".repeat(4);
        doc.add_table_of_contents(&[TocEntry::new(title, 12)]).unwrap();

        let size = doc.options.typography.body_size;
        let texts: Vec<(f32, &str)> = doc.finished[0]
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { x, text, size: s, .. } if *s == size => Some((*x, text.as_str())),
                _ => None,
            })
            .collect();
        let (number_x, _) = texts.iter().find(|(_, t)| *t == "12").copied().unwrap();
        let (title_x, cut) = texts
            .iter()
            .find(|(_, t)| t.starts_with("An extremely"))
            .copied()
            .unwrap();

        assert!(cut.ends_with('\u{2026}'));
        let title_end = title_x + Font::Regular.text_width(cut, size);
        assert!(title_end <= number_x - LEADER_GAP + 0.01, "{title_end} vs {number_x}");
        for (x, text) in texts.iter().filter(|(_, t)| t.starts_with('.')) {
            assert!(x + text.len() as f32 * DOT_PITCH <= number_x + 0.01);
        }
    }

    #[test]
    fn long_toc_continues_on_next_page() {
        let mut doc = Document::new(options()).unwrap();
        let entries: Vec<TocEntry> = (1..=45)
            .map(|i| TocEntry::new(format!("Chapter {i}"), i))
            .collect();
        doc.add_table_of_contents(&entries).unwrap();

        let limit = doc.footer_limit();
        assert!(doc.finished.len() >= 2);
        for page in &doc.finished {
            for op in &page.ops {
                if let DrawOp::Text { y, .. } = op {
                    assert!(*y <= limit, "baseline {y} on page {}", page.number);
                }
            }
        }
        assert!(doc.page.ops.is_empty());
        assert_eq!(doc.cursor(), doc.page_top());
    }

    #[test]
    fn cursor_stays_within_page_bounds_before_writes() {
        let mut doc = Document::new(options()).unwrap();
        doc.add_title("Bounds", None).unwrap();
        let body = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. ".repeat(6);
        for i in 0..30 {
            let kind = SectionKind::ALL[i % SectionKind::ALL.len()];
            let before_page = doc.page_count();
            let placement = doc.add_section(&Section::new(kind, format!("S{i}"), body.clone()))
                .unwrap();
            assert!(placement.top >= doc.page_top());
            if doc.page_count() > before_page {
                assert_eq!(placement.top, doc.page_top());
            }
        }
    }

    #[test]
    fn narrow_page_is_rejected() {
        let mut opts = options();
        opts.geometry = PageGeometry {
            width: 100.0,
            ..PageGeometry::letter()
        };
        assert!(matches!(Document::new(opts), Err(Error::InvalidGeometry(_))));
    }
}
