use crate::fonts::Font;

/// Average glyph advance relative to the font size, used only by the
/// page-break estimator.
const AVG_CHAR_EM: f32 = 0.57;

pub(super) const DOT_PITCH: f32 = 4.0;
pub(super) const LEADER_GAP: f32 = 10.0;

const ELLIPSIS: &str = "\u{2026}";

/// Wrap text into lines no wider than `max_width`.
/// Hard newlines always start a new line and blank lines are kept, so the
/// returned line count is the rendered height in lines. A word wider than
/// the whole line is broken between characters. Monospaced text keeps the
/// leading indentation of each hard line.
pub(super) fn wrap_text(text: &str, font: Font, font_size: f32, max_width: f32) -> Vec<String> {
    let space_w = font.text_width(" ", font_size);
    let mut lines: Vec<String> = Vec::new();

    for para in text.split('\n') {
        let para = para.trim_end_matches('\r');
        let mut current = if font == Font::Mono {
            leading_indent(para)
        } else {
            String::new()
        };
        let mut current_w = font.text_width(&current, font_size);
        let mut has_word = false;

        for word in para.split_whitespace() {
            let ww = font.text_width(word, font_size);
            let proposed = if has_word {
                current_w + space_w + ww
            } else {
                current_w + ww
            };

            if proposed <= max_width {
                if has_word {
                    current.push(' ');
                }
                current.push_str(word);
                current_w = proposed;
                has_word = true;
                continue;
            }

            if has_word {
                lines.push(std::mem::take(&mut current));
            } else {
                // The indent alone leaves no room for the word.
                current.clear();
            }
            current_w = 0.0;

            if ww <= max_width {
                current.push_str(word);
                current_w = ww;
            } else {
                for ch in word.chars() {
                    let cw = font.text_width(ch.encode_utf8(&mut [0; 4]), font_size);
                    if !current.is_empty() && current_w + cw > max_width {
                        lines.push(std::mem::take(&mut current));
                        current_w = 0.0;
                    }
                    current.push(ch);
                    current_w += cw;
                }
            }
            has_word = true;
        }

        if !has_word {
            current.clear();
        }
        lines.push(current);
    }

    lines
}

/// Leading whitespace of a line as spaces, tabs expanded to four.
fn leading_indent(line: &str) -> String {
    line.chars()
        .take_while(|c| c.is_whitespace())
        .map(|c| if c == '\t' { "    " } else { " " })
        .collect()
}

/// Cut `text` so it measures at most `max_width`, ending in an ellipsis
/// when anything was removed.
pub(super) fn fit_to_width(text: &str, font: Font, font_size: f32, max_width: f32) -> String {
    if font.text_width(text, font_size) <= max_width {
        return text.to_string();
    }
    let budget = max_width - font.text_width(ELLIPSIS, font_size);
    let mut out = String::new();
    let mut used = 0.0;
    for ch in text.chars() {
        let cw = font.text_width(ch.encode_utf8(&mut [0; 4]), font_size);
        if used + cw > budget {
            break;
        }
        out.push(ch);
        used += cw;
    }
    let mut out = out.trim_end().to_string();
    out.push_str(ELLIPSIS);
    out
}

/// Rough characters-per-line for a column of `width` points.
pub(super) fn chars_per_line(width: f32, font_size: f32) -> usize {
    ((width / (font_size * AVG_CHAR_EM)).floor() as usize).max(1)
}

/// Estimated wrapped line count: every hard line takes at least one line,
/// longer lines take `ceil(chars / per_line)`.
pub(super) fn estimate_lines(text: &str, per_line: usize) -> usize {
    text.split('\n')
        .map(|line| line.trim_end().chars().count().div_ceil(per_line).max(1))
        .sum()
}

/// Placement of a table of contents dot leader, relative to the left margin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct DotLeader {
    pub(super) start_x: f32,
    pub(super) count: usize,
}

/// Fit dots between a title and a right-aligned page number, leaving
/// `LEADER_GAP` on both sides. A title too long for the line gets no dots.
pub(super) fn dot_leader(content_width: f32, title_width: f32, page_width: f32) -> DotLeader {
    let span = content_width - title_width - page_width - 2.0 * LEADER_GAP;
    let count = if span > 0.0 {
        (span / DOT_PITCH).floor() as usize
    } else {
        0
    };
    DotLeader {
        start_x: title_width + LEADER_GAP,
        count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_keeps_blank_lines_and_breaks_long_paragraphs() {
        let text = "first line\n\nthird line";
        let lines = wrap_text(text, Font::Regular, 11.0, 500.0);
        assert_eq!(lines, vec!["first line", "", "third line"]);

        let long = "word ".repeat(200);
        let lines = wrap_text(&long, Font::Regular, 11.0, 200.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(Font::Regular.text_width(line, 11.0) <= 200.0 + 0.01, "{line:?} too wide");
        }
    }

    #[test]
    fn wrap_splits_a_word_wider_than_the_line() {
        let word = "x".repeat(100);
        let lines = wrap_text(&word, Font::Mono, 10.0, 60.0);
        // Courier is 6pt per glyph at 10pt, so ten glyphs per line.
        assert_eq!(lines.len(), 10);
        assert!(lines.iter().all(|l| l.chars().count() == 10));
    }

    #[test]
    fn monospaced_lines_keep_their_indent() {
        let code = "fn main() {\n    let x = 1;\n\tx\n}";
        let lines = wrap_text(code, Font::Mono, 10.0, 500.0);
        assert_eq!(lines, vec!["fn main() {", "    let x = 1;", "    x", "}"]);

        let prose = wrap_text("    indented prose", Font::Regular, 11.0, 500.0);
        assert_eq!(prose, vec!["indented prose"]);

        // Indent wider than the line gives way to the word.
        let narrow = wrap_text("          abc", Font::Mono, 10.0, 30.0);
        assert_eq!(narrow, vec!["abc"]);
    }

    #[test]
    fn fit_to_width_cuts_with_ellipsis() {
        assert_eq!(fit_to_width("Intro", Font::Regular, 11.0, 200.0), "Intro");

        let long = "Professional Templates: Quick Start Guide ".repeat(3);
        let cut = fit_to_width(&long, Font::Regular, 11.0, 150.0);
        assert!(cut.ends_with('\u{2026}'));
        assert!(Font::Regular.text_width(&cut, 11.0) <= 150.0 + 0.01);
        assert!(cut.starts_with("Professional"));
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        assert_eq!(wrap_text("", Font::Regular, 11.0, 100.0), vec![String::new()]);
    }

    #[test]
    fn estimate_counts_hard_lines() {
        assert_eq!(estimate_lines("a\nb\n\nc", 80), 4);
        assert_eq!(estimate_lines(&"y".repeat(161), 80), 3);
    }

    #[test]
    fn letter_body_text_fits_about_eighty_chars() {
        let per_line = chars_per_line(504.0, 11.0);
        assert!((78..=82).contains(&per_line), "{per_line}");
    }

    #[test]
    fn dot_leader_fills_to_within_one_pitch() {
        let content_width = 504.0;
        for (title_w, page_w) in [(40.0, 6.0), (120.5, 12.2), (300.0, 18.0)] {
            let leader = dot_leader(content_width, title_w, page_w);
            let used = title_w + page_w + 2.0 * LEADER_GAP + leader.count as f32 * DOT_PITCH;
            assert!(used <= content_width + 0.001);
            assert!(content_width - used < DOT_PITCH, "gap {}", content_width - used);
        }
    }

    #[test]
    fn dot_leader_degrades_to_zero_dots() {
        let leader = dot_leader(504.0, 600.0, 12.0);
        assert_eq!(leader.count, 0);
        assert_eq!(leader.start_x, 600.0 + LEADER_GAP);
    }
}
