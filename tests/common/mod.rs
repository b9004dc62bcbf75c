#![allow(dead_code)]

use chrono::NaiveDate;
use guide_pdf::{Document, DocumentOptions, Section, SectionKind};

pub fn options() -> DocumentOptions {
    let _ = env_logger::try_init();
    DocumentOptions::new(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap())
}

pub fn document() -> Document {
    Document::new(options()).expect("default geometry is valid")
}

/// `n` words of lowercase filler text.
pub fn words(n: usize) -> String {
    const VOCAB: [&str; 12] = [
        "prompt", "context", "clarity", "model", "answer", "review", "draft", "tone",
        "format", "audience", "example", "limit",
    ];
    (0..n)
        .map(|i| VOCAB[i % VOCAB.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn text_section(title: &str, word_count: usize) -> Section {
    Section::new(SectionKind::Text, title, words(word_count))
}

/// Count page objects in a PDF. Page dictionaries are written uncompressed.
pub fn pdf_page_objects(bytes: &[u8]) -> usize {
    let needle = b"/Type /Page";
    bytes
        .windows(needle.len() + 1)
        .filter(|w| &w[..needle.len()] == needle && w[needle.len()] != b's')
        .count()
}

pub fn pdf_text(bytes: &[u8]) -> String {
    pdf_extract::extract_text_from_mem(bytes).expect("generated PDF is readable")
}
