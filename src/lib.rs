mod content;
mod error;
mod fonts;
mod model;
mod pdf;

pub use content::{
    CustomGuide, GeneratedGuide, GuideKind, GuidePlan, PDF_CONTENT_TYPE, build_custom_guide,
    build_guide,
};
pub use error::Error;
pub use model::{
    Brand, Color, DocumentOptions, Margins, PageGeometry, Palette, Section, SectionKind, TocEntry,
    Typography,
};
pub use pdf::{Document, SectionPlacement};

use std::path::Path;
use std::time::Instant;

fn write_timed(guide: &GeneratedGuide, output: &Path, t0: Instant) -> Result<(), Error> {
    let t_build = t0.elapsed();
    std::fs::write(output, &guide.bytes)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: build={:.1}ms, write={:.1}ms, total={:.1}ms ({} pages, {} bytes -> {})",
        t_build.as_secs_f64() * 1000.0,
        (t_total - t_build).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        guide.page_count,
        guide.bytes.len(),
        output.display(),
    );
    Ok(())
}

pub fn write_guide(
    kind: GuideKind,
    options: &DocumentOptions,
    output: &Path,
) -> Result<GeneratedGuide, Error> {
    let t0 = Instant::now();
    let guide = build_guide(kind, options)?;
    write_timed(&guide, output, t0)?;
    Ok(guide)
}

pub fn write_custom_guide(
    content: &Path,
    options: &DocumentOptions,
    output: &Path,
) -> Result<GeneratedGuide, Error> {
    let t0 = Instant::now();
    let guide = build_custom_guide(CustomGuide::load(content)?, options)?;
    write_timed(&guide, output, t0)?;
    Ok(guide)
}
