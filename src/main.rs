use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};

use guide_pdf::{DocumentOptions, GuideKind, Margins, PageGeometry};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PageSize {
    Letter,
    A4,
}

#[derive(Parser, Debug)]
#[command(name = "guide-pdf", version, about = "Lay out a paginated PDF guide")]
struct Cli {
    /// Built-in guide: main-guide, quick-reference or prompt-library
    #[arg(required_unless_present_any = ["content", "list"])]
    guide: Option<String>,

    /// JSON file describing a custom guide
    #[arg(long, conflicts_with = "guide")]
    content: Option<PathBuf>,

    /// Output path (defaults to the guide's file name)
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = PageSize::Letter)]
    page_size: PageSize,

    /// Margin on all four sides, in points
    #[arg(long)]
    margin: Option<f32>,

    /// Generation date stamped into the footer and metadata (YYYY-MM-DD)
    #[arg(long)]
    date: Option<NaiveDate>,

    /// List the built-in guides and exit
    #[arg(long)]
    list: bool,
}

fn run(cli: Cli) -> Result<(), guide_pdf::Error> {
    if cli.list {
        for kind in GuideKind::ALL {
            println!("{kind}\t{}", kind.file_name());
        }
        return Ok(());
    }

    let mut geometry = match cli.page_size {
        PageSize::Letter => PageGeometry::letter(),
        PageSize::A4 => PageGeometry::a4(),
    };
    if let Some(m) = cli.margin {
        geometry.margins = Margins::all(m);
    }
    let date = cli
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let options = DocumentOptions::new(date).with_geometry(geometry);

    let guide = match (&cli.content, &cli.guide) {
        (Some(path), _) => {
            let output = cli.output.clone().unwrap_or_else(|| path.with_extension("pdf"));
            let guide = guide_pdf::write_custom_guide(path, &options, &output)?;
            (guide, output)
        }
        (None, Some(name)) => {
            let kind: GuideKind = name.parse()?;
            let output = cli
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(kind.file_name()));
            let guide = guide_pdf::write_guide(kind, &options, &output)?;
            (guide, output)
        }
        (None, None) => return Ok(()),
    };

    let (guide, output) = guide;
    println!(
        "Wrote {} ({} pages) to {}",
        guide.file_name,
        guide.page_count,
        output.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
