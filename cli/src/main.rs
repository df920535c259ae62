//! pdfocr CLI - OCR text extraction from scanned PDFs

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdfocr::{detect, render, JsonFormat, PdfOcr, TesseractEngine, SUPPORTED_LANGUAGES};

#[derive(Parser)]
#[command(name = "pdfocr")]
#[command(version)]
#[command(about = "Extract text from scanned PDFs via OCR", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// OCR language code
    #[arg(short, long, default_value = "vie")]
    lang: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract plain text
    Text {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// OCR language code (vie, eng)
        #[arg(short, long, default_value = "vie")]
        lang: String,

        /// Rasterization resolution
        #[arg(long, default_value = "300")]
        dpi: u32,

        /// Recognize pages in parallel
        #[arg(long)]
        parallel: bool,
    },

    /// Extract structured JSON with metadata and summary statistics
    Json {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// OCR language code (vie, eng)
        #[arg(short, long, default_value = "vie")]
        lang: String,

        /// Rasterization resolution
        #[arg(long, default_value = "300")]
        dpi: u32,

        /// Recognize pages in parallel
        #[arg(long)]
        parallel: bool,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show input and engine information
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Text {
            input,
            output,
            lang,
            dpi,
            parallel,
        }) => cmd_text(&input, output.as_deref(), &lang, dpi, parallel),
        Some(Commands::Json {
            input,
            output,
            lang,
            dpi,
            parallel,
            compact,
        }) => cmd_json(&input, output.as_deref(), &lang, dpi, parallel, compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        None => {
            if let Some(input) = cli.input {
                cmd_text(&input, None, &cli.lang, 300, false)
            } else {
                println!("{}", "Usage: pdfocr <FILE> [--lang vie|eng]".yellow());
                println!("       pdfocr --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn warn_unsupported_language(lang: &str) {
    if !pdfocr::is_supported_language(lang) {
        eprintln!(
            "{}: language '{}' is not in the supported set ({}); the engine may reject it",
            "Warning".yellow().bold(),
            lang,
            SUPPORTED_LANGUAGES.join(", ")
        );
    }
}

fn extraction_spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    lang: &str,
    dpi: u32,
    parallel: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    warn_unsupported_language(lang);

    let mut builder = PdfOcr::new().with_dpi(dpi);
    if parallel {
        builder = builder.parallel();
    }

    let pb = extraction_spinner("Rasterizing and recognizing pages...");
    let report = builder.extract(input, lang);
    pb.finish_and_clear();

    if !report.success {
        return Err(report
            .error
            .unwrap_or_else(|| "extraction failed".to_string())
            .into());
    }

    let text = report.text.unwrap_or_default();
    if let Some(path) = output {
        fs::write(path, &text)?;
        println!(
            "{} {} ({} pages, {:.2}s)",
            "Saved to".green(),
            path.display(),
            report.total_pages,
            report.processing_time
        );
    } else {
        println!("{}", text);
    }

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    lang: &str,
    dpi: u32,
    parallel: bool,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    warn_unsupported_language(lang);

    let mut builder = PdfOcr::new().with_dpi(dpi);
    if parallel {
        builder = builder.parallel();
    }

    let pb = extraction_spinner("Rasterizing and recognizing pages...");
    let doc = builder.extract_structured(input, lang);
    pb.finish_and_clear();

    if !doc.success {
        return Err(doc
            .error
            .unwrap_or_else(|| "extraction failed".to_string())
            .into());
    }

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = render::to_json(&doc, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let format = detect::detect_format_from_path(input)?;
    let size = fs::metadata(input)?.len();
    let tesseract = TesseractEngine::new();

    println!("{}", "Input".green().bold());
    println!("  file:    {}", input.display());
    println!("  format:  {}", format);
    println!("  size:    {} bytes", size);
    println!();
    println!("{}", "OCR".green().bold());
    println!("  languages: {}", SUPPORTED_LANGUAGES.join(", "));
    println!(
        "  tesseract: {}",
        if tesseract.is_available() {
            "available".green().to_string()
        } else {
            "not found".red().to_string()
        }
    );

    Ok(())
}
