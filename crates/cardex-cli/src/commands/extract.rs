//! Extract command - process a single card image.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use cardex_core::{CardexConfig, DocumentExtractor, DocumentImage, DocumentType, ExtractionResult};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input image file (PNG or JPEG)
    #[arg(required = true)]
    input: PathBuf,

    /// Document type on the card
    #[arg(short = 't', long, value_enum)]
    doc_type: DocTypeArg,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show extraction confidence score
    #[arg(long)]
    show_confidence: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum DocTypeArg {
    /// Student identification card
    StudentId,
    /// National identity card
    Nid,
    /// Company identification card
    CompanyId,
}

impl From<DocTypeArg> for DocumentType {
    fn from(value: DocTypeArg) -> Self {
        match value {
            DocTypeArg::StudentId => DocumentType::StudentId,
            DocTypeArg::Nid => DocumentType::NationalId,
            DocTypeArg::CompanyId => DocumentType::CompanyId,
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

/// Map a file extension to the MIME type the pipeline validates against.
pub fn mime_for_path(path: &Path) -> anyhow::Result<&'static str> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "png" => Ok("image/png"),
        "jpg" | "jpeg" => Ok("image/jpeg"),
        _ => anyhow::bail!("Unsupported file format: {extension} (expected png, jpg or jpeg)"),
    }
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        CardexConfig::from_file(Path::new(path))?
    } else {
        CardexConfig::default()
    };

    // Check input file exists
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let mime_type = mime_for_path(&args.input)?;
    info!("Processing file: {}", args.input.display());

    // Create progress bar
    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    pb.set_message("Loading image...");
    pb.set_position(10);
    let bytes = fs::read(&args.input)?;

    pb.set_message("Extracting fields...");
    pb.set_position(40);

    let extractor = DocumentExtractor::with_config(config);
    let image = DocumentImage::new(&bytes, mime_type);
    let result = extractor.process(&image, args.doc_type.into())?;

    pb.set_position(100);
    pb.finish_with_message("Done");

    // Surface non-fatal warnings
    if !result.metadata.warnings.is_empty() {
        eprintln!("{}", style("Warnings:").yellow());
        for warning in &result.metadata.warnings {
            eprintln!("  - {warning}");
        }
    }

    // Format output
    let output = format_result(&result, args.format)?;

    // Write output
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{output}");
    }

    // Show summary
    if args.show_confidence {
        println!();
        println!(
            "{} Extraction confidence: {:.1}%",
            style("ℹ").blue(),
            result.metadata.confidence * 100.0
        );
        if let Some(time_ms) = result.metadata.processing_time_ms {
            println!("{} Processing time: {}ms", style("ℹ").blue(), time_ms);
        }
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Render an extraction result in the requested format.
pub fn format_result(result: &ExtractionResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Csv => format_csv(result),
        OutputFormat::Text => Ok(format_text(result)),
    }
}

fn format_csv(result: &ExtractionResult) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["field", "value"])?;
    for (field, value) in result.fields.to_map() {
        wtr.write_record([&field, &value])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(result: &ExtractionResult) -> String {
    let mut output = String::new();

    for (field, value) in result.fields.to_map() {
        output.push_str(&format!("{field}: {value}\n"));
    }
    output.push_str(&format!(
        "\nConfidence: {:.1}%\n",
        result.metadata.confidence * 100.0
    ));
    if let Some(recognizer) = &result.metadata.recognizer {
        output.push_str(&format!("Recognizer: {recognizer}\n"));
    }

    output
}
