//! Batch command - process multiple card images.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error};

use cardex_core::{CardexConfig, DocumentExtractor, DocumentImage, ExtractionResult};

use super::extract::{DocTypeArg, OutputFormat, format_result, mime_for_path};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Document type on the cards
    #[arg(short = 't', long, value_enum)]
    doc_type: DocTypeArg,

    /// Output directory for per-file results
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct FileOutcome {
    path: PathBuf,
    result: Option<ExtractionResult>,
    error: Option<String>,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        CardexConfig::from_file(Path::new(path))?
    } else {
        CardexConfig::default()
    };

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "png" | "jpg" | "jpeg")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    // Create output directory if specified
    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    // Each document is processed independently; a shared extractor carries
    // no state between calls.
    let extractor = DocumentExtractor::with_config(config);
    let mut outcomes = Vec::with_capacity(files.len());

    for path in files {
        let outcome = match process_file(&extractor, &path, &args) {
            Ok(result) => FileOutcome {
                path,
                result: Some(result),
                error: None,
            },
            Err(e) => {
                if !args.continue_on_error {
                    pb.abandon();
                    return Err(e.context(format!("failed to process {}", path.display())));
                }
                error!("failed to process {}: {e}", path.display());
                FileOutcome {
                    path,
                    result: None,
                    error: Some(e.to_string()),
                }
            }
        };
        outcomes.push(outcome);
        pb.inc(1);
    }

    pb.finish();

    // Summary CSV across all files
    if args.summary {
        let summary = build_summary(&outcomes)?;
        if let Some(ref output_dir) = args.output_dir {
            let path = output_dir.join("summary.csv");
            fs::write(&path, summary)?;
            println!("{} Summary written to {}", style("✓").green(), path.display());
        } else {
            println!("{summary}");
        }
    }

    let succeeded = outcomes.iter().filter(|o| o.result.is_some()).count();
    println!(
        "{} Processed {}/{} files in {:?}",
        style("✓").green(),
        succeeded,
        outcomes.len(),
        start.elapsed()
    );

    Ok(())
}

fn process_file(
    extractor: &DocumentExtractor,
    path: &Path,
    args: &BatchArgs,
) -> anyhow::Result<ExtractionResult> {
    let mime_type = mime_for_path(path)?;
    let bytes = fs::read(path)?;

    let image = DocumentImage::new(&bytes, mime_type);
    let result = extractor.process(&image, args.doc_type.into())?;

    debug!(
        "extracted {} fields from {}",
        result.fields.to_map().len(),
        path.display()
    );

    // Per-file output next to the summary
    if let Some(ref output_dir) = args.output_dir {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("result");
        let extension = match args.format {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        };
        let output_path = output_dir.join(format!("{stem}.{extension}"));
        fs::write(&output_path, format_result(&result, args.format)?)?;
    }

    Ok(result)
}

fn build_summary(outcomes: &[FileOutcome]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["file", "fullName", "idNumber", "confidence", "error"])?;
    for outcome in outcomes {
        let (full_name, id_number, confidence) = match &outcome.result {
            Some(result) => (
                result.fields.full_name.clone().unwrap_or_default(),
                result.fields.id_number.clone().unwrap_or_default(),
                format!("{:.2}", result.metadata.confidence),
            ),
            None => (String::new(), String::new(), String::new()),
        };

        wtr.write_record([
            &outcome.path.display().to_string(),
            &full_name,
            &id_number,
            &confidence,
            &outcome.error.clone().unwrap_or_default(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}
