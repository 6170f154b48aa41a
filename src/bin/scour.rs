//! scour: extract, scrub, and structurally summarize JSON data
//!
//! Usage:
//!   # Pull @rawstring payloads out of a JSON array export
//!   scour extract export.json
//!
//!   # Anonymize one JSON value per line, keeping structure intact
//!   scour scrub rawstrings.txt --rawstring --preserve-ids
//!
//!   # Reduce a whole JSON document to a type skeleton
//!   scour structure payload.json -o payload_shape.json
//!
//! Output goes to the input path with a mode suffix appended to the file
//! stem (`_rawstring_only`, `_scrubbed`, `_structure_only`) unless -o is
//! given.

// Use MiMalloc allocator for better performance (recommended by simd-json)
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use scour::{extract_tagged, process_lines, LineReport, Policy, ScrubConfig, Session, Transformer};
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "scour")]
#[command(about = "Extract, scrub, and structurally summarize JSON data", long_about = None)]
struct Args {
    /// Processing mode
    #[arg(value_enum)]
    mode: Mode,

    /// Input file path
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output file path (derived from the input path if omitted)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Replace identifier-like strings with consistent pseudonyms
    /// (scrub mode only)
    #[arg(long)]
    preserve_ids: bool,

    /// Treat each input line as an independent JSON value instead of
    /// parsing the whole file as one document (scrub/structure modes only)
    #[arg(long)]
    rawstring: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Extract @rawstring payloads from a JSON array
    Extract,
    /// Anonymize leaf values while preserving structure
    Scrub,
    /// Reduce values to type/emptiness tags
    Structure,
}

impl Mode {
    fn output_suffix(self) -> &'static str {
        match self {
            Mode::Extract => "_rawstring_only",
            Mode::Scrub => "_scrubbed",
            Mode::Structure => "_structure_only",
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| derive_output_path(&args.input, args.mode.output_suffix()));

    match args.mode {
        Mode::Extract => run_extract(&args.input, &output),
        Mode::Scrub => run_transform(&args, Policy::Scrub, &output),
        Mode::Structure => run_transform(&args, Policy::Structure, &output),
    }
}

/// Extract tagged payloads from a whole-document JSON array
fn run_extract(input: &Path, output: &Path) -> Result<()> {
    let document = read_document(input)?;
    let extraction = extract_tagged(&document)
        .with_context(|| format!("Failed to extract from {}", input.display()))?;

    let mut body = String::new();
    for raw in &extraction.strings {
        body.push_str(raw);
        body.push('\n');
    }
    std::fs::write(output, body)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("Processing complete!");
    println!("Output file: {}", output.display());
    println!("Total entries: {}", extraction.total_seen);
    println!("Valid rawstrings: {}", extraction.extracted_count());
    print_preview(&extraction.strings, 3);

    Ok(())
}

/// Scrub or structure-reduce the input under the chosen policy
fn run_transform(args: &Args, policy: Policy, output: &Path) -> Result<()> {
    let config = ScrubConfig {
        preserve_ids: args.preserve_ids,
        ..ScrubConfig::default()
    };

    let report = if args.rawstring {
        let file = File::open(&args.input)
            .with_context(|| format!("Failed to open {}", args.input.display()))?;
        process_lines(BufReader::new(file), policy, config)?
    } else {
        process_document(&args.input, policy, config)?
    };

    // Buffered until the whole batch succeeds, so a mid-batch failure
    // leaves no partial output file behind
    let mut body = String::new();
    for rendered in &report.rendered {
        body.push_str(rendered);
        body.push('\n');
    }
    std::fs::write(output, body)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("Processing complete!");
    println!("Output file: {}", output.display());
    println!("Total lines processed: {}", report.rendered.len());
    println!("String fields: {}", report.counts.strings);
    println!("Number fields: {}", report.counts.numbers);
    println!("Boolean fields: {}", report.counts.booleans);
    println!("Null fields: {}", report.counts.nulls);
    print_preview(&report.rendered, 2);

    Ok(())
}

/// Transform a whole file parsed as a single JSON document
fn process_document(input: &Path, policy: Policy, config: ScrubConfig) -> Result<LineReport> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON in {}", input.display()))?;

    let transformer = Transformer::new(config);
    let mut session = Session::new();
    let transformed = transformer.transform(&value, policy, &mut session);

    Ok(LineReport {
        total_lines: 1,
        rendered: vec![serde_json::to_string_pretty(&transformed)?],
        skipped: Vec::new(),
        counts: session.counts,
    })
}

/// Parse a whole file as one JSON document using SIMD-accelerated parsing
/// when possible
fn read_document(path: &Path) -> Result<Value> {
    let content =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    // Try SIMD parsing first (faster); it mutates its buffer, so hand it a
    // copy and keep the original for the serde_json fallback
    let mut simd_buf = content.clone();
    match simd_json::to_owned_value(&mut simd_buf) {
        Ok(parsed) => {
            let json_str = simd_json::to_string(&parsed)?;
            Ok(serde_json::from_str(&json_str)?)
        }
        Err(_) => serde_json::from_slice(&content)
            .with_context(|| format!("Failed to parse JSON in {}", path.display())),
    }
}

/// Append a mode suffix to the file stem, keeping the extension
fn derive_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let name = match input.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}{}.{}", stem, suffix, ext),
        None => format!("{}{}", stem, suffix),
    };

    input.with_file_name(name)
}

/// Print the first few output items, truncated to 100 characters each
fn print_preview(samples: &[String], limit: usize) {
    if samples.is_empty() {
        return;
    }

    println!();
    println!("Sample preview:");
    for (i, sample) in samples.iter().take(limit).enumerate() {
        let snippet: String = sample.chars().take(100).collect();
        let marker = if sample.chars().count() > 100 { "..." } else { "" };
        println!("  {}. {}{}", i + 1, snippet, marker);
    }
}
