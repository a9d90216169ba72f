//! Detext CLI - plain-text extraction tool
//!
//! Converts RTF documents to normalized plain text (or a JSON document with
//! metadata), one file at a time or in batch.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use detext_backend::{BackendOptions, DocumentConverter};
use detext_core::Document;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Output serialization for converted documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output (text plus metadata)
    Json,
}

impl OutputFormat {
    const fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
        }
    }
}

/// Verbosity level for output control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verbosity {
    /// Suppress all output except errors
    Quiet,
    /// Normal output (default)
    Normal,
    /// Verbose output with extra details
    Verbose,
}

impl Verbosity {
    const fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    const fn should_show_output(self) -> bool {
        !matches!(self, Self::Quiet)
    }

    const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose)
    }
}

/// Extract plain text from rich-text documents
#[derive(Debug, Parser)]
#[command(name = "detext", version, about)]
struct Cli {
    /// Input files (use `-` to read from stdin and write to stdout)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output path (single input only; default: input path with the output
    /// extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Keep at most this many characters of extracted text
    #[arg(long, value_name = "N")]
    max_chars: Option<usize>,

    /// Extract even when the `{\rtf` magic prefix is missing
    #[arg(long)]
    lenient: bool,

    /// Suppress per-file status output
    #[arg(short, long)]
    quiet: bool,

    /// Show extra details per converted file
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,
}

/// Derive the sibling output path: `report.rtf` -> `report.txt`.
fn smart_output_path(input: &Path, format: OutputFormat) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();
    input.with_file_name(format!(
        "{}.{}",
        stem.to_string_lossy(),
        format.extension()
    ))
}

/// Render a converted document in the requested output format.
fn render(doc: &Document, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(doc.text.clone()),
        OutputFormat::Json => Ok(doc.to_json()?),
    }
}

/// Convert one file to its output path. Returns the destination.
fn convert_file(
    converter: &DocumentConverter,
    input: &Path,
    output: Option<&Path>,
    format: OutputFormat,
) -> Result<(PathBuf, Document)> {
    let doc = converter
        .convert(input)
        .with_context(|| format!("failed to convert {}", input.display()))?;

    let dest = output.map_or_else(|| smart_output_path(input, format), Path::to_path_buf);
    let rendered = render(&doc, format)?;
    std::fs::write(&dest, rendered)
        .with_context(|| format!("failed to write {}", dest.display()))?;

    Ok((dest, doc))
}

/// Convert stdin to stdout.
fn convert_stdin(converter: &DocumentConverter, format: OutputFormat) -> Result<()> {
    let mut data = Vec::new();
    std::io::stdin()
        .read_to_end(&mut data)
        .context("failed to read stdin")?;

    let doc = converter
        .convert_bytes(&data)
        .context("failed to convert stdin")?;

    let rendered = render(&doc, format)?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.write_all(b"\n"))
        .context("failed to write stdout")?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default())
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);

    let options = BackendOptions::default()
        .with_require_magic(!cli.lenient)
        .with_max_chars(cli.max_chars);
    let converter = DocumentConverter::with_options(options);

    if cli.inputs.len() > 1 && cli.output.is_some() {
        bail!("--output is only valid with a single input file");
    }

    // Stdin mode: single `-` input, result on stdout.
    if cli.inputs.len() == 1 && cli.inputs[0] == Path::new("-") {
        return convert_stdin(&converter, cli.format);
    }

    let total = cli.inputs.len();
    let mut failed = 0usize;

    for input in &cli.inputs {
        match convert_file(&converter, input, cli.output.as_deref(), cli.format) {
            Ok((dest, doc)) => {
                if verbosity.should_show_output() {
                    println!(
                        "{} {} -> {}",
                        "✓".green(),
                        input.display(),
                        dest.display()
                    );
                }
                if verbosity.is_verbose() {
                    println!(
                        "  {} characters, {} paragraphs",
                        doc.metadata.num_characters, doc.metadata.num_paragraphs
                    );
                }
            }
            Err(err) => {
                failed += 1;
                eprintln!("{} {}: {err:#}", "✗".red(), input.display());
            }
        }
    }

    if total > 1 && verbosity.should_show_output() {
        let converted = total - failed;
        println!("Converted {converted} of {total} files");
    }
    if failed > 0 {
        bail!("{failed} of {total} conversions failed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smart_output_path_replaces_extension() {
        let out = smart_output_path(Path::new("dir/report.rtf"), OutputFormat::Text);
        assert_eq!(out, Path::new("dir/report.txt"));
    }

    #[test]
    fn test_smart_output_path_json() {
        let out = smart_output_path(Path::new("notes.rtf"), OutputFormat::Json);
        assert_eq!(out, Path::new("notes.json"));
    }

    #[test]
    fn test_smart_output_path_no_extension() {
        let out = smart_output_path(Path::new("bare"), OutputFormat::Text);
        assert_eq!(out, Path::new("bare.txt"));
    }

    #[test]
    fn test_verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(true, false), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
        assert!(!Verbosity::Quiet.should_show_output());
        assert!(Verbosity::Verbose.is_verbose());
    }
}
