//! Parse command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

use properties_reader::utils::resolve_encoding;
use properties_reader::{read_documents, Document, FsSource};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
    Toml,
}

#[derive(Args)]
pub struct ParseArgs {
    /// Properties files merged in order; the first one is required
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Encoding of the files (auto-detected when omitted)
    #[arg(short = 'e', long, value_name = "ENCODING")]
    pub encoding: Option<String>,

    /// Keep a leading byte-order mark in the decoded text
    #[arg(long)]
    pub preserve_bom: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,
}

pub fn run(args: ParseArgs) -> Result<()> {
    let encoding = match args.encoding.as_deref() {
        Some(label) => Some(
            resolve_encoding(label).ok_or_else(|| anyhow::anyhow!("Unknown encoding '{}'", label))?,
        ),
        None => None,
    };
    let source = FsSource::new().encoding(encoding).preserve_bom(args.preserve_bom);

    let report = read_documents(&args.files, &source)?;
    let output = render(&report.document, args.format, args.compact)?;
    print!("{}", output);

    Ok(())
}

fn render(doc: &Document, format: OutputFormat, compact: bool) -> Result<String> {
    let mut output = match format {
        OutputFormat::Json if compact => serde_json::to_string(doc)?,
        OutputFormat::Json => serde_json::to_string_pretty(doc)?,
        OutputFormat::Yaml => serde_yaml::to_string(doc).context("Failed rendering YAML")?,
        OutputFormat::Toml => toml::to_string_pretty(doc).context("Failed rendering TOML")?,
    };
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}
