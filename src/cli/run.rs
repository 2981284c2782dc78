//! Run command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use properties_reader::config::{load_task_config, TaskConfig};
use properties_reader::store::JsonFileStore;
use properties_reader::{run_task, FsSource};

#[derive(Args)]
pub struct RunArgs {
    /// Targets to run (all targets in the task file when omitted)
    #[arg(value_name = "TARGET")]
    pub targets: Vec<String>,

    /// Path to the task file (properties-reader.toml or .yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// JSON store file receiving the results (overrides the task file)
    #[arg(short = 's', long, value_name = "FILE")]
    pub store: Option<PathBuf>,

    /// Encoding of the properties files (overrides the task file)
    #[arg(short = 'e', long, value_name = "ENCODING")]
    pub encoding: Option<String>,
}

pub fn run(args: RunArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed resolving working directory")?;
    let mut config = load_task_config(&cwd, args.config.as_deref())?;

    if args.encoding.is_some() {
        config.encoding = args.encoding;
    }
    let store_path = match args.store {
        Some(path) => cwd.join(path),
        None => config.store_path(),
    };

    let source = FsSource::new()
        .encoding(config.resolved_encoding()?)
        .preserve_bom(config.preserve_bom);
    let targets = select_targets(&config, args.targets)?;

    let mut store = JsonFileStore::open(&store_path)?;
    for target in &targets {
        let files = config.target_files(target).unwrap_or_default();
        let report = run_task(&mut store, target, &files, &source)
            .with_context(|| format!("Target '{}' failed", target))?;
        println!(
            "{}: {} file(s) read, {} skipped",
            target,
            report.files_read.len(),
            report.skipped.len()
        );
    }

    store.save()?;
    println!("Wrote {}", store.path().display());

    Ok(())
}

fn select_targets(config: &TaskConfig, requested: Vec<String>) -> Result<Vec<String>> {
    if requested.is_empty() {
        return Ok(config.target_names().map(str::to_string).collect());
    }

    for name in &requested {
        if !config.targets.contains_key(name) {
            let available: Vec<&str> = config.target_names().collect();
            anyhow::bail!("Unknown target '{}' (available: {})", name, available.join(", "));
        }
    }
    Ok(requested)
}
