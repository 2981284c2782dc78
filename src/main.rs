//! properties-reader: Read Java-style .properties files into nested JSON configuration
//!
//! Parses one or more properties files, merges them in order and either prints
//! the result or stores it under a named target in a JSON configuration file.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
