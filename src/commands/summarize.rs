use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use crate::catalog::load_catalog;
use crate::organize::{organize, tree};

/// Run the summarize command - print the organized structure of a catalog
pub fn run(catalog: &Path, json: bool, quiet: bool) -> Result<()> {
    let books = load_catalog(catalog)?;
    let authors = organize(&books);

    if json {
        let output =
            serde_json::to_string_pretty(&authors).context("Failed to serialize structure")?;
        println!("{}", output);
        return Ok(());
    }

    if !quiet {
        println!("{}", catalog.display().to_string().bold());
        println!("{}", tree::render_counts(&authors).cyan());
        println!();
    }

    print!("{}", tree::render_tree(&authors));

    Ok(())
}
