use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use crate::catalog::load_catalog;
use crate::config::Config;
use crate::organize::{organize, tree};
use crate::placement::{place_with_progress, PlacementEvent, PlacementOptions, PlacementStats};

/// Options for the build command, as given on the command line
pub struct BuildArgs<'a> {
    pub catalog: &'a Path,
    pub dest: Option<&'a Path>,
    pub source: Option<&'a Path>,
    pub dry_run: bool,
    pub print_structure: bool,
    pub json: bool,
    pub verbose: bool,
    pub quiet: bool,
}

/// Run the build command - shelve every audiobook of a catalog into the library
pub fn run(args: BuildArgs) -> Result<()> {
    let config = Config::load().context("Failed to load config")?;

    let dest = config
        .dest(args.dest)
        .context("No destination specified. Set [build] dest in config or pass DEST")?;
    let source = config.source(args.source, args.catalog);

    let books = load_catalog(args.catalog)?;
    let authors = organize(&books);

    if args.print_structure && !args.json {
        print!("{}", tree::render_tree(&authors));
        println!();
    }

    if !args.quiet && !args.json {
        println!(
            "Shelving {} into {}",
            tree::render_counts(&authors),
            dest.display()
        );
    }

    let options = PlacementOptions {
        dry_run: args.dry_run,
        verbose: args.verbose && !args.json,
    };
    let result = place_with_progress(&authors, &source, &dest, options, |event| {
        print_event(event, args.dry_run)
    });
    let stats = match result {
        Ok(stats) => stats,
        Err(e) => {
            if e.is_filesystem_failure() {
                eprintln!(
                    "{}: nothing was rolled back; re-run after fixing the cause to resume",
                    "Note".yellow().bold()
                );
            }
            return Err(e).with_context(|| format!("Failed to build library in {:?}", dest));
        }
    };

    if args.json {
        let output = serde_json::to_string_pretty(&stats).context("Failed to serialize stats")?;
        println!("{}", output);
        return Ok(());
    }

    print_summary(&stats, args.dry_run);

    if args.dry_run && !args.quiet {
        println!();
        println!("Run without {} to copy files.", "--dry-run".cyan());
    }

    Ok(())
}

fn print_event(event: PlacementEvent, dry_run: bool) {
    let would = if dry_run { "would " } else { "" };
    match event {
        PlacementEvent::CreateDirectory(path) => {
            println!("  {} {}create {}", "+".cyan(), would, path.display());
        }
        PlacementEvent::DirectoryExists(path) => {
            println!("  {} {} (exists)", "○".yellow(), path.display());
        }
        PlacementEvent::CopyFile { from, to } => {
            println!(
                "  {} {}copy {} → {}",
                "✓".green(),
                would,
                from.display(),
                to.display()
            );
        }
        PlacementEvent::FileExists(path) => {
            println!("  {} {} (skipped, exists)", "○".yellow(), path.display());
        }
    }
}

fn print_summary(stats: &PlacementStats, dry_run: bool) {
    println!();
    if dry_run {
        println!("{}", "Dry run completed - no changes made:".yellow().bold());
    } else {
        println!("{}", "Operation completed:".green().bold());
    }
    println!("  Directories created: {}", stats.directories_created);
    println!("  Files copied: {}", stats.files_copied);
    println!("  Directories skipped: {}", stats.directories_skipped);
    println!("  Files skipped: {}", stats.files_skipped);
}
