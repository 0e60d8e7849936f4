//! Materializes an organized library on disk
//!
//! Directories and files are only ever added: anything already present at a
//! destination path is counted as skipped and left untouched, so a run can be
//! repeated against a partially populated library.

mod error;

pub use error::PlacementError;

use serde::Serialize;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

use crate::catalog::Audiobook;
use crate::organize::AuthorGroup;

/// Options for a placement run
#[derive(Debug, Clone, Copy, Default)]
pub struct PlacementOptions {
    /// Decide everything but leave the filesystem untouched
    pub dry_run: bool,
    /// Report every directory/file decision to the progress callback
    pub verbose: bool,
}

/// What a placement run did, or would have done in a dry run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlacementStats {
    pub directories_created: usize,
    pub directories_skipped: usize,
    pub files_copied: usize,
    pub files_skipped: usize,
}

/// A single decision made during placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementEvent<'a> {
    CreateDirectory(&'a Path),
    DirectoryExists(&'a Path),
    CopyFile { from: &'a Path, to: &'a Path },
    FileExists(&'a Path),
}

/// Place every book of the organized library under `destination_root`
#[allow(dead_code)]
pub fn place(
    authors: &[AuthorGroup],
    source_root: &Path,
    destination_root: &Path,
    options: PlacementOptions,
) -> Result<PlacementStats, PlacementError> {
    place_with_progress(authors, source_root, destination_root, options, |_| {})
}

/// Place every book of the organized library under `destination_root`,
/// passing each decision to `on_event` when `options.verbose` is set
///
/// Layout is `<author>/<series>/<title>/<file>`, or `<author>/<title>/<file>`
/// for books outside a series. The first error ends the run; nothing done up
/// to that point is undone.
pub fn place_with_progress<F>(
    authors: &[AuthorGroup],
    source_root: &Path,
    destination_root: &Path,
    options: PlacementOptions,
    on_event: F,
) -> Result<PlacementStats, PlacementError>
where
    F: FnMut(PlacementEvent),
{
    if !destination_root.is_dir() {
        return Err(PlacementError::MissingDestinationRoot {
            path: destination_root.to_path_buf(),
        });
    }

    info!(
        source = %source_root.display(),
        destination = %destination_root.display(),
        dry_run = options.dry_run,
        authors = authors.len(),
        "placing library"
    );

    let mut placer = Placer {
        source_root,
        options,
        on_event,
        planned: HashSet::new(),
        stats: PlacementStats::default(),
    };

    for author in authors {
        let author_dir = join_name(destination_root, author.name);
        placer.ensure_dir(&author_dir)?;

        for series in &author.series {
            let series_dir = join_name(&author_dir, series.name);
            placer.ensure_dir(&series_dir)?;

            for book in &series.books {
                placer.shelve(book, &series_dir)?;
            }
        }

        for book in &author.books {
            placer.shelve(book, &author_dir)?;
        }
    }

    Ok(placer.stats)
}

/// State of one placement run; the statistics never leave it until the run succeeds
struct Placer<'a, F> {
    source_root: &'a Path,
    options: PlacementOptions,
    on_event: F,
    /// Paths a dry run would have created, treated as existing for the rest of the run
    planned: HashSet<PathBuf>,
    stats: PlacementStats,
}

impl<F> Placer<'_, F>
where
    F: FnMut(PlacementEvent),
{
    fn exists(&self, path: &Path) -> bool {
        path.exists() || self.planned.contains(path)
    }

    fn emit(&mut self, event: PlacementEvent) {
        if self.options.verbose {
            (self.on_event)(event);
        }
    }

    fn ensure_dir(&mut self, dir: &Path) -> Result<(), PlacementError> {
        if self.exists(dir) {
            debug!(path = %dir.display(), "directory exists");
            self.stats.directories_skipped += 1;
            self.emit(PlacementEvent::DirectoryExists(dir));
            return Ok(());
        }

        debug!(path = %dir.display(), dry_run = self.options.dry_run, "creating directory");
        self.emit(PlacementEvent::CreateDirectory(dir));
        if self.options.dry_run {
            // create_dir_all would also create any missing parents
            let missing: Vec<PathBuf> = dir
                .ancestors()
                .take_while(|p| !self.exists(p))
                .map(Path::to_path_buf)
                .collect();
            self.planned.extend(missing);
        } else {
            std::fs::create_dir_all(dir).map_err(|source| PlacementError::CreateDirectory {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        self.stats.directories_created += 1;
        Ok(())
    }

    /// Copy a book's m4b files into `<book_dir>/<title>/`
    fn shelve(&mut self, book: &Audiobook, book_dir: &Path) -> Result<(), PlacementError> {
        let sources = book
            .audio_files()
            .map(|f| resolve_source(self.source_root, &f.path))
            .collect::<Result<Vec<_>, _>>()?;

        let final_dir = join_name(book_dir, &book.title);
        self.ensure_dir(&final_dir)?;

        for source in sources {
            if !source.is_file() {
                return Err(PlacementError::MissingSourceFile { path: source });
            }

            let file_name = source
                .file_name()
                .ok_or_else(|| PlacementError::InvalidSourcePath {
                    path: source.clone(),
                })?;
            let dest = final_dir.join(file_name);

            if self.exists(&dest) {
                debug!(path = %dest.display(), "file exists");
                self.stats.files_skipped += 1;
                self.emit(PlacementEvent::FileExists(&dest));
                continue;
            }

            debug!(
                from = %source.display(),
                to = %dest.display(),
                dry_run = self.options.dry_run,
                "copying file"
            );
            self.emit(PlacementEvent::CopyFile {
                from: &source,
                to: &dest,
            });
            if self.options.dry_run {
                self.planned.insert(dest);
            } else {
                std::fs::copy(&source, &dest).map_err(|e| PlacementError::CopyFile {
                    from: source.clone(),
                    to: dest.clone(),
                    source: e,
                })?;
            }
            self.stats.files_copied += 1;
        }

        Ok(())
    }
}

/// Plain name components of a path, dropping roots, prefixes and `.`/`..`
fn relative_components(path: &str) -> PathBuf {
    Path::new(path)
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .collect()
}

/// Append an author, series or title name to a library directory
///
/// A `/` inside the name nests directories, but the result never leaves `base`.
fn join_name(base: &Path, name: &str) -> PathBuf {
    base.join(relative_components(name))
}

/// Resolve a catalog file path under the source root
///
/// Only plain name components are kept, so the result never leaves `root`.
fn resolve_source(root: &Path, catalog_path: &str) -> Result<PathBuf, PlacementError> {
    let relative = relative_components(catalog_path);

    if relative.as_os_str().is_empty() {
        return Err(PlacementError::InvalidSourcePath {
            path: PathBuf::from(catalog_path),
        });
    }

    Ok(root.join(relative))
}
