mod reader;
mod record;

#[allow(unused_imports)]
pub use reader::{load_catalog, CatalogError};
#[allow(unused_imports)]
pub use record::{AudioFile, Audiobook, Chapter};
