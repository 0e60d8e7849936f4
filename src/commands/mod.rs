pub mod build;
pub mod summarize;
