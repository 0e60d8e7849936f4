use serde::{Deserialize, Serialize};

// Only files matching both are shelved
pub const AUDIO_KIND: &str = "audio";
pub const AUDIO_TYPE: &str = "M4B";

/// One audiobook entry from an OpenAudible `books.json` export
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Audiobook {
    #[serde(default)]
    pub asin: String,
    pub author: String,
    pub title: String,
    pub title_short: Option<String>,
    pub narrated_by: Option<String>,
    pub series_name: Option<String>,
    /// Kept as a string: series positions are compared lexicographically
    pub series_sequence: Option<String>,
    pub series_link: Option<String>,
    pub duration: Option<String>,
    pub seconds: Option<u64>,
    pub filename: Option<String>,
    pub genre: Option<String>,
    pub publisher: Option<String>,
    pub language: Option<String>,
    pub release_date: Option<String>,
    pub purchase_date: Option<String>,
    pub summary: Option<String>,
    pub files: Vec<AudioFile>,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

/// A file belonging to an audiobook, relative to the export's books directory
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AudioFile {
    pub kind: String,
    #[serde(rename = "type")]
    pub file_type: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Chapter {
    pub length_ms: u64,
    pub start_offset_ms: u64,
    pub start_offset_sec: u64,
    pub title: String,
}

impl AudioFile {
    /// Whether this file is an m4b audio file that should be shelved
    pub fn is_shelvable(&self) -> bool {
        self.kind == AUDIO_KIND && self.file_type == AUDIO_TYPE
    }
}

impl Audiobook {
    /// Files selected for shelving, in catalog order
    pub fn audio_files(&self) -> impl Iterator<Item = &AudioFile> {
        self.files.iter().filter(|f| f.is_shelvable())
    }
}
