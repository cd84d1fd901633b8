use std::collections::HashMap;

/// Normalized view of a file stored at the provider.
///
/// Fields the provider omits keep their defaults (empty string, zero, empty
/// collections) so responses always have the same shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileRecord {
    pub file_id: String,
    pub name: String,
    pub url: String,
    pub thumbnail_url: String,
    pub size: i64,
    pub file_type: String,
    pub tags: Vec<String>,
    pub folder_path: String,
    pub created_at: String,
    pub updated_at: String,
    pub width: i32,
    pub height: i32,
    pub custom_metadata: HashMap<String, String>,
}

/// Result of deleting one id inside a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub file_id: String,
    pub success: bool,
    pub error_message: String,
}

impl DeleteOutcome {
    pub fn deleted(file_id: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
            success: true,
            error_message: String::new(),
        }
    }

    pub fn failed(file_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
            success: false,
            error_message: reason.into(),
        }
    }
}

/// Single-use credentials for a direct-to-provider upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadAuthParams {
    pub token: String,
    /// Unix timestamp (seconds) after which the signature is rejected.
    pub expire: i64,
    pub signature: String,
}

#[derive(Debug, Clone)]
pub struct FileUpload {
    pub content: Vec<u8>,
    pub filename: String,
    pub folder: Option<String>,
    pub tags: Option<Vec<String>>,
    pub use_unique_filename: bool,
    pub custom_coordinates: Option<String>,
}

impl FileUpload {
    pub fn new(content: Vec<u8>, filename: impl Into<String>) -> Self {
        Self {
            content,
            filename: filename.into(),
            folder: None,
            tags: None,
            use_unique_filename: true,
            custom_coordinates: None,
        }
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }

    pub fn size_mb(&self) -> f64 {
        self.content.len() as f64 / (1024.0 * 1024.0)
    }
}

pub const DEFAULT_LIST_LIMIT: i32 = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub skip: i32,
    pub limit: i32,
    pub search_query: Option<String>,
    pub tags: Option<Vec<String>>,
    pub file_type: Option<String>,
    pub sort: Option<String>,
    pub path: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIST_LIMIT,
            search_query: None,
            tags: None,
            file_type: None,
            sort: None,
            path: None,
        }
    }
}

impl ListQuery {
    /// Coerces out-of-range pagination instead of rejecting it:
    /// a non-positive limit becomes [`DEFAULT_LIST_LIMIT`], a negative skip becomes 0.
    pub fn normalized(mut self) -> Self {
        if self.limit <= 0 {
            self.limit = DEFAULT_LIST_LIMIT;
        }
        if self.skip < 0 {
            self.skip = 0;
        }
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileListing {
    pub files: Vec<FileRecord>,
    pub total_count: i64,
}

/// Partial update; `None` fields are left untouched at the provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileUpdate {
    pub tags: Option<Vec<String>>,
    pub custom_coordinates: Option<String>,
    pub custom_metadata: Option<HashMap<String, String>>,
}

impl FileUpdate {
    /// Names of the fields that will be sent, in wire order.
    pub fn field_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.tags.is_some() {
            names.push("tags");
        }
        if self.custom_coordinates.is_some() {
            names.push("custom_coordinates");
        }
        if self.custom_metadata.is_some() {
            names.push("custom_metadata");
        }
        names
    }
}
