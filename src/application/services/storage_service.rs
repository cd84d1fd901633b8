use async_trait::async_trait;

use crate::{
    application::error::MediaError,
    domain::models::file::{
        DeleteOutcome, FileListing, FileRecord, FileUpdate, FileUpload, ListQuery,
        UploadAuthParams,
    },
};

/// Boundary to the remote media provider.
///
/// Implementations report every failure as a [`MediaError`], never as a raw
/// transport error, and enforce the request-side limits before any network call.
#[async_trait]
pub trait MediaStorage: Send + Sync {
    async fn auth_params(&self) -> Result<UploadAuthParams, MediaError>;
    async fn upload(&self, upload: FileUpload) -> Result<FileRecord, MediaError>;
    async fn get_details(&self, file_id: &str) -> Result<FileRecord, MediaError>;
    async fn list(&self, query: ListQuery) -> Result<FileListing, MediaError>;
    async fn delete(&self, file_id: &str) -> Result<(), MediaError>;
    /// One outcome per requested id, in request order.
    async fn bulk_delete(&self, file_ids: &[String]) -> Result<Vec<DeleteOutcome>, MediaError>;
    async fn update_details(
        &self,
        file_id: &str,
        update: FileUpdate,
    ) -> Result<FileRecord, MediaError>;
}
