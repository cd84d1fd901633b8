use std::sync::Arc;

use tonic::Status;
use tracing::{error, info};

use crate::{
    adapters::error::failure_status,
    application::{error::MediaError, services::MediaStorage},
    domain::models::file::{DeleteOutcome, FileListing, FileRecord, ListQuery, UploadAuthParams},
    proto::{
        DeleteFileRequest, DeleteFileResponse, DeleteMultipleFilesRequest,
        DeleteMultipleFilesResponse, GetFileDetailsRequest, GetFileDetailsResponse,
        GetFilesRequest, GetFilesResponse, GetUploadAuthRequest, GetUploadAuthResponse,
        UpdateFileDetailsRequest, UpdateFileDetailsResponse, UploadFileRequest,
        UploadFileResponse,
    },
};

pub const PARTIAL_DELETE_MESSAGE: &str = "Some files failed to delete";

/// RPC handlers: validate the request, delegate to storage, shape the response.
///
/// Every path ends in either a success envelope or a failure [`Status`] built
/// by [`failure_status`]; no error leaves a handler unclassified.
pub struct MediaController {
    storage: Arc<dyn MediaStorage>,
    public_key: String,
}

impl MediaController {
    pub fn new(storage: Arc<dyn MediaStorage>, public_key: impl Into<String>) -> Self {
        Self {
            storage,
            public_key: public_key.into(),
        }
    }

    pub async fn get_upload_auth(
        &self,
        _request: GetUploadAuthRequest,
    ) -> Result<GetUploadAuthResponse, Status> {
        info!("Processing GetUploadAuth request");

        match self.storage.auth_params().await {
            Ok(UploadAuthParams {
                token,
                expire,
                signature,
            }) => Ok(GetUploadAuthResponse {
                token,
                expire,
                signature,
                public_key: self.public_key.clone(),
                success: true,
                error_message: String::new(),
            }),
            Err(e) => {
                error!(error = %e, kind = e.kind(), "GetUploadAuth failed");
                Err(failure_status(
                    &e,
                    GetUploadAuthResponse {
                        success: false,
                        error_message: e.to_string(),
                        ..Default::default()
                    },
                ))
            }
        }
    }

    pub async fn upload_file(
        &self,
        request: UploadFileRequest,
    ) -> Result<UploadFileResponse, Status> {
        let filename = request.filename.clone();

        match self.try_upload_file(request).await {
            Ok(file) => Ok(UploadFileResponse {
                file: Some(file.into()),
                success: true,
                error_message: String::new(),
            }),
            Err(e) => {
                error!(error = %e, kind = e.kind(), filename = %filename, "UploadFile failed");
                Err(failure_status(
                    &e,
                    UploadFileResponse {
                        file: None,
                        success: false,
                        error_message: e.to_string(),
                    },
                ))
            }
        }
    }

    async fn try_upload_file(&self, request: UploadFileRequest) -> Result<FileRecord, MediaError> {
        if request.file_data.is_empty() {
            return Err(MediaError::invalid_argument("File data is required"));
        }
        if request.filename.is_empty() {
            return Err(MediaError::invalid_argument("Filename is required"));
        }

        info!(
            filename = %request.filename,
            folder = %request.folder,
            tags = ?request.tags,
            "Processing UploadFile request"
        );
        self.storage.upload(request.into()).await
    }

    pub async fn get_file_details(
        &self,
        request: GetFileDetailsRequest,
    ) -> Result<GetFileDetailsResponse, Status> {
        match self.try_get_file_details(&request.file_id).await {
            Ok(file) => Ok(GetFileDetailsResponse {
                file: Some(file.into()),
                success: true,
                error_message: String::new(),
            }),
            Err(e) => {
                error!(error = %e, kind = e.kind(), file_id = %request.file_id, "GetFileDetails failed");
                Err(failure_status(
                    &e,
                    GetFileDetailsResponse {
                        file: None,
                        success: false,
                        error_message: e.to_string(),
                    },
                ))
            }
        }
    }

    async fn try_get_file_details(&self, file_id: &str) -> Result<FileRecord, MediaError> {
        require_file_id(file_id)?;
        info!(file_id = %file_id, "Processing GetFileDetails request");
        self.storage.get_details(file_id).await
    }

    /// Lists files. Out-of-range pagination is silently corrected, never rejected.
    pub async fn get_files(&self, request: GetFilesRequest) -> Result<GetFilesResponse, Status> {
        let query = ListQuery::from(request).normalized();
        info!(
            skip = query.skip,
            limit = query.limit,
            search_query = ?query.search_query,
            tags = ?query.tags,
            file_type = ?query.file_type,
            "Processing GetFiles request"
        );

        match self.storage.list(query).await {
            Ok(FileListing { files, total_count }) => Ok(GetFilesResponse {
                files: files.into_iter().map(Into::into).collect(),
                success: true,
                error_message: String::new(),
                total_count: i32::try_from(total_count).unwrap_or(i32::MAX),
            }),
            Err(e) => {
                error!(error = %e, kind = e.kind(), "GetFiles failed");
                Err(failure_status(
                    &e,
                    GetFilesResponse {
                        files: Vec::new(),
                        success: false,
                        error_message: e.to_string(),
                        total_count: 0,
                    },
                ))
            }
        }
    }

    pub async fn update_file_details(
        &self,
        request: UpdateFileDetailsRequest,
    ) -> Result<UpdateFileDetailsResponse, Status> {
        let file_id = request.file_id.clone();

        match self.try_update_file_details(request).await {
            Ok(file) => Ok(UpdateFileDetailsResponse {
                file: Some(file.into()),
                success: true,
                error_message: String::new(),
            }),
            Err(e) => {
                error!(error = %e, kind = e.kind(), file_id = %file_id, "UpdateFileDetails failed");
                Err(failure_status(
                    &e,
                    UpdateFileDetailsResponse {
                        file: None,
                        success: false,
                        error_message: e.to_string(),
                    },
                ))
            }
        }
    }

    async fn try_update_file_details(
        &self,
        request: UpdateFileDetailsRequest,
    ) -> Result<FileRecord, MediaError> {
        require_file_id(&request.file_id)?;
        let file_id = request.file_id.clone();

        info!(file_id = %file_id, tags = ?request.tags, "Processing UpdateFileDetails request");
        self.storage.update_details(&file_id, request.into()).await
    }

    pub async fn delete_file(
        &self,
        request: DeleteFileRequest,
    ) -> Result<DeleteFileResponse, Status> {
        match self.try_delete_file(&request.file_id).await {
            Ok(()) => Ok(DeleteFileResponse {
                success: true,
                error_message: String::new(),
            }),
            Err(e) => {
                error!(error = %e, kind = e.kind(), file_id = %request.file_id, "DeleteFile failed");
                Err(failure_status(
                    &e,
                    DeleteFileResponse {
                        success: false,
                        error_message: e.to_string(),
                    },
                ))
            }
        }
    }

    async fn try_delete_file(&self, file_id: &str) -> Result<(), MediaError> {
        require_file_id(file_id)?;
        info!(file_id = %file_id, "Processing DeleteFile request");
        self.storage.delete(file_id).await
    }

    pub async fn delete_multiple_files(
        &self,
        request: DeleteMultipleFilesRequest,
    ) -> Result<DeleteMultipleFilesResponse, Status> {
        match self.try_delete_multiple_files(request.file_ids).await {
            Ok(outcomes) => {
                let all_success = outcomes.iter().all(|o| o.success);
                Ok(DeleteMultipleFilesResponse {
                    results: outcomes.into_iter().map(Into::into).collect(),
                    all_success,
                    error_message: if all_success {
                        String::new()
                    } else {
                        PARTIAL_DELETE_MESSAGE.to_string()
                    },
                })
            }
            Err(e) => {
                error!(error = %e, kind = e.kind(), "DeleteMultipleFiles failed");
                Err(failure_status(
                    &e,
                    DeleteMultipleFilesResponse {
                        results: Vec::new(),
                        all_success: false,
                        error_message: e.to_string(),
                    },
                ))
            }
        }
    }

    async fn try_delete_multiple_files(
        &self,
        file_ids: Vec<String>,
    ) -> Result<Vec<DeleteOutcome>, MediaError> {
        if file_ids.is_empty() {
            return Err(MediaError::invalid_argument(
                "At least one file ID is required",
            ));
        }

        info!(file_count = file_ids.len(), "Processing DeleteMultipleFiles request");
        self.storage.bulk_delete(&file_ids).await
    }
}

fn require_file_id(file_id: &str) -> Result<(), MediaError> {
    if file_id.is_empty() {
        Err(MediaError::invalid_argument("File ID is required"))
    } else {
        Ok(())
    }
}
