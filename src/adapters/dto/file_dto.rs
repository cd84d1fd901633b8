use crate::{
    domain::models::file::{DeleteOutcome, FileRecord, FileUpdate, FileUpload, ListQuery},
    proto::{
        DeleteResult, FileDetails, GetFilesRequest, UpdateFileDetailsRequest, UploadFileRequest,
    },
};

/// Proto3 strings carry no presence: empty means "not provided".
fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn non_empty_list(values: Vec<String>) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

impl From<FileRecord> for FileDetails {
    fn from(record: FileRecord) -> Self {
        Self {
            file_id: record.file_id,
            name: record.name,
            url: record.url,
            thumbnail_url: record.thumbnail_url,
            size: record.size,
            file_type: record.file_type,
            tags: record.tags,
            folder_path: record.folder_path,
            created_at: record.created_at,
            updated_at: record.updated_at,
            width: record.width,
            height: record.height,
            custom_metadata: record.custom_metadata,
        }
    }
}

impl From<DeleteOutcome> for DeleteResult {
    fn from(outcome: DeleteOutcome) -> Self {
        Self {
            file_id: outcome.file_id,
            success: outcome.success,
            error_message: outcome.error_message,
        }
    }
}

impl From<UploadFileRequest> for FileUpload {
    fn from(request: UploadFileRequest) -> Self {
        Self {
            folder: non_empty(request.folder),
            tags: non_empty_list(request.tags),
            use_unique_filename: request.use_unique_filename,
            custom_coordinates: non_empty(request.custom_coordinates),
            ..FileUpload::new(request.file_data, request.filename)
        }
    }
}

/// Pagination is passed through as-is; normalization belongs to the handler.
impl From<GetFilesRequest> for ListQuery {
    fn from(request: GetFilesRequest) -> Self {
        Self {
            skip: request.skip,
            limit: request.limit,
            search_query: non_empty(request.search_query),
            tags: non_empty_list(request.tags),
            file_type: non_empty(request.file_type),
            sort: non_empty(request.sort),
            path: non_empty(request.path),
        }
    }
}

impl From<UpdateFileDetailsRequest> for FileUpdate {
    fn from(request: UpdateFileDetailsRequest) -> Self {
        Self {
            tags: non_empty_list(request.tags),
            custom_coordinates: non_empty(request.custom_coordinates),
            custom_metadata: if request.custom_metadata.is_empty() {
                None
            } else {
                Some(request.custom_metadata)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_wire_fields_become_absent() {
        let upload = FileUpload::from(UploadFileRequest {
            file_data: vec![1, 2, 3],
            filename: "a.png".to_string(),
            use_unique_filename: false,
            ..Default::default()
        });
        assert_eq!(upload.folder, None);
        assert_eq!(upload.tags, None);
        assert_eq!(upload.custom_coordinates, None);
        assert!(!upload.use_unique_filename);

        let update = FileUpdate::from(UpdateFileDetailsRequest {
            file_id: "f1".to_string(),
            custom_coordinates: "1,2,3,4".to_string(),
            ..Default::default()
        });
        assert_eq!(update.field_names(), vec!["custom_coordinates"]);
    }

    #[test]
    fn list_request_keeps_raw_pagination() {
        let query = ListQuery::from(GetFilesRequest {
            skip: -1,
            limit: 0,
            search_query: "name:\"a.png\"".to_string(),
            ..Default::default()
        });
        assert_eq!((query.skip, query.limit), (-1, 0));
        assert_eq!(query.search_query.as_deref(), Some("name:\"a.png\""));
        assert_eq!(query.sort, None);
    }
}
