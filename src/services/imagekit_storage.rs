use std::{
    collections::{HashMap, HashSet},
    time::Duration,
};

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;
use hmac::{Hmac, Mac};
use reqwest::{multipart, Client, RequestBuilder, Response, StatusCode, Url};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use sha1::Sha1;
use tracing::{error, info};
use uuid::Uuid;

use crate::{
    application::{error::MediaError, services::MediaStorage},
    domain::{
        config::settings::Settings,
        models::file::{
            DeleteOutcome, FileListing, FileRecord, FileUpdate, FileUpload, ListQuery,
            UploadAuthParams,
        },
    },
    services::error::{provider_failure, FILE_NOT_FOUND, UNKNOWN_ERROR},
};

type HmacSha1 = Hmac<Sha1>;

/// Lifetime of client-side upload signatures.
pub const AUTH_TOKEN_TTL_SECS: i64 = 60 * 30;

#[derive(Debug, Clone)]
pub struct ImageKitConfig {
    pub private_key: String,
    pub api_base_url: String,
    pub upload_base_url: String,
    pub timeout: Duration,
    pub max_file_size_mb: u64,
    pub max_files_per_batch_delete: usize,
}

impl ImageKitConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            private_key: settings.ik_private_key.clone(),
            api_base_url: settings.ik_api_base_url.trim_end_matches('/').to_string(),
            upload_base_url: settings.ik_upload_base_url.trim_end_matches('/').to_string(),
            timeout: settings.upstream_timeout(),
            max_file_size_mb: settings.max_file_size_mb,
            max_files_per_batch_delete: settings.max_files_per_batch_delete,
        }
    }
}

/// File object as returned by the ImageKit management and upload APIs.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ImageKitFile {
    file_id: Option<String>,
    name: Option<String>,
    url: Option<String>,
    #[serde(alias = "thumbnail")]
    thumbnail_url: Option<String>,
    size: Option<i64>,
    file_type: Option<String>,
    tags: Option<Vec<String>>,
    file_path: Option<String>,
    created_at: Option<String>,
    updated_at: Option<String>,
    width: Option<i32>,
    height: Option<i32>,
    custom_metadata: Option<HashMap<String, Value>>,
}

impl From<ImageKitFile> for FileRecord {
    fn from(file: ImageKitFile) -> Self {
        let folder_path = file
            .file_path
            .as_deref()
            .map(folder_of)
            .unwrap_or_default();

        let custom_metadata = file
            .custom_metadata
            .unwrap_or_default()
            .into_iter()
            .map(|(key, value)| {
                let value = match value {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                (key, value)
            })
            .collect();

        Self {
            file_id: file.file_id.unwrap_or_default(),
            name: file.name.unwrap_or_default(),
            url: file.url.unwrap_or_default(),
            thumbnail_url: file.thumbnail_url.unwrap_or_default(),
            size: file.size.unwrap_or_default(),
            file_type: file.file_type.unwrap_or_default(),
            tags: file.tags.unwrap_or_default(),
            folder_path,
            created_at: file.created_at.unwrap_or_default(),
            updated_at: file.updated_at.unwrap_or_default(),
            width: file.width.unwrap_or_default(),
            height: file.height.unwrap_or_default(),
            custom_metadata,
        }
    }
}

/// `/a/b/c.png` -> `/a/b/`
fn folder_of(file_path: &str) -> String {
    match file_path.rsplit_once('/') {
        Some((dir, _)) => format!("{}/", dir),
        None => String::new(),
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct BulkDeleteResponse {
    successfully_deleted_file_ids: Option<Vec<String>>,
    missing_file_ids: Option<Vec<String>>,
}

pub struct ImageKitStorage {
    client: Client,
    config: ImageKitConfig,
}

impl ImageKitStorage {
    pub fn new(config: ImageKitConfig) -> Result<Self, MediaError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                MediaError::internal(format!("Failed to initialize ImageKit client: {}", e))
            })?;

        info!("ImageKit client initialized successfully");
        Ok(Self { client, config })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/v1/{}", self.config.api_base_url, path)
    }

    /// `files/<id>[/<suffix>]` with the id kept as a single percent-encoded
    /// segment, so `/`, `?` and `#` in an id cannot address another resource.
    fn file_url(&self, file_id: &str, suffix: Option<&str>) -> Result<Url, MediaError> {
        if matches!(file_id, "." | "..") {
            return Err(MediaError::invalid_argument(format!(
                "Invalid file ID: {}",
                file_id
            )));
        }

        let mut url = Url::parse(&self.api_url("files"))
            .map_err(|e| MediaError::internal(format!("Invalid ImageKit API URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| MediaError::internal("Invalid ImageKit API URL"))?
            .push(file_id)
            .extend(suffix);
        Ok(url)
    }

    fn upload_url(&self) -> String {
        format!("{}/api/v1/files/upload", self.config.upload_base_url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.basic_auth(&self.config.private_key, Some(""))
    }

    fn sign(&self, token: &str, expire: i64) -> Result<String, MediaError> {
        let mut mac = HmacSha1::new_from_slice(self.config.private_key.as_bytes()).map_err(|e| {
            MediaError::upstream(format!("Failed to get authentication parameters: {}", e))
        })?;
        mac.update(token.as_bytes());
        mac.update(expire.to_string().as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    async fn read_file(&self, response: Response) -> Result<FileRecord, MediaError> {
        let file: ImageKitFile = response.json().await?;
        Ok(file.into())
    }
}

async fn failure_body(response: Response) -> (StatusCode, String) {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    (status, body)
}

#[async_trait]
impl MediaStorage for ImageKitStorage {
    async fn auth_params(&self) -> Result<UploadAuthParams, MediaError> {
        info!("Generating authentication parameters");

        let token = Uuid::new_v4().to_string();
        let expire = Utc::now().timestamp() + AUTH_TOKEN_TTL_SECS;
        let signature = self.sign(&token, expire).inspect_err(|e| {
            error!(error = %e, "Failed to get authentication parameters");
        })?;

        info!("Generated authentication parameters");
        Ok(UploadAuthParams {
            token,
            expire,
            signature,
        })
    }

    async fn upload(&self, upload: FileUpload) -> Result<FileRecord, MediaError> {
        let size_mb = upload.size_mb();
        if size_mb > self.config.max_file_size_mb as f64 {
            let err = MediaError::size_exceeded(format!(
                "File size {:.2}MB exceeds limit of {}MB",
                size_mb, self.config.max_file_size_mb
            ));
            error!(filename = %upload.filename, size_mb = %format!("{:.2}", size_mb), error = %err, "File upload rejected");
            return Err(err);
        }

        info!(
            filename = %upload.filename,
            size_mb = %format!("{:.2}", size_mb),
            folder = ?upload.folder,
            tags = ?upload.tags,
            "Uploading file"
        );

        let mut form = multipart::Form::new()
            .text("file", STANDARD.encode(&upload.content))
            .text("fileName", upload.filename.clone())
            .text("useUniqueFileName", upload.use_unique_filename.to_string());
        if let Some(folder) = upload.folder {
            form = form.text("folder", folder);
        }
        if let Some(tags) = upload.tags {
            form = form.text("tags", tags.join(","));
        }
        if let Some(coordinates) = upload.custom_coordinates {
            form = form.text("customCoordinates", coordinates);
        }

        let response = self
            .authorized(self.client.post(self.upload_url()))
            .multipart(form)
            .send()
            .await
            .map_err(MediaError::from)
            .inspect_err(|e| error!(filename = %upload.filename, error = %e, "File upload failed"))?;

        if !response.status().is_success() {
            let (status, body) = failure_body(response).await;
            let err = provider_failure("Upload failed", status, &body);
            error!(filename = %upload.filename, error = %err, "File upload failed");
            return Err(err);
        }

        let file = self.read_file(response).await?;
        info!(file_id = %file.file_id, "File uploaded successfully");
        Ok(file)
    }

    async fn get_details(&self, file_id: &str) -> Result<FileRecord, MediaError> {
        info!(file_id = %file_id, "Fetching file details");

        let url = self.file_url(file_id, Some("details"))?;
        let response = self
            .authorized(self.client.get(url))
            .send()
            .await
            .map_err(MediaError::from)
            .inspect_err(|e| error!(file_id = %file_id, error = %e, "Failed to get file details"))?;

        if response.status() == StatusCode::NOT_FOUND {
            info!(file_id = %file_id, "File not found");
            return Err(MediaError::not_found(format!("{}: {}", FILE_NOT_FOUND, file_id)));
        }
        if !response.status().is_success() {
            let (status, body) = failure_body(response).await;
            let err = provider_failure("Failed to get file details", status, &body);
            error!(file_id = %file_id, error = %err, "Failed to get file details");
            return Err(err);
        }

        let file = self.read_file(response).await?;
        info!(file_id = %file_id, "File details retrieved");
        Ok(file)
    }

    async fn list(&self, query: ListQuery) -> Result<FileListing, MediaError> {
        info!(
            skip = query.skip,
            limit = query.limit,
            search_query = ?query.search_query,
            tags = ?query.tags,
            file_type = ?query.file_type,
            "Listing files"
        );

        let mut params: Vec<(&str, String)> = vec![
            ("skip", query.skip.to_string()),
            ("limit", query.limit.to_string()),
        ];
        if let Some(search_query) = query.search_query {
            params.push(("searchQuery", search_query));
        }
        if let Some(tags) = query.tags {
            params.push(("tags", tags.join(",")));
        }
        if let Some(file_type) = query.file_type {
            params.push(("type", file_type.clone()));
            params.push(("fileType", file_type));
        }
        if let Some(sort) = query.sort {
            params.push(("sort", sort));
        }
        if let Some(path) = query.path {
            params.push(("path", path));
        }

        let response = self
            .authorized(self.client.get(self.api_url("files")))
            .query(&params)
            .send()
            .await
            .map_err(MediaError::from)
            .inspect_err(|e| error!(error = %e, "Failed to list files"))?;

        if !response.status().is_success() {
            let (status, body) = failure_body(response).await;
            let err = provider_failure("Failed to list files", status, &body);
            error!(error = %err, "Failed to list files");
            return Err(err);
        }

        let header_total = response
            .headers()
            .get("x-total-count")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<i64>().ok());

        let raw: Vec<ImageKitFile> = response.json().await?;
        let files: Vec<FileRecord> = raw.into_iter().map(FileRecord::from).collect();
        let total_count = header_total.unwrap_or(files.len() as i64);

        info!(count = files.len(), total_count, "Files listed successfully");
        Ok(FileListing { files, total_count })
    }

    async fn delete(&self, file_id: &str) -> Result<(), MediaError> {
        info!(file_id = %file_id, "Deleting file");

        let url = self.file_url(file_id, None)?;
        let response = self
            .authorized(self.client.delete(url))
            .send()
            .await
            .map_err(MediaError::from)
            .inspect_err(|e| error!(file_id = %file_id, error = %e, "Failed to delete file"))?;

        match response.status() {
            StatusCode::NO_CONTENT => {
                info!(file_id = %file_id, "File deleted successfully");
                Ok(())
            }
            StatusCode::NOT_FOUND => {
                info!(file_id = %file_id, "File not found");
                Err(MediaError::not_found(format!("{}: {}", FILE_NOT_FOUND, file_id)))
            }
            _ => {
                let (status, body) = failure_body(response).await;
                let err = provider_failure("Failed to delete file", status, &body);
                error!(file_id = %file_id, error = %err, "Failed to delete file");
                Err(err)
            }
        }
    }

    async fn bulk_delete(&self, file_ids: &[String]) -> Result<Vec<DeleteOutcome>, MediaError> {
        if file_ids.len() > self.config.max_files_per_batch_delete {
            let err = MediaError::batch_failure(format!(
                "Cannot delete more than {} files at once",
                self.config.max_files_per_batch_delete
            ));
            error!(file_count = file_ids.len(), error = %err, "Bulk delete rejected");
            return Err(err);
        }

        info!(file_count = file_ids.len(), "Bulk deleting files");

        let response = self
            .authorized(self.client.post(self.api_url("files/batch/deleteByFileIds")))
            .json(&json!({ "fileIds": file_ids }))
            .send()
            .await
            .map_err(MediaError::from)
            .inspect_err(|e| error!(error = %e, "Bulk delete failed"))?;

        if !response.status().is_success() {
            let (status, body) = failure_body(response).await;
            let err = provider_failure("Bulk delete failed", status, &body);
            error!(error = %err, "Bulk delete failed");
            return Err(err);
        }

        let body: BulkDeleteResponse = response.json().await?;
        let deleted: HashSet<String> = body
            .successfully_deleted_file_ids
            .unwrap_or_default()
            .into_iter()
            .collect();
        let missing: HashSet<String> = body.missing_file_ids.unwrap_or_default().into_iter().collect();

        let outcomes: Vec<DeleteOutcome> = file_ids
            .iter()
            .map(|file_id| {
                if deleted.contains(file_id) {
                    DeleteOutcome::deleted(file_id.clone())
                } else if missing.contains(file_id) {
                    DeleteOutcome::failed(file_id.clone(), FILE_NOT_FOUND)
                } else {
                    DeleteOutcome::failed(file_id.clone(), UNKNOWN_ERROR)
                }
            })
            .collect();

        let successful = outcomes.iter().filter(|o| o.success).count();
        info!(
            total = file_ids.len(),
            successful,
            failed = file_ids.len() - successful,
            "Bulk delete completed"
        );
        Ok(outcomes)
    }

    async fn update_details(
        &self,
        file_id: &str,
        update: FileUpdate,
    ) -> Result<FileRecord, MediaError> {
        info!(file_id = %file_id, updates = ?update.field_names(), "Updating file details");

        let mut body = Map::new();
        if let Some(tags) = update.tags {
            body.insert("tags".to_string(), json!(tags));
        }
        if let Some(coordinates) = update.custom_coordinates {
            body.insert("customCoordinates".to_string(), json!(coordinates));
        }
        if let Some(metadata) = update.custom_metadata {
            body.insert("customMetadata".to_string(), json!(metadata));
        }

        let url = self.file_url(file_id, Some("details"))?;
        let response = self
            .authorized(self.client.patch(url))
            .json(&Value::Object(body))
            .send()
            .await
            .map_err(MediaError::from)
            .inspect_err(|e| error!(file_id = %file_id, error = %e, "Failed to update file details"))?;

        if response.status() == StatusCode::NOT_FOUND {
            info!(file_id = %file_id, "File not found");
            return Err(MediaError::not_found(format!("{}: {}", FILE_NOT_FOUND, file_id)));
        }
        if !response.status().is_success() {
            let (status, body) = failure_body(response).await;
            let err = provider_failure("Failed to update file", status, &body);
            error!(file_id = %file_id, error = %err, "Failed to update file details");
            return Err(err);
        }

        let file = self.read_file(response).await?;
        info!(file_id = %file_id, "File details updated successfully");
        Ok(file)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::adapters::controllers::media_controller::tests::CapturedLogs;
    use mockito::{Matcher, Server};

    pub(crate) fn config_for(server_url: &str) -> ImageKitConfig {
        ImageKitConfig {
            private_key: "private_test".to_string(),
            api_base_url: server_url.to_string(),
            upload_base_url: server_url.to_string(),
            timeout: Duration::from_secs(5),
            max_file_size_mb: 100,
            max_files_per_batch_delete: 100,
        }
    }

    pub(crate) fn file_json(file_id: &str, size: i64) -> String {
        json!({
            "fileId": file_id,
            "name": "a.png",
            "url": "https://ik.imagekit.io/demo/uploads/a.png",
            "thumbnail": "https://ik.imagekit.io/demo/tr:n-ik_ml_thumbnail/uploads/a.png",
            "size": size,
            "fileType": "image",
            "tags": ["cat", "pet"],
            "filePath": "/uploads/a.png",
            "createdAt": "2024-01-01T00:00:00.000Z",
            "updatedAt": "2024-01-02T00:00:00.000Z",
            "width": 640,
            "height": 480,
            "customMetadata": { "owner": "u1", "rating": 5 },
            "customCoordinates": null
        })
        .to_string()
    }

    #[test]
    fn raw_file_normalization_fills_defaults() {
        let raw: ImageKitFile = serde_json::from_str(r#"{"fileId":"f1","tags":null}"#).unwrap();
        let record = FileRecord::from(raw);
        assert_eq!(record.file_id, "f1");
        assert_eq!(record.name, "");
        assert_eq!(record.size, 0);
        assert!(record.tags.is_empty());
        assert!(record.custom_metadata.is_empty());
        assert_eq!(record.folder_path, "");
    }

    #[test]
    fn folder_is_the_directory_part_of_the_path() {
        assert_eq!(folder_of("/a/b/c.png"), "/a/b/");
        assert_eq!(folder_of("/c.png"), "/");
        assert_eq!(folder_of("c.png"), "");
    }

    #[tokio::test]
    async fn auth_params_are_signed_with_the_private_key() {
        let storage = ImageKitStorage::new(config_for("http://127.0.0.1:9")).unwrap();
        let before = Utc::now().timestamp();
        let params = storage.auth_params().await.unwrap();

        assert!(Uuid::parse_str(&params.token).is_ok());
        assert!(params.expire >= before + AUTH_TOKEN_TTL_SECS);
        assert_eq!(params.signature, storage.sign(&params.token, params.expire).unwrap());
        assert_eq!(params.signature.len(), 40);

        let again = storage.auth_params().await.unwrap();
        assert_ne!(params.token, again.token);
    }

    #[tokio::test]
    async fn auth_params_logs_start_and_completion() {
        let logs = CapturedLogs::default();
        let _guard = logs.install(tracing::Level::INFO);

        let storage = ImageKitStorage::new(config_for("http://127.0.0.1:9")).unwrap();
        storage.auth_params().await.unwrap();

        let lines = logs.lines();
        let started = lines
            .iter()
            .position(|l| l.contains("Generating authentication parameters"));
        let finished = lines
            .iter()
            .position(|l| l.contains("Generated authentication parameters"));
        assert!(started.is_some() && finished.is_some(), "{:?}", lines);
        assert!(started < finished);
    }

    #[tokio::test]
    async fn get_details_maps_provider_fields() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/files/f1/details")
            .match_header("authorization", Matcher::Regex("^Basic ".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(file_json("f1", 2048))
            .create_async()
            .await;

        let storage = ImageKitStorage::new(config_for(&server.url())).unwrap();
        let record = storage.get_details("f1").await.unwrap();

        mock.assert_async().await;
        assert_eq!(record.file_id, "f1");
        assert_eq!(record.size, 2048);
        assert_eq!(record.folder_path, "/uploads/");
        assert_eq!(record.tags, vec!["cat".to_string(), "pet".to_string()]);
        assert_eq!(record.custom_metadata.get("owner").map(String::as_str), Some("u1"));
        assert_eq!(record.custom_metadata.get("rating").map(String::as_str), Some("5"));
        assert!(record.thumbnail_url.contains("thumbnail"));
        assert_eq!((record.width, record.height), (640, 480));
    }

    #[tokio::test]
    async fn get_details_404_is_not_found_and_5xx_is_upstream() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/v1/files/missing/details")
            .with_status(404)
            .create_async()
            .await;
        server
            .mock("GET", "/v1/files/broken/details")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let storage = ImageKitStorage::new(config_for(&server.url())).unwrap();

        let err = storage.get_details("missing").await.unwrap_err();
        assert_eq!(err, MediaError::not_found("File not found: missing"));

        let err = storage.get_details("broken").await.unwrap_err();
        assert_eq!(err.kind(), "UpstreamError");
        assert!(err.message().contains("boom"));
    }

    #[tokio::test]
    async fn upload_over_the_ceiling_never_reaches_the_provider() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/files/upload")
            .expect(0)
            .create_async()
            .await;

        let mut config = config_for(&server.url());
        config.max_file_size_mb = 1;
        let storage = ImageKitStorage::new(config).unwrap();

        let err = storage
            .upload(FileUpload::new(vec![0u8; 2 * 1024 * 1024], "big.png"))
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert_eq!(
            err,
            MediaError::size_exceeded("File size 2.00MB exceeds limit of 1MB")
        );
    }

    #[tokio::test]
    async fn upload_sends_base64_payload_and_options() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/files/upload")
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(STANDARD.encode(b"hello image")),
                Matcher::Regex("name=\"fileName\"".to_string()),
                Matcher::Regex("cat,pet".to_string()),
                Matcher::Regex("name=\"folder\"".to_string()),
            ]))
            .with_status(200)
            .with_body(file_json("f-up", 11))
            .create_async()
            .await;

        let storage = ImageKitStorage::new(config_for(&server.url())).unwrap();
        let mut upload = FileUpload::new(b"hello image".to_vec(), "a.png");
        upload.folder = Some("/uploads".to_string());
        upload.tags = Some(vec!["cat".to_string(), "pet".to_string()]);

        let record = storage.upload(upload).await.unwrap();
        mock.assert_async().await;
        assert_eq!(record.file_id, "f-up");
        assert_eq!(record.size, 11);
    }

    #[tokio::test]
    async fn list_passes_filters_and_defaults_total_to_page_length() {
        let mut server = Server::new_async().await;
        let body = format!("[{},{}]", file_json("a", 1), file_json("b", 2));
        let mock = server
            .mock("GET", "/v1/files")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("skip".into(), "10".into()),
                Matcher::UrlEncoded("limit".into(), "1000".into()),
                Matcher::UrlEncoded("tags".into(), "cat,pet".into()),
                Matcher::UrlEncoded("fileType".into(), "image".into()),
                Matcher::UrlEncoded("path".into(), "/uploads".into()),
            ]))
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let storage = ImageKitStorage::new(config_for(&server.url())).unwrap();
        let listing = storage
            .list(ListQuery {
                skip: 10,
                tags: Some(vec!["cat".to_string(), "pet".to_string()]),
                file_type: Some("image".to_string()),
                path: Some("/uploads".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(listing.files.len(), 2);
        assert_eq!(listing.total_count, 2);
        assert_eq!(listing.files[1].file_id, "b");
    }

    #[tokio::test]
    async fn list_prefers_the_total_count_header() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/v1/files")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("x-total-count", "57")
            .with_body(format!("[{}]", file_json("a", 1)))
            .create_async()
            .await;

        let storage = ImageKitStorage::new(config_for(&server.url())).unwrap();
        let listing = storage.list(ListQuery::default()).await.unwrap();
        assert_eq!(listing.total_count, 57);
    }

    #[tokio::test]
    async fn delete_requires_no_content() {
        let mut server = Server::new_async().await;
        server.mock("DELETE", "/v1/files/ok").with_status(204).create_async().await;
        server.mock("DELETE", "/v1/files/gone").with_status(404).create_async().await;
        server.mock("DELETE", "/v1/files/odd").with_status(200).create_async().await;

        let storage = ImageKitStorage::new(config_for(&server.url())).unwrap();
        assert!(storage.delete("ok").await.is_ok());
        assert_eq!(storage.delete("gone").await.unwrap_err().kind(), "NotFound");
        assert_eq!(storage.delete("odd").await.unwrap_err().kind(), "UpstreamError");
    }

    #[tokio::test]
    async fn bulk_delete_preserves_request_order() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/files/batch/deleteByFileIds")
            .match_body(Matcher::Json(json!({ "fileIds": ["a", "b", "c", "d"] })))
            .with_status(200)
            .with_body(
                json!({
                    "successfullyDeletedFileIds": ["c", "a"],
                    "missingFileIds": ["b"]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let storage = ImageKitStorage::new(config_for(&server.url())).unwrap();
        let ids: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        let outcomes = storage.bulk_delete(&ids).await.unwrap();

        mock.assert_async().await;
        assert_eq!(
            outcomes,
            vec![
                DeleteOutcome::deleted("a"),
                DeleteOutcome::failed("b", "File not found"),
                DeleteOutcome::deleted("c"),
                DeleteOutcome::failed("d", "Unknown error"),
            ]
        );
    }

    #[tokio::test]
    async fn bulk_delete_over_the_ceiling_issues_no_request() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/files/batch/deleteByFileIds")
            .expect(0)
            .create_async()
            .await;

        let mut config = config_for(&server.url());
        config.max_files_per_batch_delete = 2;
        let storage = ImageKitStorage::new(config).unwrap();

        let ids: Vec<String> = (0..3).map(|i| format!("f{}", i)).collect();
        let err = storage.bulk_delete(&ids).await.unwrap_err();

        mock.assert_async().await;
        assert_eq!(
            err,
            MediaError::batch_failure("Cannot delete more than 2 files at once")
        );
    }

    #[tokio::test]
    async fn update_sends_only_provided_fields() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PATCH", "/v1/files/f1/details")
            .match_body(Matcher::Json(json!({ "tags": ["new"] })))
            .with_status(200)
            .with_body(file_json("f1", 10))
            .create_async()
            .await;

        let storage = ImageKitStorage::new(config_for(&server.url())).unwrap();
        let record = storage
            .update_details(
                "f1",
                FileUpdate {
                    tags: Some(vec!["new".to_string()]),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(record.file_id, "f1");
    }

    #[tokio::test]
    async fn update_sends_coordinates_and_metadata_without_tags() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PATCH", "/v1/files/f1/details")
            .match_body(Matcher::Json(json!({
                "customCoordinates": "10,10,100,100",
                "customMetadata": { "owner": "u2", "source": "camera" }
            })))
            .with_status(200)
            .with_body(file_json("f1", 10))
            .create_async()
            .await;

        let storage = ImageKitStorage::new(config_for(&server.url())).unwrap();
        let metadata: HashMap<String, String> = [("owner", "u2"), ("source", "camera")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        storage
            .update_details(
                "f1",
                FileUpdate {
                    custom_coordinates: Some("10,10,100,100".to_string()),
                    custom_metadata: Some(metadata),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn empty_update_sends_an_empty_object() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PATCH", "/v1/files/f1/details")
            .match_body(Matcher::Json(json!({})))
            .with_status(200)
            .with_body(file_json("f1", 10))
            .create_async()
            .await;

        let storage = ImageKitStorage::new(config_for(&server.url())).unwrap();
        storage
            .update_details("f1", FileUpdate::default())
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn delete_keeps_a_slashed_id_in_one_segment() {
        let mut server = Server::new_async().await;
        let victim = server
            .mock("DELETE", "/v1/files/victim")
            .expect(0)
            .create_async()
            .await;
        let own = server
            .mock(
                "DELETE",
                Matcher::Regex(r"^/v1/files/mine%2F\.\.%2Fvictim$".to_string()),
            )
            .with_status(204)
            .create_async()
            .await;

        let storage = ImageKitStorage::new(config_for(&server.url())).unwrap();
        storage.delete("mine/../victim").await.unwrap();

        victim.assert_async().await;
        own.assert_async().await;
    }

    #[tokio::test]
    async fn get_details_encodes_query_and_fragment_characters() {
        let mut server = Server::new_async().await;
        let other = server
            .mock("GET", "/v1/files/other/details")
            .match_query(Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let own = server
            .mock(
                "GET",
                Matcher::Regex(r"^/v1/files/other%2Fdetails%3Fx=%23y/details$".to_string()),
            )
            .with_status(200)
            .with_body(file_json("other/details?x=#y", 1))
            .create_async()
            .await;

        let storage = ImageKitStorage::new(config_for(&server.url())).unwrap();
        let record = storage.get_details("other/details?x=#y").await.unwrap();

        other.assert_async().await;
        own.assert_async().await;
        assert_eq!(record.file_id, "other/details?x=#y");
    }

    #[tokio::test]
    async fn update_keeps_a_slashed_id_in_one_segment() {
        let mut server = Server::new_async().await;
        let victim = server
            .mock("PATCH", "/v1/files/victim/details")
            .expect(0)
            .create_async()
            .await;
        let own = server
            .mock(
                "PATCH",
                Matcher::Regex(r"^/v1/files/a%2F..%2Fvictim/details$".to_string()),
            )
            .with_status(200)
            .with_body(file_json("a/../victim", 1))
            .create_async()
            .await;

        let storage = ImageKitStorage::new(config_for(&server.url())).unwrap();
        storage
            .update_details(
                "a/../victim",
                FileUpdate {
                    tags: Some(vec!["t".to_string()]),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        victim.assert_async().await;
        own.assert_async().await;
    }

    #[tokio::test]
    async fn dot_segment_ids_are_rejected_before_any_request() {
        let mut server = Server::new_async().await;
        let any = server
            .mock("DELETE", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let storage = ImageKitStorage::new(config_for(&server.url())).unwrap();
        for id in [".", ".."] {
            let err = storage.delete(id).await.unwrap_err();
            assert_eq!(err.kind(), "InvalidArgument");
            let err = storage.get_details(id).await.unwrap_err();
            assert_eq!(err.kind(), "InvalidArgument");
        }

        any.assert_async().await;
    }

    #[tokio::test]
    async fn update_of_unknown_file_is_not_found() {
        let mut server = Server::new_async().await;
        server
            .mock("PATCH", "/v1/files/nope/details")
            .with_status(404)
            .create_async()
            .await;

        let storage = ImageKitStorage::new(config_for(&server.url())).unwrap();
        let err = storage
            .update_details("nope", FileUpdate::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "NotFound");
    }
}
