use std::{future::Future, sync::Arc};

use async_trait::async_trait;
use tonic::{Request, Response, Status};

use crate::{
    adapters::{controllers::media_controller::MediaController, interceptors::InterceptorChain},
    proto::{
        media_service_server::MediaService, DeleteFileRequest, DeleteFileResponse,
        DeleteMultipleFilesRequest, DeleteMultipleFilesResponse, GetFileDetailsRequest,
        GetFileDetailsResponse, GetFilesRequest, GetFilesResponse, GetUploadAuthRequest,
        GetUploadAuthResponse, UpdateFileDetailsRequest, UpdateFileDetailsResponse,
        UploadFileRequest, UploadFileResponse,
    },
};

pub const GET_UPLOAD_AUTH: &str = "/media.v1.MediaService/GetUploadAuth";
pub const UPLOAD_FILE: &str = "/media.v1.MediaService/UploadFile";
pub const GET_FILE_DETAILS: &str = "/media.v1.MediaService/GetFileDetails";
pub const GET_FILES: &str = "/media.v1.MediaService/GetFiles";
pub const UPDATE_FILE_DETAILS: &str = "/media.v1.MediaService/UpdateFileDetails";
pub const DELETE_FILE: &str = "/media.v1.MediaService/DeleteFile";
pub const DELETE_MULTIPLE_FILES: &str = "/media.v1.MediaService/DeleteMultipleFiles";

/// Short names of every RPC, as reported in logs and metrics.
pub const METHOD_NAMES: [&str; 7] = [
    "GetUploadAuth",
    "UploadFile",
    "GetFileDetails",
    "GetFiles",
    "UpdateFileDetails",
    "DeleteFile",
    "DeleteMultipleFiles",
];

/// tonic entry point: every RPC goes through the interceptor chain before it
/// reaches the controller.
#[derive(Clone)]
pub struct MediaGrpcService {
    controller: Arc<MediaController>,
    chain: Arc<InterceptorChain>,
}

impl MediaGrpcService {
    pub fn new(controller: MediaController, chain: InterceptorChain) -> Self {
        Self {
            controller: Arc::new(controller),
            chain: Arc::new(chain),
        }
    }

    async fn route<T, F, Fut>(
        &self,
        full_method: &'static str,
        handler: F,
    ) -> Result<Response<T>, Status>
    where
        T: Send + 'static,
        F: FnOnce(Arc<MediaController>) -> Fut,
        Fut: Future<Output = Result<T, Status>> + Send + 'static,
    {
        let call = handler(self.controller.clone());
        self.chain
            .run(full_method, async move { call.await.map(Response::new) })
            .await
    }
}

#[async_trait]
impl MediaService for MediaGrpcService {
    async fn get_upload_auth(
        &self,
        request: Request<GetUploadAuthRequest>,
    ) -> Result<Response<GetUploadAuthResponse>, Status> {
        let request = request.into_inner();
        self.route(GET_UPLOAD_AUTH, move |c| async move {
            c.get_upload_auth(request).await
        })
        .await
    }

    async fn upload_file(
        &self,
        request: Request<UploadFileRequest>,
    ) -> Result<Response<UploadFileResponse>, Status> {
        let request = request.into_inner();
        self.route(UPLOAD_FILE, move |c| async move { c.upload_file(request).await })
            .await
    }

    async fn get_file_details(
        &self,
        request: Request<GetFileDetailsRequest>,
    ) -> Result<Response<GetFileDetailsResponse>, Status> {
        let request = request.into_inner();
        self.route(GET_FILE_DETAILS, move |c| async move {
            c.get_file_details(request).await
        })
        .await
    }

    async fn get_files(
        &self,
        request: Request<GetFilesRequest>,
    ) -> Result<Response<GetFilesResponse>, Status> {
        let request = request.into_inner();
        self.route(GET_FILES, move |c| async move { c.get_files(request).await })
            .await
    }

    async fn update_file_details(
        &self,
        request: Request<UpdateFileDetailsRequest>,
    ) -> Result<Response<UpdateFileDetailsResponse>, Status> {
        let request = request.into_inner();
        self.route(UPDATE_FILE_DETAILS, move |c| async move {
            c.update_file_details(request).await
        })
        .await
    }

    async fn delete_file(
        &self,
        request: Request<DeleteFileRequest>,
    ) -> Result<Response<DeleteFileResponse>, Status> {
        let request = request.into_inner();
        self.route(DELETE_FILE, move |c| async move { c.delete_file(request).await })
            .await
    }

    async fn delete_multiple_files(
        &self,
        request: Request<DeleteMultipleFilesRequest>,
    ) -> Result<Response<DeleteMultipleFilesResponse>, Status> {
        let request = request.into_inner();
        self.route(DELETE_MULTIPLE_FILES, move |c| async move {
            c.delete_multiple_files(request).await
        })
        .await
    }
}
