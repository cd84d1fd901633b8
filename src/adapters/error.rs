use prost::Message;
use tonic::{Code, Status};

use crate::application::error::MediaError;

/// Maps a domain error to the gRPC status code the client sees.
///
/// tonic has no `EXTERNAL` code, so provider failures surface as `UNKNOWN`.
pub fn classify(err: &MediaError) -> Code {
    match err {
        MediaError::NotFound { .. } => Code::NotFound,
        MediaError::InvalidArgument { .. } => Code::InvalidArgument,
        MediaError::SizeExceeded { .. } => Code::ResourceExhausted,
        MediaError::Upstream { .. } => Code::Unknown,
        MediaError::BatchFailure { .. } => Code::FailedPrecondition,
        MediaError::Internal { .. } => Code::Internal,
    }
}

impl From<MediaError> for Status {
    fn from(err: MediaError) -> Self {
        Status::new(classify(&err), err.message())
    }
}

/// Builds the status returned for a failed RPC: mapped code, the error message
/// as detail, and the encoded failure envelope of the RPC in `details`.
///
/// Does not log; the handler that owns the failure does.
pub fn failure_status<M: Message>(err: &MediaError, envelope: M) -> Status {
    Status::with_details(classify(err), err.message(), envelope.encode_to_vec().into())
}
