use std::{any::Any, panic::AssertUnwindSafe};

use async_trait::async_trait;
use futures::FutureExt;
use tonic::Status;
use tracing::error;

use super::{CallInfo, CallResult, Interceptor, Next};

/// Backstop for defects below it: a panic anywhere in the wrapped call becomes
/// an `INTERNAL` status instead of a dropped stream. Handled failures pass
/// through untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct ErrorHandlingInterceptor;

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[async_trait]
impl Interceptor for ErrorHandlingInterceptor {
    fn name(&self) -> &'static str {
        "error_handling"
    }

    async fn intercept(&self, call: &CallInfo, next: Next<'_>) -> CallResult {
        match AssertUnwindSafe(next.run(call)).catch_unwind().await {
            Ok(result) => result,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                error!(
                    method = %call.method,
                    error = %message,
                    error_type = "panic",
                    "Unhandled error in gRPC method"
                );
                Err(Status::internal(format!(
                    "Internal server error: {}",
                    message
                )))
            }
        }
    }
}
