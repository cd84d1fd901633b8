use std::time::{Duration, Instant};

use async_trait::async_trait;
use tracing::{error, info};

use super::{CallInfo, CallResult, Interceptor, Next};

/// Emits started / completed / failed events for every call. Never alters the
/// result.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingInterceptor;

pub(crate) fn millis(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 100_000.0).round() / 100.0
}

#[async_trait]
impl Interceptor for LoggingInterceptor {
    fn name(&self) -> &'static str {
        "logging"
    }

    async fn intercept(&self, call: &CallInfo, next: Next<'_>) -> CallResult {
        let started = Instant::now();
        info!(
            method = %call.method,
            full_method = %call.full_method,
            "gRPC request started"
        );

        let result = next.run(call).await;
        let duration_ms = millis(started.elapsed());

        match &result {
            Ok(_) => info!(
                method = %call.method,
                duration_ms,
                status = "SUCCESS",
                "gRPC request completed"
            ),
            Err(status) => error!(
                method = %call.method,
                duration_ms,
                error = %status.message(),
                code = ?status.code(),
                status = "ERROR",
                "gRPC request failed"
            ),
        }

        result
    }
}
