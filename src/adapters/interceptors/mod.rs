//! Cross-cutting behavior wrapped around every unary RPC.
//!
//! An [`InterceptorChain`] is an ordered list of [`Interceptor`]s fixed at
//! startup. The first interceptor added is the outermost: its pre-logic runs
//! first and its post-logic runs last. Each interceptor receives a [`Next`]
//! that drives the rest of the chain and, finally, the handler itself.

mod error_handling;
mod logging;
mod metrics;

pub use error_handling::ErrorHandlingInterceptor;
pub use logging::LoggingInterceptor;
pub use metrics::{MethodMetrics, MetricsInterceptor};

use std::{any::Any, future::Future, pin::Pin, sync::Arc};

use async_trait::async_trait;
use tonic::{Response, Status};

/// Type-erased result of a call as seen by interceptors.
pub type CallResult = Result<Box<dyn Any + Send>, Status>;

pub type BoxCall = Pin<Box<dyn Future<Output = CallResult> + Send>>;

/// Identity of the call being intercepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallInfo {
    /// e.g. `/media.v1.MediaService/GetFiles`
    pub full_method: String,
    /// Last path segment, e.g. `GetFiles`.
    pub method: String,
}

impl CallInfo {
    pub fn new(full_method: impl Into<String>) -> Self {
        let full_method = full_method.into();
        let method = full_method
            .rsplit('/')
            .next()
            .unwrap_or(full_method.as_str())
            .to_string();
        Self {
            full_method,
            method,
        }
    }
}

#[async_trait]
pub trait Interceptor: Send + Sync {
    fn name(&self) -> &'static str;

    /// Runs around `next`. Implementations must call `next.run(call)` exactly
    /// once unless they short-circuit with their own result.
    async fn intercept(&self, call: &CallInfo, next: Next<'_>) -> CallResult;
}

/// The remainder of the chain below the current interceptor.
pub struct Next<'a> {
    rest: &'a [Arc<dyn Interceptor>],
    endpoint: BoxCall,
}

impl<'a> Next<'a> {
    pub async fn run(self, call: &CallInfo) -> CallResult {
        match self.rest.split_first() {
            Some((current, rest)) => {
                let next = Next {
                    rest,
                    endpoint: self.endpoint,
                };
                current.intercept(call, next).await
            }
            None => self.endpoint.await,
        }
    }
}

#[derive(Clone, Default)]
pub struct InterceptorChain {
    interceptors: Vec<Arc<dyn Interceptor>>,
}

impl InterceptorChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `interceptor` inside every interceptor added so far.
    pub fn with<I: Interceptor + 'static>(mut self, interceptor: I) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.interceptors.iter().map(|i| i.name()).collect()
    }

    /// Drives `handler` through every interceptor for the call `full_method`.
    pub async fn run<T, F>(&self, full_method: &str, handler: F) -> Result<Response<T>, Status>
    where
        T: Send + 'static,
        F: Future<Output = Result<Response<T>, Status>> + Send + 'static,
    {
        let call = CallInfo::new(full_method);
        let endpoint: BoxCall = Box::pin(async move {
            handler
                .await
                .map(|response| Box::new(response) as Box<dyn Any + Send>)
        });

        let erased = Next {
            rest: &self.interceptors,
            endpoint,
        }
        .run(&call)
        .await?;

        erased
            .downcast::<Response<T>>()
            .map(|response| *response)
            .map_err(|_| {
                Status::internal(format!(
                    "Internal server error: unexpected response type from {}",
                    call.method
                ))
            })
    }
}
