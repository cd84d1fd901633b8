use std::{
    collections::{HashMap, VecDeque},
    sync::{Arc, Mutex, PoisonError},
    time::{Duration, Instant},
};

use async_trait::async_trait;
use tracing::info;

use super::{logging::millis, CallInfo, CallResult, Interceptor, Next};

pub const SUMMARY_EVERY: u64 = 100;
pub const DURATION_WINDOW: usize = 1000;

#[derive(Debug, Default)]
struct MethodStats {
    count: u64,
    /// Seconds, oldest first.
    durations: VecDeque<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub method: String,
    pub total_requests: u64,
    pub avg_duration_ms: f64,
}

/// Process-wide per-method counters. The count is exact; the average is over
/// the most recent `DURATION_WINDOW` samples only.
#[derive(Debug, Default)]
pub struct MethodMetrics {
    stats: Mutex<HashMap<String, MethodStats>>,
}

impl MethodMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-registers `methods` so the map is not grown on the hot path.
    pub fn with_methods<I, S>(methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stats = methods
            .into_iter()
            .map(|m| (m.into(), MethodStats::default()))
            .collect();
        Self {
            stats: Mutex::new(stats),
        }
    }

    /// Records one finished call. Every `SUMMARY_EVERY`th call for a method
    /// logs and returns a summary.
    pub fn record(&self, method: &str, elapsed: Duration) -> Option<MetricsSummary> {
        let summary = {
            let mut stats = self.stats.lock().unwrap_or_else(PoisonError::into_inner);
            let entry = stats.entry(method.to_string()).or_default();

            entry.count += 1;
            entry.durations.push_back(elapsed.as_secs_f64());
            while entry.durations.len() > DURATION_WINDOW {
                entry.durations.pop_front();
            }

            (entry.count % SUMMARY_EVERY == 0).then(|| {
                let samples = entry.durations.len().max(1) as f64;
                let avg_secs = entry.durations.iter().sum::<f64>() / samples;
                MetricsSummary {
                    method: method.to_string(),
                    total_requests: entry.count,
                    avg_duration_ms: millis(Duration::from_secs_f64(avg_secs)),
                }
            })
        };

        if let Some(summary) = &summary {
            info!(
                method = %summary.method,
                total_requests = summary.total_requests,
                avg_duration_ms = summary.avg_duration_ms,
                "Method metrics"
            );
        }
        summary
    }

    pub fn request_count(&self, method: &str) -> u64 {
        self.stats
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(method)
            .map_or(0, |s| s.count)
    }

    pub fn sample_window(&self, method: &str) -> usize {
        self.stats
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(method)
            .map_or(0, |s| s.durations.len())
    }
}

/// Records the call when dropped, so unwinding calls are counted too.
struct RecordOnDrop<'a> {
    metrics: &'a MethodMetrics,
    method: &'a str,
    started: Instant,
}

impl Drop for RecordOnDrop<'_> {
    fn drop(&mut self) {
        self.metrics.record(self.method, self.started.elapsed());
    }
}

#[derive(Debug, Clone)]
pub struct MetricsInterceptor {
    metrics: Arc<MethodMetrics>,
}

impl MetricsInterceptor {
    pub fn new(metrics: Arc<MethodMetrics>) -> Self {
        Self { metrics }
    }
}

#[async_trait]
impl Interceptor for MetricsInterceptor {
    fn name(&self) -> &'static str {
        "metrics"
    }

    async fn intercept(&self, call: &CallInfo, next: Next<'_>) -> CallResult {
        let _record = RecordOnDrop {
            metrics: &self.metrics,
            method: &call.method,
            started: Instant::now(),
        };
        next.run(call).await
    }
}

#[cfg(test)]
mod tests {
    use tonic::{Response, Status};

    use super::*;
    use crate::adapters::interceptors::{ErrorHandlingInterceptor, InterceptorChain};

    #[test]
    fn summary_fires_once_at_the_hundredth_call() {
        let metrics = MethodMetrics::with_methods(["GetFiles"]);
        let summaries: Vec<MetricsSummary> = (0..100)
            .filter_map(|_| metrics.record("GetFiles", Duration::from_millis(4)))
            .collect();

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].method, "GetFiles");
        assert_eq!(summaries[0].total_requests, 100);
        assert_eq!(summaries[0].avg_duration_ms, 4.0);
    }

    #[test]
    fn sample_window_is_bounded_but_count_is_not() {
        let metrics = MethodMetrics::new();
        for _ in 0..1001 {
            metrics.record("UploadFile", Duration::from_millis(1));
        }
        assert_eq!(metrics.request_count("UploadFile"), 1001);
        assert!(metrics.sample_window("UploadFile") <= DURATION_WINDOW);
    }

    #[test]
    fn methods_are_tracked_independently() {
        let metrics = MethodMetrics::new();
        metrics.record("GetFiles", Duration::from_millis(1));
        metrics.record("GetFiles", Duration::from_millis(1));
        metrics.record("DeleteFile", Duration::from_millis(1));
        assert_eq!(metrics.request_count("GetFiles"), 2);
        assert_eq!(metrics.request_count("DeleteFile"), 1);
        assert_eq!(metrics.request_count("UploadFile"), 0);
    }

    #[test]
    fn concurrent_records_are_exact() {
        let metrics = MethodMetrics::new();
        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for _ in 0..250 {
                        metrics.record("GetFileDetails", Duration::from_micros(10));
                    }
                });
            }
        });
        assert_eq!(metrics.request_count("GetFileDetails"), 2000);
        assert_eq!(metrics.sample_window("GetFileDetails"), DURATION_WINDOW);
    }

    #[tokio::test]
    async fn failed_and_panicking_calls_are_counted() {
        let metrics = Arc::new(MethodMetrics::new());
        let chain = InterceptorChain::new()
            .with(ErrorHandlingInterceptor)
            .with(MetricsInterceptor::new(metrics.clone()));

        chain
            .run("/media.v1.MediaService/DeleteFile", async {
                Ok(Response::new(()))
            })
            .await
            .unwrap();
        chain
            .run("/media.v1.MediaService/DeleteFile", async {
                Err::<Response<()>, _>(Status::not_found("File not found"))
            })
            .await
            .unwrap_err();
        chain
            .run("/media.v1.MediaService/DeleteFile", async {
                if trip() {
                    panic!("boom");
                }
                Ok(Response::new(()))
            })
            .await
            .unwrap_err();

        assert_eq!(metrics.request_count("DeleteFile"), 3);
    }

    fn trip() -> bool {
        true
    }

    #[tokio::test]
    async fn concurrent_calls_through_the_chain_are_exact() {
        let metrics = Arc::new(MethodMetrics::new());
        let chain = Arc::new(
            InterceptorChain::new().with(MetricsInterceptor::new(metrics.clone())),
        );

        let tasks: Vec<_> = (0..200)
            .map(|_| {
                let chain = chain.clone();
                tokio::spawn(async move {
                    chain
                        .run("/media.v1.MediaService/GetFiles", async {
                            tokio::task::yield_now().await;
                            Ok(Response::new(()))
                        })
                        .await
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(metrics.request_count("GetFiles"), 200);
    }
}
