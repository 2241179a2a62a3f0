//! Invoke responses and timing metadata

use super::operation::OperationKind;
use crate::config::format_duration;
use bytes::Bytes;
use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use std::time::Instant;

pub const OPERATION_KEY: &str = "operation";
pub const START_TIME_KEY: &str = "start-time";
pub const END_TIME_KEY: &str = "end-time";
pub const DURATION_KEY: &str = "duration";

/// Result of a successful invocation
#[derive(Debug, Clone, Serialize)]
pub struct InvokeResponse {
    /// Serialized handler output
    #[serde(skip)]
    pub data: Bytes,

    /// Operation name and timing, in insertion order
    pub metadata: IndexMap<String, String>,
}

/// Timing wrapper started just before dispatch
pub struct ResponseBuilder {
    operation: OperationKind,
    start_time: DateTime<Utc>,
    started: Instant,
}

impl ResponseBuilder {
    /// Record the start of an invocation
    pub fn start(operation: OperationKind) -> Self {
        Self {
            operation,
            start_time: Utc::now(),
            started: Instant::now(),
        }
    }

    /// Attach timing metadata to the handler output.
    ///
    /// End time is derived from the monotonic clock, so it never precedes
    /// the start time even if the wall clock steps backwards.
    pub fn finish(self, data: Bytes) -> InvokeResponse {
        let elapsed = self.started.elapsed();
        let end_time = chrono::Duration::from_std(elapsed)
            .ok()
            .and_then(|d| self.start_time.checked_add_signed(d))
            .unwrap_or(self.start_time);

        let mut metadata = IndexMap::with_capacity(4);
        metadata.insert(OPERATION_KEY.to_string(), self.operation.to_string());
        metadata.insert(START_TIME_KEY.to_string(), format_timestamp(self.start_time));
        metadata.insert(END_TIME_KEY.to_string(), format_timestamp(end_time));
        metadata.insert(DURATION_KEY.to_string(), format_duration(elapsed));

        InvokeResponse { data, metadata }
    }
}

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}
