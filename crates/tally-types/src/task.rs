//! Handles for asynchronous backend jobs.

use serde::Deserialize;

/// An opaque handle identifying a long-running backend job.
///
/// Returned by every report operation that runs asynchronously on the
/// backend. Polling the task to completion is the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PendingTask {
    /// Backend-assigned task identifier.
    pub task_id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_task_parses_from_envelope_payload() {
        let task: PendingTask = serde_json::from_str(r#"{"task_id": 42}"#).unwrap();
        assert_eq!(task.task_id, 42);
    }
}
