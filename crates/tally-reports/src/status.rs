//! Accepted-status configuration.
//!
//! The backend reports many domain failures through regular JSON
//! envelopes on non-2xx statuses. Codes in the relevant accepted set
//! proceed to envelope handling; anything else fails the call before the
//! body is looked at.

use reqwest::StatusCode;

/// The status codes that proceed to envelope handling.
///
/// Synchronous calls use the `sync` set; the archive download flow uses
/// the more permissive `task` set, which also lets through the status
/// the backend answers with while a long-running job is still being
/// assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPolicy {
    sync: Vec<u16>,
    task: Vec<u16>,
}

impl StatusPolicy {
    /// Creates a policy from explicit accepted sets.
    pub fn new(sync: Vec<u16>, task: Vec<u16>) -> Self {
        Self { sync, task }
    }

    /// Whether `status` is accepted for a synchronous call.
    #[must_use]
    pub fn accepts(&self, status: StatusCode) -> bool {
        self.sync.contains(&status.as_u16())
    }

    /// Whether `status` is accepted for the download flow.
    #[must_use]
    pub fn accepts_task(&self, status: StatusCode) -> bool {
        self.task.contains(&status.as_u16())
    }
}

impl Default for StatusPolicy {
    fn default() -> Self {
        Self {
            sync: vec![200, 400, 409],
            task: vec![200, 400, 409, 502],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sync_set() {
        let policy = StatusPolicy::default();
        assert!(policy.accepts(StatusCode::OK));
        assert!(policy.accepts(StatusCode::BAD_REQUEST));
        assert!(policy.accepts(StatusCode::CONFLICT));
        assert!(!policy.accepts(StatusCode::BAD_GATEWAY));
        assert!(!policy.accepts(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn test_task_set_is_more_permissive() {
        let policy = StatusPolicy::default();
        assert!(policy.accepts_task(StatusCode::BAD_GATEWAY));
        assert!(!policy.accepts_task(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn test_custom_sets() {
        let policy = StatusPolicy::new(vec![200], vec![200, 202]);
        assert!(!policy.accepts(StatusCode::BAD_REQUEST));
        assert!(policy.accepts_task(StatusCode::ACCEPTED));
    }
}
