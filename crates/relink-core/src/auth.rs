//! Operator authorization gate.
//!
//! Authorization is an interceptor, not business logic: command handlers
//! call [`authorize`] before dispatch and act on the tagged decision. The
//! admin list itself is owned by the store collaborator.

use serde::{Deserialize, Serialize};

/// Message shown to operators who are not on the admin list.
pub const DENIED_MESSAGE: &str =
    "You are not authorized to use this tool. Contact the owner to request access.";

/// Outcome of an authorization check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthDecision {
    /// The operator is on the admin list.
    Authorized,
    /// The operator is unknown; the command must not run.
    Denied,
}

impl AuthDecision {
    /// Whether the guarded command may proceed.
    #[must_use]
    pub const fn is_authorized(&self) -> bool {
        matches!(self, Self::Authorized)
    }
}

/// Check an operator id against the current admin list.
#[must_use]
pub fn authorize(operator_id: u64, admins: &[u64]) -> AuthDecision {
    if admins.contains(&operator_id) {
        AuthDecision::Authorized
    } else {
        AuthDecision::Denied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listed_operator_is_authorized() {
        let admins = vec![100, 200, 300];
        assert_eq!(authorize(200, &admins), AuthDecision::Authorized);
        assert!(authorize(200, &admins).is_authorized());
    }

    #[test]
    fn test_unlisted_operator_is_denied() {
        let admins = vec![100];
        assert_eq!(authorize(999, &admins), AuthDecision::Denied);
        assert!(!authorize(999, &admins).is_authorized());
    }

    #[test]
    fn test_empty_list_denies_everyone() {
        assert_eq!(authorize(1, &[]), AuthDecision::Denied);
    }
}
