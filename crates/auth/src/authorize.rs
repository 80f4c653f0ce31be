//! Authorization policy for inventory operations.
//!
//! Staff principals may perform any operation; regular authenticated
//! principals are read-only; anonymous principals are denied outright
//! (reads require at least regular authentication).

use crate::Principal;

/// The operation class being authorized.
///
/// `Write` subsumes create, update, and delete.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operation {
    Read,
    Write,
}

/// Terminal authorization decision.
///
/// `Deny` is a valid outcome, not an error: the transport layer translates
/// it into a forbidden response and nothing is ever escalated to a fault.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// Decide whether `principal` may perform `operation`.
///
/// - No IO
/// - No panics
/// - Total over the input domain
pub fn decide(principal: &Principal, operation: Operation) -> Decision {
    match (principal, operation) {
        (Principal::Staff { .. }, _) => Decision::Allow,
        (Principal::Regular { .. }, Operation::Read) => Decision::Allow,
        (Principal::Regular { .. }, Operation::Write) => Decision::Deny,
        (Principal::Anonymous, _) => Decision::Deny,
    }
}
