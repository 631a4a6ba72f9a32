mod transaction;

pub use transaction::Transaction;

use crate::types::IssueId;

/// The compliance state of a transaction, derived from its issue fields.
///
/// `issueSolved` is only meaningful when an issue id is present, so a transaction without one is
/// always `None` no matter what its solved flag says.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum IssueStatus {
    None,
    Open(IssueId),
    Solved(IssueId)
}
