mod errors;
mod monetary;

pub use errors::MonetaryError;
pub use monetary::Monetary;

pub type IssueId = i32;
pub type TransactionId = u64;
