use serde::{de, Deserialize, Deserializer};

use crate::models::IssueStatus;
use crate::types::{IssueId, Monetary, TransactionId};

/// Represents a single transfer read from the transaction source.
///
/// Records are immutable once built: the fields are private and only exposed through accessors.
/// Issue fields describe an optional compliance annotation; see [`Transaction::issue_status`]
/// for how they are interpreted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Money transfer number, the reference id of the record in the source file.
    #[serde(default)]
    mtn: Option<TransactionId>,
    amount: Monetary,
    #[serde(deserialize_with = "client_name")]
    sender_full_name: String,
    #[serde(deserialize_with = "client_name")]
    beneficiary_full_name: String,
    #[serde(default)]
    issue_id: Option<IssueId>,
    /// Not authoritative when `issue_id` is absent.
    #[serde(default, deserialize_with = "optional_flag")]
    issue_solved: bool,
    #[serde(default)]
    issue_message: Option<String>
}

impl Transaction {
    /// Creates a transaction without a compliance issue.
    pub fn new(amount: Monetary, sender_full_name: impl Into<String>, beneficiary_full_name: impl Into<String>) -> Self {
        Self {
            mtn: None,
            amount,
            sender_full_name: sender_full_name.into(),
            beneficiary_full_name: beneficiary_full_name.into(),
            issue_id: None,
            issue_solved: false,
            issue_message: None
        }
    }

    pub fn with_mtn(mut self, mtn: TransactionId) -> Self {
        self.mtn = Some(mtn);
        self
    }

    pub fn with_issue(mut self, issue_id: IssueId, issue_solved: bool) -> Self {
        self.issue_id = Some(issue_id);
        self.issue_solved = issue_solved;
        self
    }

    pub fn with_issue_message(mut self, issue_message: impl Into<String>) -> Self {
        self.issue_message = Some(issue_message.into());
        self
    }

    pub fn mtn(&self) -> Option<TransactionId> {
        self.mtn
    }

    pub fn amount(&self) -> Monetary {
        self.amount
    }

    pub fn sender_full_name(&self) -> &str {
        &self.sender_full_name
    }

    pub fn beneficiary_full_name(&self) -> &str {
        &self.beneficiary_full_name
    }

    pub fn issue_id(&self) -> Option<IssueId> {
        self.issue_id
    }

    pub fn is_issue_solved(&self) -> bool {
        self.issue_solved
    }

    pub fn issue_message(&self) -> Option<&str> {
        self.issue_message.as_deref()
    }

    pub fn issue_status(&self) -> IssueStatus {
        match self.issue_id {
            None => IssueStatus::None,
            Some(issue_id) if self.issue_solved => IssueStatus::Solved(issue_id),
            Some(issue_id) => IssueStatus::Open(issue_id)
        }
    }

    pub fn has_open_issue(&self) -> bool {
        matches!(self.issue_status(), IssueStatus::Open(_))
    }

    /// Whether the client is the sender or the beneficiary (exact, case-sensitive match).
    pub fn involves(&self, client_full_name: &str) -> bool {
        self.sender_full_name == client_full_name || self.beneficiary_full_name == client_full_name
    }
}

fn client_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;

    if name.trim().is_empty() {
        return Err(de::Error::custom("client full name must not be empty"));
    }

    Ok(name)
}

// Sources write `null` (JSON) or an empty cell (CSV) for transactions without an issue.
fn optional_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
