use crate::models::{IssueStatus, Transaction};
use crate::types::{IssueId, Monetary};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tracing::debug;

const TOP_TRANSACTIONS: usize = 3;

/// Answers reporting queries over a transaction sequence loaded once up front.
///
/// The sequence is shared behind an `Arc` and never mutated, so clones of the engine can be
/// handed to concurrent readers freely. Every query tolerates an empty sequence and answers
/// unmatched lookups with a zero, empty or absent result instead of an error.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    transactions: Arc<[Transaction]>
}

impl QueryEngine {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        debug!("Query engine created over {} transactions", transactions.len());

        Self {
            transactions: transactions.into()
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Sum of all transaction amounts.
    pub fn total_amount(&self) -> Monetary {
        self.transactions.iter().map(Transaction::amount).sum()
    }

    /// Sum of the amounts sent by the given client.
    pub fn total_sent_by(&self, sender_full_name: &str) -> Monetary {
        self.transactions.iter()
            .filter(|transaction| transaction.sender_full_name() == sender_full_name)
            .map(Transaction::amount)
            .sum()
    }

    /// Highest transaction amount, or zero when there are no transactions.
    pub fn max_transaction_amount(&self) -> Monetary {
        self.transactions.iter()
            .map(Transaction::amount)
            .max()
            .unwrap_or_default()
    }

    /// Every client appearing as a sender or a beneficiary, sorted by name.
    pub fn unique_clients(&self) -> BTreeSet<&str> {
        self.transactions.iter()
            .flat_map(|transaction| [transaction.sender_full_name(), transaction.beneficiary_full_name()])
            .collect()
    }

    pub fn count_unique_clients(&self) -> usize {
        self.unique_clients().len()
    }

    /// Whether the client takes part, on either side, in a transaction with an unsolved issue.
    pub fn has_open_compliance_issues(&self, client_full_name: &str) -> bool {
        self.transactions.iter()
            .any(|transaction| transaction.involves(client_full_name) && transaction.has_open_issue())
    }

    /// Indexes transactions by beneficiary name.
    ///
    /// A beneficiary with several transactions keeps only the last one in input order.
    pub fn transactions_by_beneficiary(&self) -> HashMap<&str, &Transaction> {
        self.transactions.iter()
            .map(|transaction| (transaction.beneficiary_full_name(), transaction))
            .collect()
    }

    pub fn unsolved_issue_ids(&self) -> BTreeSet<IssueId> {
        self.transactions.iter()
            .filter_map(|transaction| match transaction.issue_status() {
                IssueStatus::Open(issue_id) => Some(issue_id),
                _ => None
            })
            .collect()
    }

    /// Messages of solved issues in input order, duplicates included.
    ///
    /// Holds one entry per solved issue, `None` where the issue carries no message. Transactions
    /// without an issue id never count as solved.
    pub fn solved_issue_messages(&self) -> Vec<Option<&str>> {
        self.transactions.iter()
            .filter(|transaction| matches!(transaction.issue_status(), IssueStatus::Solved(_)))
            .map(Transaction::issue_message)
            .collect()
    }

    /// Up to `count` transactions ordered by amount descending; equal amounts keep input order.
    pub fn top_transactions_by_amount(&self, count: usize) -> Vec<&Transaction> {
        let mut ranked: Vec<&Transaction> = self.transactions.iter().collect();
        ranked.sort_by(|left, right| right.amount().cmp(&left.amount()));
        ranked.truncate(count);
        ranked
    }

    pub fn top3_transactions_by_amount(&self) -> Vec<&Transaction> {
        self.top_transactions_by_amount(TOP_TRANSACTIONS)
    }

    /// Total sent per sender, in order of each sender's first appearance.
    pub fn sent_totals_by_sender(&self) -> Vec<(&str, Monetary)> {
        let mut positions = HashMap::<&str, usize>::new();
        let mut totals = Vec::<(&str, Monetary)>::new();

        for transaction in self.transactions.iter() {
            let sender = transaction.sender_full_name();
            let position = *positions.entry(sender).or_insert_with(|| {
                totals.push((sender, Monetary::zero()));
                totals.len() - 1
            });

            totals[position].1 += transaction.amount();
        }

        totals
    }

    /// The sender with the greatest total sent; on a tie the sender seen first wins.
    pub fn top_sender(&self) -> Option<&str> {
        let mut top_sender = None;
        let mut top_total = Monetary::zero();

        for (sender, total) in self.sent_totals_by_sender() {
            if top_sender.is_none() || total > top_total {
                top_sender = Some(sender);
                top_total = total;
            }
        }

        top_sender
    }
}

impl From<Vec<Transaction>> for QueryEngine {
    fn from(transactions: Vec<Transaction>) -> Self {
        Self::new(transactions)
    }
}
