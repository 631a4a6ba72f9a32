#[cfg(test)]
mod tests;

use std::io::Write;
use std::iter::once;

use csv::{Writer, WriterBuilder};

use crate::engine::QueryEngine;
use crate::models::Transaction;

/// Writes the result of every query as CSV sections separated by a blank line.
///
/// The first section has one record per figure, the figure name followed by its values, so list
/// figures have a variable number of fields. The other sections are tables with a header row.
pub fn write_report<W: Write>(engine: &QueryEngine, mut output: W) -> csv::Result<()> {
    write_section(&mut output, &[], |writer| {
        writer.write_record(["total_amount".to_string(), engine.total_amount().to_string()])?;
        writer.write_record(["max_transaction_amount".to_string(), engine.max_transaction_amount().to_string()])?;
        writer.write_record(["unique_clients".to_string(), engine.count_unique_clients().to_string()])?;
        writer.write_record(["top_sender", engine.top_sender().unwrap_or_default()])?;
        writer.write_record(once("unsolved_issue_ids".to_string())
            .chain(engine.unsolved_issue_ids().iter().map(ToString::to_string)))?;
        writer.write_record(once("solved_issue_messages")
            .chain(engine.solved_issue_messages().into_iter().map(Option::unwrap_or_default)))
    })?;

    writeln!(output)?;
    write_section(&mut output, &["client", "total_sent", "open_compliance_issues"], |writer| {
        for client in engine.unique_clients() {
            writer.write_record([
                client.to_string(),
                engine.total_sent_by(client).to_string(),
                engine.has_open_compliance_issues(client).to_string()
            ])?;
        }

        Ok(())
    })?;

    writeln!(output)?;
    write_section(&mut output, &["rank", "mtn", "sender", "beneficiary", "amount"], |writer| {
        for (rank, transaction) in engine.top3_transactions_by_amount().into_iter().enumerate() {
            writer.write_record(once((rank + 1).to_string()).chain(transaction_fields(transaction)))?;
        }

        Ok(())
    })?;

    let mut by_beneficiary: Vec<_> = engine.transactions_by_beneficiary().into_iter().collect();
    by_beneficiary.sort_unstable_by_key(|(beneficiary, _)| *beneficiary);

    writeln!(output)?;
    write_section(&mut output, &["beneficiary", "mtn", "sender", "beneficiary", "amount"], |writer| {
        for (beneficiary, transaction) in by_beneficiary {
            writer.write_record(once(beneficiary.to_string()).chain(transaction_fields(transaction)))?;
        }

        Ok(())
    })?;

    output.flush()?;

    Ok(())
}

fn write_section<W, F>(output: &mut W, header: &[&str], write_rows: F) -> csv::Result<()>
where
    W: Write,
    F: FnOnce(&mut Writer<&mut W>) -> csv::Result<()>,
{
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .from_writer(output);

    if !header.is_empty() {
        writer.write_record(header)?;
    }

    write_rows(&mut writer)?;
    writer.flush()?;

    Ok(())
}

fn transaction_fields(transaction: &Transaction) -> [String; 4] {
    [
        transaction.mtn().map(|mtn| mtn.to_string()).unwrap_or_default(),
        transaction.sender_full_name().to_string(),
        transaction.beneficiary_full_name().to_string(),
        transaction.amount().to_string()
    ]
}
