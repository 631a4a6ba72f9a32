use super::write_report;

use anyhow::{anyhow, Result};
use csv::{ReaderBuilder, StringRecord};

use crate::engine::QueryEngine;
use crate::models::Transaction;
use crate::types::Monetary;

#[test]
fn test_report_renders_every_section() -> Result<()> {
    let engine = QueryEngine::new(vec![
        Transaction::new(Monetary::new(100.0)?, "A", "B").with_mtn(1),
        Transaction::new(Monetary::new(50.0)?, "B", "A").with_mtn(2).with_issue(1, false),
        Transaction::new(Monetary::new(200.0)?, "A", "C").with_mtn(3).with_issue(2, true).with_issue_message("ok"),
    ]);

    let mut output = Vec::new();
    write_report(&engine, &mut output)?;

    let expected = "\
total_amount,350.0000
max_transaction_amount,200.0000
unique_clients,3
top_sender,A
unsolved_issue_ids,1
solved_issue_messages,ok

client,total_sent,open_compliance_issues
A,300.0000,true
B,50.0000,true
C,0.0000,false

rank,mtn,sender,beneficiary,amount
1,3,A,C,200.0000
2,1,A,B,100.0000
3,2,B,A,50.0000

beneficiary,mtn,sender,beneficiary,amount
A,2,B,A,50.0000
B,1,A,B,100.0000
C,3,A,C,200.0000
";

    assert_eq!(String::from_utf8(output)?, expected);

    Ok(())
}

#[test]
fn test_report_over_empty_sequence_has_headers_only() -> Result<()> {
    let engine = QueryEngine::new(Vec::new());

    let mut output = Vec::new();
    write_report(&engine, &mut output)?;

    let stdout = String::from_utf8(output)?;
    let mut lines = stdout.lines();

    assert_eq!(lines.next(), Some("total_amount,0.0000"));
    assert_eq!(lines.next(), Some("max_transaction_amount,0.0000"));
    assert_eq!(lines.next(), Some("unique_clients,0"));
    assert_eq!(lines.next(), Some("top_sender,"));
    assert_eq!(lines.next(), Some("unsolved_issue_ids"));
    assert_eq!(lines.next(), Some("solved_issue_messages"));
    assert_eq!(stdout.lines().filter(|line| line.is_empty()).count(), 3);

    Ok(())
}

fn parse_section(report: &str, index: usize, has_headers: bool) -> Result<Vec<StringRecord>> {
    let section = report.split("\n\n").nth(index).ok_or_else(|| anyhow!("Report section {index} missing"))?;

    let mut reader = ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .from_reader(section.as_bytes());

    Ok(reader.records().collect::<Result<Vec<_>, _>>()?)
}

#[test]
fn test_report_quotes_fields_containing_delimiters() -> Result<()> {
    let engine = QueryEngine::new(vec![
        Transaction::new(Monetary::new(1.0)?, "Shelby, Tom", "B").with_issue(4, true).with_issue_message("Cleared; no action, closed"),
        Transaction::new(Monetary::new(2.0)?, "B", "Shelby, Tom").with_issue(5, true),
    ]);

    let mut output = Vec::new();
    write_report(&engine, &mut output)?;
    let report = String::from_utf8(output)?;

    let summary = parse_section(&report, 0, false)?;
    let messages = summary.iter()
        .find(|record| record.get(0) == Some("solved_issue_messages"))
        .ok_or_else(|| anyhow!("solved_issue_messages missing from report"))?;

    assert_eq!(messages.iter().skip(1).collect::<Vec<_>>(), vec!["Cleared; no action, closed", ""]);

    let clients = parse_section(&report, 1, true)?;

    assert_eq!(clients.len(), 2);
    assert!(clients.iter().all(|record| record.len() == 3));
    assert_eq!(clients[1].iter().collect::<Vec<_>>(), vec!["Shelby, Tom", "1.0000", "false"]);

    let by_beneficiary = parse_section(&report, 3, true)?;

    assert_eq!(by_beneficiary[1].iter().collect::<Vec<_>>(), vec!["Shelby, Tom", "", "B", "Shelby, Tom", "2.0000"]);

    Ok(())
}
