use crate::config::CleaningConfig;
use crate::passes::*;
use anyhow::Result;
use polars::prelude::*;

fn retain(df: DataFrame) -> Result<PassOutcome<EmailReport>> {
    let pattern = CleaningConfig::default().email_regex()?;
    Ok(retain_valid_emails(df, "email", &pattern)?)
}

#[test]
fn test_only_gmail_addresses_survive() -> Result<()> {
    let df = df!(
        "email" => &[
            Some("anna.b+news@gmail.com"),
            Some("x@yahoo.com"),
            None,
            Some("bad address@gmail.com"),
            Some("bob@gmail.com.au"),
            Some("c_d-e@gmail.com"),
        ],
        "n" => &[1i64, 2, 3, 4, 5, 6]
    )?;

    let outcome = retain(df)?;
    let report = outcome.report().expect("applied");
    assert_eq!(report.kept(), 2);
    assert_eq!(report.dropped.height(), 4);
    assert_eq!(
        super::strings(outcome.table(), "email"),
        vec![
            Some("anna.b+news@gmail.com".to_owned()),
            Some("c_d-e@gmail.com".to_owned())
        ]
    );
    assert_eq!(super::floats(outcome.table(), "n"), vec![Some(1.0), Some(6.0)]);
    Ok(())
}

#[test]
fn test_domain_match_is_case_sensitive() -> Result<()> {
    let df = df!("email" => &["a@GMAIL.com"])?;
    assert_eq!(retain(df)?.table().height(), 0);
    Ok(())
}

#[test]
fn test_missing_column_is_skipped() -> Result<()> {
    let df = df!("mail" => &["a@gmail.com", "b@yahoo.com"])?;
    let outcome = retain(df)?;
    assert!(!outcome.is_applied());
    assert_eq!(outcome.into_table().height(), 2);
    Ok(())
}
