//! Submit the contact form from the command line

use anyhow::{Context, Result};

use crate::contact::{ContactClient, SubmitStatus};
use crate::Folio;

/// Split `key=value` arguments into form fields
pub fn parse_fields(args: &[String]) -> Result<Vec<(String, String)>> {
    args.iter()
        .map(|arg| {
            let (key, value) = arg
                .split_once('=')
                .with_context(|| format!("Expected key=value, got {:?}", arg))?;
            let key = key.trim();
            if key.is_empty() {
                anyhow::bail!("Empty field name in {:?}", arg);
            }
            Ok((key.to_string(), value.to_string()))
        })
        .collect()
}

/// Post the fields to the configured endpoint, printing each status line
pub async fn run(folio: &Folio, args: &[String]) -> Result<SubmitStatus> {
    let fields = parse_fields(args)?;
    let client = ContactClient::new(&folio.config.contact.endpoint, folio.config.timeout())?;
    let status = client
        .submit(&fields, |status| println!("{}", status))
        .await;
    Ok(status)
}
