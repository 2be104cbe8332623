//! Comma separated address lists, as stored in `base_cc` and `base_bcc`.

use validator::ValidateEmail;

use crate::error::{Error, Result};

const SEPARATOR: char = ',';

/// Splits stored text into addresses without validating them.
pub fn split(text: &str) -> Vec<String> {
    text.split(SEPARATOR)
        .map(str::trim)
        .filter(|address| !address.is_empty())
        .map(str::to_owned)
        .collect()
}

pub fn parse(text: &str) -> Result<Vec<String>> {
    let addresses = split(text);
    for address in &addresses {
        if !address.validate_email() {
            return Err(Error::InvalidEmail(address.clone()));
        }
    }
    Ok(addresses)
}

/// Validates and rewrites a list into its stored form.
pub fn normalize(text: &str) -> Result<String> {
    Ok(parse(text)?.join(", "))
}

/// An empty sender means "use the site default".
pub fn validate_sender(text: &str) -> Result<()> {
    let sender = text.trim();
    if sender.is_empty() || sender.to_owned().validate_email() {
        Ok(())
    } else {
        Err(Error::InvalidEmail(sender.to_owned()))
    }
}
