//! Parsers for constrained string arguments.
//!
//! Each accepts a fixed set of names, compared case-insensitively, and
//! rejects everything else. Nothing is ever defaulted.

use crate::core::constants::{key_type, sku};
use crate::core::domain::{AccessRight, KeySelector, SkuName};
use crate::error::{Result, ValidationError};

/// Parse a `--regenerate-keys` value.
///
/// # Errors
///
/// Returns `ValidationError::InvalidKeySelector` for anything other than
/// `PrimaryKey` or `SecondaryKey` (in any case), including the empty string.
pub fn parse_key_selector(raw: &str) -> Result<KeySelector> {
    if raw.eq_ignore_ascii_case(key_type::PRIMARY_KEY) {
        Ok(KeySelector::Primary)
    } else if raw.eq_ignore_ascii_case(key_type::SECONDARY_KEY) {
        Ok(KeySelector::Secondary)
    } else {
        Err(ValidationError::InvalidKeySelector(raw.to_string()).into())
    }
}

/// Parse a single access right name.
///
/// # Errors
///
/// Returns `ValidationError::InvalidAccessRight` for unknown names.
pub fn parse_access_right(raw: &str) -> Result<AccessRight> {
    let raw = raw.trim();
    [AccessRight::Listen, AccessRight::Send, AccessRight::Manage]
        .into_iter()
        .find(|right| raw.eq_ignore_ascii_case(right.as_str()))
        .ok_or_else(|| ValidationError::InvalidAccessRight(raw.to_string()).into())
}

/// Parse a list of access right names, failing on the first bad one.
pub fn parse_access_rights(raw: &[String]) -> Result<Vec<AccessRight>> {
    raw.iter().map(|r| parse_access_right(r)).collect()
}

/// Parse a namespace SKU name.
///
/// # Errors
///
/// Returns `ValidationError::InvalidSku` for unknown names.
pub fn parse_sku(raw: &str) -> Result<SkuName> {
    if raw.eq_ignore_ascii_case(sku::BASIC) {
        Ok(SkuName::Basic)
    } else if raw.eq_ignore_ascii_case(sku::STANDARD) {
        Ok(SkuName::Standard)
    } else if raw.eq_ignore_ascii_case(sku::PREMIUM) {
        Ok(SkuName::Premium)
    } else {
        Err(ValidationError::InvalidSku(raw.to_string()).into())
    }
}
