//! # Claims Reduction
//!
//! Folds the row sequence into the flat `claims` map of an offer request.
//!
//! The key of each row is its field name with every space removed and the
//! first character lowercased, so `"Birth Date"` becomes `"birthDate"`.
//! Rows are folded in sequence order; when two rows reduce to the same key
//! the later row wins.

use std::collections::BTreeMap;

use crate::row::ClaimRow;

/// Flat claim map sent to the issuing service.
pub type Claims = BTreeMap<String, String>;

/// Normalize a field name into a claim key.
///
/// Only the ASCII space is stripped; other whitespace is kept.
pub fn claim_key(field_name: &str) -> String {
    let compact: String = field_name.split(' ').collect();
    let mut chars = compact.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Reduce rows into claims, later rows overwriting earlier colliding keys.
pub fn build_claims<'a, I>(rows: I) -> Claims
where
    I: IntoIterator<Item = &'a ClaimRow>,
{
    rows.into_iter().fold(Claims::new(), |mut acc, row| {
        acc.insert(claim_key(&row.field_name), row.value.clone());
        acc
    })
}
