//! Orders posts for listing pages: most recently touched first.
//!
//! Only the two timestamp fields exposed through [`Timestamped`] are read here.
//! Whether a post should be listed at all is decided by the caller's predicate.

use std::cmp::Reverse;

use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

#[derive(Error, Debug)]
pub(crate) enum RankError {
    #[error("invalid timestamp {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: time::error::Parse,
    },
}

/// The view of a record needed to rank it.
pub(crate) trait Timestamped {
    fn created_time(&self) -> &str;
    fn last_edited_time(&self) -> Option<&str>;
}

impl<T: Timestamped + ?Sized> Timestamped for &T {
    fn created_time(&self) -> &str {
        (**self).created_time()
    }

    fn last_edited_time(&self) -> Option<&str> {
        (**self).last_edited_time()
    }
}

/// The edit time when there is one, otherwise the creation time.
pub(crate) fn effective_timestamp<T: Timestamped + ?Sized>(record: &T) -> &str {
    match record.last_edited_time() {
        Some(edited) if !edited.is_empty() => edited,
        _ => record.created_time(),
    }
}

pub(crate) fn parse_timestamp(value: &str) -> Result<OffsetDateTime, RankError> {
    OffsetDateTime::parse(value, &Rfc3339).map_err(|source| RankError::InvalidTimestamp {
        value: value.to_string(),
        source,
    })
}

/// Effective timestamp as whole unix seconds, sub-second precision dropped.
pub(crate) fn sort_key<T: Timestamped + ?Sized>(record: &T) -> Result<i64, RankError> {
    parse_timestamp(effective_timestamp(record)).map(|instant| instant.unix_timestamp())
}

/// Keeps the records accepted by `visible` and returns them newest first.
///
/// `visible` is called exactly once per record. Records with equal keys keep
/// their relative input order. A single unparseable timestamp among the kept
/// records fails the whole call.
pub(crate) fn rank<'a, T, P>(records: &'a [T], mut visible: P) -> Result<Vec<&'a T>, RankError>
where
    T: Timestamped,
    P: FnMut(&T) -> bool,
{
    let mut keyed = Vec::with_capacity(records.len());
    for record in records {
        if visible(record) {
            keyed.push((sort_key(record)?, record));
        }
    }
    tracing::debug!(
        retained = keyed.len(),
        dropped = records.len() - keyed.len(),
        "ranked records"
    );

    // sort_by_key is stable
    keyed.sort_by_key(|(key, _)| Reverse(*key));
    Ok(keyed.into_iter().map(|(_, record)| record).collect())
}
