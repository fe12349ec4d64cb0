//! Decoding of collection API responses.
//!
//! The host reports every request as `(status, body)`. These decoders turn that
//! pair into domain values or one of the three remote error kinds:
//!
//! - `Network`: the host reported a failure, or a non-success status came back
//!   without a usable body
//! - `Format`: a success body without the expected `data`/`pagination` shape
//! - `NotFound`: a detail response without a `data` payload

use crate::domain::error::{ArtscopeError, Result};
use crate::domain::{Artwork, ResultSet};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    pagination: Option<Pagination>,
}

#[derive(Debug, Deserialize)]
struct Pagination {
    total: usize,
}

/// A lightweight search hit that must be resolved to a full [`Artwork`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchReference {
    pub id: u64,
    pub api_link: String,
}

/// One page of search hits with the total number of matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPage {
    pub references: Vec<SearchReference>,
    pub total: usize,
}

const fn is_success(status: u16) -> bool {
    status >= 200 && status < 300
}

fn describe_failure(status: u16, body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        format!("HTTP {status}")
    } else {
        let snippet: String = text.chars().take(120).collect();
        format!("HTTP {status}: {snippet}")
    }
}

fn ensure_success(status: u16, body: &[u8]) -> Result<()> {
    if is_success(status) {
        Ok(())
    } else {
        Err(ArtscopeError::Network(describe_failure(status, body)))
    }
}

fn parse<T: for<'de> Deserialize<'de>>(body: &[u8]) -> Result<Envelope<T>> {
    serde_json::from_slice(body).map_err(|e| ArtscopeError::Format(e.to_string()))
}

/// Decodes a listing page into a [`ResultSet`].
///
/// # Errors
///
/// `Network` for non-success statuses, `Format` when the body lacks the `data`
/// array or `pagination.total`.
pub fn decode_result_set(status: u16, body: &[u8]) -> Result<ResultSet> {
    ensure_success(status, body)?;
    let envelope: Envelope<Vec<Artwork>> = parse(body)?;

    let artworks = envelope
        .data
        .ok_or_else(|| ArtscopeError::Format("missing data array".to_string()))?;
    let pagination = envelope
        .pagination
        .ok_or_else(|| ArtscopeError::Format("missing pagination".to_string()))?;

    Ok(ResultSet::new(artworks, pagination.total))
}

/// Decodes a search page into its references and the total match count.
///
/// # Errors
///
/// Same as [`decode_result_set`].
pub fn decode_search_page(status: u16, body: &[u8]) -> Result<SearchPage> {
    ensure_success(status, body)?;
    let envelope: Envelope<Vec<SearchReference>> = parse(body)?;

    let references = envelope
        .data
        .ok_or_else(|| ArtscopeError::Format("missing data array".to_string()))?;
    let total = envelope
        .pagination
        .ok_or_else(|| ArtscopeError::Format("missing pagination".to_string()))?
        .total
        .max(references.len());

    Ok(SearchPage { references, total })
}

/// Decodes a single artwork detail response.
///
/// Any JSON response without a `data` object means the artwork does not
/// exist, whatever the status. A non-JSON body is a transport failure when the
/// status is not a success, and a format error otherwise.
///
/// # Errors
///
/// `NotFound`, `Network`, or `Format` as described above.
pub fn decode_artwork(id: u64, status: u16, body: &[u8]) -> Result<Artwork> {
    match serde_json::from_slice::<Envelope<Artwork>>(body) {
        Ok(Envelope { data: Some(artwork), .. }) if is_success(status) => Ok(artwork),
        Ok(_) => Err(ArtscopeError::NotFound(id)),
        Err(_) if !is_success(status) => Err(ArtscopeError::Network(describe_failure(status, body))),
        Err(e) => Err(ArtscopeError::Format(e.to_string())),
    }
}
