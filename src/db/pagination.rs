//! Cursor-pagination contract shared by every listing call.
//!
//! Indexed scans fetch `num_items + 1` rows and hand back an opaque cursor
//! derived from the last row's scan key. Callers round-trip the cursor
//! verbatim; they never parse it.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Direction of an ordered collection scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    Asc,
    Desc,
}

impl std::str::FromStr for Order {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(()),
        }
    }
}

/// How many items to fetch and where to resume.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationOpts {
    pub num_items: usize,
    pub cursor: Option<String>,
}

impl PaginationOpts {
    pub fn first_page(num_items: usize) -> Self {
        Self { num_items, cursor: None }
    }
}

/// One page of results plus the boundary token for the next call.
/// `continue_cursor` is `Some` exactly when `is_done` is false.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub page: Vec<T>,
    pub is_done: bool,
    pub continue_cursor: Option<String>,
}

/// Resume point for a keyset scan: the secondary sort key (when the scan is
/// ordered by something other than insertion order) plus the row id
/// tie-break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScanKey {
    pub key: Option<String>,
    pub id: i64,
}

pub(crate) fn encode_cursor(key: &ScanKey) -> String {
    let payload = match &key.key {
        Some(k) => format!("k:{}:{}", key.id, k),
        None => format!("i:{}", key.id),
    };
    URL_SAFE_NO_PAD.encode(payload)
}

pub(crate) fn decode_cursor(cursor: &str) -> Result<ScanKey> {
    let bytes = URL_SAFE_NO_PAD
        .decode(cursor)
        .map_err(|_| Error::InvalidCursor)?;
    let payload = String::from_utf8(bytes).map_err(|_| Error::InvalidCursor)?;

    if let Some(rest) = payload.strip_prefix("i:") {
        let id = rest.parse().map_err(|_| Error::InvalidCursor)?;
        return Ok(ScanKey { key: None, id });
    }
    if let Some(rest) = payload.strip_prefix("k:") {
        let (id, key) = rest.split_once(':').ok_or(Error::InvalidCursor)?;
        let id = id.parse().map_err(|_| Error::InvalidCursor)?;
        return Ok(ScanKey { key: Some(key.to_string()), id });
    }
    Err(Error::InvalidCursor)
}

/// Assembles a `Page` from a scan that fetched `num_items + 1` rows.
pub(crate) fn page_from_scan<T>(
    mut rows: Vec<T>,
    num_items: usize,
    scan_key: impl Fn(&T) -> ScanKey,
) -> Page<T> {
    let is_done = rows.len() <= num_items;
    rows.truncate(num_items);
    let continue_cursor = if is_done {
        None
    } else {
        rows.last().map(|row| encode_cursor(&scan_key(row)))
    };

    Page { page: rows, is_done, continue_cursor }
}
