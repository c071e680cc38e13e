//! Sort keys and the result view transformation.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;
use crate::model::Hit;

/// Recognized sort keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortKey {
    #[default]
    None,
    Title,
    Author,
    Url,
    Points,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [SortKey::None, SortKey::Title, SortKey::Author, SortKey::Url, SortKey::Points];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::None => "NONE",
            SortKey::Title => "TITLE",
            SortKey::Author => "AUTHOR",
            SortKey::Url => "URL",
            SortKey::Points => "POINTS",
        }
    }

    /// Whether the key's own policy reverses the ascending sort.
    pub fn reverses_ascending(self) -> bool {
        matches!(self, SortKey::Url | SortKey::Points)
    }

    /// Ascending comparison of two hits under this key.
    fn compare(self, a: &Hit, b: &Hit) -> Ordering {
        match self {
            SortKey::None => Ordering::Equal,
            SortKey::Title => missing_last(a.title.as_deref(), b.title.as_deref(), utf16_cmp),
            SortKey::Author => utf16_cmp(&a.author, &b.author),
            SortKey::Url => missing_last(a.url.as_deref(), b.url.as_deref(), utf16_cmp),
            SortKey::Points => missing_last(a.points, b.points, |a, b| a.cmp(&b)),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = Error;

    /// Parse a key name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownSortKey(s.to_string()))
    }
}

/// String order by UTF-16 code units, the order browser string comparison uses.
fn utf16_cmp(a: &str, b: &str) -> Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}

fn missing_last<T>(a: Option<T>, b: Option<T>, cmp: impl FnOnce(T, T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Order `hits` for display.
///
/// Applies the key's policy (stable ascending sort, plus a reversal for
/// `URL` and `POINTS`), then reverses once more if `reverse` is set.
/// The input is only borrowed; the returned references point into it.
pub fn result_view(hits: &[Hit], sort_key: SortKey, reverse: bool) -> Vec<&Hit> {
    let mut ordered: Vec<&Hit> = hits.iter().collect();

    if sort_key != SortKey::None {
        ordered.sort_by(|a, b| sort_key.compare(a, b));
    }
    if sort_key.reverses_ascending() {
        ordered.reverse();
    }
    if reverse {
        ordered.reverse();
    }

    ordered
}

/// Order `hits` for display using a key given by name.
///
/// # Errors
///
/// Returns `Error::UnknownSortKey` if `sort_key` is not a recognized key name.
pub fn result_view_by_name<'a>(hits: &'a [Hit], sort_key: &str, reverse: bool) -> Result<Vec<&'a Hit>, Error> {
    let key = sort_key.parse::<SortKey>()?;
    Ok(result_view(hits, key, reverse))
}
