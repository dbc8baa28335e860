//! Request parameter types shared by the endpoint namespaces

use std::fmt;

use chrono::NaiveDate;

use crate::error::{SoundchartsError, SoundchartsResult};

/// Largest page the API returns in one response
pub const MAX_PAGE_SIZE: u32 = 100;

/// Default number of items fetched by list endpoints
pub const DEFAULT_LIMIT: u32 = 100;

/// Date format used for `startDate`, `endDate` and report dates
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Offset and item count for list endpoints
///
/// `limit: None` fetches everything the endpoint holds, one page of
/// [`MAX_PAGE_SIZE`] items at a time. This can mean a very large number
/// of requests on ranking endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: u32,
    pub limit: Option<u32>,
}

impl Page {
    pub fn new(offset: u32, limit: Option<u32>) -> Self {
        Self { offset, limit }
    }

    /// The first `limit` items
    pub fn first(limit: u32) -> Self {
        Self::new(0, Some(limit))
    }

    /// Every item, starting at offset 0
    pub fn all() -> Self {
        Self::new(0, None)
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Size of each request sent to the API
    pub(crate) fn page_size(&self) -> u32 {
        self.limit.map_or(MAX_PAGE_SIZE, |limit| limit.min(MAX_PAGE_SIZE))
    }

    pub(crate) fn validate(&self) -> SoundchartsResult<()> {
        if self.limit == Some(0) {
            return Err(SoundchartsError::InvalidInput(
                "limit must be at least 1 (use Page::all() for no limit)".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::first(DEFAULT_LIMIT)
    }
}

/// Optional date range for time-series endpoints
///
/// Both bounds are inclusive. Without an end date the API serves its
/// latest 90 days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Period {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl Period {
    /// The API's default window
    pub fn latest() -> Self {
        Self::default()
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// The 90 days ending at `end`
    pub fn until(end: NaiveDate) -> Self {
        Self {
            start: None,
            end: Some(end),
        }
    }

    pub fn since(start: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    pub(crate) fn validate(&self) -> SoundchartsResult<()> {
        if let (Some(start), Some(end)) = (self.start, self.end) {
            if start > end {
                return Err(SoundchartsError::InvalidInput(format!(
                    "start date {} is after end date {}",
                    start, end
                )));
            }
        }
        Ok(())
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

/// `sortBy` / `sortOrder` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub by: String,
    pub order: SortOrder,
}

impl Sort {
    pub fn asc(by: impl Into<String>) -> Self {
        Self {
            by: by.into(),
            order: SortOrder::Asc,
        }
    }

    pub fn desc(by: impl Into<String>) -> Self {
        Self {
            by: by.into(),
            order: SortOrder::Desc,
        }
    }
}

/// Ordered query string; absent values are never sent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Query(Vec<(String, String)>);

impl Query {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing any previous value
    pub(crate) fn set(mut self, key: &str, value: impl ToString) -> Self {
        self.insert(key, value.to_string());
        self
    }

    pub(crate) fn opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(key, value),
            None => self,
        }
    }

    pub(crate) fn date(self, key: &str, value: Option<NaiveDate>) -> Self {
        self.opt(key, value.map(|d| d.format(DATE_FORMAT).to_string()))
    }

    pub(crate) fn sort(self, sort: &Sort) -> Self {
        self.set("sortBy", &sort.by).set("sortOrder", sort.order)
    }

    pub(crate) fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub(crate) fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    fn insert(&mut self, key: &str, value: String) {
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key.to_string(), value)),
        }
    }
}

/// Validate and percent-encode a caller-supplied path segment
pub(crate) fn path_segment(name: &str, value: &str) -> SoundchartsResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SoundchartsError::InvalidInput(format!(
            "{} cannot be empty",
            name
        )));
    }
    Ok(urlencoding::encode(trimmed).into_owned())
}
