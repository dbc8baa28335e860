//! Pagination looping over offset pages and 90-day date windows
//!
//! List endpoints return at most [`MAX_PAGE_SIZE`](crate::MAX_PAGE_SIZE) items per response and
//! time-series endpoints at most 90 days per request. A [`Listing`] describes
//! one logical call; [`SoundchartsClient::paginate`] issues as many requests
//! as the range and limit require and merges the responses into a single
//! JSON document shaped like the first one.

use std::cmp::Ordering;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};
use reqwest::Method;
use serde_json::{Map, Value};
use tracing::debug;

use crate::client::SoundchartsClient;
use crate::error::SoundchartsResult;
use crate::params::{Page, Period, Query, SortOrder, DATE_FORMAT};

/// Largest date range served by one request, in calendar days
pub const MAX_WINDOW_DAYS: i64 = 90;

/// A paginated endpoint call
#[derive(Debug, Clone)]
pub(crate) struct Listing {
    path: String,
    query: Query,
    body: Option<Value>,
    page: Option<Page>,
    period: Period,
    windowed: bool,
    date_sort: Option<(&'static str, SortOrder)>,
}

impl Listing {
    pub(crate) fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Query::new(),
            body: None,
            page: None,
            period: Period::default(),
            windowed: true,
            date_sort: None,
        }
    }

    pub(crate) fn query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    /// Send the listing as a POST with this JSON payload
    pub(crate) fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Send `offset`/`limit` and stop once `page.limit` items are collected
    ///
    /// Listings without a page fetch every item of every window and only
    /// send an `offset` when following a next page.
    pub(crate) fn page(mut self, page: Page) -> Self {
        self.page = Some(page);
        self
    }

    pub(crate) fn period(mut self, period: Period) -> Self {
        self.period = period;
        self
    }

    /// Pass dates through verbatim instead of splitting them into windows
    pub(crate) fn without_windows(mut self) -> Self {
        self.windowed = false;
        self
    }

    /// Re-sort the merged items by an ISO-8601 date field
    pub(crate) fn sort_by_date(mut self, key: &'static str, order: SortOrder) -> Self {
        self.date_sort = Some((key, order));
        self
    }

    fn method(&self) -> Method {
        if self.body.is_some() {
            Method::POST
        } else {
            Method::GET
        }
    }

    /// Date windows to request, oldest first; `None` means "no windowing"
    fn windows(&self) -> Vec<Option<(NaiveDate, NaiveDate)>> {
        match (self.windowed, self.period.end) {
            (true, Some(end)) => {
                let start = self
                    .period
                    .start
                    .unwrap_or_else(|| end - Duration::days(MAX_WINDOW_DAYS - 1));
                date_windows(start, end).into_iter().map(Some).collect()
            }
            _ => vec![None],
        }
    }

    fn request_query(&self, window: Option<(NaiveDate, NaiveDate)>, offset: u32) -> Query {
        let query = match window {
            Some((start, end)) => self
                .query
                .clone()
                .date("startDate", Some(start))
                .date("endDate", Some(end)),
            None => self
                .query
                .clone()
                .date("startDate", self.period.start)
                .date("endDate", self.period.end),
        };
        match self.page {
            Some(page) => query
                .set("offset", offset)
                .set("limit", page.page_size()),
            None if offset > 0 => query.set("offset", offset),
            None => query,
        }
    }
}

/// Split the inclusive range `[start, end]` into windows of at most
/// [`MAX_WINDOW_DAYS`] days, oldest first
///
/// The windows are contiguous and non-overlapping; a range of N days
/// yields `ceil(N / 90)` windows. Returns nothing when `start > end`.
pub fn date_windows(start: NaiveDate, end: NaiveDate) -> Vec<(NaiveDate, NaiveDate)> {
    let mut windows = Vec::new();
    let mut window_start = start;
    while window_start <= end {
        let window_end = (window_start + Duration::days(MAX_WINDOW_DAYS - 1)).min(end);
        windows.push((window_start, window_end));
        window_start = window_end + Duration::days(1);
    }
    windows
}

impl SoundchartsClient {
    /// Run a listing to completion and return the merged response
    pub(crate) async fn paginate(&self, listing: Listing) -> SoundchartsResult<Value> {
        if let Some(page) = &listing.page {
            page.validate()?;
        }
        listing.period.validate()?;

        let method = listing.method();
        let limit = listing.page.and_then(|page| page.limit).map(|l| l as usize);
        let first_offset = listing.page.map_or(0, |page| page.offset);
        let windows = listing.windows();
        let window_count = windows.len();
        let mut merged: Option<Value> = None;

        'windows: for window in windows {
            let mut offset = first_offset;

            loop {
                let query = listing.request_query(window, offset);
                let response = match self
                    .execute(method.clone(), &listing.path, &query, listing.body.as_ref())
                    .await?
                {
                    Some(response) if !is_empty(&response) => response,
                    _ => break,
                };

                let received = item_count(&response);
                let more = has_next_page(&response);
                merge_response(&mut merged, response);

                let collected = merged.as_ref().map_or(0, item_count);
                let expected = limit.unwrap_or_else(|| {
                    merged.as_ref().map_or(collected, page_total) * window_count
                });
                debug!(
                    path = %listing.path,
                    collected,
                    expected,
                    progress = %format_progress(collected, expected),
                    "Pagination progress"
                );

                if limit.is_some_and(|limit| collected >= limit) {
                    break 'windows;
                }
                if !more || received == 0 {
                    break;
                }
                offset = offset.saturating_add(received as u32);
            }
        }

        let mut result = merged.unwrap_or_else(empty_object);
        if let Some(limit) = limit {
            truncate_items(&mut result, limit);
        }
        if let Some((key, order)) = listing.date_sort {
            sort_items_by_date(&mut result, key, order);
        }
        Ok(result)
    }
}

pub(crate) fn empty_object() -> Value {
    Value::Object(Map::new())
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn items(value: &Value) -> Option<&Vec<Value>> {
    value.get("items").and_then(Value::as_array)
}

fn item_count(value: &Value) -> usize {
    items(value).map_or(0, Vec::len)
}

fn page_total(value: &Value) -> usize {
    value
        .pointer("/page/total")
        .and_then(Value::as_u64)
        .map_or_else(|| item_count(value), |total| total as usize)
}

fn has_next_page(value: &Value) -> bool {
    match value.pointer("/page/next") {
        Some(Value::String(next)) => !next.is_empty(),
        Some(Value::Null) | None => false,
        Some(_) => true,
    }
}

/// Fold one response into the accumulated result
///
/// The first response becomes the skeleton. Later responses with an
/// `items` list replace the skeleton, carrying every item collected so far
/// in front of their own. `page.total` never drops below the item count.
pub(crate) fn merge_response(merged: &mut Option<Value>, mut response: Value) {
    let mut current = match merged.take() {
        None => response,
        Some(mut current) => {
            if let (Some(Value::Array(previous)), Some(Value::Array(incoming))) =
                (current.get_mut("items"), response.get_mut("items"))
            {
                let mut combined = std::mem::take(previous);
                combined.append(incoming);
                *incoming = combined;
                response
            } else {
                current
            }
        }
    };

    let collected = item_count(&current) as u64;
    if let Some(page) = current.get_mut("page").and_then(Value::as_object_mut) {
        let total = page.get("total").and_then(Value::as_u64).unwrap_or(0);
        page.insert("total".to_string(), Value::from(total.max(collected)));
    }
    *merged = Some(current);
}

pub(crate) fn truncate_items(value: &mut Value, limit: usize) {
    if let Some(items) = value.get_mut("items").and_then(Value::as_array_mut) {
        items.truncate(limit);
    }
}

/// Stable sort of `items` by a date field; undated items go last
pub(crate) fn sort_items_by_date(value: &mut Value, key: &str, order: SortOrder) {
    let Some(items) = value.get_mut("items").and_then(Value::as_array_mut) else {
        return;
    };
    items.sort_by(|a, b| {
        let a = a.get(key).and_then(Value::as_str).and_then(parse_timestamp);
        let b = b.get(key).and_then(Value::as_str).and_then(parse_timestamp);
        match (a, b) {
            (Some(a), Some(b)) => match order {
                SortOrder::Asc => a.cmp(&b),
                SortOrder::Desc => b.cmp(&a),
            },
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}

/// Parse the timestamp shapes the API uses, normalised to UTC
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z") {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw.trim_end_matches('Z'), "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn format_progress(collected: usize, expected: usize) -> String {
    if expected == 0 {
        return "100%".to_string();
    }
    let percent = (collected as f64 * 100.0 / expected as f64).min(100.0);
    format!("{:.2}%", percent)
}
