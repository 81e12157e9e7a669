//! Ordered result lists built from `{"data": [...]}` envelopes

use std::ops::Deref;

use serde::Serialize;
use serde_json::Value;

use crate::error::JsonError;
use crate::json::{get_array, get_boolean, get_int, get_object, get_raw_string, JsonObject};

/// Cursor pair of a cursor-paginated edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cursors {
    pub before: Option<String>,
    pub after: Option<String>,
}

/// The `paging` block of a list envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paging {
    pub previous: Option<String>,
    pub next: Option<String>,
    pub cursors: Option<Cursors>,
}

impl Paging {
    pub fn from_json(json: &JsonObject) -> Result<Self, JsonError> {
        let cursors = get_object("cursors", json)?
            .map(|c| -> Result<Cursors, JsonError> {
                Ok(Cursors {
                    before: get_raw_string("before", c)?,
                    after: get_raw_string("after", c)?,
                })
            })
            .transpose()?;

        Ok(Self {
            previous: get_raw_string("previous", json)?,
            next: get_raw_string("next", json)?,
            cursors,
        })
    }
}

/// The `summary` block returned when a request asks for `summary=true`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_count: Option<i64>,
    pub order: Option<String>,
    pub can_comment: Option<bool>,
}

impl Summary {
    pub fn from_json(json: &JsonObject) -> Result<Self, JsonError> {
        Ok(Self {
            total_count: get_int("total_count", json)?,
            order: get_raw_string("order", json)?,
            can_comment: get_boolean("can_comment", json)?,
        })
    }
}

/// Mapped entities in response order, plus the envelope they came from
#[derive(Debug, Clone, Serialize)]
pub struct ResponseList<T> {
    #[serde(rename = "data")]
    items: Vec<T>,
    #[serde(skip)]
    source: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    paging: Option<Paging>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<Summary>,
}

impl<T> ResponseList<T> {
    /// Pair already mapped `items` with the envelope's `data`, `paging` and
    /// `summary` blocks.
    pub fn from_envelope(json: &JsonObject, items: Vec<T>) -> Result<Self, JsonError> {
        let source = get_array("data", json)?.clone();
        let paging = get_object("paging", json)?
            .map(Paging::from_json)
            .transpose()?;
        let summary = get_object("summary", json)?
            .map(Summary::from_json)
            .transpose()?;

        Ok(Self {
            items,
            source,
            paging,
            summary,
        })
    }

    /// The raw `data` array the items were mapped from
    pub fn source(&self) -> &[Value] {
        &self.source
    }

    pub fn paging(&self) -> Option<&Paging> {
        self.paging.as_ref()
    }

    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> Deref for ResponseList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> IntoIterator for ResponseList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ResponseList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
