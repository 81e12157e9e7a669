//! Category references (`{"id", "name", "category"}`)
//!
//! The Graph API uses this shape wherever a response points at another node,
//! e.g. the author of a comment.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::error::FacebookError;
use crate::json::{get_raw_string, JsonObject};

#[derive(Debug, Clone, Serialize)]
pub struct Category {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
}

impl Category {
    pub fn from_json(json: &JsonObject) -> Result<Self, FacebookError> {
        Ok(Self {
            id: get_raw_string("id", json)?,
            name: get_raw_string("name", json)?,
            category: get_raw_string("category", json)?,
        })
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Category {}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Category [id={}, name={}, category={}]",
            self.id().unwrap_or("null"),
            self.name().unwrap_or("null"),
            self.category().unwrap_or("null")
        )
    }
}
