//! Quote record types.

use serde::{Deserialize, Deserializer, Serialize};

/// A persisted quote. `id` is assigned by the store on insert and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-types", derive(sqlx::FromRow))]
pub struct Quote {
    pub id: i64,
    pub author: String,
    pub quote: String,
}

/// Body of a create request: `{"author": ..., "quote": ...}`.
///
/// Absent and `null` fields decode as empty strings; only a body that is not
/// a JSON object (or has non-string fields) is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuote {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub quote: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl NewQuote {
    pub fn new(author: impl Into<String>, quote: impl Into<String>) -> Self {
        Self { author: author.into(), quote: quote.into() }
    }

    /// Attach a store-assigned id.
    #[must_use]
    pub fn into_quote(self, id: i64) -> Quote {
        Quote { id, author: self.author, quote: self.quote }
    }
}
