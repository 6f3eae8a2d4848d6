//! Wire DTOs for the content backend.
//!
//! DESIGN
//! ======
//! The backend assigns record ids; the client never interprets them beyond
//! equality and path formatting. `RecordId` therefore accepts both integer
//! and string JSON ids and keeps the raw text.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque, server-assigned history record identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RecordId(String);

impl RecordId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

impl From<String> for RecordId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<i64> for RecordId {
    fn from(raw: i64) -> Self {
        Self(raw.to_string())
    }
}

impl std::str::FromStr for RecordId {
    type Err = std::convert::Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(Self(raw.trim().to_owned()))
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordIdVisitor;

        impl Visitor<'_> for RecordIdVisitor {
            type Value = RecordId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an integer or string record id")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<RecordId, E> {
                Ok(RecordId(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<RecordId, E> {
                Ok(RecordId(v.to_string()))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<RecordId, E> {
                Ok(RecordId(v.to_owned()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<RecordId, E> {
                Ok(RecordId(v))
            }
        }

        deserializer.deserialize_any(RecordIdVisitor)
    }
}

/// One persisted generation as returned by `GET /history`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HistoryRecord {
    pub id: RecordId,
    pub product_name: String,
    pub product_description: String,
    pub generated_content: String,
    /// Server timestamp; older backends omit it.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `POST /generate-content`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenerateRequest {
    pub product_name: String,
    pub product_description: String,
}

/// Response of `POST /generate-content`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GenerateResponse {
    pub marketing_text: String,
}

/// Response of `GET /`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}
