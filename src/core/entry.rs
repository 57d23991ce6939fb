//! Log entry structure

use super::fields::Fields;
use super::level::Level;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single dispatched log event.
///
/// Built once per log call that passes the level gate, then lent to the
/// handler. Handlers that keep entries past the call must clone them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub fields: Fields,
    pub level: Level,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl Entry {
    pub fn new(fields: Fields, level: Level, message: String) -> Self {
        Self {
            fields,
            level,
            message,
            timestamp: Utc::now(),
        }
    }
}
