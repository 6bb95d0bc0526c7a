use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contact::Draft;

/// Storage key of the contact message log.
pub const MESSAGES_KEY: &str = "portfolio-messages";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl SubmissionRecord {
    pub fn new(draft: Draft, timestamp: DateTime<Utc>) -> Self {
        Self {
            name: draft.name,
            email: draft.email,
            message: draft.message,
            timestamp,
        }
    }
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("stored messages are not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("couldn't encode messages: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Append-only log of contact submissions.
///
/// `read` never fails: an absent or unreadable log is an empty one, since the
/// next `write` replaces it wholesale anyway.
pub trait SubmissionStore {
    fn read(&self) -> Vec<SubmissionRecord>;
    fn write(&self, records: Vec<SubmissionRecord>) -> Result<(), StorageError>;
}

pub fn decode_log(raw: &str) -> Result<Vec<SubmissionRecord>, StorageError> {
    serde_json::from_str(raw).map_err(StorageError::Parse)
}

pub fn encode_log(records: &[SubmissionRecord]) -> Result<String, StorageError> {
    serde_json::to_string(records).map_err(StorageError::Encode)
}

pub fn read_slot(raw: Option<&str>) -> Vec<SubmissionRecord> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match decode_log(raw) {
        Ok(records) => records,
        Err(e) => {
            log::warn!("discarding unreadable {MESSAGES_KEY} slot: {e}");
            Vec::new()
        }
    }
}

/// A storage slot kept in memory as the same JSON text the browser would hold.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(raw.into()))),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SubmissionStore for MemoryStore {
    fn read(&self) -> Vec<SubmissionRecord> {
        let slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        read_slot(slot.as_deref())
    }

    fn write(&self, records: Vec<SubmissionRecord>) -> Result<(), StorageError> {
        let raw = encode_log(&records)?;
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(raw);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, secs: i64) -> SubmissionRecord {
        SubmissionRecord {
            name: name.to_string(),
            email: format!("{name}@example.com"),
            message: format!("hello from {name}"),
            timestamp: DateTime::from_timestamp(secs, 0).unwrap(),
        }
    }

    #[test]
    fn test_absent_slot_is_empty() {
        let store = MemoryStore::new();
        assert!(store.raw().is_none());
        assert!(store.read().is_empty());
    }

    #[test]
    fn test_write_then_read() {
        let store = MemoryStore::new();
        let records = vec![record("ada", 1_700_000_000), record("alan", 1_700_000_100)];
        store.write(records.clone()).unwrap();
        assert_eq!(store.read(), records);
    }

    #[test]
    fn test_corrupt_slot_reads_empty() {
        for raw in ["not json", "{\"name\":\"x\"}", "[{\"name\":1}]", ""] {
            let store = MemoryStore::with_raw(raw);
            assert!(store.read().is_empty(), "{raw:?} should read as empty");
        }
    }

    #[test]
    fn test_decode_reports_parse_error() {
        assert!(matches!(decode_log("[1,2"), Err(StorageError::Parse(_))));
    }

    #[test]
    fn test_reads_browser_written_records() {
        let raw = r#"[{"name":"Satoshi","email":"s@example.com","message":"gm","timestamp":"2024-05-01T10:00:00.000Z"}]"#;
        let records = decode_log(raw).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Satoshi");
        assert_eq!(records[0].timestamp.to_rfc3339(), "2024-05-01T10:00:00+00:00");
    }

    #[test]
    fn test_slot_is_json_array_with_iso_timestamps() {
        let store = MemoryStore::new();
        store.write(vec![record("ada", 0)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&store.raw().unwrap()).unwrap();
        let entries = value.as_array().expect("slot should hold an array");
        assert_eq!(entries[0]["timestamp"], "1970-01-01T00:00:00Z");
        assert_eq!(entries[0]["email"], "ada@example.com");
    }
}
