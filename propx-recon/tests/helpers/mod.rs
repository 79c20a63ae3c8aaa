//! Test Helper Utilities
//!
//! Shared utilities for propx-recon integration tests

#![allow(dead_code)]

pub mod log_capture;

pub use log_capture::{capture_logs, LogCapture};

use propx_recon::RawFieldRecord;
use serde_json::Value;

/// Raw record from a JSON object literal
pub fn raw(value: Value) -> RawFieldRecord {
    match value {
        Value::Object(map) => map,
        other => panic!("raw record must be a JSON object, got {other}"),
    }
}
