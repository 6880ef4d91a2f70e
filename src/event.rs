use std::collections::HashMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::collector::Options;
use crate::errors::Result;
use crate::hostname::get_hostname;

/// Event is the log entry sent to the collector when `Collector::log` is called. It
/// combines the static `collector::Options` with the time and hostname at creation and
/// the caller's fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    // epoch seconds
    pub(crate) time: i64,
    pub(crate) host: String,
    pub(crate) source: String,
    pub(crate) sourcetype: String,
    pub(crate) index: String,
    pub(crate) event: HashMap<String, String>,
}

impl Event {
    /// new creates an event stamped with the current time and local hostname
    pub fn new(options: &Options, fields: HashMap<String, String>) -> Self {
        Event {
            time: Utc::now().timestamp(),
            host: get_hostname(),
            source: options.source.clone(),
            sourcetype: options.source_type.clone(),
            index: options.index.clone(),
            event: fields,
        }
    }

    /// Epoch time in seconds at which the event was created
    pub fn time(&self) -> i64 {
        self.time
    }

    /// Hostname resolved when the event was created, empty if the lookup failed
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Caller supplied key/value pairs, sent as the `event` object
    pub fn fields(&self) -> &HashMap<String, String> {
        &self.event
    }

    /// to_json serializes the event into the request body
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}
