//! Collector configuration and the `log` operation

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::event::Event;
use crate::sender::Sender;

/// Options is the static configuration of a collector. Every event sent through the
/// collector is tagged with `source`, `source_type` and `index`. None of the values are
/// validated: a malformed url only shows up as an error when an event is logged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// url is the full address of the HTTP Event Collector endpoint, eg
    /// https://splunk.example.com:8088/services/collector/event
    pub url: String,

    /// token is the HEC token, sent as `Authorization: Splunk <token>`
    pub token: String,

    /// source is the application name attached to every event
    pub source: String,

    /// source_type is the Splunk bucket events are grouped in
    #[serde(rename = "sourcetype")]
    pub source_type: String,

    /// index is the routing identifier Splunk stores events under
    pub index: String,
}

/// Collector sends one log event per `log` call through its `Sender`.
///
/// It holds no mutable state, so a single collector can be shared between threads and
/// `log` called concurrently.
#[derive(Debug, Clone)]
pub struct Collector<T: Sender> {
    pub(crate) options: Options,
    pub(crate) transmission: T,
}

impl<T> Collector<T>
where
    T: Sender,
{
    /// new creates a collector sending through `transmission`
    pub fn new(options: Options, transmission: T) -> Result<Self> {
        debug!("Creating splunk collector");
        Ok(Self {
            options,
            transmission,
        })
    }

    /// options returns the static configuration of the collector
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// new_event bundles `fields` with the timestamp, hostname, source, sourcetype and
    /// index of this collector, without sending it
    pub fn new_event(&self, fields: HashMap<String, String>) -> Event {
        Event::new(&self.options, fields)
    }

    /// log sends `fields` to the collector as a single event and blocks until the
    /// collector answers. These can be any key/value pairs of use, eg
    /// `{"error": "critical info here", "status_code": "404"}`.
    ///
    /// Returns an error whose message is the response body if the collector answers
    /// anything but 200, or the HTTP client's diagnostic if the request fails. Nothing is
    /// retried.
    pub fn log(&self, fields: HashMap<String, String>) -> Result<()> {
        let event = self.new_event(fields);
        debug!("logging event with {} field(s)", event.fields().len());
        self.transmission.send(&self.options, &event)
    }
}
