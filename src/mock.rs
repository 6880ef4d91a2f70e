/*!
Mock module to ease testing
    */
use std::sync::Arc;

use parking_lot::Mutex;
use reqwest::StatusCode;

use crate::collector::Options;
use crate::errors::{Error, Result};
use crate::sender::Sender;
use crate::Event;

/// Transmission mocker that records events instead of sending them
#[derive(Debug, Clone, Default)]
pub struct TransmissionMock {
    events: Arc<Mutex<Vec<Event>>>,
    rejection: Option<String>,
}

impl Sender for TransmissionMock {
    // `send` records the event and answers with the configured rejection, if any
    fn send(&self, _options: &Options, event: &Event) -> Result<()> {
        self.events.lock().push(event.clone());
        match self.rejection {
            Some(ref body) => Err(Error::remote_rejection(
                StatusCode::BAD_REQUEST,
                body.clone(),
            )),
            None => Ok(()),
        }
    }
}

impl TransmissionMock {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// every following send is rejected with `body`
    pub fn fail_with(&mut self, body: &str) {
        self.rejection = Some(body.to_string());
    }

    /// events
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }
}
