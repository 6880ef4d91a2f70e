use crate::collector::Options;
use crate::errors::Result;
use crate::Event;

/// `Sender` is responsible for delivering an event once `Collector::log` has built it.
/// Implementations of `send()` must be safe for concurrent calls.
pub trait Sender {
    /// `send` delivers a single event to the endpoint described by `options` and blocks
    /// until the collector has answered
    fn send(&self, options: &Options, event: &Event) -> Result<()>;
}
