/*! Rust library for sending log events to a [Splunk](https://www.splunk.com/) HTTP Event
Collector.

# libsplunk

A collector takes a set of key/value pairs, bundles them with the epoch time, the local
hostname and the source, sourcetype and index it was configured with, and POSTs the
result as a single JSON event. Each call is one blocking request: there is no batching,
no background thread and no retry.

- [Usage and Examples](#usage-and-examples)
- [API Reference][API reference]

# Usage and Examples

## Initialization

Initialize the library by passing in the collector endpoint, your HEC token and the
static fields that should be attached to every event.

```rust,no_run
let collector = libsplunk::init(libsplunk::Config {
  options: libsplunk::collector::Options {
    url: "https://splunk.example.com:8088/services/collector/event".to_string(),
    token: "YOUR_HEC_TOKEN".to_string(),
    source: "my-app".to_string(),
    source_type: "_json".to_string(),
    index: "main".to_string(),
  },
  transmission_options: libsplunk::transmission::Options::default(),
}).expect("failed to create Splunk collector");
```

Certificate checking is turned off by default, as HEC endpoints are frequently served
with self-signed certificates. Set `accept_invalid_certs: false` in
`transmission::Options` to verify them.

No timeout is applied to requests unless `transmission::Options::timeout` is set.

## Sending events

`.log()` sends the fields straight away and returns once the collector has answered.
Only a `200 OK` counts as success. Any other status is returned as an `Error` whose
message is the body the collector sent back; a request that cannot be completed at all
is returned with the HTTP client's own diagnostic. The `kind` of the error tells the
three cases apart.

The wire format is fixed:

```json
{
  "time": 1700000000,
  "host": "appserver15",
  "source": "my-app",
  "sourcetype": "_json",
  "index": "main",
  "event": { "status_code": "404" }
}
```

A `Collector` has no mutable state and can be shared between threads.

## Examples

### Simple: send an event
```rust
# use std::collections::HashMap;
# use libsplunk::{init, Config};
# let url = format!("{}/services/collector/event", mockito::server_url());
# let _m = mockito::mock("POST", "/services/collector/event")
#     .with_status(200)
#     .with_header("content-type", "application/json")
#     .with_body(r#"{"text":"Success","code":0}"#)
#     .create();
# let options = libsplunk::collector::Options{url, token: "some token".to_string(), ..libsplunk::collector::Options::default()};
// Call init to get a collector
let collector = init(Config {
  options: options,
  transmission_options: libsplunk::transmission::Options::default(),
}).expect("failed to create Splunk collector");

let mut data: HashMap<String, String> = HashMap::new();
data.insert("error".to_string(), "critical info here".to_string());
data.insert("status_code".to_string(), "404".to_string());

// In production code, please check the return of `.log()`
collector.log(data).err();
```

[API reference]: https://docs.rs/libsplunk-rust

 */
#![deny(missing_docs)]

pub mod collector;
mod errors;
mod event;
mod hostname;
#[cfg(test)]
mod mock;
mod sender;
pub mod transmission;

pub use collector::Collector;
pub use errors::{Error, ErrorKind, Result};
pub use event::Event;
pub use sender::Sender;
use transmission::Transmission;

/// Config allows the user to customise the initialisation of the library (effectively the
/// Collector)
#[derive(Debug, Clone)]
#[must_use = "must be set up for collector to be properly initialised"]
pub struct Config {
    /// options are the endpoint, token and static event fields of the collector.
    pub options: collector::Options,

    /// Configuration for the underlying sender. It is safe to leave these values at
    /// their defaults. You cannot change these values after calling init()
    pub transmission_options: transmission::Options,
}

/// init is called on app initialisation and passed a `Config`. A `Config` has two sets of
/// options (`collector::Options` and `transmission::Options`).
#[inline]
pub fn init(config: Config) -> Result<Collector<Transmission>> {
    let transmission = Transmission::new(config.transmission_options)?;
    Collector::new(config.options, transmission)
}
