/*! Transmission handles the delivery of events to a Splunk HTTP Event Collector

*/
use std::time::Duration;

use log::{debug, trace};
use reqwest::{blocking, header, StatusCode};

use crate::collector::Options as CollectorOptions;
use crate::errors::{Error, Result};
use crate::event::Event;
use crate::sender::Sender;

const DEFAULT_NAME_PREFIX: &str = "libsplunk-rust";
// AUTH_SCHEME is the word preceding the token in the Authorization header
const AUTH_SCHEME: &str = "Splunk";
// DEFAULT_ACCEPT_INVALID_CERTS whether certificate checking is turned off
const DEFAULT_ACCEPT_INVALID_CERTS: bool = true;

/// Options includes various options to tweak the behaviour of the sender.
#[derive(Debug, Clone)]
pub struct Options {
    /// skip TLS certificate verification. Collectors are commonly deployed with
    /// self-signed certificates, so this is on by default; set it to `false` for strict
    /// verification. Overrides DEFAULT_ACCEPT_INVALID_CERTS.
    pub accept_invalid_certs: bool,

    /// upper bound on a whole request. No bound is applied by default.
    pub timeout: Option<Duration>,

    /// user_agent_addition is an option that allows you to augment the "User-Agent"
    /// header that libsplunk sends along with each event. The default User-Agent is
    /// "libsplunk-rust/<version>". If you set this variable, its contents will be appended
    /// to the User-Agent string. The expected format is " product-name/version", eg
    /// " myapp/1.0"
    pub user_agent_addition: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            accept_invalid_certs: DEFAULT_ACCEPT_INVALID_CERTS,
            timeout: None,
            user_agent_addition: None,
        }
    }
}

/// `Transmission` POSTs individual events to the collector endpoint
#[derive(Debug, Clone)]
pub struct Transmission {
    user_agent: String,

    // This is a shallow clone of a pool, connections are reused across calls
    http_client: blocking::Client,
}

impl Sender for Transmission {
    fn send(&self, options: &CollectorOptions, event: &Event) -> Result<()> {
        debug!("in transmission send");

        // Serialize before touching the network: a bad body must not produce a request
        let payload = event.to_json()?;
        trace!("Sending payload: {}", String::from_utf8_lossy(&payload));

        let response = self
            .http_client
            .post(&options.url)
            .header(header::USER_AGENT, &self.user_agent)
            .header(header::CONTENT_TYPE, "application/json")
            .header(
                header::AUTHORIZATION,
                format!("{} {}", AUTH_SCHEME, options.token),
            )
            .body(payload)
            .send()?;

        trace!("Received response: {:#?}", response);
        match response.status() {
            StatusCode::OK => Ok(()),
            status => {
                let body = response.text()?;
                debug!("event rejected with {}: {}", status, body);
                Err(Error::remote_rejection(status, body))
            }
        }
    }
}

impl Transmission {
    /// Creates a transmission and the HTTP client it sends with
    pub fn new(options: Options) -> Result<Self> {
        let user_agent = format!("{}/{}", DEFAULT_NAME_PREFIX, env!("CARGO_PKG_VERSION"));
        let user_agent = if let Some(ref ua_addition) = options.user_agent_addition {
            format!("{}{}", user_agent, ua_addition)
        } else {
            user_agent
        };

        let mut builder = blocking::Client::builder().timeout(options.timeout);
        #[cfg(any(feature = "rustls-tls", feature = "native-tls"))]
        {
            builder = builder.danger_accept_invalid_certs(options.accept_invalid_certs);
        }

        Ok(Self {
            http_client: builder.build()?,
            user_agent,
        })
    }
}
