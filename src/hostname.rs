//! Local hostname lookup

use log::debug;

/// Get the hostname of the machine we run on.
///
/// A failed lookup is not fatal to sending an event: an empty string is returned instead.
#[cfg(unix)]
pub(crate) fn get_hostname() -> String {
    match nix::unistd::gethostname() {
        Ok(hostname) => match hostname.into_string() {
            Ok(hostname) => hostname,
            Err(raw) => {
                debug!("hostname {:?} is not valid UTF-8, using ''", raw);
                String::new()
            }
        },
        Err(e) => {
            debug!("failed to get system hostname: {}", e);
            String::new()
        }
    }
}

#[cfg(not(unix))]
pub(crate) fn get_hostname() -> String {
    String::new()
}
