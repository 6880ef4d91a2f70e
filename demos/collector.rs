use std::collections::HashMap;

use libsplunk::{collector, transmission, Error};

fn main() -> Result<(), Error> {
    env_logger::init();

    let collector = libsplunk::init(libsplunk::Config {
        options: collector::Options {
            url: std::env::var("SPLUNK_URL").expect("need to set SPLUNK_URL"),
            token: std::env::var("SPLUNK_TOKEN").expect("need to set SPLUNK_TOKEN"),
            source: "libsplunk-demo".to_string(),
            source_type: "_json".to_string(),
            index: std::env::var("SPLUNK_INDEX").unwrap_or_else(|_| "main".to_string()),
        },
        transmission_options: transmission::Options::default(),
    })
    .expect("failed to create Splunk collector");

    let mut event = HashMap::new();
    event.insert("extra".to_string(), "wheeee".to_string());
    event.insert("extra_ham".to_string(), "cheese".to_string());
    match collector.log(event) {
        Ok(()) => log::info!("event accepted"),
        Err(e) => {
            log::error!("Could not send event ({:?}): {}", e.kind, e);
            return Err(e);
        }
    }
    Ok(())
}
