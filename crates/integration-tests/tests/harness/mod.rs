//! Shared test harness
//!
//! Each integration test binary compiles its own copy of this module,
//! so not every helper is used everywhere.

#![allow(dead_code)]

pub mod mock_upstream;

use std::sync::Arc;

use cellgate_gateway::{Gateway, HttpTransport, Transport, TransportConfig};
use secrecy::SecretString;

use mock_upstream::MockUpstream;

/// Build a gateway whose HTTP transport points at the mock upstream
pub fn gateway_for(mock: &MockUpstream) -> Gateway {
    let mut config = TransportConfig::new(SecretString::from("sk-test"));
    config.base_url = Some(mock.base_url().parse().expect("valid mock URL"));
    config.timeout_secs = 5;

    Gateway::with_transport(Arc::new(HttpTransport::new(config)) as Arc<dyn Transport>)
}
