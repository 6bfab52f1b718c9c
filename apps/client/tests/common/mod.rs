#![allow(dead_code)]

// tests/common/mod.rs
use std::sync::Arc;

use client::api::GameApi;
use client::config::ClientConfig;
use client_test_support::FakeGameApi;

// Logging is auto-installed for test binaries
#[ctor::ctor]
fn init_logging() {
    client_test_support::logging::init();
}

/// Config pointed at nothing; the fake API never dials out.
pub fn test_config() -> ClientConfig {
    ClientConfig::new("http://service.invalid/api")
}

pub fn fake_api() -> (Arc<FakeGameApi>, Arc<dyn GameApi>) {
    let fake = Arc::new(FakeGameApi::new());
    let api: Arc<dyn GameApi> = Arc::clone(&fake) as Arc<dyn GameApi>;
    (fake, api)
}
