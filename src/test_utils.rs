use std::env;

use crate::client::ActransitClient;

pub fn init() {
    dotenvy::from_filename(".dev.vars").ok();
    env_logger::try_init().ok();
}

/// Client for the live-API tests, with the token from `.dev.vars`.
pub fn client() -> ActransitClient {
    init();
    let token = env::var("ACTRANSIT_TOKEN").unwrap_or_default();
    ActransitClient::new(token).unwrap()
}
