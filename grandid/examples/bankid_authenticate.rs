//! Starts a BankID authentication and polls the session until it finishes.
//!
//! ```sh
//! GRANDID_API_KEY=... GRANDID_SERVICE_KEY=... GRANDID_PERSONAL_NUMBER=19xxxxxxxxxx \
//!     RUST_LOG=debug cargo run -p grandid --example bankid_authenticate
//! ```

use std::env;
use std::error::Error;
use std::thread::sleep;
use std::time::Duration;

use grandid::{BankIdClient, BankIdOptions, GrandIdClient, GrandIdConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const POLL_INTERVAL: Duration = Duration::from_secs(2);
const MAX_POLLS: usize = 10;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("grandid=debug,bankid_authenticate=debug")),
        )
        .init();

    let config = GrandIdConfig::new(
        env::var("GRANDID_API_KEY")?,
        env::var("GRANDID_SERVICE_KEY")?,
    )
    .with_test_server(true);
    let client = BankIdClient::new(&config)?;

    let login = client.authenticate(&BankIdOptions {
        personal_number: env::var("GRANDID_PERSONAL_NUMBER").ok(),
        gui: false,
        ..Default::default()
    })?;
    info!(session_id = %login.session_id, "authentication started");

    for attempt in 1..=MAX_POLLS {
        sleep(POLL_INTERVAL);
        match client.collect(&login.session_id) {
            Ok(session) if session.is_complete() => {
                info!(username = ?session.username, "authentication complete");
                return Ok(());
            }
            Ok(session) => info!(attempt, ?session, "session not complete yet"),
            Err(e) if e.is_pending() => info!(attempt, status = %e, "waiting for the user"),
            Err(e) => return Err(e.into()),
        }
    }

    warn!("giving up; cancelling the BankID order");
    client.logout(&login.session_id, true)?;
    Ok(())
}
