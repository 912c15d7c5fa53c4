//! Minimal example: print the name of every sensor visible to the token.
//!
//! Reads the API token from `OMNIDOTS_TOKEN`:
//!
//! ```sh
//! OMNIDOTS_TOKEN=... cargo run --example list_sensors
//! ```

use omnidots_lib::ApiClient;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let token = std::env::var("OMNIDOTS_TOKEN").unwrap_or_default();

    let client = match ApiClient::new(omnidots_lib::DEFAULT_SERVER, &token) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("failed to initialise client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let response = match client.list_sensors().await {
        Ok(r) => r,
        Err(e) => {
            eprintln!("failed to list sensors: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(sensors) = response.json200.and_then(|ok| ok.sensors) {
        for sensor in sensors {
            if let Some(name) = sensor.name {
                println!("{}", name);
            }
        }
    }
    ExitCode::SUCCESS
}
