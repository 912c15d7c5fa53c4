//! Omnidots CLI: list sensors and fetch peak vibration records from the
//! Honeycomb API.

mod output;

use clap::{Parser, ValueEnum};
use omnidots_lib::{ApiClient, ErrorResponse, GetPeakRecordsParams};
use output::OutputFormat;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "omnidots")]
#[command(about = "Omnidots CLI: list sensors and fetch peak vibration records", long_about = None)]
struct Cli {
    /// Omnidots API token
    #[arg(long, env = "OMNIDOTS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Base URL of the Honeycomb API
    #[arg(long, default_value = omnidots_lib::DEFAULT_SERVER)]
    server: String,

    /// Command to execute ('list-sensors' or 'peak-records')
    #[arg(long)]
    command: Option<String>,

    /// Output format: plain (human-readable), json (structured)
    #[arg(short, long, default_value = "json", value_enum)]
    output: OutputFormatArg,

    /// [peak-records] ID of the measuring point
    #[arg(long)]
    measuring_point_id: Option<i64>,

    /// [peak-records] Start time in milliseconds since epoch
    #[arg(long)]
    start_time: Option<i64>,

    /// [peak-records] End time in milliseconds since epoch
    #[arg(long)]
    end_time: Option<i64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormatArg {
    Plain,
    Json,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let token = match cli.token {
        Some(t) if !t.is_empty() => t,
        _ => {
            eprintln!("Error: API token is required");
            return ExitCode::FAILURE;
        }
    };

    let client = match ApiClient::new(&cli.server, &token) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to initialize client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let format = match cli.output {
        OutputFormatArg::Plain => OutputFormat::Plain,
        OutputFormatArg::Json => OutputFormat::Json,
    };

    let result = match cli.command.as_deref() {
        Some("list-sensors") => list_sensors(&client, format).await,
        Some("peak-records") => {
            let params = match (cli.measuring_point_id, cli.start_time) {
                (Some(measuring_point_id), Some(start_time)) => GetPeakRecordsParams {
                    measuring_point_id,
                    start_time,
                    end_time: cli.end_time,
                },
                _ => {
                    eprintln!(
                        "Error: --measuring-point-id and --start-time are required for peak-records"
                    );
                    return ExitCode::FAILURE;
                }
            };
            peak_records(&client, &params, format).await
        }
        Some(other) => Err(format!("Unknown command: {}", other)),
        None => Err("Error: --command is required ('list-sensors' or 'peak-records')".to_string()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn list_sensors(client: &ApiClient, format: OutputFormat) -> Result<(), String> {
    let response = client
        .list_sensors()
        .await
        .map_err(|e| format!("Failed to list sensors: {}", e))?;

    if let Some(success) = response.json200 {
        let sensors = success.sensors.unwrap_or_default();
        match format {
            OutputFormat::Plain => println!("{}", output::sensors_plain(&sensors)),
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string_pretty(&sensors).map_err(|e| e.to_string())?
            ),
        }
        Ok(())
    } else if let Some(err) = response.json400.or(response.json500) {
        Err(api_error_message("list sensors", &err))
    } else {
        println!("No sensors found or an error occurred in fetching the data.");
        Ok(())
    }
}

async fn peak_records(
    client: &ApiClient,
    params: &GetPeakRecordsParams,
    format: OutputFormat,
) -> Result<(), String> {
    let response = client
        .get_peak_records(params)
        .await
        .map_err(|e| format!("Failed to get peak records: {}", e))?;

    if let Some(success) = response.json200 {
        match format {
            OutputFormat::Plain => println!("{}", output::peak_records_plain(&success.samples)),
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string_pretty(&success.samples).map_err(|e| e.to_string())?
            ),
        }
        Ok(())
    } else if let Some(err) = response.json400.or(response.json500) {
        Err(api_error_message("get peak records", &err))
    } else {
        println!("No peak records found or an error occurred in fetching the data.");
        Ok(())
    }
}

fn api_error_message(action: &str, err: &ErrorResponse) -> String {
    let mut msg = format!(
        "Failed to {}: {}",
        action,
        err.message.as_deref().unwrap_or("API request failed")
    );
    if let Some(help) = &err.help {
        msg.push_str(&format!(" ({})", help));
    }
    msg
}
