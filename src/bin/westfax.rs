//! WestFax API CLI binary.
//!
//! A command-line interface for interacting with the WestFax API.

use clap::Parser;
use std::process::ExitCode;

use tabled::{Table, Tabled};
use westfax::cli::{Cli, Command};
use westfax::{ApiResponse, Fax, WestfaxClient};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let client = match WestfaxClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!(
                "Hint: Set WESTFAX_USERNAME, WESTFAX_PASSWORD and WESTFAX_PRODUCT_ID environment variables"
            );
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &WestfaxClient, cli: Cli) -> westfax::Result<()> {
    match cli.command {
        Command::Ping { message } => {
            let response = client.ping(&message).await?;
            warn_on_service_failure(response.success);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                println!("{}", response.result);
            }
        }
        Command::Describe { fax_id } => {
            let response = client.get_fax_description(&fax_id).await?;
            warn_on_service_failure(response.success);
            println!("{}", serde_json::to_string_pretty(&response.result)?);
        }
        Command::Document { fax_id, output } => {
            let response = client.get_fax_document(&fax_id).await?;
            warn_on_service_failure(response.success);
            handle_document(response, output.as_deref())?;
        }
        Command::Inbound { start_date } => {
            let response = client.get_inbound_fax_identifiers(&start_date).await?;
            warn_on_service_failure(response.success);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&response.result)?);
            } else {
                let rows: Vec<FaxRow> = response.iter().map(FaxRow::from).collect();
                println!("{}", Table::new(rows));
                println!("\n{} inbound faxes", response.len());
            }
        }
    }
    Ok(())
}

fn handle_document(response: ApiResponse<Fax>, output: Option<&str>) -> westfax::Result<()> {
    let fax = response.result;

    let Some(path) = output else {
        println!("{}", serde_json::to_string_pretty(&fax)?);
        return Ok(());
    };

    match fax.first_file() {
        Some(file) => {
            // The payload is written exactly as delivered: base64 text.
            std::fs::write(path, &file.file_contents)?;
            println!(
                "Wrote {} ({} bytes decoded, {})",
                path,
                file.content_length,
                file.content_type.as_deref().unwrap_or("unknown type"),
            );
        }
        None => {
            eprintln!("Fax '{}' carries no document payload", fax.id);
        }
    }
    Ok(())
}

fn warn_on_service_failure(success: bool) {
    if !success {
        eprintln!("Warning: service reported Success=false");
    }
}

// Table row type for non-JSON output

#[derive(Tabled)]
struct FaxRow {
    id: String,
    direction: String,
    date: String,
    pages: u32,
    status: String,
}

impl From<&Fax> for FaxRow {
    fn from(f: &Fax) -> Self {
        Self {
            id: f.id.clone(),
            direction: f
                .direction
                .map(|d| d.to_string())
                .unwrap_or_default(),
            date: f.date.map(|d| d.to_rfc3339()).unwrap_or_default(),
            pages: f.page_count,
            status: f.status.clone().unwrap_or_default(),
        }
    }
}
