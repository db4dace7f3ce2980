//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the westfax binary.

use clap::{Parser, Subcommand};

/// WestFax API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "westfax", about = "WestFax API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Round-trip an echo string off the service.
    Ping {
        /// The string to echo.
        message: String,
    },

    /// Fetch the metadata record for one fax.
    Describe {
        /// The fax identifier.
        fax_id: String,
    },

    /// Fetch one fax with its document payload.
    Document {
        /// The fax identifier.
        fax_id: String,

        /// Write the document payload (base64 text, as delivered) to this
        /// file instead of printing the record.
        #[arg(long)]
        output: Option<String>,
    },

    /// List inbound faxes received since a start date.
    Inbound {
        /// Start date, formatted the way the service expects.
        start_date: String,
    },
}
