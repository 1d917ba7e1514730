//! Command implementations for the verification CLI.
//!
//! Each subcommand validates its input with the same rules as the web app
//! before any request is sent, then talks to the backend through
//! `avwx_core::native`.

use avwx_core::client::Client;
use avwx_core::config::{ApiConfig, API_BASE_ENV, DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECS};
use avwx_core::native::{native_client, ReqwestTransport};
use clap::{Args, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

pub mod preview;
pub mod table;
pub mod verify;
pub mod winds;

/// Backend location, shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct ApiArgs {
    /// Backend base URL
    #[arg(long, env = API_BASE_ENV, default_value = DEFAULT_API_BASE, global = true)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout_secs: u64,
}

impl ApiArgs {
    pub fn client(&self) -> anyhow::Result<Client<ReqwestTransport>> {
        let config = ApiConfig::new(self.base_url.as_str());
        Ok(native_client(config, Duration::from_secs(self.timeout_secs))?)
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Print METAR observations for a station and time range
    Metar {
        /// Four-letter ICAO code
        #[arg(long)]
        icao: String,

        /// Range start, "YYYY-MM-DD HH:MM"
        #[arg(long)]
        start: String,

        /// Range end, "YYYY-MM-DD HH:MM"
        #[arg(long)]
        end: String,
    },

    /// Print the upper air sounding for a station, date and hour
    Sounding {
        /// Five-digit station ID
        #[arg(long)]
        station: String,

        /// Sounding date, "YYYY-MM-DD"
        #[arg(long)]
        date: String,

        /// Sounding hour, 00-23
        #[arg(long)]
        hour: String,
    },

    /// Verify a take-off forecast against METAR observations
    VerifySurface {
        /// Four-letter ICAO code
        #[arg(long)]
        icao: String,

        /// Forecast file named DDMMYYYY.txt
        #[arg(long)]
        forecast: PathBuf,

        /// Observation file (instead of --start/--end)
        #[arg(long, conflicts_with_all = ["start", "end"])]
        observation: Option<PathBuf>,

        /// Range start, "YYYY-MM-DD HH:MM"
        #[arg(long, requires = "end")]
        start: Option<String>,

        /// Range end, "YYYY-MM-DD HH:MM"
        #[arg(long, requires = "start")]
        end: Option<String>,
    },

    /// Verify an upper air PDF forecast against a sounding
    VerifyUpperAir {
        /// Five-digit station ID
        #[arg(long)]
        station: String,

        /// Forecast PDF
        #[arg(long)]
        forecast: PathBuf,

        /// Observation CSV (instead of --date/--hour)
        #[arg(long, conflicts_with_all = ["date", "hour"])]
        observation: Option<PathBuf>,

        /// Sounding date, "YYYY-MM-DD"
        #[arg(long, requires = "hour")]
        date: Option<String>,

        /// Sounding hour, 00-23
        #[arg(long, requires = "date")]
        hour: Option<String>,
    },

    /// Extract the upper winds table from text already pulled out of a forecast PDF
    Winds {
        /// Plain text file
        #[arg(long)]
        text: PathBuf,
    },
}

pub async fn run(command: Command, api: ApiArgs) -> anyhow::Result<()> {
    match command {
        Command::Metar { icao, start, end } => {
            preview::run_metar(&api, &icao, &start, &end).await
        }
        Command::Sounding {
            station,
            date,
            hour,
        } => preview::run_sounding(&api, &station, &date, &hour).await,
        Command::VerifySurface {
            icao,
            forecast,
            observation,
            start,
            end,
        } => {
            let range = start.zip(end);
            verify::run_surface(&api, &icao, &forecast, observation.as_deref(), range).await
        }
        Command::VerifyUpperAir {
            station,
            forecast,
            observation,
            date,
            hour,
        } => {
            let time = date.zip(hour);
            verify::run_upper_air(&api, &station, &forecast, observation.as_deref(), time).await
        }
        Command::Winds { text } => winds::run_winds(&text).await,
    }
}
