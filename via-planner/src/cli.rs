//! Command-line interface.
//!
//! ```text
//! via p <origin> <destination> [time] [date]
//! via p <origin> <destination> -t <time> -d <date>
//! ```

use clap::{Parser, Subcommand};

use crate::planner::PlanRequest;

/// SuperVia trip planner
#[derive(Debug, Parser)]
#[command(name = "via")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Plan a trip between two stations
    #[command(name = "p", alias = "plan")]
    Plan {
        /// Origin station (part of its name is enough)
        origin: String,

        /// Destination station (part of its name is enough)
        destination: String,

        /// Trip time: HH:MM or a bare hour
        #[arg(value_name = "TIME")]
        time_pos: Option<String>,

        /// Trip day: day[/month[/year]]
        #[arg(value_name = "DATE")]
        date_pos: Option<String>,

        /// Trip time (hora da viagem); wins over the positional time
        #[arg(short = 't', long = "time")]
        time: Option<String>,

        /// Trip day (dia da viagem); wins over the positional date
        #[arg(short = 'd', long = "date")]
        date: Option<String>,
    },
}

impl Commands {
    /// Build the plan request, preferring flags over positionals.
    pub fn plan_request(&self) -> PlanRequest {
        match self {
            Commands::Plan {
                origin,
                destination,
                time_pos,
                date_pos,
                time,
                date,
            } => PlanRequest {
                origin: origin.clone(),
                destination: destination.clone(),
                date: date.clone().or_else(|| date_pos.clone()),
                time: time.clone().or_else(|| time_pos.clone()),
            },
        }
    }
}
