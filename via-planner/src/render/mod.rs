//! Text rendering of plans.
//!
//! Layout, for each traject and trip option:
//!
//! ```text
//! Trajeto 1
//!
//! > Opção 1
//! 10:02 - Central do Brasil
//!           |
//!        Deodoro
//!           |
//! 11:20 - Santa Cruz
//! ```
//!
//! The `|` connectors are painted with the leg's extension color.

mod palette;

use crate::domain::{Itinerary, Leg, TripOption};
use crate::planner::PlanOutcome;

pub use palette::{BOLD, Palette};

/// Width of the departure column: `HH:MM - `.
const TIME_COLUMN: usize = 7;

/// Leading `HH:MM` of a service timestamp such as `14:32:00`.
fn clock(timestamp: &str) -> &str {
    timestamp.get(..5).unwrap_or(timestamp)
}

/// Render the header and itinerary of a plan.
pub fn render_plan(outcome: &PlanOutcome, palette: &Palette) -> String {
    let when = outcome.description.clone().unwrap_or_else(|| {
        format!("{} {}", outcome.request.date, outcome.request.time)
    });
    let mut out = format!("planejando para {when}\n\n");
    out.push_str(&render_itinerary(&outcome.itinerary, palette));
    out
}

/// Render every traject of an itinerary.
pub fn render_itinerary(itinerary: &Itinerary, palette: &Palette) -> String {
    let mut out = String::new();
    for (i, traject) in itinerary.trajects.iter().enumerate() {
        out.push_str(&format!("{} {}\n\n", palette.paint("Trajeto", BOLD), i + 1));

        for (j, option) in traject.options.iter().enumerate() {
            out.push_str(&format!("> Opção {}\n", j + 1));
            render_option(&mut out, option, palette);
        }
    }
    out
}

fn render_option(out: &mut String, option: &TripOption, palette: &Palette) {
    let Some(last) = option.last() else {
        return;
    };

    for (k, leg) in option.legs.iter().enumerate() {
        render_leg(out, leg, k == 0, palette);
    }

    out.push_str(&format!(
        "{} - {}\n\n\n",
        clock(&last.arrival),
        palette.paint(&last.dest_name, BOLD)
    ));
}

fn render_leg(out: &mut String, leg: &Leg, first: bool, palette: &Palette) {
    if first && leg.departure.len() > 5 {
        out.push_str(&format!("{} - ", clock(&leg.departure)));
    } else {
        out.push_str(&" ".repeat(TIME_COLUMN));
    }
    out.push_str(&palette.paint(&leg.origin_name, BOLD));
    out.push('\n');
    out.push_str(&palette.paint("          |", &leg.extension_id));
    out.push('\n');
}
