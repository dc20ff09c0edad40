//! SuperVia trip planner.
//!
//! A command-line tool that answers: "when is the next train from here to
//! there?" for the Rio de Janeiro commuter rail network. Station names may be
//! typed partially, and dates and times loosely.

pub mod cache;
pub mod cli;
pub mod config;
pub mod domain;
pub mod planner;
pub mod render;
pub mod stations;
pub mod supervia;
pub mod timing;
