//! Display formatting for terminal output
//!
//! Renders the static catalogues and goal plans shown by the CLI
//! subcommands as `tabled` tables.

pub mod catalog;
pub mod goal;

pub use catalog::{format_route_list, format_tutorial, format_voice_commands};
pub use goal::{format_goal_plan, GoalPlan};

use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Shared table look for every listing
pub(crate) fn render_table<T: Tabled>(rows: impl IntoIterator<Item = T>) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}
