mod cli;
mod tui;

pub(crate) use cli::{as_cli, Cli};
pub(crate) use tui::as_tui;


#[cfg(test)]
mod cli_tests;
