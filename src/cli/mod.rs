//! Command-line interface.
//!
//! The probe has no subcommands: every run is a single check configured by
//! flags. See [`Cli`] for the full flag list.

pub mod args;

pub use args::Cli;
