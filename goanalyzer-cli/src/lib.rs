//! Command line front end for goanalyzer.

pub mod config;
pub mod input;
pub mod output;
