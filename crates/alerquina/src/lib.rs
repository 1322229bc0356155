//! Alerquina posts a pull-request notification to a Slack incoming webhook.

pub mod cli;
pub mod config;
pub mod error;
pub mod identity;
pub mod message;
pub mod sink;
