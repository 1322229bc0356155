use clap::Parser;
use std::path::PathBuf;

/// Alerquina – posts a pull-request notification to Slack
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pull request URL
    pub pr_url: String,

    /// Pull request title
    pub pr_title: String,

    /// Pull request number or label, shown as trailing display text
    pub pr_number: String,

    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
