use std::time::Duration;

use clap::error::ErrorKind;
use clap::Parser;
use tokio::runtime::Runtime;

use alerquina::cli::Cli;
use alerquina::config::Config;
use alerquina::message::format_pr_message;
use alerquina::sink::{post_message, SlackMessage};

fn main() -> anyhow::Result<()> {
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
            err.exit();
        }
        // Missing or malformed arguments exit 1, matching every other failure.
        let _ = err.print();
        std::process::exit(1);
    });

    let rt = Runtime::new()?;
    rt.block_on(async {
        let config = Config::load(cli.config.clone())?;

        let text = format_pr_message(&config, &cli.pr_url, &cli.pr_title, &cli.pr_number);
        let message = SlackMessage::notification(text);
        let timeout = config.timeout_secs.map(Duration::from_secs);
        post_message(&config.webhook_url, &message, timeout).await?;

        println!("Slack notification delivered.");
        Ok(())
    })
}
