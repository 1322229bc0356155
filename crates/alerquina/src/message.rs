use crate::config::Config;

/// Build the mrkdwn body announcing a newly opened pull request.
///
/// Mention tokens wrap the configured identifiers verbatim (`<@id>`); the PR
/// number is appended to the linked title as plain trailing text. The
/// identifiers are not validated against real Slack accounts, so a bad config
/// yields a message that renders without resolving the mentions.
pub fn format_pr_message(config: &Config, pr_url: &str, pr_title: &str, pr_number: &str) -> String {
    let author = format!("<@{}>", config.slack_user_id);
    let approvers = format!("<@{}>", config.group_approvers);
    let title_with_link = format!("<{pr_url}|{pr_title}> {pr_number}");

    format!(
        ":rocket: *New Pull Request Created - * \n\n\
         \t*👤 Author:* {author}\n\
         \t*🏷️ Title:* {title_with_link}\n\
         \t*👥 Approvers:* {approvers}\n\t"
    )
}
