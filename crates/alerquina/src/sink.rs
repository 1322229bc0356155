use std::time::Duration;

use reqwest::StatusCode;
use serde::Serialize;

use crate::error::Error;

const USERNAME: &str = "Alerquina";
const ICON_EMOJI: &str = ":alerquina-prs:";

/// Incoming-webhook payload, shaped the way Slack's Block Kit expects it.
#[derive(Debug, Serialize)]
pub struct SlackMessage {
    pub blocks: Vec<Block>,
    pub username: String,
    pub icon_emoji: String,
}

/// One unit of structured message content.
///
/// Slack rejects block objects carrying `"text": null` for some block types,
/// so an absent text object must drop the key from the serialized form
/// entirely.
#[derive(Debug, Serialize)]
pub struct Block {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextObject>,
}

#[derive(Debug, Serialize)]
pub struct TextObject {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl SlackMessage {
    /// The fixed notification shape: one mrkdwn section block posted under
    /// the Alerquina bot identity.
    pub fn notification(text: impl Into<String>) -> Self {
        SlackMessage {
            blocks: vec![Block {
                kind: "section".to_string(),
                text: Some(TextObject {
                    kind: "mrkdwn".to_string(),
                    text: text.into(),
                }),
            }],
            username: USERNAME.to_string(),
            icon_emoji: ICON_EMOJI.to_string(),
        }
    }
}

/// POST the message to the webhook. One attempt; anything but HTTP 200 is a
/// rejected delivery. The response body is drained on every path.
pub async fn post_message(
    webhook_url: &str,
    message: &SlackMessage,
    timeout: Option<Duration>,
) -> Result<(), Error> {
    let body = serde_json::to_string(message).map_err(Error::Serialization)?;

    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder.build().map_err(Error::Transmit)?;

    let response = client
        .post(webhook_url)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await
        .map_err(Error::Transmit)?;

    let status = response.status();
    let _ = response.bytes().await;

    if status != StatusCode::OK {
        return Err(Error::DeliveryRejected(status));
    }
    Ok(())
}
