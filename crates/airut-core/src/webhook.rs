//! Webhook delivery of the composed notification.

use crate::errors::{AirutError, Result};
use crate::types::NotificationPayload;
use std::time::Duration;

/// Timeout for the webhook request.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// POST the payload to the webhook as a JSON body.
///
/// Fire-and-forget: a single request, no retries, no state. A failure is
/// reported to the caller and is the host's concern.
pub fn send_notification(url: &str, payload: &NotificationPayload) -> Result<()> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .user_agent(concat!("airut/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| AirutError::Delivery(format!("failed to build HTTP client: {e}")))?;

    let response = client
        .post(url)
        .header("Content-Type", "application/json")
        .json(payload)
        .send()
        .map_err(|e| AirutError::Delivery(format!("webhook request failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(AirutError::Delivery(format!(
            "webhook returned {status}: {}",
            body.trim()
        )));
    }

    Ok(())
}

/// Pretty-printed payload for dry runs.
pub fn render_notification(payload: &NotificationPayload) -> Result<String> {
    serde_json::to_string_pretty(payload)
        .map_err(|e| AirutError::Delivery(format!("failed to encode payload: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Fact, SectionBlock};

    fn sample_payload() -> NotificationPayload {
        NotificationPayload {
            summary: "Released 1.1.0 for airut".to_string(),
            theme_color: "2C5697".to_string(),
            activity_title: "title".to_string(),
            activity_subtitle: "https://github.com/bruits/airut".to_string(),
            activity_image: "https://example.com/logo.png".to_string(),
            facts: vec![Fact {
                name: "Version".to_string(),
                value: "1.1.0 (minor)".to_string(),
            }],
            sections: vec![SectionBlock {
                text: "## Features".to_string(),
            }],
        }
    }

    #[test]
    fn render_notification_pretty_prints_the_payload() {
        let rendered = render_notification(&sample_payload()).unwrap();
        assert!(rendered.starts_with("{\n"));
        assert!(rendered.contains("\"themeColor\": \"2C5697\""));
        assert!(rendered.contains("\"name\": \"Version\""));
    }

    #[test]
    fn send_notification_reports_unreachable_webhooks() {
        // Non-routable address: the request itself must fail, and the error
        // must surface as a delivery error rather than a panic or retry.
        let err = send_notification("http://127.0.0.1:1/webhook", &sample_payload()).unwrap_err();
        assert!(matches!(err, AirutError::Delivery(_)));
    }
}
