use super::{DispatchError, Sent};
use crate::config::SmsGatewayConfig;

/// Client for the HTTP SMS gateway. The gateway accepts a JSON payload and
/// fans the message out to the carrier.
pub struct SmsClient {
    config: SmsGatewayConfig,
    client: reqwest::Client,
}

impl SmsClient {
    pub fn new(config: &SmsGatewayConfig) -> Self {
        Self {
            config: config.clone(),
            client: reqwest::Client::new(),
        }
    }

    pub async fn send(&self, to: &str, body: &str) -> Result<Sent, DispatchError> {
        let payload = serde_json::json!({
            "to": to,
            "from": self.config.sender_id,
            "body": body,
        });
        let res = self
            .client
            .post(&self.config.url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| DispatchError::Provider(format!("SMS gateway request failed: {}", e)))?;
        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(DispatchError::Provider(format!(
                "SMS gateway error {}: {}",
                status, text
            )));
        }
        Ok(Sent { message_id: None })
    }
}
