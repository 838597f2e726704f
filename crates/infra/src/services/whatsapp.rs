use super::{DispatchError, Sent};
use crate::config::WhatsappConfig;

// https://developers.facebook.com/docs/whatsapp/cloud-api/reference/messages
const GRAPH_API_BASE: &str = "https://graph.facebook.com/v17.0";

/// Client for the WhatsApp Business Cloud API.
pub struct WhatsappClient {
    config: WhatsappConfig,
    client: reqwest::Client,
}

impl WhatsappClient {
    pub fn new(config: &WhatsappConfig) -> Self {
        Self {
            config: config.clone(),
            client: reqwest::Client::new(),
        }
    }

    pub async fn send(&self, recipient: &str, body: &str) -> Result<Sent, DispatchError> {
        // Recipients are addressed as whatsapp:<E164>; the API wants the
        // bare phone number.
        let to = recipient.strip_prefix("whatsapp:").unwrap_or(recipient);
        let url = format!(
            "{}/{}/messages",
            GRAPH_API_BASE, self.config.phone_number_id
        );
        let payload = serde_json::json!({
            "messaging_product": "whatsapp",
            "recipient_type": "individual",
            "to": to,
            "type": "text",
            "text": {
                "preview_url": false,
                "body": body
            }
        });
        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.config.access_token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| DispatchError::Provider(format!("WhatsApp API request failed: {}", e)))?;
        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(DispatchError::Provider(format!(
                "WhatsApp API error {}: {}",
                status, text
            )));
        }
        let value: serde_json::Value = res
            .json()
            .await
            .map_err(|e| DispatchError::Provider(format!("Invalid WhatsApp response: {}", e)))?;
        let message_id = value["messages"][0]["id"].as_str().map(|s| s.to_string());
        Ok(Sent { message_id })
    }
}
