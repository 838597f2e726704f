use super::{DispatchError, IDispatcher, Sent};
use lexbase_reminders_domain::Channel;
use std::collections::HashSet;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct SentMessage {
    pub channel: Channel,
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// Dispatcher double that records every send. Tests can mark channels as
/// unconfigured or make individual recipients fail.
pub struct InMemoryDispatcher {
    sent: Mutex<Vec<SentMessage>>,
    unavailable_channels: Mutex<HashSet<Channel>>,
    failing_recipients: Mutex<HashSet<String>>,
}

impl InMemoryDispatcher {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            unavailable_channels: Mutex::new(HashSet::new()),
            failing_recipients: Mutex::new(HashSet::new()),
        }
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_on(&self, channel: Channel) -> Vec<SentMessage> {
        self.sent()
            .into_iter()
            .filter(|m| m.channel == channel)
            .collect()
    }

    pub fn make_channel_unavailable(&self, channel: Channel) {
        self.unavailable_channels.lock().unwrap().insert(channel);
    }

    pub fn fail_recipient(&self, recipient: &str) {
        self.failing_recipients
            .lock()
            .unwrap()
            .insert(recipient.to_string());
    }
}

#[async_trait::async_trait]
impl IDispatcher for InMemoryDispatcher {
    async fn send(
        &self,
        channel: Channel,
        recipient: &str,
        subject: &str,
        body: &str,
    ) -> Result<Sent, DispatchError> {
        if self.unavailable_channels.lock().unwrap().contains(&channel) {
            return Err(DispatchError::ChannelUnavailable(channel));
        }
        if self.failing_recipients.lock().unwrap().contains(recipient) {
            return Err(DispatchError::Provider(format!(
                "Simulated provider outage for recipient: {}",
                recipient
            )));
        }
        self.sent.lock().unwrap().push(SentMessage {
            channel,
            recipient: recipient.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(Sent { message_id: None })
    }
}
