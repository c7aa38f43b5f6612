//! outbound sms delivery

mod twilio;

pub use twilio::TwilioSender;

use anyhow::Result;
use async_trait::async_trait;

/// One-shot delivery to a single destination, awaited per call.
#[async_trait]
pub trait SmsSender: Send + Sync {
    async fn send(&self, phone: &str, msg: &str) -> Result<()>;
}
