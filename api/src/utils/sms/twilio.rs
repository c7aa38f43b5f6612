//! 对接 twilio.com 短信发送服务

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use common::env::SmsConf;

use super::SmsSender;

const API_BASE: &str = "https://api.twilio.com/2010-04-01";

pub struct TwilioSender {
    client: reqwest::Client,
    account_sid: String,
    auth_token: String,
    from: String,
}

impl TwilioSender {
    pub fn new(conf: &SmsConf) -> Self {
        TwilioSender {
            client: reqwest::Client::new(),
            account_sid: conf.account_sid.clone(),
            auth_token: conf.auth_token.clone(),
            from: conf.from.clone(),
        }
    }
}

#[async_trait]
impl SmsSender for TwilioSender {
    async fn send(&self, phone: &str, msg: &str) -> Result<()> {
        let url = format!("{}/Accounts/{}/Messages.json", API_BASE, self.account_sid);
        let res = self
            .client
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[("To", phone), ("From", self.from.as_str()), ("Body", msg)])
            .send()
            .await?;
        if !res.status().is_success() {
            let status = res.status();
            let detail = res.text().await.unwrap_or_default();
            return Err(anyhow!("delivery refused: {} {}", status, detail));
        }
        Ok(())
    }
}
