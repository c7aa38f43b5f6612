use std::str::FromStr;
use std::{env, fmt, fs};

use anyhow::{anyhow, Result};
use serde::Deserialize;

#[derive(Clone, Deserialize, Debug, PartialEq)]
pub enum ServiceMode {
    Product,
    Dev,
    Local,
    Test, //for testcase
}

impl FromStr for ServiceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "product" => Ok(ServiceMode::Product),
            "dev" => Ok(ServiceMode::Dev),
            "local" => Ok(ServiceMode::Local),
            "test" => Ok(ServiceMode::Test),
            _ => Err("Don't support this service mode".to_string()),
        }
    }
}

impl fmt::Display for ServiceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            ServiceMode::Product => "product",
            ServiceMode::Dev => "dev",
            ServiceMode::Local => "local",
            ServiceMode::Test => "test",
        };
        write!(f, "{}", description)
    }
}

#[derive(Deserialize, Debug)]
pub struct UserStoreConf {
    /// base uri of the object storage service
    pub endpoint: String,
    /// bucket holding one json record per user id
    pub bucket: String,
}

#[derive(Deserialize, Debug)]
pub struct SmsConf {
    pub account_sid: String,
    pub auth_token: String,
    /// sender number registered with the provider
    pub from: String,
}

///read config data for env
#[derive(Deserialize, Debug)]
pub struct EnvConf {
    /// dev or pro
    pub service_mode: ServiceMode,
    /// http service port
    pub api_port: usize,
    pub user_store: UserStoreConf,
    pub sms: SmsConf,
}

impl EnvConf {
    /// Reads the toml file named by the `CONFIG` environment variable.
    /// The result is handed to the server at construction, nothing here
    /// is process-global.
    pub fn load() -> Result<EnvConf> {
        let path = env::var_os("CONFIG").ok_or(anyhow!("CONFIG environment variable required"))?;
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(content.as_str())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_conf_file() {
        let raw = r#"
            service_mode = "Test"
            api_port = 8066

            [user_store]
            endpoint = "http://127.0.0.1:9000"
            bucket = "navi-users"

            [sms]
            account_sid = "AC00000000000000000000000000000000"
            auth_token = "secret"
            from = "+15005550006"
        "#;
        let conf: EnvConf = toml::from_str(raw).unwrap();
        assert_eq!(conf.service_mode, ServiceMode::Test);
        assert_eq!(conf.api_port, 8066);
        assert_eq!(conf.user_store.bucket, "navi-users");
        assert_eq!(conf.sms.from, "+15005550006");
    }

    #[test]
    fn mode_round_trip() {
        let mode: ServiceMode = "product".parse().unwrap();
        assert_eq!(mode, ServiceMode::Product);
        assert_eq!(mode.to_string(), "product");
        assert!("staging".parse::<ServiceMode>().is_err());
    }
}
