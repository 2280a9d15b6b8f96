use std::net::{Ipv4Addr, SocketAddr};

use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Deserializer, Serialize};

use super::logging::LoggingConfig;
use crate::error::StartupError;

/// Port used when `PORT` is absent or empty.
pub const DEFAULT_PORT: u16 = 3000;

/// Main config for v1.0.0: the listening port plus logging settings.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ConfigV1 {
    #[serde(deserialize_with = "deserialize_port")]
    pub port: u16,
    pub logging: LoggingConfig,
}

impl Default for ConfigV1 {
    fn default() -> Self {
        ConfigV1 {
            port: DEFAULT_PORT,
            logging: LoggingConfig::default(),
        }
    }
}

impl ConfigV1 {
    /// The listening address: every interface on the configured port.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

/// Builds the layered configuration source.
///
/// Defaults come first, then `PORT`, then `LOG_LEVEL` / `LOG_FORMAT`
/// mapped onto the `logging` section.
pub fn figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(ConfigV1::default()))
        .merge(Env::raw().only(&["PORT"]))
        .merge(
            Env::prefixed("LOG_")
                .map(|key| format!("logging.{}", key.as_str().to_ascii_lowercase()).into()),
        )
}

/// Load config from the process environment.
pub fn load_config() -> Result<ConfigV1, StartupError> {
    Ok(figment().extract::<ConfigV1>()?)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PortValue {
    Number(u64),
    Text(String),
}

/// Accepts a numeric port or a string holding one; an empty string means "unset".
fn deserialize_port<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match PortValue::deserialize(deserializer)? {
        PortValue::Number(n) => u16::try_from(n)
            .map_err(|_| D::Error::custom(format!("port {} is out of range", n))),
        PortValue::Text(s) if s.trim().is_empty() => Ok(DEFAULT_PORT),
        PortValue::Text(s) => s
            .trim()
            .parse::<u16>()
            .map_err(|_| D::Error::custom(format!("invalid port '{}'", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_to_port_3000() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            let config: ConfigV1 = figment().extract()?;
            assert_eq!(config.port, 3000);
            assert_eq!(config.logging, LoggingConfig::default());
            Ok(())
        });
    }

    #[test]
    fn port_env_overrides_default() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("PORT", "8080");
            let config: ConfigV1 = figment().extract()?;
            assert_eq!(config.port, 8080);
            assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
            Ok(())
        });
    }

    #[test]
    fn empty_port_falls_back_to_default() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("PORT", "");
            let config: ConfigV1 = figment().extract()?;
            assert_eq!(config.port, DEFAULT_PORT);
            Ok(())
        });
    }

    #[test]
    fn rejects_invalid_port() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("PORT", "not-a-port");
            assert!(figment().extract::<ConfigV1>().is_err());

            jail.set_env("PORT", "70000");
            assert!(figment().extract::<ConfigV1>().is_err());
            Ok(())
        });
    }

    #[test]
    fn log_env_maps_onto_logging_section() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("LOG_LEVEL", "debug");
            jail.set_env("LOG_FORMAT", "json");
            let config: ConfigV1 = figment().extract()?;
            assert_eq!(config.logging.level, "debug");
            assert_eq!(config.logging.format, "json");
            assert_eq!(config.port, DEFAULT_PORT);
            Ok(())
        });
    }
}
