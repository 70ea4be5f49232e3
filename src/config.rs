use anyhow::{Context, Result};
use std::net::{IpAddr, SocketAddr};

use crate::i18n::Locale;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: IpAddr,
    pub port: u16,

    // Localization
    pub default_locale: Locale,
    pub locale_cookie: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let default_locale =
            std::env::var("DEFAULT_LOCALE").unwrap_or_else(|_| "en".to_string());

        Ok(Self {
            // Server
            host: host
                .parse()
                .with_context(|| format!("HOST is not an IP address: '{}'", host))?,
            port: port
                .parse()
                .with_context(|| format!("PORT is not a valid port: '{}'", port))?,

            // Localization
            default_locale: Locale::from_code(&default_locale)
                .context("DEFAULT_LOCALE must be a supported locale")?,
            locale_cookie: std::env::var("LOCALE_COOKIE")
                .unwrap_or_else(|_| "next-i18next".to_string()),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 3000,
            default_locale: Locale::default_locale(),
            locale_cookie: "next-i18next".to_string(),
        }
    }
}
