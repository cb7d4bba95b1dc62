use std::any::Any;
use std::env::vars;

use log::info;
use roster_states::State;
use serde::Deserialize;
use ustr::Ustr;

use crate::{CurrentUser, Session};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Where API requests go and how they are authorised.
///
/// Snapshotted into every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: Ustr,
    pub token: Option<String>,
}

impl BusinessConfig {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            api_base_url: Ustr::from(base_url.as_ref().trim_end_matches('/')),
            token: None,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// `{base}/api`, or the relative `/api` when no base is configured.
    pub fn api_url(&self) -> Ustr {
        if self.api_base_url.is_empty() {
            Ustr::from("/api")
        } else {
            Ustr::from(&format!("{}/api", self.api_base_url))
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl State for BusinessConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read environment: {0}")]
    Env(#[from] serde_env::Error),
    #[error("ROSTER_OPERATOR_NAME must be set")]
    MissingOperator,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    roster_api_base_url: Option<String>,
    roster_api_token: Option<String>,
    roster_operator_name: Option<String>,
    roster_operator_emp_no: Option<String>,
}

/// Start-up configuration of the desktop app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub api_token: Option<String>,
    pub operator: CurrentUser,
}

impl AppConfig {
    /// Read `ROSTER_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading configuration from environment variables");
        Self::from_vars(vars())
    }

    pub fn from_vars<I, S>(iter: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let raw: RawConfig = serde_env::from_iter(iter)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let RawConfig {
            roster_api_base_url,
            roster_api_token,
            roster_operator_name,
            roster_operator_emp_no,
        } = raw;

        let api_base_url = match roster_api_base_url.filter(|url| !url.trim().is_empty()) {
            Some(url) => {
                info!("Using provided ROSTER_API_BASE_URL: {url}");
                url
            }
            None => {
                info!("ROSTER_API_BASE_URL not set, defaulting to {DEFAULT_API_BASE_URL}");
                DEFAULT_API_BASE_URL.to_owned()
            }
        };

        let name = roster_operator_name
            .filter(|name| !name.trim().is_empty())
            .ok_or(ConfigError::MissingOperator)?;

        Ok(Self {
            api_base_url,
            api_token: roster_api_token.filter(|token| !token.is_empty()),
            operator: CurrentUser {
                name,
                emp_no: roster_operator_emp_no.unwrap_or_default(),
            },
        })
    }

    pub fn session(&self) -> Session {
        Session {
            current_user: self.operator.clone(),
            token: self.api_token.clone(),
        }
    }

    pub fn business_config(&self) -> BusinessConfig {
        BusinessConfig::new(&self.api_base_url).with_token(self.api_token.clone())
    }
}
