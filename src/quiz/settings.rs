use anyhow::{anyhow, Context, Result};
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use crate::quiz::category::{CategoryId, BOOKS};

// Upper bound enforced by the question bank.
const MAX_AMOUNT: u32 = 50;

#[derive(Clone, Debug)]
pub struct Settings {
    pub api_url: String,
    pub amount: u32,
    pub default_category: CategoryId,
    pub request_timeout: Duration,
    pub tick_interval: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api_url: "https://opentdb.com/api.php".to_owned(),
            amount: 5,
            default_category: BOOKS,
            request_timeout: Duration::from_secs(10),
            tick_interval: Duration::from_millis(100),
        }
    }
}

fn env_override<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| anyhow!("Invalid value {:?} for {}: {}", value, name, e)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Could not read {}", name)),
    }
}

impl Settings {
    /// Default settings, overridden by `QUIZZICAL_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let mut settings = Settings::default();
        if let Some(api_url) = env_override::<String>("QUIZZICAL_API_URL")? {
            settings.api_url = api_url;
        }
        if let Some(amount) = env_override("QUIZZICAL_AMOUNT")? {
            settings.amount = amount;
        }
        if let Some(category) = env_override("QUIZZICAL_CATEGORY")? {
            settings.default_category = category;
        }
        if let Some(seconds) = env_override("QUIZZICAL_TIMEOUT_SECS")? {
            settings.request_timeout = Duration::from_secs(seconds);
        }
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.amount == 0 || self.amount > MAX_AMOUNT {
            return Err(anyhow!(
                "Question amount must be between 1 and {}, got {}",
                MAX_AMOUNT,
                self.amount
            ));
        }
        if self.api_url.trim().is_empty() {
            return Err(anyhow!("Question bank url cannot be blank"));
        }
        Ok(())
    }
}
