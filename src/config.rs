use crate::errors::{ThumbError, ThumbResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const PAGE_TIMEOUT_SECS: u64 = 10;
/// Responses at or under this size are the host's "no such image" placeholder.
const MIN_IMAGE_BYTES: u64 = 1000;
const DESCRIPTION_MAX_CHARS: usize = 100;
const USER_AGENT_DEFAULT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:124.0) Gecko/20100101 Firefox/124.0";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Timeout for the watch page request, in seconds
    #[serde(default = "page_timeout_secs")]
    pub page_timeout_secs: u64,

    /// Declared content length a max-res thumbnail must exceed
    #[serde(default = "min_image_bytes")]
    pub min_image_bytes: u64,

    /// Descriptions longer than this are cut in batch reports
    #[serde(default = "description_max_chars")]
    pub description_max_chars: usize,

    #[serde(default = "user_agent")]
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_timeout_secs: PAGE_TIMEOUT_SECS,
            min_image_bytes: MIN_IMAGE_BYTES,
            description_max_chars: DESCRIPTION_MAX_CHARS,
            user_agent: USER_AGENT_DEFAULT.to_string(),
        }
    }
}

fn page_timeout_secs() -> u64 {
    PAGE_TIMEOUT_SECS
}

fn min_image_bytes() -> u64 {
    MIN_IMAGE_BYTES
}

fn description_max_chars() -> usize {
    DESCRIPTION_MAX_CHARS
}

fn user_agent() -> String {
    USER_AGENT_DEFAULT.to_string()
}

impl Config {
    pub fn page_timeout(&self) -> Duration {
        Duration::from_secs(self.page_timeout_secs)
    }

    fn validate(&self) -> ThumbResult<()> {
        if self.page_timeout_secs == 0 {
            return Err(ThumbError::config("page_timeout_secs must be greater than 0"));
        }

        // room for at least one character plus the ellipsis
        if self.description_max_chars < 4 {
            return Err(ThumbError::config(format!(
                "description_max_chars must be at least 4, got {}",
                self.description_max_chars
            )));
        }

        Ok(())
    }

    pub fn from_yaml(config_str: &str) -> ThumbResult<Self> {
        let config: Self = serde_yml::from_str(config_str)
            .map_err(|err| ThumbError::config(format!("config is malformed: {err}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> ThumbResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let config_str = std::fs::read_to_string(path).map_err(|err| {
            ThumbError::config(format!("could not read {}: {err}", path.display()))
        })?;

        let config = Self::from_yaml(&config_str)?;
        log::debug!("loaded config from {}: {config:?}", path.display());

        Ok(config)
    }
}
