use crate::adapters::http::DEFAULT_BASE_URL;
use crate::utils::error::{FrontError, Result};
use crate::utils::validation::{validate_base_url, validate_cookie_path, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

// 十年
const MAX_COOKIE_AGE_HOURS: u64 = 24 * 365 * 10;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontConfig {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub review: ReviewConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub cookie_path: String,
    pub cookie_max_age_hours: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_path: ".hbnb/cookie".to_string(),
            cookie_max_age_hours: 24,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    pub redirect_delay_ms: u64,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            redirect_delay_ms: 1500,
        }
    }
}

impl FrontConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FrontError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 檔案不存在時使用預設值
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(
                "Config file {} not found, using defaults",
                path.as_ref().display()
            );
            Ok(Self::default())
        }
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${HBNB_API_URL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FrontError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_seconds)
    }

    pub fn cookie_max_age(&self) -> chrono::Duration {
        let hours = self.session.cookie_max_age_hours.min(MAX_COOKIE_AGE_HOURS) as i64;
        chrono::Duration::hours(hours)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.review.redirect_delay_ms)
    }
}

impl Validate for FrontConfig {
    fn validate(&self) -> Result<()> {
        validate_base_url("api.base_url", &self.api.base_url)?;
        validate_range("api.timeout_seconds", self.api.timeout_seconds, 1, u64::MAX)?;
        validate_cookie_path("session.cookie_path", &self.session.cookie_path)?;
        validate_range(
            "session.cookie_max_age_hours",
            self.session.cookie_max_age_hours,
            1,
            MAX_COOKIE_AGE_HOURS,
        )?;
        Ok(())
    }
}
