use thiserror::Error;

/// 後端 API 呼叫的失敗類型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Invalid credentials: {message}")]
    InvalidCredentials { message: String },
}

impl ApiError {
    pub fn message(&self) -> &str {
        match self {
            ApiError::Network { message }
            | ApiError::Http { message, .. }
            | ApiError::InvalidCredentials { message } => message,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ApiError::Http {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => ApiError::Network {
                message: err.to_string(),
            },
        }
    }
}

#[derive(Error, Debug)]
pub enum FrontError {
    #[error("API request failed: {0}")]
    Api(#[from] ApiError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Not found: {message}")]
    NotFoundError { message: String },
}

impl FrontError {
    /// 給使用者看的訊息 (alert / stderr)
    pub fn user_friendly_message(&self) -> String {
        match self {
            FrontError::Api(ApiError::Network { .. }) => {
                "Network error - please try again".to_string()
            }
            FrontError::Api(ApiError::InvalidCredentials { .. }) => {
                "Wrong email or password".to_string()
            }
            FrontError::Api(err) => err.message().to_string(),
            FrontError::IoError(e) => format!("File access failed: {}", e),
            FrontError::SerializationError(_) => "Unexpected response format".to_string(),
            FrontError::TomlParse(e) => format!("Config file is not valid TOML: {}", e),
            FrontError::ConfigError { message } => message.clone(),
            FrontError::InvalidConfigValueError { field, reason, .. } => {
                format!("{}: {}", field, reason)
            }
            FrontError::ValidationError { message } => message.clone(),
            FrontError::NotFoundError { message } => message.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FrontError>;
