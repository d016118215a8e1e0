use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LectureError {
    #[error("Invalid vehicle spec '{input}': {reason}")]
    InvalidFormat { input: String, reason: String },

    #[error("Invalid year in vehicle spec '{input}': {source}")]
    InvalidYear {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Deposit amount must be positive, got {amount}")]
    InvalidAmount { amount: i64 },

    #[error("Deposit of {amount} would overflow balance {balance}")]
    BalanceOverflow { balance: i64, amount: i64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl LectureError {
    /// 是否為輸入格式錯誤 (使用者可修正)
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            LectureError::InvalidFormat { .. } | LectureError::InvalidYear { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, LectureError>;
