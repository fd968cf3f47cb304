use std::fmt;

#[derive(Debug, Clone)]
pub enum PhishdrillError {
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    Validation(String),
    NotFound(String),
    Serialization(String),
    TokenDecode(String),
}

impl PhishdrillError {
    pub fn code(&self) -> &'static str {
        match self {
            PhishdrillError::DatabaseConfig(_) => "E001",
            PhishdrillError::DatabaseConnection(_) => "E002",
            PhishdrillError::DatabaseOperation(_) => "E003",
            PhishdrillError::Validation(_) => "E004",
            PhishdrillError::NotFound(_) => "E005",
            PhishdrillError::Serialization(_) => "E006",
            PhishdrillError::TokenDecode(_) => "E007",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            PhishdrillError::DatabaseConfig(_) => "Database Configuration Error",
            PhishdrillError::DatabaseConnection(_) => "Database Connection Error",
            PhishdrillError::DatabaseOperation(_) => "Database Operation Error",
            PhishdrillError::Validation(_) => "Validation Error",
            PhishdrillError::NotFound(_) => "Resource Not Found",
            PhishdrillError::Serialization(_) => "Serialization Error",
            PhishdrillError::TokenDecode(_) => "Tracking Token Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            PhishdrillError::DatabaseConfig(msg) => msg,
            PhishdrillError::DatabaseConnection(msg) => msg,
            PhishdrillError::DatabaseOperation(msg) => msg,
            PhishdrillError::Validation(msg) => msg,
            PhishdrillError::NotFound(msg) => msg,
            PhishdrillError::Serialization(msg) => msg,
            PhishdrillError::TokenDecode(msg) => msg,
        }
    }

    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for PhishdrillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for PhishdrillError {}

// Convenience constructors
impl PhishdrillError {
    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        PhishdrillError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        PhishdrillError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        PhishdrillError::DatabaseOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        PhishdrillError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        PhishdrillError::NotFound(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        PhishdrillError::Serialization(msg.into())
    }

    pub fn token_decode<T: Into<String>>(msg: T) -> Self {
        PhishdrillError::TokenDecode(msg.into())
    }
}

impl From<sea_orm::DbErr> for PhishdrillError {
    fn from(err: sea_orm::DbErr) -> Self {
        PhishdrillError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for PhishdrillError {
    fn from(err: serde_json::Error) -> Self {
        PhishdrillError::Serialization(err.to_string())
    }
}

impl From<base64::DecodeError> for PhishdrillError {
    fn from(err: base64::DecodeError) -> Self {
        PhishdrillError::TokenDecode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PhishdrillError>;
