use reqwest::StatusCode;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Identifier/secret pair typed into the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub identifier: String,
    pub secret: String,
}

impl Credentials {
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }
}

/// Wire body for `POST /users/login`. The server names the identifier `email`
/// even though any identifier is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl From<&Credentials> for LoginRequest {
    fn from(credentials: &Credentials) -> Self {
        Self {
            email: credentials.identifier.clone(),
            password: credentials.secret.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Faculty,
    Student,
    Unknown(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "Admin",
            Role::Faculty => "Faculty",
            Role::Student => "Student",
            Role::Unknown(raw) => raw,
        }
    }

    fn is_absent(&self) -> bool {
        matches!(self, Role::Unknown(raw) if raw.is_empty())
    }

    /// Accepts any JSON value so a malformed tag still counts as a successful
    /// login that simply has no dashboard.
    fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(raw) => Role::from(raw),
            Value::Null => Role::default(),
            other => Role::Unknown(other.to_string()),
        })
    }
}

/// An absent role tag.
impl Default for Role {
    fn default() -> Self {
        Role::Unknown(String::new())
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Admin" => Role::Admin,
            "Faculty" => Role::Faculty,
            "Student" => Role::Student,
            _ => Role::Unknown(raw),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Successful login response. Everything besides `role` is kept verbatim so
/// the stored session matches what the server sent. A missing or non-string
/// `role` parses as [`Role::Unknown`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResult {
    #[serde(
        default,
        deserialize_with = "Role::deserialize_lenient",
        skip_serializing_if = "Role::is_absent"
    )]
    pub role: Role,
    #[serde(flatten)]
    pub session: Map<String, Value>,
}

impl AuthResult {
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.session.get(key)
    }

    pub fn display_name(&self) -> Option<String> {
        ["name", "fullName", "full_name", "username", "email"]
            .iter()
            .find_map(|key| self.field(key).and_then(Value::as_str))
            .filter(|name| !name.trim().is_empty())
            .map(str::to_string)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Please fill in both fields.")]
    MissingCredentials,
    #[error("User not found. Please try again.")]
    UserNotFound,
    #[error("Incorrect password. Please try again.")]
    IncorrectPassword,
    #[error("Login failed. Please try again.")]
    Failed { detail: String },
    #[error("A login request is already in progress.")]
    InFlight,
}

impl LoginError {
    pub fn failed(detail: impl Into<String>) -> Self {
        Self::Failed {
            detail: detail.into(),
        }
    }

    /// Maps a non-200 response status onto the user-facing taxonomy.
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::NOT_FOUND => Self::UserNotFound,
            StatusCode::BAD_REQUEST => Self::IncorrectPassword,
            other => Self::failed(format!("Unexpected status {}", other)),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingCredentials => "VALIDATION_ERROR",
            Self::UserNotFound => "NOT_FOUND",
            Self::IncorrectPassword => "BAD_CREDENTIALS",
            Self::Failed { .. } => "REQUEST_FAILED",
            Self::InFlight => "IN_FLIGHT",
        }
    }
}
