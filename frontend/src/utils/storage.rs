use web_sys::{Storage, Window};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("No window object")]
    NoWindow,
    #[error("No sessionStorage")]
    Unavailable,
    #[error("Failed to {op} session item `{key}`")]
    Access { op: &'static str, key: String },
    #[error("Failed to serialize session: {0}")]
    Serialize(String),
}

pub fn window() -> Result<Window, StorageError> {
    web_sys::window().ok_or(StorageError::NoWindow)
}

pub fn session_storage() -> Result<Storage, StorageError> {
    window()?
        .session_storage()
        .map_err(|_| StorageError::Unavailable)?
        .ok_or(StorageError::Unavailable)
}
