use crate::api::{Credentials, LoginError};

/// Only emptiness is checked; the identifier need not look like an email.
pub fn validate_credentials(credentials: &Credentials) -> Result<(), LoginError> {
    if credentials.identifier.is_empty() || credentials.secret.is_empty() {
        return Err(LoginError::MissingCredentials);
    }
    Ok(())
}
