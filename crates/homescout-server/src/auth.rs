//! Access gates: HTTP Basic auth for the admin surface, a shared-secret
//! header for the cron-triggered sitemap endpoint.

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::http::HeaderMap;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as B64;

use crate::error::Error;

pub const CRON_SECRET_HEADER: &str = "x-cron-secret";

/// Credentials accepted for the admin endpoints.
#[derive(Clone)]
pub struct AdminAuth {
  pub username:      String,
  /// PHC string produced by argon2, e.g. `$argon2id$v=19$…`
  pub password_hash: String,
}

/// Verify Basic-auth credentials against the configured admin account.
pub fn verify_admin(headers: &HeaderMap, auth: &AdminAuth) -> Result<(), Error> {
  let header_val = headers
    .get(axum::http::header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .ok_or(Error::Unauthorized)?;

  let encoded = header_val
    .strip_prefix("Basic ")
    .ok_or(Error::Unauthorized)?;

  let decoded = B64.decode(encoded).map_err(|_| Error::Unauthorized)?;
  let creds   = std::str::from_utf8(&decoded).map_err(|_| Error::Unauthorized)?;

  let (username, password) = creds.split_once(':').ok_or(Error::Unauthorized)?;

  if username != auth.username {
    return Err(Error::Unauthorized);
  }

  let parsed_hash = PasswordHash::new(&auth.password_hash)
    .map_err(|_| Error::Unauthorized)?;

  Argon2::default()
    .verify_password(password.as_bytes(), &parsed_hash)
    .map_err(|_| Error::Unauthorized)?;

  Ok(())
}

/// Verify the `x-cron-secret` header. An unset secret rejects everything
/// rather than opening the endpoint.
pub fn verify_cron(headers: &HeaderMap, secret: &str) -> Result<(), Error> {
  if secret.is_empty() {
    return Err(Error::Unauthorized);
  }
  let provided = headers
    .get(CRON_SECRET_HEADER)
    .and_then(|v| v.to_str().ok())
    .ok_or(Error::Unauthorized)?;
  if provided != secret {
    return Err(Error::Unauthorized);
  }
  Ok(())
}
