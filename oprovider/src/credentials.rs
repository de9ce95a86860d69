//! Account credentials and the sources they are read from.
//!
//! ```rust
//! use oprovider::{CredentialSource, StaticCredentialSource};
//!
//! let source = StaticCredentialSource::new()
//!     .with_account_id("shopper@example.com")
//!     .with_secret("hunter2");
//! let credentials = source.read().expect("both values are set");
//!
//! assert_eq!(credentials.account_id, "shopper@example.com");
//! assert_eq!(format!("{:?}", credentials.secret), "[REDACTED]");
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

pub const ACCOUNT_ID_VAR: &str = "AMAZON_USERNAME";
pub const SECRET_VAR: &str = "AMAZON_PASSWORD";
pub const OTP_SEED_VAR: &str = "AMAZON_OTP_SECRET";

#[derive(PartialEq, Eq)]
pub struct SecretString {
    value: String,
}

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn expose(&self) -> &str {
        self.value.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        // SAFETY: zero bytes are valid UTF-8, so the string stays well formed.
        unsafe {
            self.value.as_mut_vec().fill(0);
        }
    }
}

pub struct Credentials {
    pub account_id: String,
    pub secret: SecretString,
    pub otp_seed: Option<SecretString>,
}

impl Credentials {
    /// Validates raw values, treating empty strings the same as unset ones.
    pub fn from_parts(
        account_id: Option<String>,
        secret: Option<String>,
        otp_seed: Option<String>,
    ) -> Result<Self, MissingCredentials> {
        let account_id = account_id.filter(|value| !value.is_empty());
        let secret = secret.filter(|value| !value.is_empty()).map(SecretString::new);

        match (account_id, secret) {
            (Some(account_id), Some(secret)) => Ok(Self {
                account_id,
                secret,
                otp_seed: otp_seed
                    .filter(|value| !value.is_empty())
                    .map(SecretString::new),
            }),
            (account_id, secret) => Err(MissingCredentials {
                account_id: account_id.is_none(),
                secret: secret.is_none(),
            }),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("account_id", &self.account_id)
            .field("secret", &self.secret)
            .field("otp_seed", &self.otp_seed)
            .finish()
    }
}

/// Which of the two required credential values were absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingCredentials {
    pub account_id: bool,
    pub secret: bool,
}

impl Display for MissingCredentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let status = |missing: bool| if missing { "NOT SET" } else { "set" };
        write!(
            f,
            "{ACCOUNT_ID_VAR} and {SECRET_VAR} environment variables must be set. \
             Found: username={}, password={}",
            status(self.account_id),
            status(self.secret)
        )
    }
}

impl Error for MissingCredentials {}

pub trait CredentialSource: Send + Sync {
    fn read(&self) -> Result<Credentials, MissingCredentials>;
}

/// Reads credentials from the process environment on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvCredentialSource;

impl CredentialSource for EnvCredentialSource {
    fn read(&self) -> Result<Credentials, MissingCredentials> {
        Credentials::from_parts(
            std::env::var(ACCOUNT_ID_VAR).ok(),
            std::env::var(SECRET_VAR).ok(),
            std::env::var(OTP_SEED_VAR).ok(),
        )
    }
}

#[derive(Default)]
pub struct StaticCredentialSource {
    account_id: Option<String>,
    secret: Option<SecretString>,
    otp_seed: Option<SecretString>,
}

impl StaticCredentialSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(SecretString::new(secret));
        self
    }

    pub fn with_otp_seed(mut self, otp_seed: impl Into<String>) -> Self {
        self.otp_seed = Some(SecretString::new(otp_seed));
        self
    }
}

impl std::fmt::Debug for StaticCredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentialSource")
            .field("account_id", &self.account_id)
            .field("secret", &self.secret)
            .field("otp_seed", &self.otp_seed)
            .finish()
    }
}

impl CredentialSource for StaticCredentialSource {
    fn read(&self) -> Result<Credentials, MissingCredentials> {
        Credentials::from_parts(
            self.account_id.clone(),
            self.secret.as_ref().map(|secret| secret.expose().to_string()),
            self.otp_seed.as_ref().map(|seed| seed.expose().to_string()),
        )
    }
}
