use crate::error::PaymentError;
use std::env;
use std::fmt;

pub const MERCHANT_LOGIN_VAR: &str = "ROBOKASSA_MERCHANT_LOGIN";
pub const PASSWORD1_VAR: &str = "ROBOKASSA_PASSWORD1";
pub const PASSWORD2_VAR: &str = "ROBOKASSA_PASSWORD2";
pub const TEST_MODE_VAR: &str = "ROBOKASSA_TEST_MODE";

/// Merchant credentials loaded from the environment.
///
/// Password #1 signs outbound payment requests, password #2 verifies
/// inbound result callbacks. The two are never interchangeable.
#[derive(Clone, PartialEq)]
pub struct MerchantConfig {
    pub merchant_login: String,
    pub password1: String,
    pub password2: String,
    pub is_test: bool,
}

impl MerchantConfig {
    pub fn from_env() -> Result<Self, PaymentError> {
        let config = Self {
            merchant_login: require(MERCHANT_LOGIN_VAR)?,
            password1: require(PASSWORD1_VAR)?,
            password2: require(PASSWORD2_VAR)?,
            is_test: parse_test_mode(env::var(TEST_MODE_VAR).ok().as_deref()),
        };
        log::debug!(
            "loaded merchant config: login={} test_mode={}",
            config.merchant_login,
            config.is_test
        );
        Ok(config)
    }
}

// Passwords are shared secrets; Debug output keeps them masked.
impl fmt::Debug for MerchantConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MerchantConfig")
            .field("merchant_login", &self.merchant_login)
            .field("password1", &mask(&self.password1))
            .field("password2", &mask(&self.password2))
            .field("is_test", &self.is_test)
            .finish()
    }
}

fn require(name: &'static str) -> Result<String, PaymentError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_owned()),
        _ => Err(PaymentError::MissingEnv(name)),
    }
}

fn parse_test_mode(value: Option<&str>) -> bool {
    matches!(value.map(str::trim), Some("1") | Some("true"))
}

/// Shows length plus first/last two characters, enough to diagnose a
/// misconfigured secret without logging it.
fn mask(secret: &str) -> String {
    if secret.is_empty() {
        return "[EMPTY]".to_owned();
    }
    if secret.len() <= 4 {
        return "[***]".to_owned();
    }
    format!(
        "{}...{} (length: {})",
        &secret[..2],
        &secret[secret.len() - 2..],
        secret.len()
    )
}
