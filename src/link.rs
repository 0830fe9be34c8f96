use crate::config::MerchantConfig;
use crate::error::PaymentError;
use crate::signature::calculate_signature;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::collections::BTreeMap;
use url::Url;

pub const PAYMENT_URL: &str = "https://auth.robokassa.ru/Merchant/Index.aspx";

/// The gateway rejects invoice ids above i32::MAX.
pub const MAX_INVOICE_ID: u32 = 2_147_483_647;

pub const SHP_PREFIX: &str = "Shp_";

/// One payment to be turned into a redirect URL. Immutable value record,
/// lives only for the duration of a single link-generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    pub amount: Decimal,
    pub invoice_id: u32,
    pub description: String,
    pub recurring: bool,
    /// Shp_-prefixed user parameters. Kept sorted by key, which is also
    /// the order the gateway expects them in the signature payload.
    pub user_params: BTreeMap<String, String>,
}

impl PaymentRequest {
    pub fn new(amount: Decimal, invoice_id: u32, description: impl Into<String>) -> Self {
        Self {
            amount,
            invoice_id,
            description: description.into(),
            recurring: false,
            user_params: BTreeMap::new(),
        }
    }

    pub fn recurring(mut self) -> Self {
        self.recurring = true;
        self
    }

    pub fn with_user_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.user_params.insert(key.into(), value.into());
        self
    }
}

/// A generated redirect URL plus the parameter mapping it was built from,
/// in build order, for inspection and logging.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PaymentLink {
    pub url: String,
    pub params: Vec<(String, String)>,
}

impl PaymentLink {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Formats an amount the way the gateway expects: exactly two fraction
/// digits, midpoints rounded away from zero (`199.005` becomes `199.01`).
pub fn format_out_sum(amount: Decimal) -> Result<String, PaymentError> {
    if amount.is_sign_negative() {
        return Err(PaymentError::InvalidAmount(amount.to_string()));
    }
    let mut out_sum = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    out_sum.rescale(2);
    Ok(out_sum.to_string())
}

/// Builds the redirect URL for a payment.
///
/// Signature payload order: `MerchantLogin:OutSum:InvoiceID:Password1`,
/// followed by sorted `Shp_key=value` pairs when user parameters are set.
pub fn generate_payment_link(
    config: &MerchantConfig,
    request: &PaymentRequest,
) -> Result<PaymentLink, PaymentError> {
    if request.invoice_id > MAX_INVOICE_ID {
        return Err(PaymentError::InvoiceIdOutOfRange(request.invoice_id));
    }
    let out_sum = format_out_sum(request.amount)?;
    let invoice_id = request.invoice_id.to_string();

    let mut signature_parts = vec![
        config.merchant_login.clone(),
        out_sum.clone(),
        invoice_id.clone(),
        config.password1.clone(),
    ];
    for (key, value) in &request.user_params {
        if !key.starts_with(SHP_PREFIX) {
            return Err(PaymentError::InvalidUserParam(key.clone()));
        }
        signature_parts.push(format!("{key}={value}"));
    }
    let signature = calculate_signature(&signature_parts);
    log::debug!(
        "signed payment: MerchantLogin={} OutSum={out_sum} InvoiceID={invoice_id}",
        config.merchant_login
    );

    // The creation-side field is InvoiceID; InvId only appears in result
    // callbacks. The two must never be conflated.
    let mut params = vec![
        ("MerchantLogin".to_owned(), config.merchant_login.clone()),
        ("OutSum".to_owned(), out_sum),
        ("InvoiceID".to_owned(), invoice_id),
        ("Description".to_owned(), request.description.clone()),
        ("SignatureValue".to_owned(), signature),
    ];
    if config.is_test {
        params.push(("IsTest".to_owned(), "1".to_owned()));
    }
    if request.recurring {
        // The gateway reads this field as a string: "1", never "true".
        params.push(("Recurring".to_owned(), "1".to_owned()));
    }
    for (key, value) in &request.user_params {
        params.push((key.clone(), value.clone()));
    }

    let mut url = Url::parse(PAYMENT_URL)?;
    url.query_pairs_mut()
        .extend_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())));

    Ok(PaymentLink {
        url: url.to_string(),
        params,
    })
}
