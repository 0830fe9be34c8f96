use crate::signature::{calculate_signature, signatures_match};
use std::collections::BTreeMap;

/// Parameters received on the result callback after a payment completes.
///
/// Amount and invoice id are kept exactly as received: the signature is
/// computed over the gateway's strings, not over re-parsed values.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultNotification {
    pub out_sum: String,
    pub inv_id: String,
    pub signature: String,
    pub user_params: BTreeMap<String, String>,
}

impl ResultNotification {
    pub fn new(
        out_sum: impl Into<String>,
        inv_id: impl Into<String>,
        signature: impl Into<String>,
    ) -> Self {
        Self {
            out_sum: out_sum.into(),
            inv_id: inv_id.into(),
            signature: signature.into(),
            user_params: BTreeMap::new(),
        }
    }

    pub fn with_user_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.user_params.insert(key.into(), value.into());
        self
    }

    /// Digest the gateway should have sent for this notification:
    /// `OutSum:InvId:Password2`, then sorted `Shp_key=value` pairs.
    pub fn expected_signature(&self, password2: &str) -> String {
        let mut parts = vec![
            self.out_sum.clone(),
            self.inv_id.clone(),
            password2.to_owned(),
        ];
        for (key, value) in &self.user_params {
            parts.push(format!("{key}={value}"));
        }
        calculate_signature(&parts)
    }

    /// A mismatch is a negative business outcome, not an error; callers
    /// branch on the result and must not change state when it is false.
    pub fn verify(&self, password2: &str) -> bool {
        signatures_match(&self.signature, &self.expected_signature(password2))
    }

    /// Body the gateway expects in answer to a verified callback.
    pub fn success_response(&self) -> String {
        format!("OK{}", self.inv_id)
    }
}
