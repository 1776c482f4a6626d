//! HMAC-SHA256 payload signing
//!
//! Bitkub signature algorithm:
//! 1. Serialize the payload (including `ts`) as compact JSON
//! 2. HMAC-SHA256(api_secret, json_bytes)
//! 3. Hex encode (lowercase) and add it to the body as `sig`

use bitkub_types::{ParamValue, ParameterMap};
use hmac::{Hmac, Mac};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use sha2::Sha256;

use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// Body key holding the signature
pub const SIG_KEY: &str = "sig";

/// Compute HMAC-SHA256 of `message` keyed by `secret`, as lowercase hex
pub fn hmac_sha256_hex(secret: &[u8], message: &[u8]) -> AuthResult<String> {
    let mut mac =
        HmacSha256::new_from_slice(secret).map_err(|e| AuthError::Signing(e.to_string()))?;
    mac.update(message);
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Sign `payload` with `secret`
///
/// The signature covers the canonical JSON of `payload` exactly as it will be
/// transmitted (so `ts` must already be merged in). Any `sig` entry already in
/// the payload is dropped first; a signature never covers itself.
///
/// # Errors
///
/// Returns [`AuthError::Signing`] for an empty secret. Signing with an empty
/// key would produce a well-formed but worthless signature.
pub fn sign_payload(payload: &ParameterMap, secret: &str) -> AuthResult<SignedPayload> {
    if secret.is_empty() {
        return Err(AuthError::Signing("API secret is empty".to_string()));
    }

    let mut payload = payload.clone();
    payload.remove(SIG_KEY);

    let sig = hmac_sha256_hex(secret.as_bytes(), payload.to_canonical_json().as_bytes())?;

    Ok(SignedPayload { payload, sig })
}

/// A payload together with its signature
///
/// The payload itself is never modified by signing; `sig` lives alongside it
/// and is appended as the last key of the transmitted body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedPayload {
    payload: ParameterMap,
    sig: String,
}

impl SignedPayload {
    /// The signed fields (everything except `sig`)
    pub fn payload(&self) -> &ParameterMap {
        &self.payload
    }

    /// Lowercase hex HMAC-SHA256 signature (64 characters)
    pub fn sig(&self) -> &str {
        &self.sig
    }

    /// The server timestamp the payload was signed with, if any
    pub fn ts(&self) -> Option<i64> {
        match self.payload.get("ts") {
            Some(ParamValue::Int(ts)) => Some(*ts),
            _ => None,
        }
    }

    /// Request body: the payload's canonical JSON with `sig` appended
    pub fn to_json(&self) -> String {
        let mut body = self.payload.clone();
        body.insert(SIG_KEY, self.sig.as_str());
        body.to_canonical_json()
    }

    /// Split into payload and signature
    pub fn into_parts(self) -> (ParameterMap, String) {
        (self.payload, self.sig)
    }
}

impl Serialize for SignedPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in self.payload.present() {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry(SIG_KEY, &self.sig)?;
        map.end()
    }
}
