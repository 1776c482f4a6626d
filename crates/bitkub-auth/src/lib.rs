//! Credentials and payload signing for the Bitkub API
//!
//! Authenticated Bitkub endpoints take a JSON body that carries a server
//! timestamp (`ts`) and an HMAC-SHA256 signature (`sig`) of the rest of the
//! body, keyed by the API secret and rendered as lowercase hex.
//!
//! # Example
//!
//! ```no_run
//! use bitkub_auth::Credentials;
//! use bitkub_types::ParameterMap;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load credentials from environment
//!     let creds = Credentials::from_env()?;
//!
//!     let payload = ParameterMap::new()
//!         .with("sym", "THB_BTC")
//!         .with("ts", 1700000000i64);
//!
//!     let signed = creds.sign(&payload)?;
//!     println!("body: {}", signed.to_json());
//!
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;
mod signer;

pub use credentials::{Credentials, API_KEY_ENV, API_SECRET_ENV};
pub use error::{AuthError, AuthResult};
pub use signer::{hmac_sha256_hex, sign_payload, SignedPayload, SIG_KEY};
