use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

use crate::Role;

/// Decoded, ephemeral view of a credential.
///
/// Claims are derived fresh on every read and never cached beyond a single
/// evaluation: the credential can be replaced or cleared between reads (a
/// logout in another operation), so holding on to a decoded copy would let
/// decisions run against a stale session. Decoding is at most once per
/// navigation, not a hot loop.
///
/// `issued_at`/`expires_at` are pass-through data. Expiry is embedded in the
/// token and enforced by the backend; this layer never rejects on time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    role: Option<String>,
    pages: Vec<String>,
    issued_at: Option<DateTime<Utc>>,
    expires_at: Option<DateTime<Utc>>,
}

impl Claims {
    /// The role claim, lower-cased, or `None` if the token carried none.
    pub fn role(&self) -> Option<Role> {
        self.role.as_deref().map(Role::new)
    }

    /// Entitled section names, verbatim as issued (case-sensitive).
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.issued_at
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }
}

/// Wire shape of the payload segment. Everything is optional: tokens are
/// issued by a backend this layer does not control, and a missing field must
/// degrade, not fail.
#[derive(Debug, Deserialize)]
struct Payload {
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    pages: Vec<String>,
    #[serde(default)]
    iat: Option<i64>,
    #[serde(default)]
    exp: Option<i64>,
}

/// Decode the claims out of a three-segment dot-delimited credential.
///
/// Only the middle segment is inspected: base64url (unpadded), containing a
/// flat JSON record. The signature segment is ignored — verification is a
/// backend responsibility.
///
/// Total on the guard hot path: any malformation (wrong segment count, bad
/// base64url, unparseable JSON) yields `None`, identical to an absent
/// credential. Nothing is thrown, so a corrupted token can never crash a
/// navigation.
pub fn decode_token(token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        tracing::debug!("credential is not a three-segment token");
        return None;
    };

    let bytes = match URL_SAFE_NO_PAD.decode(payload) {
        Ok(bytes) => bytes,
        Err(_) => {
            tracing::debug!("credential payload is not base64url");
            return None;
        }
    };

    let payload: Payload = match serde_json::from_slice(&bytes) {
        Ok(payload) => payload,
        Err(_) => {
            tracing::debug!("credential payload is not a claims record");
            return None;
        }
    };

    Some(Claims {
        role: payload.role,
        pages: payload.pages,
        issued_at: payload.iat.and_then(|secs| Utc.timestamp_opt(secs, 0).single()),
        expires_at: payload.exp.and_then(|secs| Utc.timestamp_opt(secs, 0).single()),
    })
}
