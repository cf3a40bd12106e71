//! Read the identity out of a stored bearer token.
//!
//! The signature is not checked here; the backend does that on every call.
//! This only recovers who the token claims to be so a reload can restore
//! the session without a round trip.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;
use shared_types::{AppError, Identity, Role};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Claims {
    #[serde(default)]
    id: Option<serde_json::Value>,
    #[serde(default)]
    user_id: Option<serde_json::Value>,
    #[serde(default)]
    sub: Option<serde_json::Value>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    role: Option<String>,
}

fn value_to_string(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Decode the payload segment of a JWT into an [`Identity`].
///
/// The role claim is required. The name falls back to the email, then to the
/// role's display name.
pub fn identity_from_token(token: &str) -> Result<Identity, AppError> {
    let mut parts = token.split('.');
    let payload = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => return Err(AppError::decode("Token is not a JWT")),
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| AppError::decode(format!("Token payload is not base64url: {e}")))?;
    let claims: Claims = serde_json::from_slice(&bytes)
        .map_err(|e| AppError::decode(format!("Token payload is not JSON: {e}")))?;

    let role = claims
        .role
        .as_deref()
        .and_then(Role::parse)
        .ok_or_else(|| AppError::decode("Token has no recognised role claim"))?;

    let id = [claims.id, claims.user_id, claims.sub]
        .into_iter()
        .flatten()
        .find_map(value_to_string)
        .ok_or_else(|| AppError::decode("Token has no subject"))?;

    let name = claims
        .name
        .filter(|n| !n.trim().is_empty())
        .or_else(|| claims.email.clone())
        .unwrap_or_else(|| role.display_name().to_string());

    Ok(Identity {
        id,
        name,
        email: claims.email,
        role,
    })
}

#[cfg(test)]
pub(crate) fn encode_test_token(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn decodes_full_claims() {
        let token = encode_test_token(&json!({
            "id": "u-42", "name": "Dr. Sarah Wilson", "email": "sarah@clinic.test", "role": "DOCTOR"
        }));
        let identity = identity_from_token(&token).unwrap();
        assert_eq!(
            identity,
            Identity {
                id: "u-42".into(),
                name: "Dr. Sarah Wilson".into(),
                email: Some("sarah@clinic.test".into()),
                role: Role::Doctor,
            }
        );
    }

    #[test]
    fn numeric_subject_and_missing_name() {
        let token = encode_test_token(&json!({ "sub": 7, "email": "p@clinic.test", "role": "patient" }));
        let identity = identity_from_token(&token).unwrap();
        assert_eq!(identity.id, "7");
        assert_eq!(identity.name, "p@clinic.test");
        assert_eq!(identity.role, Role::Patient);
    }

    #[test]
    fn user_id_claim_is_accepted() {
        let token = encode_test_token(&json!({ "userId": "abc", "role": "ADMIN" }));
        let identity = identity_from_token(&token).unwrap();
        assert_eq!(identity.id, "abc");
        assert_eq!(identity.name, "Administrator");
    }

    #[test]
    fn missing_role_is_rejected() {
        let token = encode_test_token(&json!({ "id": "1", "name": "X" }));
        assert!(identity_from_token(&token).is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(identity_from_token("not-a-token").is_err());
        assert!(identity_from_token("a.!!!.c").is_err());
        assert!(identity_from_token("").is_err());
    }
}
