use crate::domain::error::DomainError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace};

pub fn to_json<T: Serialize>(value: &T) -> Result<String, DomainError> {
    let encoded = serde_json::to_string(value).map_err(|e| {
        debug!(error = %e, "Failed to encode payload");
        DomainError::Encode(e.to_string())
    })?;
    trace!(bytes = encoded.len(), "Encoded payload");
    Ok(encoded)
}

pub fn to_value<T: Serialize>(value: &T) -> Result<Value, DomainError> {
    serde_json::to_value(value).map_err(|e| DomainError::Encode(e.to_string()))
}

pub fn from_json<T: DeserializeOwned>(input: &str) -> Result<T, DomainError> {
    trace!(bytes = input.len(), "Decoding payload");
    serde_json::from_str(input).map_err(|e| {
        debug!(error = %e, "Failed to decode payload");
        DomainError::Decode(e.to_string())
    })
}

pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, DomainError> {
    serde_json::from_value(value).map_err(|e| {
        debug!(error = %e, "Failed to decode payload");
        DomainError::Decode(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::{UserProfile, UserProfileCreate, UserProfileList, UserProfileUpdate};
    use serde_json::json;

    fn sample() -> UserProfile {
        UserProfile {
            id: "1".to_string(),
            email: "a@b.com".to_string(),
            full_name: "A B".to_string(),
            is_active: true,
            is_superuser: false,
        }
    }

    #[test]
    fn test_profile_round_trip_preserves_values() {
        let encoded = to_json(&sample()).unwrap();
        let decoded: UserProfile = from_json(&encoded).unwrap();
        assert_eq!(decoded, sample());
    }

    #[test]
    fn test_profile_encodes_flat_object() {
        let value = to_value(&sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "1",
                "email": "a@b.com",
                "full_name": "A B",
                "is_active": true,
                "is_superuser": false
            })
        );
    }

    #[test]
    fn test_decode_error_carries_message() {
        let err = from_json::<UserProfileCreate>(r#"{"full_name":"x"}"#).unwrap_err();
        match err {
            DomainError::Decode(msg) => assert!(msg.contains("email")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_rejects_wrong_primitive_type() {
        let result = from_value::<UserProfileUpdate>(json!({ "is_active": "yes" }));
        assert!(matches!(result, Err(DomainError::Decode(_))));
    }

    #[test]
    fn test_decode_rejects_malformed_json() {
        assert!(matches!(
            from_json::<UserProfileList>("{\"count\": 1,"),
            Err(DomainError::Decode(_))
        ));
    }
}
