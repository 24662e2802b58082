//! AWS credential payload delivered by the host platform.

use serde::{Deserialize, Serialize};

use crate::error::ConnectorError;

/// The `secret_data` payload of a verify/check call.
///
/// `aws_access_key_id` and `aws_secret_access_key` are mandatory for every
/// mode. Presence of `role_arn` selects the role-assumption branch, in which
/// case `external_id` may also be supplied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_access_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_secret_access_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

impl Credentials {
    /// Check the mandatory fields, naming the first missing one.
    ///
    /// Runs before any profile is written or process spawned.
    pub fn validate(&self) -> Result<(), ConnectorError> {
        if self.aws_access_key_id.as_deref().is_none_or(str::is_empty) {
            return Err(ConnectorError::RequiredParameter {
                key: "secret_data.aws_access_key_id".to_string(),
            });
        }

        if self.aws_secret_access_key.as_deref().is_none_or(str::is_empty) {
            return Err(ConnectorError::RequiredParameter {
                key: "secret_data.aws_secret_access_key".to_string(),
            });
        }

        Ok(())
    }

    /// Whether this credential set requires role assumption.
    pub fn assumes_role(&self) -> bool {
        self.role_arn.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn static_keys() -> Credentials {
        Credentials {
            aws_access_key_id: Some("AKIAEXAMPLE".to_string()),
            aws_secret_access_key: Some("secret".to_string()),
            role_arn: None,
            external_id: None,
        }
    }

    #[test]
    fn test_validate_accepts_static_keys() {
        assert!(static_keys().validate().is_ok());
    }

    #[test]
    fn test_validate_names_missing_access_key() {
        let creds = Credentials {
            aws_access_key_id: None,
            ..static_keys()
        };
        let err = creds.validate().unwrap_err();
        match err {
            ConnectorError::RequiredParameter { key } => {
                assert_eq!(key, "secret_data.aws_access_key_id");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_names_missing_secret() {
        let creds = Credentials {
            aws_secret_access_key: None,
            ..static_keys()
        };
        let err = creds.validate().unwrap_err();
        match err {
            ConnectorError::RequiredParameter { key } => {
                assert_eq!(key, "secret_data.aws_secret_access_key");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let creds = Credentials {
            aws_access_key_id: Some(String::new()),
            ..static_keys()
        };
        assert!(creds.validate().is_err());
    }

    #[test]
    fn test_deserialize_from_secret_data_payload() {
        let creds: Credentials = serde_json::from_str(
            r#"{
                "aws_access_key_id": "AKIAEXAMPLE",
                "aws_secret_access_key": "secret",
                "role_arn": "arn:aws:iam::123456789012:role/audit",
                "external_id": "ext-42"
            }"#,
        )
        .unwrap();
        assert!(creds.validate().is_ok());
        assert!(creds.assumes_role());
        assert_eq!(creds.external_id.as_deref(), Some("ext-42"));
    }
}
