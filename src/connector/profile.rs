//! Ephemeral credential profile lifecycle.
//!
//! A scan authenticates through a randomly named profile written into the
//! shared credentials store for exactly the duration of one invocation.
//! `ProfileGuard` owns that lifecycle: `acquire` writes the section(s),
//! `release` removes them, and `Drop` is a best-effort backstop so the
//! entries never outlive the call even on an early return or panic.

use std::io;

use prowler_plugin_core::{ConnectorError, Credentials};
use rand::distributions::Alphanumeric;
use rand::{Rng, thread_rng};
use tracing::{debug, warn};

use super::store::{CredentialsStore, ProfileDocument};

const PROFILE_NAME_LEN: usize = 16;

/// Random profile name. Uniqueness only has to hold per invocation within
/// one store's lifetime, not globally.
fn random_profile_name() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(PROFILE_NAME_LEN)
        .map(char::from)
        .collect()
}

/// Scoped handle on the temporary profile section(s).
#[derive(Debug)]
pub struct ProfileGuard {
    store: CredentialsStore,
    profile_name: String,
    source_profile_name: Option<String>,
    released: bool,
}

impl ProfileGuard {
    /// Write the temporary profile into the store and return the guard.
    ///
    /// With `role_arn` present, two sections are written: a source profile
    /// holding the static keys, and the main profile pointing at it with
    /// `role_arn` (and `external_id` when supplied) so the scanner assumes
    /// the role. Without `role_arn` the keys go directly under the main
    /// profile name.
    pub fn acquire(
        store: CredentialsStore,
        credentials: &Credentials,
    ) -> Result<Self, ConnectorError> {
        let access_key_id = credentials.aws_access_key_id.as_deref().ok_or_else(|| {
            ConnectorError::RequiredParameter {
                key: "secret_data.aws_access_key_id".to_string(),
            }
        })?;
        let secret_access_key =
            credentials.aws_secret_access_key.as_deref().ok_or_else(|| {
                ConnectorError::RequiredParameter {
                    key: "secret_data.aws_secret_access_key".to_string(),
                }
            })?;

        let profile_name = random_profile_name();
        debug!(profile = %profile_name, "adding aws profile");

        let mut doc = store.load_or_init()?;

        // Pathological collision with an existing section: clear it out
        // before recreating.
        if doc.has_section(&profile_name) {
            doc.remove_section(&profile_name);
        }
        doc.add_section(&profile_name);

        let mut source_profile_name = None;
        if let Some(role_arn) = credentials.role_arn.as_deref() {
            let source_name = random_profile_name();
            doc.set(&source_name, "aws_access_key_id", access_key_id);
            doc.set(&source_name, "aws_secret_access_key", secret_access_key);

            doc.set(&profile_name, "role_arn", role_arn);
            doc.set(&profile_name, "source_profile", &source_name);
            if let Some(external_id) = credentials.external_id.as_deref() {
                doc.set(&profile_name, "external_id", external_id);
            }
            source_profile_name = Some(source_name);
        } else {
            doc.set(&profile_name, "aws_access_key_id", access_key_id);
            doc.set(&profile_name, "aws_secret_access_key", secret_access_key);
        }

        store.save(&doc)?;

        Ok(Self {
            store,
            profile_name,
            source_profile_name,
            released: false,
        })
    }

    /// Name the scanner selects with `-p`.
    pub fn profile_name(&self) -> &str {
        &self.profile_name
    }

    /// Remove the temporary section(s) and persist the reduced store.
    pub fn release(mut self) -> Result<(), ConnectorError> {
        self.remove_sections()?;
        self.released = true;
        Ok(())
    }

    fn remove_sections(&self) -> io::Result<()> {
        debug!(profile = %self.profile_name, "removing aws profile");

        let mut doc = match self.store.load() {
            Ok(doc) => doc,
            // Store vanished underneath us; nothing left to clean up.
            Err(e) if e.kind() == io::ErrorKind::NotFound => ProfileDocument::new(),
            Err(e) => return Err(e),
        };

        doc.remove_section(&self.profile_name);
        if let Some(source) = &self.source_profile_name {
            doc.remove_section(source);
        }
        self.store.save(&doc)
    }
}

impl Drop for ProfileGuard {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        if let Err(e) = self.remove_sections() {
            warn!(
                profile = %self.profile_name,
                error = %e,
                "failed to remove aws profile on drop"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store() -> (tempfile::TempDir, CredentialsStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialsStore::new(dir.path().join("credentials"));
        (dir, store)
    }

    fn static_keys() -> Credentials {
        Credentials {
            aws_access_key_id: Some("AKIAEXAMPLE".to_string()),
            aws_secret_access_key: Some("secret".to_string()),
            role_arn: None,
            external_id: None,
        }
    }

    fn role_credentials() -> Credentials {
        Credentials {
            role_arn: Some("arn:aws:iam::123456789012:role/audit".to_string()),
            external_id: Some("ext-42".to_string()),
            ..static_keys()
        }
    }

    #[test]
    fn test_acquire_without_role_writes_one_section() {
        let (_dir, store) = test_store();
        let guard = ProfileGuard::acquire(store.clone(), &static_keys()).unwrap();

        let doc = store.load().unwrap();
        assert_eq!(doc.section_names().len(), 2); // default + profile
        let section = doc.section(guard.profile_name()).unwrap();
        assert_eq!(section.get("aws_access_key_id"), Some("AKIAEXAMPLE"));
        assert_eq!(section.get("aws_secret_access_key"), Some("secret"));
        assert_eq!(section.get("role_arn"), None);

        guard.release().unwrap();
        let doc = store.load().unwrap();
        assert_eq!(doc.section_names(), vec!["default"]);
    }

    #[test]
    fn test_acquire_with_role_chains_source_profile() {
        let (_dir, store) = test_store();
        let guard = ProfileGuard::acquire(store.clone(), &role_credentials()).unwrap();

        let doc = store.load().unwrap();
        assert_eq!(doc.section_names().len(), 3); // default + profile + source

        let main = doc.section(guard.profile_name()).unwrap();
        let source_name = main.get("source_profile").unwrap().to_string();
        assert_eq!(
            main.get("role_arn"),
            Some("arn:aws:iam::123456789012:role/audit")
        );
        assert_eq!(main.get("external_id"), Some("ext-42"));
        assert_eq!(main.get("aws_access_key_id"), None);

        let source = doc.section(&source_name).unwrap();
        assert_eq!(source.get("aws_access_key_id"), Some("AKIAEXAMPLE"));
        assert_eq!(source.get("aws_secret_access_key"), Some("secret"));

        guard.release().unwrap();
        let doc = store.load().unwrap();
        assert_eq!(doc.section_names(), vec!["default"]);
    }

    #[test]
    fn test_role_without_external_id() {
        let (_dir, store) = test_store();
        let creds = Credentials {
            external_id: None,
            ..role_credentials()
        };
        let guard = ProfileGuard::acquire(store.clone(), &creds).unwrap();
        let doc = store.load().unwrap();
        let main = doc.section(guard.profile_name()).unwrap();
        assert_eq!(main.get("external_id"), None);
        assert!(main.get("source_profile").is_some());
        guard.release().unwrap();
    }

    #[test]
    fn test_drop_removes_sections() {
        let (_dir, store) = test_store();
        {
            let _guard = ProfileGuard::acquire(store.clone(), &role_credentials()).unwrap();
            assert_eq!(store.load().unwrap().section_names().len(), 3);
        }
        assert_eq!(store.load().unwrap().section_names(), vec!["default"]);
    }

    #[test]
    fn test_acquire_initializes_missing_store() {
        let (_dir, store) = test_store();
        assert!(!store.path().exists());
        let guard = ProfileGuard::acquire(store.clone(), &static_keys()).unwrap();
        assert!(store.path().exists());
        assert!(store.load().unwrap().has_section("default"));
        guard.release().unwrap();
    }

    #[test]
    fn test_missing_credentials_rejected_before_store_touch() {
        let (_dir, store) = test_store();
        let creds = Credentials {
            aws_access_key_id: None,
            ..static_keys()
        };
        let err = ProfileGuard::acquire(store.clone(), &creds).unwrap_err();
        assert!(matches!(err, ConnectorError::RequiredParameter { .. }));
        assert!(!store.path().exists());
    }

    #[test]
    fn test_profile_names_are_unique_per_acquire() {
        let (_dir, store) = test_store();
        let a = ProfileGuard::acquire(store.clone(), &static_keys()).unwrap();
        let b = ProfileGuard::acquire(store.clone(), &static_keys()).unwrap();
        assert_ne!(a.profile_name(), b.profile_name());
        b.release().unwrap();
        a.release().unwrap();
    }
}
