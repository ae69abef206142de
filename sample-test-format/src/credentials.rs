use std::fmt::{Debug, Formatter};

use anyhow::{Context, Error};

/// The name of the service the credentials are stored under.
pub const SERVICE_NAME: &str = "atcoder-sample-test";

/// Environment variable that overrides the stored username.
pub const USERNAME_VAR: &str = "ATCODER_USERNAME";
/// Environment variable that overrides the stored password.
pub const PASSWORD_VAR: &str = "ATCODER_PASSWORD";

/// The username and password used for logging in.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// The username.
    pub username: String,
    /// The password.
    pub password: String,
}

impl Credentials {
    /// The credentials from `$ATCODER_USERNAME` and `$ATCODER_PASSWORD`, if both are set.
    pub fn from_env() -> Option<Credentials> {
        credentials_from_env(|var| std::env::var(var).ok())
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<hidden>")
            .finish()
    }
}

/// A key-value store of secrets, addressed by service and user.
pub trait SecretStore {
    /// The secret of `user` in `service`, `None` if there is none.
    fn get(&self, service: &str, user: &str) -> Result<Option<String>, Error>;

    /// Store the secret of `user` in `service`, replacing the previous one.
    fn set(&self, service: &str, user: &str, secret: &str) -> Result<(), Error>;
}

/// The secret store of the operating system: the Keychain on macOS, the Credential Manager on
/// Windows and the kernel keyutils on Linux.
#[derive(Debug, Clone, Copy, Default)]
pub struct Keyring;

impl SecretStore for Keyring {
    fn get(&self, service: &str, user: &str) -> Result<Option<String>, Error> {
        let entry = keyring::Entry::new(service, user)
            .with_context(|| format!("Invalid keyring entry {}/{}", service, user))?;
        match entry.get_password() {
            Ok(secret) => Ok(Some(secret)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}/{}", service, user)),
        }
    }

    fn set(&self, service: &str, user: &str, secret: &str) -> Result<(), Error> {
        keyring::Entry::new(service, user)
            .and_then(|entry| entry.set_password(secret))
            .with_context(|| format!("Failed to write {}/{}", service, user))
    }
}

/// The credentials for logging in, kept in a [`SecretStore`](trait.SecretStore.html).
///
/// The username is stored as the secret of the user named [`SERVICE_NAME`], the password as the
/// secret of the username.
pub struct CredentialStore {
    secrets: Box<dyn SecretStore>,
}

impl CredentialStore {
    /// Make a store backed by `secrets`.
    pub fn new<S: SecretStore + 'static>(secrets: S) -> CredentialStore {
        CredentialStore {
            secrets: Box::new(secrets),
        }
    }

    /// The store inside the secret store of the operating system.
    pub fn user_store() -> CredentialStore {
        CredentialStore::new(Keyring)
    }

    /// Read the stored credentials. A missing username or password is not an error.
    pub fn load(&self) -> Result<Option<Credentials>, Error> {
        let Some(username) = self.secrets.get(SERVICE_NAME, SERVICE_NAME)? else {
            debug!("No username stored for {}", SERVICE_NAME);
            return Ok(None);
        };
        let Some(password) = self.secrets.get(SERVICE_NAME, &username)? else {
            debug!("No password stored for {}", username);
            return Ok(None);
        };
        Ok(Some(Credentials { username, password }))
    }

    /// Store the credentials, replacing the previous ones.
    pub fn save(&self, credentials: &Credentials) -> Result<(), Error> {
        self.secrets.set(SERVICE_NAME, SERVICE_NAME, &credentials.username)?;
        self.secrets.set(SERVICE_NAME, &credentials.username, &credentials.password)?;
        Ok(())
    }

    /// Find the credentials to use: the environment variables win over the stored ones. Failing to
    /// read the store is reported as a warning, since logging in is optional.
    pub fn resolve(&self) -> Option<Credentials> {
        if let Some(credentials) = Credentials::from_env() {
            debug!("Using the credentials from ${} and ${}", USERNAME_VAR, PASSWORD_VAR);
            return Some(credentials);
        }
        match self.load() {
            Ok(credentials) => credentials,
            Err(e) => {
                warn!("Cannot read the stored credentials: {:?}", e);
                None
            }
        }
    }
}

/// Build the credentials from the environment, both variables have to be set and non-empty.
fn credentials_from_env<F>(env: F) -> Option<Credentials>
where
    F: Fn(&str) -> Option<String>,
{
    let username = env(USERNAME_VAR).filter(|u| !u.is_empty())?;
    let password = env(PASSWORD_VAR).filter(|p| !p.is_empty())?;
    Some(Credentials { username, password })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use anyhow::anyhow;
    use pretty_assertions::assert_eq;

    use super::*;

    /// Secrets kept in memory, shared between the clones.
    #[derive(Default, Clone)]
    struct MemorySecrets {
        entries: Rc<RefCell<HashMap<(String, String), String>>>,
    }

    impl SecretStore for MemorySecrets {
        fn get(&self, service: &str, user: &str) -> Result<Option<String>, Error> {
            let key = (service.to_string(), user.to_string());
            Ok(self.entries.borrow().get(&key).cloned())
        }

        fn set(&self, service: &str, user: &str, secret: &str) -> Result<(), Error> {
            let key = (service.to_string(), user.to_string());
            self.entries.borrow_mut().insert(key, secret.to_string());
            Ok(())
        }
    }

    /// A store whose backend is not available.
    struct BrokenSecrets;

    impl SecretStore for BrokenSecrets {
        fn get(&self, _service: &str, _user: &str) -> Result<Option<String>, Error> {
            Err(anyhow!("no secret service"))
        }

        fn set(&self, _service: &str, _user: &str, _secret: &str) -> Result<(), Error> {
            Err(anyhow!("no secret service"))
        }
    }

    fn credentials() -> Credentials {
        Credentials {
            username: "tourist".into(),
            password: "hunter2".into(),
        }
    }

    #[test]
    fn test_load_missing() {
        let store = CredentialStore::new(MemorySecrets::default());
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_save_and_load() {
        let store = CredentialStore::new(MemorySecrets::default());
        store.save(&credentials()).unwrap();
        assert_eq!(store.load().unwrap(), Some(credentials()));
    }

    #[test]
    fn test_entries_layout() {
        let secrets = MemorySecrets::default();
        let store = CredentialStore::new(secrets.clone());
        store.save(&credentials()).unwrap();
        assert_eq!(
            secrets.get(SERVICE_NAME, SERVICE_NAME).unwrap(),
            Some("tourist".to_string())
        );
        assert_eq!(
            secrets.get(SERVICE_NAME, "tourist").unwrap(),
            Some("hunter2".to_string())
        );
    }

    #[test]
    fn test_username_without_password() {
        let secrets = MemorySecrets::default();
        secrets.set(SERVICE_NAME, SERVICE_NAME, "tourist").unwrap();
        assert_eq!(CredentialStore::new(secrets).load().unwrap(), None);
    }

    #[test]
    fn test_unavailable_store() {
        let store = CredentialStore::new(BrokenSecrets);
        assert!(store.load().is_err());
        assert!(store.save(&credentials()).is_err());
        if Credentials::from_env().is_none() {
            assert_eq!(store.resolve(), None);
        }
    }

    #[test]
    fn test_credentials_from_env() {
        let env = |var: &str| match var {
            USERNAME_VAR => Some("tourist".to_string()),
            PASSWORD_VAR => Some("hunter2".to_string()),
            _ => None,
        };
        assert_eq!(credentials_from_env(env), Some(credentials()));
        let partial = |var: &str| (var == USERNAME_VAR).then(|| "tourist".to_string());
        assert_eq!(credentials_from_env(partial), None);
    }

    #[test]
    fn test_debug_hides_password() {
        let debug = format!("{:?}", credentials());
        assert!(!debug.contains("hunter2"));
    }
}
