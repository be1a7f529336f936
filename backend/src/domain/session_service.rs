use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use shared::{LoginRequest, LoginResponse, SessionStatus};
use tracing::info;

use super::form_validation::FormValidationError;
use crate::storage::SessionRepository;

/// Password accepted by the built-in verifier unless configured otherwise
pub const DEFAULT_PASSWORD: &str = "admin";

/// Outcome of checking a username/password pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    Authenticated,
    Rejected,
}

/// Credential check behind the login form.
///
/// The dashboard ships with [`StaticPasswordVerifier`]; a deployment that
/// needs real accounts plugs in its own implementation.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, username: &str, password: &str) -> Result<Verification>;
}

/// Accepts any username together with one fixed password
pub struct StaticPasswordVerifier {
    password: String,
}

impl StaticPasswordVerifier {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }
}

impl Default for StaticPasswordVerifier {
    fn default() -> Self {
        Self::new(DEFAULT_PASSWORD)
    }
}

#[async_trait]
impl CredentialVerifier for StaticPasswordVerifier {
    async fn verify(&self, _username: &str, password: &str) -> Result<Verification> {
        if password == self.password {
            Ok(Verification::Authenticated)
        } else {
            Ok(Verification::Rejected)
        }
    }
}

/// Service for the login flag and display name
#[derive(Clone)]
pub struct SessionService {
    repository: SessionRepository,
    verifier: Arc<dyn CredentialVerifier>,
    login_delay: Duration,
}

impl SessionService {
    pub fn new(
        repository: SessionRepository,
        verifier: Arc<dyn CredentialVerifier>,
        login_delay: Duration,
    ) -> Self {
        Self {
            repository,
            verifier,
            login_delay,
        }
    }

    /// Check credentials and, on success, store the session.
    ///
    /// Empty username or password fails validation before the verifier is
    /// asked. A rejected password is not an error: it comes back as an
    /// unsuccessful [`LoginResponse`] and the stored session is untouched.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse> {
        if request.username.is_empty() || request.password.is_empty() {
            return Err(FormValidationError::MissingCredentials.into());
        }

        info!("Login attempt for '{}'", request.username);

        if !self.login_delay.is_zero() {
            tokio::time::sleep(self.login_delay).await;
        }

        match self.verifier.verify(&request.username, &request.password).await? {
            Verification::Authenticated => {
                self.repository.store_login(&request.username)?;
                info!("Login successful for '{}'", request.username);
                Ok(LoginResponse {
                    success: true,
                    message: format!("Welcome, {}!", request.username),
                })
            }
            Verification::Rejected => {
                info!("Login rejected for '{}'", request.username);
                Ok(LoginResponse {
                    success: false,
                    message: "Invalid credentials.".to_string(),
                })
            }
        }
    }

    pub fn logout(&self) -> Result<()> {
        self.repository.clear()?;
        info!("Logged out");
        Ok(())
    }

    pub fn is_logged_in(&self) -> Result<bool> {
        self.repository.is_logged_in()
    }

    pub fn status(&self) -> Result<SessionStatus> {
        let logged_in = self.repository.is_logged_in()?;
        let username = if logged_in {
            self.repository.username()?
        } else {
            None
        };
        Ok(SessionStatus { logged_in, username })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryLocalStorage;

    fn setup_test() -> SessionService {
        let repository = SessionRepository::new(Arc::new(MemoryLocalStorage::new()));
        SessionService::new(
            repository,
            Arc::new(StaticPasswordVerifier::default()),
            Duration::ZERO,
        )
    }

    fn login_request(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_with_admin_password() {
        let service = setup_test();

        let response = service.login(login_request("alice", "admin")).await.unwrap();
        assert!(response.success);
        assert!(response.message.contains("alice"));

        let status = service.status().unwrap();
        assert!(status.logged_in);
        assert_eq!(status.username.as_deref(), Some("alice"));
    }

    #[tokio::test]
    async fn test_wrong_password_keeps_session_unset() {
        let service = setup_test();

        let response = service.login(login_request("alice", "wrong")).await.unwrap();
        assert!(!response.success);

        assert!(!service.is_logged_in().unwrap());
        assert_eq!(service.status().unwrap(), SessionStatus::default());
    }

    #[tokio::test]
    async fn test_empty_fields_fail_validation() {
        let service = setup_test();

        for (username, password) in [("", "admin"), ("alice", ""), ("", "")] {
            let err = service
                .login(login_request(username, password))
                .await
                .unwrap_err();
            assert!(matches!(
                err.downcast_ref::<FormValidationError>(),
                Some(FormValidationError::MissingCredentials)
            ));
        }
        assert!(!service.is_logged_in().unwrap());
    }

    #[tokio::test]
    async fn test_logout_clears_flag_and_name() {
        let service = setup_test();
        service.login(login_request("alice", "admin")).await.unwrap();

        service.logout().unwrap();

        assert_eq!(service.status().unwrap(), SessionStatus::default());
    }

    #[tokio::test]
    async fn test_custom_verifier() {
        struct OnlyBob;

        #[async_trait]
        impl CredentialVerifier for OnlyBob {
            async fn verify(&self, username: &str, _password: &str) -> Result<Verification> {
                Ok(if username == "bob" {
                    Verification::Authenticated
                } else {
                    Verification::Rejected
                })
            }
        }

        let service = SessionService::new(
            SessionRepository::new(Arc::new(MemoryLocalStorage::new())),
            Arc::new(OnlyBob),
            Duration::ZERO,
        );

        assert!(!service.login(login_request("alice", "admin")).await.unwrap().success);
        assert!(service.login(login_request("bob", "anything")).await.unwrap().success);
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_waits_for_delay() {
        let service = SessionService::new(
            SessionRepository::new(Arc::new(MemoryLocalStorage::new())),
            Arc::new(StaticPasswordVerifier::default()),
            Duration::from_millis(1000),
        );

        let started = tokio::time::Instant::now();
        service.login(login_request("alice", "admin")).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }
}
