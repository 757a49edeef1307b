use std::sync::Arc;

use tracing::{info, warn};

use crate::account::Account;
use crate::error::AccountError;
use crate::service::AccountService;
use crate::store::SessionStore;
use crate::token::generate_key;

pub const ADMIN_LOGIN_FAILED: &str =
    "Please enter the correct email and password for a superuser account.";

const SESSION_KEY_BYTES: usize = 32;

/// Cookie sessions for the admin site.
#[derive(Clone)]
pub struct SessionService {
    accounts: AccountService,
    sessions: Arc<dyn SessionStore>,
}

impl SessionService {
    pub fn new(accounts: AccountService, sessions: Arc<dyn SessionStore>) -> Self {
        Self { accounts, sessions }
    }

    /// Opens a session for an active superuser and returns its key.
    pub async fn login(
        &self,
        email: &str,
        rawPassword: &str,
    ) -> Result<(String, Account), AccountError> {
        let account = match self.accounts.authenticate(email, rawPassword).await? {
            Some(account) if account.can_administer() => account,
            _ => {
                warn!("admin login rejected");
                return Err(AccountError::credentials(ADMIN_LOGIN_FAILED));
            }
        };

        let key = generate_key(SESSION_KEY_BYTES);
        self.sessions.open_session(key.clone(), account.id).await?;

        info!(account_id = account.id, "admin session opened");
        Ok((key, account))
    }

    /// The session's account if it still exists and is active. Privileges are
    /// left for the caller to check.
    pub async fn account_for_session(&self, key: &str) -> Result<Option<Account>, AccountError> {
        let Some(accountId) = self.sessions.session_owner(key).await? else {
            return Ok(None);
        };

        match self.accounts.get(accountId).await {
            Ok(account) if account.is_active => Ok(Some(account)),
            Ok(_) | Err(AccountError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn logout(&self, key: &str) -> Result<(), AccountError> {
        self.sessions.close_session(key).await?;
        Ok(())
    }
}
