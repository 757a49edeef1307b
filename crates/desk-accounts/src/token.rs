use std::sync::Arc;

use desk_types::{FieldErrors, TokenRequest};
use rand::{rngs::OsRng, RngCore};
use tracing::{info, warn};

use crate::account::Account;
use crate::error::AccountError;
use crate::policy::TokenPolicy;
use crate::service::{AccountService, REQUIRED};
use crate::store::TokenStore;

pub const INVALID_CREDENTIALS: &str = "Unable to authenticate with provided credentials";

/// Random bytes rendered as lowercase hex.
pub fn generate_key(lengthBytes: usize) -> String {
    let mut bytes = vec![0u8; lengthBytes.max(1)];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[derive(Clone)]
pub struct TokenService {
    accounts: AccountService,
    tokens: Arc<dyn TokenStore>,
    policy: TokenPolicy,
}

impl TokenService {
    pub fn new(accounts: AccountService, tokens: Arc<dyn TokenStore>, policy: TokenPolicy) -> Self {
        Self {
            accounts,
            tokens,
            policy,
        }
    }

    /// Exchanges email and password for the account's API token.
    pub async fn issue_token(&self, request: TokenRequest) -> Result<String, AccountError> {
        let mut errors = FieldErrors::new();

        let email = request
            .email
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty());
        let rawPassword = request.password.as_deref().filter(|p| !p.is_empty());

        if email.is_none() {
            errors.insert("email".into(), vec![REQUIRED.into()]);
        }
        if rawPassword.is_none() {
            errors.insert("password".into(), vec![REQUIRED.into()]);
        }

        let (Some(email), Some(rawPassword)) = (email, rawPassword) else {
            return Err(AccountError::Authentication(errors));
        };

        let Some(account) = self.accounts.authenticate(email, rawPassword).await? else {
            warn!("token request rejected: bad credentials");
            return Err(AccountError::credentials(INVALID_CREDENTIALS));
        };

        let candidate = generate_key(self.policy.length_bytes);
        let token = self.tokens.get_or_insert_token(account.id, candidate).await?;

        info!(account_id = account.id, "token issued");
        Ok(token)
    }

    /// Resolves a presented token to its active owner.
    pub async fn account_for_token(&self, token: &str) -> Result<Account, AccountError> {
        let Some(accountId) = self.tokens.token_owner(token).await? else {
            return Err(AccountError::Unauthenticated);
        };

        match self.accounts.get(accountId).await {
            Ok(account) if account.is_active => Ok(account),
            Ok(_) | Err(AccountError::NotFound(_)) => Err(AccountError::Unauthenticated),
            Err(e) => Err(e),
        }
    }
}
