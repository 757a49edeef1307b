use std::sync::Arc;

use desk_types::{AdminAccountUpdate, CreateAccountRequest, FieldErrors, UpdateProfileRequest};
use tracing::info;

use crate::account::{Account, NewAccount};
use crate::email::{is_valid_email, normalize_email};
use crate::error::{AccountError, StoreError};
use crate::password;
use crate::policy::AccountPolicy;
use crate::store::AccountStore;

pub const REQUIRED: &str = "This field is required.";
pub const INVALID_EMAIL: &str = "Enter a valid email address.";
pub const DUPLICATE_EMAIL: &str = "user with this email already exists.";
pub const PASSWORD_MISMATCH: &str = "The two password fields didn't match.";

fn too_long(limit: usize) -> String {
    format!("Ensure this field has no more than {limit} characters.")
}

fn too_short(limit: usize) -> String {
    format!("Ensure this field has at least {limit} characters.")
}

fn push_error(errors: &mut FieldErrors, field: &str, message: impl Into<String>) {
    errors.entry(field.to_string()).or_default().push(message.into());
}

/// Creation, lookup, credential checks and edits for accounts.
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn AccountStore>,
    policy: AccountPolicy,
}

impl AccountService {
    pub fn new(store: Arc<dyn AccountStore>, policy: AccountPolicy) -> Self {
        Self { store, policy }
    }

    /// Public signup: an active account with no admin privileges.
    pub async fn create_account(&self, request: CreateAccountRequest) -> Result<Account, AccountError> {
        self.create(request, false).await
    }

    pub async fn create_superuser(
        &self,
        request: CreateAccountRequest,
    ) -> Result<Account, AccountError> {
        self.create(request, true).await
    }

    /// Admin add form: `confirmation` must repeat the password.
    pub async fn create_confirmed(
        &self,
        request: CreateAccountRequest,
        confirmation: &str,
    ) -> Result<Account, AccountError> {
        if request.password.as_deref().unwrap_or_default() != confirmation {
            let mut errors = self.validate_new(&request).err().unwrap_or_default();
            push_error(&mut errors, "password2", PASSWORD_MISMATCH);
            return Err(AccountError::Validation(errors));
        }
        self.create(request, false).await
    }

    async fn create(
        &self,
        request: CreateAccountRequest,
        privileged: bool,
    ) -> Result<Account, AccountError> {
        let (email, rawPassword, name) =
            self.validate_new(&request).map_err(AccountError::Validation)?;

        if self.store.find_by_email(&email).await?.is_some() {
            return Err(AccountError::field("email", DUPLICATE_EMAIL));
        }

        let passwordHash = password::hash_password_blocking(rawPassword).await?;

        let account = self
            .store
            .create(NewAccount {
                email,
                name,
                password_hash: passwordHash,
                is_staff: privileged,
                is_superuser: privileged,
            })
            .await
            .map_err(duplicate_as_validation)?;

        info!(
            account_id = account.id,
            superuser = privileged,
            "account created"
        );
        Ok(account)
    }

    /// Checks every field and returns the cleaned email, password and name,
    /// or all problems at once.
    fn validate_new(
        &self,
        request: &CreateAccountRequest,
    ) -> Result<(String, String, String), FieldErrors> {
        let mut errors = FieldErrors::new();

        let email = self.clean_email(request.email.as_deref(), &mut errors);
        let rawPassword = self.clean_password(request.password.as_deref(), &mut errors);
        let name = self.clean_name(request.name.as_deref(), &mut errors);

        match (email, rawPassword) {
            (Some(email), Some(rawPassword)) if errors.is_empty() => Ok((email, rawPassword, name)),
            _ => Err(errors),
        }
    }

    fn clean_email(&self, raw: Option<&str>, errors: &mut FieldErrors) -> Option<String> {
        let trimmed = raw.map(str::trim).unwrap_or_default();
        if trimmed.is_empty() {
            push_error(errors, "email", REQUIRED);
            return None;
        }

        if trimmed.chars().count() > self.policy.max_email_length {
            push_error(errors, "email", too_long(self.policy.max_email_length));
            return None;
        }

        let email = normalize_email(trimmed);
        if !is_valid_email(&email) {
            push_error(errors, "email", INVALID_EMAIL);
            return None;
        }

        Some(email)
    }

    fn clean_password(&self, raw: Option<&str>, errors: &mut FieldErrors) -> Option<String> {
        // Surrounding whitespace does not count toward the rules; the hash keeps it.
        let rawPassword = raw.unwrap_or_default();
        let significant = rawPassword.trim();
        if significant.is_empty() {
            push_error(errors, "password", REQUIRED);
            return None;
        }

        if significant.chars().count() < self.policy.min_password_length {
            push_error(errors, "password", too_short(self.policy.min_password_length));
            return None;
        }

        Some(rawPassword.to_string())
    }

    fn clean_name(&self, raw: Option<&str>, errors: &mut FieldErrors) -> String {
        let name = raw.map(str::trim).unwrap_or_default();
        if name.chars().count() > self.policy.max_name_length {
            push_error(errors, "name", too_long(self.policy.max_name_length));
        }
        name.to_string()
    }

    pub async fn get(&self, id: u64) -> Result<Account, AccountError> {
        self.store.get(id).await?.ok_or(AccountError::NotFound(id))
    }

    pub async fn list(&self) -> Result<Vec<Account>, AccountError> {
        Ok(self.store.list().await?)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError> {
        Ok(self.store.find_by_email(&normalize_email(email)).await?)
    }

    /// `Some` only for an existing, active account whose password verifies.
    pub async fn authenticate(
        &self,
        email: &str,
        rawPassword: &str,
    ) -> Result<Option<Account>, AccountError> {
        let Some(account) = self.find_by_email(email).await? else {
            password::burn_verification(rawPassword.to_string()).await?;
            return Ok(None);
        };

        let verified = password::verify_password_blocking(
            rawPassword.to_string(),
            account.password_hash.clone(),
        )
        .await?;

        Ok((verified && account.is_active).then_some(account))
    }

    /// Self-service edit: name and/or password.
    pub async fn update_profile(
        &self,
        id: u64,
        request: UpdateProfileRequest,
    ) -> Result<Account, AccountError> {
        let mut account = self.get(id).await?;
        let mut errors = FieldErrors::new();

        let name = request
            .name
            .as_deref()
            .map(|raw| self.clean_name(Some(raw), &mut errors));
        let rawPassword = match request.password.as_deref() {
            Some(raw) => self.clean_password(Some(raw), &mut errors),
            None => None,
        };

        if !errors.is_empty() {
            return Err(AccountError::Validation(errors));
        }

        if let Some(name) = name {
            account.name = name;
        }
        if let Some(rawPassword) = rawPassword {
            account.password_hash = password::hash_password_blocking(rawPassword).await?;
        }

        let updated = self
            .store
            .update(account)
            .await
            .map_err(duplicate_as_validation)?;
        info!(account_id = updated.id, "profile updated");
        Ok(updated)
    }

    /// Admin change form: email, name and the three flags.
    pub async fn admin_update(
        &self,
        id: u64,
        update: AdminAccountUpdate,
    ) -> Result<Account, AccountError> {
        let mut account = self.get(id).await?;
        let mut errors = FieldErrors::new();

        let email = self.clean_email(Some(&update.email), &mut errors);
        let name = self.clean_name(Some(&update.name), &mut errors);

        let Some(email) = email.filter(|_| errors.is_empty()) else {
            return Err(AccountError::Validation(errors));
        };

        account.email = email;
        account.name = name;
        account.is_active = update.is_active;
        account.is_staff = update.is_staff;
        account.is_superuser = update.is_superuser;

        let updated = self
            .store
            .update(account)
            .await
            .map_err(duplicate_as_validation)?;
        info!(account_id = updated.id, "account changed from admin site");
        Ok(updated)
    }
}

fn duplicate_as_validation(error: StoreError) -> AccountError {
    match error {
        StoreError::DuplicateEmail(_) => AccountError::field("email", DUPLICATE_EMAIL),
        StoreError::NotFound(id) => AccountError::NotFound(id),
        other => AccountError::Store(other),
    }
}
