use desk_types::{AccountDetail, PublicAccount};

use crate::error::AccountError;

/// Stored account record. Only the store and the services see the hash.
#[derive(Clone, Debug, PartialEq)]
pub struct Account {
    pub id: u64,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
}

/// Account fields before the store assigns an id.
#[derive(Clone, Debug, PartialEq)]
pub struct NewAccount {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub is_staff: bool,
    pub is_superuser: bool,
}

impl Account {
    pub fn to_public(&self) -> PublicAccount {
        PublicAccount {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }

    pub fn to_detail(&self) -> AccountDetail {
        AccountDetail {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            is_active: self.is_active,
            is_staff: self.is_staff,
            is_superuser: self.is_superuser,
        }
    }

    /// Only active superusers may use the admin site.
    pub fn can_administer(&self) -> bool {
        self.is_active && self.is_superuser
    }

    pub fn ensure_admin(&self) -> Result<(), AccountError> {
        if self.can_administer() {
            Ok(())
        } else {
            Err(AccountError::Forbidden)
        }
    }
}
