use std::{borrow::Borrow, fmt, str::FromStr};

use thiserror::Error;

/// Opaque account identifier as issued by the identity provider.
///
/// The same identifier keys the profile document of an account.
#[derive(Default, Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct AccountId(String);

impl AccountId {
    pub fn is_valid(&self) -> bool {
        !self.0.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for AccountId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for AccountId {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for AccountId {
    fn from(from: &str) -> Self {
        from.to_owned().into()
    }
}

impl From<AccountId> for String {
    fn from(from: AccountId) -> Self {
        from.0
    }
}

#[derive(Debug, Error)]
#[error("empty account id")]
pub struct EmptyAccountId;

impl FromStr for AccountId {
    type Err = EmptyAccountId;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = Self::from(s);
        if !id.is_valid() {
            return Err(EmptyAccountId);
        }
        Ok(id)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authorization record of an account.
///
/// Profiles are owned by the profile store and only ever read here.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id       : AccountId,
    pub is_admin : bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_ids_are_invalid() {
        assert!(!AccountId::from("").is_valid());
        assert!(!AccountId::from("  ").is_valid());
        assert!(AccountId::from("user-42").is_valid());
    }

    #[test]
    fn parse_rejects_empty_ids() {
        assert!("".parse::<AccountId>().is_err());
        assert_eq!(
            "admin-1".parse::<AccountId>().unwrap().as_str(),
            "admin-1"
        );
    }
}
