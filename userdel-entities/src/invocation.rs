use crate::account::AccountId;

/// What the invocation transport established about the caller
/// before any deletion logic runs.
///
/// An absent `caller_id` means the credential was missing or did not verify.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationContext {
    pub caller_id: Option<AccountId>,
}

impl InvocationContext {
    pub fn authenticated(caller_id: impl Into<AccountId>) -> Self {
        Self {
            caller_id: Some(caller_id.into()),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    /// The verified caller, if any. Blank ids count as absent.
    pub fn caller(&self) -> Option<&AccountId> {
        self.caller_id.as_ref().filter(|id| id.is_valid())
    }
}

/// Payload of a deletion invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionRequest {
    pub target_id: Option<AccountId>,
}

impl DeletionRequest {
    pub fn new(target_id: impl Into<AccountId>) -> Self {
        Self {
            target_id: Some(target_id.into()),
        }
    }

    pub fn target(&self) -> Option<&AccountId> {
        self.target_id.as_ref().filter(|id| id.is_valid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_caller_is_treated_as_anonymous() {
        assert!(InvocationContext::authenticated("").caller().is_none());
        assert!(InvocationContext::anonymous().caller().is_none());
        assert_eq!(
            InvocationContext::authenticated("admin-1")
                .caller()
                .map(AccountId::as_str),
            Some("admin-1")
        );
    }

    #[test]
    fn blank_target_is_treated_as_missing() {
        assert!(DeletionRequest::new("").target().is_none());
        assert!(DeletionRequest::default().target().is_none());
    }
}
