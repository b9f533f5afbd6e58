use super::prelude::*;

/// A completed deletion.
///
/// The caller-facing [`message`](Self::message) names only the target;
/// the acting admin is kept in `deleted_by` and in the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedUser {
    pub target_id: AccountId,
    pub deleted_by: AccountId,
}

impl DeletedUser {
    pub fn message(&self) -> String {
        format!(
            "User {} successfully deleted from Authentication",
            self.target_id
        )
    }
}

/// Result of a single deletion invocation as reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionOutcome {
    Success { message: String },
    Failure { kind: FailureKind, message: String },
}

impl DeletionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { kind, .. } => Some(*kind),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success { message } | Self::Failure { message, .. } => message,
        }
    }
}

impl From<Result<DeletedUser>> for DeletionOutcome {
    fn from(res: Result<DeletedUser>) -> Self {
        match res {
            Ok(deleted) => Self::Success {
                message: deleted.message(),
            },
            Err(err) => Self::Failure {
                kind: err.kind(),
                message: err.to_string(),
            },
        }
    }
}

/// Deletes the identity of the requested target on behalf of an admin.
///
/// The checks run in a fixed order and the first failing one wins.
/// The identity provider is only contacted after the caller has
/// been authenticated and authorized.
pub fn delete_user<R, G>(
    profiles: &R,
    identities: &G,
    context: &InvocationContext,
    request: &DeletionRequest,
) -> Result<DeletedUser>
where
    R: ProfileRepo + ?Sized,
    G: IdentityGateway + ?Sized,
{
    let caller = context.caller().ok_or(Error::Unauthenticated)?;
    let target = request.target().ok_or(Error::MissingTargetId)?;
    super::authorize_admin_by_id(profiles, caller)?;
    identities.delete_identity(target)?;
    log::info!("User {target} deleted from Authentication by admin {caller}");
    Ok(DeletedUser {
        target_id: target.clone(),
        deleted_by: caller.clone(),
    })
}

pub fn handle_deletion<R, G>(
    profiles: &R,
    identities: &G,
    context: &InvocationContext,
    request: &DeletionRequest,
) -> DeletionOutcome
where
    R: ProfileRepo + ?Sized,
    G: IdentityGateway + ?Sized,
{
    let res = delete_user(profiles, identities, context, request);
    if let Err(err) = &res {
        match err.kind() {
            FailureKind::Internal => log::error!("Error deleting user: {err}"),
            kind => log::warn!(
                "Rejected deletion of {:?} requested by {:?} ({kind}): {err}",
                request.target_id,
                context.caller_id
            ),
        }
    }
    res.into()
}
