pub use userdel_boundary::*;

pub mod from_json {
    use super::*;
    use userdel_core::entities::DeletionRequest;

    pub fn deletion_request(from: DeleteUser) -> DeletionRequest {
        let DeleteUser { uid } = from;
        DeletionRequest {
            target_id: uid.map(Into::into),
        }
    }
}

pub mod to_json {
    use super::*;
    use userdel_core::usecases::FailureKind;

    pub fn error_status(kind: FailureKind) -> ErrorStatus {
        match kind {
            FailureKind::Unauthenticated => ErrorStatus::Unauthenticated,
            FailureKind::InvalidArgument => ErrorStatus::InvalidArgument,
            FailureKind::PermissionDenied => ErrorStatus::PermissionDenied,
            FailureKind::NotFound => ErrorStatus::NotFound,
            FailureKind::Internal => ErrorStatus::Internal,
        }
    }

    pub fn delete_user_result(message: String) -> CallableResult<DeleteUserResult> {
        CallableResult {
            result: DeleteUserResult {
                success: true,
                message,
            },
        }
    }
}
