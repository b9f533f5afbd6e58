use std::sync::Arc;

use anyhow::anyhow;
use rocket::tokio::task::spawn_blocking;
use userdel_core::{entities::DeletionRequest, usecases::DeletionOutcome};

use super::*;

/// Callable endpoint that deletes the identity of `data.uid`.
///
/// The payload is only inspected after the caller has been authenticated,
/// so a malformed body counts as a missing `uid`.
#[post("/deleteUser", data = "<data>")]
pub async fn post_delete_user(
    caller: Caller,
    profiles: &State<Profiles>,
    identities: &State<Identities>,
    data: JsonResult<'_, json::CallableRequest<json::DeleteUser>>,
) -> Result<json::CallableResult<json::DeleteUserResult>> {
    let request = match data {
        Ok(data) => from_json::deletion_request(data.into_inner().data),
        Err(err) => {
            debug!("Unable to parse deletion request: {err}");
            DeletionRequest::default()
        }
    };
    let Caller(context) = caller;
    let profiles = Arc::clone(&profiles.0);
    let identities = Arc::clone(&identities.0);
    let outcome = spawn_blocking(move || {
        usecases::handle_deletion(&*profiles, &*identities, &context, &request)
    })
    .await
    .map_err(|err| anyhow!("Deletion task failed: {err}"))?;
    match outcome {
        DeletionOutcome::Success { message } => Ok(Json(to_json::delete_user_result(message))),
        DeletionOutcome::Failure { kind, message } => Err(ApiError::Failure { kind, message }),
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn admin_deletes_user() {
        let fixture = Fixture::new();
        let res = fixture.delete_user(Some("admin-1"), r#"{"data":{"uid":"user-42"}}"#);
        assert_eq!(res.status(), Status::Ok);
        test_json(&res);
        let body: CallableResult<DeleteUserResult> = res.into_json().unwrap();
        assert!(body.result.success);
        assert!(body
            .result
            .message
            .contains("user-42 successfully deleted from Authentication"));
        assert_eq!(fixture.identities.deletions(), vec!["user-42".to_string()]);
        assert!(!fixture.identities.contains("user-42"));
    }

    #[test]
    fn anonymous_callers_are_unauthenticated() {
        let fixture = Fixture::new();
        for body in [r#"{"data":{"uid":"user-42"}}"#, r#"{"data":{}}"#, "garbage"] {
            let res = fixture.delete_user(None, body);
            assert_error(res, Status::Unauthorized, ErrorStatus::Unauthenticated);
        }
        assert!(fixture.identities.deletions().is_empty());
    }

    #[test]
    fn invalid_tokens_are_unauthenticated() {
        let fixture = Fixture::new();
        let res = fixture
            .client
            .post("/api/deleteUser")
            .header(ContentType::JSON)
            .header(Header::new("Authorization", "Bearer dubidubidu"))
            .body(r#"{"data":{"uid":"user-42"}}"#)
            .dispatch();
        assert_error(res, Status::Unauthorized, ErrorStatus::Unauthenticated);
        assert!(fixture.identities.deletions().is_empty());
    }

    #[test]
    fn missing_uid_is_an_invalid_argument() {
        let fixture = Fixture::new();
        for body in [
            r#"{"data":{}}"#,
            r#"{"data":{"uid":""}}"#,
            r#"{"data":{"uid":"   "}}"#,
            r#"{"data":{"uid":42}}"#,
            "",
        ] {
            let res = fixture.delete_user(Some("admin-1"), body);
            assert_error(res, Status::BadRequest, ErrorStatus::InvalidArgument);
        }
        assert!(fixture.identities.deletions().is_empty());
    }

    #[test]
    fn non_admins_are_denied() {
        let fixture = Fixture::new();
        let res = fixture.delete_user(Some("user-2"), r#"{"data":{"uid":"user-42"}}"#);
        let err = assert_error(res, Status::Forbidden, ErrorStatus::PermissionDenied);
        assert_eq!(err.message, "Only admins can delete users");

        let res = fixture.delete_user(Some("ghost"), r#"{"data":{"uid":"user-42"}}"#);
        let err = assert_error(res, Status::Forbidden, ErrorStatus::PermissionDenied);
        assert_eq!(err.message, "Caller account not found");

        assert!(fixture.identities.deletions().is_empty());
        assert!(fixture.identities.contains("user-42"));
    }

    #[test]
    fn unknown_target_is_not_found() {
        let fixture = Fixture::new();
        let res = fixture.delete_user(Some("admin-1"), r#"{"data":{"uid":"nobody"}}"#);
        assert_error(res, Status::NotFound, ErrorStatus::NotFound);
    }

    #[test]
    fn second_deletion_is_not_found() {
        let fixture = Fixture::new();
        let body = r#"{"data":{"uid":"user-42"}}"#;
        assert_eq!(fixture.delete_user(Some("admin-1"), body).status(), Status::Ok);
        let res = fixture.delete_user(Some("admin-1"), body);
        assert_error(res, Status::NotFound, ErrorStatus::NotFound);
    }

    #[test]
    fn provider_failures_are_internal() {
        let fixture = Fixture::new();
        fixture.identities.fail_with("QUOTA_EXCEEDED");
        let res = fixture.delete_user(Some("admin-1"), r#"{"data":{"uid":"user-42"}}"#);
        let err = assert_error(res, Status::InternalServerError, ErrorStatus::Internal);
        assert!(err.message.contains("QUOTA_EXCEEDED"));
    }
}
