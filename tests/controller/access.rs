use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::heimdall_affiliation_rule::{EntityKind, RuleType};
use heimdall_test_utils::prelude::*;

use heimdall::{
    model::access::{AffiliationCheckDto, AffiliationQueryDto},
    server::{
        controller::access::{check_affiliation, get_affiliated_ids},
        model::{app::AppState, auth::CurrentUser},
    },
};

fn check_payload(character_ids: Option<Vec<i64>>) -> AffiliationCheckDto {
    AffiliationCheckDto {
        character_ids,
        corporation_ids: None,
        alliance_ids: None,
        corporation_roles: None,
    }
}

/// Expect 200 when every requested entity is covered
#[tokio::test]
async fn returns_success_for_covered_entities() -> Result<(), TestError> {
    let test = test_setup_with_access_tables!()?;
    let (user, _, _) = test
        .user()
        .insert_mock_user_with_character(1, 10, None)
        .await?;
    test.eve().insert_mock_character(2, 10, None).await?;

    let role = test
        .access()
        .insert_role_with_permission("fleet-commanders", "fleet.read", user.id)
        .await?;
    test.access()
        .insert_affiliation_rule(role.id, 10, EntityKind::Corporation, RuleType::Allowed)
        .await?;

    let app_state: AppState = test.app_state();
    let result = check_affiliation(
        State(app_state),
        CurrentUser { user_id: user.id },
        Path("fleet.read".to_string()),
        Json(check_payload(Some(vec![1, 2]))),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 403 when any requested entity falls outside the resolved set
#[tokio::test]
async fn returns_forbidden_for_uncovered_entity() -> Result<(), TestError> {
    let test = test_setup_with_access_tables!()?;
    let (user, _, _) = test
        .user()
        .insert_mock_user_with_character(1, 10, None)
        .await?;
    test.eve().insert_mock_character(2, 11, None).await?;

    let app_state: AppState = test.app_state();
    let result = check_affiliation(
        State(app_state),
        CurrentUser { user_id: user.id },
        Path("fleet.read".to_string()),
        Json(check_payload(Some(vec![1, 2]))),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 400 when no id field is supplied at all
#[tokio::test]
async fn returns_bad_request_for_missing_id_fields() -> Result<(), TestError> {
    let test = test_setup_with_access_tables!()?;
    let (user, _, _) = test
        .user()
        .insert_mock_user_with_character(1, 10, None)
        .await?;

    let app_state: AppState = test.app_state();
    let result = check_affiliation(
        State(app_state),
        CurrentUser { user_id: user.id },
        Path("fleet.read".to_string()),
        Json(check_payload(None)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 when id fields are present but carry zero IDs
#[tokio::test]
async fn returns_bad_request_for_empty_id_lists() -> Result<(), TestError> {
    let test = test_setup_with_access_tables!()?;
    let (user, _, _) = test
        .user()
        .insert_mock_user_with_character(1, 10, None)
        .await?;

    let app_state: AppState = test.app_state();
    let result = check_affiliation(
        State(app_state),
        CurrentUser { user_id: user.id },
        Path("fleet.read".to_string()),
        Json(check_payload(Some(Vec::new()))),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 500 when required database tables do not exist
#[tokio::test]
async fn error_when_required_tables_dont_exist() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let app_state: AppState = test.app_state();
    let result = check_affiliation(
        State(app_state),
        CurrentUser { user_id: 1 },
        Path("fleet.read".to_string()),
        Json(check_payload(Some(vec![1]))),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

/// Expect the affiliated endpoint to return the resolved ids per id-space
#[tokio::test]
async fn returns_resolved_ids_for_listing() -> Result<(), TestError> {
    let test = test_setup_with_access_tables!()?;
    let (user, _, _) = test
        .user()
        .insert_mock_user_with_character(1, 10, Some(99))
        .await?;
    test.eve().insert_mock_character(2, 11, Some(99)).await?;

    let role = test
        .access()
        .insert_role_with_permission("fleet-commanders", "fleet.read", user.id)
        .await?;
    test.access()
        .insert_affiliation_rule(role.id, 99, EntityKind::Alliance, RuleType::Allowed)
        .await?;

    let app_state: AppState = test.app_state();
    let result = get_affiliated_ids(
        State(app_state),
        CurrentUser { user_id: user.id },
        Path("fleet.read".to_string()),
        Json(AffiliationQueryDto {
            corporation_roles: None,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let dto: heimdall::model::access::AffiliatedIdsDto = serde_json::from_slice(&body).unwrap();

    assert_eq!(dto.character_ids, vec![1, 2]);
    assert_eq!(dto.corporation_ids, vec![10, 11]);
    assert_eq!(dto.alliance_ids, vec![99]);

    Ok(())
}
