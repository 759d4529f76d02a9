use entity::heimdall_affiliation_rule::{EntityKind, RuleType};
use heimdall_test_utils::prelude::*;

use heimdall::server::{
    model::access::EntityRef,
    service::access::{AccessService, SUPERUSER_PERMISSION},
};

/// Every requested entity covered by the resolved set authorizes the batch
#[tokio::test]
async fn test_authorize_full_coverage() -> Result<(), TestError> {
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

    let access_service = AccessService::new(&test.state.db, None);
    let authorized = access_service
        .authorize(
            user.id,
            "fleet.read",
            None,
            &[
                EntityRef::character(1),
                EntityRef::character(2),
                EntityRef::corporation(10),
            ],
        )
        .await
        .unwrap();

    assert!(authorized);

    Ok(())
}

/// One invalid entity denies the whole batch even though the rest would pass
#[tokio::test]
async fn test_authorize_partial_coverage_denied() -> Result<(), TestError> {
    let test = test_setup_with_access_tables!()?;
    let (user, _, _) = test
        .user()
        .insert_mock_user_with_character(1, 10, None)
        .await?;
    test.eve().insert_mock_character(2, 11, None).await?;

    test.access()
        .insert_role_with_permission("fleet-commanders", "fleet.read", user.id)
        .await?;

    let access_service = AccessService::new(&test.state.db, None);

    // Character 1 alone passes through ownership
    let authorized = access_service
        .authorize(user.id, "fleet.read", None, &[EntityRef::character(1)])
        .await
        .unwrap();
    assert!(authorized);

    // Adding the uncovered character 2 denies the batch
    let authorized = access_service
        .authorize(
            user.id,
            "fleet.read",
            None,
            &[EntityRef::character(1), EntityRef::character(2)],
        )
        .await
        .unwrap();
    assert!(!authorized);

    Ok(())
}

/// A superuser is authorized before resolution, including for alliance IDs
/// outside the universal set
#[tokio::test]
async fn test_authorize_superuser_short_circuits() -> Result<(), TestError> {
    let test = test_setup_with_access_tables!()?;
    let (user, _, _) = test
        .user()
        .insert_mock_user_with_character(1, 10, Some(99))
        .await?;

    test.access()
        .insert_role_with_permission("admins", SUPERUSER_PERMISSION, user.id)
        .await?;

    let access_service = AccessService::new(&test.state.db, None);
    let authorized = access_service
        .authorize(
            user.id,
            "any.permission",
            None,
            &[
                EntityRef::character(404),
                EntityRef::corporation(404),
                EntityRef::alliance(99),
            ],
        )
        .await
        .unwrap();

    assert!(authorized);

    Ok(())
}

/// Deny is a value: a user with no grants gets Ok(false), not an error
#[tokio::test]
async fn test_authorize_denial_is_not_an_error() -> Result<(), TestError> {
    let test = test_setup_with_access_tables!()?;
    let (user, _, _) = test
        .user()
        .insert_mock_user_with_character(1, 10, None)
        .await?;
    test.eve().insert_mock_character(2, 11, None).await?;

    let access_service = AccessService::new(&test.state.db, None);
    let result = access_service
        .authorize(user.id, "fleet.read", None, &[EntityRef::character(2)])
        .await;

    assert!(result.is_ok());
    assert!(!result.unwrap());

    Ok(())
}
