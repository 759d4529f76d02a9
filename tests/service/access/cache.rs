use entity::heimdall_affiliation_rule::{EntityKind, RuleType};
use heimdall_test_utils::prelude::*;

use heimdall::server::{
    model::access::EntityRef,
    service::{
        access::{cache::MemoryAccessCache, AccessService},
        user::user_character::UserCharacterService,
    },
};

/// A cached resolution is served until something invalidates it: a rule
/// inserted behind the service's back is not visible within the TTL
#[tokio::test]
async fn test_resolution_is_served_from_cache() -> Result<(), TestError> {
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

    let cache = MemoryAccessCache::new();
    let access_service = AccessService::new(&test.state.db, Some(&cache));

    let first = access_service.resolve(user.id, "fleet.read", None).await.unwrap();
    assert!(!first.contains(&EntityRef::corporation(10)));

    // Bypass the service: the new rule is not picked up while cached
    test.access()
        .insert_affiliation_rule(role.id, 10, EntityKind::Corporation, RuleType::Allowed)
        .await?;

    let cached = access_service.resolve(user.id, "fleet.read", None).await.unwrap();
    assert_eq!(cached, first);

    Ok(())
}

/// Declaring a rule through the service invalidates the owning role's cached
/// resolutions
#[tokio::test]
async fn test_add_rule_invalidates_role_resolutions() -> Result<(), TestError> {
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

    let cache = MemoryAccessCache::new();
    let access_service = AccessService::new(&test.state.db, Some(&cache));

    let before = access_service.resolve(user.id, "fleet.read", None).await.unwrap();
    assert!(!before.contains(&EntityRef::corporation(10)));

    access_service
        .add_rule(role.id, 10, EntityKind::Corporation, RuleType::Allowed)
        .await
        .unwrap();

    let after = access_service.resolve(user.id, "fleet.read", None).await.unwrap();
    assert!(after.contains(&EntityRef::corporation(10)));
    assert!(after.contains(&EntityRef::character(2)));

    Ok(())
}

/// Removing a rule through the service invalidates the owning role's cached
/// resolutions
#[tokio::test]
async fn test_remove_rule_invalidates_role_resolutions() -> Result<(), TestError> {
    let test = test_setup_with_access_tables!()?;
    let (user, _, _) = test
        .user()
        .insert_mock_user_with_character(1, 10, None)
        .await?;

    let role = test
        .access()
        .insert_role_with_permission("fleet-commanders", "fleet.read", user.id)
        .await?;
    let rule = test
        .access()
        .insert_affiliation_rule(role.id, 10, EntityKind::Corporation, RuleType::Allowed)
        .await?;

    let cache = MemoryAccessCache::new();
    let access_service = AccessService::new(&test.state.db, Some(&cache));

    let before = access_service.resolve(user.id, "fleet.read", None).await.unwrap();
    assert!(before.contains(&EntityRef::corporation(10)));

    let removed = access_service.remove_rule(rule.id).await.unwrap();
    assert!(removed.is_some());

    let after = access_service.resolve(user.id, "fleet.read", None).await.unwrap();
    assert!(!after.contains(&EntityRef::corporation(10)));

    Ok(())
}

/// Linking a character invalidates the user's cached resolutions, so the
/// fresh ownership shows up immediately
#[tokio::test]
async fn test_link_character_invalidates_user_resolutions() -> Result<(), TestError> {
    let test = test_setup_with_access_tables!()?;
    let (user, _, _) = test
        .user()
        .insert_mock_user_with_character(1, 10, None)
        .await?;
    let second_character = test.eve().insert_mock_character(2, 11, None).await?;

    let cache = MemoryAccessCache::new();
    let access_service = AccessService::new(&test.state.db, Some(&cache));

    let before = access_service.resolve(user.id, "fleet.read", None).await.unwrap();
    assert!(!before.contains(&EntityRef::character(2)));

    let user_character_service = UserCharacterService::new(&test.state.db, Some(&cache));
    let linked = user_character_service
        .link_character(user.id, second_character.character_id, "hash".to_string())
        .await
        .unwrap();
    assert!(linked);

    let after = access_service.resolve(user.id, "fleet.read", None).await.unwrap();
    assert!(after.contains(&EntityRef::character(2)));

    Ok(())
}
