use entity::heimdall_affiliation_rule::{EntityKind, RuleType};
use heimdall_test_utils::prelude::*;

use heimdall::server::{
    model::access::{AffiliationSet, EntityRef},
    service::access::{ownership::CorporationRoleFilter, AccessService, SUPERUSER_PERMISSION},
};

fn expected(entries: &[EntityRef]) -> AffiliationSet {
    entries.iter().copied().collect()
}

/// Role R grants "fleet.read" to a user owning character 1 in corporation 10;
/// character 2 is also in corporation 10. ALLOWED(corporation=10) resolves to
/// {1, 2, 10}; adding FORBIDDEN(character=2) drops 2 but keeps 10; owning
/// character 2 restores it despite the forbidden rule.
#[tokio::test]
async fn test_resolution_scenario_with_forbidden_and_ownership() -> Result<(), TestError> {
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
    let resolved = access_service.resolve(user.id, "fleet.read", None).await.unwrap();

    assert_eq!(
        resolved,
        expected(&[
            EntityRef::character(1),
            EntityRef::character(2),
            EntityRef::corporation(10),
        ])
    );

    // Forbid character 2: excluded since the user does not own it
    test.access()
        .insert_affiliation_rule(role.id, 2, EntityKind::Character, RuleType::Forbidden)
        .await?;

    let resolved = access_service.resolve(user.id, "fleet.read", None).await.unwrap();

    assert_eq!(
        resolved,
        expected(&[EntityRef::character(1), EntityRef::corporation(10)])
    );

    // Ownership of character 2 restores it despite the forbidden rule
    let second_character = test.eve().insert_mock_character(2, 10, None).await?;
    test.user()
        .insert_user_character_ownership(user.id, second_character.id)
        .await?;

    let resolved = access_service.resolve(user.id, "fleet.read", None).await.unwrap();

    assert_eq!(
        resolved,
        expected(&[
            EntityRef::character(1),
            EntityRef::character(2),
            EntityRef::corporation(10),
        ])
    );

    Ok(())
}

/// An owned entity survives a forbidden rule naming it directly
#[tokio::test]
async fn test_ownership_overrides_forbidden() -> Result<(), TestError> {
    let test = test_setup_with_access_tables!()?;
    let (user, _, _) = test
        .user()
        .insert_mock_user_with_character(1, 10, None)
        .await?;

    let role = test
        .access()
        .insert_role_with_permission("fleet-commanders", "fleet.read", user.id)
        .await?;
    test.access()
        .insert_affiliation_rule(role.id, 1, EntityKind::Character, RuleType::Forbidden)
        .await?;

    let access_service = AccessService::new(&test.state.db, None);
    let resolved = access_service.resolve(user.id, "fleet.read", None).await.unwrap();

    assert!(resolved.contains(&EntityRef::character(1)));

    Ok(())
}

/// A non-owned entity in both an allowed and a forbidden rule is excluded
#[tokio::test]
async fn test_forbidden_overrides_allowed_for_non_owned() -> Result<(), TestError> {
    let test = test_setup_with_access_tables!()?;
    let (user, _, _) = test
        .user()
        .insert_mock_user_with_character(1, 10, None)
        .await?;
    test.eve().insert_mock_character(2, 11, None).await?;

    let role = test
        .access()
        .insert_role_with_permission("fleet-commanders", "fleet.read", user.id)
        .await?;
    test.access()
        .insert_affiliation_rule(role.id, 2, EntityKind::Character, RuleType::Allowed)
        .await?;
    test.access()
        .insert_affiliation_rule(role.id, 2, EntityKind::Character, RuleType::Forbidden)
        .await?;

    let access_service = AccessService::new(&test.state.db, None);
    let resolved = access_service.resolve(user.id, "fleet.read", None).await.unwrap();

    assert!(!resolved.contains(&EntityRef::character(2)));
    assert!(resolved.contains(&EntityRef::character(1)));

    Ok(())
}

/// An allowed alliance rule grants every character and corporation under the
/// alliance plus the alliance itself
#[tokio::test]
async fn test_allowed_alliance_hierarchy_expansion() -> Result<(), TestError> {
    let test = test_setup_with_access_tables!()?;
    let (user, _, _) = test
        .user()
        .insert_mock_user_with_character(1, 10, Some(99))
        .await?;
    test.eve().insert_mock_character(2, 11, Some(99)).await?;
    test.eve().insert_mock_character(3, 12, None).await?;

    let role = test
        .access()
        .insert_role_with_permission("fleet-commanders", "fleet.read", user.id)
        .await?;
    test.access()
        .insert_affiliation_rule(role.id, 99, EntityKind::Alliance, RuleType::Allowed)
        .await?;

    let access_service = AccessService::new(&test.state.db, None);
    let resolved = access_service.resolve(user.id, "fleet.read", None).await.unwrap();

    assert_eq!(
        resolved,
        expected(&[
            EntityRef::character(1),
            EntityRef::character(2),
            EntityRef::corporation(10),
            EntityRef::corporation(11),
            EntityRef::alliance(99),
        ])
    );

    Ok(())
}

/// An inverse character rule grants every other known character; id-spaces
/// without inverse rules contribute nothing
#[tokio::test]
async fn test_inverse_character_rule_resolution() -> Result<(), TestError> {
    let test = test_setup_with_access_tables!()?;
    let (user, _, _) = test
        .user()
        .insert_mock_user_with_character(1, 10, None)
        .await?;
    test.eve().insert_mock_character(2, 10, None).await?;
    test.eve().insert_mock_character(3, 11, None).await?;

    let role = test
        .access()
        .insert_role_with_permission("fleet-commanders", "fleet.read", user.id)
        .await?;
    test.access()
        .insert_affiliation_rule(role.id, 3, EntityKind::Character, RuleType::Inverse)
        .await?;

    let access_service = AccessService::new(&test.state.db, None);
    let resolved = access_service.resolve(user.id, "fleet.read", None).await.unwrap();

    // Characters 1 (owned and not inverted) and 2; character 3 is the
    // inverted target, and no corporation-kind rule exists so corporations
    // stay empty
    assert_eq!(
        resolved,
        expected(&[EntityRef::character(1), EntityRef::character(2)])
    );

    Ok(())
}

/// Resolution over unchanged data yields the identical set
#[tokio::test]
async fn test_resolution_is_idempotent() -> Result<(), TestError> {
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

    let access_service = AccessService::new(&test.state.db, None);
    let first = access_service.resolve(user.id, "fleet.read", None).await.unwrap();
    let second = access_service.resolve(user.id, "fleet.read", None).await.unwrap();

    assert_eq!(first, second);

    Ok(())
}

/// A superuser resolves to every known character and corporation, rules
/// ignored
#[tokio::test]
async fn test_superuser_resolves_to_universe() -> Result<(), TestError> {
    let test = test_setup_with_access_tables!()?;
    let (user, _, _) = test
        .user()
        .insert_mock_user_with_character(1, 10, None)
        .await?;
    test.eve().insert_mock_character(2, 11, Some(99)).await?;

    let role = test
        .access()
        .insert_role_with_permission("admins", SUPERUSER_PERMISSION, user.id)
        .await?;
    // A forbidden rule that would otherwise exclude character 2
    test.access()
        .insert_affiliation_rule(role.id, 2, EntityKind::Character, RuleType::Forbidden)
        .await?;

    let access_service = AccessService::new(&test.state.db, None);
    let resolved = access_service.resolve(user.id, "fleet.read", None).await.unwrap();

    assert_eq!(
        resolved,
        expected(&[
            EntityRef::character(1),
            EntityRef::character(2),
            EntityRef::corporation(10),
            EntityRef::corporation(11),
        ])
    );

    Ok(())
}

/// A permission no held role grants resolves to the owned set only
#[tokio::test]
async fn test_unknown_permission_fails_closed() -> Result<(), TestError> {
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
    let resolved = access_service
        .resolve(user.id, "unknown.permission", None)
        .await
        .unwrap();

    assert_eq!(resolved, expected(&[EntityRef::character(1)]));

    Ok(())
}

/// With a corporate-role filter, owned corporations join the set when an
/// owned character holds "Director" or a filter role
#[tokio::test]
async fn test_corporation_role_filter_extends_ownership() -> Result<(), TestError> {
    let test = test_setup_with_access_tables!()?;
    let (user, _, main_character) = test
        .user()
        .insert_mock_user_with_character(1, 10, None)
        .await?;
    let (_, alt_character) = test
        .user()
        .insert_mock_character_owned_by_user(user.id, 2, 11, None)
        .await?;
    let (_, third_character) = test
        .user()
        .insert_mock_character_owned_by_user(user.id, 3, 12, None)
        .await?;

    test.eve()
        .insert_corporation_role(main_character.id, "Director")
        .await?;
    test.eve()
        .insert_corporation_role(alt_character.id, "Accountant")
        .await?;
    test.eve()
        .insert_corporation_role(third_character.id, "Personnel Manager")
        .await?;

    let access_service = AccessService::new(&test.state.db, None);

    // Without a filter only characters are owned
    let resolved = access_service.resolve(user.id, "fleet.read", None).await.unwrap();
    assert_eq!(
        resolved,
        expected(&[
            EntityRef::character(1),
            EntityRef::character(2),
            EntityRef::character(3),
        ])
    );

    // With a filter, Director qualifies corp 10 implicitly and Accountant
    // qualifies corp 11; Personnel Manager does not match
    let filter = CorporationRoleFilter::parse("Accountant");
    let resolved = access_service
        .resolve(user.id, "fleet.read", Some(&filter))
        .await
        .unwrap();

    assert_eq!(
        resolved,
        expected(&[
            EntityRef::character(1),
            EntityRef::character(2),
            EntityRef::character(3),
            EntityRef::corporation(10),
            EntityRef::corporation(11),
        ])
    );

    Ok(())
}
