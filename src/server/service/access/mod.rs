//! Affiliation resolution: the authorization core.
//!
//! [`AccessService::resolve`] computes the full set of entity IDs a user may
//! act upon for one permission, combining direct ownership with role-declared
//! affiliation rules. Precedence is fixed: ownership beats forbidden, which
//! beats allowed and inverse grants; allowed and inverse combine by union.
//! Every resolution reads a fresh snapshot and is free of shared mutable
//! state, so resolutions for different requests run concurrently without
//! coordination.

pub mod cache;
pub mod evaluator;
pub mod gate;
pub mod hierarchy;
pub mod ownership;

use entity::heimdall_affiliation_rule::{EntityKind, RuleType};
use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::{
    model::access::AffiliatedIdsDto,
    server::{
        data::access::{affiliation_rule::AffiliationRuleRepository, role::RoleRepository},
        error::Error,
        model::access::{AffiliationSet, EntityRef, RuleSets},
        service::access::{
            cache::{
                affiliation_cache_key, role_cache_tag, user_cache_tag, AccessCache,
                ACCESS_CACHE_TTL_SECONDS,
            },
            hierarchy::AffiliationIndex,
            ownership::CorporationRoleFilter,
        },
    },
};

/// Permission that bypasses affiliation resolution entirely.
pub static SUPERUSER_PERMISSION: &str = "superuser";

pub struct AccessService<'a> {
    db: &'a DatabaseConnection,
    cache: Option<&'a dyn AccessCache>,
}

impl<'a> AccessService<'a> {
    /// Creates a new instance of [`AccessService`]
    pub fn new(db: &'a DatabaseConnection, cache: Option<&'a dyn AccessCache>) -> Self {
        Self { db, cache }
    }

    /// Resolve the set of entity IDs `user_id` is authorized to act upon for
    /// `permission`.
    ///
    /// # Behavior
    /// - A superuser resolves to every known character and corporation
    ///   without consulting rules.
    /// - Otherwise the result is
    ///   `owned ∪ (allowed − forbidden) ∪ (inverse − forbidden)`, where the
    ///   forbidden expansion has already been reduced by ownership.
    /// - A permission no held role grants contributes no rules, so the result
    ///   degrades to the owned set (fails closed).
    /// - Results are cached per (user, permission, filter) under the user's
    ///   and contributing roles' tags when a cache is attached.
    pub async fn resolve(
        &self,
        user_id: i32,
        permission: &str,
        filter: Option<&CorporationRoleFilter>,
    ) -> Result<AffiliationSet, Error> {
        let cache_key = affiliation_cache_key(user_id, permission, filter);

        if let Some(cache) = self.cache {
            if let Some(cached) = cache.get(&cache_key).await? {
                let dto: AffiliatedIdsDto = serde_json::from_str(&cached)?;

                return Ok(AffiliationSet::from(&dto));
            }
        }

        let index = AffiliationIndex::load(self.db).await?;

        let role_repo = RoleRepository::new(self.db);
        if role_repo
            .user_has_permission(user_id, SUPERUSER_PERMISSION)
            .await?
        {
            debug!(user_id, "superuser resolution, returning universal set");

            return Ok(index.universe());
        }

        let owned = ownership::owned_entities(self.db, &index, user_id, filter).await?;
        let rules = self.load_rule_sets(user_id, permission).await?;

        let forbidden = evaluator::evaluate_forbidden(&index, &rules.forbidden, &owned);
        let allowed = evaluator::expand_rules(&index, &rules.allowed).subtract(&forbidden);
        let inverted = evaluator::evaluate_inverse(&index, &rules.inverse).subtract(&forbidden);

        let resolved = owned.union(allowed).union(inverted);

        if let Some(cache) = self.cache {
            let dto = AffiliatedIdsDto::from(&resolved);
            let mut tags = vec![user_cache_tag(user_id)];
            tags.extend(rules.role_ids.iter().map(|&role_id| role_cache_tag(role_id)));

            cache
                .put(
                    &cache_key,
                    serde_json::to_string(&dto)?,
                    ACCESS_CACHE_TTL_SECONDS,
                    &tags,
                )
                .await?;
        }

        Ok(resolved)
    }

    /// Decide whether `user_id` may act on every one of `requested`.
    ///
    /// Denial is a normal `Ok(false)` return, never an error. A superuser is
    /// authorized before resolution runs, including for alliance IDs outside
    /// the universal set.
    pub async fn authorize(
        &self,
        user_id: i32,
        permission: &str,
        filter: Option<&CorporationRoleFilter>,
        requested: &[EntityRef],
    ) -> Result<bool, Error> {
        let role_repo = RoleRepository::new(self.db);
        if role_repo
            .user_has_permission(user_id, SUPERUSER_PERMISSION)
            .await?
        {
            return Ok(true);
        }

        let resolved = self.resolve(user_id, permission, filter).await?;

        Ok(gate::authorize_all(&resolved, requested))
    }

    /// Declare a new affiliation rule for a role and invalidate the role's
    /// cached resolutions.
    pub async fn add_rule(
        &self,
        role_id: i32,
        affiliatable_id: i64,
        affiliatable_kind: EntityKind,
        rule_type: RuleType,
    ) -> Result<entity::heimdall_affiliation_rule::Model, Error> {
        let rule_repo = AffiliationRuleRepository::new(self.db);
        let rule = rule_repo
            .create(role_id, affiliatable_id, affiliatable_kind, rule_type)
            .await?;

        self.invalidate_role(role_id).await?;

        Ok(rule)
    }

    /// Remove an affiliation rule and invalidate the owning role's cached
    /// resolutions.
    ///
    /// # Returns
    /// - `Some(Model)` with the removed rule
    /// - `None` if no rule with the ID exists
    pub async fn remove_rule(
        &self,
        rule_id: i32,
    ) -> Result<Option<entity::heimdall_affiliation_rule::Model>, Error> {
        let rule_repo = AffiliationRuleRepository::new(self.db);
        let Some(rule) = rule_repo.delete(rule_id).await? else {
            return Ok(None);
        };

        self.invalidate_role(rule.role_id).await?;

        Ok(Some(rule))
    }

    /// Drop cached resolutions for a user, called whenever their owned
    /// character set changes.
    pub async fn invalidate_user(&self, user_id: i32) -> Result<(), Error> {
        if let Some(cache) = self.cache {
            cache.invalidate_tag(&user_cache_tag(user_id)).await?;
        }

        Ok(())
    }

    /// Drop cached resolutions a role's rules contributed to.
    pub async fn invalidate_role(&self, role_id: i32) -> Result<(), Error> {
        if let Some(cache) = self.cache {
            cache.invalidate_tag(&role_cache_tag(role_id)).await?;
        }

        Ok(())
    }

    async fn load_rule_sets(&self, user_id: i32, permission: &str) -> Result<RuleSets, Error> {
        let role_repo = RoleRepository::new(self.db);
        let role_ids = role_repo
            .role_ids_with_permission_for_user(user_id, permission)
            .await?;

        if role_ids.is_empty() {
            return Ok(RuleSets::default());
        }

        let rule_repo = AffiliationRuleRepository::new(self.db);
        let rules = rule_repo.get_by_role_ids(&role_ids).await?;

        Ok(RuleSets::partition(role_ids, rules))
    }
}
