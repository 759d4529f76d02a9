//! Type aliases for database models used across test fixtures.

pub type EveAllianceModel = entity::eve_alliance::Model;
pub type EveCharacterModel = entity::eve_character::Model;
pub type EveCorporationModel = entity::eve_corporation::Model;
pub type CorporationRoleModel = entity::eve_character_corporation_role::Model;
pub type UserModel = entity::heimdall_user::Model;
pub type CharacterOwnershipModel = entity::heimdall_user_character::Model;
pub type RoleModel = entity::heimdall_role::Model;
pub type RolePermissionModel = entity::heimdall_role_permission::Model;
pub type RoleMemberModel = entity::heimdall_role_member::Model;
pub type AffiliationRuleModel = entity::heimdall_affiliation_rule::Model;
