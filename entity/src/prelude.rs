pub use super::eve_alliance::Entity as EveAlliance;
pub use super::eve_character::Entity as EveCharacter;
pub use super::eve_character_corporation_role::Entity as EveCharacterCorporationRole;
pub use super::eve_corporation::Entity as EveCorporation;
pub use super::heimdall_affiliation_rule::Entity as HeimdallAffiliationRule;
pub use super::heimdall_role::Entity as HeimdallRole;
pub use super::heimdall_role_member::Entity as HeimdallRoleMember;
pub use super::heimdall_role_permission::Entity as HeimdallRolePermission;
pub use super::heimdall_user::Entity as HeimdallUser;
pub use super::heimdall_user_character::Entity as HeimdallUserCharacter;
