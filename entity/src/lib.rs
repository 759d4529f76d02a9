pub mod prelude;

pub mod eve_alliance;
pub mod eve_character;
pub mod eve_character_corporation_role;
pub mod eve_corporation;
pub mod heimdall_affiliation_rule;
pub mod heimdall_role;
pub mod heimdall_role_member;
pub mod heimdall_role_permission;
pub mod heimdall_user;
pub mod heimdall_user_character;
