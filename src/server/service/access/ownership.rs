//! Directly-owned entities and the corporate-role filter.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{eve::character::CharacterRepository, user::user_character::UserCharacterRepository},
    error::Error,
    model::access::{AffiliationSet, EntityRef},
    service::access::hierarchy::AffiliationIndex,
};

/// The corporate role that always qualifies a character's corporation as
/// owned, whatever the filter says.
pub static DIRECTOR_ROLE: &str = "Director";

/// Acceptable in-game corporate roles, parsed from a pipe-delimited
/// expression such as `"Accountant|Junior Accountant"`.
///
/// Matching is case-insensitive; tags are stored canonicalized (each word
/// capitalized) so the filter also reads back cleanly in cache keys.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorporationRoleFilter {
    tags: Vec<String>,
}

impl CorporationRoleFilter {
    pub fn parse(expression: &str) -> Self {
        let mut tags: Vec<String> = expression
            .split('|')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(canonicalize)
            .collect();
        tags.sort_unstable();
        tags.dedup();

        Self { tags }
    }

    /// Whether a corporate role qualifies: "Director" always does, otherwise
    /// the role must match one of the filter tags.
    pub fn matches(&self, role: &str) -> bool {
        role.eq_ignore_ascii_case(DIRECTOR_ROLE)
            || self.tags.iter().any(|tag| tag.eq_ignore_ascii_case(role))
    }

    /// Normalized form used as part of cache keys.
    pub fn cache_key_part(&self) -> String {
        self.tags.join("|")
    }
}

/// Capitalize each whitespace-separated word ("junior accountant" becomes
/// "Junior Accountant").
fn canonicalize(tag: &str) -> String {
    tag.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Everything the user directly owns: every owned character, and, when a
/// filter is given, each owned character's corporation where the character
/// holds a qualifying corporate role.
///
/// Two bulk queries: owned character IDs, then corporate roles for all of
/// them at once.
pub async fn owned_entities(
    db: &DatabaseConnection,
    index: &AffiliationIndex,
    user_id: i32,
    filter: Option<&CorporationRoleFilter>,
) -> Result<AffiliationSet, Error> {
    let user_character_repo = UserCharacterRepository::new(db);
    let owned_character_ids = user_character_repo.get_owned_character_ids(user_id).await?;

    let mut owned: AffiliationSet = owned_character_ids
        .iter()
        .map(|&id| EntityRef::character(id))
        .collect();

    let Some(filter) = filter else {
        return Ok(owned);
    };

    let character_repo = CharacterRepository::new(db);
    let corporation_roles = character_repo
        .get_corporation_roles_by_character_ids(&owned_character_ids)
        .await?;

    for (character_id, role) in corporation_roles {
        if filter.matches(&role) {
            if let Some(corporation_id) = index.corporation_of(character_id) {
                owned.insert(EntityRef::corporation(corporation_id));
            }
        }
    }

    Ok(owned)
}
