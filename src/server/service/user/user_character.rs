use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::{user_character::UserCharacterRepository, UserRepository},
    error::Error,
    service::{
        access::{cache::AccessCache, AccessService},
        user::UserService,
    },
};

pub struct UserCharacterService<'a> {
    db: &'a DatabaseConnection,
    cache: Option<&'a dyn AccessCache>,
}

impl<'a> UserCharacterService<'a> {
    /// Creates a new instance of [`UserCharacterService`]
    pub fn new(db: &'a DatabaseConnection, cache: Option<&'a dyn AccessCache>) -> Self {
        Self { db, cache }
    }

    /// Links or transfers a character to the provided user ID.
    ///
    /// # Behavior
    /// - If the character is already linked to this user with a matching
    ///   owner hash, nothing happens and the method returns `Ok(false)`.
    /// - If the character is linked to a different user or the owner hash
    ///   changed, the character is transferred and the method returns
    ///   `Ok(true)`.
    /// - If the character exists but has no owner, a link is created and the
    ///   method returns `Ok(true)`.
    /// - Any change drops the affected users' cached resolutions, since the
    ///   owned set feeding resolution just changed.
    ///
    /// # Arguments
    /// - `user_id`: User to link the character to; a missing user surfaces as
    ///   a foreign-key database error
    /// - `character_id`: EVE Online character ID; the character entry must
    ///   already exist
    /// - `owner_hash`: Ownership hash reported by the identity provider
    pub async fn link_character(
        &self,
        user_id: i32,
        character_id: i64,
        owner_hash: String,
    ) -> Result<bool, Error> {
        let user_character_repo = UserCharacterRepository::new(self.db);
        let access_service = AccessService::new(self.db, self.cache);

        let Some((character, maybe_ownership)) = user_character_repo
            .get_by_character_id(character_id)
            .await?
        else {
            return Err(Error::DbErr(sea_orm::DbErr::RecordNotFound(format!(
                "Character with EVE ID {} not found",
                character_id
            ))));
        };

        if let Some(ownership) = maybe_ownership {
            if ownership.owner_hash == owner_hash && user_id == ownership.user_id {
                // already linked to this owner -> nothing to do
                return Ok(false);
            }

            // existing character linked to different owner -> transfer
            let previous_user_id = ownership.user_id;
            self.transfer_character(ownership, user_id).await?;

            access_service.invalidate_user(previous_user_id).await?;
            access_service.invalidate_user(user_id).await?;

            return Ok(true);
        }

        // existing character but no owner -> create link
        user_character_repo
            .create(user_id, character.id, owner_hash)
            .await?;

        access_service.invalidate_user(user_id).await?;

        Ok(true)
    }

    /// Transfers a character from one user to another.
    ///
    /// # Behavior
    /// - If this character is the only remaining character for the previous
    ///   user, that user is deleted as they have no way to log in.
    /// - If the previous user's main character was transferred, their main
    ///   changes to the oldest remaining linked character.
    ///
    /// # Returns
    /// - `Ok(true)` when the previous user was deleted
    /// - `Ok(false)` otherwise
    pub async fn transfer_character(
        &self,
        ownership_entry: entity::heimdall_user_character::Model,
        new_user_id: i32,
    ) -> Result<bool, Error> {
        let user_repo = UserRepository::new(self.db);
        let user_character_repo = UserCharacterRepository::new(self.db);
        let user_service = UserService::new(self.db, self.cache);

        let Some(old_user) = user_repo.get(ownership_entry.user_id).await? else {
            // Shouldn't occur due to the foreign key requiring a valid user ID
            return Err(Error::DbErr(sea_orm::DbErr::RecordNotFound(format!(
                "User not found for user character ownership entry ID {}",
                ownership_entry.user_id
            ))));
        };

        let ownership_entries = user_character_repo
            .get_many_by_user_id(ownership_entry.user_id)
            .await?;

        user_character_repo
            .update(ownership_entry.id, new_user_id)
            .await?;

        // If this was the last character for the user, delete them
        if ownership_entries.len() == 1 {
            let _ = user_service.delete_user(ownership_entry.user_id).await?;
            return Ok(true);
        }

        // If the user's main character was transferred, change main to the
        // oldest remaining linked character
        if ownership_entry.character_id == old_user.main_character_id {
            if let Some(replacement) = ownership_entries
                .iter()
                .filter(|entry| entry.character_id != old_user.main_character_id)
                .min_by_key(|entry| entry.created_at)
            {
                if user_repo
                    .update(old_user.id, replacement.character_id)
                    .await?
                    .is_none()
                {
                    return Err(Error::DbErr(sea_orm::DbErr::RecordNotFound(format!(
                        "User with ID not found {}",
                        old_user.id
                    ))));
                }
            } else {
                // Shouldn't occur as the user is deleted when no alternative
                // character remains
                return Err(Error::DbErr(sea_orm::DbErr::RecordNotFound(format!(
                    "No alternative character for user {} after removing main character ID {}",
                    old_user.id, old_user.main_character_id
                ))));
            }
        }

        Ok(false)
    }
}
