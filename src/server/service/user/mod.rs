pub mod user_character;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::{user_character::UserCharacterRepository, UserRepository},
    error::Error,
    service::access::{cache::AccessCache, AccessService},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    cache: Option<&'a dyn AccessCache>,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection, cache: Option<&'a dyn AccessCache>) -> Self {
        Self { db, cache }
    }

    pub async fn get_user(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::heimdall_user::Model>, Error> {
        let user_repo = UserRepository::new(self.db);

        Ok(user_repo.get(user_id).await?)
    }

    /// Delete a user along with their character ownership entries, dropping
    /// any cached resolutions for them.
    pub async fn delete_user(&self, user_id: i32) -> Result<bool, Error> {
        use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

        let user_repo = UserRepository::new(self.db);
        let user_character_repo = UserCharacterRepository::new(self.db);

        // Ownership rows must go first, they reference the user
        let ownership_entries = user_character_repo.get_many_by_user_id(user_id).await?;
        if !ownership_entries.is_empty() {
            entity::prelude::HeimdallUserCharacter::delete_many()
                .filter(entity::heimdall_user_character::Column::UserId.eq(user_id))
                .exec(self.db)
                .await?;
        }

        let deleted = user_repo.delete(user_id).await?;

        if deleted {
            AccessService::new(self.db, self.cache)
                .invalidate_user(user_id)
                .await?;
        }

        Ok(deleted)
    }
}
