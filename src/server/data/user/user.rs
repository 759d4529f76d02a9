use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        main_character_entry_id: i32,
    ) -> Result<entity::heimdall_user::Model, DbErr> {
        let user = entity::heimdall_user::ActiveModel {
            main_character_id: ActiveValue::Set(main_character_entry_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::heimdall_user::Model>, DbErr> {
        entity::prelude::HeimdallUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Update a user's main character entry
    ///
    /// # Returns
    /// - `Some(Model)` if the update succeeded
    /// - `None` if the user was not found
    pub async fn update(
        &self,
        user_id: i32,
        new_main_character_entry_id: i32,
    ) -> Result<Option<entity::heimdall_user::Model>, DbErr> {
        let user = match entity::prelude::HeimdallUser::find_by_id(user_id)
            .one(self.db)
            .await?
        {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        user_am.main_character_id = ActiveValue::Set(new_main_character_entry_id);
        user_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    pub async fn delete(&self, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::HeimdallUser::delete_by_id(user_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use heimdall_test_utils::prelude::*;

    use crate::server::data::user::UserRepository;

    /// Expect Some when fetching a created user
    #[tokio::test]
    async fn test_create_and_get_user() -> Result<(), TestError> {
        let test = test_setup_with_access_tables!()?;
        let character = test.eve().insert_mock_character(1, 10, None).await?;

        let user_repo = UserRepository::new(&test.state.db);
        let user = user_repo.create(character.id).await?;

        let fetched = user_repo.get(user.id).await?;

        assert!(fetched.is_some());
        assert_eq!(fetched.unwrap().main_character_id, character.id);

        Ok(())
    }

    /// Expect None when updating a user that does not exist
    #[tokio::test]
    async fn test_update_missing_user_none() -> Result<(), TestError> {
        let test = test_setup_with_access_tables!()?;

        let user_repo = UserRepository::new(&test.state.db);
        let result = user_repo.update(1, 1).await?;

        assert!(result.is_none());

        Ok(())
    }

    /// Expect delete to report whether a row was removed
    #[tokio::test]
    async fn test_delete_user() -> Result<(), TestError> {
        let test = test_setup_with_access_tables!()?;
        let character = test.eve().insert_mock_character(1, 10, None).await?;

        let user_repo = UserRepository::new(&test.state.db);
        let user = user_repo.create(character.id).await?;

        assert!(user_repo.delete(user.id).await?);
        assert!(!user_repo.delete(user.id).await?);

        Ok(())
    }
}
