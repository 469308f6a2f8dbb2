use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::users::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::auth::application::domain::entities::{NewUser, User};
use crate::modules::auth::application::ports::outgoing::UserRepository;
use crate::shared::store::RepositoryError;

#[derive(Clone)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let found = Entity::find()
            .filter(Column::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?;

        Ok(found.map(model_to_user))
    }

    async fn create_user(&self, user: NewUser) -> Result<User, RepositoryError> {
        let model = ActiveModel {
            username: Set(user.username),
            password_hash: Set(user.password_hash),
            is_active: Set(true),
            created_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let inserted = model
            .insert(&*self.db)
            .await
            .map_err(RepositoryError::from_db)?;

        Ok(model_to_user(inserted))
    }
}

fn model_to_user(model: users::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        password_hash: model.password_hash,
        is_active: model.is_active,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
