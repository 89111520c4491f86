//! PostgreSQL repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelBehavior, ActiveModelTrait, DbConn, DbErr, EntityTrait, Set};
use uuid::Uuid;

use blog_core::RepoError;
use blog_core::domain::{Post, PostFields};
use blog_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn query_error(e: DbErr) -> RepoError {
    match e {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(e.to_string()),
        _ => RepoError::Query(e.to_string()),
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find().all(&self.db).await.map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn create(&self, fields: PostFields) -> Result<Post, RepoError> {
        let (title, image, body) = fields.into_parts();

        let mut model = post::ActiveModel::new();
        model.title = Set(title);
        model.image = Set(image);
        model.body = Set(body);

        let inserted = model.insert(&self.db).await.map_err(query_error)?;
        tracing::debug!(post_id = %inserted.id, "Post inserted");

        Ok(inserted.into())
    }

    async fn update_by_id(&self, id: Uuid, fields: PostFields) -> Result<Option<Post>, RepoError> {
        let (title, image, body) = fields.into_parts();

        // `created` stays NotSet so it is never part of the UPDATE.
        let model = post::ActiveModel {
            id: Set(id),
            title: Set(title),
            image: Set(image),
            body: Set(body),
            ..ActiveModelTrait::default()
        };

        match model.update(&self.db).await {
            Ok(updated) => Ok(Some(updated.into())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(query_error(e)),
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
