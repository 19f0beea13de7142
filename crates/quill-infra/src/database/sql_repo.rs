//! SeaORM post repository.

use async_trait::async_trait;
use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder};

use quill_core::domain::BlogPost;
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::sql_base::{SqlBaseRepository, query_error, write_error};

/// SQL post repository (Postgres in production, SQLite in tests).
pub type SqlPostRepository = SqlBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for SqlPostRepository {
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::Created)
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn insert_many(&self, posts: Vec<BlogPost>) -> Result<u64, RepoError> {
        // SeaORM refuses an INSERT with no rows.
        if posts.is_empty() {
            return Ok(0);
        }

        let models = posts.into_iter().map(post::ActiveModel::from);
        let count = PostEntity::insert_many(models)
            .exec_without_returning(&self.db)
            .await
            .map_err(write_error)?;

        tracing::debug!(count, "Inserted posts");
        Ok(count)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        PostEntity::find()
            .count(&self.db)
            .await
            .map_err(query_error)
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        let result = PostEntity::delete_many()
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        tracing::debug!(count = result.rows_affected, "Deleted all posts");
        Ok(result.rows_affected)
    }
}
