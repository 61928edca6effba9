use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DbConn, EntityTrait, IntoActiveModel, PrimaryKeyTrait, TryIntoModel,
};

use quill_core::error::RepoError;
use quill_core::ports::BaseRepository;

/// Map a SeaORM error onto the repository error taxonomy. Constraint
/// violations (unique, foreign key, not-null) are worth telling apart from
/// plain query failures.
pub(crate) fn map_db_err(e: sea_orm::DbErr) -> RepoError {
    let msg = e.to_string();
    let lowered = msg.to_lowercase();
    if lowered.contains("duplicate")
        || lowered.contains("unique")
        || lowered.contains("violates")
    {
        RepoError::Constraint(msg)
    } else {
        RepoError::Query(msg)
    }
}

/// Generic PostgreSQL repository implementation.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E, T, ID> BaseRepository<T, ID> for PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E> + TryIntoModel<E::Model> + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = ID>,
    ID: Send + Sync + Into<sea_orm::Value> + Clone + Copy + 'static,
    T: From<E::Model> + Into<E::ActiveModel> + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError> {
        let result = E::find_by_id(id).one(&self.db).await.map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn save(&self, entity: T) -> Result<T, RepoError> {
        let active_model: E::ActiveModel = entity.into();
        let result = active_model.save(&self.db).await.map_err(map_db_err)?;

        let model = result
            .try_into_model()
            .map_err(|e| RepoError::Query(e.to_string()))?;
        Ok(model.into())
    }

    async fn delete(&self, id: ID) -> Result<(), RepoError> {
        let result = E::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
