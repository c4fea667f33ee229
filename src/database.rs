//! CRUD orchestration.
//!
//! [`Database`] converts one in-memory model plus an intent into a
//! populated [`Query`], compiles it, executes it through a connection from
//! the backend, and runs the lifecycle hooks around execution.
//!
//! Create, update, and hard delete all walk the same pipeline:
//!
//! ```text
//! Idle -> PreHookDatabase -> PreHookModel -> Encoded -> Executed
//!      -> PostHookDatabase -> PostHookModel -> Done
//! ```
//!
//! A failure at any stage short-circuits the remaining stages and
//! propagates the error. Exactly one statement executes per operation, at
//! the `Encoded -> Executed` edge; a statement that already executed is not
//! rolled back when a later hook fails. Hard delete stops after `Executed`
//! (delete has no post-hooks). One connection is acquired per operation and
//! released on every exit path when it drops.

use chrono::Utc;

use crate::error::OperationError;
use crate::executor::{Backend, Connection};
use crate::model::{Model, ModelBehavior, ModelEvent};
use crate::query::{Action, Comparison, DataMap, Filter, Query, QueryField};
use crate::sql::SqlSerializer;
use crate::value::StructuredData;

/// Stages of the CRUD operation state machine, in pipeline order.
///
/// Used for trace logging of stage transitions; the pipeline itself is
/// sequential code, each stage consuming the model the previous one
/// produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationStage {
    PreHookDatabase,
    PreHookModel,
    Encoded,
    Executed,
    PostHookDatabase,
    PostHookModel,
}

/// The CRUD orchestrator over a [`Backend`].
///
/// # Examples
///
/// ```no_run
/// use riptide::{Backend, Database};
///
/// # fn demo<B: Backend>(backend: B) -> Result<(), riptide::OperationError> {
/// # #[derive(Debug, Clone)]
/// # struct User;
/// # impl riptide::Model for User {
/// #     fn entity() -> &'static str { "users" }
/// #     fn identity(&self) -> Option<riptide::StructuredData> { None }
/// #     fn encode(&self) -> Result<riptide::DataMap, riptide::OperationError> { Ok(vec![]) }
/// # }
/// # impl riptide::ModelBehavior for User {}
/// # let user = User;
/// let database = Database::new(backend);
/// let user = database.save(user)?;
/// # Ok(())
/// # }
/// ```
pub struct Database<B: Backend> {
    backend: B,
}

impl<B: Backend> Database<B> {
    pub fn new(backend: B) -> Self {
        Database { backend }
    }

    /// The backend this database orchestrates over.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Create the model when it has no identity, update it otherwise.
    pub fn save<M: ModelBehavior>(&self, model: M) -> Result<M, OperationError> {
        if model.identity().is_some() {
            self.update(model, None)
        } else {
            self.create(model)
        }
    }

    /// Insert the model as a new row.
    ///
    /// Timestamp-capable models are stamped `created_at = updated_at = now`
    /// (one shared instant) before anything else runs. Pipeline: backend
    /// `WillCreate`, model `will_create`, encode, execute, backend
    /// `DidCreate`, model `did_create`.
    ///
    /// # Errors
    ///
    /// Any stage failure aborts the remaining stages and propagates.
    pub fn create<M: ModelBehavior>(&self, mut model: M) -> Result<M, OperationError> {
        if let Some(timestamps) = model.timestamps() {
            let now = Utc::now();
            timestamps.set_created_at(now);
            timestamps.set_updated_at(now);
        }

        let mut conn = self.backend.connection()?;

        trace_stage::<M>("create", OperationStage::PreHookDatabase);
        let model = self
            .backend
            .model_event(ModelEvent::WillCreate, model, &mut conn)?;
        trace_stage::<M>("create", OperationStage::PreHookModel);
        let model = model.will_create(&mut conn)?;

        trace_stage::<M>("create", OperationStage::Encoded);
        let data = model.encode()?;
        let query = Query::new(M::entity())
            .with_action(Action::Insert)
            .with_data(data);

        trace_stage::<M>("create", OperationStage::Executed);
        self.execute(&query, &mut conn)?;

        trace_stage::<M>("create", OperationStage::PostHookDatabase);
        let model = self
            .backend
            .model_event(ModelEvent::DidCreate, model, &mut conn)?;
        trace_stage::<M>("create", OperationStage::PostHookModel);
        let model = model.did_create(&mut conn)?;

        Ok(model)
    }

    /// Bulk update: apply the data mapping to every row of the entity.
    ///
    /// No hooks run, no identity filter is added, and no model is
    /// materialized. Returns the number of affected rows.
    pub fn update_fields<M: Model>(&self, data: DataMap) -> Result<u64, OperationError> {
        let mut conn = self.backend.connection()?;
        let query = Query::new(M::entity())
            .with_action(Action::Update)
            .with_data(data);
        self.execute(&query, &mut conn)
    }

    /// Update the row matching the model's identity.
    ///
    /// `original_id` overrides the filter value when the identity field
    /// itself is changing, so the statement still targets the old row.
    /// Timestamp-capable models are stamped `updated_at = now` first.
    ///
    /// # Errors
    ///
    /// [`OperationError::IdentityRequired`] when neither the model nor
    /// `original_id` carries an identity; no statement is issued.
    pub fn update<M: ModelBehavior>(
        &self,
        mut model: M,
        original_id: Option<StructuredData>,
    ) -> Result<M, OperationError> {
        if let Some(timestamps) = model.timestamps() {
            timestamps.set_updated_at(Utc::now());
        }

        let id = original_id
            .or_else(|| model.identity())
            .ok_or(OperationError::IdentityRequired)?;

        let mut conn = self.backend.connection()?;

        trace_stage::<M>("update", OperationStage::PreHookDatabase);
        let model = self
            .backend
            .model_event(ModelEvent::WillUpdate, model, &mut conn)?;
        trace_stage::<M>("update", OperationStage::PreHookModel);
        let model = model.will_update(&mut conn)?;

        trace_stage::<M>("update", OperationStage::Encoded);
        let data = model.encode()?;
        let query = Query::new(M::entity())
            .with_action(Action::Update)
            .filter(Filter::Compare(
                QueryField::new(M::id_field()),
                Comparison::Equals,
                id,
            ))
            .with_data(data);

        trace_stage::<M>("update", OperationStage::Executed);
        self.execute(&query, &mut conn)?;

        trace_stage::<M>("update", OperationStage::PostHookDatabase);
        let model = self
            .backend
            .model_event(ModelEvent::DidUpdate, model, &mut conn)?;
        trace_stage::<M>("update", OperationStage::PostHookModel);
        let model = model.did_update(&mut conn)?;

        Ok(model)
    }

    /// Delete the model, honoring the soft-delete capability.
    ///
    /// Soft-deletable models are stamped `deleted_at = now` and routed
    /// through [`Database::update`]; no DELETE statement is ever issued for
    /// them. Everything else hard-deletes.
    pub fn delete<M: ModelBehavior>(&self, mut model: M) -> Result<M, OperationError> {
        if let Some(soft_delete) = model.soft_delete() {
            soft_delete.set_deleted_at(Utc::now());
            return self.update(model, None);
        }
        self.hard_delete(model)
    }

    /// Delete the row matching the model's identity, ignoring the
    /// soft-delete capability.
    ///
    /// Pipeline: backend `WillDelete`, model `will_delete`, execute. No
    /// post-delete hooks fire.
    ///
    /// # Errors
    ///
    /// [`OperationError::IdentityRequired`] when the model has no identity;
    /// no statement is issued.
    pub fn hard_delete<M: ModelBehavior>(&self, model: M) -> Result<M, OperationError> {
        let id = model.identity().ok_or(OperationError::IdentityRequired)?;

        let mut conn = self.backend.connection()?;

        trace_stage::<M>("delete", OperationStage::PreHookDatabase);
        let model = self
            .backend
            .model_event(ModelEvent::WillDelete, model, &mut conn)?;
        trace_stage::<M>("delete", OperationStage::PreHookModel);
        let model = model.will_delete(&mut conn)?;

        let query = Query::new(M::entity())
            .with_action(Action::Delete)
            .filter(Filter::Compare(
                QueryField::new(M::id_field()),
                Comparison::Equals,
                id,
            ));

        trace_stage::<M>("delete", OperationStage::Executed);
        self.execute(&query, &mut conn)?;

        Ok(model)
    }

    /// Compile and run one statement. The single execution point of every
    /// operation.
    fn execute(&self, query: &Query, conn: &mut B::Conn) -> Result<u64, OperationError> {
        let compiled = SqlSerializer::new(query).compile();
        log::debug!(
            "executing `{}` with {} parameter(s)",
            compiled.statement,
            compiled.parameters.len()
        );
        conn.execute(&compiled.statement, &compiled.parameters)
    }
}

fn trace_stage<M: Model>(operation: &str, stage: OperationStage) {
    log::trace!("{} {}: {:?}", operation, M::entity(), stage);
}
