use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use chrono::Utc;
use uuid::Uuid;

use crate::errors::InternalError;
use crate::types::db::{deuda, deudor, user};

/// Input for recording a debt together with its debtor
#[derive(Debug, Clone)]
pub struct NewDeuda {
    pub dni: String,
    pub nombre: String,
    pub apellido: String,
    pub monto: f64,
    pub descripcion: String,
}

/// Outcome of an ownership-gated mutation
///
/// The existence check runs before the ownership check, so a missing
/// resource is reported as `NotFound` even when the caller would not have
/// owned it.
#[derive(Debug)]
pub enum MutationOutcome<T> {
    Applied(T),
    NotFound,
    NotOwner,
}

/// One cross-tenant search hit: the debt, its debtor, and the owning
/// merchant's display name (nothing else about the merchant)
pub struct SearchHit {
    pub deuda: deuda::Model,
    pub deudor: deudor::Model,
    pub comercio_name: String,
}

/// DeudaStore manages debts and their debtors in the database
///
/// Every ownership-gated mutation runs its existence check and the mutation
/// inside one transaction, so the checked record cannot change underneath
/// the write.
pub struct DeudaStore {
    db: DatabaseConnection,
}

impl DeudaStore {
    /// Create a new DeudaStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// List the debts owned by one merchant, newest first, with debtors
    pub async fn list_for_comercio(
        &self,
        comercio_id: &str,
    ) -> Result<Vec<(deuda::Model, Option<deudor::Model>)>, InternalError> {
        deuda::Entity::find()
            .filter(deuda::Column::ComercioId.eq(comercio_id))
            .find_also_related(deudor::Entity)
            .order_by_desc(deuda::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_for_comercio", e))
    }

    /// Record a debt, creating its debtor when the DNI is new
    ///
    /// Upsert-by-natural-key: an existing deudor is reused unchanged, names
    /// are first-write-wins. The upsert and the debt insert share one
    /// transaction so no orphaned record survives a failure.
    pub async fn create_with_deudor(
        &self,
        comercio_id: &str,
        new: NewDeuda,
    ) -> Result<(deuda::Model, deudor::Model), InternalError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| InternalError::database("begin_create_deuda", e))?;

        let existing = deudor::Entity::find()
            .filter(deudor::Column::Dni.eq(&new.dni))
            .one(&txn)
            .await
            .map_err(|e| InternalError::database("find_deudor_by_dni", e))?;

        let deudor = match existing {
            Some(d) => d,
            None => {
                let model = deudor::ActiveModel {
                    id: Set(Uuid::new_v4().to_string()),
                    dni: Set(new.dni.clone()),
                    nombre: Set(new.nombre.clone()),
                    apellido: Set(new.apellido.clone()),
                };
                model
                    .insert(&txn)
                    .await
                    .map_err(|e| InternalError::database("create_deudor", e))?
            }
        };

        let nueva_deuda = deuda::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            monto: Set(new.monto),
            descripcion: Set(new.descripcion.clone()),
            comercio_id: Set(comercio_id.to_string()),
            deudor_id: Set(deudor.id.clone()),
            created_at: Set(Utc::now().timestamp()),
        };

        let deuda = nueva_deuda
            .insert(&txn)
            .await
            .map_err(|e| InternalError::database("create_deuda", e))?;

        txn.commit()
            .await
            .map_err(|e| InternalError::database("commit_create_deuda", e))?;

        Ok((deuda, deudor))
    }

    /// Update a debt's amount and description if the caller owns it
    ///
    /// Returns the updated debt with its debtor, which is never touched by
    /// an edit.
    pub async fn update_owned(
        &self,
        id: &str,
        comercio_id: &str,
        monto: f64,
        descripcion: String,
    ) -> Result<MutationOutcome<(deuda::Model, Option<deudor::Model>)>, InternalError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| InternalError::database("begin_update_deuda", e))?;

        let deuda = match Self::find_owned(&txn, id, comercio_id).await? {
            MutationOutcome::Applied(d) => d,
            MutationOutcome::NotFound => return Ok(MutationOutcome::NotFound),
            MutationOutcome::NotOwner => return Ok(MutationOutcome::NotOwner),
        };

        let deudor_id = deuda.deudor_id.clone();
        let mut active: deuda::ActiveModel = deuda.into();
        active.monto = Set(monto);
        active.descripcion = Set(descripcion);

        let updated = active
            .update(&txn)
            .await
            .map_err(|e| InternalError::database("update_deuda", e))?;

        let deudor = deudor::Entity::find_by_id(&deudor_id)
            .one(&txn)
            .await
            .map_err(|e| InternalError::database("find_deudor", e))?;

        txn.commit()
            .await
            .map_err(|e| InternalError::database("commit_update_deuda", e))?;

        Ok(MutationOutcome::Applied((updated, deudor)))
    }

    /// Delete a debt if the caller owns it
    pub async fn delete_owned(
        &self,
        id: &str,
        comercio_id: &str,
    ) -> Result<MutationOutcome<()>, InternalError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| InternalError::database("begin_delete_deuda", e))?;

        let deuda = match Self::find_owned(&txn, id, comercio_id).await? {
            MutationOutcome::Applied(d) => d,
            MutationOutcome::NotFound => return Ok(MutationOutcome::NotFound),
            MutationOutcome::NotOwner => return Ok(MutationOutcome::NotOwner),
        };

        deuda
            .delete(&txn)
            .await
            .map_err(|e| InternalError::database("delete_deuda", e))?;

        txn.commit()
            .await
            .map_err(|e| InternalError::database("commit_delete_deuda", e))?;

        Ok(MutationOutcome::Applied(()))
    }

    /// Fetch a debt and decide ownership, existence first
    async fn find_owned(
        txn: &DatabaseTransaction,
        id: &str,
        comercio_id: &str,
    ) -> Result<MutationOutcome<deuda::Model>, InternalError> {
        let deuda = deuda::Entity::find_by_id(id)
            .one(txn)
            .await
            .map_err(|e| InternalError::database("find_deuda", e))?;

        match deuda {
            None => Ok(MutationOutcome::NotFound),
            Some(d) if d.comercio_id != comercio_id => Ok(MutationOutcome::NotOwner),
            Some(d) => Ok(MutationOutcome::Applied(d)),
        }
    }

    /// Find every debt recorded against a DNI, across all merchants
    ///
    /// Cross-tenant read path: results expose the owning merchant's display
    /// name and nothing else about the account.
    pub async fn search_by_dni(&self, dni: &str) -> Result<Vec<SearchHit>, InternalError> {
        let deudor = deudor::Entity::find()
            .filter(deudor::Column::Dni.eq(dni))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_deudor_by_dni", e))?;

        let Some(deudor) = deudor else {
            return Ok(Vec::new());
        };

        let rows = deuda::Entity::find()
            .filter(deuda::Column::DeudorId.eq(&deudor.id))
            .find_also_related(user::Entity)
            .order_by_desc(deuda::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("search_deudas", e))?;

        Ok(rows
            .into_iter()
            .map(|(deuda, comercio)| SearchHit {
                deuda,
                deudor: deudor.clone(),
                comercio_name: comercio.map(|c| c.name).unwrap_or_default(),
            })
            .collect())
    }
}
