use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::types::db::{deuda, deudor};

/// Request model for recording a debt (creates the deudor if absent)
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CreateDeudaRequest {
    /// National ID of the debtor, the upsert key
    pub dni: String,

    /// Debtor first name (ignored when the DNI already exists)
    pub nombre: String,

    /// Debtor surname (ignored when the DNI already exists)
    pub apellido: String,

    /// Amount owed, non-negative
    pub monto: f64,

    /// Description of the debt
    pub descripcion: String,
}

/// Request model for editing a debt's amount and description
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UpdateDeudaRequest {
    /// New amount, non-negative
    pub monto: f64,

    /// New description
    pub descripcion: String,
}

/// Debtor as returned to clients
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct DeudorResponse {
    /// Deudor ID (UUID)
    pub id: String,

    /// National ID
    pub dni: String,

    /// First name
    pub nombre: String,

    /// Surname
    pub apellido: String,
}

impl From<deudor::Model> for DeudorResponse {
    fn from(d: deudor::Model) -> Self {
        Self {
            id: d.id,
            dni: d.dni,
            nombre: d.nombre,
            apellido: d.apellido,
        }
    }
}

/// Debt as returned to its owning merchant
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct DeudaResponse {
    /// Deuda ID (UUID)
    pub id: String,

    /// Amount owed
    pub monto: f64,

    /// Description
    pub descripcion: String,

    /// Owning merchant's user ID
    pub comercio_id: String,

    /// Referenced debtor's ID
    pub deudor_id: String,

    /// Creation time (Unix timestamp)
    pub created_at: i64,

    /// Debtor record, present on listing and update responses
    pub deudor: Option<DeudorResponse>,
}

impl DeudaResponse {
    pub fn from_deuda(d: deuda::Model, deudor: Option<deudor::Model>) -> Self {
        Self {
            id: d.id,
            monto: d.monto,
            descripcion: d.descripcion,
            comercio_id: d.comercio_id,
            deudor_id: d.deudor_id,
            created_at: d.created_at,
            deudor: deudor.map(DeudorResponse::from),
        }
    }
}

/// Redacted merchant reference carried in search results
///
/// Only the display name crosses the tenant boundary.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ComercioRef {
    /// Display name of the merchant that recorded the debt
    pub name: String,
}

/// Cross-tenant search result for one debt
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct SearchResultResponse {
    /// Deuda ID (UUID)
    pub id: String,

    /// Amount owed
    pub monto: f64,

    /// Description
    pub descripcion: String,

    /// Creation time (Unix timestamp)
    pub created_at: i64,

    /// Debtor record
    pub deudor: DeudorResponse,

    /// Owning merchant, display name only
    pub comercio: ComercioRef,
}

/// Confirmation returned after deleting a debt
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct DeleteDeudaResponse {
    /// Human-readable confirmation message
    pub message: String,
}

/// API response for the create-debt endpoint
#[derive(ApiResponse)]
pub enum CreateDeudaApiResponse {
    /// Debt created
    #[oai(status = 201)]
    Created(Json<DeudaResponse>),
}
