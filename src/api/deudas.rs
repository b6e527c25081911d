use poem::http::HeaderMap;
use poem_openapi::{
    param::{Path, Query},
    payload::Json,
    OpenApi, Tags,
};
use std::sync::Arc;

use crate::errors::ApiError;
use crate::services::{access_guard, TokenService};
use crate::stores::{DeudaStore, NewDeuda};
use crate::types::dto::deudas::{
    ComercioRef, CreateDeudaApiResponse, CreateDeudaRequest, DeleteDeudaResponse, DeudaResponse,
    DeudorResponse, SearchResultResponse, UpdateDeudaRequest,
};

const DEUDA_NOT_FOUND: &str = "Deuda no encontrada";

/// Debt API endpoints: per-merchant CRUD plus the cross-tenant DNI search
pub struct DeudasApi {
    deuda_store: Arc<DeudaStore>,
    token_service: Arc<TokenService>,
}

impl DeudasApi {
    /// Create a new DeudasApi with the given DeudaStore and TokenService
    pub fn new(deuda_store: Arc<DeudaStore>, token_service: Arc<TokenService>) -> Self {
        Self {
            deuda_store,
            token_service,
        }
    }
}

/// API tags for debt endpoints
#[derive(Tags)]
enum DeudaTags {
    /// Debt management, scoped to the owning merchant
    Deudas,
    /// Cross-tenant debt search by national ID
    Search,
}

fn validate_monto(monto: f64) -> Result<(), ApiError> {
    if !monto.is_finite() || monto < 0.0 {
        return Err(ApiError::invalid_input("El monto no puede ser negativo"));
    }
    Ok(())
}

#[OpenApi]
impl DeudasApi {
    /// List the requester's debts, newest first, including each debtor
    #[oai(path = "/deudas", method = "get", tag = "DeudaTags::Deudas")]
    async fn list_deudas(
        &self,
        headers: &HeaderMap,
    ) -> Result<Json<Vec<DeudaResponse>>, ApiError> {
        let claims = access_guard::authenticate(headers, &self.token_service)?;

        let deudas = self.deuda_store.list_for_comercio(&claims.sub).await?;

        Ok(Json(
            deudas
                .into_iter()
                .map(|(deuda, deudor)| DeudaResponse::from_deuda(deuda, deudor))
                .collect(),
        ))
    }

    /// Record a debt, creating the debtor when the DNI is new
    #[oai(path = "/deudas", method = "post", tag = "DeudaTags::Deudas")]
    async fn create_deuda(
        &self,
        headers: &HeaderMap,
        body: Json<CreateDeudaRequest>,
    ) -> Result<CreateDeudaApiResponse, ApiError> {
        let claims = access_guard::authenticate(headers, &self.token_service)?;

        if body.dni.is_empty()
            || body.nombre.is_empty()
            || body.apellido.is_empty()
            || body.descripcion.is_empty()
        {
            return Err(ApiError::missing_fields());
        }
        validate_monto(body.monto)?;

        let (deuda, _deudor) = self
            .deuda_store
            .create_with_deudor(
                &claims.sub,
                NewDeuda {
                    dni: body.dni.clone(),
                    nombre: body.nombre.clone(),
                    apellido: body.apellido.clone(),
                    monto: body.monto,
                    descripcion: body.descripcion.clone(),
                },
            )
            .await?;

        Ok(CreateDeudaApiResponse::Created(Json(
            DeudaResponse::from_deuda(deuda, None),
        )))
    }

    /// Update a debt's amount and description; owner only
    #[oai(path = "/deudas/:id", method = "put", tag = "DeudaTags::Deudas")]
    async fn update_deuda(
        &self,
        headers: &HeaderMap,
        id: Path<String>,
        body: Json<UpdateDeudaRequest>,
    ) -> Result<Json<DeudaResponse>, ApiError> {
        let claims = access_guard::authenticate(headers, &self.token_service)?;
        validate_monto(body.monto)?;

        let outcome = self
            .deuda_store
            .update_owned(&id.0, &claims.sub, body.monto, body.descripcion.clone())
            .await?;

        let (deuda, deudor) = access_guard::resolve_owned(outcome, DEUDA_NOT_FOUND)?;

        Ok(Json(DeudaResponse::from_deuda(deuda, deudor)))
    }

    /// Delete a debt; owner only
    #[oai(path = "/deudas/:id", method = "delete", tag = "DeudaTags::Deudas")]
    async fn delete_deuda(
        &self,
        headers: &HeaderMap,
        id: Path<String>,
    ) -> Result<Json<DeleteDeudaResponse>, ApiError> {
        let claims = access_guard::authenticate(headers, &self.token_service)?;

        let outcome = self.deuda_store.delete_owned(&id.0, &claims.sub).await?;
        access_guard::resolve_owned(outcome, DEUDA_NOT_FOUND)?;

        Ok(Json(DeleteDeudaResponse {
            message: "Deuda eliminada exitosamente".to_string(),
        }))
    }

    /// Search every merchant's debts for one DNI
    ///
    /// Any authenticated user may query; results carry the owning
    /// merchant's display name only.
    #[oai(path = "/search", method = "get", tag = "DeudaTags::Search")]
    async fn search(
        &self,
        headers: &HeaderMap,
        dni: Query<Option<String>>,
    ) -> Result<Json<Vec<SearchResultResponse>>, ApiError> {
        access_guard::authenticate(headers, &self.token_service)?;

        let dni = match dni.0.as_deref() {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => return Err(ApiError::invalid_input("El parámetro DNI es requerido")),
        };

        let hits = self.deuda_store.search_by_dni(&dni).await?;

        if hits.is_empty() {
            return Err(ApiError::not_found(
                "No se encontraron deudas para el DNI proporcionado",
            ));
        }

        Ok(Json(
            hits.into_iter()
                .map(|hit| SearchResultResponse {
                    id: hit.deuda.id,
                    monto: hit.deuda.monto,
                    descripcion: hit.deuda.descripcion,
                    created_at: hit.deuda.created_at,
                    deudor: DeudorResponse::from(hit.deudor),
                    comercio: ComercioRef {
                        name: hit.comercio_name,
                    },
                })
                .collect(),
        ))
    }
}
