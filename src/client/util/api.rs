//! Browser calls to the Palaestra API.

use palaestra::{
    model::{
        api::FieldErrorDto,
        sport::{SportDto, SportSelectionDto},
        tenant::{TenantArea, TenantContext},
    },
    store::CollectionApi,
};
use reqwasm::http::{Request, RequestCredentials, Response};
use serde::de::DeserializeOwned;

const SPORTS_URL: &str = "/api/academy/sports";
const AVAILABLE_SPORTS_URL: &str = "/api/academy/sports/available";

/// Resolve the tenant context of the browser's session
pub async fn get_tenant_context(area: TenantArea) -> Result<TenantContext, String> {
    let area = match area {
        TenantArea::Academy => "academy",
        TenantArea::Admin => "admin",
    };

    let response = Request::get(&format!("/api/tenant/context?area={}", area))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_json(response).await.map_err(|e| e.error)
}

/// Stop acting as another academy
pub async fn stop_impersonation() -> Result<(), String> {
    let response = Request::delete("/api/admin/impersonation")
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_empty(response).await.map_err(|e| e.error)
}

/// Sport selection of the academy the session is bound to
pub struct SportApi;

impl SportApi {
    async fn send_selection(request: Request, ids: &[i32]) -> Result<(), FieldErrorDto> {
        let body = serde_json::to_string(&SportSelectionDto { ids: ids.to_vec() })
            .map_err(|e| transport_error(format!("Failed to encode request: {}", e)))?;

        let response = request
            .header("Content-Type", "application/json")
            .credentials(RequestCredentials::Include)
            .body(body)
            .send()
            .await
            .map_err(|e| transport_error(format!("Failed to send request: {}", e)))?;

        read_empty(response).await
    }

    async fn get_sports(url: &str) -> Result<Vec<SportDto>, FieldErrorDto> {
        let response = Request::get(url)
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| transport_error(format!("Failed to send request: {}", e)))?;

        read_json(response).await
    }
}

impl CollectionApi<SportDto> for SportApi {
    async fn fetch_items(&self) -> Result<Vec<SportDto>, FieldErrorDto> {
        Self::get_sports(SPORTS_URL).await
    }

    async fn fetch_candidates(&self) -> Result<Vec<SportDto>, FieldErrorDto> {
        Self::get_sports(AVAILABLE_SPORTS_URL).await
    }

    async fn add(&self, ids: &[i32]) -> Result<(), FieldErrorDto> {
        Self::send_selection(Request::post(SPORTS_URL), ids).await
    }

    async fn remove(&self, ids: &[i32]) -> Result<(), FieldErrorDto> {
        Self::send_selection(Request::delete(SPORTS_URL), ids).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, FieldErrorDto> {
    if !response.ok() {
        return Err(read_error(response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| transport_error(format!("Failed to parse response: {}", e)))
}

async fn read_empty(response: Response) -> Result<(), FieldErrorDto> {
    if !response.ok() {
        return Err(read_error(response).await);
    }

    Ok(())
}

async fn read_error(response: Response) -> FieldErrorDto {
    let status = response.status();

    match response.json::<FieldErrorDto>().await {
        Ok(error_dto) => error_dto,
        Err(_) => {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            transport_error(format!("Request failed with status {}: {}", status, error_text))
        }
    }
}

fn transport_error(error: String) -> FieldErrorDto {
    FieldErrorDto { error, field: None }
}
