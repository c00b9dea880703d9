//! Calls to the ratings backend through the browser's `fetch`.

use crate::constants::API_URL;
use dioxus::logger::tracing::{debug, info};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};
use wifimap_common::api::{endpoint, AddUserRequest, GetUsersResponse, ADD_USER_PATH, GET_USERS_PATH};
use wifimap_common::AggregateInputs;

#[derive(Error, Debug, Clone)]
pub enum ApiError {
    #[error("No browser window available")]
    NoWindow,

    #[error("Failed to build request: {0}")]
    RequestBuild(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected HTTP status {0} from {1}")]
    Status(u16, String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

fn describe(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

async fn send(method: &str, url: &str, body: Option<&str>) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;

    let headers = Headers::new().map_err(|e| ApiError::RequestBuild(describe(e)))?;
    headers
        .set("Access-Control-Allow-Origin", "*")
        .map_err(|e| ApiError::RequestBuild(describe(e)))?;

    let init = RequestInit::new();
    init.set_method(method);
    init.set_mode(RequestMode::Cors);
    if let Some(body) = body {
        headers
            .set("Content-Type", "application/json")
            .map_err(|e| ApiError::RequestBuild(describe(e)))?;
        init.set_body(&JsValue::from_str(body));
    }
    init.set_headers(&headers);

    let request = Request::new_with_str_and_init(url, &init)
        .map_err(|e| ApiError::RequestBuild(describe(e)))?;

    debug!("{} {}", method, url);
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Network(describe(e)))?;
    value
        .dyn_into::<Response>()
        .map_err(|e| ApiError::Network(describe(e)))
}

/// Fetches the latest rating per location.
pub async fn fetch_inputs() -> Result<AggregateInputs, ApiError> {
    let url = endpoint(API_URL, GET_USERS_PATH);
    let response = send("GET", &url, None).await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status(), url));
    }

    let text_promise = response
        .text()
        .map_err(|e| ApiError::Network(describe(e)))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| ApiError::Network(describe(e)))?
        .as_string()
        .unwrap_or_default();

    let body: GetUsersResponse =
        serde_json::from_str(&text).map_err(|e| ApiError::Deserialization(e.to_string()))?;
    info!("Received {} ratings from backend", body.results.len());
    Ok(AggregateInputs::from(body))
}

/// Posts one rating. The response body is not inspected.
pub async fn submit_rating(request: &AddUserRequest) -> Result<(), ApiError> {
    let url = endpoint(API_URL, ADD_USER_PATH);
    let body =
        serde_json::to_string(request).map_err(|e| ApiError::Serialization(e.to_string()))?;
    let response = send("POST", &url, Some(&body)).await?;
    info!(
        "Submitted rating {} for {:?} (status {})",
        request.rating,
        request.location,
        response.status()
    );
    Ok(())
}
