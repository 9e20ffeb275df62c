//! Thin layer over `gloo-net` that applies the backend error contract
//!
//! Every request goes through [`send`]: transport failures become
//! `ApiError::Network`, everything else is decoded from the raw body.

use contracts::shared::api_error::{decode_body, error_from_body, ApiError};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::FormData;

fn network_error(e: gloo_net::Error) -> ApiError {
    log::error!("fetch failed: {}", e);
    ApiError::network(e.to_string())
}

async fn read_parts(response: Response) -> Result<(u16, Option<String>, String), ApiError> {
    let status = response.status();
    let content_type = response.headers().get("content-type");
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok((status, content_type, body))
}

/// Sends a prepared request and decodes the JSON answer.
pub async fn send<T: DeserializeOwned>(request: Request) -> Result<T, ApiError> {
    let response = request.send().await.map_err(network_error)?;
    let (status, content_type, body) = read_parts(response).await?;
    decode_body(status, content_type.as_deref(), &body)
}

fn build(builder: RequestBuilder) -> Result<Request, ApiError> {
    builder.build().map_err(|e| ApiError::Client(e.to_string()))
}

pub async fn get<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    send(build(Request::get(url))?).await
}

pub async fn delete<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    send(build(Request::delete(url))?).await
}

/// JSON body; `Content-Type: application/json` is set by the builder.
pub async fn send_json<B: Serialize, T: DeserializeOwned>(
    builder: RequestBuilder,
    body: &B,
) -> Result<T, ApiError> {
    let request = builder
        .json(body)
        .map_err(|e| ApiError::Client(e.to_string()))?;
    send(request).await
}

/// Multipart body; the browser picks the content type and boundary.
pub async fn send_form<T: DeserializeOwned>(
    builder: RequestBuilder,
    form: FormData,
) -> Result<T, ApiError> {
    let request = builder
        .body(form)
        .map_err(|e| ApiError::Client(e.to_string()))?;
    send(request).await
}

/// Raw bytes of a successful response (PDF downloads)
pub async fn get_bytes(url: &str) -> Result<Vec<u8>, ApiError> {
    let response = build(Request::get(url))?
        .send()
        .await
        .map_err(network_error)?;
    if !response.ok() {
        let (status, content_type, body) = read_parts(response).await?;
        return Err(error_from_body(status, content_type.as_deref(), &body));
    }
    response
        .binary()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
