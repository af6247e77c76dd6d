//! JSON HTTP client over `gloo-net`.
//!
//! Every request carries `Content-Type: application/json` and, when the
//! token store holds a credential, `Authorization: Bearer <token>`.
//! Non-2xx responses become [`ApiError::Http`]; requests that never get a
//! response become [`ApiError::Network`]. No retries, no timeouts, no
//! cancellation.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config;
use crate::net::error::ApiError;
use crate::storage::{BrowserStore, TokenStore};

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder.header("Content-Type", "application/json");
    match BrowserStore.token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_response(resp.status(), &body));
    }
    Ok(resp.json::<T>().await?)
}

/// `GET` a JSON resource.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = authorized(Request::get(&config::endpoint(path))).send().await?;
    decode(resp).await
}

/// `POST` a JSON body, expecting a JSON response.
pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let resp = authorized(Request::post(&config::endpoint(path)))
        .json(body)?
        .send()
        .await?;
    decode(resp).await
}

/// `PUT` a JSON body, expecting a JSON response.
pub async fn put_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let resp = authorized(Request::put(&config::endpoint(path)))
        .json(body)?
        .send()
        .await?;
    decode(resp).await
}

/// `DELETE` a resource; the response body is ignored.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    let resp = authorized(Request::delete(&config::endpoint(path)))
        .send()
        .await?;
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_response(resp.status(), &body));
    }
    Ok(())
}
