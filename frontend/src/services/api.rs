//! HTTP client for the ad management API.
//!
//! Four endpoints, all JSON: create one ad, list the stored images, delete
//! one, delete many. Errors are split into [`ApiError::Remote`] (the server
//! answered with an `error` body) and [`ApiError::Transport`] (no usable
//! response); callers turn either into one status line.

use addisplay::batch::MSG_REMOTE_FALLBACK;
use addisplay::{AdPayload, ApiError, ApiResult, StoredImage};
use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::API_BASE_URL;

/// Error body returned by the API on failure.
#[derive(Debug, Clone, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Response of the gallery listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<StoredImage>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of the bulk delete endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkDeleteRequest {
    pub public_ids: Vec<String>,
}

/// `error` field of a failure body, if the server sent one.
async fn remote_error(response: Response) -> Option<String> {
    response.json::<ErrorBody>().await.ok().and_then(|body| body.error)
}

/// Create one ad. Returns the created record as reported by the server.
pub async fn create_ad(payload: &AdPayload) -> ApiResult<Value> {
    let url = format!("{}/api/images", API_BASE_URL);
    let response = Request::post(&url)
        .json(payload)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.ok() {
        let message = remote_error(response)
            .await
            .unwrap_or_else(|| MSG_REMOTE_FALLBACK.to_string());
        return Err(ApiError::Remote(message));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))
}

/// Fetch the full remote gallery snapshot.
///
/// No partial or cached fallback: on any failure the caller keeps an empty
/// list and surfaces the error.
pub async fn list_images() -> ApiResult<Vec<StoredImage>> {
    let url = format!("{}/api/cloudinary-images", API_BASE_URL);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let body: GalleryResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if body.success {
        Ok(body.data)
    } else {
        Err(ApiError::Remote(
            body.error.unwrap_or_else(|| "Failed to fetch images.".to_string()),
        ))
    }
}

/// Delete one stored image by its public id.
pub async fn delete_image(public_id: &str) -> ApiResult<()> {
    let url = format!("{}/api/cloudinary-images/{}", API_BASE_URL, public_id);
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let message = remote_error(response)
            .await
            .unwrap_or_else(|| format!("Server error ({status})"));
        return Err(ApiError::Remote(message));
    }

    Ok(())
}

/// Delete several stored images in one call.
pub async fn delete_images(public_ids: &[String]) -> ApiResult<()> {
    let url = format!("{}/api/cloudinary-images/delete", API_BASE_URL);
    let body = BulkDeleteRequest {
        public_ids: public_ids.to_vec(),
    };
    let response = Request::post(&url)
        .json(&body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let message = remote_error(response)
            .await
            .unwrap_or_else(|| format!("Server error ({status})"));
        return Err(ApiError::Remote(message));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_response_deserialization() {
        let json = r#"{
            "success": true,
            "data": [
                {"public_id": "ads/summer-sale", "url": "https://res.example.com/ads/summer-sale.jpg"},
                {"public_id": "ads/winter", "url": "https://res.example.com/ads/winter.jpg"}
            ]
        }"#;

        let response: GalleryResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
        assert_eq!(response.data.len(), 2);
        assert_eq!(response.data[0].public_id, "ads/summer-sale");
        assert!(response.error.is_none());
    }

    #[test]
    fn test_gallery_failure_deserialization() {
        let json = r#"{"success": false, "error": "Cloudinary unavailable"}"#;

        let response: GalleryResponse = serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert!(response.data.is_empty());
        assert_eq!(response.error.as_deref(), Some("Cloudinary unavailable"));
    }

    #[test]
    fn test_bulk_delete_request_serialization() {
        let body = BulkDeleteRequest {
            public_ids: vec!["ads/a".to_string(), "ads/b".to_string()],
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["public_ids"], serde_json::json!(["ads/a", "ads/b"]));
    }

    #[test]
    fn test_error_body_tolerates_missing_field() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.error.is_none());
    }
}
