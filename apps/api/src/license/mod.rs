//! Gumroad license verification.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

const GUMROAD_VERIFY_URL: &str = "https://api.gumroad.com/v2/licenses/verify";

#[derive(Clone)]
pub struct LicenseClient {
    client: reqwest::Client,
    product_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GumroadResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    purchase: Option<GumroadPurchase>,
}

#[derive(Debug, Default, Deserialize)]
struct GumroadPurchase {
    #[serde(default)]
    refunded: bool,
    #[serde(default)]
    disputed: bool,
    #[serde(default)]
    test: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOutcome {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl LicenseClient {
    pub fn new(product_id: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            product_id,
        }
    }

    /// Verifies a key against Gumroad. Refunded, disputed, and test
    /// purchases are rejected even when Gumroad reports success.
    pub async fn verify(&self, license_key: &str) -> Result<VerifyOutcome, AppError> {
        let license_key = license_key.trim();
        if license_key.is_empty() {
            return Err(AppError::Validation("License key is required.".to_string()));
        }
        let product_id = self.product_id.as_deref().ok_or_else(|| {
            AppError::Configuration(
                "Gumroad product id not set. Please configure GUMROAD_PRODUCT_ID.".to_string(),
            )
        })?;

        let response = self
            .client
            .post(GUMROAD_VERIFY_URL)
            .form(&[
                ("product_id", product_id),
                ("license_key", license_key),
                ("increment_uses_count", "true"),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("License verification request failed: {e}");
                AppError::Upstream(
                    "Could not reach the license server. Please try again.".to_string(),
                )
            })?;

        let status = response.status();
        let body: GumroadResponse = response.json().await.map_err(|e| {
            tracing::error!("License verification returned an unreadable body: {e}");
            AppError::Upstream("The license server returned an invalid response.".to_string())
        })?;

        if !body.success {
            let reason = body
                .message
                .unwrap_or_else(|| format!("Validation failed ({status}). Please try again."));
            return Ok(VerifyOutcome {
                valid: false,
                reason: Some(reason),
            });
        }

        let purchase = body.purchase.unwrap_or_default();
        if purchase.refunded {
            return Ok(VerifyOutcome {
                valid: false,
                reason: Some("This license was refunded.".to_string()),
            });
        }
        if purchase.disputed {
            return Ok(VerifyOutcome {
                valid: false,
                reason: Some("This license is under dispute.".to_string()),
            });
        }
        if purchase.test {
            return Ok(VerifyOutcome {
                valid: false,
                reason: Some("Test purchases are not valid licenses.".to_string()),
            });
        }

        Ok(VerifyOutcome {
            valid: true,
            reason: None,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub license_key: String,
}

/// POST /api/v1/license/verify
pub async fn handle_verify(
    State(state): State<AppState>,
    Json(req): Json<VerifyRequest>,
) -> Result<Json<VerifyOutcome>, AppError> {
    let outcome = state.license.verify(&req.license_key).await?;
    Ok(Json(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gumroad_response_deserializes_success_shape() {
        let json = r#"{"success": true, "purchase": {"refunded": false, "disputed": false, "test": false, "email": "a@b.c"}}"#;
        let parsed: GumroadResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.success);
        assert!(!parsed.purchase.unwrap().refunded);
    }

    #[test]
    fn test_gumroad_response_deserializes_failure_shape() {
        let json = r#"{"success": false, "message": "That license does not exist."}"#;
        let parsed: GumroadResponse = serde_json::from_str(json).unwrap();
        assert!(!parsed.success);
        assert_eq!(parsed.message.as_deref(), Some("That license does not exist."));
        assert!(parsed.purchase.is_none());
    }

    #[tokio::test]
    async fn test_empty_key_is_a_validation_error() {
        let client = LicenseClient::new(Some("prod".to_string()));
        let err = client.verify("   ").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_missing_product_id_is_a_configuration_error() {
        let client = LicenseClient::new(None);
        let err = client.verify("some-key").await.unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }
}
