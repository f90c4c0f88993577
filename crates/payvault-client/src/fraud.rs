//! Early fraud warning endpoints.

use serde::Serialize;

use payvault_core::{EarlyFraudWarning, EarlyFraudWarningId, List};

use crate::client::PayvaultClient;
use crate::error::ClientError;

/// Parameters for listing early fraud warnings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListEarlyFraudWarningsParams {
    /// Only return warnings for this charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge: Option<String>,
    /// Cursor: return objects before this id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_before: Option<String>,
    /// Page size, between 1 and 100. Defaults to 10.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Cursor: return objects after this id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,
}

impl PayvaultClient {
    /// Retrieve the details of an early fraud warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an
    /// error.
    pub async fn retrieve_early_fraud_warning(
        &self,
        id: &EarlyFraudWarningId,
    ) -> Result<EarlyFraudWarning, ClientError> {
        self.get(&format!("/v1/radar/early_fraud_warnings/{id}"))
            .await
    }

    /// List early fraud warnings.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an
    /// error.
    pub async fn list_early_fraud_warnings(
        &self,
        params: &ListEarlyFraudWarningsParams,
    ) -> Result<List<EarlyFraudWarning>, ClientError> {
        self.get_query("/v1/radar/early_fraud_warnings", params)
            .await
    }
}
