//! Source transaction endpoints.

use serde::Serialize;

use payvault_core::{List, SourceId, SourceTransaction};

use crate::client::PayvaultClient;
use crate::error::ClientError;

/// Parameters for listing source transactions.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListSourceTransactionsParams {
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
    /// List the transactions recorded against a receiver source.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an
    /// error.
    pub async fn list_source_transactions(
        &self,
        source_id: &SourceId,
        params: &ListSourceTransactionsParams,
    ) -> Result<List<SourceTransaction>, ClientError> {
        self.get_query(
            &format!("/v1/sources/{source_id}/source_transactions"),
            params,
        )
        .await
    }
}
