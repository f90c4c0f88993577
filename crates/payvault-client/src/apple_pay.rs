//! Apple Pay domain endpoints.

use serde::Serialize;

use payvault_core::{ApplePayDomain, ApplePayDomainId, DeletedApplePayDomain, List};

use crate::client::PayvaultClient;
use crate::error::ClientError;

/// Parameters for registering an Apple Pay domain.
#[derive(Debug, Clone, Serialize)]
pub struct CreateApplePayDomainParams {
    /// The domain name to register (e.g. `pay.example.com`).
    pub domain_name: String,
}

/// Parameters for listing Apple Pay domains.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListApplePayDomainsParams {
    /// Only return the domain matching this name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
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
    /// Register a web domain for Apple Pay.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an
    /// error.
    pub async fn create_apple_pay_domain(
        &self,
        params: &CreateApplePayDomainParams,
    ) -> Result<ApplePayDomain, ClientError> {
        self.post("/v1/apple_pay/domains", params).await
    }

    /// Retrieve a registered Apple Pay domain.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an
    /// error.
    pub async fn retrieve_apple_pay_domain(
        &self,
        id: &ApplePayDomainId,
    ) -> Result<ApplePayDomain, ClientError> {
        self.get(&format!("/v1/apple_pay/domains/{id}")).await
    }

    /// List registered Apple Pay domains.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an
    /// error.
    pub async fn list_apple_pay_domains(
        &self,
        params: &ListApplePayDomainsParams,
    ) -> Result<List<ApplePayDomain>, ClientError> {
        self.get_query("/v1/apple_pay/domains", params).await
    }

    /// Unregister an Apple Pay domain.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an
    /// error.
    pub async fn delete_apple_pay_domain(
        &self,
        id: &ApplePayDomainId,
    ) -> Result<DeletedApplePayDomain, ClientError> {
        self.delete(&format!("/v1/apple_pay/domains/{id}")).await
    }
}
