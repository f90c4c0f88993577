//! Account, person, and capability endpoints.

use serde::Serialize;

use payvault_core::{
    Account, AccountId, AccountType, Address, Capability, CapabilityId, DeletedAccount,
    DeletedPerson, Dob, List, Person, PersonId, Relationship,
};

use crate::client::PayvaultClient;
use crate::error::ClientError;

/// Parameters for creating an account.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateAccountParams {
    /// The account type to create.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
    /// The business type: `individual` or `company`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_type: Option<String>,
    /// The country the account holder resides in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// The email address of the account holder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Set of key-value pairs to attach to the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    /// Capability names to request for the account (e.g.
    /// `card_payments`, `transfers`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_capabilities: Option<Vec<String>>,
}

/// Parameters for updating an account.
///
/// Parameters not provided are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateAccountParams {
    /// Three-letter ISO currency code for the default currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_currency: Option<String>,
    /// The email address of the account holder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Set of key-value pairs to attach to the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// Parameters for rejecting an account.
#[derive(Debug, Clone, Serialize)]
pub struct RejectAccountParams {
    /// Why the account is being rejected: `fraud`, `terms_of_service`, or
    /// `other`.
    pub reason: String,
}

/// Parameters for listing accounts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListAccountsParams {
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

/// Parameters for creating or updating a person.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PersonParams {
    /// The person's address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// The person's date of birth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<Dob>,
    /// The person's email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// The person's first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// The person's last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Set of key-value pairs to attach to the person.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    /// The person's phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// How the person is related to the account's legal entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<Relationship>,
}

/// Parameters for listing persons.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListPersonsParams {
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

/// Parameters for updating a capability.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateCapabilityParams {
    /// Whether the capability should be requested.
    pub requested: bool,
}

impl PayvaultClient {
    /// Create an account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an
    /// error.
    pub async fn create_account(
        &self,
        params: &CreateAccountParams,
    ) -> Result<Account, ClientError> {
        self.post("/v1/accounts", params).await
    }

    /// Retrieve the details of an account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an
    /// error.
    pub async fn retrieve_account(&self, id: &AccountId) -> Result<Account, ClientError> {
        self.get(&format!("/v1/accounts/{id}")).await
    }

    /// Update an account. Parameters not provided are left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an
    /// error.
    pub async fn update_account(
        &self,
        id: &AccountId,
        params: &UpdateAccountParams,
    ) -> Result<Account, ClientError> {
        self.post(&format!("/v1/accounts/{id}"), params).await
    }

    /// Delete an account. Live accounts can only be deleted once all
    /// balances are zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an
    /// error.
    pub async fn delete_account(&self, id: &AccountId) -> Result<DeletedAccount, ClientError> {
        self.delete(&format!("/v1/accounts/{id}")).await
    }

    /// List accounts connected to the platform.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an
    /// error.
    pub async fn list_accounts(
        &self,
        params: &ListAccountsParams,
    ) -> Result<List<Account>, ClientError> {
        self.get_query("/v1/accounts", params).await
    }

    /// Flag an account as suspicious.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an
    /// error.
    pub async fn reject_account(
        &self,
        id: &AccountId,
        params: &RejectAccountParams,
    ) -> Result<Account, ClientError> {
        self.post(&format!("/v1/accounts/{id}/reject"), params).await
    }

    /// Create a person associated with an account's legal entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an
    /// error.
    pub async fn create_person(
        &self,
        account_id: &AccountId,
        params: &PersonParams,
    ) -> Result<Person, ClientError> {
        self.post(&format!("/v1/accounts/{account_id}/persons"), params)
            .await
    }

    /// Retrieve an existing person.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an
    /// error.
    pub async fn retrieve_person(
        &self,
        account_id: &AccountId,
        person_id: &PersonId,
    ) -> Result<Person, ClientError> {
        self.get(&format!("/v1/accounts/{account_id}/persons/{person_id}"))
            .await
    }

    /// Update an existing person.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an
    /// error.
    pub async fn update_person(
        &self,
        account_id: &AccountId,
        person_id: &PersonId,
        params: &PersonParams,
    ) -> Result<Person, ClientError> {
        self.post(
            &format!("/v1/accounts/{account_id}/persons/{person_id}"),
            params,
        )
        .await
    }

    /// Delete a person's relationship to the account's legal entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an
    /// error.
    pub async fn delete_person(
        &self,
        account_id: &AccountId,
        person_id: &PersonId,
    ) -> Result<DeletedPerson, ClientError> {
        self.delete(&format!("/v1/accounts/{account_id}/persons/{person_id}"))
            .await
    }

    /// List the persons associated with an account's legal entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an
    /// error.
    pub async fn list_persons(
        &self,
        account_id: &AccountId,
        params: &ListPersonsParams,
    ) -> Result<List<Person>, ClientError> {
        self.get_query(&format!("/v1/accounts/{account_id}/persons"), params)
            .await
    }

    /// List the capabilities associated with an account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an
    /// error.
    pub async fn list_capabilities(
        &self,
        account_id: &AccountId,
    ) -> Result<List<Capability>, ClientError> {
        self.get(&format!("/v1/accounts/{account_id}/capabilities"))
            .await
    }

    /// Retrieve information about an account capability.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an
    /// error.
    pub async fn retrieve_capability(
        &self,
        account_id: &AccountId,
        capability_id: &CapabilityId,
    ) -> Result<Capability, ClientError> {
        self.get(&format!(
            "/v1/accounts/{account_id}/capabilities/{capability_id}"
        ))
        .await
    }

    /// Update an existing account capability.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an
    /// error.
    pub async fn update_capability(
        &self,
        account_id: &AccountId,
        capability_id: &CapabilityId,
        params: &UpdateCapabilityParams,
    ) -> Result<Capability, ClientError> {
        self.post(
            &format!("/v1/accounts/{account_id}/capabilities/{capability_id}"),
            params,
        )
        .await
    }
}
