//! Discount endpoints.
//!
//! Discounts are created by attaching coupons to customers or
//! subscriptions; the only direct discount operations are removals.

use payvault_core::{CustomerId, DeletedDiscount, SubscriptionId};

use crate::client::PayvaultClient;
use crate::error::ClientError;

impl PayvaultClient {
    /// Remove the discount currently applied to a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an
    /// error.
    pub async fn delete_customer_discount(
        &self,
        customer_id: &CustomerId,
    ) -> Result<DeletedDiscount, ClientError> {
        self.delete(&format!("/v1/customers/{customer_id}/discount"))
            .await
    }

    /// Remove the discount currently applied to a subscription.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an
    /// error.
    pub async fn delete_subscription_discount(
        &self,
        subscription_id: &SubscriptionId,
    ) -> Result<DeletedDiscount, ClientError> {
        self.delete(&format!("/v1/subscriptions/{subscription_id}/discount"))
            .await
    }
}
