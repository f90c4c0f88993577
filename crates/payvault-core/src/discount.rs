//! Discount and coupon types.

use serde::{Deserialize, Serialize};

use crate::ids::{CouponId, CustomerId, SubscriptionId};

/// A discount applied to a customer or subscription by a coupon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Discount {
    /// String representing the object's type. Always `discount`.
    #[serde(default)]
    pub object: String,
    /// The coupon that created this discount.
    pub coupon: Coupon,
    /// The customer the discount applies to.
    #[serde(default)]
    pub customer: Option<CustomerId>,
    /// If the coupon has a `repeating` duration, the date the discount
    /// ends. Null for `once` and `forever` coupons.
    #[serde(default)]
    pub end: Option<i64>,
    /// Date the coupon was applied, in seconds since the Unix epoch.
    #[serde(default)]
    pub start: i64,
    /// The subscription this discount is applied to, if any.
    #[serde(default)]
    pub subscription: Option<SubscriptionId>,
}

/// A coupon: a percent-off or amount-off reduction applied via discounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coupon {
    /// Unique identifier for the object.
    pub id: CouponId,
    /// String representing the object's type. Always `coupon`.
    #[serde(default)]
    pub object: String,
    /// Amount taken off the subtotal, in the smallest currency unit.
    #[serde(default)]
    pub amount_off: Option<i64>,
    /// Time at which the object was created. Measured in seconds since the
    /// Unix epoch.
    #[serde(default)]
    pub created: i64,
    /// Currency of `amount_off`, for amount-off coupons.
    #[serde(default)]
    pub currency: Option<String>,
    /// How long a customer who applies this coupon will get the discount.
    pub duration: CouponDuration,
    /// For `repeating` coupons, the number of months the discount lasts.
    #[serde(default)]
    pub duration_in_months: Option<i64>,
    /// Whether the object exists in live mode.
    #[serde(default)]
    pub livemode: bool,
    /// Set of key-value pairs attached to the object.
    #[serde(default)]
    pub metadata: serde_json::Value,
    /// Name of the coupon displayed to customers.
    #[serde(default)]
    pub name: Option<String>,
    /// Percent taken off the subtotal, for percent-off coupons.
    #[serde(default)]
    pub percent_off: Option<f64>,
    /// Whether the coupon can still be applied.
    #[serde(default)]
    pub valid: bool,
}

/// How long a coupon's discount lasts once applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CouponDuration {
    /// The discount applies forever.
    Forever,
    /// The discount applies to the first invoice only.
    Once,
    /// The discount applies for `duration_in_months` months.
    Repeating,
}

/// A deleted discount stub.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedDiscount {
    /// String representing the object's type. Always `discount`.
    #[serde(default)]
    pub object: String,
    /// Always true for a deleted object.
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_discount_response() {
        let json = r#"{
            "object": "discount",
            "coupon": {
                "id": "SUMMER25",
                "object": "coupon",
                "created": 1574126900,
                "duration": "repeating",
                "duration_in_months": 3,
                "name": "Summer promo",
                "percent_off": 25.0,
                "valid": true
            },
            "customer": "cus_G2TZoMrW6QJnuq",
            "end": 1582075700,
            "start": 1574126948,
            "subscription": null
        }"#;

        let discount: Discount = serde_json::from_str(json).unwrap();
        assert_eq!(discount.coupon.duration, CouponDuration::Repeating);
        assert_eq!(discount.coupon.percent_off, Some(25.0));
        assert_eq!(discount.end, Some(1_582_075_700));
        assert!(discount.subscription.is_none());
    }
}
