//! Customer and delivery detail records
//!
//! Entered once per checkout session and persisted independently of the
//! cart items. Dates travel as ISO-8601 strings on the wire and
//! re-hydrate to `chrono` date values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether the order is placed by a private person or a company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerType {
    Person,
    Company,
}

/// Customer identity and contact record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub customer_type: CustomerType,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Required for company customers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Tax identification number, required for company customers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nip: Option<String>,
}

/// A shipping address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub building_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apartment_number: Option<String>,
    pub zip_code: String,
    pub city: String,
}

/// How the order leaves the bakery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMethod {
    /// Courier shipping to an address; carries the flat delivery fee
    Shipping,
    /// Free pickup at one of the bakery locations
    Pickup,
}

/// Delivery method, address, and time-window record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryDetails {
    pub delivery_method: DeliveryMethod,
    /// Requested delivery or pickup date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<NaiveDate>,
    /// Requested time window, e.g. "12:00 - 14:00"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<String>,
    /// Shipping address, present when the method is shipping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Pickup location, present when the method is pickup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_location: Option<String>,
    /// Free-form notes for the courier or bakery
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
