//! Delivery step controller
//!
//! One flat form covering the customer record and the delivery record.
//! Validation is pure: it takes today's date as input and either yields
//! both typed records or every field problem at once, so the screen can
//! mark all invalid fields in a single pass. Submitting persists the
//! records through [`CheckoutState`].

use cakeshop_cart::{
    Address, CheckoutState, CustomerDetails, CustomerType, DeliveryDetails, DeliveryMethod,
};
use cakeshop_core::Result;
use chrono::{Days, NaiveDate};

/// Selectable delivery time windows
pub const TIME_SLOTS: &[&str] = &[
    "10:00 - 12:00",
    "12:00 - 14:00",
    "14:00 - 16:00",
    "16:00 - 18:00",
    "18:00 - 20:00",
];

/// Bakery pickup locations
pub const PICKUP_LOCATIONS: &[&str] = &[
    "Cukiernia Centrum, ul. Marszałkowska 10, Warszawa",
    "Cukiernia Mokotów, ul. Puławska 25, Warszawa",
    "Cukiernia Praga, ul. Targowa 15, Warszawa",
];

/// How far ahead an order can be scheduled, in days
pub const MAX_LEAD_DAYS: u64 = 30;

/// One form field problem, keyed by field name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: String,
}

impl FieldIssue {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// The raw delivery form, as typed
///
/// Everything is a string until validation; the typed records only exist
/// once the whole form passes.
#[derive(Debug, Clone, Default)]
pub struct DeliveryForm {
    pub customer_type: Option<CustomerType>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company_name: String,
    pub nip: String,
    pub delivery_method: Option<DeliveryMethod>,
    pub street: String,
    pub building_number: String,
    pub apartment_number: String,
    pub zip_code: String,
    pub city: String,
    pub pickup_location: String,
    pub delivery_date: Option<NaiveDate>,
    pub delivery_time: String,
    pub notes: String,
}

impl DeliveryForm {
    /// Pre-fills the form from previously captured records
    pub fn from_checkout(state: &CheckoutState) -> Self {
        let mut form = Self::default();
        if let Some(customer) = state.customer_details() {
            form.customer_type = Some(customer.customer_type);
            form.first_name = customer.first_name.clone();
            form.last_name = customer.last_name.clone();
            form.email = customer.email.clone();
            form.phone = customer.phone.clone();
            form.company_name = customer.company_name.clone().unwrap_or_default();
            form.nip = customer.nip.clone().unwrap_or_default();
        }
        if let Some(delivery) = state.delivery_details() {
            form.delivery_method = Some(delivery.delivery_method);
            form.delivery_date = delivery.delivery_date;
            form.delivery_time = delivery.delivery_time.clone().unwrap_or_default();
            form.pickup_location = delivery.pickup_location.clone().unwrap_or_default();
            form.notes = delivery.notes.clone().unwrap_or_default();
            if let Some(address) = delivery.address.as_ref() {
                form.street = address.street.clone();
                form.building_number = address.building_number.clone();
                form.apartment_number = address.apartment_number.clone().unwrap_or_default();
                form.zip_code = address.zip_code.clone();
                form.city = address.city.clone();
            }
        }
        form
    }

    /// Validates the whole form against today's date
    ///
    /// Collects every problem instead of stopping at the first, in the
    /// form's field order.
    pub fn validate(
        &self,
        today: NaiveDate,
    ) -> std::result::Result<(CustomerDetails, DeliveryDetails), Vec<FieldIssue>> {
        let mut issues = Vec::new();

        let customer_type = self.customer_type.unwrap_or(CustomerType::Person);
        if self.first_name.trim().chars().count() < 2 {
            issues.push(FieldIssue::new(
                "firstName",
                "First name must be at least 2 characters",
            ));
        }
        if self.last_name.trim().chars().count() < 2 {
            issues.push(FieldIssue::new(
                "lastName",
                "Last name must be at least 2 characters",
            ));
        }
        if !is_plausible_email(self.email.trim()) {
            issues.push(FieldIssue::new("email", "Enter a valid email address"));
        }
        if digit_count(&self.phone) < 9 {
            issues.push(FieldIssue::new(
                "phone",
                "Phone number must contain at least 9 digits",
            ));
        }
        if customer_type == CustomerType::Company {
            if self.company_name.trim().is_empty() {
                issues.push(FieldIssue::new("companyName", "Company name is required"));
            }
            if digit_count(&self.nip) != 10 {
                issues.push(FieldIssue::new("nip", "NIP must contain exactly 10 digits"));
            }
        }

        let Some(method) = self.delivery_method else {
            issues.push(FieldIssue::new("deliveryMethod", "Choose a delivery method"));
            return Err(issues);
        };
        match method {
            DeliveryMethod::Shipping => {
                if self.street.trim().is_empty() {
                    issues.push(FieldIssue::new("street", "Street is required"));
                }
                if self.building_number.trim().is_empty() {
                    issues.push(FieldIssue::new(
                        "buildingNumber",
                        "Building number is required",
                    ));
                }
                if !is_valid_zip(self.zip_code.trim()) {
                    issues.push(FieldIssue::new("zipCode", "Zip code must match XX-XXX"));
                }
                if self.city.trim().is_empty() {
                    issues.push(FieldIssue::new("city", "City is required"));
                }
            }
            DeliveryMethod::Pickup => {
                if self.pickup_location.trim().is_empty() {
                    issues.push(FieldIssue::new(
                        "pickupLocation",
                        "Choose a pickup location",
                    ));
                }
            }
        }

        match self.delivery_date {
            None => issues.push(FieldIssue::new("deliveryDate", "Choose a delivery date")),
            Some(date) => {
                let earliest = today + Days::new(1);
                let latest = today + Days::new(MAX_LEAD_DAYS);
                if date < earliest {
                    issues.push(FieldIssue::new(
                        "deliveryDate",
                        "Orders need at least one day of lead time",
                    ));
                } else if date > latest {
                    issues.push(FieldIssue::new(
                        "deliveryDate",
                        "Orders can be scheduled at most 30 days ahead",
                    ));
                }
            }
        }
        if self.delivery_time.trim().is_empty() {
            issues.push(FieldIssue::new("deliveryTime", "Choose a time window"));
        }

        if !issues.is_empty() {
            return Err(issues);
        }

        let customer = CustomerDetails {
            customer_type,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            company_name: (customer_type == CustomerType::Company)
                .then(|| self.company_name.trim().to_string()),
            nip: (customer_type == CustomerType::Company).then(|| self.nip.trim().to_string()),
        };
        let delivery = DeliveryDetails {
            delivery_method: method,
            delivery_date: self.delivery_date,
            delivery_time: Some(self.delivery_time.trim().to_string()),
            address: (method == DeliveryMethod::Shipping).then(|| Address {
                street: self.street.trim().to_string(),
                building_number: self.building_number.trim().to_string(),
                apartment_number: non_empty(&self.apartment_number),
                zip_code: self.zip_code.trim().to_string(),
                city: self.city.trim().to_string(),
            }),
            pickup_location: (method == DeliveryMethod::Pickup)
                .then(|| self.pickup_location.trim().to_string()),
            notes: non_empty(&self.notes),
        };
        Ok((customer, delivery))
    }

    /// Validates and persists both records through the checkout state
    pub fn submit(
        &self,
        today: NaiveDate,
        checkout: &mut CheckoutState,
    ) -> std::result::Result<(), Vec<FieldIssue>> {
        let (customer, delivery) = self.validate(today)?;
        persist(checkout, customer, delivery).map_err(|err| {
            vec![FieldIssue::new("form", err.to_string())]
        })
    }
}

fn persist(
    checkout: &mut CheckoutState,
    customer: CustomerDetails,
    delivery: DeliveryDetails,
) -> Result<()> {
    checkout.set_customer_details(customer)?;
    checkout.set_delivery_details(delivery)?;
    Ok(())
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn digit_count(value: &str) -> usize {
    value.chars().filter(char::is_ascii_digit).count()
}

/// Minimal shape check: something@something.something
fn is_plausible_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Polish postal code format: two digits, dash, three digits
fn is_valid_zip(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 6
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[2] == b'-'
        && bytes[3..].iter().all(u8::is_ascii_digit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cakeshop_store::MemoryStore;
    use std::sync::Arc;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 25).unwrap()
    }

    fn valid_shipping_form() -> DeliveryForm {
        DeliveryForm {
            customer_type: Some(CustomerType::Person),
            first_name: "Anna".to_string(),
            last_name: "Nowak".to_string(),
            email: "anna@example.com".to_string(),
            phone: "500 600 700".to_string(),
            delivery_method: Some(DeliveryMethod::Shipping),
            street: "Marszałkowska".to_string(),
            building_number: "45".to_string(),
            zip_code: "00-648".to_string(),
            city: "Warszawa".to_string(),
            delivery_date: Some(today() + Days::new(3)),
            delivery_time: TIME_SLOTS[1].to_string(),
            ..DeliveryForm::default()
        }
    }

    #[test]
    fn test_valid_shipping_form_yields_records() {
        let (customer, delivery) = valid_shipping_form().validate(today()).unwrap();
        assert_eq!(customer.first_name, "Anna");
        assert!(customer.company_name.is_none());
        assert_eq!(delivery.delivery_method, DeliveryMethod::Shipping);
        assert_eq!(delivery.address.as_ref().unwrap().zip_code, "00-648");
        assert!(delivery.pickup_location.is_none());
        assert_eq!(delivery.delivery_time.as_deref(), Some("12:00 - 14:00"));
    }

    #[test]
    fn test_collects_all_issues_at_once() {
        let form = DeliveryForm {
            delivery_method: Some(DeliveryMethod::Shipping),
            ..DeliveryForm::default()
        };
        let issues = form.validate(today()).unwrap_err();
        let fields: Vec<&str> = issues.iter().map(|i| i.field).collect();
        assert!(fields.contains(&"firstName"));
        assert!(fields.contains(&"email"));
        assert!(fields.contains(&"phone"));
        assert!(fields.contains(&"street"));
        assert!(fields.contains(&"zipCode"));
        assert!(fields.contains(&"deliveryDate"));
        assert!(fields.contains(&"deliveryTime"));
    }

    #[test]
    fn test_company_requires_name_and_nip() {
        let mut form = valid_shipping_form();
        form.customer_type = Some(CustomerType::Company);
        let issues = form.validate(today()).unwrap_err();
        let fields: Vec<&str> = issues.iter().map(|i| i.field).collect();
        assert_eq!(fields, vec!["companyName", "nip"]);

        form.company_name = "Słodkie Sp. z o.o.".to_string();
        form.nip = "123-456-78-90".to_string();
        let (customer, _) = form.validate(today()).unwrap();
        assert_eq!(customer.nip.as_deref(), Some("123-456-78-90"));
    }

    #[test]
    fn test_pickup_requires_location_not_address() {
        let mut form = valid_shipping_form();
        form.delivery_method = Some(DeliveryMethod::Pickup);
        form.street = String::new();
        form.zip_code = String::new();
        let issues = form.validate(today()).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "pickupLocation");

        form.pickup_location = PICKUP_LOCATIONS[0].to_string();
        let (_, delivery) = form.validate(today()).unwrap();
        assert!(delivery.address.is_none());
        assert_eq!(
            delivery.pickup_location.as_deref(),
            Some(PICKUP_LOCATIONS[0])
        );
    }

    #[test]
    fn test_date_lead_time_window() {
        let mut form = valid_shipping_form();

        form.delivery_date = Some(today());
        let issues = form.validate(today()).unwrap_err();
        assert!(issues[0].message.contains("lead time"));

        form.delivery_date = Some(today() + Days::new(31));
        let issues = form.validate(today()).unwrap_err();
        assert!(issues[0].message.contains("30 days"));

        form.delivery_date = Some(today() + Days::new(1));
        assert!(form.validate(today()).is_ok());
        form.delivery_date = Some(today() + Days::new(30));
        assert!(form.validate(today()).is_ok());
    }

    #[test]
    fn test_zip_format() {
        assert!(is_valid_zip("00-648"));
        assert!(!is_valid_zip("00648"));
        assert!(!is_valid_zip("006-48"));
        assert!(!is_valid_zip("ab-cde"));
    }

    #[test]
    fn test_email_shape() {
        assert!(is_plausible_email("anna@example.com"));
        assert!(!is_plausible_email("anna@example"));
        assert!(!is_plausible_email("anna.example.com"));
        assert!(!is_plausible_email("@example.com"));
    }

    #[test]
    fn test_submit_persists_and_prefills() {
        let mut checkout = CheckoutState::hydrate(Arc::new(MemoryStore::new()));
        valid_shipping_form().submit(today(), &mut checkout).unwrap();
        assert!(checkout.customer_details().is_some());
        assert!(checkout.delivery_details().is_some());

        let prefilled = DeliveryForm::from_checkout(&checkout);
        assert_eq!(prefilled.first_name, "Anna");
        assert_eq!(prefilled.zip_code, "00-648");
        assert_eq!(prefilled.delivery_method, Some(DeliveryMethod::Shipping));
    }
}
