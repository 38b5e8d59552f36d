//! Commercial operations for MockDevice42Client
//!
//! Handles customers and service levels

use super::{envelope, envelope_short, MockDevice42Client};
use crate::error::Device42Error;
use crate::models::*;

pub async fn create_customer(
    client: &MockDevice42Client,
    params: &CustomerParams,
) -> Result<ApiMessage, Device42Error> {
    params.validate()?;
    let mut customers = client.customers.lock().unwrap();
    let id = customers
        .get(&params.name)
        .and_then(|c| c.customer_id)
        .unwrap_or_else(|| client.next_id());
    customers.insert(
        params.name.clone(),
        Customer {
            customer_id: Some(id),
            name: params.name.clone(),
            contact_info: params.contact_info.clone(),
            notes: params.notes.clone(),
            ..Customer::default()
        },
    );
    Ok(envelope("Customer added or updated.", id, &params.name))
}

pub async fn create_customer_contact(
    client: &MockDevice42Client,
    params: &CustomerContactParams,
) -> Result<ApiMessage, Device42Error> {
    params.validate()?;
    let mut customers = client.customers.lock().unwrap();
    let customer = customers
        .get_mut(&params.customer)
        .ok_or_else(|| Device42Error::NotFound(format!("Customer {} not found", params.customer)))?;
    customer.contacts.push(CustomerContact {
        name: Some(params.name.clone()),
        kind: params.kind.clone(),
        email: params.email.clone(),
        phone: params.phone.clone(),
        address: params.address.clone(),
    });
    let id = customer.customer_id.unwrap_or_default();
    Ok(envelope_short(
        "customer contact record added/updated successfully",
        id,
        &params.name,
    ))
}

pub async fn list_customers(
    client: &MockDevice42Client,
    _reload: bool,
) -> Result<Vec<Customer>, Device42Error> {
    Ok(client.customers.lock().unwrap().values().cloned().collect())
}

pub async fn get_customer_by_name(
    client: &MockDevice42Client,
    name: &str,
    _reload: bool,
) -> Result<Option<Customer>, Device42Error> {
    Ok(client.customers.lock().unwrap().get(name).cloned())
}

pub async fn list_service_levels(
    client: &MockDevice42Client,
    _reload: bool,
) -> Result<Vec<ServiceLevel>, Device42Error> {
    Ok(client.service_levels.lock().unwrap().values().cloned().collect())
}

pub async fn get_service_level_by_name(
    client: &MockDevice42Client,
    name: &str,
    _reload: bool,
) -> Result<Option<ServiceLevel>, Device42Error> {
    Ok(client.service_levels.lock().unwrap().get(name).cloned())
}
