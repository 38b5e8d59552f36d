//! Extras operations for MockDevice42Client
//!
//! Handles custom fields and history

use super::{envelope_short, MockDevice42Client};
use crate::error::Device42Error;
use crate::models::*;

pub async fn put_custom_field(
    client: &MockDevice42Client,
    target: CustomFieldTarget,
    params: &CustomFieldParams,
) -> Result<ApiMessage, Device42Error> {
    params.validate()?;
    let id = client.next_id();
    client
        .custom_fields
        .lock()
        .unwrap()
        .push((target, params.clone()));
    Ok(envelope_short(
        "custom key pair values added or updated",
        id,
        &params.name,
    ))
}

pub async fn list_history(client: &MockDevice42Client) -> Result<Vec<HistoryEntry>, Device42Error> {
    Ok(client.history.lock().unwrap().clone())
}
