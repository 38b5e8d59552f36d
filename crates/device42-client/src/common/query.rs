//! Collection fetching for the Device42 API
//!
//! The 1.0 API wraps most collections in a resource-named key
//! (`{"racks": [...]}`, `{"Customers": [...]}`) while a few endpoints
//! return a bare array. These helpers unwrap either shape into `Vec<T>`.

use crate::common::HttpClient;
use crate::error::Device42Error;
use serde::Deserialize;

/// Fetch a collection wrapped in a named key
pub async fn fetch_keyed<T: for<'de> Deserialize<'de>>(
    http: &HttpClient,
    path: &str,
    key: &str,
) -> Result<Vec<T>, Device42Error> {
    let body: serde_json::Value = http.get(path).await?;
    let items = body
        .get(key)
        .cloned()
        .ok_or_else(|| {
            Device42Error::Api(format!(
                "GET {} response is missing the \"{}\" collection",
                path, key
            ))
        })?;
    serde_json::from_value(items).map_err(Device42Error::Serialization)
}

/// Fetch a bare-array collection
pub async fn fetch_list<T: for<'de> Deserialize<'de>>(
    http: &HttpClient,
    path: &str,
) -> Result<Vec<T>, Device42Error> {
    http.get(path).await
}
