//! Device42 REST API Client
//!
//! A Rust client library for interacting with the Device42 CMDB REST API.
//! Provides type-safe models and methods for DCIM, IPAM and asset
//! operations.
//!
//! # Example
//!
//! ```no_run
//! use device42_client::{Device42Client, DeviceParams, RackMount, SlotRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a client
//! let client = Device42Client::new(
//!     "https://d42.example.com",
//!     "admin",
//!     "changeme",
//! )?;
//!
//! // Create a device
//! let params = DeviceParams {
//!     name: "TestDevice".to_string(),
//!     hardware: Some("Generic Hardware 1U".to_string()),
//!     in_service: Some(true),
//!     ..DeviceParams::default()
//! };
//! let rsp = client.create_device(&params).await?;
//! println!("device id: {:?}", rsp.result_id());
//!
//! // Mount it into a rack at the next free slot
//! client
//!     .mount_device(&RackMount {
//!         rack_id: 80,
//!         device: "TestDevice".to_string(),
//!         position: SlotRequest::Auto,
//!     })
//!     .await?;
//!
//! // Walk a rack's occupancy, honoring its numbering direction
//! let rack = client.get_rack(80).await?;
//! for device in rack.devices_in_order() {
//!     println!("{:?} at {:?}", device.name, device.start_at);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **DCIM Operations**: buildings, rooms, racks with slot occupancy,
//!   devices, hardware models, assets, PDUs, patch panels
//! - **IPAM Operations**: MAC/IP addresses, subnets, VLANs, switch ports,
//!   DNS records
//! - **Caching**: name-keyed dictionaries with explicit reload for the
//!   collections the API is asked about repeatedly
//! - **Mocking**: `Device42ClientTrait` plus an in-memory mock behind the
//!   `test-util` feature

pub mod client;
pub mod common;
pub mod error;
pub mod models;
#[path = "trait.rs"]
pub mod device42_trait;
#[cfg(feature = "test-util")]
pub mod mock;

pub use client::Device42Client;
pub use common::HttpClient;
pub use device42_trait::Device42ClientTrait;
pub use error::Device42Error;
pub use models::*;
#[cfg(feature = "test-util")]
pub use mock::MockDevice42Client;
