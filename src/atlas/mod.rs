//! Atlas API interaction module
//!
//! This module provides the core functionality for talking to the MongoDB
//! Atlas administration API: credentials, the HTTP transport, the client
//! handle, and the typed resource services.
//!
//! # Module Structure
//!
//! - [`auth`] - Bearer token credentials
//! - [`client`] - Main Atlas client and URL builders
//! - [`http`] - HTTP transport and response metadata
//! - [`data_lakes`] - Data Lakes records and CRUD service
//!
//! # Example
//!
//! ```ignore
//! use matlas::atlas::client::AtlasClient;
//! use matlas::atlas::auth::Credentials;
//!
//! async fn example() -> matlas::Result<()> {
//!     let client = AtlasClient::new(
//!         "https://cloud.mongodb.com/api/atlas/v1.0",
//!         Credentials::bearer("token"),
//!     )?;
//!     let (lake, _) = client.data_lakes().get("my-group", "UserMetricData").await?;
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod data_lakes;
pub mod http;
