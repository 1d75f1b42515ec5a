//! matlas - typed client for the MongoDB Atlas administration API
//!
//! The crate wraps the Atlas REST endpoints for Data Lakes behind a small,
//! strongly typed async client. Every call is a single request/response; the
//! client holds no cache and performs no retries.
//!
//! # Example
//!
//! ```ignore
//! use matlas::{AtlasClient, Config};
//!
//! async fn example() -> Result<(), matlas::AtlasError> {
//!     let client = AtlasClient::from_config(&Config::load())?;
//!     let (lakes, _meta) = client.data_lakes().list("6c7498dg87d9e6526801572b").await?;
//!     for lake in lakes {
//!         println!("{} ({})", lake.name, lake.state);
//!     }
//!     Ok(())
//! }
//! ```

pub mod atlas;
pub mod config;
pub mod error;
pub mod logging;

pub use atlas::auth::Credentials;
pub use atlas::client::AtlasClient;
pub use atlas::data_lakes::{
    AwsCloudProviderConfig, CloudProviderConfig, DataLake, DataLakeCollection,
    DataLakeCreateRequest, DataLakeDataSource, DataLakeDatabase, DataLakeDatabaseView,
    DataLakeStore, DataLakeUpdateRequest, DataLakes, DataProcessRegion, Storage,
};
pub use atlas::http::{AtlasHttpClient, ResponseMeta};
pub use config::Config;
pub use error::{format_atlas_error, ApiErrorBody, AtlasError, Result};

/// Version reported in the User-Agent header
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
