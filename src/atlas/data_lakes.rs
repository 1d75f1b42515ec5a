//! Data Lakes
//!
//! Typed records for Atlas Data Lakes and the CRUD service that exchanges
//! them with `/groups/{group_id}/dataLakes`.

use super::client::AtlasClient;
use super::http::ResponseMeta;
use crate::error::Result;
use serde::{Deserialize, Deserializer, Serialize};

const DATA_LAKES_PATH: &str = "dataLakes";

/// Decode `null` the same way as an absent key
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// Records
// =============================================================================

/// A data lake as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataLake {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_provider_config: Option<CloudProviderConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_process_region: Option<DataProcessRegion>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub group_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hostnames: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub storage: Storage,
}

/// Cloud provider access configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CloudProviderConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws: Option<AwsCloudProviderConfig>,
}

/// AWS IAM configuration; every field is optional so partial requests only
/// carry what the caller set
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsCloudProviderConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(
        rename = "iamAssumedRoleARN",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub iam_assumed_role_arn: Option<String>,
    #[serde(rename = "iamUserARN", default, skip_serializing_if = "Option::is_none")]
    pub iam_user_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_s3_bucket: Option<String>,
}

/// Region where queries are processed
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataProcessRegion {
    #[serde(default, deserialize_with = "null_as_default")]
    pub cloud_provider: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub region: String,
}

/// Storage configuration: virtual databases and the stores backing them
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Storage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub databases: Vec<DataLakeDatabase>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stores: Vec<DataLakeStore>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataLakeDatabase {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub collections: Vec<DataLakeCollection>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub views: Vec<DataLakeDatabaseView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_wildcard_collections: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataLakeCollection {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data_sources: Vec<DataLakeDataSource>,
}

/// Maps a collection onto a path inside a store
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataLakeDataSource {
    #[serde(default, deserialize_with = "null_as_default")]
    pub store_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub default_format: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
}

/// Aggregation pipeline exposed as a view
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DataLakeDatabaseView {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pipeline: String,
}

/// An S3 bucket (or other provider store) read by the data lake
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataLakeStore {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub provider: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bucket: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prefix: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub delimiter: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_tags: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub additional_storage_classes: Vec<String>,
}

// =============================================================================
// Partial requests
// =============================================================================

/// Body of `POST /groups/{group_id}/dataLakes`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataLakeCreateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_provider_config: Option<CloudProviderConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_process_region: Option<DataProcessRegion>,
}

impl DataLakeCreateRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_cloud_provider_config(mut self, config: CloudProviderConfig) -> Self {
        self.cloud_provider_config = Some(config);
        self
    }

    pub fn with_data_process_region(mut self, region: DataProcessRegion) -> Self {
        self.data_process_region = Some(region);
        self
    }
}

/// Body of `PATCH /groups/{group_id}/dataLakes/{name}`; the server merges
/// only the fields present
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataLakeUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_provider_config: Option<CloudProviderConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_process_region: Option<DataProcessRegion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<Storage>,
}

impl DataLakeUpdateRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cloud_provider_config(mut self, config: CloudProviderConfig) -> Self {
        self.cloud_provider_config = Some(config);
        self
    }

    pub fn with_data_process_region(mut self, region: DataProcessRegion) -> Self {
        self.data_process_region = Some(region);
        self
    }

    pub fn with_storage(mut self, storage: Storage) -> Self {
        self.storage = Some(storage);
        self
    }

    /// True when nothing would be sent
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl CloudProviderConfig {
    pub fn aws(config: AwsCloudProviderConfig) -> Self {
        Self { aws: Some(config) }
    }
}

impl DataProcessRegion {
    pub fn new(cloud_provider: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            cloud_provider: cloud_provider.into(),
            region: region.into(),
        }
    }
}

// =============================================================================
// Service
// =============================================================================

/// Data Lakes endpoints of a project
pub struct DataLakes<'a> {
    client: &'a AtlasClient,
}

impl<'a> DataLakes<'a> {
    pub(crate) fn new(client: &'a AtlasClient) -> Self {
        Self { client }
    }

    /// List all data lakes in a project
    pub async fn list(&self, group_id: &str) -> Result<(Vec<DataLake>, ResponseMeta)> {
        let url = self.client.group_url(group_id, DATA_LAKES_PATH)?;
        let (lakes, meta): (Option<Vec<DataLake>>, _) =
            self.client.http.get(&url, self.client.token()).await?;
        let lakes = lakes.unwrap_or_default();
        tracing::debug!("Listed {} data lakes in {}", lakes.len(), group_id);
        Ok((lakes, meta))
    }

    /// Get one data lake by name
    pub async fn get(&self, group_id: &str, name: &str) -> Result<(DataLake, ResponseMeta)> {
        let url = self
            .client
            .group_resource_url(group_id, DATA_LAKES_PATH, name)?;
        self.client.http.get(&url, self.client.token()).await
    }

    /// Create a data lake; server-assigned fields come back in the result
    pub async fn create(
        &self,
        group_id: &str,
        request: &DataLakeCreateRequest,
    ) -> Result<(DataLake, ResponseMeta)> {
        let url = self.client.group_url(group_id, DATA_LAKES_PATH)?;
        let (lake, meta): (DataLake, _) = self
            .client
            .http
            .post(&url, self.client.token(), request)
            .await?;
        tracing::info!("Created data lake {} in {}", lake.name, group_id);
        Ok((lake, meta))
    }

    /// Update a data lake with the fields set on `request`
    pub async fn update(
        &self,
        group_id: &str,
        name: &str,
        request: &DataLakeUpdateRequest,
    ) -> Result<(DataLake, ResponseMeta)> {
        let url = self
            .client
            .group_resource_url(group_id, DATA_LAKES_PATH, name)?;
        if request.is_empty() {
            tracing::warn!("Sending empty update for data lake {}", name);
        }
        self.client
            .http
            .patch(&url, self.client.token(), request)
            .await
    }

    /// Delete a data lake
    pub async fn delete(&self, group_id: &str, name: &str) -> Result<ResponseMeta> {
        let url = self
            .client
            .group_resource_url(group_id, DATA_LAKES_PATH, name)?;
        let meta = self.client.http.delete(&url, self.client.token()).await?;
        tracing::info!("Deleted data lake {} in {}", name, group_id);
        Ok(meta)
    }
}
