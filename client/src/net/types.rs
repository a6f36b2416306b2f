//! Wire DTOs for the deployment backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON (camelCase where it uses it). Fields
//! the backend may omit default instead of failing, so a partially filled
//! record still renders.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// `GET /api/admin/last-deployment` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminLastDeployment {
    #[serde(default)]
    pub last_deployment: Option<String>,
}

/// Successful deploy response (both deploy endpoints).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploySuccess {
    pub timestamp: String,
    #[serde(default)]
    pub logs: Vec<String>,
}

/// Failed deploy response body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployFailure {
    pub error: String,
    #[serde(default)]
    pub logs: Vec<String>,
}

/// `GET /api/deployment/last` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub commit: Option<String>,
}

/// One entry of `GET /api/deployment/commits`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub hash: String,
    pub message: String,
    pub author: String,
    pub timestamp: String,
}

impl Commit {
    /// First seven characters of the hash.
    pub fn short_hash(&self) -> &str {
        self.hash
            .char_indices()
            .nth(7)
            .map_or(self.hash.as_str(), |(idx, _)| &self.hash[..idx])
    }

    /// First line of the commit message.
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }
}

/// One entry of `GET /api/deployment/notes`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentNote {
    pub timestamp: String,
    pub notes: String,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub deployment_id: Option<String>,
}

/// `POST /api/deployment/deploy` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployRequest {
    pub notes: String,
}

/// `POST /api/deployment/notes` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveNotesRequest {
    pub notes: String,
    pub timestamp: String,
}

/// Acknowledgement for writes. Every field is optional; an empty object is
/// a valid ack.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ack {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Deployment ids arrive as strings from some backends and numbers from
/// others.
fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!("unexpected deploymentId: {other}"))),
    }
}
