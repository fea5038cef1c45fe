use std::fmt;

use clap::Args;

/// Store connection settings, read once at startup.
///
/// Static credentials are optional. When both halves are given they take
/// precedence over the AWS default credential chain.
#[derive(Args, Clone)]
#[cfg_attr(not(feature = "dynamodb"), allow(dead_code))]
pub struct StoreConfig {
    /// DynamoDB table holding the items
    #[arg(long, default_value = "testing-docker", env = "DYNAMODB_TABLE_NAME")]
    pub table_name: String,

    /// AWS region of the table
    #[arg(long, default_value = "us-east-1", env = "AWS_REGION")]
    pub region: String,

    /// Custom endpoint URL (for local DynamoDB)
    #[arg(long, env = "AWS_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,

    /// Static access key id
    #[arg(long, env = "AWS_ACCESS_KEY_ID", hide_env_values = true)]
    pub access_key_id: Option<String>,

    /// Static secret access key
    #[arg(long, env = "AWS_SECRET_ACCESS_KEY", hide_env_values = true)]
    pub secret_access_key: Option<String>,
}

#[cfg_attr(not(feature = "dynamodb"), allow(dead_code))]
impl StoreConfig {
    /// Returns `(access_key_id, secret_access_key)` when both are configured.
    pub fn static_credentials(&self) -> Option<(&str, &str)> {
        match (&self.access_key_id, &self.secret_access_key) {
            (Some(key), Some(secret)) => Some((key.as_str(), secret.as_str())),
            _ => None,
        }
    }

    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({url}), table {}", self.table_name),
            None => format!(
                "AWS DynamoDB (region: {}), table {}",
                self.region, self.table_name
            ),
        }
    }
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("table_name", &self.table_name)
            .field("region", &self.region)
            .field("endpoint_url", &self.endpoint_url)
            .field("access_key_id", &self.access_key_id)
            .field(
                "secret_access_key",
                &self.secret_access_key.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
