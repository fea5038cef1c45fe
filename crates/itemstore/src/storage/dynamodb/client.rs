//! AWS SDK client setup.

use aws_sdk_dynamodb::config::Credentials;
use aws_sdk_dynamodb::Client;

use crate::config::StoreConfig;

/// Provider name reported for credentials passed in through configuration.
const STATIC_CREDENTIALS_PROVIDER: &str = "itemstore-static";

/// Creates a DynamoDB client with the given configuration.
///
/// Static credentials, when configured, replace the default credential
/// chain. Otherwise the SDK resolves credentials the usual way.
pub async fn create_client(config: &StoreConfig) -> Client {
    let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()));

    if let Some(endpoint) = &config.endpoint_url {
        sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
    }

    if let Some((access_key_id, secret_access_key)) = config.static_credentials() {
        sdk_config_loader = sdk_config_loader.credentials_provider(Credentials::new(
            access_key_id,
            secret_access_key,
            None,
            None,
            STATIC_CREDENTIALS_PROVIDER,
        ));
    }

    let sdk_config = sdk_config_loader.load().await;
    Client::new(&sdk_config)
}
