//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `itemstore_core::storage`,
//! keeping the service's own message so callers see it unchanged.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use itemstore_core::storage::RepositoryError;

/// Map any operation's SDK error to RepositoryError.
///
/// Transport failures become `ConnectionFailed`. Everything the service
/// answered (validation, throttling, missing table, malformed expression)
/// becomes `QueryFailed` with the service message.
pub fn map_sdk_error<E, R>(err: SdkError<E, R>, operation: &'static str) -> RepositoryError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: Debug + Send + Sync + 'static,
{
    match &err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => {
            RepositoryError::ConnectionFailed(format!(
                "{operation} failed: {}",
                DisplayErrorContext(&err)
            ))
        }
        _ => match err.message() {
            Some(message) => RepositoryError::QueryFailed(message.to_string()),
            None => RepositoryError::QueryFailed(format!(
                "{operation} failed: {}",
                DisplayErrorContext(&err)
            )),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::operation::get_item::GetItemError;

    #[test]
    fn test_timeout_maps_to_connection_failed() {
        let err = SdkError::<GetItemError, ()>::timeout_error("request timed out");

        let mapped = map_sdk_error(err, "GetItem");

        assert!(matches!(
            mapped,
            RepositoryError::ConnectionFailed(ref message) if message.starts_with("GetItem failed")
        ));
    }

    #[test]
    fn test_construction_failure_maps_to_query_failed() {
        let err = SdkError::<GetItemError, ()>::construction_failure("missing table name");

        let mapped = map_sdk_error(err, "GetItem");

        assert!(matches!(
            mapped,
            RepositoryError::QueryFailed(ref message) if message.starts_with("GetItem failed")
        ));
    }
}
