//! Per-call time bound for link store calls.

use std::future::Future;
use std::time::Duration;

use crate::error::AppError;

/// Runs one storage call, failing with [`AppError::Storage`] once `limit` elapses.
///
/// Errors from the call itself are converted through `From`, so `sqlx::Error` keeps
/// its conflict/storage classification.
pub async fn with_store_timeout<T, E, F>(limit: Duration, call: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, E>>,
    AppError: From<E>,
{
    Ok(tokio::time::timeout(limit, call).await??)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_pending_call_times_out_as_storage_error() {
        let result = with_store_timeout(
            Duration::from_millis(20),
            std::future::pending::<Result<(), AppError>>(),
        )
        .await;

        match result {
            Err(AppError::Storage(message)) => assert!(message.contains("timed out")),
            other => panic!("expected storage error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fast_call_passes_through() {
        let value = with_store_timeout(Duration::from_secs(1), async { Ok::<_, AppError>(42) })
            .await
            .unwrap();

        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_driver_error_is_converted() {
        let result = with_store_timeout(Duration::from_secs(1), async {
            Err::<(), _>(sqlx::Error::PoolTimedOut)
        })
        .await;

        assert!(matches!(result, Err(AppError::Storage(_))));
    }
}
