use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::ProviderError;

/// Run `future` unless `cancel` fires first. The pending future is dropped on
/// cancellation.
pub(crate) async fn or_cancelled<F: Future>(
    cancel: &CancellationToken,
    future: F,
) -> Result<F::Output, ProviderError> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(ProviderError::Cancelled),
        output = future => Ok(output),
    }
}
