use crate::ports::ReferenceResolver;
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use pokedex_domain::DomainError;
use std::sync::Arc;
use tokio::task::AbortHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Resolves one page of references concurrently, one task per reference.
///
/// Results keep the order of the input references regardless of completion
/// order. The first failure wins: the remaining tasks are aborted and no
/// partial collection is ever returned. Every spawned task is joined before
/// `resolve` returns, whatever its outcome.
///
/// Concurrency equals the number of references, i.e. the page size.
pub struct FanOutResolver<T> {
    resolver: Arc<dyn ReferenceResolver<T>>,
}

impl<T> Clone for FanOutResolver<T> {
    fn clone(&self) -> Self {
        Self {
            resolver: Arc::clone(&self.resolver),
        }
    }
}

/// Aborts every task it tracks when dropped, so a dropped `resolve`
/// future does not leave detached fetches running.
struct AbortGuard(Vec<AbortHandle>);

impl AbortGuard {
    fn abort_all(&self) {
        for handle in &self.0 {
            handle.abort();
        }
    }
}

impl Drop for AbortGuard {
    fn drop(&mut self) {
        self.abort_all();
    }
}

impl<T: Send + 'static> FanOutResolver<T> {
    pub fn new(resolver: Arc<dyn ReferenceResolver<T>>) -> Self {
        Self { resolver }
    }

    pub async fn resolve(
        &self,
        references: Vec<String>,
        cancel: &CancellationToken,
    ) -> Result<Vec<T>, DomainError> {
        if references.is_empty() {
            return Ok(Vec::new());
        }

        let total = references.len();
        debug!(references = total, "Fanning out page resolution");

        let mut guard = AbortGuard(Vec::with_capacity(total));
        let mut futs = FuturesUnordered::new();

        for (index, reference) in references.into_iter().enumerate() {
            let resolver = Arc::clone(&self.resolver);
            let handle = tokio::spawn(async move {
                let result = resolver.resolve(&reference).await;
                (index, reference, result)
            });
            guard.0.push(handle.abort_handle());
            futs.push(handle);
        }

        let mut slots: Vec<Option<T>> = (0..total).map(|_| None).collect();
        let mut failure: Option<DomainError> = None;

        // Each join result is the single completion signal of its task:
        // success, failure, panic and abort all arrive here exactly once.
        loop {
            let joined = tokio::select! {
                biased;
                _ = cancel.cancelled(), if failure.is_none() => {
                    debug!(references = total, "Fan-out cancelled");
                    failure = Some(DomainError::Cancelled);
                    guard.abort_all();
                    continue;
                }
                joined = futs.next() => joined,
            };

            let Some(joined) = joined else {
                break;
            };

            match joined {
                Ok((index, _, Ok(item))) => {
                    if failure.is_none() {
                        slots[index] = Some(item);
                    }
                }
                Ok((index, reference, Err(e))) => {
                    if failure.is_none() {
                        warn!(index, reference = %reference, error = %e, "Reference resolution failed");
                        failure = Some(e);
                        guard.abort_all();
                    }
                }
                Err(e) => {
                    if failure.is_none() {
                        warn!(error = %e, "Resolution task did not complete");
                        failure = Some(DomainError::TaskFailed(e.to_string()));
                        guard.abort_all();
                    }
                }
            }
        }

        if let Some(e) = failure {
            return Err(e);
        }

        slots
            .into_iter()
            .collect::<Option<Vec<T>>>()
            .ok_or_else(|| DomainError::TaskFailed("missing resolution result".into()))
    }
}
