use futures::future::BoxFuture;
use futures::stream::{self, Stream};
use pokedex_domain::DomainError;
use std::num::NonZeroUsize;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Half-open range `[start, end)` of collection positions requested from a worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start: usize,
    pub end: usize,
}

impl PageWindow {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

pub type PageFuture<T> = BoxFuture<'static, Result<Vec<T>, DomainError>>;

type PageWorker<T> = Box<dyn Fn(PageWindow, CancellationToken) -> PageFuture<T> + Send + Sync>;

/// Lazy, restartable cursor over a paginated collection.
///
/// The worker receives the window to produce and must return the items in
/// it: fewer than requested near the end of the collection, none once the
/// collection is exhausted. An empty page latches the paginator into its
/// terminal state; every later `next` returns `Ok(None)` without calling
/// the worker.
///
/// A failed, cancelled or dropped `next` leaves the cursor untouched, so the
/// same page is requested again on the following call.
///
/// `next` takes `&mut self`: one consumer advances a paginator at a time.
pub struct Paginator<T> {
    page_size: NonZeroUsize,
    offset: usize,
    done: bool,
    worker: PageWorker<T>,
}

impl<T: Send + 'static> Paginator<T> {
    pub fn new<F>(page_size: NonZeroUsize, worker: F) -> Self
    where
        F: Fn(PageWindow, CancellationToken) -> PageFuture<T> + Send + Sync + 'static,
    {
        Self {
            page_size,
            offset: 0,
            done: false,
            worker: Box::new(worker),
        }
    }

    /// Fetch the next page. `Ok(None)` signals the end of the sequence.
    pub async fn next(
        &mut self,
        cancel: &CancellationToken,
    ) -> Result<Option<Vec<T>>, DomainError> {
        if self.done {
            return Ok(None);
        }

        let window = PageWindow {
            start: self.offset,
            end: self.offset + self.page_size.get(),
        };
        let page = (self.worker)(window, cancel.clone());

        let items = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(DomainError::Cancelled),
            items = page => items?,
        };

        if items.is_empty() {
            debug!(offset = self.offset, "Paginator exhausted");
            self.done = true;
            return Ok(None);
        }

        self.offset += items.len();
        debug!(
            start = window.start,
            returned = items.len(),
            next_offset = self.offset,
            "Page fetched"
        );

        Ok(Some(items))
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn is_exhausted(&self) -> bool {
        self.done
    }

    /// Adapt into a stream of pages.
    ///
    /// The stream ends after the end-of-sequence signal, or right after
    /// yielding the first failure.
    pub fn into_stream(
        self,
        cancel: CancellationToken,
    ) -> impl Stream<Item = Result<Vec<T>, DomainError>> + Send {
        stream::unfold(Some(self), move |state| {
            let cancel = cancel.clone();
            async move {
                let mut paginator = state?;
                match paginator.next(&cancel).await {
                    Ok(Some(items)) => Some((Ok(items), Some(paginator))),
                    Ok(None) => None,
                    Err(e) => Some((Err(e), None)),
                }
            }
        })
    }
}
