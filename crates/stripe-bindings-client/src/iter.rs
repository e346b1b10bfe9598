//! Cursor pagination over list endpoints.

use std::collections::VecDeque;
use std::fmt;

use futures::future::BoxFuture;
use futures::stream::{self, Stream};
use stripe_bindings_core::{Form, List, ListMeta, ListParams, Object};

use crate::error::StripeError;

/// Future resolving to one page of a list endpoint.
pub type PageFuture<T> = BoxFuture<'static, Result<List<T>, StripeError>>;

type PageFetcher<T> = Box<dyn Fn(Form) -> PageFuture<T> + Send + Sync>;

/// Lazily walks every object of a list endpoint.
///
/// The first page is requested on the first call to [`try_next`](Self::try_next).
/// When a page runs out and the API reported `has_more`, the next page is
/// requested with `starting_after` set to the last object seen. When the
/// caller started from `ending_before` the walk goes backwards instead: each
/// page is yielded newest-last and the cursor moves through `ending_before`.
///
/// After an error the iterator yields nothing more.
pub struct ListIter<T> {
    fetch: PageFetcher<T>,
    form: Form,
    buffer: VecDeque<T>,
    meta: Option<ListMeta>,
    single: bool,
    backwards: bool,
    done: bool,
}

impl<T> fmt::Debug for ListIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListIter")
            .field("form", &self.form)
            .field("buffered", &self.buffer.len())
            .field("meta", &self.meta)
            .field("single", &self.single)
            .field("backwards", &self.backwards)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

impl<T> ListIter<T>
where
    T: Object + Send + 'static,
{
    /// Create an iterator that requests pages through `fetch`.
    ///
    /// `form` holds the encoded list parameters; `params` decides the
    /// direction and whether to stop after one page.
    pub fn new<F>(params: &ListParams, form: Form, fetch: F) -> Self
    where
        F: Fn(Form) -> PageFuture<T> + Send + Sync + 'static,
    {
        Self {
            fetch: Box::new(fetch),
            form,
            buffer: VecDeque::new(),
            meta: None,
            single: params.single,
            backwards: params.ending_before.is_some(),
            done: false,
        }
    }

    /// Return the next object, fetching a page if needed.
    ///
    /// # Errors
    ///
    /// Returns the error of a failed page request.
    pub async fn try_next(&mut self) -> Result<Option<T>, StripeError> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Ok(Some(item));
            }
            if self.done {
                return Ok(None);
            }
            if let Some(meta) = &self.meta {
                if !meta.has_more || self.single {
                    self.done = true;
                    return Ok(None);
                }
            }

            let page = match (self.fetch)(self.form.clone()).await {
                Ok(page) => page,
                Err(err) => {
                    self.done = true;
                    self.buffer.clear();
                    return Err(err);
                }
            };
            self.load(page);
        }
    }

    fn load(&mut self, page: List<T>) {
        let mut data = page.data;
        if self.backwards {
            data.reverse();
        }

        match data.last() {
            Some(last) if self.backwards => self.form.set("ending_before", last.object_id()),
            Some(last) => self.form.set("starting_after", last.object_id()),
            // an empty page cannot advance the cursor
            None => self.done = true,
        }

        tracing::trace!(
            count = data.len(),
            has_more = page.meta.has_more,
            "Loaded list page"
        );

        self.meta = Some(page.meta);
        self.buffer = data.into();
    }

    /// Metadata of the most recently fetched page.
    #[must_use]
    pub fn meta(&self) -> Option<&ListMeta> {
        self.meta.as_ref()
    }

    /// Turn the iterator into a [`Stream`].
    pub fn into_stream(self) -> impl Stream<Item = Result<T, StripeError>> + Send {
        stream::try_unfold(self, |mut iter| async move {
            let next = iter.try_next().await?;
            Ok::<_, StripeError>(next.map(|item| (item, iter)))
        })
    }

    /// Fetch every remaining object.
    ///
    /// # Errors
    ///
    /// Returns the first page request error.
    pub async fn collect_all(mut self) -> Result<Vec<T>, StripeError> {
        let mut items = Vec::new();
        while let Some(item) = self.try_next().await? {
            items.push(item);
        }
        Ok(items)
    }
}
