//! Lazy, paginated sequences of resources.
//!
//! A [`Collection`] starts from the first page returned by a list call. When
//! the consumer advances past the buffered records, the next page is fetched
//! with the same path and parameters plus `offset=<token>`. The sequence ends
//! on the first page without a continuation token.
//!
//! Advancing may therefore wait on the network and may fail. A failed fetch
//! is yielded once as `Some(Err(..))`; after that the collection is finished.
//! Resources already handed out stay valid.
//!
//! # Example
//!
//! ```rust,ignore
//! use asana_api::rest::resources::{Section, SectionList};
//!
//! let mut sections = Section::find_by_project(
//!     &client,
//!     SectionList { project: Some("999".into()), ..Default::default() },
//!     &Options::new(),
//! )
//! .await?;
//!
//! while let Some(section) = sections.next().await {
//!     let section = section?;
//!     println!("{:?}", section.name());
//! }
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::marker::PhantomData;

use futures::stream::{self, Stream};

use crate::clients::Transport;
use crate::rest::response::Page;
use crate::rest::{Options, Params, Record, Resource, ResourceError, ResourceType};

/// Forward-only sequence of resources of type `T`.
///
/// To enumerate again, issue the list call again.
pub struct Collection<'c, T: ResourceType> {
    client: &'c dyn Transport,
    path: String,
    params: Params,
    options: Options,
    buffer: VecDeque<Record>,
    next_offset: Option<String>,
    finished: bool,
    _type: PhantomData<T>,
}

impl<'c, T: ResourceType> Collection<'c, T> {
    /// Creates a collection from its first page.
    ///
    /// `path`, `params` and `options` are reused for every following page.
    #[must_use]
    pub fn new(
        client: &'c dyn Transport,
        path: impl Into<String>,
        params: Params,
        options: Options,
        first_page: Page,
    ) -> Self {
        Self {
            client,
            path: path.into(),
            params,
            options,
            buffer: first_page.records.into(),
            next_offset: first_page.next_offset,
            finished: false,
            _type: PhantomData,
        }
    }

    /// Yields the next resource, fetching a page if the buffer is empty.
    ///
    /// Returns `None` once the last page is exhausted, and on every call
    /// after that.
    pub async fn next(&mut self) -> Option<Result<Resource<'c, T>, ResourceError>> {
        loop {
            if let Some(record) = self.buffer.pop_front() {
                return Some(Ok(Resource::new(record, self.client)));
            }

            if self.finished {
                return None;
            }

            let Some(offset) = self.next_offset.take() else {
                self.finished = true;
                return None;
            };

            match self.fetch(&offset).await {
                Ok(page) => {
                    self.buffer.extend(page.records);
                    self.next_offset = page.next_offset;
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
        }
    }

    async fn fetch(&self, offset: &str) -> Result<Page, ResourceError> {
        tracing::debug!(
            resources = T::PLURAL,
            path = %self.path,
            offset,
            "Fetching next page"
        );

        let params = self.params.clone().with("offset", offset);
        let response = self.client.get(&self.path, &params, &self.options).await?;
        Page::from_response(&response, T::NAME)
    }

    /// Turns the collection into a [`Stream`].
    pub fn into_stream(self) -> impl Stream<Item = Result<Resource<'c, T>, ResourceError>> + 'c {
        stream::unfold(self, |mut collection| async move {
            collection.next().await.map(|item| (item, collection))
        })
    }

    /// Drains every remaining page.
    ///
    /// # Errors
    ///
    /// Returns the first page fetch error. Resources collected before it
    /// are discarded.
    pub async fn collect_all(mut self) -> Result<Vec<Resource<'c, T>>, ResourceError> {
        let mut resources = Vec::with_capacity(self.buffer.len());
        while let Some(resource) = self.next().await {
            resources.push(resource?);
        }
        Ok(resources)
    }

    /// Returns the records buffered from the current page.
    #[must_use]
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if another page remains to be fetched.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.next_offset.is_some()
    }

    /// Returns the continuation token for the next page.
    #[must_use]
    pub fn next_page_token(&self) -> Option<&str> {
        self.next_offset.as_deref()
    }
}

impl<T: ResourceType> fmt::Debug for Collection<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("type", &T::NAME)
            .field("path", &self.path)
            .field("buffered", &self.buffer.len())
            .field("next_offset", &self.next_offset)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpError, HttpMethod, HttpResponseError};
    use crate::rest::resources::Section;
    use crate::rest::testing::StubTransport;
    use futures::StreamExt;
    use serde_json::json;

    fn page(gids: &[&str], offset: Option<&str>) -> serde_json::Value {
        let data: Vec<_> = gids.iter().map(|gid| json!({"gid": gid})).collect();
        match offset {
            Some(offset) => json!({"data": data, "next_page": {"offset": offset}}),
            None => json!({"data": data, "next_page": null}),
        }
    }

    fn first_page(gids: &[&str], offset: Option<&str>) -> Page {
        Page {
            records: gids
                .iter()
                .map(|gid| Record::try_from(json!({"gid": gid})).unwrap())
                .collect(),
            next_offset: offset.map(String::from),
        }
    }

    fn collection<'c>(stub: &'c StubTransport, first: Page) -> Collection<'c, Section> {
        Collection::new(
            stub,
            "projects/999/sections",
            Params::new().with("limit", 2),
            Options::new().fields(&["name"]),
            first,
        )
    }

    #[tokio::test]
    async fn test_single_page_needs_no_further_calls() {
        let stub = StubTransport::new();
        let mut sections = collection(&stub, first_page(&["1", "2"], None));

        assert_eq!(sections.next().await.unwrap().unwrap().gid(), Some("1"));
        assert_eq!(sections.next().await.unwrap().unwrap().gid(), Some("2"));
        assert!(sections.next().await.is_none());
        assert!(sections.next().await.is_none());
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_follows_offsets_in_order() {
        let stub = StubTransport::new();
        stub.respond(page(&["3", "4"], Some("b")));
        stub.respond(page(&["5"], None));

        let all = collection(&stub, first_page(&["1", "2"], Some("a")))
            .collect_all()
            .await
            .unwrap();

        let gids: Vec<_> = all.iter().map(|s| s.gid().unwrap()).collect();
        assert_eq!(gids, vec!["1", "2", "3", "4", "5"]);

        let calls = stub.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].method, HttpMethod::Get);
        assert_eq!(calls[0].path, "projects/999/sections");
        assert_eq!(calls[0].params.get("offset"), Some(&json!("a")));
        assert_eq!(calls[0].params.get("limit"), Some(&json!(2)));
        assert_eq!(calls[1].params.get("offset"), Some(&json!("b")));
        assert_eq!(calls[1].options, Options::new().fields(&["name"]));
    }

    #[tokio::test]
    async fn test_pages_are_fetched_only_when_needed() {
        let stub = StubTransport::new();
        stub.respond(page(&["3"], None));

        let mut sections = collection(&stub, first_page(&["1", "2"], Some("a")));
        assert_eq!(sections.buffered(), 2);
        assert!(sections.has_next_page());
        assert_eq!(sections.next_page_token(), Some("a"));

        sections.next().await.unwrap().unwrap();
        sections.next().await.unwrap().unwrap();
        assert_eq!(stub.call_count(), 0);

        assert_eq!(sections.next().await.unwrap().unwrap().gid(), Some("3"));
        assert_eq!(stub.call_count(), 1);
        assert!(!sections.has_next_page());
    }

    #[tokio::test]
    async fn test_empty_intermediate_page_is_skipped() {
        let stub = StubTransport::new();
        stub.respond(page(&[], Some("b")));
        stub.respond(page(&["2"], None));

        let all = collection(&stub, first_page(&["1"], Some("a")))
            .collect_all()
            .await
            .unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(stub.call_count(), 2);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_yielded_once_then_finishes() {
        let stub = StubTransport::new();
        stub.fail(HttpError::Response(HttpResponseError {
            code: 500,
            message: "boom".to_string(),
            error_reference: None,
        }));

        let mut sections = collection(&stub, first_page(&["1"], Some("a")));
        let first = sections.next().await.unwrap().unwrap();

        let error = sections.next().await.unwrap().unwrap_err();
        assert_eq!(error.status(), Some(500));
        assert!(sections.next().await.is_none());
        assert_eq!(first.gid(), Some("1"));
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_malformed_page_is_an_error() {
        let stub = StubTransport::new();
        stub.respond(json!({"data": "nope"}));

        let result = collection(&stub, first_page(&[], Some("a")))
            .collect_all()
            .await;

        assert!(matches!(result, Err(ResourceError::MalformedResponse { .. })));
    }

    #[tokio::test]
    async fn test_into_stream_yields_the_same_sequence() {
        let stub = StubTransport::new();
        stub.respond(page(&["2"], None));

        let gids: Vec<String> = collection(&stub, first_page(&["1"], Some("a")))
            .into_stream()
            .map(|item| item.unwrap().gid().unwrap().to_string())
            .collect()
            .await;

        assert_eq!(gids, vec!["1", "2"]);
    }

    #[test]
    fn test_debug_output() {
        let stub = StubTransport::new();
        let sections = collection(&stub, first_page(&["1"], Some("a")));
        let debug = format!("{sections:?}");

        assert!(debug.contains("section"));
        assert!(debug.contains("projects/999/sections"));
    }
}
