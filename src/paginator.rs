// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Adapts token-paginated list RPCs into async streams.

use futures::stream::unfold;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;

/// A list response that can be driven by a [Paginator].
pub trait PageableResponse {
    /// The type of the elements in the page.
    type PageItem;

    /// The continuation token. An empty token marks the last page.
    fn next_page_token(&self) -> String;

    /// Consumes the page and returns its elements.
    fn into_items(self) -> Vec<Self::PageItem>;
}

/// Converts a token-paginated list RPC into a [futures::Stream] of pages.
///
/// The stream is lazy: no request is issued until it is polled, and each
/// poll fetches at most one page. An error ends the stream after the error
/// is yielded.
#[pin_project]
pub struct Paginator<T, E> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T, E>>>>,
}

type ControlFlow = std::ops::ControlFlow<(), String>;

impl<T, E> Paginator<T, E>
where
    T: PageableResponse,
{
    /// Creates a new [Paginator] given the initial page token and a function
    /// to fetch the page for a token.
    pub fn new<F>(seed_token: String, execute: impl Fn(String) -> F + Clone + 'static) -> Self
    where
        F: Future<Output = Result<T, E>> + 'static,
    {
        let stream = unfold(ControlFlow::Continue(seed_token), move |state| {
            let execute = execute.clone();
            async move {
                let token = match state {
                    ControlFlow::Continue(token) => token,
                    ControlFlow::Break(_) => return None,
                };
                match execute(token).await {
                    Ok(page) => {
                        let tok = page.next_page_token();
                        let next_state = if tok.is_empty() {
                            ControlFlow::Break(())
                        } else {
                            ControlFlow::Continue(tok)
                        };
                        Some((Ok(page), next_state))
                    }
                    Err(e) => Some((Err(e), ControlFlow::Break(()))),
                }
            }
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next page of the wrapped stream.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }

    /// Flattens the pages into a stream over their elements.
    pub fn into_items(self) -> ItemPaginator<T::PageItem, E>
    where
        T: 'static,
        T::PageItem: 'static,
        E: 'static,
    {
        let stream = self.stream.flat_map(|result| {
            let items: Vec<Result<T::PageItem, E>> = match result {
                Ok(page) => page.into_items().into_iter().map(Ok).collect(),
                Err(e) => vec![Err(e)],
            };
            futures::stream::iter(items)
        });
        ItemPaginator {
            stream: Box::pin(stream),
        }
    }
}

impl<T, E> Stream for Paginator<T, E> {
    type Item = Result<T, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

/// A [futures::Stream] over the elements of a paginated list RPC.
///
/// Pages are still fetched one at a time, as the stream is polled past the
/// last element of the current page.
#[pin_project]
pub struct ItemPaginator<T, E> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T, E>>>>,
}

impl<T, E> ItemPaginator<T, E> {
    /// Returns the next element of the wrapped stream.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }
}

impl<T, E> Stream for ItemPaginator<T, E> {
    type Item = Result<T, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}
