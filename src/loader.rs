//! Remote Resource Loader
//!
//! The one fetch/normalize/state-machine helper every list and detail page
//! is built on: track a source, issue the request, settle to data or a
//! message. Each invocation runs `Idle -> Loading -> {Ready, Failed}`.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::FetchError;

/// Where one remote fetch currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

/// Monotonic series of request tokens. A response may only land while its
/// token is still the newest issued; anything older has been superseded by
/// a navigation or reload and is discarded.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TokenSeries {
    latest: u64,
}

impl TokenSeries {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.latest == token
    }
}

/// Handle a page keeps on its in-flight resource.
pub struct RemoteHandle<T: 'static> {
    pub state: ReadSignal<RemoteState<T>>,
    set_reload_trigger: WriteSignal<u32>,
}

impl<T: 'static> Clone for RemoteHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for RemoteHandle<T> {}

impl<T: 'static> RemoteHandle<T> {
    /// Manual retry affordance: re-runs the fetch for the current source.
    pub fn reload(&self) {
        self.set_reload_trigger.update(|n| *n += 1);
    }
}

/// Fetch whatever `source` currently describes, re-fetching whenever the
/// source or the reload trigger changes.
///
/// There is no caching between invocations and no cancellation of
/// in-flight requests; a response that arrives after a newer request was
/// issued is dropped by the token guard instead of overwriting newer
/// state.
pub fn use_remote<S, T, Fut>(
    source: impl Fn() -> S + 'static,
    fetch: impl Fn(S) -> Fut + Copy + 'static,
) -> RemoteHandle<T>
where
    S: 'static,
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    let (state, set_state) = signal(RemoteState::Idle);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let tokens = StoredValue::new(TokenSeries::default());

    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let input = source();
        let token = tokens.try_update_value(|series| series.issue()).unwrap_or_default();
        set_state.set(RemoteState::Loading);
        spawn_local(async move {
            let outcome = fetch(input).await;
            // A newer request was issued while this one was in flight:
            // its result wins, this one is dropped.
            if !tokens.try_with_value(|series| series.is_current(token)).unwrap_or(false) {
                return;
            }
            match outcome {
                Ok(data) => set_state.try_set(RemoteState::Ready(data)),
                Err(err) => {
                    web_sys::console::warn_1(&format!("[api] fetch failed: {}", err).into());
                    set_state.try_set(RemoteState::Failed(err.to_string()))
                }
            };
        });
    });

    RemoteHandle {
        state,
        set_reload_trigger,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_later_token_supersedes_an_earlier_one() {
        let mut series = TokenSeries::default();
        let first = series.issue();
        let second = series.issue();

        assert!(!series.is_current(first));
        assert!(series.is_current(second));
    }

    #[test]
    fn a_token_stays_current_until_the_next_issue() {
        let mut series = TokenSeries::default();
        let only = series.issue();
        assert!(series.is_current(only));
    }
}
