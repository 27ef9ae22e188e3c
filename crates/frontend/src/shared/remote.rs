//! Fetch-on-mount state shared by every read-only view.
//!
//! A view issues exactly one GET when it is created. While the request is in
//! flight `loading` is set; success replaces the data wholesale, failure keeps
//! whatever was there before (stale-if-error) and records the error. When the
//! view is disposed before the response arrives the result is dropped.

use super::api_error::ApiError;
use super::reporter::{use_reporter, DashboardEvent, Reporter};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct RemoteState<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<ApiError>,
}

impl<T> RemoteState<T> {
    pub fn new(initial: T) -> Self {
        Self {
            data: initial,
            loading: false,
            error: None,
        }
    }

    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn resolve(&mut self, result: Result<T, ApiError>) {
        match result {
            Ok(data) => {
                self.data = data;
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
        self.loading = false;
    }
}

impl<T: Default> Default for RemoteState<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Liveness flag of the view that started a request.
#[derive(Clone, Debug)]
pub struct AliveGuard(Arc<AtomicBool>);

impl AliveGuard {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn cancel(&self) {
        self.0.store(false, Ordering::Release);
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl Default for AliveGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of handing a response to its view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Applied,
    Discarded,
}

/// Applies `result` to `state` unless the view is gone, reporting either way.
pub fn deliver<T>(
    resource: &'static str,
    guard: &AliveGuard,
    reporter: &Reporter,
    state: &mut RemoteState<T>,
    result: Result<T, ApiError>,
) -> Delivery {
    if !guard.is_alive() {
        reporter.report(DashboardEvent::LateResultDiscarded { resource });
        return Delivery::Discarded;
    }

    match &result {
        Ok(_) => reporter.report(DashboardEvent::FetchSucceeded { resource }),
        Err(e) => reporter.report(DashboardEvent::FetchFailed {
            resource,
            error: e.to_string(),
        }),
    }
    state.resolve(result);
    Delivery::Applied
}

/// Starts `fetch` once and returns the signal the view renders from.
///
/// The request is tied to the current reactive owner: its cleanup cancels the
/// guard so a late response never touches a disposed signal.
pub fn use_remote<T, F, Fut>(
    resource: &'static str,
    initial: T,
    fetch: F,
) -> RwSignal<RemoteState<T>>
where
    T: Send + Sync + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let state = RwSignal::new(RemoteState::new(initial));
    let guard = AliveGuard::new();
    let reporter = use_reporter();

    {
        let guard = guard.clone();
        on_cleanup(move || guard.cancel());
    }

    state.update(|s| s.begin());
    reporter.report(DashboardEvent::FetchStarted { resource });

    spawn_local(async move {
        let result = fetch().await;
        // a disposed signal refuses the update without running the closure
        if state
            .try_update(|s| deliver(resource, &guard, &reporter, s, result))
            .is_none()
        {
            reporter.report(DashboardEvent::LateResultDiscarded { resource });
        }
    });

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::reporter::testing::recording;

    fn network_error() -> ApiError {
        ApiError::Network("connection refused".to_string())
    }

    #[test]
    fn test_begin_sets_loading_and_keeps_data() {
        let mut state = RemoteState::new(vec![1, 2]);
        state.begin();
        assert!(state.loading);
        assert_eq!(state.data, vec![1, 2]);
    }

    #[test]
    fn test_success_replaces_data_wholesale() {
        let mut state = RemoteState::new(vec![1, 2, 3]);
        state.begin();
        state.resolve(Ok(vec![9]));
        assert!(!state.loading);
        assert_eq!(state.data, vec![9]);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_failure_keeps_stale_data() {
        let mut state = RemoteState::new(vec![1, 2, 3]);
        state.begin();
        state.resolve(Err(network_error()));
        assert!(!state.loading);
        assert_eq!(state.data, vec![1, 2, 3]);
        assert_eq!(state.error, Some(network_error()));
    }

    #[test]
    fn test_next_success_clears_previous_error() {
        let mut state: RemoteState<Vec<u8>> = RemoteState::default();
        state.resolve(Err(network_error()));
        state.begin();
        assert_eq!(state.error, None);
        state.resolve(Ok(vec![4]));
        assert_eq!(state.error, None);
        assert_eq!(state.data, vec![4]);
    }

    #[test]
    fn test_deliver_reports_success_and_failure() {
        let (recorder, reporter) = recording();
        let guard = AliveGuard::new();
        let mut state = RemoteState::new(0);

        assert_eq!(
            deliver("team_data", &guard, &reporter, &mut state, Ok(5)),
            Delivery::Applied
        );
        assert_eq!(
            deliver("team_data", &guard, &reporter, &mut state, Err(network_error())),
            Delivery::Applied
        );
        assert_eq!(state.data, 5);
        assert_eq!(
            recorder.events(),
            vec![
                DashboardEvent::FetchSucceeded {
                    resource: "team_data"
                },
                DashboardEvent::FetchFailed {
                    resource: "team_data",
                    error: "Request failed: connection refused".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_late_result_after_cancel_is_discarded() {
        let (recorder, reporter) = recording();
        let guard = AliveGuard::new();
        let mut state = RemoteState::new(vec!["stale"]);
        state.begin();

        guard.clone().cancel();

        assert_eq!(
            deliver("sales_data", &guard, &reporter, &mut state, Ok(vec!["fresh"])),
            Delivery::Discarded
        );
        assert_eq!(state.data, vec!["stale"]);
        assert_eq!(
            recorder.events(),
            vec![DashboardEvent::LateResultDiscarded {
                resource: "sales_data"
            }]
        );
    }
}
