use crate::{FetchError, Query, WeatherBackend, WeatherReport};

/// Handle for one in-flight search, created by [`SearchSession::dispatch`]
/// and consumed by [`SearchSession::complete`].
#[derive(Debug)]
pub struct PendingSearch {
    token: u64,
    pub query: Query,
}

/// Local state for one search component: the current report, a loading
/// flag, and the token of the newest dispatched request.
///
/// Tokens resolve the race between overlapping requests: a completion is
/// applied only while its token is still the newest, so a response that
/// arrives after a newer dispatch never overwrites state.
#[derive(Debug)]
pub struct SearchSession {
    backend: Box<dyn WeatherBackend>,
    report: Option<WeatherReport>,
    loading: bool,
    latest_token: u64,
}

impl SearchSession {
    pub fn new(backend: Box<dyn WeatherBackend>) -> Self {
        Self {
            backend,
            report: None,
            loading: false,
            latest_token: 0,
        }
    }

    /// The report currently on display, absent while a request is in
    /// flight or before the first search.
    pub fn report(&self) -> Option<&WeatherReport> {
        self.report.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the trigger control is enabled: disabled exactly while a
    /// request is in flight or the raw search text is empty.
    pub fn can_search(&self, raw_input: &str) -> bool {
        !self.loading && !raw_input.is_empty()
    }

    /// Start a search: raise the loading flag, drop the previous report,
    /// and hand back a pending handle carrying the parsed query and a
    /// fresh token.
    pub fn dispatch(&mut self, raw_input: &str) -> PendingSearch {
        self.loading = true;
        self.report = None;
        self.latest_token += 1;

        PendingSearch {
            token: self.latest_token,
            query: Query::parse(raw_input),
        }
    }

    /// Apply one fetch outcome. A failed outcome is stored as a
    /// placeholder report carrying only the failure message. Superseded
    /// completions are dropped; the newer request still owns the loading
    /// flag and clears it on its own completion.
    pub fn complete(
        &mut self,
        pending: PendingSearch,
        outcome: Result<WeatherReport, FetchError>,
    ) {
        if pending.token != self.latest_token {
            tracing::debug!(token = pending.token, "dropping superseded search result");
            return;
        }

        self.report = Some(match outcome {
            Ok(report) => report,
            Err(err) => {
                tracing::warn!(error = %err, "search failed");
                WeatherReport::from_error(err.user_message())
            }
        });
        self.loading = false;
    }

    /// Run the pending fetch against the backend and apply its outcome.
    pub async fn resolve(&mut self, pending: PendingSearch) {
        let outcome = self.backend.fetch(&pending.query).await;
        self.complete(pending, outcome);
    }

    /// One full search cycle: dispatch, fetch, apply.
    pub async fn search(&mut self, raw_input: &str) -> Option<&WeatherReport> {
        let pending = self.dispatch(raw_input);
        self.resolve(pending).await;
        self.report()
    }
}
