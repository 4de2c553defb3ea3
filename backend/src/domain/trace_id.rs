//! Correlation identifier shared by logs, error payloads and API calls.
//!
//! The active id lives in Tokio task-local storage. Spawned tasks do not
//! inherit it; wrap their futures in [`TraceId::scope`] to carry it over.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use tokio::task_local;
use uuid::Uuid;

task_local! {
    static CURRENT: TraceId;
}

/// UUID identifying one request or one client operation.
///
/// # Examples
/// ```
/// use practice_tracker::TraceId;
///
/// let parsed = TraceId::parse_header("7c9e6679-7425-40de-944b-e07fc1f90ae7");
/// assert!(parsed.is_some());
/// assert!(TraceId::parse_header("not-a-trace").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    #[must_use]
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Id in scope for the running task, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    /// Id in scope, or a fresh one when the caller runs outside a request.
    #[must_use]
    pub fn current_or_generate() -> Self {
        Self::current().unwrap_or_else(Self::generate)
    }

    /// Accepts a propagated header value; anything but a UUID is ignored.
    #[must_use]
    pub fn parse_header(value: &str) -> Option<Self> {
        value.trim().parse().ok()
    }

    /// Run `fut` with `trace_id` as the current id.
    ///
    /// # Examples
    /// ```
    /// use practice_tracker::TraceId;
    ///
    /// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
    /// let id = TraceId::parse_header("00000000-0000-0000-0000-00000000000a").expect("uuid");
    /// assert_eq!(TraceId::scope(id, async { TraceId::current() }).await, Some(id));
    /// # });
    /// ```
    pub async fn scope<Fut: Future>(trace_id: Self, fut: Fut) -> Fut::Output {
        CURRENT.scope(trace_id, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[tokio::test]
    async fn scope_exposes_the_id_to_nested_futures() {
        let outer = TraceId::generate();
        let seen = TraceId::scope(outer, async {
            tokio::task::yield_now().await;
            TraceId::current()
        })
        .await;
        assert_eq!(seen, Some(outer));
    }

    #[tokio::test]
    async fn nothing_is_in_scope_by_default() {
        assert_eq!(TraceId::current(), None);
    }

    #[tokio::test]
    async fn current_or_generate_prefers_the_scoped_id() {
        let scoped = TraceId::generate();
        let chosen = TraceId::scope(scoped, async { TraceId::current_or_generate() }).await;
        assert_eq!(chosen, scoped);
        assert_ne!(TraceId::current_or_generate(), scoped);
    }

    #[rstest]
    #[case("7c9e6679-7425-40de-944b-e07fc1f90ae7", true)]
    #[case("  7c9e6679-7425-40de-944b-e07fc1f90ae7 ", true)]
    #[case("", false)]
    #[case("session-42", false)]
    fn parse_header_accepts_only_uuids(#[case] raw: &str, #[case] accepted: bool) {
        assert_eq!(TraceId::parse_header(raw).is_some(), accepted);
    }

    #[test]
    fn display_is_hyphenated_lowercase() {
        let id: TraceId = "7C9E6679-7425-40DE-944B-E07FC1F90AE7"
            .parse()
            .expect("valid uuid");
        assert_eq!(id.to_string(), "7c9e6679-7425-40de-944b-e07fc1f90ae7");
    }
}
