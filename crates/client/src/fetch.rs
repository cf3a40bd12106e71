use shared_types::{AppError, AppErrorKind};

/// Progress of one view-level data fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Ready(T),
    Failed(AppError),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Loading
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            FetchState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&AppError> {
        match self {
            FetchState::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchState<U> {
        match self {
            FetchState::Loading => FetchState::Loading,
            FetchState::Ready(value) => FetchState::Ready(f(value)),
            FetchState::Failed(err) => FetchState::Failed(err),
        }
    }
}

impl<T> From<Result<T, AppError>> for FetchState<T> {
    fn from(result: Result<T, AppError>) -> Self {
        match result {
            Ok(value) => FetchState::Ready(value),
            Err(err) => {
                tracing::warn!(kind = %err.kind, error = %err.message, "Fetch failed");
                FetchState::Failed(err)
            }
        }
    }
}

/// Lists treat a 404 as "nothing yet" rather than a failure.
pub fn list_state<T>(result: Result<Vec<T>, AppError>) -> FetchState<Vec<T>> {
    match result {
        Err(err) if err.kind == AppErrorKind::NotFound => FetchState::Ready(Vec::new()),
        other => other.into(),
    }
}
