use std::future::Future;

use client::FetchState;
use dioxus::prelude::*;

/// Run `fetch` as a resource whose value is always a [`FetchState`].
///
/// Every view loads its data through this hook; call `restart()` on the
/// returned resource to refetch after a mutation.
pub fn use_fetch<T, F, Fut>(mut fetch: F) -> Resource<FetchState<T>>
where
    T: 'static,
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = FetchState<T>> + 'static,
{
    use_resource(move || fetch())
}

/// Current state of a fetch resource. A resource that has not produced a
/// value yet reads as `Loading`.
pub fn current<T: Clone + 'static>(resource: &Resource<FetchState<T>>) -> FetchState<T> {
    match &*resource.read() {
        Some(state) => state.clone(),
        None => FetchState::Loading,
    }
}
