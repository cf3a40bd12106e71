pub mod api;
pub mod claims;
pub mod config;
pub mod fetch;
pub mod guard;
pub mod http;
pub mod session;
pub mod storage;

pub use fetch::{list_state, FetchState};
pub use guard::{decide, Access, GuardOutcome};
pub use http::ApiClient;
pub use session::{Session, SessionStatus, SessionStore};
pub use storage::{default_store, MemoryTokenStore, TokenStore, TOKEN_KEY};
