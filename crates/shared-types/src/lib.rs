pub mod error;
pub mod feature_flags;
pub mod models;
pub mod requests;

// Clinic domain
pub mod clinic;
pub mod nav;

pub use error::*;
pub use feature_flags::*;
pub use models::*;
pub use requests::*;

pub use clinic::*;
pub use nav::*;
