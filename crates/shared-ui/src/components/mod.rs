// Layout and containers
pub mod card;
pub mod data_table;
pub mod nav_rail;
pub mod page_header;
pub mod stat_card;

// Form controls
pub mod button;
pub mod form_select;
pub mod input;
pub mod textarea;

// Feedback
pub mod badge;
pub mod banner;
pub mod skeleton;
pub mod toast;

pub use badge::*;
pub use banner::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use form_select::*;
pub use input::*;
pub use nav_rail::*;
pub use page_header::*;
pub use skeleton::*;
pub use stat_card::*;
pub use textarea::*;
pub use toast::*;
