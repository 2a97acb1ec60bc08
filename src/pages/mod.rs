//! Pages
//!
//! Route-level views.

mod home;
mod create_point;

pub use home::Home;
pub use create_point::CreatePoint;
