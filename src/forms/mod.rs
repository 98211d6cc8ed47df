//! Auth form rules and post-submit navigation

pub mod flows;
mod schema;

pub use flows::{Flow, Outcome};
pub use schema::*;
