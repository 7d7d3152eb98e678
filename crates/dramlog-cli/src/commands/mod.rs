pub mod bottles;
pub mod config;
pub mod reviewers;
pub mod tastings;
pub mod validate;

pub use bottles::{list_bottles, show_bottle};
pub use reviewers::list_reviewers;
pub use tastings::list_tastings;
pub use validate::run_validate;
