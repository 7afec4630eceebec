//! Data models for the BrickHunt inventory tracker.
//!
//! List and item shapes match the frontend TypeScript interfaces exactly;
//! catalog entities match the Rebrickable API wire format.

mod catalog;
mod list;

pub use catalog::*;
pub use list::*;
