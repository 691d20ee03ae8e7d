//! Core operation traits.

mod get;

pub use get::Get;
