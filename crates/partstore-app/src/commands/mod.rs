//! CLI Commands

pub mod demo;
pub mod store;

pub use demo::DemoCommand;
pub use store::StoreCommand;
