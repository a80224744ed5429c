//! Domain Models - The vocabulary of the parts store
//!
//! A loader and a supplier are the same thing; the store calls it a supplier.

pub mod part;
pub mod part_type;
pub mod supplier;
