//! Domain Services - Pure business rules over domain models

pub mod supply_policy;
