//! API endpoint handlers, one module per resource.

pub mod health;
pub mod hospitals;
pub mod profiles;
pub mod symptoms;
