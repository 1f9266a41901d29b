pub mod enums;
pub mod guidance;
pub mod hospital;
pub mod profile;

pub use enums::*;
pub use guidance::*;
pub use hospital::*;
pub use profile::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}
