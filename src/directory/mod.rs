pub mod dataset;
pub mod filter;
pub mod matcher;

pub use dataset::*;
pub use filter::*;
pub use matcher::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Cannot read hospital dataset {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid hospital dataset: {0}")]
    Parse(#[from] serde_json::Error),
}
