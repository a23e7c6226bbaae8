//! Data module - text file loading and validation

mod loader;
mod model;
mod validator;

pub use loader::{check_extension, is_txt, load_and_validate, LoaderError, DATA_EXTENSION};
pub use model::{Dataset, Key, KeyMode, Record};
pub use validator::{parse_dataset, validate_lines, ValidationError, XLABEL_PREFIX};
