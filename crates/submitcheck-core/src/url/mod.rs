//! GitHub URL parsing and shape validation

pub mod parser;
pub mod validator;

pub use parser::parse_repo_url;
pub use validator::{validate_url, MAX_URL_LENGTH};
