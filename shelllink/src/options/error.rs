use std::fmt;

#[derive(Debug, PartialEq)]
pub enum OptionsError {
    BadToml,
}

impl std::error::Error for OptionsError {}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::BadToml => write!(f, "Failed to parse TOML data"),
        }
    }
}
