pub mod error;

use error::OptionsError;
use log::error;
use serde::{Deserialize, Serialize};

/// What to do with an extra data block whose signature is not known
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownBlockPolicy {
    /// Keep the block as an opaque `UnknownDataBlock`
    #[default]
    Preserve,
    /// Fail with `LinkError::UnknownSignature`
    Reject,
}

/**
 * Options for decoding the extra data chain. Can be loaded from TOML, ex:
 * ```toml
 * unknown_blocks = "reject"
 * require_terminal = false
 * ```
 * Missing keys use the defaults
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DecodeOptions {
    pub unknown_blocks: UnknownBlockPolicy,
    /// Fail if the data ends before the terminal block
    pub require_terminal: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            unknown_blocks: UnknownBlockPolicy::Preserve,
            require_terminal: true,
        }
    }
}

impl DecodeOptions {
    /// Parse options from TOML text
    pub fn from_toml(data: &str) -> Result<DecodeOptions, OptionsError> {
        let options_result = toml::from_str(data);
        let options = match options_result {
            Ok(result) => result,
            Err(err) => {
                error!("[shortcuts] Failed to parse decode options: {err:?}");
                return Err(OptionsError::BadToml);
            }
        };

        Ok(options)
    }
}
