use crate::utils::encoding::base64_encode_standard;
use log::warn;
use serde::{Serialize, Serializer};
use std::{borrow::Cow, fmt};

/**
 * String stored in the code page of the system that created the link.
 * The bytes are kept exactly as found, without the terminator, so encoding writes them back unchanged.
 * Interpreting the code page is left to the caller
 */
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AnsiString {
    data: Vec<u8>,
}

impl AnsiString {
    /// Bytes from the first zero onwards are dropped
    pub fn new(mut data: Vec<u8>) -> AnsiString {
        if let Some(end) = data.iter().position(|value| *value == 0) {
            data.truncate(end);
        }
        AnsiString { data }
    }

    /// Keep every byte up to the last non zero byte. Used for fixed size regions
    pub(crate) fn from_region(data: &[u8]) -> AnsiString {
        let end = data
            .iter()
            .rposition(|value| *value != 0)
            .map_or(0, |index| index + 1);
        AnsiString {
            data: data[..end].to_vec(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The text if the bytes are valid UTF8
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.data).ok()
    }

    /// The text with invalid UTF8 replaced
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }
}

impl From<&str> for AnsiString {
    fn from(value: &str) -> Self {
        AnsiString::new(value.as_bytes().to_vec())
    }
}

impl From<String> for AnsiString {
    fn from(value: String) -> Self {
        AnsiString::new(value.into_bytes())
    }
}

impl PartialEq<str> for AnsiString {
    fn eq(&self, other: &str) -> bool {
        self.data == other.as_bytes()
    }
}

impl PartialEq<&str> for AnsiString {
    fn eq(&self, other: &&str) -> bool {
        self.data == other.as_bytes()
    }
}

impl fmt::Display for AnsiString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_lossy())
    }
}

/// Serialized as text. Bytes that are not UTF8 are serialized as base64
impl Serialize for AnsiString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.as_str() {
            Some(result) => serializer.serialize_str(result),
            None => {
                warn!("[shortcuts] Failed to get UTF8 string from ANSI bytes");
                serializer.serialize_str(&format!(
                    "Failed to get UTF8 string: {}",
                    base64_encode_standard(&self.data)
                ))
            }
        }
    }
}
