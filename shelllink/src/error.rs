use std::fmt;

/// Structural problems found while decoding (or building) Shell Link structures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    /// Buffer (or declared size) is smaller than the minimum size of the structure
    SizeViolation {
        structure: &'static str,
        actual: u64,
        minimum: u32,
    },
    /// Structure declares a size larger than the bytes actually available
    SizeMismatch {
        structure: &'static str,
        declared: u64,
        actual: u64,
    },
    /// Extra data block signature does not match the block being decoded
    SignatureMismatch {
        structure: &'static str,
        found: u32,
        expected: u32,
    },
    /// Stored offset points outside of the structure
    OffsetViolation {
        structure: &'static str,
        field: &'static str,
        offset: u32,
        minimum: u32,
        maximum: u32,
    },
    /// String has no terminator before the end of the structure
    UnterminatedString {
        structure: &'static str,
        field: &'static str,
        offset: u32,
    },
    /// Extra data block signature is not known and unknown blocks are rejected
    UnknownSignature { found: u32 },
    /// Value is too large to be represented by the size field of the structure
    SizeOverflow {
        structure: &'static str,
        size: u64,
        maximum: u64,
    },
    /// Fixed field could not be read
    Parse { structure: &'static str },
}

impl std::error::Error for LinkError {}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::SizeViolation {
                structure,
                actual,
                minimum,
            } => write!(
                f,
                "Size of {structure} is less than minimum block size {minimum} (size: {actual})"
            ),
            LinkError::SizeMismatch {
                structure,
                declared,
                actual,
            } => write!(
                f,
                "Size of {structure} is {declared} but only {actual} bytes are available"
            ),
            LinkError::SignatureMismatch {
                structure,
                found,
                expected,
            } => write!(
                f,
                "Block signature for {structure} is {found:#X} (expected {expected:#X})"
            ),
            LinkError::OffsetViolation {
                structure,
                field,
                offset,
                minimum,
                maximum,
            } => write!(
                f,
                "{structure} {field} offset {offset:#X} is outside of {minimum:#X}..{maximum:#X}"
            ),
            LinkError::UnterminatedString {
                structure,
                field,
                offset,
            } => write!(
                f,
                "{structure} {field} at offset {offset:#X} has no string terminator"
            ),
            LinkError::UnknownSignature { found } => {
                write!(f, "Unknown extra data block signature {found:#X}")
            }
            LinkError::SizeOverflow {
                structure,
                size,
                maximum,
            } => write!(
                f,
                "Size {size} of {structure} is larger than the maximum {maximum}"
            ),
            LinkError::Parse { structure } => write!(f, "Failed to parse {structure} data"),
        }
    }
}
