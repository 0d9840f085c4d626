use crate::{ansi::AnsiString, error::LinkError};
use byteorder::{ByteOrder, LittleEndian};
use log::warn;

/// Get a UTF16 string from little endian bytes. Trailing zero units are removed. Invalid UTF16 is replaced
pub(crate) fn extract_utf16_string(data: &[u8]) -> String {
    let mut utf16_data: Vec<u16> = data.chunks_exact(2).map(LittleEndian::read_u16).collect();
    while utf16_data.last() == Some(&0) {
        utf16_data.pop();
    }

    match String::from_utf16(&utf16_data) {
        Ok(result) => result,
        Err(err) => {
            warn!("[shortcuts] Unicode string is not valid UTF16, decoding lossy: {err:?}");
            String::from_utf16_lossy(&utf16_data)
        }
    }
}

/// Read a zero terminated ANSI string starting at `start`. `data` must already be bounded to the structure
pub(crate) fn read_ansi_string(
    data: &[u8],
    start: usize,
    structure: &'static str,
    field: &'static str,
) -> Result<AnsiString, LinkError> {
    let unterminated = LinkError::UnterminatedString {
        structure,
        field,
        offset: u32::try_from(start).unwrap_or(u32::MAX),
    };
    let string_data = match data.get(start..) {
        Some(result) => result,
        None => return Err(unterminated),
    };

    match string_data.iter().position(|value| *value == 0) {
        Some(end) => Ok(AnsiString::new(string_data[..end].to_vec())),
        None => Err(unterminated),
    }
}

/// Read a double zero terminated UTF16 string starting at `start`. Units are aligned to `start`
pub(crate) fn read_utf16_string(
    data: &[u8],
    start: usize,
    structure: &'static str,
    field: &'static str,
) -> Result<String, LinkError> {
    let unterminated = LinkError::UnterminatedString {
        structure,
        field,
        offset: u32::try_from(start).unwrap_or(u32::MAX),
    };
    let string_data = match data.get(start..) {
        Some(result) => result,
        None => return Err(unterminated),
    };

    let wide_size = 2;
    for (index, wide_char) in string_data.chunks_exact(wide_size).enumerate() {
        if wide_char == [0, 0] {
            return Ok(extract_utf16_string(&string_data[..index * wide_size]));
        }
    }
    Err(unterminated)
}

/// Cut a string to at most `limit` UTF8 bytes without splitting a character
pub(crate) fn truncate_ansi(value: &str, limit: usize) -> &str {
    if value.len() <= limit {
        return value;
    }
    let mut end = limit;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    &value[..end]
}

/// Encode a string as UTF16 units, at most `limit` units without splitting a surrogate pair
pub(crate) fn truncate_utf16(value: &str, limit: usize) -> Vec<u16> {
    let mut units = Vec::new();
    for character in value.chars() {
        let mut buffer = [0; 2];
        let encoded = character.encode_utf16(&mut buffer);
        if units.len() + encoded.len() > limit {
            break;
        }
        units.extend_from_slice(encoded);
    }
    units
}

/// Number of UTF16 units in a string
pub(crate) fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}
