use crate::ansi::AnsiString;
use byteorder::{ByteOrder, LittleEndian};
use uuid::Uuid;

/// Size of encoded data as a u32 size field. Saturates instead of wrapping
pub(crate) fn size_u32(size: usize) -> u32 {
    u32::try_from(size).unwrap_or(u32::MAX)
}

pub(crate) fn push_u16(buffer: &mut Vec<u8>, value: u16) {
    let mut bytes = [0; 2];
    LittleEndian::write_u16(&mut bytes, value);
    buffer.extend_from_slice(&bytes);
}

pub(crate) fn push_u32(buffer: &mut Vec<u8>, value: u32) {
    let mut bytes = [0; 4];
    LittleEndian::write_u32(&mut bytes, value);
    buffer.extend_from_slice(&bytes);
}

/// Write a GUID in little endian (mixed endian GUID) order
pub(crate) fn push_guid(buffer: &mut Vec<u8>, guid: &Uuid) {
    buffer.extend_from_slice(&guid.to_bytes_le());
}

pub(crate) fn push_utf16_units(buffer: &mut Vec<u8>, units: &[u16]) {
    for unit in units {
        push_u16(buffer, *unit);
    }
}

/// Write ANSI bytes followed by a single zero
pub(crate) fn push_ansi_string(buffer: &mut Vec<u8>, value: &AnsiString) {
    buffer.extend_from_slice(value.as_bytes());
    buffer.push(0);
}

/// Write UTF16 units followed by a zero unit
pub(crate) fn push_utf16_string(buffer: &mut Vec<u8>, value: &str) {
    for unit in value.encode_utf16() {
        push_u16(buffer, unit);
    }
    push_u16(buffer, 0);
}

#[cfg(test)]
mod tests {
    use super::{push_ansi_string, push_guid, push_u16, push_u32, push_utf16_string, size_u32};
    use crate::ansi::AnsiString;
    use uuid::Uuid;

    #[test]
    fn test_push_numbers() {
        let mut buffer = Vec::new();
        push_u32(&mut buffer, 0xa0000003);
        push_u16(&mut buffer, 0x58);
        assert_eq!(buffer, [3, 0, 0, 160, 88, 0]);
    }

    #[test]
    fn test_push_strings() {
        let mut buffer = Vec::new();
        push_ansi_string(&mut buffer, &AnsiString::from("Z:"));
        push_utf16_string(&mut buffer, "Z");
        assert_eq!(buffer, [90, 58, 0, 90, 0, 0, 0]);
    }

    #[test]
    fn test_push_guid() {
        let mut buffer = Vec::new();
        let guid = Uuid::parse_str("905e63b6-c1bf-494e-b29c-65b732d3d21a").unwrap();
        push_guid(&mut buffer, &guid);
        assert_eq!(
            buffer,
            [182, 99, 94, 144, 191, 193, 78, 73, 178, 156, 101, 183, 50, 211, 210, 26]
        );
    }

    #[test]
    fn test_size_u32() {
        assert_eq!(size_u32(12), 12);
    }
}
