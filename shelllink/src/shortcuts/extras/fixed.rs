use crate::{
    ansi::AnsiString,
    error::LinkError,
    utils::{
        nom_helper::{nom_data, parse_error},
        strings::{extract_utf16_string, truncate_ansi, truncate_utf16},
        writer::{push_u32, push_utf16_units},
    },
};

/// Size of every block built from an ANSI and a Unicode fixed region
pub(crate) const DUAL_STRING_BLOCK_SIZE: u32 = 0x314;

const ANSI_REGION: usize = 260;
const UNICODE_REGION: usize = 520;
/// Longest value that still leaves room for a terminator
const MAX_CHARACTERS: usize = 259;

/// Read the ANSI region at offset 8 and the Unicode region at offset 268
pub(crate) fn decode_dual_string(
    data: &[u8],
    structure: &'static str,
) -> Result<(AnsiString, String), LinkError> {
    let header_size = 8;
    let (input, _header) = nom_data(data, header_size).map_err(parse_error(structure))?;
    let (input, ansi_data) = nom_data(input, ANSI_REGION as u64).map_err(parse_error(structure))?;
    let (_, unicode_data) =
        nom_data(input, UNICODE_REGION as u64).map_err(parse_error(structure))?;

    Ok((
        AnsiString::from_region(ansi_data),
        extract_utf16_string(unicode_data),
    ))
}

/// Write the block header then both strings left aligned in zeroed regions
pub(crate) fn encode_dual_string(signature: u32, ansi: &AnsiString, unicode: &str) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(DUAL_STRING_BLOCK_SIZE as usize);
    push_u32(&mut buffer, DUAL_STRING_BLOCK_SIZE);
    push_u32(&mut buffer, signature);

    let ansi_data = ansi.as_bytes();
    buffer.extend_from_slice(&ansi_data[..ansi_data.len().min(MAX_CHARACTERS)]);
    buffer.resize(8 + ANSI_REGION, 0);

    push_utf16_units(&mut buffer, &truncate_utf16(unicode, MAX_CHARACTERS));
    buffer.resize(DUAL_STRING_BLOCK_SIZE as usize, 0);
    buffer
}

/// Value a string has after a trip through the ANSI region
pub(crate) fn fit_ansi(value: &str) -> AnsiString {
    AnsiString::from(truncate_ansi(value, MAX_CHARACTERS))
}

/// Value a string has after a trip through the Unicode region
pub(crate) fn fit_unicode(value: &str) -> String {
    String::from_utf16_lossy(&truncate_utf16(value, MAX_CHARACTERS))
}
