/**
 * When parsing binary formats often we parse X bytes and convert bytes to a number
 * With nom we can do that in two steps, ex:  
 *   `take X bytes`  
 *   `le_uX` to number
 *
 * Every Shell Link structure is little endian, these functions help reduce the repetitiveness of converting bytes to a number
 */
use crate::error::LinkError;
use nom::{
    bytes::complete::take,
    number::complete::{le_u16, le_u32},
};
use std::mem::size_of;

/**
 * Nom four (4) bytes to u32
 */
pub(crate) fn nom_unsigned_four_bytes(data: &[u8]) -> nom::IResult<&[u8], u32> {
    let (input, value_data) = take(size_of::<u32>())(data)?;
    let (_, value) = le_u32(value_data)?;

    Ok((input, value))
}

/**
 * Nom two (2) bytes to u16
 */
pub(crate) fn nom_unsigned_two_bytes(data: &[u8]) -> nom::IResult<&[u8], u16> {
    let (input, value_data) = take(size_of::<u16>())(data)?;
    let (_, value) = le_u16(value_data)?;

    Ok((input, value))
}

/**
 * Nom an arbitrary amount of data and return the bytes remaining and bytes nom'd
 */
pub(crate) fn nom_data(data: &[u8], count: u64) -> nom::IResult<&[u8], &[u8]> {
    let (input, value) = take(count)(data)?;

    Ok((input, value))
}

/// Map a nom failure to a `LinkError` for the provided structure
pub(crate) fn parse_error<E>(structure: &'static str) -> impl FnOnce(E) -> LinkError {
    move |_err| LinkError::Parse { structure }
}

#[cfg(test)]
mod tests {
    use super::{nom_data, nom_unsigned_four_bytes, nom_unsigned_two_bytes, parse_error};
    use crate::error::LinkError;

    #[test]
    fn test_nom_unsigned_four_bytes() {
        let test = [2, 0, 0, 160];
        let (_, results) = nom_unsigned_four_bytes(&test).unwrap();
        assert_eq!(results, 0xa0000002);
    }

    #[test]
    fn test_nom_unsigned_two_bytes() {
        let test = [20, 1, 9];
        let (remaining, results) = nom_unsigned_two_bytes(&test).unwrap();
        assert_eq!(results, 276);
        assert_eq!(remaining, [9]);
    }

    #[test]
    fn test_nom_data() {
        let test = [2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        let (_, results) = nom_data(&test, 3).unwrap();
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_short_data() {
        let test = [1, 0];
        let result = nom_unsigned_four_bytes(&test).map_err(parse_error("Test"));
        assert_eq!(result, Err(LinkError::Parse { structure: "Test" }));
    }
}
