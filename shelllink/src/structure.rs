use crate::{
    error::LinkError,
    utils::nom_helper::{nom_unsigned_four_bytes, nom_unsigned_two_bytes, parse_error},
};
use serde::Serialize;

/// Width of the size field found at offset 0 of a structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderWidth {
    Two,
    Four,
}

/**
 * Common behaviour of every Shell Link structure.
 * `validate` checks the buffer before any field is interpreted and returns the declared size of the structure.
 * Parsers only ever look at that many bytes
 */
pub trait Structure: Sized {
    const NAME: &'static str;
    const MINIMUM_SIZE: u32;
    const HEADER_WIDTH: HeaderWidth = HeaderWidth::Four;

    /// Decode the structure from the start of `data`
    fn decode(data: &[u8]) -> Result<Self, LinkError>;
    /// Encode the structure using its canonical layout
    fn encode(&self) -> Vec<u8>;

    /// Check size floor and declared size. Returns the declared size
    fn validate(data: &[u8]) -> Result<u32, LinkError> {
        check_minimum(Self::NAME, data.len() as u64, Self::MINIMUM_SIZE)?;

        let header_size = match Self::HEADER_WIDTH {
            HeaderWidth::Two => {
                let (_, size) = nom_unsigned_two_bytes(data).map_err(parse_error(Self::NAME))?;
                size as u32
            }
            HeaderWidth::Four => {
                let (_, size) = nom_unsigned_four_bytes(data).map_err(parse_error(Self::NAME))?;
                size
            }
        };

        check_declared(Self::NAME, header_size as u64, data.len() as u64)?;
        check_minimum(Self::NAME, header_size as u64, Self::MINIMUM_SIZE)?;
        Ok(header_size)
    }
}

/// A `Structure` stored in the extra data section, tagged by a signature at offset 4
pub trait ExtraDataBlock: Structure {
    const SIGNATURE: BlockSignature;

    /// Size of the block when encoded
    fn block_size(&self) -> u32;

    /// Run `Structure::validate` then compare the block signature
    fn validate_block(data: &[u8]) -> Result<u32, LinkError> {
        let size = Self::validate(data)?;
        let (input, _) = nom_unsigned_four_bytes(data).map_err(parse_error(Self::NAME))?;
        let (_, signature) = nom_unsigned_four_bytes(input).map_err(parse_error(Self::NAME))?;

        let expected = Self::SIGNATURE.to_raw();
        if signature != expected {
            return Err(LinkError::SignatureMismatch {
                structure: Self::NAME,
                found: signature,
                expected,
            });
        }
        Ok(size)
    }
}

/// Known extra data block signatures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BlockSignature {
    EnvironmentVariable,
    Console,
    Tracker,
    ConsoleFe,
    SpecialFolder,
    Darwin,
    IconEnvironment,
    Shim,
    PropertyStore,
    KnownFolder,
    VistaAndAboveIdList,
}

impl BlockSignature {
    /// Map a raw signature to a known block. 0xA000000A is reserved and returns `None`
    pub fn from_raw(signature: u32) -> Option<BlockSignature> {
        let block = match signature {
            0xa0000001 => BlockSignature::EnvironmentVariable,
            0xa0000002 => BlockSignature::Console,
            0xa0000003 => BlockSignature::Tracker,
            0xa0000004 => BlockSignature::ConsoleFe,
            0xa0000005 => BlockSignature::SpecialFolder,
            0xa0000006 => BlockSignature::Darwin,
            0xa0000007 => BlockSignature::IconEnvironment,
            0xa0000008 => BlockSignature::Shim,
            0xa0000009 => BlockSignature::PropertyStore,
            0xa000000b => BlockSignature::KnownFolder,
            0xa000000c => BlockSignature::VistaAndAboveIdList,
            _ => return None,
        };
        Some(block)
    }

    pub fn to_raw(&self) -> u32 {
        match self {
            BlockSignature::EnvironmentVariable => 0xa0000001,
            BlockSignature::Console => 0xa0000002,
            BlockSignature::Tracker => 0xa0000003,
            BlockSignature::ConsoleFe => 0xa0000004,
            BlockSignature::SpecialFolder => 0xa0000005,
            BlockSignature::Darwin => 0xa0000006,
            BlockSignature::IconEnvironment => 0xa0000007,
            BlockSignature::Shim => 0xa0000008,
            BlockSignature::PropertyStore => 0xa0000009,
            BlockSignature::KnownFolder => 0xa000000b,
            BlockSignature::VistaAndAboveIdList => 0xa000000c,
        }
    }
}

pub(crate) fn check_minimum(
    structure: &'static str,
    actual: u64,
    minimum: u32,
) -> Result<(), LinkError> {
    if actual < minimum as u64 {
        return Err(LinkError::SizeViolation {
            structure,
            actual,
            minimum,
        });
    }
    Ok(())
}

pub(crate) fn check_declared(
    structure: &'static str,
    declared: u64,
    actual: u64,
) -> Result<(), LinkError> {
    if declared > actual {
        return Err(LinkError::SizeMismatch {
            structure,
            declared,
            actual,
        });
    }
    Ok(())
}

/// Offsets must point inside `[minimum, size)`. Returns the offset as an index
pub(crate) fn check_offset(
    structure: &'static str,
    field: &'static str,
    offset: u32,
    minimum: u32,
    size: usize,
) -> Result<usize, LinkError> {
    let start = offset as usize;
    if offset < minimum || start >= size {
        return Err(LinkError::OffsetViolation {
            structure,
            field,
            offset,
            minimum,
            maximum: u32::try_from(size).unwrap_or(u32::MAX),
        });
    }
    Ok(start)
}

#[cfg(test)]
mod tests {
    use super::{check_offset, BlockSignature, ExtraDataBlock, HeaderWidth, Structure};
    use crate::error::LinkError;

    struct Sample;

    impl Structure for Sample {
        const NAME: &'static str = "Sample";
        const MINIMUM_SIZE: u32 = 0xc;

        fn decode(data: &[u8]) -> Result<Self, LinkError> {
            Self::validate_block(data)?;
            Ok(Sample)
        }

        fn encode(&self) -> Vec<u8> {
            vec![12, 0, 0, 0, 4, 0, 0, 160, 0, 0, 0, 0]
        }
    }

    impl ExtraDataBlock for Sample {
        const SIGNATURE: BlockSignature = BlockSignature::ConsoleFe;

        fn block_size(&self) -> u32 {
            0xc
        }
    }

    struct Short;

    impl Structure for Short {
        const NAME: &'static str = "Short";
        const MINIMUM_SIZE: u32 = 2;
        const HEADER_WIDTH: HeaderWidth = HeaderWidth::Two;

        fn decode(data: &[u8]) -> Result<Self, LinkError> {
            Self::validate(data)?;
            Ok(Short)
        }

        fn encode(&self) -> Vec<u8> {
            vec![2, 0]
        }
    }

    #[test]
    fn test_validate() {
        let test = [12, 0, 0, 0, 4, 0, 0, 160, 0, 0, 0, 0, 1, 1];
        assert_eq!(Sample::validate_block(&test).unwrap(), 12);
        assert!(Sample::decode(&Sample.encode()).is_ok());
    }

    #[test]
    fn test_validate_too_small() {
        let test = [12, 0, 0, 0];
        assert_eq!(
            Sample::validate(&test),
            Err(LinkError::SizeViolation {
                structure: "Sample",
                actual: 4,
                minimum: 12
            })
        );
    }

    #[test]
    fn test_validate_declared_too_large() {
        let test = [20, 0, 0, 0, 4, 0, 0, 160, 0, 0, 0, 0];
        assert_eq!(
            Sample::validate(&test),
            Err(LinkError::SizeMismatch {
                structure: "Sample",
                declared: 20,
                actual: 12
            })
        );
    }

    #[test]
    fn test_validate_declared_too_small() {
        let test = [8, 0, 0, 0, 4, 0, 0, 160, 0, 0, 0, 0];
        assert_eq!(
            Sample::validate(&test),
            Err(LinkError::SizeViolation {
                structure: "Sample",
                actual: 8,
                minimum: 12
            })
        );
    }

    #[test]
    fn test_validate_bad_signature() {
        let test = [12, 0, 0, 0, 5, 0, 0, 160, 0, 0, 0, 0];
        assert_eq!(
            Sample::validate_block(&test),
            Err(LinkError::SignatureMismatch {
                structure: "Sample",
                found: 0xa0000005,
                expected: 0xa0000004
            })
        );
    }

    #[test]
    fn test_validate_two_byte_header() {
        let test = [4, 0, 1, 2];
        assert_eq!(Short::validate(&test).unwrap(), 4);
        assert!(Short::decode(&Short.encode()).is_ok());
        assert!(Short::validate(&[1]).is_err());
    }

    #[test]
    fn test_check_offset() {
        assert_eq!(check_offset("Test", "Field", 0x1c, 0x1c, 0x30).unwrap(), 0x1c);
        assert!(check_offset("Test", "Field", 0x30, 0x1c, 0x30).is_err());
        assert!(check_offset("Test", "Field", 0x4, 0x1c, 0x30).is_err());
    }

    #[test]
    fn test_block_signature() {
        assert_eq!(
            BlockSignature::from_raw(0xa0000003),
            Some(BlockSignature::Tracker)
        );
        assert_eq!(BlockSignature::from_raw(0xa000000a), None);
        assert_eq!(BlockSignature::KnownFolder.to_raw(), 0xa000000b);
    }
}
