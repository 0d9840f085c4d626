use crate::{
    error::LinkError,
    structure::{BlockSignature, ExtraDataBlock, Structure},
    utils::{
        nom_helper::{nom_data, nom_unsigned_four_bytes, parse_error},
        writer::push_u32,
    },
};
use common::windows::SpecialFolder;
use serde::Serialize;

const SPECIAL_FOLDER_SIZE: u32 = 0x10;

/// Location of the link target as a CSIDL special folder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpecialFolderDataBlock {
    pub special_folder: SpecialFolder,
    /// Offset, in bytes, into the LinkTargetIDList of the first child segment of the folder
    pub offset: u32,
}

fn parse_special(data: &[u8]) -> nom::IResult<&[u8], (u32, u32)> {
    let header_size = 8;
    let (input, _header) = nom_data(data, header_size)?;
    let (input, folder_id) = nom_unsigned_four_bytes(input)?;
    let (input, offset) = nom_unsigned_four_bytes(input)?;

    Ok((input, (folder_id, offset)))
}

impl Structure for SpecialFolderDataBlock {
    const NAME: &'static str = "SpecialFolderDataBlock";
    const MINIMUM_SIZE: u32 = SPECIAL_FOLDER_SIZE;

    fn decode(data: &[u8]) -> Result<Self, LinkError> {
        let size = Self::validate_block(data)? as usize;
        let (_, (folder_id, offset)) =
            parse_special(&data[..size]).map_err(parse_error(Self::NAME))?;

        Ok(SpecialFolderDataBlock {
            special_folder: SpecialFolder::from_raw(folder_id),
            offset,
        })
    }

    fn encode(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(SPECIAL_FOLDER_SIZE as usize);
        push_u32(&mut buffer, SPECIAL_FOLDER_SIZE);
        push_u32(&mut buffer, Self::SIGNATURE.to_raw());
        push_u32(&mut buffer, self.special_folder.to_raw());
        push_u32(&mut buffer, self.offset);
        buffer
    }
}

impl ExtraDataBlock for SpecialFolderDataBlock {
    const SIGNATURE: BlockSignature = BlockSignature::SpecialFolder;

    fn block_size(&self) -> u32 {
        SPECIAL_FOLDER_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::SpecialFolderDataBlock;
    use crate::{error::LinkError, structure::Structure};
    use common::windows::SpecialFolder;

    #[test]
    fn test_special() {
        let test = [16, 0, 0, 0, 5, 0, 0, 160, 38, 0, 0, 0, 177, 0, 0, 0];
        let result = SpecialFolderDataBlock::decode(&test).unwrap();
        assert_eq!(result.special_folder, SpecialFolder::ProgramFiles);
        assert_eq!(result.offset, 177);
        assert_eq!(result.encode(), test);
    }

    #[test]
    fn test_special_unknown_folder() {
        let test = [16, 0, 0, 0, 5, 0, 0, 160, 255, 0, 0, 0, 0, 0, 0, 0];
        let result = SpecialFolderDataBlock::decode(&test).unwrap();
        assert_eq!(result.special_folder, SpecialFolder::Unknown(255));
        assert_eq!(result.encode(), test);
    }

    #[test]
    fn test_special_bad_signature() {
        let test = [16, 0, 0, 0, 11, 0, 0, 160, 38, 0, 0, 0, 177, 0, 0, 0];
        assert_eq!(
            SpecialFolderDataBlock::decode(&test),
            Err(LinkError::SignatureMismatch {
                structure: "SpecialFolderDataBlock",
                found: 0xa000000b,
                expected: 0xa0000005
            })
        );
    }
}
