use crate::{
    error::LinkError,
    structure::{BlockSignature, ExtraDataBlock, Structure},
    utils::{
        nom_helper::{nom_data, nom_unsigned_four_bytes, parse_error},
        uuid::nom_guid,
        writer::{push_guid, push_u32},
    },
};
use common::folders::known_folder_name;
use serde::Serialize;
use uuid::Uuid;

const KNOWN_FOLDER_SIZE: u32 = 0x1c;

/// Location of the link target as a known folder GUID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KnownFolderDataBlock {
    pub known_folder_id: Uuid,
    /// Offset, in bytes, into the LinkTargetIDList of the first child segment of the folder
    pub offset: u32,
}

impl KnownFolderDataBlock {
    /// Display name of well known folders. Cosmetic only
    pub fn folder_name(&self) -> Option<&'static str> {
        known_folder_name(&self.known_folder_id)
    }
}

fn parse_known(data: &[u8]) -> nom::IResult<&[u8], (Uuid, u32)> {
    let header_size = 8;
    let (input, _header) = nom_data(data, header_size)?;
    let (input, guid) = nom_guid(input)?;
    let (input, offset) = nom_unsigned_four_bytes(input)?;

    Ok((input, (guid, offset)))
}

impl Structure for KnownFolderDataBlock {
    const NAME: &'static str = "KnownFolderDataBlock";
    const MINIMUM_SIZE: u32 = KNOWN_FOLDER_SIZE;

    fn decode(data: &[u8]) -> Result<Self, LinkError> {
        let size = Self::validate_block(data)? as usize;
        let (_, (known_folder_id, offset)) =
            parse_known(&data[..size]).map_err(parse_error(Self::NAME))?;

        Ok(KnownFolderDataBlock {
            known_folder_id,
            offset,
        })
    }

    fn encode(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(KNOWN_FOLDER_SIZE as usize);
        push_u32(&mut buffer, KNOWN_FOLDER_SIZE);
        push_u32(&mut buffer, Self::SIGNATURE.to_raw());
        push_guid(&mut buffer, &self.known_folder_id);
        push_u32(&mut buffer, self.offset);
        buffer
    }
}

impl ExtraDataBlock for KnownFolderDataBlock {
    const SIGNATURE: BlockSignature = BlockSignature::KnownFolder;

    fn block_size(&self) -> u32 {
        KNOWN_FOLDER_SIZE
    }
}
