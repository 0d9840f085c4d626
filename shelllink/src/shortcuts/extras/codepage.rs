use crate::{
    error::LinkError,
    structure::{BlockSignature, ExtraDataBlock, Structure},
    utils::{
        nom_helper::{nom_data, nom_unsigned_four_bytes, parse_error},
        writer::push_u32,
    },
};
use serde::Serialize;

const CONSOLE_FE_SIZE: u32 = 0xc;

/// Code page used to display text when the link target is a console application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConsoleFEDataBlock {
    pub code_page: u32,
}

/// Skip the block header and read the code page
fn parse_codepage(data: &[u8]) -> nom::IResult<&[u8], u32> {
    let header_size = 8;
    let (input, _header) = nom_data(data, header_size)?;
    let (input, codepage) = nom_unsigned_four_bytes(input)?;
    Ok((input, codepage))
}

impl Structure for ConsoleFEDataBlock {
    const NAME: &'static str = "ConsoleFEDataBlock";
    const MINIMUM_SIZE: u32 = CONSOLE_FE_SIZE;

    fn decode(data: &[u8]) -> Result<Self, LinkError> {
        let size = Self::validate_block(data)? as usize;
        let (_, code_page) = parse_codepage(&data[..size]).map_err(parse_error(Self::NAME))?;
        Ok(ConsoleFEDataBlock { code_page })
    }

    fn encode(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(CONSOLE_FE_SIZE as usize);
        push_u32(&mut buffer, CONSOLE_FE_SIZE);
        push_u32(&mut buffer, Self::SIGNATURE.to_raw());
        push_u32(&mut buffer, self.code_page);
        buffer
    }
}

impl ExtraDataBlock for ConsoleFEDataBlock {
    const SIGNATURE: BlockSignature = BlockSignature::ConsoleFe;

    fn block_size(&self) -> u32 {
        CONSOLE_FE_SIZE
    }
}
