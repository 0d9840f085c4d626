use crate::{
    error::LinkError,
    structure::{BlockSignature, ExtraDataBlock, Structure},
    utils::{
        strings::{extract_utf16_string, utf16_len},
        writer::{push_u32, push_utf16_units, size_u32},
    },
};
use serde::Serialize;

const SHIM_MINIMUM_SIZE: u32 = 0x88;

/// Name of the shim layer applied when the link target is activated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShimDataBlock {
    pub layer_name: String,
}

impl Structure for ShimDataBlock {
    const NAME: &'static str = "ShimDataBlock";
    const MINIMUM_SIZE: u32 = SHIM_MINIMUM_SIZE;

    fn decode(data: &[u8]) -> Result<Self, LinkError> {
        let size = Self::validate_block(data)? as usize;
        let header_size = 8;

        Ok(ShimDataBlock {
            layer_name: extract_utf16_string(&data[header_size..size]),
        })
    }

    fn encode(&self) -> Vec<u8> {
        let block_size = self.block_size();
        let mut buffer = Vec::with_capacity(block_size as usize);
        push_u32(&mut buffer, block_size);
        push_u32(&mut buffer, Self::SIGNATURE.to_raw());

        let units: Vec<u16> = self.layer_name.encode_utf16().collect();
        push_utf16_units(&mut buffer, &units);
        buffer.resize(block_size as usize, 0);
        buffer
    }
}

impl ExtraDataBlock for ShimDataBlock {
    const SIGNATURE: BlockSignature = BlockSignature::Shim;

    /// 0x88 for names shorter than 64 units, otherwise the name, a terminator and the header
    fn block_size(&self) -> u32 {
        let units = utf16_len(&self.layer_name);
        if units < 0x40 {
            return SHIM_MINIMUM_SIZE;
        }
        size_u32((units + 1) * 2 + 8)
    }
}
