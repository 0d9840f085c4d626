use super::fixed::{decode_dual_string, encode_dual_string, fit_ansi, fit_unicode, DUAL_STRING_BLOCK_SIZE};
use crate::{
    ansi::AnsiString,
    error::LinkError,
    structure::{BlockSignature, ExtraDataBlock, Structure},
};
use serde::Serialize;

/// Windows Installer application identifier of the link target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DarwinDataBlock {
    pub darwin_data_ansi: AnsiString,
    pub darwin_data_unicode: String,
}

impl DarwinDataBlock {
    pub fn new(application_id: &str) -> Self {
        DarwinDataBlock {
            darwin_data_ansi: fit_ansi(application_id),
            darwin_data_unicode: fit_unicode(application_id),
        }
    }
}

impl Structure for DarwinDataBlock {
    const NAME: &'static str = "DarwinDataBlock";
    const MINIMUM_SIZE: u32 = DUAL_STRING_BLOCK_SIZE;

    fn decode(data: &[u8]) -> Result<Self, LinkError> {
        let size = Self::validate_block(data)? as usize;
        let (darwin_data_ansi, darwin_data_unicode) =
            decode_dual_string(&data[..size], Self::NAME)?;

        Ok(DarwinDataBlock {
            darwin_data_ansi,
            darwin_data_unicode,
        })
    }

    fn encode(&self) -> Vec<u8> {
        encode_dual_string(
            Self::SIGNATURE.to_raw(),
            &self.darwin_data_ansi,
            &self.darwin_data_unicode,
        )
    }
}

impl ExtraDataBlock for DarwinDataBlock {
    const SIGNATURE: BlockSignature = BlockSignature::Darwin;

    fn block_size(&self) -> u32 {
        DUAL_STRING_BLOCK_SIZE
    }
}
