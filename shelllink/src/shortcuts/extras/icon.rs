use super::fixed::{decode_dual_string, encode_dual_string, fit_ansi, fit_unicode, DUAL_STRING_BLOCK_SIZE};
use crate::{
    ansi::AnsiString,
    error::LinkError,
    structure::{BlockSignature, ExtraDataBlock, Structure},
};
use serde::Serialize;

/// Icon location expressed with environment variables
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconEnvironmentDataBlock {
    pub target_ansi: AnsiString,
    pub target_unicode: String,
}

impl IconEnvironmentDataBlock {
    pub fn new(icon_path: &str) -> Self {
        IconEnvironmentDataBlock {
            target_ansi: fit_ansi(icon_path),
            target_unicode: fit_unicode(icon_path),
        }
    }
}

impl Structure for IconEnvironmentDataBlock {
    const NAME: &'static str = "IconEnvironmentDataBlock";
    const MINIMUM_SIZE: u32 = DUAL_STRING_BLOCK_SIZE;

    fn decode(data: &[u8]) -> Result<Self, LinkError> {
        let size = Self::validate_block(data)? as usize;
        let (target_ansi, target_unicode) = decode_dual_string(&data[..size], Self::NAME)?;

        Ok(IconEnvironmentDataBlock {
            target_ansi,
            target_unicode,
        })
    }

    fn encode(&self) -> Vec<u8> {
        encode_dual_string(
            Self::SIGNATURE.to_raw(),
            &self.target_ansi,
            &self.target_unicode,
        )
    }
}

impl ExtraDataBlock for IconEnvironmentDataBlock {
    const SIGNATURE: BlockSignature = BlockSignature::IconEnvironment;

    fn block_size(&self) -> u32 {
        DUAL_STRING_BLOCK_SIZE
    }
}
