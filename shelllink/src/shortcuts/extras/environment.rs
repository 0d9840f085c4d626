use super::fixed::{decode_dual_string, encode_dual_string, fit_ansi, fit_unicode, DUAL_STRING_BLOCK_SIZE};
use crate::{
    ansi::AnsiString,
    error::LinkError,
    structure::{BlockSignature, ExtraDataBlock, Structure},
};
use serde::Serialize;

/// Path to the link target expressed with environment variables, ex: `%windir%\notepad.exe`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentVariableDataBlock {
    pub target_ansi: AnsiString,
    pub target_unicode: String,
}

impl EnvironmentVariableDataBlock {
    pub fn new(target: &str) -> Self {
        EnvironmentVariableDataBlock {
            target_ansi: fit_ansi(target),
            target_unicode: fit_unicode(target),
        }
    }
}

impl Structure for EnvironmentVariableDataBlock {
    const NAME: &'static str = "EnvironmentVariableDataBlock";
    const MINIMUM_SIZE: u32 = DUAL_STRING_BLOCK_SIZE;

    fn decode(data: &[u8]) -> Result<Self, LinkError> {
        let size = Self::validate_block(data)? as usize;
        let (target_ansi, target_unicode) = decode_dual_string(&data[..size], Self::NAME)?;

        Ok(EnvironmentVariableDataBlock {
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

impl ExtraDataBlock for EnvironmentVariableDataBlock {
    const SIGNATURE: BlockSignature = BlockSignature::EnvironmentVariable;

    fn block_size(&self) -> u32 {
        DUAL_STRING_BLOCK_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::EnvironmentVariableDataBlock;
    use crate::{
        error::LinkError,
        structure::{ExtraDataBlock, Structure},
    };

    #[test]
    fn test_environment() {
        let block = EnvironmentVariableDataBlock::new("%windir%\\system32\\cmd.exe");
        let data = block.encode();
        assert_eq!(data.len() as u32, block.block_size());
        assert_eq!(data[0..8], [20, 3, 0, 0, 1, 0, 0, 160]);
        assert_eq!(EnvironmentVariableDataBlock::decode(&data).unwrap(), block);
    }

    #[test]
    fn test_environment_truncated_target() {
        let block = EnvironmentVariableDataBlock::new(&"a".repeat(300));
        assert_eq!(block.target_ansi.len(), 259);
        assert_eq!(block.target_unicode.len(), 259);

        let result = EnvironmentVariableDataBlock::decode(&block.encode()).unwrap();
        assert_eq!(result, block);
    }

    #[test]
    fn test_environment_too_small() {
        let data = EnvironmentVariableDataBlock::new("target").encode();
        assert_eq!(
            EnvironmentVariableDataBlock::decode(&data[..0x313]),
            Err(LinkError::SizeViolation {
                structure: "EnvironmentVariableDataBlock",
                actual: 0x313,
                minimum: 0x314
            })
        );
    }

    #[test]
    fn test_environment_bad_signature() {
        let mut data = EnvironmentVariableDataBlock::new("target").encode();
        data[4] = 7;
        assert_eq!(
            EnvironmentVariableDataBlock::decode(&data),
            Err(LinkError::SignatureMismatch {
                structure: "EnvironmentVariableDataBlock",
                found: 0xa0000007,
                expected: 0xa0000001
            })
        );
    }
}
