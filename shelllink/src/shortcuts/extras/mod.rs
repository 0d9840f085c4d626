pub mod codepage;
pub mod console;
pub mod darwin;
pub mod environment;
mod fixed;
pub mod icon;
pub mod known;
pub mod property;
pub mod shim;
pub mod special;
pub mod tracker;
pub mod vista;

use crate::{
    error::LinkError,
    options::{DecodeOptions, UnknownBlockPolicy},
    structure::{check_declared, check_minimum, BlockSignature, ExtraDataBlock, Structure},
    utils::{
        encoding::serialize_base64,
        nom_helper::{nom_unsigned_four_bytes, parse_error},
        writer::{push_u32, size_u32},
    },
};
use codepage::ConsoleFEDataBlock;
use console::ConsoleDataBlock;
use darwin::DarwinDataBlock;
use environment::EnvironmentVariableDataBlock;
use icon::IconEnvironmentDataBlock;
use known::KnownFolderDataBlock;
use log::{debug, warn};
use property::PropertyStoreDataBlock;
use serde::Serialize;
use shim::ShimDataBlock;
use special::SpecialFolderDataBlock;
use tracker::TrackerDataBlock;
use vista::VistaAndAboveIdListDataBlock;

/// Size and signature
const BLOCK_HEADER_SIZE: u32 = 8;
/// Any size below this value is the terminal block
const TERMINAL_SIZE: u32 = 4;

/// Extra data block with a signature that is reserved or unknown. Payload is kept as is
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnknownDataBlock {
    pub signature: u32,
    /// Bytes after the block header
    #[serde(serialize_with = "serialize_base64")]
    pub data: Vec<u8>,
}

impl UnknownDataBlock {
    pub fn block_size(&self) -> u32 {
        size_u32(BLOCK_HEADER_SIZE as usize + self.data.len())
    }
}

impl Structure for UnknownDataBlock {
    const NAME: &'static str = "UnknownDataBlock";
    const MINIMUM_SIZE: u32 = BLOCK_HEADER_SIZE;

    fn decode(data: &[u8]) -> Result<Self, LinkError> {
        let size = Self::validate(data)? as usize;
        let (input, _size) = nom_unsigned_four_bytes(data).map_err(parse_error(Self::NAME))?;
        let (_, signature) = nom_unsigned_four_bytes(input).map_err(parse_error(Self::NAME))?;

        Ok(UnknownDataBlock {
            signature,
            data: data[BLOCK_HEADER_SIZE as usize..size].to_vec(),
        })
    }

    fn encode(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.block_size() as usize);
        push_u32(&mut buffer, self.block_size());
        push_u32(&mut buffer, self.signature);
        buffer.extend_from_slice(&self.data);
        buffer
    }
}

/// Every kind of extra data block, selected by signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DataBlock {
    EnvironmentVariable(EnvironmentVariableDataBlock),
    Console(ConsoleDataBlock),
    Tracker(TrackerDataBlock),
    ConsoleFe(ConsoleFEDataBlock),
    SpecialFolder(SpecialFolderDataBlock),
    Darwin(DarwinDataBlock),
    IconEnvironment(IconEnvironmentDataBlock),
    Shim(ShimDataBlock),
    PropertyStore(PropertyStoreDataBlock),
    KnownFolder(KnownFolderDataBlock),
    VistaAndAboveIdList(VistaAndAboveIdListDataBlock),
    Unknown(UnknownDataBlock),
}

impl DataBlock {
    /// Decode one block. `data` must be bounded to the block
    pub fn decode(data: &[u8], options: &DecodeOptions) -> Result<DataBlock, LinkError> {
        check_minimum("ExtraDataBlock", data.len() as u64, BLOCK_HEADER_SIZE)?;
        let (input, _size) = nom_unsigned_four_bytes(data).map_err(parse_error("ExtraDataBlock"))?;
        let (_, signature) =
            nom_unsigned_four_bytes(input).map_err(parse_error("ExtraDataBlock"))?;

        let kind = match BlockSignature::from_raw(signature) {
            Some(result) => result,
            None => {
                if options.unknown_blocks == UnknownBlockPolicy::Reject {
                    return Err(LinkError::UnknownSignature { found: signature });
                }
                debug!("[shortcuts] Keeping extra data block with unknown signature {signature:#X}");
                return Ok(DataBlock::Unknown(UnknownDataBlock::decode(data)?));
            }
        };

        let block = match kind {
            BlockSignature::EnvironmentVariable => {
                DataBlock::EnvironmentVariable(EnvironmentVariableDataBlock::decode(data)?)
            }
            BlockSignature::Console => DataBlock::Console(ConsoleDataBlock::decode(data)?),
            BlockSignature::Tracker => DataBlock::Tracker(TrackerDataBlock::decode(data)?),
            BlockSignature::ConsoleFe => DataBlock::ConsoleFe(ConsoleFEDataBlock::decode(data)?),
            BlockSignature::SpecialFolder => {
                DataBlock::SpecialFolder(SpecialFolderDataBlock::decode(data)?)
            }
            BlockSignature::Darwin => DataBlock::Darwin(DarwinDataBlock::decode(data)?),
            BlockSignature::IconEnvironment => {
                DataBlock::IconEnvironment(IconEnvironmentDataBlock::decode(data)?)
            }
            BlockSignature::Shim => DataBlock::Shim(ShimDataBlock::decode(data)?),
            BlockSignature::PropertyStore => {
                DataBlock::PropertyStore(PropertyStoreDataBlock::decode(data)?)
            }
            BlockSignature::KnownFolder => {
                DataBlock::KnownFolder(KnownFolderDataBlock::decode(data)?)
            }
            BlockSignature::VistaAndAboveIdList => {
                DataBlock::VistaAndAboveIdList(VistaAndAboveIdListDataBlock::decode(data)?)
            }
        };
        Ok(block)
    }

    /// Raw signature of the block
    pub fn signature(&self) -> u32 {
        match self {
            DataBlock::EnvironmentVariable(_) => EnvironmentVariableDataBlock::SIGNATURE.to_raw(),
            DataBlock::Console(_) => ConsoleDataBlock::SIGNATURE.to_raw(),
            DataBlock::Tracker(_) => TrackerDataBlock::SIGNATURE.to_raw(),
            DataBlock::ConsoleFe(_) => ConsoleFEDataBlock::SIGNATURE.to_raw(),
            DataBlock::SpecialFolder(_) => SpecialFolderDataBlock::SIGNATURE.to_raw(),
            DataBlock::Darwin(_) => DarwinDataBlock::SIGNATURE.to_raw(),
            DataBlock::IconEnvironment(_) => IconEnvironmentDataBlock::SIGNATURE.to_raw(),
            DataBlock::Shim(_) => ShimDataBlock::SIGNATURE.to_raw(),
            DataBlock::PropertyStore(_) => PropertyStoreDataBlock::SIGNATURE.to_raw(),
            DataBlock::KnownFolder(_) => KnownFolderDataBlock::SIGNATURE.to_raw(),
            DataBlock::VistaAndAboveIdList(_) => VistaAndAboveIdListDataBlock::SIGNATURE.to_raw(),
            DataBlock::Unknown(block) => block.signature,
        }
    }

    pub fn block_size(&self) -> u32 {
        match self {
            DataBlock::EnvironmentVariable(block) => block.block_size(),
            DataBlock::Console(block) => block.block_size(),
            DataBlock::Tracker(block) => block.block_size(),
            DataBlock::ConsoleFe(block) => block.block_size(),
            DataBlock::SpecialFolder(block) => block.block_size(),
            DataBlock::Darwin(block) => block.block_size(),
            DataBlock::IconEnvironment(block) => block.block_size(),
            DataBlock::Shim(block) => block.block_size(),
            DataBlock::PropertyStore(block) => block.block_size(),
            DataBlock::KnownFolder(block) => block.block_size(),
            DataBlock::VistaAndAboveIdList(block) => block.block_size(),
            DataBlock::Unknown(block) => block.block_size(),
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        match self {
            DataBlock::EnvironmentVariable(block) => block.encode(),
            DataBlock::Console(block) => block.encode(),
            DataBlock::Tracker(block) => block.encode(),
            DataBlock::ConsoleFe(block) => block.encode(),
            DataBlock::SpecialFolder(block) => block.encode(),
            DataBlock::Darwin(block) => block.encode(),
            DataBlock::IconEnvironment(block) => block.encode(),
            DataBlock::Shim(block) => block.encode(),
            DataBlock::PropertyStore(block) => block.encode(),
            DataBlock::KnownFolder(block) => block.encode(),
            DataBlock::VistaAndAboveIdList(block) => block.encode(),
            DataBlock::Unknown(block) => block.encode(),
        }
    }
}

/// The extra data section: blocks in order, ended by a terminal block
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ExtraData {
    pub blocks: Vec<DataBlock>,
}

impl ExtraData {
    pub fn new(blocks: Vec<DataBlock>) -> ExtraData {
        ExtraData { blocks }
    }

    /// Decode the extra data section with the default options
    pub fn decode(data: &[u8]) -> Result<ExtraData, LinkError> {
        ExtraData::decode_with_options(data, &DecodeOptions::default())
    }

    /// Decode blocks until the terminal block. Any bad block stops decoding with an error
    pub fn decode_with_options(
        data: &[u8],
        options: &DecodeOptions,
    ) -> Result<ExtraData, LinkError> {
        let mut blocks = Vec::new();
        let mut input = data;

        loop {
            if input.is_empty() && !options.require_terminal {
                warn!("[shortcuts] Extra data ended without a terminal block");
                break;
            }
            check_minimum("TerminalBlock", input.len() as u64, TERMINAL_SIZE)?;

            let (_, block_size) =
                nom_unsigned_four_bytes(input).map_err(parse_error("ExtraDataBlock"))?;
            if block_size < TERMINAL_SIZE {
                let remaining = input.len() - TERMINAL_SIZE as usize;
                if remaining != 0 {
                    debug!("[shortcuts] Ignoring {remaining} bytes after the terminal block");
                }
                break;
            }

            check_minimum("ExtraDataBlock", block_size as u64, BLOCK_HEADER_SIZE)?;
            check_declared("ExtraDataBlock", block_size as u64, input.len() as u64)?;

            let (block_data, remaining) = input.split_at(block_size as usize);
            blocks.push(DataBlock::decode(block_data, options)?);
            input = remaining;
        }

        Ok(ExtraData { blocks })
    }

    /// Encode every block then a zero terminal block
    pub fn encode(&self) -> Vec<u8> {
        let mut buffer = Vec::new();
        for block in &self.blocks {
            buffer.extend_from_slice(&block.encode());
        }
        push_u32(&mut buffer, 0);
        buffer
    }

    /// Encoded size, terminal block included
    pub fn size(&self) -> usize {
        self.blocks
            .iter()
            .map(|block| block.block_size() as usize)
            .sum::<usize>()
            + TERMINAL_SIZE as usize
    }
}
