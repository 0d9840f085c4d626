use crate::{
    error::LinkError,
    propertystore::store::{decode_property_store, encode_property_store, SerializedPropertyStorage},
    structure::{BlockSignature, ExtraDataBlock, Structure},
    utils::writer::{push_u32, size_u32},
};
use serde::Serialize;

/// Property store values attached to the link target
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PropertyStoreDataBlock {
    pub property_store: Vec<SerializedPropertyStorage>,
}

impl Structure for PropertyStoreDataBlock {
    const NAME: &'static str = "PropertyStoreDataBlock";
    const MINIMUM_SIZE: u32 = 0xc;

    fn decode(data: &[u8]) -> Result<Self, LinkError> {
        let size = Self::validate_block(data)? as usize;
        let header_size = 8;

        Ok(PropertyStoreDataBlock {
            property_store: decode_property_store(&data[header_size..size])?,
        })
    }

    fn encode(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.block_size() as usize);
        push_u32(&mut buffer, self.block_size());
        push_u32(&mut buffer, Self::SIGNATURE.to_raw());
        buffer.extend_from_slice(&encode_property_store(&self.property_store));
        buffer
    }
}

impl ExtraDataBlock for PropertyStoreDataBlock {
    const SIGNATURE: BlockSignature = BlockSignature::PropertyStore;

    /// Header, every storage record and the zero terminal
    fn block_size(&self) -> u32 {
        let stores: usize = self
            .property_store
            .iter()
            .map(|store| store.storage_size() as usize)
            .sum();
        size_u32(Self::MINIMUM_SIZE as usize + stores)
    }
}

#[cfg(test)]
mod tests {
    use super::PropertyStoreDataBlock;
    use crate::{
        error::LinkError,
        structure::{ExtraDataBlock, Structure},
    };

    #[test]
    fn test_property() {
        let test = [
            69, 0, 0, 0, 9, 0, 0, 160, 57, 0, 0, 0, 49, 83, 80, 83, 177, 22, 109, 68, 173, 141,
            112, 72, 167, 72, 64, 46, 164, 61, 120, 140, 29, 0, 0, 0, 104, 0, 0, 0, 0, 72, 0, 0, 0,
            144, 47, 84, 8, 0, 0, 0, 0, 0, 0, 80, 31, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        ];
        let result = PropertyStoreDataBlock::decode(&test).unwrap();
        assert_eq!(result.property_store.len(), 1);
        assert_eq!(
            result.property_store[0].format_id.to_string(),
            "446d16b1-8dad-4870-a748-402ea43d788c"
        );
        assert_eq!(result.block_size(), 69);
        assert_eq!(result.encode(), test);
    }

    #[test]
    fn test_empty_property() {
        let block = PropertyStoreDataBlock::default();
        let data = block.encode();
        assert_eq!(data, [12, 0, 0, 0, 9, 0, 0, 160, 0, 0, 0, 0]);
        assert_eq!(PropertyStoreDataBlock::decode(&data).unwrap(), block);
    }

    #[test]
    fn test_property_storage_past_block() {
        let test = [16, 0, 0, 0, 9, 0, 0, 160, 57, 0, 0, 0, 49, 83, 80, 83];
        assert_eq!(
            PropertyStoreDataBlock::decode(&test),
            Err(LinkError::SizeViolation {
                structure: "SerializedPropertyStorage",
                actual: 8,
                minimum: 24
            })
        );
    }
}
