use crate::{
    error::LinkError,
    shortcuts::idlist::IdList,
    structure::{BlockSignature, ExtraDataBlock, Structure},
    utils::writer::{push_u16, push_u32, size_u32},
};
use serde::Serialize;

/// Alternate IDList used instead of the LinkTargetIDList on Vista and above
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct VistaAndAboveIdListDataBlock {
    pub id_list: IdList,
}

impl Structure for VistaAndAboveIdListDataBlock {
    const NAME: &'static str = "VistaAndAboveIDListDataBlock";
    const MINIMUM_SIZE: u32 = 0xa;

    fn decode(data: &[u8]) -> Result<Self, LinkError> {
        let size = Self::validate_block(data)? as usize;
        let header_size = 8;

        Ok(VistaAndAboveIdListDataBlock {
            id_list: IdList::decode_terminated(&data[header_size..size])?,
        })
    }

    fn encode(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.block_size() as usize);
        push_u32(&mut buffer, self.block_size());
        push_u32(&mut buffer, Self::SIGNATURE.to_raw());
        self.id_list.encode_items(&mut buffer);
        push_u16(&mut buffer, 0);
        buffer
    }
}

impl ExtraDataBlock for VistaAndAboveIdListDataBlock {
    const SIGNATURE: BlockSignature = BlockSignature::VistaAndAboveIdList;

    /// Header, the items and a zero TerminalID
    fn block_size(&self) -> u32 {
        size_u32(Self::MINIMUM_SIZE as usize + self.id_list.items_size())
    }
}

#[cfg(test)]
mod tests {
    use super::VistaAndAboveIdListDataBlock;
    use crate::{
        error::LinkError,
        shortcuts::idlist::{IdList, ItemId},
        structure::{ExtraDataBlock, Structure},
    };

    #[test]
    fn test_vista_three_items() {
        let items = vec![
            ItemId::new(vec![31, 80, 224, 79]).unwrap(),
            ItemId::new(vec![47, 67, 58, 92, 0]).unwrap(),
            ItemId::new(vec![49, 0]).unwrap(),
        ];
        let block = VistaAndAboveIdListDataBlock {
            id_list: IdList::new(items),
        };
        assert_eq!(block.block_size(), 8 + 6 + 7 + 4 + 2);

        let data = block.encode();
        assert_eq!(data.len() as u32, block.block_size());
        assert_eq!(data[data.len() - 2..], [0, 0]);

        let result = VistaAndAboveIdListDataBlock::decode(&data).unwrap();
        assert_eq!(result.id_list.items().len(), 3);
        assert_eq!(result, block);
    }

    #[test]
    fn test_vista_empty() {
        let block = VistaAndAboveIdListDataBlock::default();
        let data = block.encode();
        assert_eq!(data, [10, 0, 0, 0, 12, 0, 0, 160, 0, 0]);
        assert_eq!(VistaAndAboveIdListDataBlock::decode(&data).unwrap(), block);
    }

    #[test]
    fn test_vista_missing_terminal() {
        let test = [12, 0, 0, 0, 12, 0, 0, 160, 4, 0, 31, 80];
        let result = VistaAndAboveIdListDataBlock::decode(&test).unwrap();
        assert_eq!(result.id_list.items().len(), 1);
    }

    #[test]
    fn test_vista_dangling_byte() {
        let test = [11, 0, 0, 0, 12, 0, 0, 160, 3, 0, 1];
        let result = VistaAndAboveIdListDataBlock::decode(&test);
        assert!(result.is_ok());

        let test = [13, 0, 0, 0, 12, 0, 0, 160, 4, 0, 31, 80, 1];
        assert_eq!(
            VistaAndAboveIdListDataBlock::decode(&test),
            Err(LinkError::SizeViolation {
                structure: "ItemID",
                actual: 1,
                minimum: 2
            })
        );
    }
}
