use crate::{
    error::LinkError,
    structure::{check_declared, check_minimum, HeaderWidth, Structure},
    utils::{
        encoding::serialize_base64,
        nom_helper::{nom_unsigned_two_bytes, parse_error},
        writer::push_u16,
    },
};
use log::warn;
use serde::Serialize;

/// Size of the u16 size field (and of the zero TerminalID)
const SIZE_FIELD: usize = 2;

/// Resolves the display name of an ItemID. Platform shells provide this, the crate does not
pub trait DisplayNameResolver {
    fn display_name(&self, item: &[u8]) -> Option<String>;
}

/// A single ItemID. The payload is never interpreted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemId {
    #[serde(serialize_with = "serialize_base64")]
    pub(crate) data: Vec<u8>,
}

impl ItemId {
    /// Create an ItemID. Fails if `2 + data.len()` does not fit in the u16 size field
    pub fn new(data: Vec<u8>) -> Result<ItemId, LinkError> {
        let size = data.len() as u64 + SIZE_FIELD as u64;
        if size > u16::MAX as u64 {
            return Err(LinkError::SizeOverflow {
                structure: Self::NAME,
                size,
                maximum: u16::MAX as u64,
            });
        }
        Ok(ItemId { data })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Encoded size, size field included
    pub fn item_size(&self) -> u16 {
        (self.data.len() + SIZE_FIELD) as u16
    }

    pub fn display_name(&self, resolver: &dyn DisplayNameResolver) -> Option<String> {
        resolver.display_name(&self.data)
    }
}

impl Structure for ItemId {
    const NAME: &'static str = "ItemID";
    const MINIMUM_SIZE: u32 = 2;
    const HEADER_WIDTH: HeaderWidth = HeaderWidth::Two;

    fn decode(data: &[u8]) -> Result<Self, LinkError> {
        let size = Self::validate(data)? as usize;
        Ok(ItemId {
            data: data[SIZE_FIELD..size].to_vec(),
        })
    }

    fn encode(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.item_size() as usize);
        push_u16(&mut buffer, self.item_size());
        buffer.extend_from_slice(&self.data);
        buffer
    }
}

/// Ordered sequence of ItemIDs
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct IdList {
    pub(crate) items: Vec<ItemId>,
}

impl IdList {
    pub fn new(items: Vec<ItemId>) -> IdList {
        IdList { items }
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total encoded size of the items, without any terminator
    pub fn items_size(&self) -> usize {
        self.items
            .iter()
            .map(|item| item.item_size() as usize)
            .sum()
    }

    pub(crate) fn encode_items(&self, buffer: &mut Vec<u8>) {
        for item in &self.items {
            buffer.extend_from_slice(&item.encode());
        }
    }

    /**
     * Decode ItemIDs until an item size of zero. The zero item is consumed and not stored.
     * Running out of data exactly after an item is accepted
     */
    pub(crate) fn decode_terminated(data: &[u8]) -> Result<IdList, LinkError> {
        let mut items = Vec::new();
        let mut input = data;

        loop {
            if input.is_empty() {
                warn!("[shortcuts] IDList ended without a terminal ItemID");
                break;
            }
            check_minimum(ItemId::NAME, input.len() as u64, ItemId::MINIMUM_SIZE)?;

            let (_, item_size) = nom_unsigned_two_bytes(input).map_err(parse_error(ItemId::NAME))?;
            if item_size == 0 {
                break;
            }

            let item = ItemId::decode(input)?;
            input = &input[item_size as usize..];
            items.push(item);
        }

        Ok(IdList { items })
    }
}

/// The LinkTargetIDList section. `IDListSize` counts the items and the TerminalID but not itself
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LinkTargetIdList {
    pub(crate) id_list: IdList,
}

impl LinkTargetIdList {
    /// Wrap an IDList. Fails if `IDListSize` would not fit in u16
    pub fn new(id_list: IdList) -> Result<LinkTargetIdList, LinkError> {
        let size = id_list.items_size() as u64 + SIZE_FIELD as u64;
        if size > u16::MAX as u64 {
            return Err(LinkError::SizeOverflow {
                structure: Self::NAME,
                size,
                maximum: u16::MAX as u64,
            });
        }
        Ok(LinkTargetIdList { id_list })
    }

    pub fn id_list(&self) -> &IdList {
        &self.id_list
    }

    /// Value of the `IDListSize` field
    pub fn id_list_size(&self) -> u16 {
        (self.id_list.items_size() + SIZE_FIELD) as u16
    }
}

impl Structure for LinkTargetIdList {
    const NAME: &'static str = "LinkTargetIDList";
    const MINIMUM_SIZE: u32 = 2;
    const HEADER_WIDTH: HeaderWidth = HeaderWidth::Two;

    /// Returns the total size of the section, `IDListSize + 2`
    fn validate(data: &[u8]) -> Result<u32, LinkError> {
        check_minimum(Self::NAME, data.len() as u64, Self::MINIMUM_SIZE)?;
        let (_, id_list_size) = nom_unsigned_two_bytes(data).map_err(parse_error(Self::NAME))?;

        let total = id_list_size as u32 + SIZE_FIELD as u32;
        check_declared(Self::NAME, total as u64, data.len() as u64)?;
        Ok(total)
    }

    fn decode(data: &[u8]) -> Result<Self, LinkError> {
        let total = Self::validate(data)? as usize;

        let mut items = Vec::new();
        let mut input = &data[SIZE_FIELD..total];
        while input.len() > SIZE_FIELD {
            let (_, item_size) = nom_unsigned_two_bytes(input).map_err(parse_error(Self::NAME))?;
            if item_size == 0 {
                break;
            }

            let item = ItemId::decode(input)?;
            input = &input[item_size as usize..];
            items.push(item);
        }

        if input.len() != SIZE_FIELD || input.iter().any(|value| *value != 0) {
            warn!("[shortcuts] LinkTargetIDList does not end with a TerminalID");
        }

        Ok(LinkTargetIdList {
            id_list: IdList { items },
        })
    }

    fn encode(&self) -> Vec<u8> {
        let id_list_size = self.id_list_size();
        let mut buffer = Vec::with_capacity(id_list_size as usize + SIZE_FIELD);
        push_u16(&mut buffer, id_list_size);
        self.id_list.encode_items(&mut buffer);
        push_u16(&mut buffer, 0);
        buffer
    }
}
