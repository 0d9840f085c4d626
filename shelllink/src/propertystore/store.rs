use crate::{
    error::LinkError,
    structure::{check_minimum, Structure},
    utils::{
        encoding::serialize_base64,
        nom_helper::{nom_unsigned_four_bytes, parse_error},
        uuid::nom_guid,
        writer::{push_guid, push_u32, size_u32},
    },
};
use log::warn;
use serde::Serialize;
use uuid::Uuid;

/// "1SPS"
pub const PROPERTY_STORAGE_VERSION: u32 = 0x53505331;
const STORAGE_HEADER_SIZE: u32 = 24;

/// One serialized property storage record. The values are kept as raw bytes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SerializedPropertyStorage {
    pub format_id: Uuid,
    #[serde(serialize_with = "serialize_base64")]
    pub values: Vec<u8>,
}

impl SerializedPropertyStorage {
    pub fn storage_size(&self) -> u32 {
        size_u32(STORAGE_HEADER_SIZE as usize + self.values.len())
    }
}

fn parse_storage_header(data: &[u8]) -> nom::IResult<&[u8], (u32, Uuid)> {
    let (input, _size) = nom_unsigned_four_bytes(data)?;
    let (input, version) = nom_unsigned_four_bytes(input)?;
    let (input, format_id) = nom_guid(input)?;
    Ok((input, (version, format_id)))
}

impl Structure for SerializedPropertyStorage {
    const NAME: &'static str = "SerializedPropertyStorage";
    const MINIMUM_SIZE: u32 = STORAGE_HEADER_SIZE;

    fn decode(data: &[u8]) -> Result<Self, LinkError> {
        let size = Self::validate(data)? as usize;
        let (_, (version, format_id)) =
            parse_storage_header(data).map_err(parse_error(Self::NAME))?;

        if version != PROPERTY_STORAGE_VERSION {
            return Err(LinkError::SignatureMismatch {
                structure: Self::NAME,
                found: version,
                expected: PROPERTY_STORAGE_VERSION,
            });
        }

        Ok(SerializedPropertyStorage {
            format_id,
            values: data[STORAGE_HEADER_SIZE as usize..size].to_vec(),
        })
    }

    fn encode(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.storage_size() as usize);
        push_u32(&mut buffer, self.storage_size());
        push_u32(&mut buffer, PROPERTY_STORAGE_VERSION);
        push_guid(&mut buffer, &self.format_id);
        buffer.extend_from_slice(&self.values);
        buffer
    }
}

/// Decode property storage records until a zero size
pub fn decode_property_store(data: &[u8]) -> Result<Vec<SerializedPropertyStorage>, LinkError> {
    let mut stores = Vec::new();
    let mut input = data;

    let size_field = 4;
    loop {
        if input.is_empty() {
            warn!("[shortcuts] Property store ended without a terminal");
            break;
        }
        check_minimum("PropertyStore", input.len() as u64, size_field)?;

        let (_, storage_size) =
            nom_unsigned_four_bytes(input).map_err(parse_error("PropertyStore"))?;
        if storage_size == 0 {
            break;
        }

        let store = SerializedPropertyStorage::decode(input)?;
        input = &input[storage_size as usize..];
        stores.push(store);
    }

    Ok(stores)
}

/// Encode records followed by the zero terminal
pub fn encode_property_store(stores: &[SerializedPropertyStorage]) -> Vec<u8> {
    let mut buffer = Vec::new();
    for store in stores {
        buffer.extend_from_slice(&store.encode());
    }
    push_u32(&mut buffer, 0);
    buffer
}
