use crate::{
    ansi::AnsiString,
    error::LinkError,
    structure::{check_declared, check_minimum, BlockSignature, ExtraDataBlock, Structure},
    utils::{
        nom_helper::{nom_data, nom_unsigned_four_bytes, parse_error},
        uuid::nom_guid,
        writer::{push_guid, push_u32, size_u32},
    },
};
use serde::Serialize;
use uuid::Uuid;

/// Smallest `Length` value, a 16 byte MachineID
const MINIMUM_LENGTH: u32 = 0x58;
/// Bytes of `Length` that are not MachineID: Length, Version and four GUIDs
const LENGTH_OVERHEAD: u32 = 0x48;

/// Distributed Link Tracking data used to find a moved link target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackerDataBlock {
    pub version: u32,
    /// NetBIOS name of the machine where the target was last seen
    pub machine_id: AnsiString,
    pub droid_volume_id: Uuid,
    pub droid_file_id: Uuid,
    pub birth_droid_volume_id: Uuid,
    pub birth_droid_file_id: Uuid,
}

impl TrackerDataBlock {
    /// Value of the `Length` field. Follows the MachineID length
    pub fn length(&self) -> u32 {
        let machine_size = self.machine_id.len();
        if machine_size < 16 {
            return MINIMUM_LENGTH;
        }
        size_u32(machine_size).saturating_add(LENGTH_OVERHEAD)
    }
}

struct TrackerHeader {
    length: u32,
    version: u32,
}

fn parse_tracker_header(data: &[u8]) -> nom::IResult<&[u8], TrackerHeader> {
    let header_size = 8;
    let (input, _header) = nom_data(data, header_size)?;
    let (input, length) = nom_unsigned_four_bytes(input)?;
    let (input, version) = nom_unsigned_four_bytes(input)?;
    Ok((input, TrackerHeader { length, version }))
}

fn parse_droids(data: &[u8], machine_size: u64) -> nom::IResult<&[u8], (&[u8], [Uuid; 4])> {
    let (input, machine_data) = nom_data(data, machine_size)?;
    let (input, droid_volume) = nom_guid(input)?;
    let (input, droid_file) = nom_guid(input)?;
    let (input, birth_volume) = nom_guid(input)?;
    let (input, birth_file) = nom_guid(input)?;

    Ok((
        input,
        (
            machine_data,
            [droid_volume, droid_file, birth_volume, birth_file],
        ),
    ))
}

impl Structure for TrackerDataBlock {
    const NAME: &'static str = "TrackerDataBlock";
    const MINIMUM_SIZE: u32 = 0x60;

    fn decode(data: &[u8]) -> Result<Self, LinkError> {
        let size = Self::validate_block(data)? as usize;
        let data = &data[..size];

        let (input, header) = parse_tracker_header(data).map_err(parse_error(Self::NAME))?;
        check_minimum(Self::NAME, header.length as u64, MINIMUM_LENGTH)?;
        let header_size = 8;
        check_declared(Self::NAME, header.length as u64 + header_size, size as u64)?;

        let machine_size = (header.length - LENGTH_OVERHEAD) as u64;
        let (_, (machine_data, droids)) =
            parse_droids(input, machine_size).map_err(parse_error(Self::NAME))?;
        let [droid_volume_id, droid_file_id, birth_droid_volume_id, birth_droid_file_id] = droids;

        Ok(TrackerDataBlock {
            version: header.version,
            machine_id: AnsiString::new(machine_data.to_vec()),
            droid_volume_id,
            droid_file_id,
            birth_droid_volume_id,
            birth_droid_file_id,
        })
    }

    fn encode(&self) -> Vec<u8> {
        let length = self.length();
        let block_size = self.block_size();
        let mut buffer = Vec::with_capacity(block_size as usize);

        push_u32(&mut buffer, block_size);
        push_u32(&mut buffer, Self::SIGNATURE.to_raw());
        push_u32(&mut buffer, length);
        push_u32(&mut buffer, self.version);

        buffer.extend_from_slice(self.machine_id.as_bytes());
        let machine_end = 16 + (length - LENGTH_OVERHEAD) as usize;
        buffer.resize(machine_end, 0);

        push_guid(&mut buffer, &self.droid_volume_id);
        push_guid(&mut buffer, &self.droid_file_id);
        push_guid(&mut buffer, &self.birth_droid_volume_id);
        push_guid(&mut buffer, &self.birth_droid_file_id);
        buffer
    }
}

impl ExtraDataBlock for TrackerDataBlock {
    const SIGNATURE: BlockSignature = BlockSignature::Tracker;

    fn block_size(&self) -> u32 {
        self.length().saturating_add(8)
    }
}
