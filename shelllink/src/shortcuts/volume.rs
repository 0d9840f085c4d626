use crate::{
    ansi::AnsiString,
    error::LinkError,
    structure::{check_minimum, check_offset, Structure},
    utils::{
        nom_helper::{nom_unsigned_four_bytes, parse_error},
        strings::{read_ansi_string, read_utf16_string, utf16_len},
        writer::{push_ansi_string, push_u32, push_utf16_string, size_u32},
    },
};
use common::windows::DriveType;
use serde::Serialize;

/// Header size when the label is ANSI
const ANSI_HEADER: u32 = 0x10;
/// `VolumeLabelOffset` value that marks a Unicode label. Also the header size in that case
const UNICODE_HEADER: u32 = 0x14;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum VolumeLabel {
    Ansi(AnsiString),
    Unicode(String),
}

/// The VolumeID structure found in `LinkInfo`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VolumeId {
    pub drive_type: DriveType,
    pub drive_serial_number: u32,
    pub volume_label: VolumeLabel,
}

impl VolumeId {
    pub fn new(drive_type: DriveType, drive_serial_number: u32, volume_label: VolumeLabel) -> Self {
        VolumeId {
            drive_type,
            drive_serial_number,
            volume_label,
        }
    }

    /// Encoded size, the `VolumeIDSize` field
    pub fn volume_id_size(&self) -> u32 {
        let size = match &self.volume_label {
            VolumeLabel::Ansi(label) => ANSI_HEADER as usize + label.len() + 1,
            VolumeLabel::Unicode(label) => UNICODE_HEADER as usize + (utf16_len(label) + 1) * 2,
        };
        size_u32(size)
    }
}

/// Fixed fields of a VolumeID: drive type, serial, label offset
fn parse_volume_header(data: &[u8]) -> nom::IResult<&[u8], (u32, u32, u32)> {
    let (input, _size) = nom_unsigned_four_bytes(data)?;
    let (input, drive_type) = nom_unsigned_four_bytes(input)?;
    let (input, drive_serial) = nom_unsigned_four_bytes(input)?;
    let (input, label_offset) = nom_unsigned_four_bytes(input)?;

    Ok((input, (drive_type, drive_serial, label_offset)))
}

impl Structure for VolumeId {
    const NAME: &'static str = "VolumeID";
    const MINIMUM_SIZE: u32 = ANSI_HEADER;

    fn decode(data: &[u8]) -> Result<Self, LinkError> {
        let size = Self::validate(data)? as usize;
        let data = &data[..size];

        let (input, (drive_type, drive_serial_number, label_offset)) =
            parse_volume_header(data).map_err(parse_error(Self::NAME))?;

        let volume_label = if label_offset == UNICODE_HEADER {
            check_minimum(Self::NAME, size as u64, UNICODE_HEADER)?;
            let (_, unicode_offset) =
                nom_unsigned_four_bytes(input).map_err(parse_error(Self::NAME))?;
            let start = check_offset(
                Self::NAME,
                "VolumeLabelOffsetUnicode",
                unicode_offset,
                UNICODE_HEADER,
                size,
            )?;
            VolumeLabel::Unicode(read_utf16_string(
                data,
                start,
                Self::NAME,
                "VolumeLabelUnicode",
            )?)
        } else {
            let start = check_offset(
                Self::NAME,
                "VolumeLabelOffset",
                label_offset,
                ANSI_HEADER,
                size,
            )?;
            VolumeLabel::Ansi(read_ansi_string(data, start, Self::NAME, "VolumeLabel")?)
        };

        Ok(VolumeId {
            drive_type: DriveType::from_raw(drive_type),
            drive_serial_number,
            volume_label,
        })
    }

    fn encode(&self) -> Vec<u8> {
        let size = self.volume_id_size();
        let mut buffer = Vec::with_capacity(size as usize);
        push_u32(&mut buffer, size);
        push_u32(&mut buffer, self.drive_type.to_raw());
        push_u32(&mut buffer, self.drive_serial_number);

        match &self.volume_label {
            VolumeLabel::Ansi(label) => {
                push_u32(&mut buffer, ANSI_HEADER);
                push_ansi_string(&mut buffer, label);
            }
            VolumeLabel::Unicode(label) => {
                push_u32(&mut buffer, UNICODE_HEADER);
                push_u32(&mut buffer, UNICODE_HEADER);
                push_utf16_string(&mut buffer, label);
            }
        }
        buffer
    }
}
