use super::{network::CommonNetworkRelativeLink, volume::VolumeId};
use crate::{
    ansi::AnsiString,
    error::LinkError,
    structure::{check_declared, check_minimum, check_offset, Structure},
    utils::{
        nom_helper::{nom_unsigned_four_bytes, parse_error},
        strings::{read_ansi_string, read_utf16_string, utf16_len},
        writer::{push_ansi_string, push_u32, push_utf16_string, size_u32},
    },
};
use serde::Serialize;

pub const VOLUME_ID_AND_LOCAL_BASE_PATH: u32 = 0x1;
pub const COMMON_NETWORK_RELATIVE_LINK_AND_PATH_SUFFIX: u32 = 0x2;

const HEADER_SIZE: u32 = 0x1c;
const UNICODE_HEADER_SIZE: u32 = 0x24;

/// Volume and local path of a link target. Both are present or neither is
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalPath {
    pub volume_id: VolumeId,
    pub local_base_path: AnsiString,
    pub local_base_path_unicode: Option<String>,
}

/// The LinkInfo structure: information needed to resolve a link target
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LinkInfo {
    pub local: Option<LocalPath>,
    pub common_network_relative_link: Option<CommonNetworkRelativeLink>,
    pub common_path_suffix: AnsiString,
    pub common_path_suffix_unicode: Option<String>,
}

/// Size, flags and offsets of the canonical encoding. Absent fields have offset 0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkInfoLayout {
    pub size: u32,
    pub header_size: u32,
    pub flags: u32,
    pub volume_id_offset: u32,
    pub local_base_path_offset: u32,
    pub common_network_relative_link_offset: u32,
    pub common_path_suffix_offset: u32,
    pub local_base_path_offset_unicode: u32,
    pub common_path_suffix_offset_unicode: u32,
}

impl LinkInfo {
    pub fn flags(&self) -> u32 {
        let mut flags = 0;
        if self.local.is_some() {
            flags |= VOLUME_ID_AND_LOCAL_BASE_PATH;
        }
        if self.common_network_relative_link.is_some() {
            flags |= COMMON_NETWORK_RELATIVE_LINK_AND_PATH_SUFFIX;
        }
        flags
    }

    fn local_base_path_unicode(&self) -> Option<&str> {
        self.local
            .as_ref()
            .and_then(|local| local.local_base_path_unicode.as_deref())
    }

    pub fn layout(&self) -> LinkInfoLayout {
        let header_size =
            if self.local_base_path_unicode().is_some() || self.common_path_suffix_unicode.is_some() {
                UNICODE_HEADER_SIZE
            } else {
                HEADER_SIZE
            };

        let mut layout = LinkInfoLayout {
            size: 0,
            header_size,
            flags: self.flags(),
            volume_id_offset: 0,
            local_base_path_offset: 0,
            common_network_relative_link_offset: 0,
            common_path_suffix_offset: 0,
            local_base_path_offset_unicode: 0,
            common_path_suffix_offset_unicode: 0,
        };

        let mut cursor = header_size as usize;
        if let Some(local) = &self.local {
            layout.volume_id_offset = size_u32(cursor);
            cursor += local.volume_id.volume_id_size() as usize;
            layout.local_base_path_offset = size_u32(cursor);
            cursor += local.local_base_path.len() + 1;
        }
        if let Some(network) = &self.common_network_relative_link {
            layout.common_network_relative_link_offset = size_u32(cursor);
            cursor += network.common_network_relative_link_size() as usize;
        }

        layout.common_path_suffix_offset = size_u32(cursor);
        cursor += self.common_path_suffix.len() + 1;

        if let Some(path) = self.local_base_path_unicode() {
            layout.local_base_path_offset_unicode = size_u32(cursor);
            cursor += (utf16_len(path) + 1) * 2;
        }
        if let Some(path) = &self.common_path_suffix_unicode {
            layout.common_path_suffix_offset_unicode = size_u32(cursor);
            cursor += (utf16_len(path) + 1) * 2;
        }

        layout.size = size_u32(cursor);
        layout
    }

    pub fn link_info_size(&self) -> u32 {
        self.layout().size
    }
}

/// Offsets of the LinkInfo header
struct LinkInfoHeader {
    header_size: u32,
    flags: u32,
    volume_id_offset: u32,
    local_base_path_offset: u32,
    common_network_relative_link_offset: u32,
    common_path_suffix_offset: u32,
}

fn parse_link_info_header(data: &[u8]) -> nom::IResult<&[u8], LinkInfoHeader> {
    let (input, _size) = nom_unsigned_four_bytes(data)?;
    let (input, header_size) = nom_unsigned_four_bytes(input)?;
    let (input, flags) = nom_unsigned_four_bytes(input)?;
    let (input, volume_id_offset) = nom_unsigned_four_bytes(input)?;
    let (input, local_base_path_offset) = nom_unsigned_four_bytes(input)?;
    let (input, common_network_relative_link_offset) = nom_unsigned_four_bytes(input)?;
    let (input, common_path_suffix_offset) = nom_unsigned_four_bytes(input)?;

    let header = LinkInfoHeader {
        header_size,
        flags,
        volume_id_offset,
        local_base_path_offset,
        common_network_relative_link_offset,
        common_path_suffix_offset,
    };
    Ok((input, header))
}

impl Structure for LinkInfo {
    const NAME: &'static str = "LinkInfo";
    const MINIMUM_SIZE: u32 = HEADER_SIZE;

    fn decode(data: &[u8]) -> Result<Self, LinkError> {
        let size = Self::validate(data)? as usize;
        let data = &data[..size];

        let (input, header) = parse_link_info_header(data).map_err(parse_error(Self::NAME))?;
        check_minimum(Self::NAME, header.header_size as u64, HEADER_SIZE)?;
        check_declared(Self::NAME, header.header_size as u64, size as u64)?;
        let header_size = header.header_size;

        let mut unicode_offsets = (0, 0);
        if header_size >= UNICODE_HEADER_SIZE {
            let (input, local_base_path_offset_unicode) =
                nom_unsigned_four_bytes(input).map_err(parse_error(Self::NAME))?;
            let (_, common_path_suffix_offset_unicode) =
                nom_unsigned_four_bytes(input).map_err(parse_error(Self::NAME))?;
            unicode_offsets = (
                local_base_path_offset_unicode,
                common_path_suffix_offset_unicode,
            );
        }
        let no_offset = 0;

        let mut local = None;
        if (header.flags & VOLUME_ID_AND_LOCAL_BASE_PATH) != 0 {
            let start = check_offset(
                Self::NAME,
                "VolumeIDOffset",
                header.volume_id_offset,
                header_size,
                size,
            )?;
            let volume_id = VolumeId::decode(&data[start..])?;

            let start = check_offset(
                Self::NAME,
                "LocalBasePathOffset",
                header.local_base_path_offset,
                header_size,
                size,
            )?;
            let local_base_path = read_ansi_string(data, start, Self::NAME, "LocalBasePath")?;

            let mut local_base_path_unicode = None;
            if unicode_offsets.0 != no_offset {
                let start = check_offset(
                    Self::NAME,
                    "LocalBasePathOffsetUnicode",
                    unicode_offsets.0,
                    header_size,
                    size,
                )?;
                local_base_path_unicode = Some(read_utf16_string(
                    data,
                    start,
                    Self::NAME,
                    "LocalBasePathUnicode",
                )?);
            }

            local = Some(LocalPath {
                volume_id,
                local_base_path,
                local_base_path_unicode,
            });
        }

        let mut common_network_relative_link = None;
        if (header.flags & COMMON_NETWORK_RELATIVE_LINK_AND_PATH_SUFFIX) != 0 {
            let start = check_offset(
                Self::NAME,
                "CommonNetworkRelativeLinkOffset",
                header.common_network_relative_link_offset,
                header_size,
                size,
            )?;
            common_network_relative_link = Some(CommonNetworkRelativeLink::decode(&data[start..])?);
        }

        let mut common_path_suffix = AnsiString::default();
        if header.common_path_suffix_offset != no_offset {
            let start = check_offset(
                Self::NAME,
                "CommonPathSuffixOffset",
                header.common_path_suffix_offset,
                header_size,
                size,
            )?;
            common_path_suffix = read_ansi_string(data, start, Self::NAME, "CommonPathSuffix")?;
        }

        let mut common_path_suffix_unicode = None;
        if unicode_offsets.1 != no_offset {
            let start = check_offset(
                Self::NAME,
                "CommonPathSuffixOffsetUnicode",
                unicode_offsets.1,
                header_size,
                size,
            )?;
            common_path_suffix_unicode = Some(read_utf16_string(
                data,
                start,
                Self::NAME,
                "CommonPathSuffixUnicode",
            )?);
        }

        Ok(LinkInfo {
            local,
            common_network_relative_link,
            common_path_suffix,
            common_path_suffix_unicode,
        })
    }

    fn encode(&self) -> Vec<u8> {
        let layout = self.layout();
        let mut buffer = Vec::with_capacity(layout.size as usize);

        push_u32(&mut buffer, layout.size);
        push_u32(&mut buffer, layout.header_size);
        push_u32(&mut buffer, layout.flags);
        push_u32(&mut buffer, layout.volume_id_offset);
        push_u32(&mut buffer, layout.local_base_path_offset);
        push_u32(&mut buffer, layout.common_network_relative_link_offset);
        push_u32(&mut buffer, layout.common_path_suffix_offset);
        if layout.header_size >= UNICODE_HEADER_SIZE {
            push_u32(&mut buffer, layout.local_base_path_offset_unicode);
            push_u32(&mut buffer, layout.common_path_suffix_offset_unicode);
        }

        if let Some(local) = &self.local {
            buffer.extend_from_slice(&local.volume_id.encode());
            push_ansi_string(&mut buffer, &local.local_base_path);
        }
        if let Some(network) = &self.common_network_relative_link {
            buffer.extend_from_slice(&network.encode());
        }
        push_ansi_string(&mut buffer, &self.common_path_suffix);

        if let Some(path) = self.local_base_path_unicode() {
            push_utf16_string(&mut buffer, path);
        }
        if let Some(path) = &self.common_path_suffix_unicode {
            push_utf16_string(&mut buffer, path);
        }
        buffer
    }
}
