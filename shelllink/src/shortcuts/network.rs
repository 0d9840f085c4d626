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
use common::windows::NetworkProviderType;
use log::{debug, warn};
use serde::Serialize;

pub const VALID_DEVICE: u32 = 0x1;
pub const VALID_NET_TYPE: u32 = 0x2;

const HEADER_SIZE: u32 = 0x14;
const UNICODE_HEADER_SIZE: u32 = 0x1c;

/// Net and device names. Unicode forms only exist in the Unicode layout (NetNameOffset 0x1C)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum NetworkNames {
    Ansi {
        net_name: AnsiString,
        device_name: Option<AnsiString>,
    },
    Unicode {
        net_name: AnsiString,
        net_name_unicode: String,
        device: Option<UnicodeDevice>,
    },
}

/// Mapped drive of a Unicode layout. Both names are always written
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnicodeDevice {
    pub device_name: AnsiString,
    pub device_name_unicode: String,
}

/// Network location of a link target: the UNC share and an optional mapped drive
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommonNetworkRelativeLink {
    pub names: NetworkNames,
    pub network_provider_type: Option<NetworkProviderType>,
}

/// Size, flags and offsets of the canonical encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkLinkLayout {
    pub size: u32,
    pub flags: u32,
    pub net_name_offset: u32,
    pub device_name_offset: u32,
    pub net_name_offset_unicode: u32,
    pub device_name_offset_unicode: u32,
}

impl CommonNetworkRelativeLink {
    /// ANSI only link without a device
    pub fn new(net_name: &str) -> CommonNetworkRelativeLink {
        CommonNetworkRelativeLink {
            names: NetworkNames::Ansi {
                net_name: AnsiString::from(net_name),
                device_name: None,
            },
            network_provider_type: None,
        }
    }

    /// Set the mapped drive. In the Unicode layout `device_name` is used for both forms
    pub fn with_device(mut self, device_name: &str) -> CommonNetworkRelativeLink {
        match &mut self.names {
            NetworkNames::Ansi {
                device_name: device,
                ..
            } => *device = Some(AnsiString::from(device_name)),
            NetworkNames::Unicode { device, .. } => {
                *device = Some(UnicodeDevice {
                    device_name: AnsiString::from(device_name),
                    device_name_unicode: device_name.to_string(),
                })
            }
        }
        self
    }

    /// Switch to the Unicode layout. A Unicode device name is made from the ANSI one
    pub fn with_unicode(self, net_name_unicode: &str) -> CommonNetworkRelativeLink {
        let names = match self.names {
            NetworkNames::Ansi {
                net_name,
                device_name,
            } => NetworkNames::Unicode {
                net_name,
                net_name_unicode: net_name_unicode.to_string(),
                device: device_name.map(|device_name| UnicodeDevice {
                    device_name_unicode: device_name.to_string_lossy().to_string(),
                    device_name,
                }),
            },
            NetworkNames::Unicode {
                net_name, device, ..
            } => NetworkNames::Unicode {
                net_name,
                net_name_unicode: net_name_unicode.to_string(),
                device,
            },
        };
        CommonNetworkRelativeLink {
            names,
            network_provider_type: self.network_provider_type,
        }
    }

    pub fn net_name(&self) -> &AnsiString {
        match &self.names {
            NetworkNames::Ansi { net_name, .. } | NetworkNames::Unicode { net_name, .. } => {
                net_name
            }
        }
    }

    pub fn device_name(&self) -> Option<&AnsiString> {
        match &self.names {
            NetworkNames::Ansi { device_name, .. } => device_name.as_ref(),
            NetworkNames::Unicode { device, .. } => {
                device.as_ref().map(|device| &device.device_name)
            }
        }
    }

    pub fn net_name_unicode(&self) -> Option<&str> {
        match &self.names {
            NetworkNames::Ansi { .. } => None,
            NetworkNames::Unicode {
                net_name_unicode, ..
            } => Some(net_name_unicode),
        }
    }

    pub fn device_name_unicode(&self) -> Option<&str> {
        match &self.names {
            NetworkNames::Ansi { .. } => None,
            NetworkNames::Unicode { device, .. } => device
                .as_ref()
                .map(|device| device.device_name_unicode.as_str()),
        }
    }

    /// Unicode offsets are present iff the names include Unicode forms
    pub fn is_unicode(&self) -> bool {
        matches!(self.names, NetworkNames::Unicode { .. })
    }

    pub fn flags(&self) -> u32 {
        let mut flags = 0;
        if self.device_name().is_some() {
            flags |= VALID_DEVICE;
        }
        if self.network_provider_type.is_some() {
            flags |= VALID_NET_TYPE;
        }
        flags
    }

    pub fn layout(&self) -> NetworkLinkLayout {
        let header = if self.is_unicode() {
            UNICODE_HEADER_SIZE
        } else {
            HEADER_SIZE
        };

        let net_name_offset = header as usize;
        let mut cursor = net_name_offset + self.net_name().len() + 1;

        let mut device_name_offset = 0;
        if let Some(device) = self.device_name() {
            device_name_offset = cursor;
            cursor += device.len() + 1;
        }

        let mut net_name_offset_unicode = 0;
        if let Some(net_name) = self.net_name_unicode() {
            net_name_offset_unicode = cursor;
            cursor += (utf16_len(net_name) + 1) * 2;
        }
        let mut device_name_offset_unicode = 0;
        if let Some(device) = self.device_name_unicode() {
            device_name_offset_unicode = cursor;
            cursor += (utf16_len(device) + 1) * 2;
        }

        NetworkLinkLayout {
            size: size_u32(cursor),
            flags: self.flags(),
            net_name_offset: size_u32(net_name_offset),
            device_name_offset: size_u32(device_name_offset),
            net_name_offset_unicode: size_u32(net_name_offset_unicode),
            device_name_offset_unicode: size_u32(device_name_offset_unicode),
        }
    }

    pub fn common_network_relative_link_size(&self) -> u32 {
        self.layout().size
    }
}

/// Fixed fields: flags, NetNameOffset, DeviceNameOffset, NetworkProviderType
fn parse_network_header(data: &[u8]) -> nom::IResult<&[u8], (u32, u32, u32, u32)> {
    let (input, _size) = nom_unsigned_four_bytes(data)?;
    let (input, flags) = nom_unsigned_four_bytes(input)?;
    let (input, name_offset) = nom_unsigned_four_bytes(input)?;
    let (input, device_offset) = nom_unsigned_four_bytes(input)?;
    let (input, provider) = nom_unsigned_four_bytes(input)?;

    Ok((input, (flags, name_offset, device_offset, provider)))
}

impl Structure for CommonNetworkRelativeLink {
    const NAME: &'static str = "CommonNetworkRelativeLink";
    const MINIMUM_SIZE: u32 = HEADER_SIZE;

    fn decode(data: &[u8]) -> Result<Self, LinkError> {
        let size = Self::validate(data)? as usize;
        let data = &data[..size];

        let (input, (flags, name_offset, device_offset, provider)) =
            parse_network_header(data).map_err(parse_error(Self::NAME))?;

        let has_unicode = name_offset > HEADER_SIZE;
        let mut unicode_offsets = None;
        let mut header = HEADER_SIZE;
        if has_unicode {
            check_minimum(Self::NAME, size as u64, UNICODE_HEADER_SIZE)?;
            let (input, name_offset_unicode) =
                nom_unsigned_four_bytes(input).map_err(parse_error(Self::NAME))?;
            let (_, device_offset_unicode) =
                nom_unsigned_four_bytes(input).map_err(parse_error(Self::NAME))?;

            unicode_offsets = Some((name_offset_unicode, device_offset_unicode));
            header = UNICODE_HEADER_SIZE;
        }

        let start = check_offset(Self::NAME, "NetNameOffset", name_offset, header, size)?;
        let net_name = read_ansi_string(data, start, Self::NAME, "NetName")?;

        let mut device_name = None;
        if (flags & VALID_DEVICE) != 0 {
            let start = check_offset(Self::NAME, "DeviceNameOffset", device_offset, header, size)?;
            device_name = Some(read_ansi_string(data, start, Self::NAME, "DeviceName")?);
        }

        let mut network_provider_type = None;
        if (flags & VALID_NET_TYPE) != 0 {
            network_provider_type = Some(NetworkProviderType::from_raw(provider));
        }

        let names = match unicode_offsets {
            None => NetworkNames::Ansi {
                net_name,
                device_name,
            },
            Some((name_offset_unicode, device_offset_unicode)) => {
                let start = check_offset(
                    Self::NAME,
                    "NetNameOffsetUnicode",
                    name_offset_unicode,
                    header,
                    size,
                )?;
                let net_name_unicode =
                    read_utf16_string(data, start, Self::NAME, "NetNameUnicode")?;

                let no_device = 0;
                let device = match device_name {
                    Some(device_name) if device_offset_unicode != no_device => {
                        let start = check_offset(
                            Self::NAME,
                            "DeviceNameOffsetUnicode",
                            device_offset_unicode,
                            header,
                            size,
                        )?;
                        Some(UnicodeDevice {
                            device_name,
                            device_name_unicode: read_utf16_string(
                                data,
                                start,
                                Self::NAME,
                                "DeviceNameUnicode",
                            )?,
                        })
                    }
                    Some(device_name) => {
                        warn!("[shortcuts] CommonNetworkRelativeLink has no Unicode device name, using the ANSI name");
                        Some(UnicodeDevice {
                            device_name_unicode: device_name.to_string_lossy().to_string(),
                            device_name,
                        })
                    }
                    None => {
                        if device_offset_unicode != no_device {
                            debug!("[shortcuts] Ignoring Unicode device name without a valid device");
                        }
                        None
                    }
                };

                NetworkNames::Unicode {
                    net_name,
                    net_name_unicode,
                    device,
                }
            }
        };

        Ok(CommonNetworkRelativeLink {
            names,
            network_provider_type,
        })
    }

    fn encode(&self) -> Vec<u8> {
        let layout = self.layout();
        let mut buffer = Vec::with_capacity(layout.size as usize);

        push_u32(&mut buffer, layout.size);
        push_u32(&mut buffer, layout.flags);
        push_u32(&mut buffer, layout.net_name_offset);
        push_u32(&mut buffer, layout.device_name_offset);
        push_u32(
            &mut buffer,
            self.network_provider_type
                .map_or(0, |provider| provider.to_raw()),
        );
        if self.is_unicode() {
            push_u32(&mut buffer, layout.net_name_offset_unicode);
            push_u32(&mut buffer, layout.device_name_offset_unicode);
        }

        push_ansi_string(&mut buffer, self.net_name());
        if let Some(device) = self.device_name() {
            push_ansi_string(&mut buffer, device);
        }
        if let Some(net_name) = self.net_name_unicode() {
            push_utf16_string(&mut buffer, net_name);
        }
        if let Some(device) = self.device_name_unicode() {
            push_utf16_string(&mut buffer, device);
        }
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::{
        CommonNetworkRelativeLink, NetworkNames, UnicodeDevice, VALID_DEVICE, VALID_NET_TYPE,
    };
    use crate::{ansi::AnsiString, error::LinkError, structure::Structure};
    use common::windows::NetworkProviderType;

    #[test]
    fn test_parse_network() {
        let test = [
            43, 0, 0, 0, 3, 0, 0, 0, 20, 0, 0, 0, 40, 0, 0, 0, 0, 0, 37, 0, 92, 92, 86, 66, 111,
            120, 83, 118, 114, 92, 68, 111, 119, 110, 108, 111, 97, 100, 115, 0, 90, 58, 0,
        ];
        let result = CommonNetworkRelativeLink::decode(&test).unwrap();

        assert_eq!(result.net_name(), "\\\\VBoxSvr\\Downloads");
        assert_eq!(result.device_name(), Some(&AnsiString::from("Z:")));
        assert_eq!(
            result.network_provider_type,
            Some(NetworkProviderType::WnncNetRdr2Sample)
        );
        assert_eq!(result.net_name_unicode(), None);
        assert!(!result.is_unicode());
        assert_eq!(result.flags(), VALID_DEVICE | VALID_NET_TYPE);
        assert_eq!(result.encode(), test);
    }

    #[test]
    fn test_share_layout() {
        let network = CommonNetworkRelativeLink::new("\\\\server\\share");
        let layout = network.layout();

        assert_eq!(layout.net_name_offset, 0x14);
        assert_eq!(layout.device_name_offset, 0);
        assert_eq!(layout.size, 0x14 + 14 + 1);
        assert_eq!(layout.flags, 0);

        let data = network.encode();
        assert_eq!(data.len(), layout.size as usize);
        assert_eq!(CommonNetworkRelativeLink::decode(&data).unwrap(), network);
    }

    #[test]
    fn test_unicode_layout() {
        let mut network = CommonNetworkRelativeLink::new("\\\\server\\share")
            .with_device("Z:")
            .with_unicode("\\\\server\\share");
        network.network_provider_type = Some(NetworkProviderType::Unknown(0x990000));

        let layout = network.layout();
        assert_eq!(layout.net_name_offset, 0x1c);
        assert_eq!(layout.device_name_offset, 0x1c + 15);
        assert_eq!(layout.net_name_offset_unicode, 0x1c + 15 + 3);
        assert_eq!(layout.device_name_offset_unicode, 0x1c + 15 + 3 + 30);
        assert_eq!(layout.size, 0x1c + 15 + 3 + 30 + 6);

        let data = network.encode();
        assert_eq!(data.len(), layout.size as usize);
        assert_eq!(CommonNetworkRelativeLink::decode(&data).unwrap(), network);
    }

    #[test]
    fn test_unicode_device_from_ansi() {
        let network = CommonNetworkRelativeLink {
            names: NetworkNames::Unicode {
                net_name: AnsiString::from("\\\\nas\\media"),
                net_name_unicode: String::from("\\\\nas\\media"),
                device: None,
            },
            network_provider_type: None,
        }
        .with_device("M:");
        assert_eq!(network.device_name_unicode(), Some("M:"));

        let layout = network.layout();
        assert_eq!(layout.device_name_offset_unicode, 0x1c + 12 + 3 + 24);
        let data = network.encode();
        assert_eq!(data.len(), layout.size as usize);
        assert_eq!(CommonNetworkRelativeLink::decode(&data).unwrap(), network);

        let network = CommonNetworkRelativeLink::new("\\\\nas\\media")
            .with_device("M:")
            .with_unicode("\\\\nas\\media");
        assert_eq!(network.device_name_unicode(), Some("M:"));
        assert_eq!(
            CommonNetworkRelativeLink::decode(&network.encode()).unwrap(),
            network
        );
    }

    #[test]
    fn test_unicode_names_differ() {
        let network = CommonNetworkRelativeLink {
            names: NetworkNames::Unicode {
                net_name: AnsiString::from("\\\\?"),
                net_name_unicode: String::from("\\\\\u{4e2d}"),
                device: Some(UnicodeDevice {
                    device_name: AnsiString::from("?:"),
                    device_name_unicode: String::from("\u{4e2d}:"),
                }),
            },
            network_provider_type: Some(NetworkProviderType::WnncNetDfs),
        };
        let data = network.encode();
        assert_eq!(CommonNetworkRelativeLink::decode(&data).unwrap(), network);
    }

    #[test]
    fn test_missing_device_unicode_offset() {
        // Unicode layout with a device and DeviceNameOffsetUnicode set to 0
        let test = [
            37, 0, 0, 0, 1, 0, 0, 0, 28, 0, 0, 0, 30, 0, 0, 0, 0, 0, 0, 0, 33, 0, 0, 0, 0, 0, 0,
            0, 65, 0, 77, 58, 0, 65, 0, 0, 0,
        ];
        let result = CommonNetworkRelativeLink::decode(&test).unwrap();
        assert_eq!(result.net_name(), &AnsiString::from("A"));
        assert_eq!(result.device_name(), Some(&AnsiString::from("M:")));
        assert_eq!(result.net_name_unicode(), Some("A"));
        assert_eq!(result.device_name_unicode(), Some("M:"));

        let data = result.encode();
        assert_eq!(data.len(), 37 + 6);
        assert_eq!(&data[..4], [43, 0, 0, 0]);
        assert_eq!(data[4..24], test[4..24]);
        assert_eq!(&data[24..28], [37, 0, 0, 0]);
        assert_eq!(&data[37..], [77, 0, 58, 0, 0, 0]);
        assert_eq!(CommonNetworkRelativeLink::decode(&data).unwrap(), result);
    }

    #[test]
    fn test_device_unicode_offset_without_device() {
        let test = [
            34, 0, 0, 0, 0, 0, 0, 0, 28, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 30, 0, 0, 0, 30, 0, 0,
            0, 65, 0, 65, 0, 0, 0,
        ];
        let result = CommonNetworkRelativeLink::decode(&test).unwrap();
        assert_eq!(result.device_name(), None);
        assert_eq!(result.device_name_unicode(), None);
        assert_eq!(result.net_name_unicode(), Some("A"));

        let data = result.encode();
        assert_eq!(&data[24..28], [0, 0, 0, 0]);
        assert_eq!(CommonNetworkRelativeLink::decode(&data).unwrap(), result);
    }

    #[test]
    fn test_code_page_net_name() {
        let test = [
            26, 0, 0, 0, 0, 0, 0, 0, 20, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 92, 92, 99, 233, 0, 0,
        ];
        let result = CommonNetworkRelativeLink::decode(&test).unwrap();
        assert_eq!(result.net_name().as_bytes(), [92, 92, 99, 233]);
        assert_eq!(result.net_name().as_str(), None);

        let data = result.encode();
        assert_eq!(data.len(), 25);
        assert_eq!(&data[20..], [92, 92, 99, 233, 0]);
    }

    #[test]
    fn test_bad_net_name_offset() {
        let test = [
            24, 0, 0, 0, 0, 0, 0, 0, 40, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 90, 58, 0, 0,
        ];
        assert_eq!(
            CommonNetworkRelativeLink::decode(&test),
            Err(LinkError::SizeViolation {
                structure: "CommonNetworkRelativeLink",
                actual: 24,
                minimum: 28
            })
        );

        let test = [
            24, 0, 0, 0, 1, 0, 0, 0, 20, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 90, 58, 0, 0,
        ];
        let result = CommonNetworkRelativeLink::decode(&test);
        assert!(matches!(
            result,
            Err(LinkError::OffsetViolation {
                field: "DeviceNameOffset",
                ..
            })
        ));

        let test = [
            24, 0, 0, 0, 0, 0, 0, 0, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 90, 58, 0, 0,
        ];
        assert_eq!(
            CommonNetworkRelativeLink::decode(&test),
            Err(LinkError::OffsetViolation {
                structure: "CommonNetworkRelativeLink",
                field: "NetNameOffset",
                offset: 4,
                minimum: 20,
                maximum: 24
            })
        );
    }

    #[test]
    fn test_unterminated_net_name() {
        let test = [
            23, 0, 0, 0, 0, 0, 0, 0, 20, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 90, 58, 65,
        ];
        assert_eq!(
            CommonNetworkRelativeLink::decode(&test),
            Err(LinkError::UnterminatedString {
                structure: "CommonNetworkRelativeLink",
                field: "NetName",
                offset: 20
            })
        );
    }
}
