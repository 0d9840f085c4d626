use serde::Serialize;

/// Network provider that owns a `CommonNetworkRelativeLink` share
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NetworkProviderType {
    WnncNetAvid,
    WnncNetDocuspace,
    WnncNetMangsoft,
    WnncNetSernet,
    WnncNetRiverFront1,
    WnncNetRiverFront2,
    WnncNetDecorb,
    WnncNetProtstor,
    WnncNetFjRedir,
    WnncNetDistinct,
    WnncNetTwins,
    WnncNetRdr2Sample,
    WnncNetCsc,
    WnncNet3In1,
    WnncNetExtendNet,
    WnncNetStac,
    WnncNetFoxbat,
    WnncNetYahoo,
    WnncNetExifs,
    WnncNetDav,
    WnncNetKnoware,
    WnncNetObjectDire,
    WnncNetMasfax,
    WnncNetHobNfs,
    WnncNetShiva,
    WnncNetIbmal,
    WnncNetLock,
    WnncNetTermsrv,
    WnncNetSrt,
    WnncNetQuincy,
    WnncNetOpenafs,
    WnncNetAvid1,
    WnncNetDfs,
    WnncNetKwnp,
    WnncNetZenworks,
    WnncNetDriveOnWeb,
    WnncNetVmware,
    WnncNetRsfx,
    WnncNetMfiles,
    WnncNetMsNfs,
    WnncNetGoogle,
    /**Provider value not in the WNNC table. The raw value is kept so it can be written back */
    Unknown(u32),
}

const NETWORK_PROVIDERS: [(u32, NetworkProviderType); 41] = [
    (0x1a0000, NetworkProviderType::WnncNetAvid),
    (0x1b0000, NetworkProviderType::WnncNetDocuspace),
    (0x1c0000, NetworkProviderType::WnncNetMangsoft),
    (0x1d0000, NetworkProviderType::WnncNetSernet),
    (0x1e0000, NetworkProviderType::WnncNetRiverFront1),
    (0x1f0000, NetworkProviderType::WnncNetRiverFront2),
    (0x200000, NetworkProviderType::WnncNetDecorb),
    (0x210000, NetworkProviderType::WnncNetProtstor),
    (0x220000, NetworkProviderType::WnncNetFjRedir),
    (0x230000, NetworkProviderType::WnncNetDistinct),
    (0x240000, NetworkProviderType::WnncNetTwins),
    (0x250000, NetworkProviderType::WnncNetRdr2Sample),
    (0x260000, NetworkProviderType::WnncNetCsc),
    (0x270000, NetworkProviderType::WnncNet3In1),
    (0x290000, NetworkProviderType::WnncNetExtendNet),
    (0x2a0000, NetworkProviderType::WnncNetStac),
    (0x2b0000, NetworkProviderType::WnncNetFoxbat),
    (0x2c0000, NetworkProviderType::WnncNetYahoo),
    (0x2d0000, NetworkProviderType::WnncNetExifs),
    (0x2e0000, NetworkProviderType::WnncNetDav),
    (0x2f0000, NetworkProviderType::WnncNetKnoware),
    (0x300000, NetworkProviderType::WnncNetObjectDire),
    (0x310000, NetworkProviderType::WnncNetMasfax),
    (0x320000, NetworkProviderType::WnncNetHobNfs),
    (0x330000, NetworkProviderType::WnncNetShiva),
    (0x340000, NetworkProviderType::WnncNetIbmal),
    (0x350000, NetworkProviderType::WnncNetLock),
    (0x360000, NetworkProviderType::WnncNetTermsrv),
    (0x370000, NetworkProviderType::WnncNetSrt),
    (0x380000, NetworkProviderType::WnncNetQuincy),
    (0x390000, NetworkProviderType::WnncNetOpenafs),
    (0x3a0000, NetworkProviderType::WnncNetAvid1),
    (0x3b0000, NetworkProviderType::WnncNetDfs),
    (0x3c0000, NetworkProviderType::WnncNetKwnp),
    (0x3d0000, NetworkProviderType::WnncNetZenworks),
    (0x3e0000, NetworkProviderType::WnncNetDriveOnWeb),
    (0x3f0000, NetworkProviderType::WnncNetVmware),
    (0x400000, NetworkProviderType::WnncNetRsfx),
    (0x410000, NetworkProviderType::WnncNetMfiles),
    (0x420000, NetworkProviderType::WnncNetMsNfs),
    (0x430000, NetworkProviderType::WnncNetGoogle),
];

impl NetworkProviderType {
    /// Get provider type from the raw `NetworkProviderType` value
    pub fn from_raw(provider: u32) -> NetworkProviderType {
        NETWORK_PROVIDERS
            .iter()
            .find(|(value, _)| *value == provider)
            .map_or(NetworkProviderType::Unknown(provider), |(_, kind)| *kind)
    }

    /// Raw value written to `shortcut` data
    pub fn to_raw(&self) -> u32 {
        if let NetworkProviderType::Unknown(value) = self {
            return *value;
        }
        NETWORK_PROVIDERS
            .iter()
            .find(|(_, kind)| kind == self)
            .map_or(0, |(value, _)| *value)
    }
}

/// Drive type recorded in a `VolumeID` structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DriveType {
    DriveUnknown,
    DriveNotRootDir,
    DriveRemovable,
    DriveFixed,
    DriveRemote,
    DriveCdrom,
    DriveRamdisk,
    Other(u32),
}

impl DriveType {
    /// Get drive type from `shortcut` data
    pub fn from_raw(drive_type: u32) -> DriveType {
        match drive_type {
            0 => DriveType::DriveUnknown,
            1 => DriveType::DriveNotRootDir,
            2 => DriveType::DriveRemovable,
            3 => DriveType::DriveFixed,
            4 => DriveType::DriveRemote,
            5 => DriveType::DriveCdrom,
            6 => DriveType::DriveRamdisk,
            _ => DriveType::Other(drive_type),
        }
    }

    pub fn to_raw(&self) -> u32 {
        match self {
            DriveType::DriveUnknown => 0,
            DriveType::DriveNotRootDir => 1,
            DriveType::DriveRemovable => 2,
            DriveType::DriveFixed => 3,
            DriveType::DriveRemote => 4,
            DriveType::DriveCdrom => 5,
            DriveType::DriveRamdisk => 6,
            DriveType::Other(value) => *value,
        }
    }
}

/// Legacy CSIDL special folder identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpecialFolder {
    Desktop,
    Internet,
    Programs,
    Controls,
    Printers,
    Personal,
    Favorites,
    Startup,
    Recent,
    SendTo,
    BitBucket,
    StartMenu,
    MyMusic,
    MyVideo,
    DesktopDirectory,
    Drives,
    Network,
    Nethood,
    Fonts,
    Templates,
    CommonStartMenu,
    CommonPrograms,
    CommonStartup,
    CommonDesktopDirectory,
    AppData,
    PrintHood,
    LocalAppData,
    AltStartup,
    CommonAltStartup,
    CommonFavorites,
    InternetCache,
    Cookies,
    History,
    CommonAppData,
    Windows,
    System,
    ProgramFiles,
    MyPictures,
    Profile,
    SystemX86,
    ProgramFilesX86,
    ProgramFilesCommon,
    ProgramFilesCommonX86,
    CommonTemplates,
    CommonDocuments,
    CommonAdminTools,
    AdminTools,
    Connections,
    CommonMusic,
    CommonPictures,
    CommonVideo,
    Resources,
    ResourcesLocalized,
    CommonOemLinks,
    CdBurnArea,
    ComputersNearMe,
    Unknown(u32),
}

const SPECIAL_FOLDERS: [(u32, SpecialFolder); 56] = [
    (0x00, SpecialFolder::Desktop),
    (0x01, SpecialFolder::Internet),
    (0x02, SpecialFolder::Programs),
    (0x03, SpecialFolder::Controls),
    (0x04, SpecialFolder::Printers),
    (0x05, SpecialFolder::Personal),
    (0x06, SpecialFolder::Favorites),
    (0x07, SpecialFolder::Startup),
    (0x08, SpecialFolder::Recent),
    (0x09, SpecialFolder::SendTo),
    (0x0a, SpecialFolder::BitBucket),
    (0x0b, SpecialFolder::StartMenu),
    (0x0d, SpecialFolder::MyMusic),
    (0x0e, SpecialFolder::MyVideo),
    (0x10, SpecialFolder::DesktopDirectory),
    (0x11, SpecialFolder::Drives),
    (0x12, SpecialFolder::Network),
    (0x13, SpecialFolder::Nethood),
    (0x14, SpecialFolder::Fonts),
    (0x15, SpecialFolder::Templates),
    (0x16, SpecialFolder::CommonStartMenu),
    (0x17, SpecialFolder::CommonPrograms),
    (0x18, SpecialFolder::CommonStartup),
    (0x19, SpecialFolder::CommonDesktopDirectory),
    (0x1a, SpecialFolder::AppData),
    (0x1b, SpecialFolder::PrintHood),
    (0x1c, SpecialFolder::LocalAppData),
    (0x1d, SpecialFolder::AltStartup),
    (0x1e, SpecialFolder::CommonAltStartup),
    (0x1f, SpecialFolder::CommonFavorites),
    (0x20, SpecialFolder::InternetCache),
    (0x21, SpecialFolder::Cookies),
    (0x22, SpecialFolder::History),
    (0x23, SpecialFolder::CommonAppData),
    (0x24, SpecialFolder::Windows),
    (0x25, SpecialFolder::System),
    (0x26, SpecialFolder::ProgramFiles),
    (0x27, SpecialFolder::MyPictures),
    (0x28, SpecialFolder::Profile),
    (0x29, SpecialFolder::SystemX86),
    (0x2a, SpecialFolder::ProgramFilesX86),
    (0x2b, SpecialFolder::ProgramFilesCommon),
    (0x2c, SpecialFolder::ProgramFilesCommonX86),
    (0x2d, SpecialFolder::CommonTemplates),
    (0x2e, SpecialFolder::CommonDocuments),
    (0x2f, SpecialFolder::CommonAdminTools),
    (0x30, SpecialFolder::AdminTools),
    (0x31, SpecialFolder::Connections),
    (0x35, SpecialFolder::CommonMusic),
    (0x36, SpecialFolder::CommonPictures),
    (0x37, SpecialFolder::CommonVideo),
    (0x38, SpecialFolder::Resources),
    (0x39, SpecialFolder::ResourcesLocalized),
    (0x3a, SpecialFolder::CommonOemLinks),
    (0x3b, SpecialFolder::CdBurnArea),
    (0x3d, SpecialFolder::ComputersNearMe),
];

impl SpecialFolder {
    /// Get the special folder from a raw CSIDL value
    pub fn from_raw(csidl: u32) -> SpecialFolder {
        SPECIAL_FOLDERS
            .iter()
            .find(|(value, _)| *value == csidl)
            .map_or(SpecialFolder::Unknown(csidl), |(_, folder)| *folder)
    }

    pub fn to_raw(&self) -> u32 {
        if let SpecialFolder::Unknown(value) = self {
            return *value;
        }
        SPECIAL_FOLDERS
            .iter()
            .find(|(_, folder)| folder == self)
            .map_or(0, |(value, _)| *value)
    }
}

#[cfg(test)]
mod tests {
    use super::{DriveType, NetworkProviderType, SpecialFolder};

    #[test]
    fn test_get_provider_type() {
        let test = 0x3f0000;
        let result = NetworkProviderType::from_raw(test);
        assert_eq!(result, NetworkProviderType::WnncNetVmware);
        assert_eq!(result.to_raw(), test);
    }

    #[test]
    fn test_unknown_provider_type() {
        let result = NetworkProviderType::from_raw(0x20000);
        assert_eq!(result, NetworkProviderType::Unknown(0x20000));
        assert_eq!(result.to_raw(), 0x20000);
    }

    #[test]
    fn test_get_drive_type() {
        assert_eq!(DriveType::from_raw(1), DriveType::DriveNotRootDir);
        assert_eq!(DriveType::from_raw(3).to_raw(), 3);
        assert_eq!(DriveType::from_raw(99), DriveType::Other(99));
    }

    #[test]
    fn test_special_folder() {
        let result = SpecialFolder::from_raw(38);
        assert_eq!(result, SpecialFolder::ProgramFiles);
        assert_eq!(result.to_raw(), 38);
        assert_eq!(SpecialFolder::from_raw(0x0c), SpecialFolder::Unknown(0x0c));
    }

    #[test]
    fn test_serialize_provider() {
        let value = serde_json::to_string(&NetworkProviderType::WnncNetDav).unwrap();
        assert_eq!(value, "\"WnncNetDav\"");
    }
}
