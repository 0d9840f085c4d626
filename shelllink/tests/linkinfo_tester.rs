use common::windows::DriveType;
use shelllink::{
    shortcuts::location::VOLUME_ID_AND_LOCAL_BASE_PATH, structure::Structure, AnsiString, LinkError,
    LinkInfo, VolumeLabel,
};
use std::{fs::read, path::PathBuf};

fn read_fixture() -> Vec<u8> {
    let mut test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    test_location.push("tests/test_data/lnk/win10_linkinfo.raw");
    read(test_location).unwrap()
}

#[test]
fn test_win10_link_info() {
    let data = read_fixture();
    let result = LinkInfo::decode(&data).unwrap();

    let local = result.local.as_ref().unwrap();
    assert_eq!(
        local.local_base_path,
        "C:\\Users\\bob\\Projects\\Rust\\artemis-core"
    );
    assert_eq!(local.local_base_path_unicode, None);
    assert_eq!(local.volume_id.drive_type, DriveType::DriveFixed);
    assert_eq!(local.volume_id.drive_serial_number, 0xd49d126f);
    assert_eq!(local.volume_id.volume_label, VolumeLabel::Ansi(AnsiString::default()));

    assert!(result.common_network_relative_link.is_none());
    assert_eq!(result.common_path_suffix, "");
    assert_eq!(result.flags(), VOLUME_ID_AND_LOCAL_BASE_PATH);

    let layout = result.layout();
    assert_eq!(layout.size, 86);
    assert_eq!(layout.header_size, 0x1c);
    assert_eq!(layout.volume_id_offset, 0x1c);
    assert_eq!(layout.local_base_path_offset, 0x2d);
    assert_eq!(layout.common_network_relative_link_offset, 0);
    assert_eq!(layout.common_path_suffix_offset, 0x55);

    assert_eq!(result.encode(), data);
}

#[test]
fn test_win10_link_info_json() {
    let data = read_fixture();
    let result = LinkInfo::decode(&data).unwrap();

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(
        value["local"]["volume_id"]["drive_serial_number"],
        0xd49d126f_u32
    );
    assert!(value["common_network_relative_link"].is_null());
}

#[test]
fn test_win10_link_info_truncated() {
    let data = read_fixture();
    assert_eq!(
        LinkInfo::decode(&data[..60]),
        Err(LinkError::SizeMismatch {
            structure: "LinkInfo",
            declared: 86,
            actual: 60
        })
    );
}
