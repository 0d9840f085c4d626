use shelllink::{
    shortcuts::extras::tracker::TrackerDataBlock, AnsiString, DataBlock, DecodeOptions, ExtraData,
    LinkError, UnknownBlockPolicy,
};
use std::{fs::read, path::PathBuf};
use uuid::Uuid;

fn read_fixture() -> Vec<u8> {
    let mut test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    test_location.push("tests/test_data/lnk/win10_extradata.raw");
    read(test_location).unwrap()
}

#[test]
fn test_win10_extra_data() {
    let data = read_fixture();
    let result = ExtraData::decode(&data).unwrap();
    assert_eq!(result.blocks.len(), 2);

    let droid_volume = Uuid::parse_str("3e8d4568-e411-4918-8f78-97cd6cb340c5").unwrap();
    let droid_file = Uuid::parse_str("09f158c0-5a6a-11ed-a10d-0800276eb45e").unwrap();
    assert_eq!(
        result.blocks[0],
        DataBlock::Tracker(TrackerDataBlock {
            version: 0,
            machine_id: AnsiString::from("desktop-eis938n"),
            droid_volume_id: droid_volume,
            droid_file_id: droid_file,
            birth_droid_volume_id: droid_volume,
            birth_droid_file_id: droid_file,
        })
    );
    assert_eq!(result.blocks[0].block_size(), 0x60);

    match &result.blocks[1] {
        DataBlock::PropertyStore(block) => {
            assert_eq!(block.property_store.len(), 1);
            assert_eq!(
                block.property_store[0].format_id,
                Uuid::parse_str("446d16b1-8dad-4870-a748-402ea43d788c").unwrap()
            );
            assert_eq!(block.property_store[0].storage_size(), 57);
        }
        _ => panic!("expected a property store block"),
    }
    assert_eq!(result.blocks[1].signature(), 0xa0000009);

    assert_eq!(result.size(), data.len());
    assert_eq!(result.encode(), data);
}

#[test]
fn test_win10_extra_data_json() {
    let data = read_fixture();
    let result = ExtraData::decode(&data).unwrap();

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(
        value["blocks"][0]["Tracker"]["machine_id"],
        "desktop-eis938n"
    );
    assert_eq!(
        value["blocks"][0]["Tracker"]["droid_file_id"],
        "09f158c0-5a6a-11ed-a10d-0800276eb45e"
    );
    assert_eq!(
        value["blocks"][1]["PropertyStore"]["property_store"][0]["values"],
        "HQAAAGgAAAAASAAAAJAvVAgAAAAAAABQHwAAAAAAAAAA"
    );
}

#[test]
fn test_win10_extra_data_options() {
    let data = read_fixture();
    let options = DecodeOptions::from_toml("unknown_blocks = \"reject\"").unwrap();
    assert_eq!(options.unknown_blocks, UnknownBlockPolicy::Reject);
    assert!(options.require_terminal);

    let result = ExtraData::decode_with_options(&data, &options).unwrap();
    assert_eq!(result.blocks.len(), 2);

    // Drop the terminal block
    let truncated = &data[..data.len() - 4];
    assert_eq!(
        ExtraData::decode_with_options(truncated, &options),
        Err(LinkError::SizeViolation {
            structure: "TerminalBlock",
            actual: 0,
            minimum: 4
        })
    );

    let options = DecodeOptions::from_toml("require_terminal = false").unwrap();
    let result = ExtraData::decode_with_options(truncated, &options).unwrap();
    assert_eq!(result.blocks.len(), 2);
}

#[test]
fn test_win10_extra_data_corrupt_signature() {
    let mut data = read_fixture();
    // Tracker signature becomes ConsoleFE, whose size floor is smaller than the block
    data[4] = 4;
    let result = ExtraData::decode(&data).unwrap();
    assert_eq!(result.blocks[0].signature(), 0xa0000004);

    data[4] = 0x13;
    let result = ExtraData::decode(&data).unwrap();
    assert!(matches!(result.blocks[0], DataBlock::Unknown(_)));
    assert_eq!(result.encode(), data);
}
