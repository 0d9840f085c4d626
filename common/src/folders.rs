use uuid::Uuid;

/// Well known `FOLDERID` values and their display names. Only used for readable output
const KNOWN_FOLDERS: [(Uuid, &str); 29] = [
    (Uuid::from_u128(0xb4bfcc3a_db2c_424c_b029_7fe99a87c641), "Desktop"),
    (Uuid::from_u128(0xfdd39ad0_238f_46af_adb4_6c85480369c7), "Documents"),
    (Uuid::from_u128(0x374de290_123f_4565_9164_39c4925e467b), "Downloads"),
    (Uuid::from_u128(0x4bd8d571_6d19_48d3_be97_422220080e43), "Music"),
    (Uuid::from_u128(0x33e28130_4e1e_4676_835a_98395c3bc3bb), "Pictures"),
    (Uuid::from_u128(0x18989b1d_99b5_455b_841c_ab7c74e4ddfc), "Videos"),
    (Uuid::from_u128(0x5e6c858f_0e22_4760_9afe_ea3317b67173), "Profile"),
    (Uuid::from_u128(0x0762d272_c50a_4bb0_a382_697dcd729b80), "UserProfiles"),
    (Uuid::from_u128(0xdfdf76a2_c82a_4d63_906a_5644ac457385), "Public"),
    (Uuid::from_u128(0xc4aa340d_f20f_4863_afef_f87ef2e6ba25), "PublicDesktop"),
    (Uuid::from_u128(0xf38bf404_1d43_42f2_9305_67de0b28fc23), "Windows"),
    (Uuid::from_u128(0x1ac14e77_02e7_4e5d_b744_2eb1ae5198b7), "System"),
    (Uuid::from_u128(0x905e63b6_c1bf_494e_b29c_65b732d3d21a), "ProgramFiles"),
    (Uuid::from_u128(0x7c5a40ef_a0fb_4bfc_874a_c0f2e0b9fa8e), "ProgramFilesX86"),
    (Uuid::from_u128(0x62ab5d82_fdc1_4dc3_a9dd_070d1d495d97), "ProgramData"),
    (Uuid::from_u128(0x3eb685db_65f9_4cf6_a03a_e3ef65729f3d), "RoamingAppData"),
    (Uuid::from_u128(0xf1b32785_6fba_4fcf_9d55_7b8e7f157091), "LocalAppData"),
    (Uuid::from_u128(0x625b53c3_ab48_4ec1_ba1f_a1ef4146fc19), "StartMenu"),
    (Uuid::from_u128(0xa77f5d77_2e2b_44c3_a6a2_aba601054a51), "Programs"),
    (Uuid::from_u128(0xb97d20bb_f46a_4c97_ba10_5e3608430854), "Startup"),
    (Uuid::from_u128(0xae50c081_ebd2_438a_8655_8a092e34987a), "Recent"),
    (Uuid::from_u128(0x1777f761_68ad_4d8a_87bd_30b759fa33dd), "Favorites"),
    (Uuid::from_u128(0xfd228cb7_ae11_4ae3_864c_16f3910ab8fe), "Fonts"),
    (Uuid::from_u128(0x8983036c_27c0_404b_8f08_102d10dcfd74), "SendTo"),
    (Uuid::from_u128(0xa63293e8_664e_48db_a079_df759e0509f7), "Templates"),
    (Uuid::from_u128(0x0ac0837c_bbf8_452a_850d_79d08e667ca7), "ComputerFolder"),
    (Uuid::from_u128(0x82a74aeb_aeb4_465c_a014_d097ee346d63), "ControlPanelFolder"),
    (Uuid::from_u128(0xb7534046_3ecb_4c18_be4e_64cd4cb7d6ac), "RecycleBinFolder"),
    (Uuid::from_u128(0xd20beec4_5ca8_4905_ae3b_bf251ea09b53), "NetworkFolder"),
];

/// Lookup the display name for a known folder GUID
pub fn known_folder_name(folder: &Uuid) -> Option<&'static str> {
    KNOWN_FOLDERS
        .iter()
        .find(|(id, _)| id == folder)
        .map(|(_, name)| *name)
}
