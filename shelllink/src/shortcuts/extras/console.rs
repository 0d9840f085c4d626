use crate::{
    error::LinkError,
    structure::{BlockSignature, ExtraDataBlock, Structure},
    utils::{
        nom_helper::{nom_data, nom_unsigned_four_bytes, nom_unsigned_two_bytes, parse_error},
        strings::{extract_utf16_string, truncate_utf16},
        writer::{push_u16, push_u32, push_utf16_units},
    },
};
use serde::Serialize;

const CONSOLE_SIZE: u32 = 0xcc;
/// Face name region is 32 UTF16 units
const FACE_NAME_SIZE: usize = 64;
const COLOR_TABLE_ENTRIES: usize = 16;

/// Display settings used when the link target runs in a console window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsoleDataBlock {
    pub fill_attributes: u16,
    pub popup_fill_attributes: u16,
    pub screen_buffer_size_x: u16,
    pub screen_buffer_size_y: u16,
    pub window_size_x: u16,
    pub window_size_y: u16,
    pub window_origin_x: u16,
    pub window_origin_y: u16,
    pub unused1: u32,
    pub unused2: u32,
    pub font_size: u32,
    pub font_family: u32,
    pub font_weight: u32,
    pub face_name: String,
    pub cursor_size: u32,
    pub full_screen: u32,
    pub quick_edit: u32,
    pub insert_mode: u32,
    pub auto_position: u32,
    pub history_buffer_size: u32,
    pub number_of_history_buffers: u32,
    pub history_no_dup: u32,
    pub color_table: [u32; COLOR_TABLE_ENTRIES],
}

fn parse_console(data: &[u8]) -> nom::IResult<&[u8], ConsoleDataBlock> {
    let header_size = 8;
    let (input, _header) = nom_data(data, header_size)?;

    let (input, fill_attributes) = nom_unsigned_two_bytes(input)?;
    let (input, popup_fill_attributes) = nom_unsigned_two_bytes(input)?;
    let (input, screen_buffer_size_x) = nom_unsigned_two_bytes(input)?;
    let (input, screen_buffer_size_y) = nom_unsigned_two_bytes(input)?;
    let (input, window_size_x) = nom_unsigned_two_bytes(input)?;
    let (input, window_size_y) = nom_unsigned_two_bytes(input)?;
    let (input, window_origin_x) = nom_unsigned_two_bytes(input)?;
    let (input, window_origin_y) = nom_unsigned_two_bytes(input)?;

    let (input, unused1) = nom_unsigned_four_bytes(input)?;
    let (input, unused2) = nom_unsigned_four_bytes(input)?;

    let (input, font_size) = nom_unsigned_four_bytes(input)?;
    let (input, font_family) = nom_unsigned_four_bytes(input)?;
    let (input, font_weight) = nom_unsigned_four_bytes(input)?;
    let (input, face_data) = nom_data(input, FACE_NAME_SIZE as u64)?;

    let (input, cursor_size) = nom_unsigned_four_bytes(input)?;
    let (input, full_screen) = nom_unsigned_four_bytes(input)?;
    let (input, quick_edit) = nom_unsigned_four_bytes(input)?;
    let (input, insert_mode) = nom_unsigned_four_bytes(input)?;
    let (input, auto_position) = nom_unsigned_four_bytes(input)?;
    let (input, history_buffer_size) = nom_unsigned_four_bytes(input)?;
    let (input, number_of_history_buffers) = nom_unsigned_four_bytes(input)?;
    let (mut input, history_no_dup) = nom_unsigned_four_bytes(input)?;

    let mut color_table = [0; COLOR_TABLE_ENTRIES];
    for entry in color_table.iter_mut() {
        let (remaining, color) = nom_unsigned_four_bytes(input)?;
        *entry = color;
        input = remaining;
    }

    let console = ConsoleDataBlock {
        fill_attributes,
        popup_fill_attributes,
        screen_buffer_size_x,
        screen_buffer_size_y,
        window_size_x,
        window_size_y,
        window_origin_x,
        window_origin_y,
        unused1,
        unused2,
        font_size,
        font_family,
        font_weight,
        face_name: extract_utf16_string(face_data),
        cursor_size,
        full_screen,
        quick_edit,
        insert_mode,
        auto_position,
        history_buffer_size,
        number_of_history_buffers,
        history_no_dup,
        color_table,
    };
    Ok((input, console))
}

impl Structure for ConsoleDataBlock {
    const NAME: &'static str = "ConsoleDataBlock";
    const MINIMUM_SIZE: u32 = CONSOLE_SIZE;

    fn decode(data: &[u8]) -> Result<Self, LinkError> {
        let size = Self::validate_block(data)? as usize;
        let (_, console) = parse_console(&data[..size]).map_err(parse_error(Self::NAME))?;
        Ok(console)
    }

    fn encode(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(CONSOLE_SIZE as usize);
        push_u32(&mut buffer, CONSOLE_SIZE);
        push_u32(&mut buffer, Self::SIGNATURE.to_raw());

        for value in [
            self.fill_attributes,
            self.popup_fill_attributes,
            self.screen_buffer_size_x,
            self.screen_buffer_size_y,
            self.window_size_x,
            self.window_size_y,
            self.window_origin_x,
            self.window_origin_y,
        ] {
            push_u16(&mut buffer, value);
        }
        for value in [
            self.unused1,
            self.unused2,
            self.font_size,
            self.font_family,
            self.font_weight,
        ] {
            push_u32(&mut buffer, value);
        }

        // Keep room for a terminator
        let face_start = buffer.len();
        push_utf16_units(
            &mut buffer,
            &truncate_utf16(&self.face_name, FACE_NAME_SIZE / 2 - 1),
        );
        buffer.resize(face_start + FACE_NAME_SIZE, 0);

        for value in [
            self.cursor_size,
            self.full_screen,
            self.quick_edit,
            self.insert_mode,
            self.auto_position,
            self.history_buffer_size,
            self.number_of_history_buffers,
            self.history_no_dup,
        ] {
            push_u32(&mut buffer, value);
        }
        for color in &self.color_table {
            push_u32(&mut buffer, *color);
        }
        buffer
    }
}

impl ExtraDataBlock for ConsoleDataBlock {
    const SIGNATURE: BlockSignature = BlockSignature::Console;

    fn block_size(&self) -> u32 {
        CONSOLE_SIZE
    }
}
