use nom::bytes::complete::take;
use uuid::Uuid;

/// Nom a little endian GUID
pub(crate) fn nom_guid(data: &[u8]) -> nom::IResult<&[u8], Uuid> {
    let guid_size: usize = 16;
    let (input, guid_data) = take(guid_size)(data)?;

    let mut guid = [0; 16];
    guid.copy_from_slice(guid_data);
    Ok((input, Uuid::from_bytes_le(guid)))
}
