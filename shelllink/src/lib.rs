//! Decode and encode the binary structures found inside Windows Shell Link (lnk) files:
//! LinkTargetIDList, LinkInfo (with VolumeID and CommonNetworkRelativeLink) and the extra data blocks.
//!
//! Every structure implements [`structure::Structure`]. Decoding checks sizes, offsets and signatures
//! before reading any field and returns a [`error::LinkError`] on bad input.

pub mod ansi;
pub mod error;
pub mod options;
pub mod propertystore;
pub mod shortcuts;
pub mod structure;
mod utils;

pub use ansi::AnsiString;
pub use error::LinkError;
pub use options::{DecodeOptions, UnknownBlockPolicy};
pub use shortcuts::extras::{DataBlock, ExtraData, UnknownDataBlock};
pub use shortcuts::idlist::{DisplayNameResolver, IdList, ItemId, LinkTargetIdList};
pub use shortcuts::location::{LinkInfo, LocalPath};
pub use shortcuts::network::{CommonNetworkRelativeLink, NetworkNames, UnicodeDevice};
pub use shortcuts::volume::{VolumeId, VolumeLabel};
pub use structure::{BlockSignature, ExtraDataBlock, Structure};
