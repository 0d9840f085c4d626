pub(crate) mod encoding;
pub(crate) mod nom_helper;
pub(crate) mod strings;
pub(crate) mod uuid;
pub(crate) mod writer;
