pub mod extras;
pub mod idlist;
pub mod location;
pub mod network;
pub mod volume;
