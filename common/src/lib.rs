pub mod folders;
pub mod windows;
