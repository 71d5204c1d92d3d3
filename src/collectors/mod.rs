pub mod host;
pub mod mount;
pub mod statfs;
