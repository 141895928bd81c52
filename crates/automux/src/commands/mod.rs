//! Command implementations

pub mod init;
pub mod print_name;
pub mod trigger;
