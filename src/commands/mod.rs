//! CLI command implementations

pub mod init;
pub mod list;

pub use init::InitCommand;
pub use list::ListCommand;
