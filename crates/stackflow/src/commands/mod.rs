pub mod init;
pub mod program;
pub mod stage;
