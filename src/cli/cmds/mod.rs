pub mod cats;
pub mod init;
pub mod log;
pub mod pie;
pub mod rm;
pub mod root;
pub mod sum;
pub mod view;
