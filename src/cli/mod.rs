pub mod build;
pub mod example;
pub mod init;
pub mod inspect;
