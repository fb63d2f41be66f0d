pub mod add;
pub mod config;
pub mod del;
pub mod edit;
pub mod init;
pub mod list;
pub mod next;
pub mod ring;
pub mod run;
pub mod show;
pub mod sounds;
pub mod toggle;
