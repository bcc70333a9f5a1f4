pub mod current;
pub mod dispatch;
pub mod list;
pub mod use_version;
