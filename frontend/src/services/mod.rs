pub mod api;
pub mod download;
pub mod format;
pub mod logging;
pub mod session;
