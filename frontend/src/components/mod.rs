pub mod dashboard;
pub mod header;
pub mod login_page;
pub mod route_guard;
pub mod session_provider;
pub mod transactions;
