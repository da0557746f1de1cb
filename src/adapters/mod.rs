pub mod dashboard;
pub mod http;
pub mod persistence;
