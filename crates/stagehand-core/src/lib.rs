pub mod backends;
pub mod hooks;
pub mod models;
pub mod tracking;
