//! HTTP inbound adapter serving the HTML page surface.

pub mod accounts;
pub mod error;
pub mod flash;
pub mod forms;
pub mod health;
pub mod items;
mod respond;
pub mod router;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod views;

pub use error::PageResult;
