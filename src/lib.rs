pub mod api_server;
pub mod config;
pub mod core;
pub mod directory;
pub mod error;
pub mod io;
pub mod webhook;

#[cfg(test)]
pub(crate) mod testing;
