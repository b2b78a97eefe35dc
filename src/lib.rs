pub mod api;
pub mod cache;
pub mod commands;
pub mod config;
pub mod data_provider;
pub mod fixtures;
pub mod formatting;
pub mod opener;
pub mod refresh;
pub mod shots;
pub mod tui;

#[cfg(feature = "development")]
pub mod dev;

#[cfg(test)]
pub(crate) mod testing;
