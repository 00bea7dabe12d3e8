//! sdbview: console and read-only web viewer for a schema-less attribute store.
//!
//! Query results are shaped into positional column layouts that the console renders
//! as a text grid and the web viewer hands to its HTML templates.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod store;
pub mod web;
