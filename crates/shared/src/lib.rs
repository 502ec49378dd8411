//! Shared configuration for Hisab.
//!
//! This crate provides the layered application configuration used by the
//! engine and the binaries.

pub mod config;

pub use config::{AppConfig, BracketSettings, TaxSettings, WindowSettings};
