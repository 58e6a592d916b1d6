//! Core module - Shared utilities
//!
//! This module provides:
//! - Cache file location resolution
//! - Filename key helpers shared by discovery and lookup

pub mod paths;
