//! Integration tests module
//!
//! This module contains binary-level tests for the jukebox CLI.

pub mod common;
pub mod extract;
