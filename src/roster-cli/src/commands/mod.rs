//! Command handlers for roster CLI

pub mod update;
