//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod detail;
pub mod filter_bar;
pub mod footer;
pub mod header;
pub mod panel_view;
pub mod tabs;
