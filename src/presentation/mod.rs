//! Presentation layer for visual styling and color mapping.
//!
//! This module contains presentation logic separated from business logic:
//! - Status legend entries with their theme colours

pub mod color_mapping;
