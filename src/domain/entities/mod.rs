//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`ShortLinkRecord`] - A short identifier mapped to a submitted URL
//!
//! Entities are plain data structures. The only lifecycle operation this crate
//! performs on them is creation, carried out by
//! [`crate::application::services::Allocator`].

pub mod short_link;

pub use short_link::ShortLinkRecord;
