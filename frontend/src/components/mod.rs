//! UI Components for the CineSeek application.
//!
//! # Layout Components
//! - [`Footer`] - Page footer with navigation and client-only social links

mod footer;

pub use footer::*;
