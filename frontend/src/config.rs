//! Application configuration.
//!
//! Centralized configuration for the CineSeek frontend. Everything here is
//! compile-time data so that server and client renders read the same values.

use std::collections::HashSet;

use crate::{AppError, AppResult, BrandMark, LinkEntry, LinkKind, MountPhase};

/// Application name.
///
/// Used for the document title and the copyright line.
pub const APP_NAME: &str = "CineSeek";

/// Logo text, with the accent half highlighted.
pub const BRAND: BrandMark = BrandMark {
    lead: "Cine",
    accent: "Seek",
};

/// Year printed in the copyright line.
///
/// Fixed rather than read from the clock: a server render on Dec 31 and a
/// client render on Jan 1 must still produce the same text.
pub const COPYRIGHT_YEAR: u16 = 2024;

/// Footer link table, in display order.
pub const FOOTER_LINKS: &[LinkEntry] = &[
    LinkEntry::internal("Home", "/"),
    LinkEntry::internal("Movies", "/movies"),
    LinkEntry::internal("Contact", "/contact"),
    LinkEntry::internal("Privacy Policy", "/privacy"),
    LinkEntry::external("Twitter", "https://twitter.com", "📱"),
    LinkEntry::external("Facebook", "https://facebook.com", "📘"),
    LinkEntry::external("Instagram", "https://instagram.com", "📷"),
];

/// Everything the footer renders from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterConfig {
    pub brand: BrandMark,
    pub links: &'static [LinkEntry],
    pub copyright_year: u16,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            brand: BRAND,
            links: FOOTER_LINKS,
            copyright_year: COPYRIGHT_YEAR,
        }
    }
}

impl FooterConfig {
    /// Internal navigation links, in table order.
    pub fn navigation(&self) -> impl Iterator<Item = &'static LinkEntry> {
        self.links.iter().filter(|link| !link.is_external())
    }

    /// External social links, in table order.
    pub fn social(&self) -> impl Iterator<Item = &'static LinkEntry> {
        self.links.iter().filter(|link| link.is_external())
    }

    /// Social links to render for the given phase.
    ///
    /// Empty until the component has mounted on the client.
    pub fn visible_social(&self, phase: MountPhase) -> Vec<&'static LinkEntry> {
        if phase.is_mounted() {
            self.social().collect()
        } else {
            Vec::new()
        }
    }

    pub fn copyright_line(&self) -> String {
        format!(
            "© {} {}. All rights reserved.",
            self.copyright_year,
            self.brand.name()
        )
    }
}

/// Check the link table for duplicate keys and malformed destinations.
pub fn validate_links(links: &[LinkEntry]) -> AppResult<()> {
    let mut seen = HashSet::new();

    for link in links {
        if link.label.trim().is_empty() {
            return Err(AppError::EmptyLabel {
                destination: link.destination.to_string(),
            });
        }
        if !seen.insert(link.label) {
            return Err(AppError::DuplicateLabel(link.label.to_string()));
        }
        if link.destination.trim().is_empty() {
            return Err(AppError::EmptyDestination {
                label: link.label.to_string(),
            });
        }

        let valid = match link.kind {
            LinkKind::Internal => link.destination.starts_with('/'),
            LinkKind::External => {
                link.destination.starts_with("https://") || link.destination.starts_with("http://")
            }
        };
        if !valid {
            return Err(AppError::InvalidDestination {
                label: link.label.to_string(),
                destination: link.destination.to_string(),
            });
        }
    }

    Ok(())
}
