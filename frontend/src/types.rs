//! Common types used across the frontend application.
//!
//! This module centralizes type definitions so the footer, the link table
//! and the entry points agree on one vocabulary.
//!
//! # Categories
//!
//! - **Link Types** - Rows of the footer link table
//! - **Brand Types** - Logo text
//! - **Mount Types** - First-render / mounted state
//! - **Error Types** - Link table validation

use thiserror::Error;

// =============================================================================
// Link Types
// =============================================================================

/// Where a footer link points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    /// In-app route, rendered with the router link primitive.
    Internal,
    /// Third-party site, opened in a new browsing context.
    External,
}

/// A single row of the footer link table.
///
/// The table is keyed by `label`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkEntry {
    /// Display label (also the table key)
    pub label: &'static str,
    /// Route path or absolute URL
    pub destination: &'static str,
    /// Internal route or external site
    pub kind: LinkKind,
    /// Placeholder icon shown instead of the label
    pub icon: Option<&'static str>,
}

impl LinkEntry {
    /// In-app navigation link.
    pub const fn internal(label: &'static str, destination: &'static str) -> Self {
        Self {
            label,
            destination,
            kind: LinkKind::Internal,
            icon: None,
        }
    }

    /// External social link shown as an icon.
    pub const fn external(
        label: &'static str,
        destination: &'static str,
        icon: &'static str,
    ) -> Self {
        Self {
            label,
            destination,
            kind: LinkKind::External,
            icon: Some(icon),
        }
    }

    pub fn is_external(&self) -> bool {
        self.kind == LinkKind::External
    }

    /// Text to render inside the anchor.
    pub fn display(&self) -> &'static str {
        self.icon.unwrap_or(self.label)
    }
}

// =============================================================================
// Brand Types
// =============================================================================

/// Two-tone logo text, e.g. "Cine" + highlighted "Seek".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrandMark {
    pub lead: &'static str,
    pub accent: &'static str,
}

impl BrandMark {
    /// Full brand name.
    pub fn name(&self) -> String {
        format!("{}{}", self.lead, self.accent)
    }
}

// =============================================================================
// Mount Types
// =============================================================================

/// Render phase of a component that defers client-only content.
///
/// Server markup and the first client pass are both produced in
/// [`MountPhase::Initial`]; the post-mount hook moves to
/// [`MountPhase::Mounted`] and nothing moves it back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MountPhase {
    /// Server render or first client render.
    #[default]
    Initial,
    /// First client render has been committed.
    Mounted,
}

impl MountPhase {
    pub fn is_mounted(self) -> bool {
        matches!(self, MountPhase::Mounted)
    }

    /// Move to `Mounted`. Returns `true` only when the phase changed.
    pub fn advance(&mut self) -> bool {
        match self {
            MountPhase::Initial => {
                *self = MountPhase::Mounted;
                true
            }
            MountPhase::Mounted => false,
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Only the footer link table can be malformed; rendering itself never fails.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AppError {
    /// Two rows share the same label.
    #[error("Duplicate link label: {0}")]
    DuplicateLabel(String),

    /// Row has a blank label.
    #[error("Link to '{destination}' has an empty label")]
    EmptyLabel { destination: String },

    /// Row has a blank destination.
    #[error("Link '{label}' has an empty destination")]
    EmptyDestination { label: String },

    /// Destination does not match the link kind.
    #[error("Link '{label}' has invalid destination: {destination}")]
    InvalidDestination { label: String, destination: String },
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_phase_advances_once() {
        let mut phase = MountPhase::default();
        assert!(!phase.is_mounted());

        assert!(phase.advance());
        assert!(phase.is_mounted());

        assert!(!phase.advance());
        assert!(!phase.advance());
        assert_eq!(phase, MountPhase::Mounted);
    }

    #[test]
    fn test_link_display_prefers_icon() {
        let nav = LinkEntry::internal("Movies", "/movies");
        let social = LinkEntry::external("Instagram", "https://instagram.com", "📷");

        assert_eq!(nav.display(), "Movies");
        assert_eq!(social.display(), "📷");
        assert!(!nav.is_external());
        assert!(social.is_external());
    }

    #[test]
    fn test_brand_name() {
        let brand = BrandMark { lead: "Cine", accent: "Seek" };
        assert_eq!(brand.name(), "CineSeek");
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::InvalidDestination {
            label: "Home".to_string(),
            destination: "home".to_string(),
        };
        assert_eq!(err.to_string(), "Link 'Home' has invalid destination: home");

        let err = AppError::EmptyLabel {
            destination: "/movies".to_string(),
        };
        assert_eq!(err.to_string(), "Link to '/movies' has an empty label");
    }
}
