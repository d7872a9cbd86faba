//! The shared accessor seam over catalog record kinds.

use promptcraft_common::RecordId;

/// Accessors common to both record kinds
///
/// The text-match clause of the filter and the facet enumeration helpers
/// only need these fields, so they are written once against this trait
/// rather than per record kind.
pub trait CatalogEntry {
    /// Unique identifier within a collection
    fn id(&self) -> &RecordId;

    /// Display title
    fn title(&self) -> &str;

    /// Short free-text description
    fn description(&self) -> &str;

    /// Display name of the author
    fn author_name(&self) -> &str;

    /// Single category label
    fn category(&self) -> &str;

    /// Tag set (insertion order preserved for display)
    fn tags(&self) -> &[String];
}
