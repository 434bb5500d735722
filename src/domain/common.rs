//! Traits for entities that appear as rows on a list screen.

/// Stable key used to select or delete a row.
pub trait Identifiable {
    type Id: Copy + Eq;

    fn id(&self) -> Self::Id;
}

/// Row title.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Secondary line shown under the title.
pub trait Displayable {
    fn display_label(&self) -> String;
}
