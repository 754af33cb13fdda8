//! Query filters forwarded to the traversability oracle.
//!
//! The pathfinding core never interprets these values; they are carried
//! verbatim to the external spatial-query subsystem, which decides what an
//! object-type tag or actor-class name means.

/// An opaque object-type tag understood by the spatial-query subsystem.
///
/// # Example
///
/// ```
/// use nav_types::ObjectTypeTag;
///
/// let tag = ObjectTypeTag::new("WorldStatic");
/// assert_eq!(tag.as_str(), "WorldStatic");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectTypeTag(String);

impl ObjectTypeTag {
    /// Creates a new object-type tag.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectTypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectTypeTag {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ObjectTypeTag {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// An opaque actor-class name used to narrow obstruction queries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorClassFilter(String);

impl ActorClassFilter {
    /// Creates a new actor-class filter.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the class name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ActorClassFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The filter payload attached to one path query.
///
/// # Example
///
/// ```
/// use nav_types::{ActorClassFilter, QueryFilters};
///
/// let filters = QueryFilters::none()
///     .with_object_type("WorldStatic")
///     .with_object_type("WorldDynamic")
///     .with_actor_class(ActorClassFilter::new("Obstacle"));
///
/// assert_eq!(filters.object_types().len(), 2);
/// assert!(filters.actor_class().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryFilters {
    object_types: Vec<ObjectTypeTag>,
    actor_class: Option<ActorClassFilter>,
}

impl QueryFilters {
    /// Creates an empty filter set (match everything the oracle matches).
    #[must_use]
    pub const fn none() -> Self {
        Self {
            object_types: Vec::new(),
            actor_class: None,
        }
    }

    /// Adds an object-type tag.
    #[must_use]
    pub fn with_object_type(mut self, tag: impl Into<ObjectTypeTag>) -> Self {
        self.object_types.push(tag.into());
        self
    }

    /// Sets the actor-class filter.
    #[must_use]
    pub fn with_actor_class(mut self, class: ActorClassFilter) -> Self {
        self.actor_class = Some(class);
        self
    }

    /// Returns the object-type tags.
    #[must_use]
    pub fn object_types(&self) -> &[ObjectTypeTag] {
        &self.object_types
    }

    /// Returns the actor-class filter, if set.
    #[must_use]
    pub const fn actor_class(&self) -> Option<&ActorClassFilter> {
        self.actor_class.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_empty() {
        let filters = QueryFilters::none();
        assert!(filters.object_types().is_empty());
        assert!(filters.actor_class().is_none());
    }

    #[test]
    fn test_with_object_type() {
        let filters = QueryFilters::none()
            .with_object_type("WorldStatic")
            .with_object_type(ObjectTypeTag::new("Pawn"));
        assert_eq!(filters.object_types()[0].as_str(), "WorldStatic");
        assert_eq!(filters.object_types()[1].as_str(), "Pawn");
    }

    #[test]
    fn test_with_actor_class() {
        let filters = QueryFilters::none().with_actor_class(ActorClassFilter::new("Wall"));
        assert_eq!(filters.actor_class().map(ActorClassFilter::as_str), Some("Wall"));
    }

    #[test]
    fn test_tag_display() {
        assert_eq!(ObjectTypeTag::new("WorldStatic").to_string(), "WorldStatic");
        assert_eq!(ActorClassFilter::new("Wall").to_string(), "Wall");
    }

    #[test]
    fn test_default_equals_none() {
        assert_eq!(QueryFilters::default(), QueryFilters::none());
    }
}
