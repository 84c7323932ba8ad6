use std::fmt;

/// Immutable path identifying a node inside a specification document.
///
/// Deriving a child location never mutates the parent, so sibling entries
/// processed in the same loop share no path state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SpecificationPointer {
    segments: Vec<String>,
}

impl SpecificationPointer {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_path_element(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Dotted rendering used as location context in diagnostics.
    pub fn path(&self) -> String {
        self.segments.join(".")
    }
}

impl fmt::Display for SpecificationPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
