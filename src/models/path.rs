use super::{common::Point, segment::PathSegment};

/// One drawn stroke: the ordered segments parsed from a single path `d` string.
///
/// A path always holds at least one segment (the initial moveto); the parser refuses
/// to build an empty one.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    source: String,
    segments: Vec<PathSegment>,
}

impl Path {
    pub(crate) fn new(source: impl Into<String>, segments: Vec<PathSegment>) -> Self {
        debug_assert!(!segments.is_empty(), "a path needs at least one segment");
        Self {
            source: source.into(),
            segments,
        }
    }

    /// The path data string this path was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// The point at `t = 0` of the first segment.
    pub fn start_point(&self) -> Point {
        self.segments
            .first()
            .map(PathSegment::start)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
