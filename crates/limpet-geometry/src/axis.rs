//! Axis, edge, and safe-area edge-set vocabulary.

/// The scroll axis of a container.
///
/// Fixed for a given container instance; determines which rectangle
/// dimension (x/width vs y/height) drives all sticky computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Content scrolls left to right.
    Horizontal,
    /// Content scrolls top to bottom.
    Vertical,
}

impl Axis {
    /// Returns the opposite axis.
    #[inline]
    pub fn cross_axis(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Returns true if this is the horizontal axis.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Axis::Horizontal)
    }

    /// Returns true if this is the vertical axis.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Axis::Vertical)
    }
}

/// Which side of the scroll axis a sticky element pins to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// The leading edge: top for a vertical axis, left for a horizontal one.
    Starting,
    /// The trailing edge: bottom for a vertical axis, right for a horizontal one.
    Ending,
}

impl Edge {
    #[inline]
    pub fn is_starting(self) -> bool {
        matches!(self, Edge::Starting)
    }

    #[inline]
    pub fn is_ending(self) -> bool {
        matches!(self, Edge::Ending)
    }
}

/// Specifies which physical edges of a container may extend into the
/// unsafe screen regions (areas obscured by notches, status bars, etc.).
///
/// A sticky element whose edge is in this set uses the safe-area inset as
/// part of its sticking threshold, so it pins flush with the physical
/// screen edge instead of the safe-area boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeSet {
    /// Top edge.
    pub top: bool,
    /// Leading (left) edge.
    pub leading: bool,
    /// Bottom edge.
    pub bottom: bool,
    /// Trailing (right) edge.
    pub trailing: bool,
}

impl EdgeSet {
    /// All edges.
    pub const ALL: Self = Self {
        top: true,
        leading: true,
        bottom: true,
        trailing: true,
    };

    /// No edges (default).
    pub const NONE: Self = Self {
        top: false,
        leading: false,
        bottom: false,
        trailing: false,
    };

    /// Leading and trailing edges.
    pub const HORIZONTAL: Self = Self {
        top: false,
        leading: true,
        bottom: false,
        trailing: true,
    };

    /// Top and bottom edges.
    pub const VERTICAL: Self = Self {
        top: true,
        leading: false,
        bottom: true,
        trailing: false,
    };

    /// Creates a custom edge set.
    #[must_use]
    pub const fn new(top: bool, leading: bool, bottom: bool, trailing: bool) -> Self {
        Self {
            top,
            leading,
            bottom,
            trailing,
        }
    }

    /// Returns true if any edge is in the set.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.top || self.leading || self.bottom || self.trailing
    }

    /// Returns whether the set contains the given logical edge on the given axis.
    #[must_use]
    pub fn contains(&self, axis: Axis, edge: Edge) -> bool {
        match (axis, edge) {
            (Axis::Vertical, Edge::Starting) => self.top,
            (Axis::Vertical, Edge::Ending) => self.bottom,
            (Axis::Horizontal, Edge::Starting) => self.leading,
            (Axis::Horizontal, Edge::Ending) => self.trailing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logical_edges_map_to_physical_sides() {
        assert!(EdgeSet::VERTICAL.contains(Axis::Vertical, Edge::Starting));
        assert!(EdgeSet::VERTICAL.contains(Axis::Vertical, Edge::Ending));
        assert!(!EdgeSet::VERTICAL.contains(Axis::Horizontal, Edge::Starting));
        assert!(EdgeSet::HORIZONTAL.contains(Axis::Horizontal, Edge::Ending));
        assert!(!EdgeSet::NONE.any());
        assert!(EdgeSet::ALL.any());
    }
}
