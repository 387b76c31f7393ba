use serde::{Deserialize, Serialize};

/// Compass-style resize handle directions around an element's boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeDirection {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

/// Horizontal component of a resize direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalEdge {
    East,
    West,
}

/// Vertical component of a resize direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalEdge {
    North,
    South,
}

impl ResizeDirection {
    /// Horizontal edge moved by this direction, if any.
    #[must_use]
    pub fn horizontal(self) -> Option<HorizontalEdge> {
        match self {
            Self::East | Self::NorthEast | Self::SouthEast => Some(HorizontalEdge::East),
            Self::West | Self::NorthWest | Self::SouthWest => Some(HorizontalEdge::West),
            Self::North | Self::South => None,
        }
    }

    /// Vertical edge moved by this direction, if any.
    #[must_use]
    pub fn vertical(self) -> Option<VerticalEdge> {
        match self {
            Self::North | Self::NorthEast | Self::NorthWest => Some(VerticalEdge::North),
            Self::South | Self::SouthEast | Self::SouthWest => Some(VerticalEdge::South),
            Self::East | Self::West => None,
        }
    }

    /// Lowercase compass code (`"n"`, `"se"`, ...), as used by cursor names.
    #[must_use]
    pub fn as_compass(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
            Self::NorthEast => "ne",
            Self::NorthWest => "nw",
            Self::SouthEast => "se",
            Self::SouthWest => "sw",
        }
    }
}

/// Classifies a pointer position against an element's resize handle zones.
///
/// `local_x`/`local_y` are expressed relative to the element's top-left
/// corner. Corner zones are `tolerance × tolerance` squares and are tested
/// before the `tolerance`-wide edge strips, since a corner is the
/// intersection of two edges and must win. `None` means the pointer is on
/// the element body and a drag should start instead.
#[must_use]
pub fn resize_direction_at(
    local_x: f64,
    local_y: f64,
    width: f64,
    height: f64,
    tolerance: f64,
) -> Option<ResizeDirection> {
    let near_left = local_x < tolerance;
    let near_right = local_x > width - tolerance;
    let near_top = local_y < tolerance;
    let near_bottom = local_y > height - tolerance;

    if near_left && near_top {
        Some(ResizeDirection::NorthWest)
    } else if near_right && near_top {
        Some(ResizeDirection::NorthEast)
    } else if near_left && near_bottom {
        Some(ResizeDirection::SouthWest)
    } else if near_right && near_bottom {
        Some(ResizeDirection::SouthEast)
    } else if near_left {
        Some(ResizeDirection::West)
    } else if near_right {
        Some(ResizeDirection::East)
    } else if near_top {
        Some(ResizeDirection::North)
    } else if near_bottom {
        Some(ResizeDirection::South)
    } else {
        None
    }
}
