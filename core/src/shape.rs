use alloc::string::String;
use ndarray::Array2;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::*;

/// Geometric mask laid over the square grid.
///
/// Serialized as its short tag (`"square"`, `"L"`, ...). Tags this version does
/// not know deserialize to [`Shape::Unknown`], which keeps every cell playable.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Shape {
    #[default]
    Square,
    L,
    T,
    Plus,
    Triangle,
    Hexagon,
    Unknown,
}

impl Serialize for Shape {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for Shape {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

impl Shape {
    pub const ALL: [Shape; 6] = [
        Shape::Square,
        Shape::L,
        Shape::T,
        Shape::Plus,
        Shape::Triangle,
        Shape::Hexagon,
    ];

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::L => "L",
            Self::T => "T",
            Self::Plus => "plus",
            Self::Triangle => "triangle",
            Self::Hexagon => "hexagon",
            Self::Unknown => "unknown",
        }
    }

    pub fn from_tag(tag: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|shape| shape.tag() == tag)
            .unwrap_or(Self::Unknown)
    }

    /// Whether `(row, col)` is part of the playable region on a `grid_size` board.
    pub fn contains(self, (row, col): Coord2, grid_size: Coord) -> bool {
        let row = i16::from(row);
        let col = i16::from(col);
        let size = i16::from(grid_size);
        let center = size / 2;

        match self {
            Self::Square | Self::Unknown => true,
            // everything but the upper right quadrant
            Self::L => row > center || col <= center,
            Self::T => row <= center || col == center,
            Self::Plus => row == center || col == center,
            Self::Triangle => {
                row + col >= center && row - col <= center && row <= center + size / 3
            }
            Self::Hexagon => (col - center).abs() + (row - center).abs() <= center,
        }
    }

    pub fn mask(self, grid_size: Coord) -> Array2<bool> {
        let dim = (grid_size, grid_size).to_nd_index();
        Array2::from_shape_fn(dim, |(row, col)| {
            // indices come from a grid_size x grid_size array, so they fit in Coord
            self.contains((row as Coord, col as Coord), grid_size)
        })
    }
}

/// Shape classifier for a resolved level.
pub fn is_in_shape(coords: Coord2, config: &LevelConfig) -> bool {
    config.shape.contains(coords, config.grid_size)
}
