//! Grid board layout: where the board slabs, grid lines and space numbers go.
//!
//! This is placement data only — axis-aligned box centers/sizes and label
//! positions for the host scene to instantiate. No mesh generation happens
//! here; the interesting geometry lives in [`crate::tube`].

use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

/// Vertical clearance between the paper surface and a number label, keeping
/// the text from z-fighting with the paper.
const LABEL_LIFT: Real = 0.005;

const BASE_FONT_SIZE: Real = 240.0;
const FONT_SIZE_PER_DIGIT: Real = 20.0;
const FONT_SCALE: Real = 0.5;

/// Board dimensions and styling-independent spacing parameters.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardConfig {
    /// Side length of one playing space.
    pub space_size: Real,
    pub spaces_x: usize,
    pub spaces_y: usize,
    /// Thickness of the printed paper sheet on top of the cardboard.
    pub paper_thickness: Real,
    /// Width of a grid line.
    pub grid_thickness: Real,
    /// How far grid lines rise above the paper.
    pub grid_height: Real,
    /// Cardboard margin outside the playing area.
    pub border_width: Real,
    pub board_thickness: Real,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            space_size: 1.0,
            spaces_x: 10,
            spaces_y: 10,
            paper_thickness: 0.01,
            grid_thickness: 0.1,
            grid_height: 0.01,
            border_width: 0.1,
            board_thickness: 0.01,
        }
    }
}

/// An axis-aligned box for the host to place: center plus full extents.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxPlacement {
    pub center: Point3<Real>,
    pub size: Vector3<Real>,
}

/// One numbered space label, positioned just above the paper surface.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpaceLabel {
    /// 1-based space number, boustrophedon order from the near-left corner.
    pub number: u32,
    pub position: Point3<Real>,
    /// Point-size hint shrinking with digit count so wide numbers still fit.
    pub font_size: u32,
}

/// Complete placement data for one board.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardLayout {
    pub cardboard: BoxPlacement,
    pub paper: BoxPlacement,
    pub grid_lines: Vec<BoxPlacement>,
    pub labels: Vec<SpaceLabel>,
}

fn label_font_size(number: u32) -> u32 {
    let digits = number.to_string().len() as Real;
    ((BASE_FONT_SIZE - digits * FONT_SIZE_PER_DIGIT) * FONT_SCALE) as u32
}

impl BoardConfig {
    /// Playing-area width (X), grid lines included.
    pub fn board_width(&self) -> Real {
        self.spaces_x as Real * (self.space_size + self.grid_thickness) + self.grid_thickness
    }

    /// Playing-area depth (Z), grid lines included.
    pub fn board_depth(&self) -> Real {
        self.spaces_y as Real * (self.space_size + self.grid_thickness) + self.grid_thickness
    }

    /// Lays the board out around the origin, +Y up.
    pub fn build(&self) -> BoardLayout {
        let pitch = self.space_size + self.grid_thickness;
        let board_width = self.board_width();
        let board_depth = self.board_depth();

        let cardboard = BoxPlacement {
            center: Point3::origin(),
            size: Vector3::new(
                board_width + 2.0 * self.border_width,
                self.board_thickness,
                board_depth + 2.0 * self.border_width,
            ),
        };

        let paper = BoxPlacement {
            center: Point3::new(
                0.0,
                self.board_thickness / 2.0 + self.paper_thickness / 2.0,
                0.0,
            ),
            size: Vector3::new(
                board_width - self.grid_thickness,
                self.paper_thickness,
                board_depth - self.grid_thickness,
            ),
        };

        // Grid lines rise out of the paper, so they start at the cardboard
        // surface and clear the paper by `grid_height`.
        let line_height = self.grid_height + self.paper_thickness;
        let line_y = self.board_thickness / 2.0 + line_height / 2.0;

        let mut grid_lines =
            Vec::with_capacity(self.spaces_x + self.spaces_y + 2);
        let mut x = -(self.spaces_x as Real / 2.0) * pitch;
        for _ in 0..=self.spaces_x {
            grid_lines.push(BoxPlacement {
                center: Point3::new(x, line_y, 0.0),
                size: Vector3::new(self.grid_thickness, line_height, board_depth),
            });
            x += pitch;
        }
        let mut z = -(self.spaces_y as Real / 2.0) * pitch;
        for _ in 0..=self.spaces_y {
            grid_lines.push(BoxPlacement {
                center: Point3::new(0.0, line_y, z),
                size: Vector3::new(board_width, line_height, self.grid_thickness),
            });
            z += pitch;
        }

        // Space numbers snake across the rows: odd rows run right-to-left,
        // snakes-and-ladders style.
        let label_y = self.board_thickness / 2.0 + self.paper_thickness + LABEL_LIFT;
        let mut labels = Vec::with_capacity(self.spaces_x * self.spaces_y);
        let mut number: u32 = 1;
        let mut z = -pitch * (self.spaces_y as Real - 1.0) / 2.0;
        for row in 0..self.spaces_y {
            let sign: Real = if row % 2 == 0 { -1.0 } else { 1.0 };
            let mut x = sign * ((self.spaces_x as Real - 1.0) / 2.0 * pitch);
            for _ in 0..self.spaces_x {
                labels.push(SpaceLabel {
                    number,
                    position: Point3::new(x, label_y, z),
                    font_size: label_font_size(number),
                });
                x += -sign * pitch;
                number += 1;
            }
            z += pitch;
        }

        BoardLayout {
            cardboard,
            paper,
            grid_lines,
            labels,
        }
    }
}
