//! Best-fit layout selection for the three-button home-page menu.
//!
//! A fixed candidate set is scored by the square button edge each layout
//! allows inside the available space; the largest edge wins.

/// Inner padding subtracted from the container on each axis, in pixels.
pub const PADDING: f64 = 80.0;

/// Gap between buttons, in pixels.
pub const GAP: f64 = 10.0;

/// Shape of a candidate layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// Three buttons in a row.
    Horizontal,
    /// Two on top, one centered below spanning both columns.
    Grid,
    /// One button per row.
    Vertical,
}

/// One candidate arrangement of the button grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Column count.
    pub cols: u32,
    /// Row count.
    pub rows: u32,
    /// Arrangement kind.
    pub kind: LayoutKind,
}

/// The fixed candidate set, scanned in order.
pub const LAYOUTS: [Layout; 3] = [
    Layout {
        cols: 3,
        rows: 1,
        kind: LayoutKind::Horizontal,
    },
    Layout {
        cols: 2,
        rows: 2,
        kind: LayoutKind::Grid,
    },
    Layout {
        cols: 1,
        rows: 3,
        kind: LayoutKind::Vertical,
    },
];

/// Available space for the button grid, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Space {
    /// Usable width.
    pub width: f64,
    /// Usable height.
    pub height: f64,
}

impl Space {
    /// Usable space inside a container of the given client size, minus padding.
    pub fn inside(client_width: f64, client_height: f64) -> Self {
        Self {
            width: client_width - PADDING,
            height: client_height - PADDING,
        }
    }
}

/// A selected layout and the square button edge it allows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutChoice {
    /// Winning layout.
    pub layout: Layout,
    /// Button edge length in pixels.
    pub button_size: f64,
}

fn button_size_for(layout: Layout, space: Space) -> f64 {
    let width = (space.width - f64::from(layout.cols - 1) * GAP) / f64::from(layout.cols);
    let height = (space.height - f64::from(layout.rows - 1) * GAP) / f64::from(layout.rows);
    width.min(height)
}

/// Picks the candidate layout that maximizes the button edge.
pub fn best_layout(space: Space) -> LayoutChoice {
    LAYOUTS
        .into_iter()
        .map(|layout| LayoutChoice {
            layout,
            button_size: button_size_for(layout, space),
        })
        .fold(
            LayoutChoice {
                layout: LAYOUTS[0],
                button_size: 0.0,
            },
            |best, candidate| {
                if candidate.button_size > best.button_size {
                    candidate
                } else {
                    best
                }
            },
        )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn wide_container_picks_horizontal() {
        let choice = best_layout(Space {
            width: 900.0,
            height: 200.0,
        });
        assert_eq!(choice.layout.kind, LayoutKind::Horizontal);
        assert_eq!(choice.button_size, 200.0);
    }

    #[test]
    fn tall_container_picks_vertical() {
        let choice = best_layout(Space {
            width: 200.0,
            height: 900.0,
        });
        assert_eq!(choice.layout.kind, LayoutKind::Vertical);
        assert_eq!(choice.button_size, 200.0);
    }

    #[test]
    fn squarish_container_picks_grid() {
        let choice = best_layout(Space {
            width: 500.0,
            height: 500.0,
        });
        assert_eq!(choice.layout.kind, LayoutKind::Grid);
        assert_eq!(choice.button_size, 245.0);
    }

    #[test]
    fn space_subtracts_padding() {
        let space = Space::inside(500.0, 400.0);
        assert_eq!(space.width, 420.0);
        assert_eq!(space.height, 320.0);
    }
}
