//! Pure cores for the site's two page effects: best-fit button-grid layout
//! selection and the randomized letter-grid background animation.
//!
//! Both are DOM-free. The UI host owns elements, timers, and styles; these
//! modules only compute what should change.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod button_layout;
pub mod letter_grid;

pub use button_layout::{best_layout, Layout, LayoutChoice, LayoutKind, Space, GAP, PADDING};
pub use letter_grid::{merge_region, CellUpdate, GridConfig, GridDimensions, LetterGrid, MergeRegion};
