//! Randomized bounded-churn animation core for the letter-grid background.
//!
//! Each tick selects a bounded fraction of cells, skipping cells still inside
//! their cooldown window, and returns the letters and lifetimes to apply. The
//! DOM host owns the actual elements and fade timers.

use std::collections::HashMap;

use rand::Rng;

/// Tuning for the grid geometry and animation cadence.
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    /// Alphabet cells draw from.
    pub letters: &'static str,
    /// Fraction of total cells refreshed per tick.
    pub update_fraction: f64,
    /// Interval between animation ticks, in milliseconds.
    pub tick_interval_ms: u32,
    /// Base time a cell stays visible before fading, in milliseconds.
    pub cell_lifetime_ms: u32,
    /// Multiplier range applied to the base lifetime per cell.
    pub lifetime_jitter: (f64, f64),
    /// Minimum cell edge, in pixels.
    pub min_cell_size_px: f64,
    /// Fraction of cells populated when the grid is (re)built.
    pub initial_fill_fraction: f64,
    /// Height of the merged center cell as a percentage of grid height.
    pub center_percent_y: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            letters: "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789",
            update_fraction: 0.075,
            tick_interval_ms: 200,
            cell_lifetime_ms: 1000,
            lifetime_jitter: (0.8, 1.2),
            min_cell_size_px: 25.0,
            initial_fill_fraction: 0.20,
            center_percent_y: 60.0,
        }
    }
}

impl GridConfig {
    /// Minimum time between updates of the same cell, in milliseconds.
    pub fn cooldown_ms(&self) -> u64 {
        u64::from(self.cell_lifetime_ms) * 2
    }

    /// Width of the merged center cell as a percentage of grid width,
    /// responsive to the viewport width.
    pub fn center_percent_x(viewport_width: f64) -> f64 {
        if viewport_width <= 400.0 {
            100.0
        } else if viewport_width <= 800.0 {
            80.0
        } else {
            60.0
        }
    }

    /// Grid dimensions for a container of the given client size.
    pub fn dimensions(&self, client_width: f64, client_height: f64) -> GridDimensions {
        GridDimensions {
            columns: (client_width / (self.min_cell_size_px * 0.75)).floor() as usize,
            rows: (client_height / self.min_cell_size_px).floor() as usize,
        }
    }
}

/// Column and row counts for the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensions {
    /// Column count.
    pub columns: usize,
    /// Row count.
    pub rows: usize,
}

impl GridDimensions {
    /// Total cell count before the center merge.
    pub fn total_cells(&self) -> usize {
        self.columns * self.rows
    }
}

/// Rectangle of cells replaced by the merged center cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeRegion {
    /// First merged row.
    pub start_row: usize,
    /// First merged column.
    pub start_col: usize,
    /// Merged row count.
    pub rows: usize,
    /// Merged column count.
    pub cols: usize,
}

/// Computes the centered merge rectangle from percentage sizes.
pub fn merge_region(dims: GridDimensions, percent_x: f64, percent_y: f64) -> MergeRegion {
    let rows = (dims.rows as f64 * percent_y / 100.0).floor() as usize;
    let cols = (dims.columns as f64 * percent_x / 100.0).floor() as usize;
    MergeRegion {
        start_row: (dims.rows - rows) / 2,
        start_col: (dims.columns - cols) / 2,
        rows,
        cols,
    }
}

impl MergeRegion {
    /// Whether the cell at `(row, col)` falls inside the merged rectangle.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.start_row
            && row < self.start_row + self.rows
            && col >= self.start_col
            && col < self.start_col + self.cols
    }
}

/// One cell refresh produced by a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellUpdate {
    /// Flat cell index.
    pub index: usize,
    /// Letter to show.
    pub letter: char,
    /// Time until the cell fades out, in milliseconds.
    pub lifetime_ms: u32,
}

/// Animation state: per-cell cooldown bookkeeping over a flat cell range.
#[derive(Debug, Clone)]
pub struct LetterGrid {
    config: GridConfig,
    total_cells: usize,
    last_updated: HashMap<usize, u64>,
}

impl LetterGrid {
    /// Creates the animation state for `total_cells` animatable cells.
    pub fn new(config: GridConfig, total_cells: usize) -> Self {
        Self {
            config,
            total_cells,
            last_updated: HashMap::new(),
        }
    }

    /// Rebuilds the state for a new cell count, dropping all cooldowns.
    pub fn reset(&mut self, total_cells: usize) {
        self.total_cells = total_cells;
        self.last_updated.clear();
    }

    /// Animation tuning in use.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Upper bound of cells refreshed per tick.
    pub fn cells_per_tick(&self) -> usize {
        (self.total_cells as f64 * self.config.update_fraction).floor() as usize
    }

    /// Populates the initial fill fraction with staggered cooldowns so the
    /// first ticks do not refresh every seeded cell at once.
    pub fn seed_initial<R: Rng>(&mut self, now_ms: u64, rng: &mut R) -> Vec<CellUpdate> {
        let target = (self.total_cells as f64 * self.config.initial_fill_fraction).floor() as usize;
        let cooldown = self.config.cooldown_ms();
        let mut updates = Vec::with_capacity(target);
        let mut available: Vec<usize> = (0..self.total_cells).collect();

        while updates.len() < target && !available.is_empty() {
            let slot = rng.gen_range(0..available.len());
            let index = available.swap_remove(slot);
            updates.push(self.refresh(index, rng));
            let backdate = (rng.gen::<f64>() * cooldown as f64) as u64;
            self.last_updated.insert(index, now_ms.saturating_sub(backdate));
        }

        updates
    }

    /// Refreshes up to [`Self::cells_per_tick`] randomly chosen cells that
    /// are outside their cooldown window.
    ///
    /// Attempts are capped at the total cell count, so a saturated grid
    /// yields fewer (possibly zero) updates rather than spinning.
    pub fn tick<R: Rng>(&mut self, now_ms: u64, rng: &mut R) -> Vec<CellUpdate> {
        let cooldown = self.config.cooldown_ms();
        let mut updates = Vec::new();
        let mut touched = Vec::new();
        let mut attempts = 0;

        while updates.len() < self.cells_per_tick() && attempts < self.total_cells {
            let index = rng.gen_range(0..self.total_cells);
            let cooled = self
                .last_updated
                .get(&index)
                .map_or(true, |&last| now_ms.saturating_sub(last) >= cooldown);
            if cooled && !touched.contains(&index) {
                updates.push(self.refresh(index, rng));
                touched.push(index);
                self.last_updated.insert(index, now_ms);
            }
            attempts += 1;
        }

        updates
    }

    fn refresh<R: Rng>(&self, index: usize, rng: &mut R) -> CellUpdate {
        let letters = self.config.letters.as_bytes();
        let letter = letters[rng.gen_range(0..letters.len())] as char;
        let (min, max) = self.config.lifetime_jitter;
        let multiplier = min + rng.gen::<f64>() * (max - min);
        CellUpdate {
            index,
            letter,
            lifetime_ms: (f64::from(self.config.cell_lifetime_ms) * multiplier) as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn grid(total: usize) -> LetterGrid {
        LetterGrid::new(GridConfig::default(), total)
    }

    #[test]
    fn center_width_is_responsive() {
        assert_eq!(GridConfig::center_percent_x(320.0), 100.0);
        assert_eq!(GridConfig::center_percent_x(800.0), 80.0);
        assert_eq!(GridConfig::center_percent_x(1440.0), 60.0);
    }

    #[test]
    fn dimensions_follow_min_cell_size() {
        let dims = GridConfig::default().dimensions(750.0, 500.0);
        assert_eq!(dims, GridDimensions { columns: 40, rows: 20 });
        assert_eq!(dims.total_cells(), 800);
    }

    #[test]
    fn merge_region_is_centered() {
        let region = merge_region(GridDimensions { columns: 40, rows: 20 }, 60.0, 60.0);
        assert_eq!(
            region,
            MergeRegion {
                start_row: 4,
                start_col: 8,
                rows: 12,
                cols: 24,
            }
        );
        assert!(region.contains(4, 8));
        assert!(region.contains(15, 31));
        assert!(!region.contains(3, 8));
        assert!(!region.contains(4, 32));
    }

    #[test]
    fn tick_churn_is_bounded() {
        let mut grid = grid(400);
        let mut rng = StdRng::seed_from_u64(7);
        let updates = grid.tick(10_000, &mut rng);
        assert!(!updates.is_empty());
        assert!(updates.len() <= grid.cells_per_tick());
        let mut indexes: Vec<usize> = updates.iter().map(|u| u.index).collect();
        indexes.sort_unstable();
        indexes.dedup();
        assert_eq!(indexes.len(), updates.len(), "duplicate cell in one tick");
    }

    #[test]
    fn cooldown_blocks_rapid_re_updates() {
        let mut grid = grid(40);
        let mut rng = StdRng::seed_from_u64(7);
        let first: Vec<usize> = grid.tick(10_000, &mut rng).iter().map(|u| u.index).collect();
        assert!(!first.is_empty());
        // The next tick lands inside the cooldown window of every cell above.
        let second: Vec<usize> = grid.tick(10_200, &mut rng).iter().map(|u| u.index).collect();
        assert!(first.iter().all(|index| !second.contains(index)));
        // Once the window has elapsed, ticking still produces updates.
        let later = grid.tick(10_200 + grid.config().cooldown_ms(), &mut rng);
        assert!(!later.is_empty());
    }

    #[test]
    fn seed_fills_the_configured_fraction() {
        let mut grid = grid(400);
        let mut rng = StdRng::seed_from_u64(42);
        let updates = grid.seed_initial(50_000, &mut rng);
        assert_eq!(updates.len(), 80);
    }

    #[test]
    fn updates_draw_letters_from_the_alphabet() {
        let mut grid = grid(100);
        let mut rng = StdRng::seed_from_u64(3);
        for update in grid.tick(1_000_000, &mut rng) {
            assert!(grid.config().letters.contains(update.letter));
            let base = f64::from(grid.config().cell_lifetime_ms);
            let lifetime = f64::from(update.lifetime_ms);
            assert!(lifetime >= base * 0.8 && lifetime <= base * 1.2);
        }
    }

    #[test]
    fn reset_drops_cooldowns() {
        let mut grid = grid(40);
        let mut rng = StdRng::seed_from_u64(9);
        for round in 0..40 {
            grid.tick(round, &mut rng);
        }
        grid.reset(40);
        assert!(!grid.tick(41, &mut rng).is_empty());
    }
}
