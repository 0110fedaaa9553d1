/// Fixed pitch between neighbouring LEDs on one arm, in pattern units.
pub const LED_SPACING: f32 = 20.0;

/// Radius of one LED circle, shared by painting and pointer hit testing.
pub const LED_RADIUS: f32 = 5.0;

/// Counts and spacing that define the pattern's geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternConfig {
    /// Number of LEDs along one arm.
    pub leds_per_arm: usize,
    /// Number of rotational copies of the arm.
    pub divisions: usize,
    /// Gap between the rotation center and the first LED of the arm.
    pub arm_offset: f32,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            leds_per_arm: 10,
            divisions: 40,
            arm_offset: 40.0,
        }
    }
}

impl PatternConfig {
    /// A pattern without divisions has no angle step to compute; reject it
    /// before any geometry is derived from the config.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.divisions == 0 {
            anyhow::bail!("division count must be at least 1");
        }
        Ok(())
    }
}

/// Generate the anchor points of one arm, index 0 closest to the center.
///
/// Points live in pattern space with the rotation center at the origin; the
/// arm extends straight up (negative y), offset from the center by
/// `arm_offset` and spaced by [`LED_SPACING`].
pub fn arm_points(config: &PatternConfig) -> Vec<[f32; 2]> {
    (0..config.leds_per_arm)
        .map(|i| [0.0, -(config.arm_offset + i as f32 * LED_SPACING)])
        .collect()
}

/// On/off flags for every LED, one row per division.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateGrid {
    rows: Vec<Vec<bool>>,
}

impl StateGrid {
    pub fn new(divisions: usize, leds_per_arm: usize) -> Self {
        Self {
            rows: vec![vec![false; leds_per_arm]; divisions],
        }
    }

    /// Replace the grid with an all-off grid of the given dimensions.
    pub fn reset(&mut self, divisions: usize, leds_per_arm: usize) {
        *self = Self::new(divisions, leds_per_arm);
    }

    /// Build a grid of exactly `divisions x leds_per_arm` from externally
    /// supplied rows. Surplus rows and cells are dropped, missing ones come
    /// up off.
    pub fn from_rows(rows: Vec<Vec<bool>>, divisions: usize, leds_per_arm: usize) -> Self {
        let mut grid = Self::new(divisions, leds_per_arm);
        for (row, src) in grid.rows.iter_mut().zip(rows) {
            for (cell, value) in row.iter_mut().zip(src) {
                *cell = value;
            }
        }
        grid
    }

    /// Indices must be in range; the hit tester only produces in-range
    /// coordinates.
    pub fn get(&self, division: usize, index: usize) -> bool {
        self.rows[division][index]
    }

    /// Flip exactly one cell.
    pub fn toggle(&mut self, division: usize, index: usize) {
        self.rows[division][index] = !self.rows[division][index];
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    pub fn divisions(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arm_points_are_spaced_up_from_the_offset() {
        let config = PatternConfig {
            leds_per_arm: 3,
            divisions: 4,
            arm_offset: 40.0,
        };
        assert_eq!(
            arm_points(&config),
            vec![[0.0, -40.0], [0.0, -60.0], [0.0, -80.0]]
        );
    }

    #[test]
    fn zero_leds_yield_an_empty_arm() {
        let config = PatternConfig {
            leds_per_arm: 0,
            divisions: 4,
            arm_offset: 40.0,
        };
        assert!(arm_points(&config).is_empty());
    }

    #[test]
    fn validate_rejects_zero_divisions() {
        let config = PatternConfig {
            divisions: 0,
            ..PatternConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(PatternConfig::default().validate().is_ok());
    }

    #[test]
    fn new_grid_is_all_off() {
        let grid = StateGrid::new(3, 2);
        assert_eq!(grid.divisions(), 3);
        for division in 0..3 {
            for index in 0..2 {
                assert!(!grid.get(division, index));
            }
        }
    }

    #[test]
    fn double_toggle_restores_the_cell() {
        let mut grid = StateGrid::new(2, 2);
        grid.toggle(1, 0);
        assert!(grid.get(1, 0));
        grid.toggle(1, 0);
        assert!(!grid.get(1, 0));
    }

    #[test]
    fn reset_discards_all_toggles() {
        let mut grid = StateGrid::new(2, 2);
        grid.toggle(0, 1);
        grid.toggle(1, 1);
        grid.reset(3, 1);
        assert_eq!(grid, StateGrid::new(3, 1));
    }

    #[test]
    fn from_rows_pads_missing_rows_and_cells_with_off() {
        let grid = StateGrid::from_rows(vec![vec![true]], 2, 2);
        assert!(grid.get(0, 0));
        assert!(!grid.get(0, 1));
        assert!(!grid.get(1, 0));
        assert!(!grid.get(1, 1));
    }

    #[test]
    fn from_rows_drops_surplus_rows_and_cells() {
        let rows = vec![vec![true, true, true], vec![true, true, true]];
        let grid = StateGrid::from_rows(rows, 1, 2);
        assert_eq!(grid.rows(), &[vec![true, true]]);
    }
}
