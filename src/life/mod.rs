//! Conway's Game of Life with a visual decay extension: cells do not
//! blink out of existence, they fade through intermediate shades over a
//! configurable number of generations. The rules themselves are the
//! standard B3/S23, applied against a double-buffered toroidal grid so
//! that one generation is a single simultaneous update.

pub mod cell;
pub mod grid;

use log::trace;
use thiserror::Error;

use crate::automata::CellAutomata;
use crate::auxiliary::randomizer::seeded_rng;
use cell::{Cell, Polarity};
use grid::Grid;

/// Fraction of cells set alive by `randomize`.
const SOUP_DENSITY: f32 = 0.3;

#[derive(Debug, Error)]
pub enum LifeError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("fade_steps must be at least 1, got {0}")]
    InvalidFadeSteps(u32),
}

/// The automaton engine. Owns the grid, the fade length, and the
/// display polarity; everything else is pure rule arithmetic.
#[derive(Clone, Debug)]
pub struct FadingLife {
    grid: Grid,
    fade_steps: u32,
    polarity: Polarity,
    generation: u64,
}

impl FadingLife {
    pub fn new(
        width: usize,
        height: usize,
        fade_steps: u32,
        polarity: Polarity,
    ) -> Result<Self, LifeError> {
        if fade_steps == 0 {
            return Err(LifeError::InvalidFadeSteps(fade_steps));
        }
        Ok(Self {
            grid: Grid::new(width, height)?,
            fade_steps,
            polarity,
            generation: 0,
        })
    }

    /// Marks the listed coordinates alive, wrapping any that fall
    /// outside the grid.
    pub fn seed(&mut self, coordinates: &[(isize, isize)]) {
        self.grid.seed(coordinates);
    }

    pub fn cell(&self, x: isize, y: isize) -> Cell {
        self.grid.get(x, y)
    }

    /// Display scalar for one cell under the configured polarity, for
    /// a renderer to map to a color or shade.
    pub fn shade(&self, x: isize, y: isize) -> f64 {
        self.polarity.display(self.grid.get(x, y).vitality(self.fade_steps))
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of live cells among the 8 toroidal Moore neighbors.
    /// Only exactly-`Alive` cells count; fading cells are already dead
    /// as far as the rules are concerned.
    pub fn live_neighbors(&self, x: isize, y: isize) -> u8 {
        let mut count = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                if self.grid.get(x + dx, y + dy).is_alive() {
                    count += 1;
                }
            }
        }
        count
    }

    fn successor(&self, cell: Cell, live_neighbors: u8) -> Cell {
        if cell.is_alive() {
            match live_neighbors {
                // Survival: the cell carries over untouched.
                2 | 3 => cell,
                // Under- or overpopulated: the cell begins dying.
                _ => Cell::dying(self.fade_steps),
            }
        } else {
            match live_neighbors {
                // Birth overrides any partial fade.
                3 => Cell::Alive,
                _ => cell.fade(),
            }
        }
    }

    /// Advances the whole grid one generation: every cell's successor
    /// is staged from the current buffer, then the staged buffer is
    /// committed. Reads never see this generation's writes, so the
    /// result is independent of visiting order.
    pub fn advance_generation(&mut self) {
        for y in 0..self.grid.height() as isize {
            for x in 0..self.grid.width() as isize {
                let next = self.successor(self.grid.get(x, y), self.live_neighbors(x, y));
                self.grid.set_next(x, y, next);
            }
        }
        self.grid.commit();
        self.generation += 1;
        trace!("advanced to generation {}", self.generation);
    }

    fn in_bounds(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.grid.width() && (y as usize) < self.grid.height()
    }
}

impl CellAutomata for FadingLife {
    fn describe(&self) -> String {
        format!(
            "Fading Life ({}x{}, {} step fade)",
            self.grid.width(),
            self.grid.height(),
            self.fade_steps
        )
    }

    fn update(&mut self) {
        self.advance_generation();
    }

    fn draw(&self, screen: &mut [u8]) {
        debug_assert_eq!(screen.len(), 4 * self.grid.cell_count());
        for (cell, pix) in self.grid.cells().zip(screen.chunks_exact_mut(4)) {
            let shade = self.polarity.display(cell.vitality(self.fade_steps));
            let gray = (shade * 255.0).round() as u8;
            pix.copy_from_slice(&[gray, gray, gray, 0xff]);
        }
    }

    fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    fn randomize(&mut self) {
        let mut rng = seeded_rng();
        self.grid.clear();
        for y in 0..self.grid.height() as isize {
            for x in 0..self.grid.width() as isize {
                if randomize::f32_half_open_right(rng.next_u32()) < SOUP_DENSITY {
                    self.grid.set(x, y, Cell::Alive);
                }
            }
        }
        self.generation = 0;
    }

    fn toggle(&mut self, x: isize, y: isize) -> bool {
        if self.in_bounds(x, y) {
            let was_alive = self.grid.get(x, y).is_alive();
            let cell = if was_alive { Cell::Dead } else { Cell::Alive };
            self.grid.set(x, y, cell);
            !was_alive
        } else {
            false
        }
    }

    fn set_line(&mut self, x0: isize, y0: isize, x1: isize, y1: isize, alive: bool) {
        // Clamp the start and draw until the line leaves the grid.
        let x0 = x0.max(0).min(self.grid.width() as isize);
        let y0 = y0.max(0).min(self.grid.height() as isize);
        let cell = if alive { Cell::Alive } else { Cell::Dead };
        for (x, y) in line_drawing::Bresenham::new((x0, y0), (x1, y1)) {
            if self.in_bounds(x, y) {
                self.grid.set(x, y, cell);
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn life(width: usize, height: usize, fade_steps: u32) -> FadingLife {
        FadingLife::new(width, height, fade_steps, Polarity::AliveHigh).unwrap()
    }

    fn alive_set(life: &FadingLife) -> HashSet<(isize, isize)> {
        let mut set = HashSet::new();
        for y in 0..life.grid.height() as isize {
            for x in 0..life.grid.width() as isize {
                if life.cell(x, y).is_alive() {
                    set.insert((x, y));
                }
            }
        }
        set
    }

    #[test]
    fn invalid_configuration_is_fatal_at_construction() {
        assert!(FadingLife::new(0, 8, 4, Polarity::AliveLow).is_err());
        assert!(matches!(
            FadingLife::new(8, 8, 0, Polarity::AliveLow),
            Err(LifeError::InvalidFadeSteps(0))
        ));
    }

    #[test]
    fn neighbor_count_sees_wrapped_adjacency() {
        let mut life = life(3, 3, 4);
        life.seed(&[(0, 0)]);
        // On a 3x3 torus every other cell is adjacent to (0, 0).
        assert_eq!(life.live_neighbors(1, 1), 1);
        assert_eq!(life.live_neighbors(2, 2), 1);
        // The live cell itself is not its own neighbor.
        assert_eq!(life.live_neighbors(0, 0), 0);
    }

    #[test]
    fn corner_cells_are_adjacent_across_both_edges() {
        let mut life = life(6, 6, 4);
        life.seed(&[(0, 0)]);
        assert_eq!(life.live_neighbors(5, 5), 1);
        assert_eq!(life.live_neighbors(2, 2), 0);
    }

    #[test]
    fn birth_requires_exactly_three_live_neighbors() {
        let mut life = life(6, 6, 4);
        life.seed(&[(1, 1), (2, 1), (3, 1)]);
        life.advance_generation();
        assert!(life.cell(2, 0).is_alive());
        assert!(life.cell(2, 2).is_alive());
        // Two neighbors are not enough to spawn anything.
        assert!(!life.cell(1, 0).is_alive());
    }

    #[test]
    fn birth_overrides_a_partial_fade() {
        // A blinker: the cells at the ends die and start fading, then
        // get reborn one generation later while still mid-fade.
        let mut life = life(5, 5, 6);
        life.seed(&[(1, 2), (2, 2), (3, 2)]);
        life.advance_generation();
        assert!(matches!(life.cell(1, 2), Cell::Fading(_)));
        life.advance_generation();
        assert!(life.cell(1, 2).is_alive());
    }

    #[test]
    fn survival_keeps_the_cell_value_untouched() {
        let mut life = life(6, 6, 4);
        life.seed(&[(1, 1), (2, 1), (1, 2), (2, 2)]);
        life.advance_generation();
        assert_eq!(life.cell(1, 1), Cell::Alive);
        assert_eq!(life.cell(2, 2), Cell::Alive);
    }

    #[test]
    fn lonely_cell_fades_out_over_exactly_fade_steps_generations() {
        let steps = 5;
        let mut life = life(7, 7, steps);
        life.seed(&[(3, 3)]);

        let mut last = life.cell(3, 3).vitality(steps);
        for gen in 1..=steps as u64 {
            life.advance_generation();
            let cell = life.cell(3, 3);
            let v = cell.vitality(steps);
            assert!(v < last, "generation {gen}: shade {v} did not move toward dead");
            last = v;
            if gen < steps as u64 {
                assert_ne!(cell, Cell::Dead, "fully dead too early, at generation {gen}");
            } else {
                assert_eq!(cell, Cell::Dead);
            }
        }
    }

    #[test]
    fn overcrowded_cell_begins_dying() {
        let mut life = life(6, 6, 4);
        life.seed(&[(2, 2), (1, 1), (2, 1), (3, 1), (1, 2)]);
        life.advance_generation();
        assert_eq!(life.cell(2, 2), Cell::dying(4));
    }

    #[test]
    fn block_still_life_is_stable_indefinitely() {
        let block = [(2, 2), (3, 2), (2, 3), (3, 3)];
        let mut life = life(6, 6, 4);
        life.seed(&block);
        let initial = alive_set(&life);
        for _ in 0..16 {
            life.advance_generation();
            assert_eq!(alive_set(&life), initial);
        }
    }

    #[test]
    fn glider_translates_one_diagonal_step_every_four_generations() {
        let glider = [(0, 0), (2, 0), (1, 1), (2, 1), (1, 2)];
        let mut life = life(10, 10, 3);
        let seeded: Vec<(isize, isize)> = glider.iter().map(|&(x, y)| (x + 2, y + 2)).collect();
        life.seed(&seeded);

        for _ in 0..4 {
            life.advance_generation();
        }

        let expected: HashSet<(isize, isize)> =
            seeded.iter().map(|&(x, y)| ((x + 1) % 10, (y + 1) % 10)).collect();
        assert_eq!(alive_set(&life), expected);
    }

    #[test]
    fn glider_wraps_around_the_torus() {
        let glider = [(0, 0), (2, 0), (1, 1), (2, 1), (1, 2)];
        let mut life = life(8, 8, 2);
        life.seed(&glider);
        // 32 generations move the glider a full lap on an 8x8 torus.
        for _ in 0..32 {
            life.advance_generation();
        }
        assert_eq!(
            alive_set(&life),
            glider.iter().copied().collect::<HashSet<_>>()
        );
    }

    #[test]
    fn every_staging_cell_is_overwritten_before_commit() {
        // Plant a stale value in the staging buffer; a generation must
        // fully rewrite it rather than let it leak through the commit.
        let mut life = life(5, 5, 4);
        life.grid.set_next(3, 3, Cell::Alive);
        life.advance_generation();
        assert_eq!(alive_set(&life), HashSet::new());
        assert_eq!(life.cell(3, 3), Cell::Dead);
    }

    #[test]
    fn generation_counter_tracks_advances() {
        let mut life = life(4, 4, 2);
        assert_eq!(life.generation(), 0);
        life.advance_generation();
        life.advance_generation();
        assert_eq!(life.generation(), 2);
    }

    #[test]
    fn shade_respects_polarity_at_the_boundary() {
        let mut dark_alive = FadingLife::new(4, 4, 3, Polarity::AliveLow).unwrap();
        dark_alive.seed(&[(1, 1)]);
        assert_eq!(dark_alive.shade(1, 1), 0.0);
        assert_eq!(dark_alive.shade(0, 0), 1.0);

        let mut bright_alive = FadingLife::new(4, 4, 3, Polarity::AliveHigh).unwrap();
        bright_alive.seed(&[(1, 1)]);
        assert_eq!(bright_alive.shade(1, 1), 1.0);
        assert_eq!(bright_alive.shade(0, 0), 0.0);
    }
}
