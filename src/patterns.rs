//! Seed-pattern catalog. These are example inputs for the engine, not
//! part of its contract; coordinates are (x, y) pairs relative to the
//! pattern's top-left corner.

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(isize, isize)],
}

impl Pattern {
    /// Bounding-box size of the pattern.
    pub fn extent(&self) -> (isize, isize) {
        let w = self.cells.iter().map(|&(x, _)| x).max().unwrap_or(0) + 1;
        let h = self.cells.iter().map(|&(_, y)| y).max().unwrap_or(0) + 1;
        (w, h)
    }

    /// The pattern's cells translated by (dx, dy).
    pub fn offset(&self, dx: isize, dy: isize) -> Vec<(isize, isize)> {
        self.cells.iter().map(|&(x, y)| (x + dx, y + dy)).collect()
    }

    /// The pattern's cells translated to the center of a grid.
    pub fn centered(&self, width: isize, height: isize) -> Vec<(isize, isize)> {
        let (w, h) = self.extent();
        self.offset((width - w) / 2, (height - h) / 2)
    }
}

/// The basic 5-cell glider.
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 0), (1, 1), (1, 2), (2, 0), (2, 1)],
};

/// The unnamed spaceship 64P2H1V0, https://conwaylife.com/wiki/64P2H1V0
pub const SPACESHIP: Pattern = Pattern {
    name: "Spaceship (64P2H1V0)",
    cells: &[
        (0, 7),
        (1, 4), (1, 5), (1, 6), (1, 7),
        (2, 4), (2, 5),
        (3, 2),
        (4, 2), (4, 3), (4, 4), (4, 5),
        (5, 1),
        (6, 0), (6, 1), (6, 2), (6, 5),
        (7, 1), (7, 2), (7, 3),
        (8, 2),
        (9, 3), (9, 4), (9, 5), (9, 7),
        (10, 3), (10, 6), (10, 7),
        (11, 4), (11, 5), (11, 6),
        (12, 6),
        (13, 4),
        (14, 4), (14, 6),
        (15, 3),
        (16, 4), (16, 6),
        (17, 4),
        (18, 6),
        (19, 4), (19, 5), (19, 6),
        (20, 3), (20, 6), (20, 7),
        (21, 3), (21, 4), (21, 5), (21, 7),
        (22, 2),
        (23, 1), (23, 2), (23, 3),
        (24, 0), (24, 1), (24, 2), (24, 5),
        (25, 1),
        (26, 2), (26, 3), (26, 4), (26, 5),
        (27, 2),
        (28, 4), (28, 5),
        (29, 4), (29, 5), (29, 6), (29, 7),
        (30, 7),
    ],
};

/// The Gosper glider gun, https://playgameoflife.com/lexicon/Gosper_glider_gun
pub const GLIDER_GUN: Pattern = Pattern {
    name: "Gosper glider gun",
    cells: &[
        (0, 4), (0, 5),
        (1, 4), (1, 5),
        (10, 4), (10, 5), (10, 6),
        (11, 3), (11, 7),
        (12, 2), (12, 8),
        (13, 2), (13, 8),
        (14, 5),
        (15, 3), (15, 7),
        (16, 4), (16, 5), (16, 6),
        (17, 5),
        (20, 2), (20, 3), (20, 4),
        (21, 2), (21, 3), (21, 4),
        (22, 1), (22, 5),
        (24, 0), (24, 1), (24, 5), (24, 6),
        (34, 2), (34, 3),
        (35, 2), (35, 3),
    ],
};
