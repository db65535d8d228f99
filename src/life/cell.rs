/// Per-cell state of the automaton.
///
/// A live cell is exactly `Alive`; everything else is some shade of dead.
/// `Fading(r)` means the cell is `r` generations away from being fully
/// dead, so the fade chain is `Alive -> Fading(n-1) -> ... -> Fading(1)
/// -> Dead` for a fade length of `n` generations. Keeping this as a
/// tagged state instead of a float means the rule logic never has to
/// compare floating point values against an "alive" sentinel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    Alive,
    Fading(u32),
    #[default]
    Dead,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// State a live cell enters when the rules kill it. With a fade
    /// length of 1 there is no intermediate shade at all.
    pub fn dying(fade_steps: u32) -> Self {
        if fade_steps > 1 {
            Cell::Fading(fade_steps - 1)
        } else {
            Cell::Dead
        }
    }

    /// One generation of decay. Saturates at `Dead`, so repeated fading
    /// converges instead of overshooting. Identity on `Alive`; the
    /// engine only fades non-live cells.
    #[must_use]
    pub fn fade(self) -> Self {
        match self {
            Cell::Alive => Cell::Alive,
            Cell::Fading(1) => Cell::Dead,
            Cell::Fading(r) => Cell::Fading(r - 1),
            Cell::Dead => Cell::Dead,
        }
    }

    /// Canonical display scalar: 1.0 is fully alive, 0.0 fully dead.
    ///
    /// The first fade generation shows half vitality and later ones
    /// divide the lower half evenly, so the shade is strictly
    /// decreasing until it reaches 0.0 after `fade_steps` generations.
    pub fn vitality(self, fade_steps: u32) -> f64 {
        match self {
            Cell::Alive => 1.0,
            Cell::Dead => 0.0,
            Cell::Fading(r) => 0.5 * f64::from(r) / f64::from(fade_steps.saturating_sub(1).max(1)),
        }
    }
}

/// Which end of the [0, 1] display range means "alive".
///
/// Rule logic is polarity-free; this mapping exists only at the
/// rendering boundary. `AliveLow` is the historical canvas convention
/// (alive draws darkest, dead fades to white).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Polarity {
    #[default]
    AliveLow,
    AliveHigh,
}

impl Polarity {
    pub fn display(self, vitality: f64) -> f64 {
        match self {
            Polarity::AliveLow => 1.0 - vitality,
            Polarity::AliveHigh => vitality,
        }
    }
}
