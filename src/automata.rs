/// What the windowed viewer needs from an automaton: a way to advance
/// it, paint it into an RGBA frame, and edit it with the keyboard and
/// mouse. Coordinates arrive in pixel-buffer space and may be out of
/// bounds; implementations ignore what falls outside the grid.
pub trait CellAutomata {
    /// Window-title description of the automaton.
    fn describe(&self) -> String;

    /// Advances the simulation one generation.
    fn update(&mut self);

    /// Paints every cell into the RGBA frame, one pixel per cell.
    fn draw(&self, screen: &mut [u8]);

    /// Resets every cell to dead.
    fn clear(&mut self);

    /// Replaces the current state with a random soup.
    fn randomize(&mut self);

    /// Flips one cell; returns the state it was flipped to.
    fn toggle(&mut self, x: isize, y: isize) -> bool;

    /// Sets every cell on a line segment, for mouse-drag drawing.
    fn set_line(&mut self, x0: isize, y0: isize, x1: isize, y1: isize, alive: bool);
}
