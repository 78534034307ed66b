use super::Point;

/// Event emitted by a sweep after each parameter is solved.
#[derive(Debug)]
pub struct Event<'a, I, O> {
    /// Position of the parameter in the sweep, starting at zero.
    pub index: usize,

    /// The point just solved.
    pub point: &'a Point<I, O>,
}
