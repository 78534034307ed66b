/// Control actions supported by a continuation sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the sweep after the current point.
    StopEarly,
}
