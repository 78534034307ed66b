/// Watches solver events and optionally steers the iteration.
///
/// Each solver defines its own event type `E` and action type `A`. Returning
/// `None` lets the solver carry on; returning `Some(action)` asks it to do
/// something else, such as stopping early.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is an
/// observer that never intervenes.
pub trait Observer<E, A> {
    /// Handles one event and returns the action the solver should take.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
