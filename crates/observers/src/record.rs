use pivot_core::Observer;

use crate::traits::{CanStopEarly, HasIterate, HasIteration, HasResidual};

/// One observed event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub iteration: usize,
    pub x: f64,
    pub residual: f64,
}

/// An observer that keeps the history of every event it sees.
///
/// With [`Recorder::with_limit`] the recorder stops the solver once the
/// history holds `limit` records, which bounds the work of a solve from the
/// outside.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    records: Vec<Record>,
    limit: Option<usize>,
}

impl Recorder {
    /// Creates a recorder that never stops the solver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recorder that stops the solver once it holds `limit` records.
    ///
    /// The recorder can only act on an event it has already seen, so every
    /// event is recorded before the limit is checked. A limit of zero
    /// therefore behaves like a limit of one: the first event is kept and
    /// stops the solver.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            records: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Returns the recorded history in event order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the solver variable of each record.
    #[must_use]
    pub fn xs(&self) -> Vec<f64> {
        self.records.iter().map(|record| record.x).collect()
    }

    /// Returns the residual of each record.
    #[must_use]
    pub fn residuals(&self) -> Vec<f64> {
        self.records.iter().map(|record| record.residual).collect()
    }

    /// Consumes the recorder, returning its history.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    fn push<E, A>(&mut self, event: &E) -> Option<A>
    where
        E: HasIteration + HasIterate + HasResidual,
        A: CanStopEarly,
    {
        self.records.push(Record {
            iteration: event.iteration(),
            x: event.iterate(),
            residual: event.residual(),
        });

        self.limit
            .is_some_and(|limit| self.records.len() >= limit)
            .then(A::stop_early)
    }
}

impl<E, A> Observer<E, A> for Recorder
where
    E: HasIteration + HasIterate + HasResidual,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.push(event)
    }
}

/// Allows `&mut Recorder` to be passed to solvers that take an observer by
/// value, so the history can be read after the solve completes.
impl<E, A> Observer<E, A> for &mut Recorder
where
    E: HasIteration + HasIterate + HasResidual,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).push(event)
    }
}
