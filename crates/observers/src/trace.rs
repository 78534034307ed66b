//! Structured logging observer.

use pivot_core::Observer;
use tracing::{debug, warn};

use crate::traits::{HasIterate, HasIteration, HasResidual};

/// An observer that emits one `tracing` event per solver event.
///
/// Finite residuals are logged at `DEBUG`; NaN or infinite residuals (which
/// includes failed evaluations) at `WARN`. Every record carries the label
/// given at construction so interleaved solves can be told apart.
///
/// The observer never intervenes. Pass `&mut TraceObserver` to keep the
/// event count after the solve.
///
/// ```ignore
/// let mut trace = TraceObserver::new("beta=0.1");
/// equation::find_root(&model, &problem, Start::Guess(PI), &config, &mut trace)?;
/// assert!(trace.events() > 0);
/// ```
#[derive(Debug, Clone)]
pub struct TraceObserver {
    label: String,
    events: usize,
}

impl TraceObserver {
    /// Creates an observer that tags every record with `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            events: 0,
        }
    }

    /// Returns the label attached to every record.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the number of events seen so far.
    #[must_use]
    pub fn events(&self) -> usize {
        self.events
    }

    fn log<E>(&mut self, event: &E)
    where
        E: HasIteration + HasIterate + HasResidual,
    {
        self.events += 1;

        let iteration = event.iteration();
        let x = event.iterate();
        let residual = event.residual();

        if residual.is_finite() {
            debug!(label = %self.label, iteration, x, residual, "evaluated");
        } else {
            warn!(label = %self.label, iteration, x, residual, "non-finite residual");
        }
    }
}

impl<E, A> Observer<E, A> for TraceObserver
where
    E: HasIteration + HasIterate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.log(event);
        None
    }
}

/// Allows `&mut TraceObserver` to be passed to solvers that take an observer
/// by value, so the event count can be read after the solve completes.
impl<E, A> Observer<E, A> for &mut TraceObserver
where
    E: HasIteration + HasIterate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).log(event);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use pivot_solvers::equation::{self, Config, FnEquation, Start, Status};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Buffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().expect("buffer lock").clone()).expect("utf-8 logs")
        }
    }

    impl io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("buffer lock").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Buffer {
        type Writer = Buffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture<T>(f: impl FnOnce() -> T) -> (T, String) {
        let buffer = Buffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(buffer.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .without_time()
            .finish();

        let value = tracing::subscriber::with_default(subscriber, f);
        (value, buffer.contents())
    }

    #[test]
    fn logs_every_evaluation() {
        let eq = FnEquation(|x: f64| x * x - 2.0);
        let mut trace = TraceObserver::new("sqrt2");

        let (solution, logs) = capture(|| {
            equation::find_root(&eq, &eq, Start::Bracket([0.0, 2.0]), &Config::default(), &mut trace)
                .expect("valid inputs")
        });

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(trace.events(), solution.evals);
        assert_eq!(logs.lines().count(), solution.evals);
        assert!(logs.lines().all(|line| line.contains("DEBUG") && line.contains("sqrt2")));
    }

    #[test]
    fn warns_on_non_finite_residuals() {
        let eq = FnEquation(|x: f64| 1.0 / x);
        let mut trace = TraceObserver::new("pole");

        let (solution, logs) = capture(|| {
            equation::find_root(&eq, &eq, Start::Guess(0.0), &Config::default(), &mut trace)
                .expect("valid inputs")
        });

        assert_eq!(solution.status, Status::NonFinite);
        assert_eq!(trace.events(), 1);
        assert!(logs.contains("WARN"));
        assert!(logs.contains("non-finite residual"));
    }

    #[test]
    fn never_intervenes() {
        let mut trace = TraceObserver::new("sweep");
        let eq = FnEquation(|x: f64| x - 3.0);

        let solution =
            equation::find_root(&eq, &eq, Start::Guess(0.0), &Config::default(), &mut trace)
                .expect("valid inputs");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(trace.label(), "sweep");
    }
}
