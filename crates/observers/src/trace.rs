use std::fmt::Display;

use gravitas_core::Observer;

use crate::traits::HasTime;

/// An observer that forwards every solver event to `tracing` at trace level.
///
/// Each record carries the observer's `label` (typically the name of the
/// thing being solved), the event time, and the event's display form. The
/// observer never returns an action.
#[derive(Debug, Clone)]
pub struct TraceObserver {
    label: String,
    events: usize,
}

impl TraceObserver {
    /// Creates an observer that tags its records with `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            events: 0,
        }
    }

    /// Returns the label attached to each record.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the number of events observed so far.
    #[must_use]
    pub fn events(&self) -> usize {
        self.events
    }
}

impl<E, A> Observer<E, A> for TraceObserver
where
    E: HasTime + Display,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.events += 1;
        tracing::trace!(label = %self.label, time = event.time(), "{event}");
        None
    }
}

/// Allows `&mut TraceObserver` to be passed to solvers that take an observer
/// by value, so the event count can be read after the solve completes.
impl<E, A> Observer<E, A> for &mut TraceObserver
where
    E: HasTime + Display,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fmt;

    struct Tick(f64);

    impl HasTime for Tick {
        fn time(&self) -> f64 {
            self.0
        }
    }

    impl fmt::Display for Tick {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "tick at {}", self.0)
        }
    }

    fn feed<Obs: Observer<Tick, ()>>(mut observer: Obs, ticks: &[Tick]) {
        for tick in ticks {
            assert!(observer.observe(tick).is_none());
        }
    }

    #[test]
    fn counts_events_and_never_acts() {
        let mut obs = TraceObserver::new("Earth");

        for t in [0.0, 1.0, 2.0] {
            let action: Option<()> = obs.observe(&Tick(t));
            assert!(action.is_none());
        }

        assert_eq!(obs.label(), "Earth");
        assert_eq!(obs.events(), 3);
    }

    #[test]
    fn borrowed_observer_updates_the_owner() {
        let mut obs = TraceObserver::new("Mars");

        feed(&mut obs, &[Tick(0.5), Tick(1.5)]);

        assert_eq!(obs.events(), 2);
    }
}
