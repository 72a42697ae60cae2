/// Watches a scoring run one event at a time.
///
/// The harness instantiates this as `Observer<Event<'_>, Action>`: it reports
/// each variant's start, every scored trial, any count overrun, and the final
/// report. Returning `Some(Action::StopEarly)` from a start or trial event ends
/// the variant with a `Stopped` verdict. Whatever is returned for the final
/// report is ignored, since scoring is already over.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer. `()` observes nothing.
pub trait Observer<E, A> {
    /// Observes an event and optionally returns a control action.
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
