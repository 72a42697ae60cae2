use optbench_core::Observer;

/// Forwards every event to two observers.
///
/// Both observers always see the event. If both return an action, the
/// first observer's wins.
#[derive(Debug, Clone, Default)]
pub struct Tee<O1, O2> {
    pub first: O1,
    pub second: O2,
}

impl<O1, O2> Tee<O1, O2> {
    pub fn new(first: O1, second: O2) -> Self {
        Self { first, second }
    }
}

impl<E, A, O1, O2> Observer<E, A> for Tee<O1, O2>
where
    O1: Observer<E, A>,
    O2: Observer<E, A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let first = self.first.observe(event);
        let second = self.second.observe(event);
        first.or(second)
    }
}
