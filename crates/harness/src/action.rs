/// Actions an observer can take during scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop scoring the current variant and report the trials seen so far.
    StopEarly,
}
