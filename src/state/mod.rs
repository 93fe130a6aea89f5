//! Editor state: the drawing session and the polygon history.

mod drawing;
mod history;
mod snapshot;

pub use drawing::{ClickOutcome, DrawingSession, PointUndo, SessionPhase};
pub use history::{HistoryManager, Observation};
pub use snapshot::HistorySnapshot;
