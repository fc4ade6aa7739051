//! Daily session state, the rules that mutate it, and the deadline monitor.

pub mod clock;
pub mod constants;
pub mod deadline;
pub mod quests;
pub mod session;
pub mod session_state;

pub use clock::{Clock, FixedClock, SystemClock};
pub use deadline::{DeadlineMonitor, TickInfo};
pub use quests::{QuestId, QuestLedger};
pub use session::{Command, DayTransition, Outcome, Session, SessionEvent, SessionSnapshot};
pub use session_state::{DateKey, SessionState};
