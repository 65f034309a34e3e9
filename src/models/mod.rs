pub mod event;
pub mod segment;
pub mod session_state;

pub use event::{Event, STOP};
pub use segment::Segment;
pub use session_state::SessionState;
