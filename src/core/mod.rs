pub mod calculator;
pub mod report;
pub mod session;

pub use report::Summary;
pub use session::{SessionController, StopOutcome};
