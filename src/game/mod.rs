//! Round state and the session that drives it

mod round;
mod session;

pub use round::Round;
pub use session::{Session, SessionState, SubmitError};
