pub mod session_guard;

pub use session_guard::{PathClass, RoutePolicy, protect, session_guard};
