pub mod pending_operation;
pub mod session_snapshot;
pub mod session_state;
