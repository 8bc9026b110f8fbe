pub mod context;
pub mod storage;

pub use context::{AuthContext, AuthState};
