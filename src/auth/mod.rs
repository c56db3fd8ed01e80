pub mod guard;
pub mod session;

pub use guard::RequireAuth;
pub use session::{Session, SessionCtx};
