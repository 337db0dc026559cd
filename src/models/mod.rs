pub mod event;
pub mod profile;
pub mod window;

pub use event::{AuthEvent, AuthResult};
pub use profile::{builtin_profiles, UserProfile};
pub use window::TimeWindow;
