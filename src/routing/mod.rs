pub mod guard;
pub mod session;
pub mod table;

pub use guard::{evaluate, GuardDecision, GuardPaths, RouteGuardRule, SessionState};
pub use session::{OnboardingAnswers, SessionStore, UserProfile};
pub use table::{Route, RouteAccess, RouteTable};
