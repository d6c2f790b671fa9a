pub mod backend;
pub mod payment;
pub mod route;
pub mod session;

pub use backend::{BookingBackend, ClientError, MockBookingBackend};
pub use payment::PaymentRequest;
pub use route::Route;
pub use session::{
    AuthenticatedUser, BsmOperator, BsmProfile, MemorySessionStore, Session, SessionError,
    SessionStore, StorageKey, UserProfile, UserRole,
};
