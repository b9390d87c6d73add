//! Client for the thesis writing endpoints.
//!
//! [`ScholarApi`] wraps the two HTTP endpoints. [`WritingSession`] keeps the
//! outline and topic from the first step so sections can be drafted one at a
//! time afterwards.

pub mod api;
pub mod error;
pub mod session;

pub use api::ScholarApi;
pub use error::ClientError;
pub use session::WritingSession;
