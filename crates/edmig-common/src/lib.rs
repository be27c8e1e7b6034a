pub mod error;
pub mod formatter;
pub mod model;
pub mod naming;

pub use error::{AmbiguousResolution, ConflictError, SessionError};
pub use model::{BuildFailure, Candidate, Document};
pub use naming::NamingStrategy;
