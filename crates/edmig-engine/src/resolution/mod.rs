pub mod presenter;
pub mod renderer;
pub mod resolver;
pub mod result;

pub use presenter::{CandidateOption, ChoicePresenter};
pub use renderer::DiagnosticRenderer;
pub use resolver::{ConflictResolver, IGNORE_EDITABLE, LEAVE_UNRESOLVED};
pub use result::Outcome;
