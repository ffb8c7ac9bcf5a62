//! Form state for the authentication screens
//!
//! Owns the three pieces the screens observe: field values, the per-field
//! validation error map, and the submission lifecycle. Rendering lives
//! elsewhere; anything that can read these structs can draw a form.

mod errors;
mod field;
mod form_state;
mod rules;
mod submit;

pub use errors::ValidationErrors;
pub use field::FormField;
pub use form_state::{Form, RegisterForm, SignInForm};
pub use submit::{Submission, SubmitOutcome, SubmitState};
