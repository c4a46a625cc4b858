//! Monogram t-shirt designer: a form for name, number and shirt color that
//! previews the result through a Cloudinary transformation URL.

pub mod app;
pub mod color;
pub mod constants;
pub mod error;
pub mod form;
pub mod preview;

pub use color::{ShirtColor, TextColor};
pub use error::{ParseColorError, ValidationError};
pub use form::{validate, FieldErrors, FormState};
pub use preview::{build_preview_url, PreviewConfig};
