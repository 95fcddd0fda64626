//! Per-flow template context and rendering.
//!
//! Templates use minijinja syntax (`{{ get_user.id }}`) and resolve against
//! the API descriptors plus any step results saved so far. Rendering is
//! strict: a name that is not in the context is an error, never an empty
//! string.
//!
//! Structured values (objects and arrays) are rendered by serializing them to
//! JSON text, substituting, then parsing the result back, so a whole request
//! body may embed expressions. Plain strings are rendered directly and other
//! scalars pass through untouched.
mod context;


pub use context::TemplateContext;
