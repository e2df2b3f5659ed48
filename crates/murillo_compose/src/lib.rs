//! Template compositing for the Murillo content generation library.
//!
//! Applies a user-supplied overlay template to a generated post image:
//! either stretched edge to edge or scaled down to a bottom-centered
//! watermark. Payloads enter and leave as base64, matching the rest of the
//! pipeline; the merged result is always PNG.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod compositor;

pub use compositor::TemplateCompositor;
