//! Lead delivery — transports that carry a captured lead off the page.

pub mod submit;
