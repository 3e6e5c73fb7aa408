//! Static site content.

pub mod resume;
