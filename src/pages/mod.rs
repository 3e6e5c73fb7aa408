//! Page modules.
//!
//! The site is a single route; `home` owns the section composition and
//! delegates rendering details to `components`.

pub mod home;
