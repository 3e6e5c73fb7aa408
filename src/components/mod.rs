//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `reveal` carries the only behavioral contract on the site (the one-shot
//! visibility latch); everything else maps static data to markup.

pub mod avatar;
pub mod badge;
pub mod markdown;
pub mod project_card;
pub mod publication_card;
pub mod resume_card;
pub mod reveal;
pub mod theme_toggle;
