//! Presentation helpers used by the feed composer
//!
//! The current instant comes from an injected [`Clock`] and the language from
//! an explicit [`Locale`](chirp_common::Locale), so listings are reproducible
//! under test.

mod clock;
mod excerpt;
mod relative_time;

pub use clock::{Clock, FixedClock, SystemClock};
pub use excerpt::excerpt;
pub use relative_time::RelativeTimeFormatter;
