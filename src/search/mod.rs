//! Interval bisection for the computer guesser.
//!
//! `RangeBisector` keeps the candidate interval and proposes its midpoint.
//! It trusts the feedback it is given: an inconsistent human can drive the
//! interval empty, which callers observe through `propose()` returning `None`.

pub mod bisector;

pub use bisector::{Feedback, RangeBisector};
