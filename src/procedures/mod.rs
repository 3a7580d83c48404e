//! Various procedures for mutating an instance, or determining satisfiability within a context.
//!
//! For the most part these are methods accessed via an instance or a context, and primarily placed here for documentation.
//!
//! - [propagate] and the [heuristics] mutate an instance.
//! - [direction] and [preselect] inspect an instance.
//! - [look_ahead] and [solve] are applied within a context, which fixes the configuration and keeps counts.

pub mod direction;
pub mod heuristics;
pub mod look_ahead;
pub mod preselect;
pub mod propagate;
pub mod solve;
