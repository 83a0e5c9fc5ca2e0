// Classification engine: pattern matching, scoring, the decision table and
// the degraded-mode fallback. Everything here is pure and infallible once a
// lexicon has been built.

pub mod batch;
pub mod classifier;
pub mod fallback;
pub mod lexicon;
pub mod matcher;
pub mod scorer;
