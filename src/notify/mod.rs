pub mod decider;
pub mod sink;
pub mod template;
