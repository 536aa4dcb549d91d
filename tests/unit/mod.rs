//! Unit test modules.

mod classifier_test;
mod evaluator_test;
mod geometry_test;
