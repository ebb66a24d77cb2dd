pub mod augmented_matrix;
pub mod input;
pub mod presentation;
pub mod solution_kind;
pub mod solver;
pub mod zero_test;
