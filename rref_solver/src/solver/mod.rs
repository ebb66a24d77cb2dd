pub mod solve_report;
pub mod solver_builder;
pub mod solver_params;
