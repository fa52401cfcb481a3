// Strategy engines: the MILP optimizer and the blind baseline
pub mod blind;
pub mod optimizer;
pub mod worker;

// Re-export key operations
pub use blind::simulate_blind;
pub use optimizer::optimize;
pub use worker::solve_with_deadline;
