pub mod engine;
pub mod heuristics;
pub mod model;
pub mod propagation;
pub mod search;
pub mod stats;
pub mod work_list;
