pub mod data_generator;

pub use data_generator::{format_problem, generate_problem, write_problem, GeneratorConfig};
