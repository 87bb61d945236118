pub mod init;

pub use init::{parse_problem, read_problem};
