pub mod curves;
pub mod samples;
