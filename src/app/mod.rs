//! 应用层

pub mod students;
