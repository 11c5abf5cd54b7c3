pub mod batch;
pub mod parser;
pub mod sections;
