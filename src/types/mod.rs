pub mod config;
pub mod entity;
pub mod report;
pub mod resume;
pub mod scoring;
