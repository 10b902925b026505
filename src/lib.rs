// Time-series payload to multi-series line chart configuration
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
