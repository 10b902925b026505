// Domain layer - chart data and configuration models
pub mod chart_config;
pub mod error;
pub mod payload;
pub mod row;
