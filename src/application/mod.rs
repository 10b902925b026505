// Application layer - chart pipeline use cases
pub mod chart_service;
pub mod config_assembler;
pub mod descriptor_builder;
pub mod formatters;
pub mod renderer;
pub mod reshaper;
