pub mod config;
pub mod crawler;
pub mod dedup;
pub mod error;
pub mod extract;
pub mod format;
pub mod model;
pub mod parser;
pub mod priority;
pub mod rank;
pub mod sections;
pub mod storage;
