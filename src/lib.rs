pub mod args;
pub mod coin;
pub mod config;
pub mod predictor;
pub mod rules;
pub mod session;
pub mod stats;
pub mod tracker;
pub mod ui;
