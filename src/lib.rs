pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod nutrition;
pub mod outside_food;
pub mod plan;
pub mod planner;
pub mod profile;
