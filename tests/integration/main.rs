mod common;

mod cli;
mod config;
mod persist;
