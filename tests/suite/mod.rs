mod catalog;
mod config;
mod manager;
