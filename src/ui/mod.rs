pub mod app_state;
pub mod controllers;
pub mod pages;
pub mod web_server;
