#![allow(dead_code)]

pub mod architecture;
pub mod config;
pub mod http;
pub mod logs;
pub mod ws;
