// calculator-microservice - Arithmetic HTTP microservice
// Author: kelexine (https://github.com/kelexine)

pub mod calculator;
pub mod cli;
pub mod config;
pub mod error;
pub mod metrics;
pub mod server;
pub mod utils;
