//! Configuration tests, organised per concern.

mod config_parsing;
mod config_validation;
