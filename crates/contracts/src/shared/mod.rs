pub mod client_config;
