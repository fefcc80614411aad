pub mod health_log;
