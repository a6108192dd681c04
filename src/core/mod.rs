pub mod config;
pub mod error;
pub mod routes;
pub mod startup;
pub mod state;
pub mod tracing_init;

#[cfg(test)]
pub(crate) mod test_support;
