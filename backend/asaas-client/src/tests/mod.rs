mod classifier;
mod config;
mod transport;
