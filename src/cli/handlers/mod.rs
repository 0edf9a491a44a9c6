pub mod config;
pub mod lattice;
pub mod pairs;
pub mod split;
pub mod vectorize;
