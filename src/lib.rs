//! postal-route-planner core
//!
//! Partitions a pool of postal codes into ordered day routes, either by
//! capacity (repeated nearest-neighbor restarts from a start code) or by
//! spatial clustering of geocoded coordinates.

pub mod cluster;
pub mod code;
pub mod distance;
pub mod geocode;
pub mod solver;
pub mod traits;
