//! Element-wise sum of two generated integer arrays, computed once on a
//! single thread and once in parallel chunks, then timed and cross-checked.

pub mod bench;
pub mod config;
pub mod generator;
pub mod parallel;
pub mod summer;
pub mod timing;
pub mod verify;
