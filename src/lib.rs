//! Circular Race Simulation Library
//!
//! A discrete-time race on a closed loop of cells that can be driven from
//! tests or the headless command-line runner.

pub mod simulation;
