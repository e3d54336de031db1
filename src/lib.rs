//! Business OS - AI-assisted startup workspace core.
//!
//! This crate implements the shared venture state, the navigation/gating
//! state machine derived from it, and the generator workflows that fill it
//! in by calling a hosted generative-AI model.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
