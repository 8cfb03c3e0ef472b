//! Decision Rules - Classical decision making under uncertainty
//!
//! This crate evaluates two-state payoff tables with the Wald, Maximax,
//! Laplace, Hurwitz and Savage rules. Tables are read leniently from
//! hand-written CSV text.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
