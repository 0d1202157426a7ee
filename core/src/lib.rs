//! Core library for fitrec: immutable catalogs, the workout and meal
//! recommenders, the rule-based health scorer, and the lazily-loaded
//! artifact registry. All I/O beyond reading artifact files lives in the
//! CLI crate.

pub mod catalog;
pub mod fuzzy;
pub mod health;
pub mod meal;
pub mod models;
pub mod registry;
pub mod workout;
