#![allow(missing_docs, dead_code)]
//! Shared benchmark support: input generators and size tiers.

pub mod generators;
pub mod harness;
