//! Pointnoise library - point-cloud terrain from layered simplex noise

pub mod camera;
pub mod cli;
pub mod controls;
pub mod error;
pub mod export;
pub mod field;
pub mod noise;
pub mod params;
pub mod rendering;
pub mod stats;
