// src/types/mod.rs

pub mod geopoint;

pub use geopoint::GeoPoint;
