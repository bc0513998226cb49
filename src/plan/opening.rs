//! Doors and windows carried by walls.
//!
//! These are plain data records: the kernel stores and serializes them
//! with their wall but contains no placement logic.

use serde::{Deserialize, Serialize};

use crate::math::Point2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorKind {
    #[default]
    Single,
    Double,
    Sliding,
    French,
}

/// Which way a hinged door opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorSwing {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Door {
    pub position: Point2,
    pub width: f64,
    pub kind: DoorKind,
    pub swing: Option<DoorSwing>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowKind {
    #[default]
    Standard,
    Bay,
    Sliding,
    French,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub position: Point2,
    pub width: f64,
    pub height: f64,
    pub kind: WindowKind,
}
