//! Plain-record snapshot of a plan for the persistence layer.
//!
//! The kernel imposes no wire format beyond nested records of numbers
//! and strings; the snapshot is what gets handed to (and received from)
//! whatever storage backend surrounds the editor. Arena IDs are a
//! per-session concern and do not appear here.

use serde::{Deserialize, Serialize};

use super::{PlanStore, RoomData, WallData};

fn default_name() -> String {
    "Untitled Floor Plan".to_owned()
}

/// A complete floor plan as a serializable document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSnapshot {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rooms: Vec<RoomData>,
    #[serde(default)]
    pub walls: Vec<WallData>,
}

impl PlanStore {
    /// Captures the current plan contents as a snapshot document.
    #[must_use]
    pub fn to_snapshot(&self) -> PlanSnapshot {
        PlanSnapshot {
            name: default_name(),
            description: String::new(),
            rooms: self.rooms().map(|(_, r)| r.clone()).collect(),
            walls: self.walls().map(|(_, w)| w.clone()).collect(),
        }
    }

    /// Replaces the plan contents with a snapshot's. The selection is
    /// cleared; fresh arena IDs are assigned on insertion.
    pub fn load_snapshot(&mut self, snapshot: PlanSnapshot) {
        self.clear();
        for room in snapshot.rooms {
            self.add_room(room);
        }
        for wall in snapshot.walls {
            self.add_wall(wall);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::rect_2d::rect_from_corners;
    use crate::math::Point2;
    use crate::plan::{RoomKind, Selection, WallSettings};

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn sample_store() -> PlanStore {
        let mut store = PlanStore::new();
        store.add_room(RoomData::new(
            "Room 1",
            RoomKind::Living,
            rect_from_corners(p(0.0, 0.0), p(100.0, 80.0)).to_vec(),
        ));
        store.add_wall(WallData::with_settings(
            p(120.0, 0.0),
            p(120.0, 80.0),
            &WallSettings::default(),
        ));
        store
    }

    #[test]
    fn json_round_trip_preserves_the_plan() {
        let store = sample_store();
        let snapshot = store.to_snapshot();

        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: PlanSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.name, "Untitled Floor Plan");
        assert_eq!(restored.rooms.len(), 1);
        assert_eq!(restored.walls.len(), 1);
        assert_eq!(restored.rooms[0].vertices, snapshot.rooms[0].vertices);
        assert_eq!(restored.rooms[0].walls.len(), 4);
        assert_eq!(restored.walls[0].layers, snapshot.walls[0].layers);
    }

    #[test]
    fn missing_document_fields_get_defaults() {
        let snapshot: PlanSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot.name, "Untitled Floor Plan");
        assert!(snapshot.description.is_empty());
        assert!(snapshot.rooms.is_empty());
        assert!(snapshot.walls.is_empty());
    }

    #[test]
    fn load_replaces_contents_and_clears_selection() {
        let source = sample_store();
        let mut target = PlanStore::new();
        let stale = target.add_room(RoomData::new(
            "Stale",
            RoomKind::Other,
            rect_from_corners(p(0.0, 0.0), p(30.0, 30.0)).to_vec(),
        ));
        target.set_selected(Some(Selection::Room(stale)));

        target.load_snapshot(source.to_snapshot());

        assert_eq!(target.room_count(), 1);
        assert_eq!(target.wall_count(), 1);
        assert_eq!(target.selected(), None);
        let (_, room) = target.rooms().next().unwrap();
        assert_eq!(room.name, "Room 1");
    }
}
