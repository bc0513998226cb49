mod draw_room;
mod draw_wall;

pub use draw_room::{DrawRoom, MIN_ROOM_SIZE};
pub use draw_wall::{DrawWall, MIN_WALL_LENGTH};
