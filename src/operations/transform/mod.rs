mod translate_room;
mod translate_wall;

pub use translate_room::{SnapMode, TranslateRoom};
pub use translate_wall::TranslateWall;
