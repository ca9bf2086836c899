pub mod collision;
pub mod constants;
pub mod map;
pub mod players;
pub mod protocol;

pub use collision::{ConvexShape, HexShape, ObstacleRegistry, RectShape, collides};
pub use map::generate_maze;
pub use players::PlayerPose;
pub use protocol::{CellCoord, CuboidPlacement, Edge, MazeLayout, MazeParams, PointPlacement};
