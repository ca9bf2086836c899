pub mod overlap;
pub mod registry;
pub mod shapes;

pub use overlap::{collides, overlap_hex_vs_hex, overlap_rect_vs_hex};
pub use registry::ObstacleRegistry;
pub use shapes::{ConvexShape, HexShape, RectShape};
