// Stage geometry, kinematic bodies and rectangle overlap
//
// Fighters are simple boxes driven by per-frame constants; rigid-body
// simulation is unnecessary, parry2d only answers overlap queries.

pub mod body;
pub mod collision;
pub mod world;

pub use body::{Body, Motion, StepResult};
pub use collision::Rect;
pub use world::{Arena, SCREEN_HEIGHT, SCREEN_WIDTH};
