pub mod document;
pub mod hit;
pub mod input;
pub mod model;
pub mod project;
pub mod view;

pub use document::PatternDocument;
pub use input::PatternEditor;
pub use model::{arm_points, PatternConfig, StateGrid, LED_RADIUS, LED_SPACING};
pub use view::{ViewTransform, ZOOM_STEP};
