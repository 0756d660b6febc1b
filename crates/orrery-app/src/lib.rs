//! Frame orchestration: the orbit camera and the fixed-timestep frame driver
//! that tie the scene, overlay, and rendering surfaces together.

pub mod camera;
pub mod frame;

pub use camera::OrbitCamera;
pub use frame::{FrameDriver, MAX_FRAME_TIME, PanelSink, Renderer, TICK_DT};
