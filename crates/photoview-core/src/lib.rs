pub mod animation;
pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod fling;
pub mod geometry;
pub mod script;
pub mod transform;

pub use config::PhotoViewConfig;
pub use controller::TransformController;
pub use error::{PhotoViewError, Result};
pub use geometry::{Size, Vec2};
pub use transform::{RenderTransform, ViewTransformState, ZoomState};
