//! ROI editor - interaction core for drawing polygonal regions of interest
//!
//! The editor sits between a host that renders an image with polygon
//! overlays and an owner that stores the polygon list. It turns pointer,
//! keyboard and toolbar events into intents ([`EditorAction`]) and keeps
//! its own drawing session, selection and undo history in step with the
//! state the owner publishes ([`EditorInput`]).

pub mod config;
pub mod constants;
pub mod editor;
pub mod keybindings;
pub mod message;
pub mod model;
pub mod owner;
pub mod replay;
pub mod state;

pub use config::{ConfigError, EditorConfig, LogLevel};
pub use editor::{EditorMode, RoiEditor};
pub use message::{EditorAction, EditorEvent, EditorInput, KeyOutcome};
pub use model::{CanvasRect, Color, Point, Polygon, PolygonDraft, PolygonId};
pub use owner::PolygonOwner;
pub use replay::{ReplayError, ReplayReport, SessionScript};
