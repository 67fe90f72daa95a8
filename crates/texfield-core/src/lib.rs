//! texfield-core: inline math for plain form fields, without browser dependencies.
//!
//! This crate provides:
//! - `split_segments` - splits text into plain and `$...$` math segments
//! - `render` / `RenderedView` - whole-string rendering for live previews
//! - `render_in_place` - delimiter scanning pass that keeps going past bad spans
//! - `LiveField<S, E>` - per-keystroke render-and-validate loop, generic over
//!   a `FieldSurface` (the DOM in practice) and a `MathEngine`
//! - `field_markup` - the wrapper markup the browser layer looks for

pub mod auto_render;
pub mod config;
pub mod entities;
pub mod error;
pub mod live;
pub mod markup;
pub mod math;
pub mod render;
pub mod segment;
pub mod validate;

pub use auto_render::{Delimiter, render_in_place};
pub use entities::decode_entities;
pub use config::{MarkupConfig, WidgetConfig, WidgetMode};
pub use error::{ConfigError, RenderError};
pub use live::{FieldSurface, LiveField};
pub use markup::field_markup;
pub use math::{MathEngine, PulldownEngine, render_math};
pub use render::{RenderedView, render, render_segments};
pub use segment::{DELIMITER, Segment, SegmentKind, split_segments};
pub use validate::{UNCLOSED_MESSAGE, Validity, check_balance, even_dollars};
