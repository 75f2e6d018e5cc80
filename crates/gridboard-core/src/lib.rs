#![forbid(unsafe_code)]

//! Core: widget model, column buckets, and host events.
//!
//! Everything here is plain data. Persistence lives in `gridboard-runtime`,
//! width classification in `gridboard-layout`, and view construction in
//! `gridboard-widgets`.

pub mod bucket;
pub mod event;
pub mod widget;

pub use bucket::Bucket;
pub use event::{DragEnd, HostEvent};
pub use widget::{
    IdGenerator, SequentialIds, TimestampIds, WidgetData, WidgetId, WidgetKind, WidgetList,
    default_widgets,
};
