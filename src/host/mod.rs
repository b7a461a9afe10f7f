//! # Host Module
//!
//! The tabletop host as seen from this script: chat events in, object
//! lookups, chat messages out.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.9.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial ports with in-memory store and stdout sink

pub mod protocol;
pub mod sink;
pub mod store;

pub use protocol::{
    AttributeRecord, CharacterRecord, ChatEvent, Graphic, GraphicSubtype, MessageType,
    SelectedObject,
};
pub use sink::{ChatMessage, FeedbackSink, RecordingSink, StdoutSink};
pub use store::{InMemoryStore, ObjectStore, StoreError};
