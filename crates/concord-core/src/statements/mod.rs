//! Statement model: concepts, context, evidence, and the closed statement sum type.
//!
//! Statements are immutable value objects. Operations in the matching and dedup
//! crates read them and build new ones; nothing here mutates in place except
//! the builder-style `with_*` constructors, which consume `self`.

pub mod concept;
pub mod context;
pub mod event;
pub mod evidence;
pub mod influence;
pub mod polarity;
pub mod statement;

pub use concept::{Concept, GroundingCandidate};
pub use context::{LocationContext, TimeContext, WorldContext};
pub use event::Event;
pub use evidence::Evidence;
pub use influence::{Association, Influence};
pub use polarity::Polarity;
pub use statement::{OpaqueStatement, Statement};
