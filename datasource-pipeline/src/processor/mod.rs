//! Processor module for the datasource pipeline.
//!
//! Transforms entity change events into item tracking events.

mod change_processor;
mod events;

pub use change_processor::ChangeProcessor;
pub use events::{EntityChange, TrackingEvent};
