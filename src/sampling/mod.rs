//! Windowing and labeled sample generation.
//!
//! Three strategies share the same building blocks: event location, bounded
//! window extraction, a per-stream overlap guard and a quota allocator for
//! the global sample cap.

pub mod event_centered;
pub mod events;
pub mod generator;
pub mod guard;
pub mod negatives;
pub mod quota;
pub mod report;
pub mod shifted;
pub mod spec;
pub mod tiling;
pub mod window;

pub use event_centered::EventCenteredGenerator;
pub use events::{locate_events, EventIndex};
pub use generator::{build_generator, Generation, SampleGenerator, Strategy};
pub use guard::{GuardRule, OverlapGuard};
pub use negatives::NegativeSampler;
pub use quota::{QuotaAllocator, QuotaPolicy, SampleBudget};
pub use report::{GenerationReport, StreamReport};
pub use shifted::ShiftedGenerator;
pub use spec::WindowSpec;
pub use tiling::{count_windows, window_counts, TilingGenerator};
pub use window::{extract, extract_clamped, LabeledWindow, Window};
