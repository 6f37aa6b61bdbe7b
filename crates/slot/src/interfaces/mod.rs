mod args;
mod spec;

pub use args::{SlotArgs, SlotArgsBuilder};
pub use spec::SlotSpec;
