mod args;

pub use args::{LayoutArgs, LayoutArgsBuilder};
