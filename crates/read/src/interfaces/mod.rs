mod args;

pub use args::{ReadArgs, ReadArgsBuilder};
