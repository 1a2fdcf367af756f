pub mod extract;

pub use extract::{IdPath, ValidJson};
