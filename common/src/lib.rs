#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod parse;

pub use parse::*;

use fnv::FnvBuildHasher;

pub type HashMap<K, V> = std::collections::HashMap<K, V, FnvBuildHasher>;
