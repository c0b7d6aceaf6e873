mod objects;
mod options;
mod primitives;
mod strings;

pub use primitives::ScalarNumber;
