#[macro_use]
extern crate serde;

pub use smol_str::SmolStr;
pub use timestamp::{Duration, Timestamp};
pub use triomphe::Arc;

#[cfg(feature = "thin-vec")]
pub use thin_vec::ThinVec as MaybeThinVec;

#[cfg(not(feature = "thin-vec"))]
pub type MaybeThinVec<T> = Vec<T>;

pub mod embed;
pub mod message;

pub use embed::*;
pub use message::*;

fn is_false(value: &bool) -> bool {
    !*value
}
