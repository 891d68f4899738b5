//! Chart-related types.
//!
//! - `Variant` - chart style (STD, DX)
//! - `Slot`, `Tier` - rating slot positions and the difficulty labels they map to
//! - `SongRecord` - one song with its six rating slots

mod slot;
mod song;
mod variant;

pub use slot::*;
pub use song::*;
pub use variant::*;
