pub mod change_tracker;
pub mod structural;
pub mod value;

pub use change_tracker::ChangeTracker;
pub use structural::{equals, StructuralEq};
pub use value::{Kind, Value};
