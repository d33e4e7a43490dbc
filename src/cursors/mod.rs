pub mod slice;
pub mod string;

pub use slice::SliceCursor;
pub use string::StrCursor;
