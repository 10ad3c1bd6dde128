pub mod ai_result;
pub mod course;
pub mod payload;
pub mod scalars;
pub mod student;
pub mod student_course;

pub use ai_result::*;
pub use course::*;
pub use scalars::*;
pub use student::*;
pub use student_course::*;
