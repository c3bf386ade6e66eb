pub mod attendance;
pub mod certification;
pub mod course;
pub mod enroll;
pub mod lecture;
pub mod session;
pub mod user;

pub use attendance::Attendance;
pub use certification::Certification;
pub use course::Course;
pub use enroll::{Enroll, EnrollDetail};
pub use lecture::Lecture;
pub use session::{Session, SessionDetail, SessionStatus};
pub use user::User;
