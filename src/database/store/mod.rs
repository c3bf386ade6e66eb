pub mod attendance;
pub mod certification;
pub mod course;
pub mod enroll;
pub mod lecture;
pub mod session;
pub mod user;

pub use attendance::AttendanceStore;
pub use certification::CertificationStore;
pub use course::CourseStore;
pub use enroll::EnrollStore;
pub use lecture::LectureStore;
pub use session::SessionStore;
pub use user::UserStore;

use serde::Deserialize;

/// skip/limit list paging, shared by every collection endpoint.
/// Out-of-range values are clamped rather than rejected.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Pagination {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl Pagination {
    pub fn offset(&self) -> i64 {
        self.skip.unwrap_or(0).max(0)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(100).clamp(1, 1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_defaults() {
        let page = Pagination::default();
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), 100);
    }

    #[test]
    fn pagination_clamps_out_of_range_values() {
        let page = Pagination {
            skip: Some(-5),
            limit: Some(0),
        };
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), 1);

        let page = Pagination {
            skip: Some(10),
            limit: Some(5000),
        };
        assert_eq!(page.offset(), 10);
        assert_eq!(page.limit(), 1000);
    }
}
