pub mod attendances;
pub mod certifications;
pub mod courses;
pub mod enrolls;
pub mod lectures;
pub mod sessions;
pub mod users;
