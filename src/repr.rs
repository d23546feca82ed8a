//! Entity model: subjects, the people of a faculty, and faculties themselves.
//!
//! Entities are plain values. A [`Faculty`] owns copies of the [`Student`]s and [`Professor`]s
//! added to it, and nothing points back to it except through an [`idx::Faculty`] handle, which
//! only means something to the [`University`] that produced it.

prelude! {}

pub mod faculty;
pub mod idx;
pub mod person;
pub mod subject;

pub use faculty::Faculty;
pub use person::{Person, Professor, Student};
pub use subject::Subject;

/// Subject list of a professor, rarely more than a handful of entries.
pub type Subjects = SmallVec<[Subject; 4]>;
