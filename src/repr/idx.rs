use std::sync::atomic::{AtomicUsize, Ordering};

safe_index::new! {
    /// Faculty index, handed out by a [`University`](crate::univ::University).
    Faculty,
    /// Maps a [`Faculty`] to something.
    map: FacultyMap,
}

/// Identifies a [`University`](crate::univ::University), unique for the whole process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Univ(usize);

impl Univ {
    pub(crate) fn fresh() -> Self {
        static NEXT: AtomicUsize = AtomicUsize::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A [`Faculty`] index along with the university it is an index of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FacultyRef {
    univ: Univ,
    faculty: Faculty,
}

impl FacultyRef {
    pub(crate) fn new(univ: Univ, faculty: Faculty) -> Self {
        Self { univ, faculty }
    }

    pub fn univ(&self) -> Univ {
        self.univ
    }
    pub fn faculty(&self) -> Faculty {
        self.faculty
    }
}
