//! People of a faculty.
//!
//! [`PersonSpec`] plays the role of an abstract person: the only ways to get one are [`Student`]
//! and [`Professor`], or [`Person`] when the variant is only known at runtime.

prelude! {
    repr::Subjects,
}

use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Student {
    name: String,
    age: i32,
    study_level: i32,
}

impl PersonSpec for Student {
    fn name(&self) -> &str {
        &self.name
    }
    fn age(&self) -> i32 {
        self.age
    }
}

impl Student {
    pub fn new(name: impl Into<String>, age: i32, study_level: i32) -> Self {
        Self {
            name: name.into(),
            age,
            study_level,
        }
    }

    #[inline]
    pub fn study_level(&self) -> i32 {
        self.study_level
    }
}

impl Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.age, self.study_level)
    }
}

/// A professor and the subjects they teach.
///
/// The faculty back-reference is only set when the professor lives in a faculty registered in a
/// [`University`], see [`University::faculty_of`]. It is a lookup handle, so equality and hashing
/// ignore it.
#[derive(Debug, Clone)]
pub struct Professor {
    name: String,
    age: i32,
    teaching_subjects: Subjects,
    faculty: Option<idx::FacultyRef>,
}

impl PartialEq for Professor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.age == other.age
            && self.teaching_subjects == other.teaching_subjects
    }
}
impl Eq for Professor {}
impl Hash for Professor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.age.hash(state);
        self.teaching_subjects.hash(state);
    }
}

impl PersonSpec for Professor {
    fn name(&self) -> &str {
        &self.name
    }
    fn age(&self) -> i32 {
        self.age
    }
}
impl HasSubjects for Professor {
    fn teaching_subjects(&self) -> &[Subject] {
        &self.teaching_subjects
    }
}

impl Professor {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
            teaching_subjects: smallvec![],
            faculty: None,
        }
    }

    /// Appends a subject, duplicates included.
    pub fn add_teaching_subject(
        &mut self,
        name: impl Into<String>,
        lecture_count: i32,
        exercise_count: i32,
    ) {
        self.teaching_subjects
            .push(Subject::new(name, lecture_count, exercise_count))
    }

    /// First subject called `name`, if any.
    pub fn teaching_subject(&self, name: impl AsRef<str>) -> Option<&Subject> {
        let name = name.as_ref();
        self.teaching_subjects.iter().find(|s| s.name() == name)
    }

    /// Index of the faculty this professor belongs to.
    pub fn faculty(&self) -> Option<idx::Faculty> {
        self.faculty.map(|f| f.faculty())
    }
    pub fn faculty_ref(&self) -> Option<idx::FacultyRef> {
        self.faculty
    }
    pub(crate) fn set_faculty(&mut self, faculty: Option<idx::FacultyRef>) {
        self.faculty = faculty
    }
}

impl Display for Professor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} Teaching subjecs = [{}]",
            self.name,
            self.age,
            self.teaching_subjects.iter().show_iter_cs(|s| s.name()),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Person {
    Student(Student),
    Professor(Professor),
}
impl PersonSpec for Person {
    fn name(&self) -> &str {
        match self {
            Self::Student(s) => s.name(),
            Self::Professor(p) => p.name(),
        }
    }
    fn age(&self) -> i32 {
        match self {
            Self::Student(s) => s.age(),
            Self::Professor(p) => p.age(),
        }
    }
}
impl Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Student(s) => s.fmt(f),
            Self::Professor(p) => p.fmt(f),
        }
    }
}
impl From<Student> for Person {
    fn from(s: Student) -> Self {
        Self::Student(s)
    }
}
impl From<Professor> for Person {
    fn from(p: Professor) -> Self {
        Self::Professor(p)
    }
}
