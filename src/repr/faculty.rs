prelude! {}

/// An organizational unit aggregating students and professors.
///
/// Entries are stored by value in insertion order, with no uniqueness check. A faculty gets an
/// [`idx::Faculty`] when registered in a [`University`]; from then on, every professor it holds
/// points back to it.
#[derive(Debug, Clone)]
pub struct Faculty {
    handle: Option<idx::FacultyRef>,
    name: String,
    students: Vec<Student>,
    professors: Vec<Professor>,
}

impl Faculty {
    pub fn with_capacity(name: impl Into<String>, student_capa: usize, prof_capa: usize) -> Self {
        Self {
            handle: None,
            name: name.into(),
            students: Vec::with_capacity(student_capa),
            professors: Vec::with_capacity(prof_capa),
        }
    }
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_capacity(name, 7, 3)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    /// Index of this faculty, `None` if it was never registered.
    pub fn idx(&self) -> Option<idx::Faculty> {
        self.handle.map(|h| h.faculty())
    }
    pub fn handle(&self) -> Option<idx::FacultyRef> {
        self.handle
    }

    /// Sets the faculty's handle and rewires the back-reference of all its professors.
    pub(crate) fn set_handle(&mut self, handle: idx::FacultyRef) {
        self.handle = Some(handle);
        for prof in self.professors.iter_mut() {
            prof.set_faculty(self.handle)
        }
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }
    pub fn professors(&self) -> &[Professor] {
        &self.professors
    }

    pub fn add_student(&mut self, student: Student) {
        log::trace!("faculty `{}`: adding student `{}`", self.name, student.name());
        self.students.push(student)
    }
    /// Adds a professor, overwriting its back-reference with this faculty's handle.
    pub fn add_professor(&mut self, mut professor: Professor) {
        log::trace!(
            "faculty `{}`: adding professor `{}`",
            self.name,
            professor.name()
        );
        professor.set_faculty(self.handle);
        self.professors.push(professor)
    }
    pub fn add_person(&mut self, person: impl Into<Person>) {
        match person.into() {
            Person::Student(s) => self.add_student(s),
            Person::Professor(p) => self.add_professor(p),
        }
    }

    /// All members, students first, each group in insertion order.
    pub fn members(&self) -> impl Iterator<Item = &dyn PersonSpec> {
        self.students
            .iter()
            .map(|s| s as &dyn PersonSpec)
            .chain(self.professors.iter().map(|p| p as &dyn PersonSpec))
    }

    /// Professors teaching a subject called `subject`.
    pub fn professors_teaching<'me>(
        &'me self,
        subject: &'me str,
    ) -> impl Iterator<Item = &'me Professor> + 'me {
        self.professors.iter().filter(move |p| p.teaches(subject))
    }
}
