//! University context.
//!
//! A [`University`] owns [`Faculty`]s and hands out an [`idx::Faculty`] for each of them. A
//! [`Professor`] stores this index along with the university's [`idx::Univ`] to know which faculty
//! it belongs to: only that university turns it back into a faculty, see
//! [`University::faculty_of`].
//!
//! To populate a registered faculty, one *"enters"* it with [`University::enter_faculty`], which
//! yields a [`FacultyCtx`].

prelude! {}

/// Registry of faculties, in registration order.
///
/// Faculties can only be read through [`Index`](std::ops::Index); adding people goes through a
/// [`FacultyCtx`], so a registered faculty cannot be replaced behind the registry's back.
pub struct University {
    id: idx::Univ,
    faculties: idx::FacultyMap<Faculty>,
    name_to_faculty: HashMap<String, idx::Faculty>,
}

impl std::ops::Index<idx::Faculty> for University {
    type Output = Faculty;
    fn index(&self, idx: idx::Faculty) -> &Self::Output {
        &self.faculties[idx]
    }
}

impl Default for University {
    fn default() -> Self {
        Self::new()
    }
}

impl University {
    /// Constructor.
    pub fn with_capacity(capa: usize) -> Self {
        Self {
            id: idx::Univ::fresh(),
            faculties: idx::FacultyMap::with_capacity(capa),
            name_to_faculty: HashMap::with_capacity(capa),
        }
    }
    pub fn new() -> Self {
        Self::with_capacity(3)
    }

    /// Identifier of this university, different from all other universities'.
    pub fn id(&self) -> idx::Univ {
        self.id
    }

    /// Registers a faculty, returns its index.
    ///
    /// Professors already in `faculty` get their back-reference set to the new index. Fails if a
    /// faculty with the same name is already registered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # faculty_rs::prelude! {}
    /// let mut univ = University::new();
    /// let mut faculty = Faculty::new("Polytechnic faculty");
    /// faculty.add_professor(Professor::new("Prof1", 37));
    /// assert_eq!(faculty.professors()[0].faculty(), None);
    ///
    /// let f_idx = univ.register_faculty(faculty).expect("registration failed");
    /// let prof = &univ[f_idx].professors()[0];
    /// assert_eq!(prof.faculty(), Some(f_idx));
    /// assert_eq!(univ.faculty_of(prof).map(Faculty::name), Some("Polytechnic faculty"));
    ///
    /// let res = univ.register_faculty(Faculty::new("Polytechnic faculty"));
    /// assert!(res.is_err());
    /// ```
    pub fn register_faculty(&mut self, mut faculty: Faculty) -> Res<idx::Faculty> {
        if let Some(f_idx) = self.name_to_faculty.get(faculty.name()).cloned() {
            let note = format!("existing faculty has index `#{f_idx}`");
            return Err(error!(@redef("faculty") faculty.name()).with_context(note));
        }

        let f_idx = self.faculties.next_index();
        faculty.set_handle(idx::FacultyRef::new(self.id, f_idx));
        let _prev = self.name_to_faculty.insert(faculty.name().to_string(), f_idx);
        debug_assert!(_prev.is_none());

        log::debug!(
            "registering faculty `{}` as #{} ({} students, {} professors)",
            faculty.name(),
            f_idx,
            faculty.students().len(),
            faculty.professors().len(),
        );
        let real_f_idx = self.faculties.push_idx(|_| faculty);
        debug_assert_eq!(f_idx, real_f_idx);
        Ok(real_f_idx)
    }

    /// Registers an empty faculty.
    pub fn add_faculty(&mut self, name: impl Into<String>) -> Res<idx::Faculty> {
        self.register_faculty(Faculty::new(name))
    }

    /// Index of the faculty called `name`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # faculty_rs::prelude! {}
    /// let mut univ = University::new();
    /// let f_idx = univ.add_faculty("Law").expect("registration failed");
    /// assert_eq!(univ.faculty_idx("Law").expect("lookup failed"), f_idx);
    ///
    /// let err = univ.faculty_idx("Medicine").unwrap_err();
    /// assert_eq!(err.to_string(), "unknown faculty `Medicine`");
    /// ```
    pub fn faculty_idx(&self, name: impl AsRef<str>) -> Res<idx::Faculty> {
        let name = name.as_ref();
        self.name_to_faculty
            .get(name)
            .cloned()
            .ok_or_else(|| error!(@unknown("faculty") name))
    }

    /// Faculties appear in the order they were registered in.
    pub fn faculties(&self) -> &[Faculty] {
        &self.faculties
    }
    pub fn faculty_indices<'me>(&'me self) -> impl Iterator<Item = idx::Faculty> + 'me {
        self.faculties.indices()
    }

    /// Faculty a professor belongs to, according to its back-reference.
    ///
    /// `None` if the professor was never registered, or was registered in another university.
    pub fn faculty_of(&self, professor: &Professor) -> Option<&Faculty> {
        let handle = professor.faculty_ref()?;
        if handle.univ() == self.id {
            Some(&self[handle.faculty()])
        } else {
            None
        }
    }

    pub fn enter_faculty(&mut self, f_idx: idx::Faculty) -> FacultyCtx {
        FacultyCtx { f_idx, univ: self }
    }
    pub fn enter_faculty_named(&mut self, name: impl AsRef<str>) -> Res<FacultyCtx> {
        let name = name.as_ref();
        let f_idx = self
            .faculty_idx(name)
            .context(|| format!("failed to enter faculty `{}`", name))?;
        Ok(self.enter_faculty(f_idx))
    }

    pub fn to_pretty_string(&self) -> String {
        let mut res = String::with_capacity(113);

        macro_rules! post {
            ($pref:expr, line $($interp_str:tt)*) => {{
                if !res.is_empty() {
                    res.push('\n');
                }
                res.push_str($pref);
                res.push_str(&format!($($interp_str)*));
            }};
        }

        for f_idx in self.faculty_indices() {
            let faculty = &self[f_idx];
            post!("", line "- {} #{}", faculty.name(), f_idx);
            if !faculty.students().is_empty() {
                post!("  ", line "students:");
                for student in faculty.students() {
                    post!("  ", line "- {}", student);
                }
            }
            if !faculty.professors().is_empty() {
                post!("  ", line "professors:");
                for prof in faculty.professors() {
                    post!("  ", line "- {}", prof);
                }
            }
        }

        res.shrink_to_fit();
        res
    }
}

/// A [`University`] along with one of its faculties.
pub struct FacultyCtx<'a> {
    f_idx: idx::Faculty,
    univ: &'a mut University,
}

impl<'a> FacultyCtx<'a> {
    pub fn current(&self) -> &Faculty {
        &self.univ[self.f_idx]
    }
    pub fn idx(&self) -> idx::Faculty {
        self.f_idx
    }

    pub fn univ(&self) -> &University {
        self.univ
    }

    pub fn add_student(&mut self, student: Student) {
        self.univ.faculties[self.f_idx].add_student(student)
    }
    /// Adds a professor, its back-reference points to the current faculty.
    pub fn add_professor(&mut self, professor: Professor) {
        self.univ.faculties[self.f_idx].add_professor(professor)
    }

    /// Builds a professor in place.
    ///
    /// ```rust
    /// # faculty_rs::prelude! {}
    /// let mut univ = University::new();
    /// let f_idx = univ.add_faculty("F").expect("registration failed");
    /// let mut ctx = univ.enter_faculty(f_idx);
    /// ctx.add_professor_with("Prof3", 54, |prof| {
    ///     prof.add_teaching_subject("Cybersecurity", 30, 40);
    /// });
    /// assert_eq!(ctx.current().professors()[0].teaching_subjects().len(), 1);
    /// assert_eq!(ctx.current().professors()[0].faculty(), Some(f_idx));
    /// ```
    pub fn add_professor_with(
        &mut self,
        name: impl Into<String>,
        age: i32,
        build: impl FnOnce(&mut Professor),
    ) {
        let mut professor = Professor::new(name, age);
        build(&mut professor);
        self.add_professor(professor)
    }
}

#[cfg(test)]
mod tests {
    prelude! {}

    #[test]
    fn registration_order_and_lookup() {
        let mut univ = University::new();
        let law = univ.add_faculty("Law").expect("registration failed");
        let poly = univ.add_faculty("Polytechnic faculty").expect("registration failed");
        assert_ne!(law, poly);

        let names: Vec<_> = univ.faculties().iter().map(Faculty::name).collect();
        assert_eq!(names, ["Law", "Polytechnic faculty"]);
        assert_eq!(univ.faculty_indices().collect::<Vec<_>>(), [law, poly]);
        assert_eq!(univ[poly].idx(), Some(poly));
        assert_eq!(univ.faculty_idx("Law").expect("lookup failed"), law);
    }

    #[test]
    fn redefinition_keeps_first_faculty() {
        let mut univ = University::new();
        let f_idx = univ.add_faculty("Law").expect("registration failed");
        univ.enter_faculty(f_idx)
            .add_student(Student::new("Denis", 22, 2));

        let err = univ.add_faculty("Law").unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("illegal redefinition of faculty `Law`\nexisting faculty has index `#{f_idx}`")
        );
        assert_eq!(univ.faculties().len(), 1);
        assert_eq!(univ[f_idx].students().len(), 1);
    }

    #[test]
    fn back_reference_through_ctx() {
        let mut univ = University::new();
        let law = univ.add_faculty("Law").expect("registration failed");
        let poly = univ.add_faculty("Polytechnic faculty").expect("registration failed");

        {
            let mut ctx = univ
                .enter_faculty_named("Polytechnic faculty")
                .expect("failed to enter faculty");
            assert_eq!(ctx.idx(), poly);
            ctx.add_student(Student::new("Elma", 19, 1));
            ctx.add_professor(Professor::new("Prof2", 41));
            assert_eq!(ctx.univ().faculties().len(), 2);
        }

        let prof = &univ[poly].professors()[0];
        assert_eq!(prof.faculty(), Some(poly));
        assert_eq!(univ.faculty_of(prof).and_then(Faculty::idx), Some(poly));
        assert!(univ[law].professors().is_empty());
    }

    #[test]
    fn foreign_or_missing_back_reference() {
        let mut univ = University::new();
        let mut other = University::new();
        other.add_faculty("A").expect("registration failed");
        let b = other.add_faculty("B").expect("registration failed");
        other.enter_faculty(b).add_professor(Professor::new("Prof1", 37));

        let foreign = &other[b].professors()[0];
        assert_eq!(univ.faculty_of(foreign).map(Faculty::name), None);
        assert!(univ.faculty_of(&Professor::new("Prof1", 37)).is_none());

        univ.add_faculty("C").expect("registration failed");
        assert_eq!(univ.faculty_of(foreign).map(Faculty::name), None);
    }

    #[test]
    fn foreign_handle_in_range() {
        let mut univ = University::new();
        let mut other = University::new();
        assert_ne!(univ.id(), other.id());

        let medicine = other.add_faculty("Medicine").expect("registration failed");
        other
            .enter_faculty(medicine)
            .add_professor(Professor::new("ProfX", 45));
        let law = univ.add_faculty("Law").expect("registration failed");
        assert_eq!(law, medicine);

        let foreign = &other[medicine].professors()[0];
        assert_eq!(foreign.faculty(), Some(law));
        assert_eq!(univ.faculty_of(foreign).map(Faculty::name), None);
        assert_eq!(other.faculty_of(foreign).map(Faculty::name), Some("Medicine"));
    }

    #[test]
    fn registry_stays_consistent() {
        let mut univ = University::new();
        let law = univ.add_faculty("Law").expect("registration failed");
        {
            let mut ctx = univ.enter_faculty(law);
            ctx.add_student(Student::new("Denis", 22, 2));
            ctx.add_professor(Professor::new("Prof1", 37));
        }

        let f_idx = univ.faculty_idx("Law").expect("lookup failed");
        assert_eq!(f_idx, law);
        assert_eq!(univ[law].name(), "Law");
        assert_eq!(univ[law].idx(), Some(law));
        assert_eq!(
            univ[law].handle().map(|h| h.univ()),
            Some(univ.id())
        );
        let prof = &univ[law].professors()[0];
        assert_eq!(univ.faculty_of(prof).map(Faculty::name), Some("Law"));
    }

    #[test]
    fn moving_a_professor_rewires_it() {
        let mut univ = University::new();
        let law = univ.add_faculty("Law").expect("registration failed");
        let poly = univ.add_faculty("Polytechnic faculty").expect("registration failed");
        univ.enter_faculty(law).add_professor(Professor::new("Prof1", 37));

        let prof = univ[law].professors()[0].clone();
        univ.enter_faculty(poly).add_professor(prof);
        assert_eq!(univ[law].professors()[0].faculty(), Some(law));
        assert_eq!(univ[poly].professors()[0].faculty(), Some(poly));
    }

    #[test]
    fn entering_unknown_faculty_fails() {
        let mut univ = University::new();
        let err = univ.enter_faculty_named("Medicine").err().expect("should fail");
        assert_eq!(
            err.to_string(),
            "unknown faculty `Medicine`\nfailed to enter faculty `Medicine`"
        );
    }

    #[test]
    fn pretty_string() {
        let mut univ = University::new();
        let f_idx = univ.add_faculty("F").expect("registration failed");
        univ.add_faculty("Empty").expect("registration failed");
        let mut ctx = univ.enter_faculty(f_idx);
        ctx.add_student(Student::new("Denis", 22, 2));
        ctx.add_professor_with("Prof1", 37, |p| p.add_teaching_subject("Calculus 1", 30, 40));

        let expected = format!(
            "\
- F #{}
  students:
  - Denis 22 2
  professors:
  - Prof1 37 Teaching subjecs = [Calculus 1]
- Empty #{}",
            f_idx,
            univ.faculty_idx("Empty").expect("lookup failed"),
        );
        assert_eq!(univ.to_pretty_string(), expected);
    }
}
