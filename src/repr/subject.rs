prelude! {}

/// A course, with its lecture and exercise hour counts.
///
/// No identity beyond its value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subject {
    name: String,
    lecture_count: i32,
    exercise_count: i32,
}

impl Subject {
    pub fn new(name: impl Into<String>, lecture_count: i32, exercise_count: i32) -> Self {
        Self {
            name: name.into(),
            lecture_count,
            exercise_count,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
    #[inline]
    pub fn lecture_count(&self) -> i32 {
        self.lecture_count
    }
    #[inline]
    pub fn exercise_count(&self) -> i32 {
        self.exercise_count
    }

    /// Lectures and exercises together.
    pub fn total_hours(&self) -> i32 {
        self.lecture_count + self.exercise_count
    }
}

impl Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} lectures, {} exercises)",
            self.name, self.lecture_count, self.exercise_count
        )
    }
}

#[cfg(test)]
mod tests {
    prelude! {}

    #[test]
    fn value_equality() {
        let s1 = Subject::new("Calculus 1", 30, 40);
        let s2 = Subject::new(String::from("Calculus 1"), 30, 40);
        assert_eq!(s1, s2);
        assert_ne!(s1, Subject::new("Calculus 1", 30, 41));
        assert_eq!(s1.total_hours(), 70);
        assert_eq!(s1.to_string(), "Calculus 1 (30 lectures, 40 exercises)");
    }

    #[test]
    fn no_validation() {
        let s = Subject::new("", -3, 0);
        assert_eq!(s.name(), "");
        assert_eq!(s.lecture_count(), -3);
        assert_eq!(s.exercise_count(), 0);
    }
}
