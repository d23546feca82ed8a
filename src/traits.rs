prelude! {}

/// Capabilities shared by everyone a faculty holds.
///
/// There is no concrete person type: a person is always a [`Student`] or a [`Professor`], see
/// also [`Person`] for the closed version.
pub trait PersonSpec: Display {
    fn name(&self) -> &str;
    fn age(&self) -> i32;
}

pub trait HasSubjects {
    /// Subjects, in the order they were added in.
    fn teaching_subjects(&self) -> &[Subject];

    fn teaches(&self, name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        self.teaching_subjects().iter().any(|s| s.name() == name)
    }
}
