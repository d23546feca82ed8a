//! Sample faculty used by the `faculty_report` binary.

prelude! {}

pub const FACULTY_NAME: &str = "Polytechnic faculty";

/// Populates the current faculty with five students and three professors.
pub fn populate(ctx: &mut FacultyCtx) {
    for (name, age, level) in [
        ("Denis", 22, 2),
        ("Elma", 19, 1),
        ("Tarik", 24, 2),
        ("Adin", 19, 1),
        ("Zlatan", 26, 3),
    ] {
        ctx.add_student(Student::new(name, age, level))
    }

    ctx.add_professor_with("Prof1", 37, |prof| {
        prof.add_teaching_subject("Calculus 1", 30, 40);
        prof.add_teaching_subject("Calculus 2", 25, 35);
        prof.add_teaching_subject("Computer networks", 35, 37);
    });
    ctx.add_professor_with("Prof2", 41, |prof| {
        prof.add_teaching_subject("Algorithms & data structures", 30, 40);
        prof.add_teaching_subject("Introduction to databases", 25, 35);
        prof.add_teaching_subject("Introduction to programming", 35, 37);
    });
    ctx.add_professor_with("Prof3", 54, |prof| {
        prof.add_teaching_subject("Cybersecurity", 30, 40);
        prof.add_teaching_subject("Information security", 25, 35);
    });
}

/// A university with the sample faculty registered and populated.
pub fn university() -> Res<(University, idx::Faculty)> {
    let mut univ = University::new();
    let f_idx = univ.add_faculty(FACULTY_NAME)?;
    populate(&mut univ.enter_faculty(f_idx));
    Ok((univ, f_idx))
}
