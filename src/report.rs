//! Console report of a faculty.
//!
//! Each section is a header line, a separator line, and one line per member formatted with its
//! [`Display`] implementation. Sections are preceded by an empty line.

prelude! {}

/// Line separating a section header from its content.
pub const SEPARATOR: &str = "-----";

fn write_section<'a, T: Display + 'a>(
    w: &mut impl io::Write,
    title: impl Display,
    members: impl IntoIterator<Item = &'a T>,
) -> Res<()> {
    writeln!(w)?;
    writeln!(w, "{}:", title)?;
    writeln!(w, "{}", SEPARATOR)?;
    for member in members {
        writeln!(w, "{}", member)?;
    }
    Ok(())
}

pub fn write_students(w: &mut impl io::Write, faculty: &Faculty) -> Res<()> {
    write_section(
        w,
        format_args!("Students at {}", faculty.name()),
        faculty.students(),
    )
    .context(|| format!("failed to write students of `{}`", faculty.name()))
}

pub fn write_professors(w: &mut impl io::Write, faculty: &Faculty) -> Res<()> {
    write_section(
        w,
        format_args!("Professors at {}", faculty.name()),
        faculty.professors(),
    )
    .context(|| format!("failed to write professors of `{}`", faculty.name()))
}

/// Students section, then professors section.
pub fn write_report(w: &mut impl io::Write, faculty: &Faculty) -> Res<()> {
    write_students(w, faculty)?;
    write_professors(w, faculty)?;
    w.flush()?;
    Ok(())
}

/// Blocks until a non-whitespace byte of input is available, and consumes it.
///
/// Whitespace, newlines included, is skipped. Reaching the end of the input counts as a key press.
pub fn wait_for_key(input: &mut impl io::Read) -> Res<()> {
    let mut buf = [0u8; 1];
    loop {
        match input.read(&mut buf) {
            Ok(0) => return Ok(()),
            Ok(_) if buf[0].is_ascii_whitespace() => continue,
            Ok(_) => return Ok(()),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(error!(e).with_context("failed to wait for a key press")),
        }
    }
}
