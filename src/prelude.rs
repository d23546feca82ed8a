/// Imports this crate's prelude.
#[macro_export]
macro_rules! prelude {
    ($($imports:tt)*) => (
        use $crate::prelude::{*, $($imports)*};
    )
}

pub use std::{
    collections::HashMap,
    fmt::{self, Display},
    io,
};

pub use log;
pub use smallvec::{smallvec, SmallVec};

#[macro_use]
pub mod res;

pub use crate::{
    error,
    prelude::res::{Res, WithCtx},
    repr::{self, idx, Faculty, Person, Professor, Student, Subject},
    traits::*,
    univ::{self, FacultyCtx, University},
};

/// Pretty-printing helpers for anything iterable.
pub trait CollPrintExt: Sized {
    type Elm;
    fn show_iter<S>(self, show_elm: impl Fn(Self::Elm) -> S, sep: impl AsRef<str>) -> String
    where
        S: AsRef<str>;

    /// Comma-separated version of [`Self::show_iter`].
    ///
    /// ```rust
    /// # faculty_rs::prelude! {}
    /// let names = ["Calculus 1", "Calculus 2"];
    /// assert_eq!(names.iter().show_iter_cs(|s| *s), "Calculus 1, Calculus 2");
    /// assert_eq!(Vec::<&str>::new().show_iter_cs(|s| s), "");
    /// ```
    fn show_iter_cs<S>(self, show_elm: impl Fn(Self::Elm) -> S) -> String
    where
        S: AsRef<str>,
    {
        self.show_iter(show_elm, ", ")
    }
}
impl<T, E> CollPrintExt for T
where
    T: IntoIterator<Item = E>,
{
    type Elm = E;
    fn show_iter<S>(self, show_elm: impl Fn(Self::Elm) -> S, sep: impl AsRef<str>) -> String
    where
        S: AsRef<str>,
    {
        let sep = sep.as_ref();
        let mut s = String::new();
        for (idx, elm) in self.into_iter().enumerate() {
            if idx > 0 {
                s.push_str(sep);
            }
            s.push_str(show_elm(elm).as_ref())
        }
        s
    }
}
