//! Result-handling types/traits/macros.

prelude! {}

#[macro_export]
macro_rules! error {
    ( @unknown($desc:expr) $val:expr ) => {
        $crate::prelude::res::Error::from(
            $crate::prelude::res::ErrorSrc::new_unknown($val, $desc)
        )
    };
    ( @redef($desc:expr) $val:expr ) => {
        $crate::prelude::res::Error::from(
            $crate::prelude::res::ErrorSrc::new_redef($val, $desc)
        )
    };
    ($e:expr) => {
        $crate::prelude::res::Error::from(
            $crate::prelude::res::ErrorSrc::from($e)
        )
    };
    ($($unexpected:tt)*) => {
        compile_error!(
            "expected `@unknown(desc) val`, `@redef(desc) val`, \
            or an expression convertible `Into` an error"
        )
    };
}

#[derive(Debug)]
pub enum ErrorSrc {
    /// Lookup of something that was never registered.
    Unknown {
        val: String,
        desc: String,
    },
    /// Registration clashing with an existing entry.
    Redef {
        val: String,
        desc: String,
    },
    Std(Box<dyn std::error::Error + Send + Sync>),
}
impl ErrorSrc {
    pub fn new_std(e: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Std(Box::new(e))
    }
    pub fn new_unknown(val: impl Into<String>, desc: impl Into<String>) -> Self {
        Self::Unknown {
            val: val.into(),
            desc: desc.into(),
        }
    }
    pub fn new_redef(val: impl Into<String>, desc: impl Into<String>) -> Self {
        Self::Redef {
            val: val.into(),
            desc: desc.into(),
        }
    }
}
impl From<io::Error> for ErrorSrc {
    fn from(e: io::Error) -> Self {
        Self::new_std(e)
    }
}

impl Display for ErrorSrc {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        use ErrorSrc::*;
        match self {
            Unknown { val, desc } => write!(fmt, "unknown {} `{}`", desc, val),
            Redef { val, desc } => write!(fmt, "illegal redefinition of {} `{}`", desc, val),
            Std(err) => err.fmt(fmt),
        }
    }
}

#[derive(Debug, Clone)]
pub enum ErrorCtx {
    Msg(String),
}
impl ErrorCtx {
    pub fn new_msg(s: impl Into<String>) -> Self {
        Self::Msg(s.into())
    }
}
impl From<String> for ErrorCtx {
    fn from(s: String) -> Self {
        Self::new_msg(s)
    }
}
impl From<&'_ str> for ErrorCtx {
    fn from(s: &str) -> Self {
        Self::new_msg(s)
    }
}
impl Display for ErrorCtx {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Msg(blah) => blah.fmt(fmt),
        }
    }
}

#[derive(Debug)]
pub struct Error {
    pub src: ErrorSrc,
    pub ctx: Vec<ErrorCtx>,
}
impl<T> From<T> for Error
where
    T: Into<ErrorSrc>,
{
    fn from(t: T) -> Self {
        Self {
            src: t.into(),
            ctx: vec![],
        }
    }
}
impl Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.src.fmt(fmt)?;
        for ctx in self.ctx.iter() {
            writeln!(fmt)?;
            ctx.fmt(fmt)?;
        }
        Ok(())
    }
}
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.src {
            ErrorSrc::Std(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

pub type Res<T> = Result<T, Error>;

pub trait WithCtx: Sized {
    type Output;
    fn context<E>(self, ctx: impl FnOnce() -> E) -> Self::Output
    where
        E: Into<ErrorCtx>;
    fn with_context(self, ctx: impl Into<ErrorCtx>) -> Self::Output {
        self.context(|| ctx)
    }
}

impl WithCtx for Error {
    type Output = Error;
    fn context<E>(mut self, ctx: impl FnOnce() -> E) -> Self::Output
    where
        E: Into<ErrorCtx>,
    {
        self.ctx.push(ctx().into());
        self
    }
}
impl<T, E> WithCtx for Result<T, E>
where
    E: Into<Error>,
{
    type Output = Res<T>;
    fn context<Er>(self, ctx: impl FnOnce() -> Er) -> Self::Output
    where
        Er: Into<ErrorCtx>,
    {
        self.map_err(|err| err.into().context(ctx))
    }
}
