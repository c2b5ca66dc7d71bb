//! Macros for error creation with call-site context

/// Create an [`Error`](crate::Error) of the given kind tagged with `file:line`
///
/// The kind is the name of an [`Error`](crate::Error) constructor, the rest is
/// `format!` input:
///
/// ```
/// let id = 7;
/// let e = cryptodiff_common::err!(registration, "duplicate id {id}");
/// assert!(e.to_string().contains("duplicate id 7 at "));
/// ```
#[macro_export]
macro_rules! err {
    ($kind:ident) => {
        $crate::Error::$kind().context(::std::format!("at {}:{}", file!(), line!()))
    };
    ($kind:ident, $($fmt:tt)+) => {
        $crate::Error::$kind().context(::std::format!(
            "{} at {}:{}",
            ::std::format_args!($($fmt)+),
            file!(),
            line!()
        ))
    };
}

/// Return early with an [`Error`](crate::Error) built by [`err!`]
#[macro_export]
macro_rules! bail {
    ($($arg:tt)+) => {
        return ::std::result::Result::Err($crate::err!($($arg)+).into())
    };
}

/// Bail with an [`Error`](crate::Error) unless `$cond` holds
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::bail!($($arg)+);
        }
    };
}
