/// Append a formatted error diagnostic: `err!(diags, location, "fmt", args..)`.
macro_rules! err {
    ($diags:expr, $at:expr, $($arg:tt)*) => {
        $diags.error($at, format!($($arg)*))
    };
}

/// Append a formatted warning diagnostic.
macro_rules! warning {
    ($diags:expr, $at:expr, $($arg:tt)*) => {
        $diags.warning($at, format!($($arg)*))
    };
}
