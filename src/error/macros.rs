//! Constructor generation for error variants
//!
//! Every domain submodule exposes small free functions (`staging::copy_failed`,
//! `config::invalid`, ...) that build the matching [`NativeDepsError`]
//! variant from anything string-like. This macro writes them.
//!
//! # Example
//! ```rust,ignore
//! impl_error_constructors! {
//!     /// Creates a config not found error
//!     not_found => ConfigNotFound { path },
//! }
//! ```
//!
//! [`NativeDepsError`]: crate::error::NativeDepsError

macro_rules! impl_error_constructors {
    ($($(#[$meta:meta])* $name:ident => $variant:ident { $($field:ident),* $(,)? }),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $name($($field: impl Into<String>),*) -> $crate::error::NativeDepsError {
                $crate::error::NativeDepsError::$variant {
                    $($field: $field.into()),*
                }
            }
        )*
    };
}
