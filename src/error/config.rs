//! Configuration errors

impl_error_constructors! {
    /// Creates a config not found error
    not_found => ConfigNotFound { path },
    /// Creates a config read failed error
    read_failed => ConfigReadFailed { path, reason },
    /// Creates a config parse failed error
    parse_failed => ConfigParseFailed { path, reason },
    /// Creates an invalid config error
    invalid => ConfigInvalid { message },
}
