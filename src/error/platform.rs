//! Platform errors

impl_error_constructors! {
    /// Creates an unknown platform error
    unknown => UnknownPlatform { identifier },
}
