//! File system errors

impl_error_constructors! {
    /// Creates a file write failed error
    write_failed => FileWriteFailed { path, reason },
    /// Creates a serialization failure error
    serialize_failed => SerializeFailed { reason },
}
