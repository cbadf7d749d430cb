use coupon_core::StorageError;
use mongodb::error::{CommandError, Error, ErrorKind, WriteError, WriteFailure};

/// Server error code for a unique index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

pub(crate) fn is_duplicate_key(err: &Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(WriteError {
            code: DUPLICATE_KEY_CODE,
            ..
        })) | ErrorKind::Command(CommandError {
            code: DUPLICATE_KEY_CODE,
            ..
        })
    )
}

pub(crate) fn map_mongo_error(err: Error) -> StorageError {
    let message = err.to_string();

    match err.kind.as_ref() {
        ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::TimedOut => {
            StorageError::Timeout(message)
        }
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::Authentication { .. } => StorageError::Unavailable(message),
        ErrorKind::BsonDeserialization(_) | ErrorKind::BsonSerialization(_) => {
            StorageError::InvalidData(message)
        }
        ErrorKind::Write(_) | ErrorKind::Command(_) => StorageError::Query(message),
        _ => StorageError::Operation(message),
    }
}
