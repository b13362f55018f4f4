#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum CreateError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("inaccessible storage: {0}")]
    Inaccessible(String),
    #[error("malformed document: {0}")]
    Malformed(String),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_from_storage_error() {
        assert!(matches!(
            ReadError::from(StorageError::Inaccessible("locked".into())),
            ReadError::Storage(StorageError::Inaccessible(reason)) if reason == "locked"
        ));
    }

    #[test]
    fn test_create_error_from_storage_error() {
        assert!(matches!(
            CreateError::from(StorageError::Malformed("not an array".into())),
            CreateError::Storage(StorageError::Malformed(reason)) if reason == "not an array"
        ));
    }
}
