use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Failed to resolve working directory: {0}")]
    DirectoryResolution(#[from] std::io::Error),
}
