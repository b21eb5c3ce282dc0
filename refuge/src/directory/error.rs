use refuge_core::remote::RemoteStoreError;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DirectoryError {
    #[error("failed to fetch shelters: {0}")]
    FetchFailed(#[from] RemoteStoreError),
}
