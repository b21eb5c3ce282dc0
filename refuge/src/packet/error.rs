use refuge_core::storage::StorageError;

use crate::directory::DirectoryError;

#[derive(thiserror::Error, Debug)]
pub enum PacketError {
    #[error("the safety packet can only be downloaded while online")]
    Offline,
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error("failed to store safety packet: {0}")]
    Storage(#[from] StorageError),
}
