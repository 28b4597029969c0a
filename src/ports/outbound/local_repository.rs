use crate::fetching::domain::Coordinate;
use std::path::{Path, PathBuf};

/// LocalRepository port describing the on-disk artifact layout
///
/// The fetcher only needs to know where an artifact would live; whether the
/// file is actually there is checked against the filesystem.
pub trait LocalRepository {
    /// Base directory of the local repository
    fn base_dir(&self) -> &Path;

    /// Expected path of the artifact file for a coordinate
    fn local_path_for(&self, coordinate: &Coordinate) -> PathBuf;
}
