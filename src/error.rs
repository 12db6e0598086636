// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Error types for the track list bridge.
//!
//! Every bridge operation reports failure through [`BridgeError`] rather than
//! through sentinel values, so that an empty list, a bad index and a dead
//! handle are always distinguishable by the caller.

use thiserror::Error;

use crate::native::ParseStatus;

pub type Result<T> = std::result::Result<T, BridgeError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// Room for the requested number of tracks could not be reserved.
    #[error("failed to allocate a track list with room for {0} tracks")]
    OutOfMemory(usize),

    /// The handle does not refer to a live track list.
    #[error("track list handle is empty or has already been released")]
    InvalidHandle,

    #[error("track index {index} is out of range for a list of {length} tracks")]
    IndexOutOfRange { index: usize, length: usize },

    /// The native library failed to enumerate the media's tracks.
    #[error("native track query failed: {0}")]
    QueryFailed(String),

    /// Parsing of the media did not complete successfully.
    #[error("media parsing finished with status {0:?}")]
    Parse(ParseStatus),

    /// Any other failure reported by the native media library.
    #[error("media library error: {0}")]
    Backend(String),
}
