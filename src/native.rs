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

//! The seam between the bridge and the native media library.
//!
//! The bridge never talks to a media library directly. Instead, anything that
//! can enumerate the tracks of an opened media item implements
//! [`TrackSource`]. The `mpv` feature provides an implementation backed by
//! libmpv in [`crate::media`].

use std::ffi::CStr;

use crate::{codec, error::Result, model::TrackKind};

/// Audio-specific fields of a native track record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AudioDetails {
    pub channels: u32,
    pub rate: u32,
}

impl AudioDetails {
    /// Assembles an audio sub-record from the fields a native track reports.
    ///
    /// There is no sub-record only when neither field was reported. A missing
    /// field alongside a present one counts as zero.
    pub fn from_parts(channels: Option<u32>, rate: Option<u32>) -> Option<Self> {
        match (channels, rate) {
            (None, None) => None,
            (channels, rate) => Some(Self {
                channels: channels.unwrap_or(0),
                rate: rate.unwrap_or(0),
            }),
        }
    }
}

/// One track record as reported by the native library.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NativeTrack {
    /// The native type tag, e.g. `"audio"`, `"video"` or `"sub"`.
    pub kind_tag: String,
    /// The native codec identifier.
    pub codec: String,
    /// Present when the native library supplied an audio sub-record.
    pub audio: Option<AudioDetails>,
}

impl NativeTrack {
    pub fn kind(&self) -> TrackKind {
        TrackKind::from_tag(&self.kind_tag)
    }
}

/// Outcome of the native library's parsing of a media item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseStatus {
    Done,
    Failed,
    Timeout,
}

/// A media handle whose tracks can be enumerated.
pub trait TrackSource {
    /// Fetches the media's track records in the native enumeration order.
    ///
    /// Implementations copy whatever they need out of native memory and
    /// release the native array before returning. An empty vector means the
    /// media has no tracks; a failed query is an error.
    fn fetch_tracks(&mut self) -> Result<Vec<NativeTrack>>;

    /// Looks up the human-readable description for a codec.
    ///
    /// The returned string is process-wide static data. An unknown codec is
    /// described by the empty string.
    fn codec_description(&self, kind: TrackKind, codec: &str) -> &'static CStr {
        codec::describe(kind, codec)
    }
}
