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

//! Simplified track records handed out by the bridge.

use std::{ffi::CStr, fmt};

/// The type of a media track, taken from the native library's type tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TrackKind {
    Audio,
    Video,
    Subtitle,
    Unknown,
}

impl TrackKind {
    /// Maps a native type tag to a track kind.
    ///
    /// Unrecognised tags map to [`TrackKind::Unknown`] rather than failing,
    /// the native library may grow new track types at any time.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "audio" => TrackKind::Audio,
            "video" => TrackKind::Video,
            "sub" | "subtitle" | "text" => TrackKind::Subtitle,
            _ => TrackKind::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrackKind::Audio => "audio",
            TrackKind::Video => "video",
            TrackKind::Subtitle => "subtitle",
            TrackKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Metadata for one media track.
///
/// `channels` and `rate` are only meaningful for audio tracks and are zero
/// for every other kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Track {
    pub kind: TrackKind,
    /// Human-readable codec description.
    ///
    /// This is borrowed from the process-wide static description table and is
    /// never owned by the track. Callers must not attempt to free it. It is
    /// NUL terminated so it can be handed to C unchanged.
    pub codec: &'static CStr,
    pub channels: u32,
    pub rate: u32,
}

impl Track {
    pub fn is_audio(&self) -> bool {
        self.kind == TrackKind::Audio
    }

    /// The codec description as UTF-8, or the empty string if it is not.
    pub fn codec_str(&self) -> &'static str {
        self.codec.to_str().unwrap_or_default()
    }
}
