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

//! Track list construction, access and teardown.
//!
//! A [`TrackList`] is an owned, read-only snapshot of a media item's tracks.
//! It is built once from a [`TrackSource`], read by index, and released by
//! dropping it or by calling [`TrackList::release`]. Both consume the list, so
//! reading a released list is rejected at compile time.

use std::slice;

use tracing::{debug, trace};

use crate::{
    error::{BridgeError, Result},
    model::Track,
    native::TrackSource,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrackList {
    tracks: Vec<Track>,
}

impl TrackList {
    /// A list with no tracks.
    pub fn empty() -> Self {
        Self { tracks: Vec::new() }
    }

    /// Allocates an empty list with room for exactly `size` tracks.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::OutOfMemory`] if the room cannot be reserved.
    pub fn allocate(size: usize) -> Result<Self> {
        let mut tracks = Vec::new();
        tracks
            .try_reserve_exact(size)
            .map_err(|_| BridgeError::OutOfMemory(size))?;

        Ok(Self { tracks })
    }

    /// Builds a list from the tracks of an opened media item.
    ///
    /// The source is queried once for its track records and once per track for
    /// a codec description. Tracks keep the native enumeration order. Channel
    /// count and sample rate are copied for audio tracks only, every other
    /// kind reports zero for both.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::QueryFailed`] (or whatever the source reports) if
    /// the tracks cannot be enumerated, and [`BridgeError::OutOfMemory`] if
    /// the list cannot be allocated.
    pub fn build<S: TrackSource + ?Sized>(source: &mut S) -> Result<Self> {
        let native_tracks = source.fetch_tracks()?;
        debug!(count = native_tracks.len(), "fetched native tracks");

        if native_tracks.is_empty() {
            return Ok(Self::empty());
        }

        let mut list = Self::allocate(native_tracks.len())?;

        for native in &native_tracks {
            let kind = native.kind();
            let codec = source.codec_description(kind, &native.codec);

            let mut track = Track {
                kind,
                codec,
                channels: 0,
                rate: 0,
            };

            if track.is_audio() {
                if let Some(audio) = native.audio {
                    track.channels = audio.channels;
                    track.rate = audio.rate;
                }
            }

            trace!(index = list.tracks.len(), ?track, "copied track");
            list.tracks.push(track);
        }

        Ok(list)
    }

    /// Returns the track at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::IndexOutOfRange`] if `index` is not less than
    /// [`TrackList::length`], which is always the case for an empty list.
    pub fn get(&self, index: usize) -> Result<&Track> {
        self.tracks
            .get(index)
            .ok_or(BridgeError::IndexOutOfRange {
                index,
                length: self.tracks.len(),
            })
    }

    pub fn length(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    /// Releases the list and every track it owns.
    pub fn release(self) {
        debug!(count = self.tracks.len(), "releasing track list");
        drop(self);
    }
}

impl<'a> IntoIterator for &'a TrackList {
    type Item = &'a Track;
    type IntoIter = slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
