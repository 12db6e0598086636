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

//! libmpv-backed media handles.
//!
//! A [`Media`] owns a private libmpv context with audio and video output
//! disabled. Opening a location loads it paused and waits until libmpv has
//! finished probing it, at which point its `track-list` property describes the
//! media's tracks.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::{
    error::{BridgeError, Result},
    native::{AudioDetails, NativeTrack, ParseStatus, TrackSource},
};

fn backend_error(what: &str, err: mpv::Error) -> BridgeError {
    BridgeError::Backend(format!("{}: {:?}", what, err))
}

/// An opened media item.
pub struct Media {
    location: String,
    handler: mpv::MpvHandler,
}

impl Media {
    /// Opens `location` and waits up to `timeout` for it to be parsed.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Backend`] if the libmpv context cannot be
    /// created or the location cannot be loaded, and [`BridgeError::Parse`] if
    /// parsing fails or does not finish within `timeout`.
    pub fn open(location: &str, timeout: Duration) -> Result<Self> {
        let mut builder = mpv::MpvHandlerBuilder::new()
            .map_err(|e| backend_error("Failed to create MPV builder", e))?;
        builder
            .set_option("vo", "null")
            .map_err(|e| backend_error("Failed to set no video output", e))?;
        builder
            .set_option("ao", "null")
            .map_err(|e| backend_error("Failed to set no audio output", e))?;
        builder
            .set_option("pause", "yes")
            .map_err(|e| backend_error("Failed to start paused", e))?;
        let handler = builder
            .build()
            .map_err(|e| backend_error("Failed to build MPV handler", e))?;

        let mut media = Self {
            location: location.to_string(),
            handler,
        };

        media
            .handler
            .command(&["loadfile", location, "replace"])
            .map_err(|e| backend_error("Failed to load media", e))?;

        match media.block_until_parsed(timeout) {
            ParseStatus::Done => {
                info!(location, "media parsed");
                Ok(media)
            }
            status => Err(BridgeError::Parse(status)),
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Waits for libmpv to report the outcome of loading the media.
    fn block_until_parsed(&mut self, timeout: Duration) -> ParseStatus {
        let deadline = Instant::now() + timeout;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return ParseStatus::Timeout;
            }

            match self.handler.wait_event(remaining.as_secs_f64()) {
                Some(mpv::Event::FileLoaded) => return ParseStatus::Done,
                Some(mpv::Event::EndFile(_)) | Some(mpv::Event::Shutdown) => {
                    return ParseStatus::Failed;
                }
                _ => {}
            }
        }
    }

    fn track_property(&self, index: i64, name: &str) -> Option<String> {
        self.handler
            .get_property::<&str>(&format!("track-list/{}/{}", index, name))
            .ok()
            .map(str::to_owned)
    }

    fn track_number(&self, index: i64, name: &str) -> Option<u32> {
        self.handler
            .get_property::<i64>(&format!("track-list/{}/{}", index, name))
            .ok()
            .and_then(|value| u32::try_from(value).ok())
    }
}

impl TrackSource for Media {
    fn fetch_tracks(&mut self) -> Result<Vec<NativeTrack>> {
        let count = self
            .handler
            .get_property::<i64>("track-list/count")
            .map_err(|e| BridgeError::QueryFailed(format!("{:?}", e)))?;
        debug!(location = %self.location, count, "enumerating tracks");

        let mut tracks = Vec::new();
        for index in 0..count {
            let kind_tag = self
                .track_property(index, "type")
                .ok_or_else(|| {
                    BridgeError::QueryFailed(format!("track {} has no type", index))
                })?;
            let codec = self
                .track_property(index, "codec")
                .unwrap_or_default();

            let audio = AudioDetails::from_parts(
                self.track_number(index, "demux-channel-count"),
                self.track_number(index, "demux-samplerate"),
            );

            tracks.push(NativeTrack {
                kind_tag,
                codec,
                audio,
            });
        }

        Ok(tracks)
    }
}
