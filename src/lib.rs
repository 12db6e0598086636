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

//! # Track list bridge.
//!
//! Copies the track metadata of a native media item (type, codec description,
//! channel count and sample rate) into an owned, read-only [`TrackList`].
//!
//! * [`TrackList::build`] queries a [`TrackSource`] once and copies every
//!   track in native enumeration order.
//! * [`TrackList::get`] and [`TrackList::length`] give bounds-checked access.
//! * [`TrackList::release`] (or simply dropping the list) frees it. A released
//!   list cannot be used again.
//!
//! The [`ffi`] module exposes the same operations to C callers through
//! integer handles, and the `mpv` feature adds a libmpv-backed
//! [`media::Media`] to build lists from.

pub mod codec;
pub mod config;
pub mod error;
pub mod ffi;
#[cfg(feature = "mpv")]
pub mod media;
pub mod model;
pub mod native;
pub mod tracklist;
pub mod util;

pub use error::{BridgeError, Result};
pub use model::{Track, TrackKind};
pub use native::{AudioDetails, NativeTrack, ParseStatus, TrackSource};
pub use tracklist::TrackList;
