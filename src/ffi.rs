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

//! C boundary for the track list bridge.
//!
//! Lists handed across the boundary live in a process-wide registry and are
//! referred to by non-zero integer handles. A handle that was never issued, or
//! that has already been released, is reported as
//! [`TrackListStatus::InvalidHandle`] instead of being dereferenced.
//!
//! Every function returns a [`TrackListStatus`] and writes its result through
//! an out-pointer, except [`tracklist_length`] which keeps the `-1` sentinel
//! for invalid handles and [`tracklist_release`] which returns nothing.

use std::{
    collections::HashMap,
    ffi::c_char,
    sync::{
        LazyLock, Mutex, MutexGuard,
        atomic::{AtomicU64, Ordering},
    },
};

#[cfg(feature = "mpv")]
use std::{ffi::CStr, time::Duration};

use tracing::warn;

#[cfg(feature = "mpv")]
use crate::media::Media;
use crate::{
    error::{BridgeError, Result},
    model::{Track, TrackKind},
    tracklist::TrackList,
};

/// Opaque handle to a registered track list. Zero is never a valid handle.
pub type TrackListHandle = u64;

static NEXT_HANDLE: AtomicU64 = AtomicU64::new(1);

static REGISTRY: LazyLock<Mutex<HashMap<TrackListHandle, TrackList>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackListStatus {
    Ok = 0,
    OutOfMemory = 1,
    InvalidHandle = 2,
    IndexOutOfRange = 3,
    QueryFailed = 4,
    Backend = 5,
}

impl From<&BridgeError> for TrackListStatus {
    fn from(err: &BridgeError) -> Self {
        match err {
            BridgeError::OutOfMemory(_) => TrackListStatus::OutOfMemory,
            BridgeError::InvalidHandle => TrackListStatus::InvalidHandle,
            BridgeError::IndexOutOfRange { .. } => TrackListStatus::IndexOutOfRange,
            BridgeError::QueryFailed(_) => TrackListStatus::QueryFailed,
            BridgeError::Parse(_) | BridgeError::Backend(_) => TrackListStatus::Backend,
        }
    }
}

/// Track type codes, numbered the way libvlc numbers its track types.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackKindCode {
    Unknown = -1,
    Audio = 0,
    Video = 1,
    Subtitle = 2,
}

impl From<TrackKind> for TrackKindCode {
    fn from(kind: TrackKind) -> Self {
        match kind {
            TrackKind::Audio => TrackKindCode::Audio,
            TrackKind::Video => TrackKindCode::Video,
            TrackKind::Subtitle => TrackKindCode::Subtitle,
            TrackKind::Unknown => TrackKindCode::Unknown,
        }
    }
}

/// A track as seen from C.
///
/// `codec` is a NUL-terminated UTF-8 string in static storage and must not be
/// freed. `codec_len` is its length in bytes, not counting the NUL.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct TrackRecord {
    pub kind: TrackKindCode,
    pub codec: *const c_char,
    pub codec_len: usize,
    pub channels: u32,
    pub rate: u32,
}

impl From<&Track> for TrackRecord {
    fn from(track: &Track) -> Self {
        Self {
            kind: track.kind.into(),
            codec: track.codec.as_ptr(),
            codec_len: track.codec.count_bytes(),
            channels: track.channels,
            rate: track.rate,
        }
    }
}

fn registry() -> MutexGuard<'static, HashMap<TrackListHandle, TrackList>> {
    // A panic while holding the lock cannot leave a half-inserted list behind.
    REGISTRY.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Moves a list into the registry and returns its handle.
pub fn register(list: TrackList) -> TrackListHandle {
    let handle = NEXT_HANDLE.fetch_add(1, Ordering::Relaxed);
    registry().insert(handle, list);
    handle
}

/// Runs `f` against the list behind `handle`.
pub fn with_list<T>(
    handle: TrackListHandle,
    f: impl FnOnce(&TrackList) -> Result<T>,
) -> Result<T> {
    let lists = registry();
    let list = lists.get(&handle).ok_or(BridgeError::InvalidHandle)?;
    f(list)
}

/// Removes the list behind `handle` from the registry, returning it.
pub fn unregister(handle: TrackListHandle) -> Result<TrackList> {
    registry().remove(&handle).ok_or(BridgeError::InvalidHandle)
}

fn status_of<T>(result: &Result<T>) -> TrackListStatus {
    match result {
        Ok(_) => TrackListStatus::Ok,
        Err(err) => {
            warn!(%err, "track list call failed");
            err.into()
        }
    }
}

/// Allocates an empty list with room for `size` tracks.
///
/// # Safety
///
/// `out` must be null or valid for a write of one handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tracklist_allocate(
    size: usize,
    out: *mut TrackListHandle,
) -> TrackListStatus {
    if out.is_null() {
        return TrackListStatus::InvalidHandle;
    }

    let result = TrackList::allocate(size).map(register);
    let status = status_of(&result);
    if let Ok(handle) = result {
        unsafe { out.write(handle) };
    }
    status
}

/// Opens the media at `location` and waits up to `timeout_ms` for it to be
/// parsed. On success the new media is written to `out` and must be passed to
/// [`media_release`] exactly once.
///
/// # Safety
///
/// `location` must be null or a valid NUL-terminated string. `out` must be
/// null or valid for a write of one pointer.
#[cfg(feature = "mpv")]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn media_open(
    location: *const c_char,
    timeout_ms: u64,
    out: *mut *mut Media,
) -> TrackListStatus {
    if location.is_null() || out.is_null() {
        return TrackListStatus::InvalidHandle;
    }

    let location = unsafe { CStr::from_ptr(location) };
    let result = location
        .to_str()
        .map_err(|_| BridgeError::Backend("media location is not valid UTF-8".to_string()))
        .and_then(|location| Media::open(location, Duration::from_millis(timeout_ms)));
    let status = status_of(&result);
    if let Ok(media) = result {
        unsafe { out.write(Box::into_raw(Box::new(media))) };
    }
    status
}

/// Releases media returned by [`media_open`]. Null is ignored.
///
/// # Safety
///
/// `media` must be null or a pointer obtained from [`media_open`] that has not
/// been released yet.
#[cfg(feature = "mpv")]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn media_release(media: *mut Media) {
    if media.is_null() {
        return;
    }

    drop(unsafe { Box::from_raw(media) });
}

/// Builds a list from the tracks of `media`.
///
/// A media item with no tracks yields a valid handle to an empty list.
///
/// # Safety
///
/// `media` must be null or a live pointer from [`media_open`] that is not
/// accessed elsewhere for the duration of the call. `out` must be null or
/// valid for a write of one handle.
#[cfg(feature = "mpv")]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tracklist_build(
    media: *mut Media,
    out: *mut TrackListHandle,
) -> TrackListStatus {
    if media.is_null() || out.is_null() {
        return TrackListStatus::InvalidHandle;
    }

    let media = unsafe { &mut *media };
    let result = TrackList::build(media).map(register);
    let status = status_of(&result);
    if let Ok(handle) = result {
        unsafe { out.write(handle) };
    }
    status
}

/// Copies the track at `index` into `out`.
///
/// # Safety
///
/// `out` must be null or valid for a write of one [`TrackRecord`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tracklist_get(
    handle: TrackListHandle,
    index: usize,
    out: *mut TrackRecord,
) -> TrackListStatus {
    if out.is_null() {
        return TrackListStatus::InvalidHandle;
    }

    let result = with_list(handle, |list| list.get(index).map(TrackRecord::from));
    let status = status_of(&result);
    if let Ok(record) = result {
        unsafe { out.write(record) };
    }
    status
}

/// Returns the number of tracks behind `handle`, or `-1` if the handle is
/// invalid.
#[unsafe(no_mangle)]
pub extern "C" fn tracklist_length(handle: TrackListHandle) -> i64 {
    with_list(handle, |list| Ok(list.length()))
        .ok()
        .and_then(|length| i64::try_from(length).ok())
        .unwrap_or(-1)
}

/// Releases the list behind `handle`. Invalid handles are ignored.
#[unsafe(no_mangle)]
pub extern "C" fn tracklist_release(handle: TrackListHandle) {
    if let Ok(list) = unregister(handle) {
        list.release();
    }
}
