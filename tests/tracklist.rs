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

use std::{cell::Cell, ffi::CStr};

use tracklist_bridge::{
    AudioDetails, BridgeError, NativeTrack, TrackKind, TrackList, TrackSource,
    ffi::{self, TrackKindCode, TrackListStatus, TrackRecord},
};

/// An in-memory media item that counts how it is queried.
#[derive(Default)]
struct FakeMedia {
    tracks: Vec<NativeTrack>,
    fail: bool,
    fetches: usize,
    lookups: Cell<usize>,
}

impl FakeMedia {
    fn with_tracks(tracks: Vec<NativeTrack>) -> Self {
        Self {
            tracks,
            ..Self::default()
        }
    }
}

impl TrackSource for FakeMedia {
    fn fetch_tracks(&mut self) -> tracklist_bridge::Result<Vec<NativeTrack>> {
        self.fetches += 1;
        if self.fail {
            return Err(BridgeError::QueryFailed("demuxer unavailable".to_string()));
        }
        Ok(self.tracks.clone())
    }

    fn codec_description(&self, _kind: TrackKind, codec: &str) -> &'static CStr {
        self.lookups.set(self.lookups.get() + 1);
        match codec {
            "araw" => c"PCM",
            "h264" => c"H264 - MPEG-4 AVC (part 10)",
            _ => c"",
        }
    }
}

fn audio(codec: &str, channels: u32, rate: u32) -> NativeTrack {
    NativeTrack {
        kind_tag: "audio".to_string(),
        codec: codec.to_string(),
        audio: Some(AudioDetails { channels, rate }),
    }
}

fn video(codec: &str) -> NativeTrack {
    NativeTrack {
        kind_tag: "video".to_string(),
        codec: codec.to_string(),
        audio: None,
    }
}

fn subtitle(codec: &str) -> NativeTrack {
    NativeTrack {
        kind_tag: "sub".to_string(),
        codec: codec.to_string(),
        audio: None,
    }
}

#[test]
fn media_without_tracks_builds_empty_list() {
    let mut media = FakeMedia::default();

    let list = TrackList::build(&mut media).unwrap();
    assert!(list.is_empty());
    assert_eq!(list.length(), 0);
    assert_eq!(
        list.get(0),
        Err(BridgeError::IndexOutOfRange {
            index: 0,
            length: 0
        })
    );
}

#[test]
fn single_audio_track_is_copied() {
    let mut media = FakeMedia::with_tracks(vec![audio("araw", 2, 44100)]);

    let list = TrackList::build(&mut media).unwrap();
    assert_eq!(list.length(), 1);

    let track = list.get(0).unwrap();
    assert_eq!(track.kind, TrackKind::Audio);
    assert_eq!(track.codec, c"PCM");
    assert_eq!(track.channels, 2);
    assert_eq!(track.rate, 44100);
}

#[test]
fn mixed_tracks_keep_native_order() {
    let mut media = FakeMedia::with_tracks(vec![video("h264"), audio("araw", 6, 48000)]);

    let list = TrackList::build(&mut media).unwrap();
    assert_eq!(list.length(), 2);

    let first = list.get(0).unwrap();
    assert_eq!(first.kind, TrackKind::Video);
    assert_eq!(first.codec, c"H264 - MPEG-4 AVC (part 10)");
    assert_eq!((first.channels, first.rate), (0, 0));

    let second = list.get(1).unwrap();
    assert_eq!(second.kind, TrackKind::Audio);
    assert_eq!((second.channels, second.rate), (6, 48000));
}

#[test]
fn length_matches_native_count() {
    for count in 0..5 {
        let tracks = (0..count).map(|_| subtitle("subrip")).collect();
        let mut media = FakeMedia::with_tracks(tracks);

        let list = TrackList::build(&mut media).unwrap();
        assert_eq!(list.length(), count);
        assert!(list.iter().all(|t| t.kind == TrackKind::Subtitle));
    }
}

#[test]
fn native_library_queried_once_with_one_lookup_per_track() {
    let mut media =
        FakeMedia::with_tracks(vec![video("h264"), audio("araw", 2, 44100), subtitle("ass")]);

    TrackList::build(&mut media).unwrap().release();
    assert_eq!(media.fetches, 1);
    assert_eq!(media.lookups.get(), 3);
}

#[test]
fn index_past_end_is_rejected() {
    let mut media = FakeMedia::with_tracks(vec![audio("araw", 1, 8000)]);

    let list = TrackList::build(&mut media).unwrap();
    assert_eq!(
        list.get(1),
        Err(BridgeError::IndexOutOfRange {
            index: 1,
            length: 1
        })
    );
    assert_eq!(
        list.get(usize::MAX),
        Err(BridgeError::IndexOutOfRange {
            index: usize::MAX,
            length: 1
        })
    );
}

#[test]
fn failed_query_is_not_an_empty_list() {
    let mut media = FakeMedia {
        fail: true,
        ..FakeMedia::default()
    };

    assert_eq!(
        TrackList::build(&mut media),
        Err(BridgeError::QueryFailed("demuxer unavailable".to_string()))
    );
    assert_eq!(media.lookups.get(), 0);
}

#[test]
fn unknown_type_tag_is_kept_as_unknown() {
    let mut media = FakeMedia::with_tracks(vec![NativeTrack {
        kind_tag: "data".to_string(),
        codec: "bin_data".to_string(),
        audio: Some(AudioDetails {
            channels: 2,
            rate: 44100,
        }),
    }]);

    let list = TrackList::build(&mut media).unwrap();
    let track = list.get(0).unwrap();
    assert_eq!(track.kind, TrackKind::Unknown);
    assert_eq!(track.codec, c"");
    assert_eq!((track.channels, track.rate), (0, 0));
}

fn registered(tracks: Vec<NativeTrack>) -> u64 {
    let mut media = FakeMedia::with_tracks(tracks);
    ffi::register(TrackList::build(&mut media).unwrap())
}

fn empty_record() -> TrackRecord {
    TrackRecord {
        kind: TrackKindCode::Unknown,
        codec: std::ptr::null(),
        codec_len: 0,
        channels: 0,
        rate: 0,
    }
}

#[test]
fn c_boundary_reads_tracks() {
    let handle = registered(vec![video("h264"), audio("araw", 2, 44100)]);
    assert_eq!(ffi::tracklist_length(handle), 2);

    let mut record = empty_record();
    let status = unsafe { ffi::tracklist_get(handle, 1, &mut record) };
    assert_eq!(status, TrackListStatus::Ok);
    assert_eq!(record.kind, TrackKindCode::Audio);
    assert_eq!((record.channels, record.rate), (2, 44100));

    let codec = unsafe { CStr::from_ptr(record.codec) };
    assert_eq!(codec, c"PCM");
    assert_eq!(record.codec_len, 3);

    ffi::tracklist_release(handle);
}

/// A media item that relies on the built-in codec descriptions.
struct TableMedia(Vec<NativeTrack>);

impl TrackSource for TableMedia {
    fn fetch_tracks(&mut self) -> tracklist_bridge::Result<Vec<NativeTrack>> {
        Ok(self.0.clone())
    }
}

#[test]
fn c_boundary_codec_reads_as_c_string() {
    let mut media = TableMedia(vec![audio("flac", 2, 44100), video("not-a-codec")]);
    let handle = ffi::register(TrackList::build(&mut media).unwrap());

    let mut record = empty_record();
    let status = unsafe { ffi::tracklist_get(handle, 0, &mut record) };
    assert_eq!(status, TrackListStatus::Ok);
    let codec = unsafe { CStr::from_ptr(record.codec) };
    assert_eq!(codec.to_str(), Ok("FLAC (Free Lossless Audio Codec)"));
    assert_eq!(record.codec_len, codec.count_bytes());

    let status = unsafe { ffi::tracklist_get(handle, 1, &mut record) };
    assert_eq!(status, TrackListStatus::Ok);
    let codec = unsafe { CStr::from_ptr(record.codec) };
    assert_eq!(codec.to_str(), Ok(""));
    assert_eq!(record.codec_len, 0);

    ffi::tracklist_release(handle);
}

#[test]
fn c_boundary_bounds_checks_index() {
    let handle = registered(vec![video("h264")]);

    let mut record = empty_record();
    let status = unsafe { ffi::tracklist_get(handle, 5, &mut record) };
    assert_eq!(status, TrackListStatus::IndexOutOfRange);
    assert!(record.codec.is_null());

    ffi::tracklist_release(handle);
}

#[test]
fn c_boundary_empty_list_is_not_invalid() {
    let handle = registered(vec![]);
    assert_eq!(ffi::tracklist_length(handle), 0);

    let mut record = empty_record();
    let status = unsafe { ffi::tracklist_get(handle, 0, &mut record) };
    assert_eq!(status, TrackListStatus::IndexOutOfRange);

    ffi::tracklist_release(handle);
}

#[test]
fn c_boundary_rejects_released_handle() {
    let handle = registered(vec![audio("araw", 2, 44100)]);
    ffi::tracklist_release(handle);

    assert_eq!(ffi::tracklist_length(handle), -1);

    let mut record = empty_record();
    let status = unsafe { ffi::tracklist_get(handle, 0, &mut record) };
    assert_eq!(status, TrackListStatus::InvalidHandle);

    // Releasing again is a no-op.
    ffi::tracklist_release(handle);
    assert_eq!(ffi::unregister(handle), Err(BridgeError::InvalidHandle));
}

#[test]
fn c_boundary_allocate_issues_live_handle() {
    let mut handle = 0;
    let status = unsafe { ffi::tracklist_allocate(3, &mut handle) };
    assert_eq!(status, TrackListStatus::Ok);
    assert_ne!(handle, 0);
    assert_eq!(ffi::tracklist_length(handle), 0);

    ffi::tracklist_release(handle);
    assert_eq!(ffi::tracklist_length(handle), -1);
}
