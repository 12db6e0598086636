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

//! Codec description lookup.
//!
//! Maps the short codec identifiers reported by the media library to
//! human-readable descriptions. Descriptions are `'static` NUL-terminated
//! strings shared by the whole process, tracks only ever borrow them.

use std::ffi::CStr;

use crate::model::TrackKind;

const AUDIO_CODECS: &[(&str, &CStr)] = &[
    ("aac", c"MPEG AAC Audio"),
    ("ac3", c"A52 Audio (aka AC3)"),
    ("alac", c"Apple Lossless Audio Codec"),
    ("dts", c"DTS Audio"),
    ("eac3", c"A/52 B Audio (aka E-AC3)"),
    ("flac", c"FLAC (Free Lossless Audio Codec)"),
    ("mp2", c"MPEG Audio layer 1/2"),
    ("mp3", c"MPEG Audio layer 1/2/3"),
    ("opus", c"Opus Audio"),
    ("pcm_f32le", c"PCM 32 bit float little endian"),
    ("pcm_s16be", c"PCM S16 BE"),
    ("pcm_s16le", c"PCM S16 LE"),
    ("pcm_s24le", c"PCM S24 LE"),
    ("pcm_s32le", c"PCM S32 LE"),
    ("pcm_u8", c"PCM U8"),
    ("truehd", c"TrueHD Audio"),
    ("vorbis", c"Vorbis Audio"),
    ("wavpack", c"WavPack Audio"),
    ("wmav2", c"Windows Media Audio 2"),
];

const VIDEO_CODECS: &[(&str, &CStr)] = &[
    ("av1", c"AOMedia's AV1 Video"),
    ("h264", c"H264 - MPEG-4 AVC (part 10)"),
    ("hevc", c"MPEG-H Part2/HEVC (H.265)"),
    ("mjpeg", c"Motion JPEG Video"),
    ("mpeg1video", c"MPEG-1 Video"),
    ("mpeg2video", c"MPEG-1/2 Video"),
    ("mpeg4", c"MPEG-4 Video"),
    ("png", c"PNG Image"),
    ("theora", c"Xiph.org's Theora Video"),
    ("vp8", c"Google/On2's VP8 Video"),
    ("vp9", c"Google/On2's VP9 Video"),
];

const SUBTITLE_CODECS: &[(&str, &CStr)] = &[
    ("ass", c"SubStation Alpha subtitles"),
    ("dvd_subtitle", c"DVD Subpicture"),
    ("hdmv_pgs_subtitle", c"PGS subtitles"),
    ("mov_text", c"MP4 text subtitles"),
    ("subrip", c"SubRip subtitles"),
    ("webvtt", c"WebVTT subtitles"),
];

/// Returns the description for `codec`, or the empty string when the codec is
/// not known.
///
/// The table for `kind` is searched first so that identifiers shared between
/// track types resolve to the right description. Tracks of unknown kind search
/// every table.
pub fn describe(kind: TrackKind, codec: &str) -> &'static CStr {
    let tables: &[&[(&str, &CStr)]] = match kind {
        TrackKind::Audio => &[AUDIO_CODECS, VIDEO_CODECS, SUBTITLE_CODECS],
        TrackKind::Video => &[VIDEO_CODECS, AUDIO_CODECS, SUBTITLE_CODECS],
        TrackKind::Subtitle => &[SUBTITLE_CODECS, AUDIO_CODECS, VIDEO_CODECS],
        TrackKind::Unknown => &[AUDIO_CODECS, VIDEO_CODECS, SUBTITLE_CODECS],
    };

    tables
        .iter()
        .flat_map(|table| table.iter())
        .find(|(name, _)| name.eq_ignore_ascii_case(codec))
        .map(|(_, description)| *description)
        .unwrap_or(c"")
}
