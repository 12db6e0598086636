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

use crate::model::Track;

/// Formats a sample rate in hertz as kilohertz, e.g. `44.1 kHz`.
///
/// # Examples
///
/// ```
/// use tracklist_bridge::util::format::format_rate;
///
/// assert_eq!(format_rate(44100), "44.1 kHz");
/// assert_eq!(format_rate(48000), "48 kHz");
/// ```
pub fn format_rate(rate: u32) -> String {
    let khz = rate / 1000;
    let rest = rate % 1000;
    if rest == 0 {
        format!("{} kHz", khz)
    } else {
        let decimals = format!("{:03}", rest);
        format!("{}.{} kHz", khz, decimals.trim_end_matches('0'))
    }
}

/// Formats a track as one line of the `tracklist` listing.
///
/// Audio tracks include their channel count and sample rate. Codecs without a
/// description are shown as `unknown codec`.
///
/// # Arguments
///
/// * `index` - The track's position in its list.
/// * `track` - The track to describe.
pub fn format_track(index: usize, track: &Track) -> String {
    let codec = match track.codec_str() {
        "" => "unknown codec",
        codec => codec,
    };

    if track.is_audio() {
        format!(
            "#{:<2} {:<8} {} [{} ch, {}]",
            index,
            track.kind,
            codec,
            track.channels,
            format_rate(track.rate)
        )
    } else {
        format!("#{:<2} {:<8} {}", index, track.kind, codec)
    }
}
