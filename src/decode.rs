/*
 * Copyright (C) 2022 taylor.fish <contact@taylor.fish>
 *
 * This file is part of UTF-C.
 *
 * UTF-C is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published
 * by the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * UTF-C is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with UTF-C. If not, see <https://www.gnu.org/licenses/>.
 */

//! Functions and types for decoding UTF-C data.
//!
//! The decoder assumes well-formed UTF-C. It is not hardened against
//! adversarial input beyond what is needed to fail cleanly: every decoded
//! value is checked to be a Unicode scalar value, and every multi-byte
//! sequence is checked to be complete.

use super::ranges::{map_index, EXTRA_RANGES, KANA, LATIN_RANGES};
use super::state::CodecState;
use super::{MARKER_AUX, MARKER_EXTRA, MARKER_SHIFT, MARKER_SHIFT_WIDE};
use super::WIDE_START;

use core::fmt::{self, Formatter};
use core::iter::{Fuse, FusedIterator};

#[cfg(feature = "alloc")]
use alloc::string::String;

/// An error encountered while decoding UTF-C bytes.
///
/// Errors denote corrupt input; nothing is retried and there is no
/// recovery. See [`ByteDecoder`] for what is produced before the error.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// A marker byte required more continuation bytes than the input held.
    TruncatedInput,
    /// A sequence decoded to a value outside the encodable set: an
    /// extra-range index past the last range, or a codepoint that is not a
    /// Unicode scalar value. The payload is the rejected value.
    InvalidEncoding(u32),
}

use DecodeError as Error;

/// Alias of <code>[Result]\<T, [DecodeError]></code>.
pub type DecodeResult<T> = Result<T, DecodeError>;

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Self::TruncatedInput => {
                write!(f, "input ends inside a multi-byte sequence")
            }
            Self::InvalidEncoding(v) => {
                write!(f, "invalid encoded value: {:#x}", v)
            }
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for DecodeError {}

/// Iterator returned by [`decode_bytes`].
///
/// Yields the codepoints decoded before any corrupt boundary, then yields
/// the error once, then fuses. Callers that want all-or-nothing behaviour
/// can collect into a `Result` (see [`decode_to_string`]).
///
/// [`decode_to_string`]: crate::decode_to_string
pub struct ByteDecoder<I> {
    iter: Fuse<I>,
    state: CodecState,
    failed: bool,
}

impl<I: Iterator> ByteDecoder<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self {
            iter: iter.fuse(),
            state: CodecState::new(),
            failed: false,
        }
    }
}

impl<I> ByteDecoder<I>
where
    I: Iterator<Item = u8>,
{
    fn continuation(&mut self) -> DecodeResult<u32> {
        self.iter
            .next()
            .map(u32::from)
            .ok_or(Error::TruncatedInput)
    }

    /// Decodes the sequence led by `b`, consuming its continuation bytes
    /// and applying the same state transitions the encoder performed when
    /// it emitted them.
    fn decode_seq(&mut self, b: u8) -> DecodeResult<char> {
        let cp = if b & 0xC0 == MARKER_AUX {
            let low = u32::from(b & 0x3F);
            if self.state.aux_offs == 0 {
                map_index(low as u16, &LATIN_RANGES)
                    .ok_or(Error::InvalidEncoding(low))?
            } else {
                self.state.aux_offs + low
            }
        } else if b & 0xF0 == MARKER_EXTRA && b != MARKER_EXTRA {
            // The leading byte carries the extra index biased up by one
            // nibble; 0xB0 itself is the wide-shift lead for plane 16.
            let v = ((u32::from(b & 0x0F) - 1) << 8) | self.continuation()?;
            let cp = map_index(v as u16, &EXTRA_RANGES)
                .ok_or(Error::InvalidEncoding(v))?;
            if KANA.contains(cp) {
                self.state.shift_kana(cp);
            }
            cp
        } else if b & 0xE0 == MARKER_SHIFT_WIDE {
            let v = (u32::from(b & 0x1F) << 16)
                | (self.continuation()? << 8)
                | self.continuation()?;
            self.state.shift_wide(v);
            v + WIDE_START
        } else if b & 0xE0 == MARKER_SHIFT {
            let cp = (u32::from(b & 0x1F) << 8) | self.continuation()?;
            self.state.shift13(cp);
            cp
        } else if self.state.wide {
            let v = self.state.offs
                | (u32::from(b) << 8)
                | self.continuation()?;
            WIDE_START + v
        } else {
            self.state.offs | u32::from(b)
        };
        char::from_u32(cp).ok_or(Error::InvalidEncoding(cp))
    }
}

impl<I> Iterator for ByteDecoder<I>
where
    I: Iterator<Item = u8>,
{
    type Item = DecodeResult<char>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let b = self.iter.next()?;
        Some(self.decode_seq(b).map_err(|e| {
            self.failed = true;
            e
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let (lower, upper) = self.iter.size_hint();
        // Every codepoint consumes between one and three bytes.
        (lower / 3, upper)
    }
}

impl<I: Iterator<Item = u8>> FusedIterator for ByteDecoder<I> {}

/// Decodes a sequence of UTF-C bytes.
pub fn decode_bytes<I>(bytes: I) -> ByteDecoder<I::IntoIter>
where
    I: IntoIterator<Item = u8>,
{
    ByteDecoder::new(bytes.into_iter())
}

/// Decodes a sequence of UTF-C bytes into a newly allocated [`String`].
///
/// On corrupt input the partially decoded text is discarded and the first
/// error is returned.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn decode_to_string<I>(bytes: I) -> DecodeResult<String>
where
    I: IntoIterator<Item = u8>,
{
    decode_bytes(bytes).collect()
}
