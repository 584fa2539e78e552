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

//! UTF-C is a stateful variable-length Unicode encoding that stores many
//! short strings in less memory than UTF-8.
//!
//! The encoder keeps a small amount of state — the currently active
//! 128-codepoint (or, in wide mode, 32768-codepoint) *base alphabet* and a
//! 64-codepoint *auxiliary alphabet* — and encodes each scalar value with
//! the shortest of five variants that is legal under that state. Text that
//! stays within one script mostly costs one byte per character after an
//! initial two- or three-byte shift:
//!
//! ```text
//! "Привет"     UTF-8: 12 bytes    UTF-C: 7 bytes
//! "こんにちは"  UTF-8: 15 bytes    UTF-C: 7 bytes
//! ```
//!
//! Pure ASCII input encodes to exactly its ASCII bytes, and a useful subset
//! of Latin-1/CP-1252 text (e.g. `"café"`) also costs one byte per
//! character. UTF-C is **not** ASCII-transparent for arbitrary input, not
//! self-synchronising, and unsuitable for wire protocols or any trust
//! boundary; it is an in-memory storage optimization. Long texts are better
//! served by a general-purpose compressor.
//!
//! Encoding cannot fail: input is a sequence of [`char`], which is a Unicode
//! scalar value by construction. Decoding assumes well-formed UTF-C and
//! reports corruption via [`DecodeError`].
//!
//! This crate provides both a binary and a library.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

mod ranges;
mod state;

pub mod decode;
pub mod encode;

#[cfg(feature = "alloc")]
extern crate alloc;

/// Codepoints at or below this bound keep `offs` at the Latin window after a
/// 13-bit shift, so accented Latin text stays one byte per ASCII character.
const MAX_LATIN_CP: u32 = 0x02FF;

/// Codepoints at or above this bound use wide (21-bit) mode; everything
/// below has a shorter form, so wide payloads are biased down by this much.
const WIDE_START: u32 = 0x2800;

/// `offs` holds the high bits of the active window under one of these masks.
const OFFS_MASK: u32 = 0xFFFF_FF80;
const OFFS_MASK_WIDE: u32 = 0xFFFF_8000;

/// Marker bits of the five coding variants. `MARKER_EXTRA` overlaps
/// `MARKER_SHIFT_WIDE`; the decoder tests the tighter mask first.
const MARKER_AUX: u8 = 0b1100_0000;
const MARKER_SHIFT: u8 = 0b1000_0000;
const MARKER_SHIFT_WIDE: u8 = 0b1010_0000;
const MARKER_EXTRA: u8 = 0b1011_0000;

/// Initial auxiliary alphabet: the Latin-1 Supplement letters, which makes
/// the encoding of `"é"`-style input coincide with CP-1252.
const AUX_INIT: u32 = 0x00C0;

pub use decode::decode_bytes;
#[cfg(feature = "alloc")]
pub use decode::decode_to_string;
pub use decode::{ByteDecoder, DecodeError, DecodeResult};

pub use encode::encode_chars;
pub use encode::encode_str;
#[cfg(feature = "alloc")]
pub use encode::encode_to_vec;
pub use encode::CharEncoder;
