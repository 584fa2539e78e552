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

//! The codec state shared by the encoder and the decoder.
//!
//! Both directions must apply exactly the same transitions in exactly the
//! same situations, or a decoder would drift out of sync with the encoder
//! after the first alphabet switch. Keeping the transitions here, used
//! verbatim from both sides, makes that lockstep structural.

use super::{AUX_INIT, MAX_LATIN_CP, OFFS_MASK, OFFS_MASK_WIDE};
use log::trace;

/// The three state variables that parameterise both coding directions.
///
/// `offs` is the start of the active base-alphabet window (0 = Latin),
/// `aux_offs` the start of the 64-codepoint auxiliary alphabet (0 = the
/// Latin remap), and `wide` selects the 15-bit window of 21-bit mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodecState {
    pub offs: u32,
    pub aux_offs: u32,
    pub wide: bool,
}

impl CodecState {
    pub fn new() -> Self {
        Self {
            offs: 0,
            aux_offs: AUX_INIT,
            wide: false,
        }
    }

    /// Switch to the 13-bit window containing `cp`. Codepoints up to
    /// [`MAX_LATIN_CP`] keep the Latin window active instead, so extended
    /// Latin does not evict ASCII.
    pub fn shift13(&mut self, cp: u32) {
        self.aux_offs = aux_offset(self.offs);
        self.offs = if cp <= MAX_LATIN_CP {
            0
        } else {
            cp & OFFS_MASK
        };
        self.wide = false;
        trace!(
            "shift13: cp {:#x} -> offs {:#x}, aux {:#x}",
            cp,
            self.offs,
            self.aux_offs
        );
    }

    /// Switch to the wide window containing the biased value `shifted`
    /// (`cp - WIDE_START`). The old `offs` becomes the auxiliary alphabet
    /// as-is, without the [`aux_offset`] remap.
    pub fn shift_wide(&mut self, shifted: u32) {
        self.aux_offs = self.offs;
        self.offs = shifted & OFFS_MASK_WIDE;
        self.wide = true;
        trace!(
            "shift_wide: biased cp {:#x} -> offs {:#x}, aux {:#x}",
            shifted,
            self.offs,
            self.aux_offs
        );
    }

    /// Retarget the base alphabet at a Hiragana/Katakana codepoint that was
    /// emitted as an extra-range sequence. The only extra range with a
    /// state change.
    pub fn shift_kana(&mut self, cp: u32) {
        self.aux_offs = aux_offset(self.offs);
        self.offs = cp & OFFS_MASK;
        self.wide = false;
        trace!(
            "shift_kana: cp {:#x} -> offs {:#x}, aux {:#x}",
            cp,
            self.offs,
            self.aux_offs
        );
    }
}

/// Preferred auxiliary window for a 13-bit base alphabet.
///
/// Most scripts are not aligned to 64-codepoint chunks in a useful way, so
/// when a base alphabet is demoted to auxiliary, its window is nudged to
/// cover the most frequent letters of that script. Bases without an entry
/// map to themselves.
pub fn aux_offset(offs: u32) -> u32 {
    match offs {
        0x0080 => AUX_INIT, // Latin-1 Supplement
        0x0380 => 0x0391,   // Greek
        0x0400 => 0x0410,   // Cyrillic
        0x0580 => 0x05BE,   // Hebrew
        0x0530 => 0x0531,   // Armenian
        0x0600 => 0x060B,   // Arabic
        0x0900 => 0x090D,   // Devanagari
        0x0980 => 0x098F,   // Bengali
        0x0A00 => 0x0A02,   // Gurmukhi
        0x0A80 => 0x0A8F,   // Gujarati
        0x0B00 => 0x0B0F,   // Oriya
        0x0B80 => 0x0B8E,   // Tamil
        0x0C80 => 0x0C8E,   // Kannada
        0x0D00 => 0x0D0E,   // Malayalam
        0x0D80 => 0x0D9B,   // Sinhala
        0x0E00 => 0x0E01,   // Thai
        0x0E80 => 0x0E81,   // Lao
        0x0F00 => 0x0F40,   // Tibetan
        0x0F80 => 0x0F90,   // Tibetan
        0x1080 => 0x10B0,   // Georgian
        0x3000 => 0x3040,   // Hiragana
        other => other,
    }
}
