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

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use utfc::{decode_to_string, encode_to_vec};

fn round_trip(s: &str) -> Vec<u8> {
    let encoded = encode_to_vec(s);
    let decoded = decode_to_string(encoded.iter().copied()).unwrap();
    assert_eq!(decoded, s, "round trip failed for {:?}", s);
    assert!(
        encoded.len() <= 3 * s.chars().count(),
        "size bound exceeded for {:?}: {} bytes",
        s,
        encoded.len(),
    );
    encoded
}

#[test]
fn ascii_encodes_to_itself() {
    for s in [
        "",
        "Hello, World!",
        "x = (a[i] << 2) | b;",
        "\t\r\n\x1b\x7f",
        "~!@#$%^&*()_+`{}|:\"<>?",
    ] {
        assert_eq!(round_trip(s), s.as_bytes());
    }
}

#[test]
fn cp1252_subset_encodes_to_single_bytes() {
    // From the initial state the auxiliary alphabet is Latin-1 Supplement,
    // so its letters cost one byte each with CP-1252 values.
    assert_eq!(round_trip("café"), [0x63, 0x61, 0x66, 0xE9]);
    assert_eq!(round_trip("Ña"), [0xD1, 0x61]);
}

#[test]
fn cyrillic_shift_scenario() {
    let encoded = round_trip("Привет");
    assert_eq!(&encoded[..2], [0x84, 0x1F]);
    // One 13-bit shift, then one byte per letter.
    assert_eq!(encoded.len(), 7);
}

#[test]
fn hiragana_extra_scenario() {
    // Each extra sequence that lands in a new Kana block retargets the
    // base alphabet and demotes the old block to the auxiliary window, so
    // after こ and ん the rest of the word is one byte per codepoint.
    let encoded = round_trip("こんにちは");
    assert_eq!(encoded, [0xB9, 0x53, 0xB9, 0x93, 0xEB, 0xE1, 0xEF]);
    // A run inside one block pays the switch once.
    assert_eq!(round_trip("ちちちち"), [0xB9, 0x61, 0x61, 0x61, 0x61]);
}

#[test]
fn emoji_extra_scenario() {
    assert_eq!(round_trip("😀"), [0xBD, 0xA0]);
    // No state change: two bytes per emoji, and surrounding ASCII is
    // untouched.
    assert_eq!(round_trip("a😀😀b"), [0x61, 0xBD, 0xA0, 0xBD, 0xA0, 0x62]);
}

#[test]
fn linear_b_wide_scenario() {
    assert_eq!(round_trip("𐀀"), [0xA0, 0xD8, 0x00]);
    // A second codepoint in the same wide window costs two bytes.
    assert_eq!(round_trip("𐀀𐀁"), [0xA0, 0xD8, 0x00, 0x58, 0x01]);
}

#[test]
fn latin_after_accented_scenario() {
    // `é` sits in the initial auxiliary alphabet, so `aé` is two bytes.
    assert_eq!(round_trip("aé"), [0x61, 0xE9]);
    // Leaving the Latin-1 window activates the Latin remap: letters,
    // digits, space and hyphen then use 0xC0..0xFF.
    assert_eq!(
        round_trip("Āob-oe"),
        [0x81, 0x00, 0xE8, 0xDB, 0xFF, 0xE8, 0xDE],
    );
}

#[test]
fn plane_sixteen_round_trips() {
    round_trip("\u{102800}");
    round_trip("\u{103000}\u{103001}");
    round_trip("\u{10FFFF}");
    assert_eq!(round_trip("\u{10FFFF}"), [0xB0, 0xD7, 0xFF]);
}

#[test]
fn multilingual_words_round_trip() {
    for s in [
        "содержать",
        "αλήθεια",
        "לעשות",
        "محافظت",
        "आवश्यकता",
        "ๆๆ ไทย",
        "ქართული",
        "カタカナとひらがな",
        "汉字文本",
        "한국어",
        "e = mc²",
        "Zürich — Москва — 東京 🚀",
        "नमस्ते, दुनिया!",
    ] {
        round_trip(s);
    }
}

#[test]
fn mixed_script_transitions_round_trip() {
    // Exercises every state transition in one string: aux hits, extra
    // ranges with and without the Kana retarget, both shifts, and returns
    // to ASCII.
    round_trip("abc Привет мир こんにちは 😀 𐀀𐀁 café — мир abc");
    round_trip("Пξв аб ΑΒΓ अआइ かカ㘎");
}

#[test]
fn encoding_is_append_only() {
    let pieces = ["Hi ", "Привет ", "こんにちは", "😀", "𐀀", " bye", "é-"];
    let mut text = String::new();
    let mut prev = encode_to_vec("");
    for piece in pieces {
        text.push_str(piece);
        let encoded = encode_to_vec(&text);
        assert!(
            encoded.starts_with(&prev),
            "appending {:?} rewrote earlier bytes",
            piece,
        );
        prev = encoded;
    }
}

#[test]
fn decoding_is_deterministic() {
    let encoded = encode_to_vec("státe — 状態 🌍");
    let a = decode_to_string(encoded.iter().copied()).unwrap();
    let b = decode_to_string(encoded.iter().copied()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn truncation_of_any_valid_encoding_fails_or_shrinks() {
    // Dropping the final byte must never produce a longer decode; it
    // either fails (mid-sequence) or loses exactly the last codepoint.
    for s in ["Привет", "こんにちは", "😀", "𐀀", "aé-"] {
        let encoded = encode_to_vec(s);
        let truncated = &encoded[..encoded.len() - 1];
        match decode_to_string(truncated.iter().copied()) {
            Ok(decoded) => {
                let mut chars: Vec<char> = s.chars().collect();
                chars.pop();
                let shorter: String = chars.into_iter().collect();
                assert_eq!(decoded, shorter);
            }
            Err(e) => assert_eq!(e, utfc::DecodeError::TruncatedInput),
        }
    }
}

#[test]
fn random_strings_round_trip() {
    let mut rng = SmallRng::seed_from_u64(0x5F3_C0DE);
    for _ in 0..500 {
        let len = rng.gen_range(0..48);
        let s: String = (0..len).map(|_| rng.gen::<char>()).collect();
        round_trip(&s);
    }
}

#[test]
fn random_script_runs_round_trip() {
    // Uniform codepoints almost never hit the auxiliary or extra paths;
    // build strings as runs within common scripts to cover them.
    const SCRIPTS: &[(u32, u32)] = &[
        (0x0020, 0x007F), // ASCII
        (0x00C0, 0x0100), // Latin-1 Supplement
        (0x0391, 0x03CA), // Greek
        (0x0410, 0x0450), // Cyrillic
        (0x05D0, 0x05EB), // Hebrew
        (0x3041, 0x3097), // Hiragana
        (0x30A1, 0x30F7), // Katakana
        (0x2000, 0x2028), // General punctuation
        (0x1F300, 0x1F700), // Emoji
        (0x10000, 0x1003F), // Linear B
    ];
    let mut rng = SmallRng::seed_from_u64(0xB0C4_11A5);
    for _ in 0..200 {
        let mut s = String::new();
        for _ in 0..rng.gen_range(1..8) {
            let (lo, hi) = SCRIPTS[rng.gen_range(0..SCRIPTS.len())];
            for _ in 0..rng.gen_range(1..12) {
                if let Some(c) = char::from_u32(rng.gen_range(lo..hi)) {
                    s.push(c);
                }
            }
        }
        round_trip(&s);
    }
}

#[test]
fn random_prefix_property() {
    let mut rng = SmallRng::seed_from_u64(0xACE_0F5E);
    for _ in 0..200 {
        let len = rng.gen_range(1..32);
        let chars: Vec<char> = (0..len).map(|_| rng.gen::<char>()).collect();
        let cut = rng.gen_range(0..chars.len());
        let whole: String = chars.iter().collect();
        let prefix: String = chars[..cut].iter().collect();
        assert!(encode_to_vec(&whole).starts_with(&encode_to_vec(&prefix)));
    }
}
