//! Glyph metrics for the standard 14 fonts.
//!
//! Generated from the Adobe Font Metrics files for the core fonts. Each entry
//! is `(rune, code point in the font's built-in encoding, width, glyph name)`.
//! Widths are in thousandths of the font size. Do not edit by hand.

use crate::metrics::GlyphInfo;

const fn g(rune: char, code_point: i16, width: u16, name: &'static str) -> GlyphInfo {
    GlyphInfo {
        rune,
        code_point: if code_point < 0 { None } else { Some(code_point as u8) },
        width,
        name,
    }
}

pub(crate) static COURIER: &[GlyphInfo] = &[
    g(' ', 0x20, 600, "space"),
    g('!', 0x21, 600, "exclam"),
    g('"', 0x22, 600, "quotedbl"),
    g('#', 0x23, 600, "numbersign"),
    g('$', 0x24, 600, "dollar"),
    g('%', 0x25, 600, "percent"),
    g('&', 0x26, 600, "ampersand"),
    g('\u{2019}', 0x27, 600, "quoteright"),
    g('(', 0x28, 600, "parenleft"),
    g(')', 0x29, 600, "parenright"),
    g('*', 0x2a, 600, "asterisk"),
    g('+', 0x2b, 600, "plus"),
    g(',', 0x2c, 600, "comma"),
    g('-', 0x2d, 600, "hyphen"),
    g('.', 0x2e, 600, "period"),
    g('/', 0x2f, 600, "slash"),
    g('0', 0x30, 600, "zero"),
    g('1', 0x31, 600, "one"),
    g('2', 0x32, 600, "two"),
    g('3', 0x33, 600, "three"),
    g('4', 0x34, 600, "four"),
    g('5', 0x35, 600, "five"),
    g('6', 0x36, 600, "six"),
    g('7', 0x37, 600, "seven"),
    g('8', 0x38, 600, "eight"),
    g('9', 0x39, 600, "nine"),
    g(':', 0x3a, 600, "colon"),
    g(';', 0x3b, 600, "semicolon"),
    g('<', 0x3c, 600, "less"),
    g('=', 0x3d, 600, "equal"),
    g('>', 0x3e, 600, "greater"),
    g('?', 0x3f, 600, "question"),
    g('@', 0x40, 600, "at"),
    g('A', 0x41, 600, "A"),
    g('B', 0x42, 600, "B"),
    g('C', 0x43, 600, "C"),
    g('D', 0x44, 600, "D"),
    g('E', 0x45, 600, "E"),
    g('F', 0x46, 600, "F"),
    g('G', 0x47, 600, "G"),
    g('H', 0x48, 600, "H"),
    g('I', 0x49, 600, "I"),
    g('J', 0x4a, 600, "J"),
    g('K', 0x4b, 600, "K"),
    g('L', 0x4c, 600, "L"),
    g('M', 0x4d, 600, "M"),
    g('N', 0x4e, 600, "N"),
    g('O', 0x4f, 600, "O"),
    g('P', 0x50, 600, "P"),
    g('Q', 0x51, 600, "Q"),
    g('R', 0x52, 600, "R"),
    g('S', 0x53, 600, "S"),
    g('T', 0x54, 600, "T"),
    g('U', 0x55, 600, "U"),
    g('V', 0x56, 600, "V"),
    g('W', 0x57, 600, "W"),
    g('X', 0x58, 600, "X"),
    g('Y', 0x59, 600, "Y"),
    g('Z', 0x5a, 600, "Z"),
    g('[', 0x5b, 600, "bracketleft"),
    g('\\', 0x5c, 600, "backslash"),
    g(']', 0x5d, 600, "bracketright"),
    g('^', 0x5e, 600, "asciicircum"),
    g('_', 0x5f, 600, "underscore"),
    g('\u{2018}', 0x60, 600, "quoteleft"),
    g('a', 0x61, 600, "a"),
    g('b', 0x62, 600, "b"),
    g('c', 0x63, 600, "c"),
    g('d', 0x64, 600, "d"),
    g('e', 0x65, 600, "e"),
    g('f', 0x66, 600, "f"),
    g('g', 0x67, 600, "g"),
    g('h', 0x68, 600, "h"),
    g('i', 0x69, 600, "i"),
    g('j', 0x6a, 600, "j"),
    g('k', 0x6b, 600, "k"),
    g('l', 0x6c, 600, "l"),
    g('m', 0x6d, 600, "m"),
    g('n', 0x6e, 600, "n"),
    g('o', 0x6f, 600, "o"),
    g('p', 0x70, 600, "p"),
    g('q', 0x71, 600, "q"),
    g('r', 0x72, 600, "r"),
    g('s', 0x73, 600, "s"),
    g('t', 0x74, 600, "t"),
    g('u', 0x75, 600, "u"),
    g('v', 0x76, 600, "v"),
    g('w', 0x77, 600, "w"),
    g('x', 0x78, 600, "x"),
    g('y', 0x79, 600, "y"),
    g('z', 0x7a, 600, "z"),
    g('{', 0x7b, 600, "braceleft"),
    g('|', 0x7c, 600, "bar"),
    g('}', 0x7d, 600, "braceright"),
    g('~', 0x7e, 600, "asciitilde"),
    g('\u{00a1}', 0xa1, 600, "exclamdown"),
    g('\u{00a2}', 0xa2, 600, "cent"),
    g('\u{00a3}', 0xa3, 600, "sterling"),
    g('\u{2044}', 0xa4, 600, "fraction"),
    g('\u{00a5}', 0xa5, 600, "yen"),
    g('\u{0192}', 0xa6, 600, "florin"),
    g('\u{00a7}', 0xa7, 600, "section"),
    g('\u{00a4}', 0xa8, 600, "currency"),
    g('\'', 0xa9, 600, "quotesingle"),
    g('\u{201c}', 0xaa, 600, "quotedblleft"),
    g('\u{00ab}', 0xab, 600, "guillemotleft"),
    g('\u{2039}', 0xac, 600, "guilsinglleft"),
    g('\u{203a}', 0xad, 600, "guilsinglright"),
    g('\u{fb01}', 0xae, 600, "fi"),
    g('\u{fb02}', 0xaf, 600, "fl"),
    g('\u{2013}', 0xb1, 600, "endash"),
    g('\u{2020}', 0xb2, 600, "dagger"),
    g('\u{2021}', 0xb3, 600, "daggerdbl"),
    g('\u{00b7}', 0xb4, 600, "periodcentered"),
    g('\u{00b6}', 0xb6, 600, "paragraph"),
    g('\u{2022}', 0xb7, 600, "bullet"),
    g('\u{201a}', 0xb8, 600, "quotesinglbase"),
    g('\u{201e}', 0xb9, 600, "quotedblbase"),
    g('\u{201d}', 0xba, 600, "quotedblright"),
    g('\u{00bb}', 0xbb, 600, "guillemotright"),
    g('\u{2026}', 0xbc, 600, "ellipsis"),
    g('\u{2030}', 0xbd, 600, "perthousand"),
    g('\u{00bf}', 0xbf, 600, "questiondown"),
    g('`', 0xc1, 600, "grave"),
    g('\u{00b4}', 0xc2, 600, "acute"),
    g('\u{02c6}', 0xc3, 600, "circumflex"),
    g('\u{02dc}', 0xc4, 600, "tilde"),
    g('\u{00af}', 0xc5, 600, "macron"),
    g('\u{02d8}', 0xc6, 600, "breve"),
    g('\u{02d9}', 0xc7, 600, "dotaccent"),
    g('\u{00a8}', 0xc8, 600, "dieresis"),
    g('\u{02da}', 0xca, 600, "ring"),
    g('\u{00b8}', 0xcb, 600, "cedilla"),
    g('\u{02dd}', 0xcd, 600, "hungarumlaut"),
    g('\u{02db}', 0xce, 600, "ogonek"),
    g('\u{02c7}', 0xcf, 600, "caron"),
    g('\u{2014}', 0xd0, 600, "emdash"),
    g('\u{00c6}', 0xe1, 600, "AE"),
    g('\u{00aa}', 0xe3, 600, "ordfeminine"),
    g('\u{0141}', 0xe8, 600, "Lslash"),
    g('\u{00d8}', 0xe9, 600, "Oslash"),
    g('\u{0152}', 0xea, 600, "OE"),
    g('\u{00ba}', 0xeb, 600, "ordmasculine"),
    g('\u{00e6}', 0xf1, 600, "ae"),
    g('\u{0131}', 0xf5, 600, "dotlessi"),
    g('\u{0142}', 0xf8, 600, "lslash"),
    g('\u{00f8}', 0xf9, 600, "oslash"),
    g('\u{0153}', 0xfa, 600, "oe"),
    g('\u{00df}', 0xfb, 600, "germandbls"),
    g('\u{0160}', -1, 600, "Scaron"),
    g('\u{017d}', -1, 600, "Zcaron"),
    g('\u{2122}', -1, 600, "trademark"),
    g('\u{0161}', -1, 600, "scaron"),
    g('\u{017e}', -1, 600, "zcaron"),
    g('\u{0178}', -1, 600, "Ydieresis"),
    g('\u{00a6}', -1, 600, "brokenbar"),
    g('\u{00a9}', -1, 600, "copyright"),
    g('\u{00ac}', -1, 600, "logicalnot"),
    g('\u{00ae}', -1, 600, "registered"),
    g('\u{00b0}', -1, 600, "degree"),
    g('\u{00b1}', -1, 600, "plusminus"),
    g('\u{00b2}', -1, 600, "twosuperior"),
    g('\u{00b3}', -1, 600, "threesuperior"),
    g('\u{03bc}', -1, 600, "mu"),
    g('\u{00b9}', -1, 600, "onesuperior"),
    g('\u{00bc}', -1, 600, "onequarter"),
    g('\u{00bd}', -1, 600, "onehalf"),
    g('\u{00be}', -1, 600, "threequarters"),
    g('\u{00c0}', -1, 600, "Agrave"),
    g('\u{00c1}', -1, 600, "Aacute"),
    g('\u{00c2}', -1, 600, "Acircumflex"),
    g('\u{00c3}', -1, 600, "Atilde"),
    g('\u{00c4}', -1, 600, "Adieresis"),
    g('\u{00c5}', -1, 600, "Aring"),
    g('\u{00c7}', -1, 600, "Ccedilla"),
    g('\u{00c8}', -1, 600, "Egrave"),
    g('\u{00c9}', -1, 600, "Eacute"),
    g('\u{00ca}', -1, 600, "Ecircumflex"),
    g('\u{00cb}', -1, 600, "Edieresis"),
    g('\u{00cc}', -1, 600, "Igrave"),
    g('\u{00cd}', -1, 600, "Iacute"),
    g('\u{00ce}', -1, 600, "Icircumflex"),
    g('\u{00cf}', -1, 600, "Idieresis"),
    g('\u{00d0}', -1, 600, "Eth"),
    g('\u{00d1}', -1, 600, "Ntilde"),
    g('\u{00d2}', -1, 600, "Ograve"),
    g('\u{00d3}', -1, 600, "Oacute"),
    g('\u{00d4}', -1, 600, "Ocircumflex"),
    g('\u{00d5}', -1, 600, "Otilde"),
    g('\u{00d6}', -1, 600, "Odieresis"),
    g('\u{00d7}', -1, 600, "multiply"),
    g('\u{00d9}', -1, 600, "Ugrave"),
    g('\u{00da}', -1, 600, "Uacute"),
    g('\u{00db}', -1, 600, "Ucircumflex"),
    g('\u{00dc}', -1, 600, "Udieresis"),
    g('\u{00dd}', -1, 600, "Yacute"),
    g('\u{00de}', -1, 600, "Thorn"),
    g('\u{00e0}', -1, 600, "agrave"),
    g('\u{00e1}', -1, 600, "aacute"),
    g('\u{00e2}', -1, 600, "acircumflex"),
    g('\u{00e3}', -1, 600, "atilde"),
    g('\u{00e4}', -1, 600, "adieresis"),
    g('\u{00e5}', -1, 600, "aring"),
    g('\u{00e7}', -1, 600, "ccedilla"),
    g('\u{00e8}', -1, 600, "egrave"),
    g('\u{00e9}', -1, 600, "eacute"),
    g('\u{00ea}', -1, 600, "ecircumflex"),
    g('\u{00eb}', -1, 600, "edieresis"),
    g('\u{00ec}', -1, 600, "igrave"),
    g('\u{00ed}', -1, 600, "iacute"),
    g('\u{00ee}', -1, 600, "icircumflex"),
    g('\u{00ef}', -1, 600, "idieresis"),
    g('\u{00f0}', -1, 600, "eth"),
    g('\u{00f1}', -1, 600, "ntilde"),
    g('\u{00f2}', -1, 600, "ograve"),
    g('\u{00f3}', -1, 600, "oacute"),
    g('\u{00f4}', -1, 600, "ocircumflex"),
    g('\u{00f5}', -1, 600, "otilde"),
    g('\u{00f6}', -1, 600, "odieresis"),
    g('\u{00f7}', -1, 600, "divide"),
    g('\u{00f9}', -1, 600, "ugrave"),
    g('\u{00fa}', -1, 600, "uacute"),
    g('\u{00fb}', -1, 600, "ucircumflex"),
    g('\u{00fc}', -1, 600, "udieresis"),
    g('\u{00fd}', -1, 600, "yacute"),
    g('\u{00fe}', -1, 600, "thorn"),
    g('\u{00ff}', -1, 600, "ydieresis"),
    g('\u{2212}', -1, 600, "minus"),
];

pub(crate) static COURIER_BOLD: &[GlyphInfo] = &[
    g(' ', 0x20, 600, "space"),
    g('!', 0x21, 600, "exclam"),
    g('"', 0x22, 600, "quotedbl"),
    g('#', 0x23, 600, "numbersign"),
    g('$', 0x24, 600, "dollar"),
    g('%', 0x25, 600, "percent"),
    g('&', 0x26, 600, "ampersand"),
    g('\u{2019}', 0x27, 600, "quoteright"),
    g('(', 0x28, 600, "parenleft"),
    g(')', 0x29, 600, "parenright"),
    g('*', 0x2a, 600, "asterisk"),
    g('+', 0x2b, 600, "plus"),
    g(',', 0x2c, 600, "comma"),
    g('-', 0x2d, 600, "hyphen"),
    g('.', 0x2e, 600, "period"),
    g('/', 0x2f, 600, "slash"),
    g('0', 0x30, 600, "zero"),
    g('1', 0x31, 600, "one"),
    g('2', 0x32, 600, "two"),
    g('3', 0x33, 600, "three"),
    g('4', 0x34, 600, "four"),
    g('5', 0x35, 600, "five"),
    g('6', 0x36, 600, "six"),
    g('7', 0x37, 600, "seven"),
    g('8', 0x38, 600, "eight"),
    g('9', 0x39, 600, "nine"),
    g(':', 0x3a, 600, "colon"),
    g(';', 0x3b, 600, "semicolon"),
    g('<', 0x3c, 600, "less"),
    g('=', 0x3d, 600, "equal"),
    g('>', 0x3e, 600, "greater"),
    g('?', 0x3f, 600, "question"),
    g('@', 0x40, 600, "at"),
    g('A', 0x41, 600, "A"),
    g('B', 0x42, 600, "B"),
    g('C', 0x43, 600, "C"),
    g('D', 0x44, 600, "D"),
    g('E', 0x45, 600, "E"),
    g('F', 0x46, 600, "F"),
    g('G', 0x47, 600, "G"),
    g('H', 0x48, 600, "H"),
    g('I', 0x49, 600, "I"),
    g('J', 0x4a, 600, "J"),
    g('K', 0x4b, 600, "K"),
    g('L', 0x4c, 600, "L"),
    g('M', 0x4d, 600, "M"),
    g('N', 0x4e, 600, "N"),
    g('O', 0x4f, 600, "O"),
    g('P', 0x50, 600, "P"),
    g('Q', 0x51, 600, "Q"),
    g('R', 0x52, 600, "R"),
    g('S', 0x53, 600, "S"),
    g('T', 0x54, 600, "T"),
    g('U', 0x55, 600, "U"),
    g('V', 0x56, 600, "V"),
    g('W', 0x57, 600, "W"),
    g('X', 0x58, 600, "X"),
    g('Y', 0x59, 600, "Y"),
    g('Z', 0x5a, 600, "Z"),
    g('[', 0x5b, 600, "bracketleft"),
    g('\\', 0x5c, 600, "backslash"),
    g(']', 0x5d, 600, "bracketright"),
    g('^', 0x5e, 600, "asciicircum"),
    g('_', 0x5f, 600, "underscore"),
    g('\u{2018}', 0x60, 600, "quoteleft"),
    g('a', 0x61, 600, "a"),
    g('b', 0x62, 600, "b"),
    g('c', 0x63, 600, "c"),
    g('d', 0x64, 600, "d"),
    g('e', 0x65, 600, "e"),
    g('f', 0x66, 600, "f"),
    g('g', 0x67, 600, "g"),
    g('h', 0x68, 600, "h"),
    g('i', 0x69, 600, "i"),
    g('j', 0x6a, 600, "j"),
    g('k', 0x6b, 600, "k"),
    g('l', 0x6c, 600, "l"),
    g('m', 0x6d, 600, "m"),
    g('n', 0x6e, 600, "n"),
    g('o', 0x6f, 600, "o"),
    g('p', 0x70, 600, "p"),
    g('q', 0x71, 600, "q"),
    g('r', 0x72, 600, "r"),
    g('s', 0x73, 600, "s"),
    g('t', 0x74, 600, "t"),
    g('u', 0x75, 600, "u"),
    g('v', 0x76, 600, "v"),
    g('w', 0x77, 600, "w"),
    g('x', 0x78, 600, "x"),
    g('y', 0x79, 600, "y"),
    g('z', 0x7a, 600, "z"),
    g('{', 0x7b, 600, "braceleft"),
    g('|', 0x7c, 600, "bar"),
    g('}', 0x7d, 600, "braceright"),
    g('~', 0x7e, 600, "asciitilde"),
    g('\u{00a1}', 0xa1, 600, "exclamdown"),
    g('\u{00a2}', 0xa2, 600, "cent"),
    g('\u{00a3}', 0xa3, 600, "sterling"),
    g('\u{2044}', 0xa4, 600, "fraction"),
    g('\u{00a5}', 0xa5, 600, "yen"),
    g('\u{0192}', 0xa6, 600, "florin"),
    g('\u{00a7}', 0xa7, 600, "section"),
    g('\u{00a4}', 0xa8, 600, "currency"),
    g('\'', 0xa9, 600, "quotesingle"),
    g('\u{201c}', 0xaa, 600, "quotedblleft"),
    g('\u{00ab}', 0xab, 600, "guillemotleft"),
    g('\u{2039}', 0xac, 600, "guilsinglleft"),
    g('\u{203a}', 0xad, 600, "guilsinglright"),
    g('\u{fb01}', 0xae, 600, "fi"),
    g('\u{fb02}', 0xaf, 600, "fl"),
    g('\u{2013}', 0xb1, 600, "endash"),
    g('\u{2020}', 0xb2, 600, "dagger"),
    g('\u{2021}', 0xb3, 600, "daggerdbl"),
    g('\u{00b7}', 0xb4, 600, "periodcentered"),
    g('\u{00b6}', 0xb6, 600, "paragraph"),
    g('\u{2022}', 0xb7, 600, "bullet"),
    g('\u{201a}', 0xb8, 600, "quotesinglbase"),
    g('\u{201e}', 0xb9, 600, "quotedblbase"),
    g('\u{201d}', 0xba, 600, "quotedblright"),
    g('\u{00bb}', 0xbb, 600, "guillemotright"),
    g('\u{2026}', 0xbc, 600, "ellipsis"),
    g('\u{2030}', 0xbd, 600, "perthousand"),
    g('\u{00bf}', 0xbf, 600, "questiondown"),
    g('`', 0xc1, 600, "grave"),
    g('\u{00b4}', 0xc2, 600, "acute"),
    g('\u{02c6}', 0xc3, 600, "circumflex"),
    g('\u{02dc}', 0xc4, 600, "tilde"),
    g('\u{00af}', 0xc5, 600, "macron"),
    g('\u{02d8}', 0xc6, 600, "breve"),
    g('\u{02d9}', 0xc7, 600, "dotaccent"),
    g('\u{00a8}', 0xc8, 600, "dieresis"),
    g('\u{02da}', 0xca, 600, "ring"),
    g('\u{00b8}', 0xcb, 600, "cedilla"),
    g('\u{02dd}', 0xcd, 600, "hungarumlaut"),
    g('\u{02db}', 0xce, 600, "ogonek"),
    g('\u{02c7}', 0xcf, 600, "caron"),
    g('\u{2014}', 0xd0, 600, "emdash"),
    g('\u{00c6}', 0xe1, 600, "AE"),
    g('\u{00aa}', 0xe3, 600, "ordfeminine"),
    g('\u{0141}', 0xe8, 600, "Lslash"),
    g('\u{00d8}', 0xe9, 600, "Oslash"),
    g('\u{0152}', 0xea, 600, "OE"),
    g('\u{00ba}', 0xeb, 600, "ordmasculine"),
    g('\u{00e6}', 0xf1, 600, "ae"),
    g('\u{0131}', 0xf5, 600, "dotlessi"),
    g('\u{0142}', 0xf8, 600, "lslash"),
    g('\u{00f8}', 0xf9, 600, "oslash"),
    g('\u{0153}', 0xfa, 600, "oe"),
    g('\u{00df}', 0xfb, 600, "germandbls"),
    g('\u{0160}', -1, 600, "Scaron"),
    g('\u{017d}', -1, 600, "Zcaron"),
    g('\u{2122}', -1, 600, "trademark"),
    g('\u{0161}', -1, 600, "scaron"),
    g('\u{017e}', -1, 600, "zcaron"),
    g('\u{0178}', -1, 600, "Ydieresis"),
    g('\u{00a6}', -1, 600, "brokenbar"),
    g('\u{00a9}', -1, 600, "copyright"),
    g('\u{00ac}', -1, 600, "logicalnot"),
    g('\u{00ae}', -1, 600, "registered"),
    g('\u{00b0}', -1, 600, "degree"),
    g('\u{00b1}', -1, 600, "plusminus"),
    g('\u{00b2}', -1, 600, "twosuperior"),
    g('\u{00b3}', -1, 600, "threesuperior"),
    g('\u{03bc}', -1, 600, "mu"),
    g('\u{00b9}', -1, 600, "onesuperior"),
    g('\u{00bc}', -1, 600, "onequarter"),
    g('\u{00bd}', -1, 600, "onehalf"),
    g('\u{00be}', -1, 600, "threequarters"),
    g('\u{00c0}', -1, 600, "Agrave"),
    g('\u{00c1}', -1, 600, "Aacute"),
    g('\u{00c2}', -1, 600, "Acircumflex"),
    g('\u{00c3}', -1, 600, "Atilde"),
    g('\u{00c4}', -1, 600, "Adieresis"),
    g('\u{00c5}', -1, 600, "Aring"),
    g('\u{00c7}', -1, 600, "Ccedilla"),
    g('\u{00c8}', -1, 600, "Egrave"),
    g('\u{00c9}', -1, 600, "Eacute"),
    g('\u{00ca}', -1, 600, "Ecircumflex"),
    g('\u{00cb}', -1, 600, "Edieresis"),
    g('\u{00cc}', -1, 600, "Igrave"),
    g('\u{00cd}', -1, 600, "Iacute"),
    g('\u{00ce}', -1, 600, "Icircumflex"),
    g('\u{00cf}', -1, 600, "Idieresis"),
    g('\u{00d0}', -1, 600, "Eth"),
    g('\u{00d1}', -1, 600, "Ntilde"),
    g('\u{00d2}', -1, 600, "Ograve"),
    g('\u{00d3}', -1, 600, "Oacute"),
    g('\u{00d4}', -1, 600, "Ocircumflex"),
    g('\u{00d5}', -1, 600, "Otilde"),
    g('\u{00d6}', -1, 600, "Odieresis"),
    g('\u{00d7}', -1, 600, "multiply"),
    g('\u{00d9}', -1, 600, "Ugrave"),
    g('\u{00da}', -1, 600, "Uacute"),
    g('\u{00db}', -1, 600, "Ucircumflex"),
    g('\u{00dc}', -1, 600, "Udieresis"),
    g('\u{00dd}', -1, 600, "Yacute"),
    g('\u{00de}', -1, 600, "Thorn"),
    g('\u{00e0}', -1, 600, "agrave"),
    g('\u{00e1}', -1, 600, "aacute"),
    g('\u{00e2}', -1, 600, "acircumflex"),
    g('\u{00e3}', -1, 600, "atilde"),
    g('\u{00e4}', -1, 600, "adieresis"),
    g('\u{00e5}', -1, 600, "aring"),
    g('\u{00e7}', -1, 600, "ccedilla"),
    g('\u{00e8}', -1, 600, "egrave"),
    g('\u{00e9}', -1, 600, "eacute"),
    g('\u{00ea}', -1, 600, "ecircumflex"),
    g('\u{00eb}', -1, 600, "edieresis"),
    g('\u{00ec}', -1, 600, "igrave"),
    g('\u{00ed}', -1, 600, "iacute"),
    g('\u{00ee}', -1, 600, "icircumflex"),
    g('\u{00ef}', -1, 600, "idieresis"),
    g('\u{00f0}', -1, 600, "eth"),
    g('\u{00f1}', -1, 600, "ntilde"),
    g('\u{00f2}', -1, 600, "ograve"),
    g('\u{00f3}', -1, 600, "oacute"),
    g('\u{00f4}', -1, 600, "ocircumflex"),
    g('\u{00f5}', -1, 600, "otilde"),
    g('\u{00f6}', -1, 600, "odieresis"),
    g('\u{00f7}', -1, 600, "divide"),
    g('\u{00f9}', -1, 600, "ugrave"),
    g('\u{00fa}', -1, 600, "uacute"),
    g('\u{00fb}', -1, 600, "ucircumflex"),
    g('\u{00fc}', -1, 600, "udieresis"),
    g('\u{00fd}', -1, 600, "yacute"),
    g('\u{00fe}', -1, 600, "thorn"),
    g('\u{00ff}', -1, 600, "ydieresis"),
    g('\u{2212}', -1, 600, "minus"),
];

pub(crate) static COURIER_OBLIQUE: &[GlyphInfo] = &[
    g(' ', 0x20, 600, "space"),
    g('!', 0x21, 600, "exclam"),
    g('"', 0x22, 600, "quotedbl"),
    g('#', 0x23, 600, "numbersign"),
    g('$', 0x24, 600, "dollar"),
    g('%', 0x25, 600, "percent"),
    g('&', 0x26, 600, "ampersand"),
    g('\u{2019}', 0x27, 600, "quoteright"),
    g('(', 0x28, 600, "parenleft"),
    g(')', 0x29, 600, "parenright"),
    g('*', 0x2a, 600, "asterisk"),
    g('+', 0x2b, 600, "plus"),
    g(',', 0x2c, 600, "comma"),
    g('-', 0x2d, 600, "hyphen"),
    g('.', 0x2e, 600, "period"),
    g('/', 0x2f, 600, "slash"),
    g('0', 0x30, 600, "zero"),
    g('1', 0x31, 600, "one"),
    g('2', 0x32, 600, "two"),
    g('3', 0x33, 600, "three"),
    g('4', 0x34, 600, "four"),
    g('5', 0x35, 600, "five"),
    g('6', 0x36, 600, "six"),
    g('7', 0x37, 600, "seven"),
    g('8', 0x38, 600, "eight"),
    g('9', 0x39, 600, "nine"),
    g(':', 0x3a, 600, "colon"),
    g(';', 0x3b, 600, "semicolon"),
    g('<', 0x3c, 600, "less"),
    g('=', 0x3d, 600, "equal"),
    g('>', 0x3e, 600, "greater"),
    g('?', 0x3f, 600, "question"),
    g('@', 0x40, 600, "at"),
    g('A', 0x41, 600, "A"),
    g('B', 0x42, 600, "B"),
    g('C', 0x43, 600, "C"),
    g('D', 0x44, 600, "D"),
    g('E', 0x45, 600, "E"),
    g('F', 0x46, 600, "F"),
    g('G', 0x47, 600, "G"),
    g('H', 0x48, 600, "H"),
    g('I', 0x49, 600, "I"),
    g('J', 0x4a, 600, "J"),
    g('K', 0x4b, 600, "K"),
    g('L', 0x4c, 600, "L"),
    g('M', 0x4d, 600, "M"),
    g('N', 0x4e, 600, "N"),
    g('O', 0x4f, 600, "O"),
    g('P', 0x50, 600, "P"),
    g('Q', 0x51, 600, "Q"),
    g('R', 0x52, 600, "R"),
    g('S', 0x53, 600, "S"),
    g('T', 0x54, 600, "T"),
    g('U', 0x55, 600, "U"),
    g('V', 0x56, 600, "V"),
    g('W', 0x57, 600, "W"),
    g('X', 0x58, 600, "X"),
    g('Y', 0x59, 600, "Y"),
    g('Z', 0x5a, 600, "Z"),
    g('[', 0x5b, 600, "bracketleft"),
    g('\\', 0x5c, 600, "backslash"),
    g(']', 0x5d, 600, "bracketright"),
    g('^', 0x5e, 600, "asciicircum"),
    g('_', 0x5f, 600, "underscore"),
    g('\u{2018}', 0x60, 600, "quoteleft"),
    g('a', 0x61, 600, "a"),
    g('b', 0x62, 600, "b"),
    g('c', 0x63, 600, "c"),
    g('d', 0x64, 600, "d"),
    g('e', 0x65, 600, "e"),
    g('f', 0x66, 600, "f"),
    g('g', 0x67, 600, "g"),
    g('h', 0x68, 600, "h"),
    g('i', 0x69, 600, "i"),
    g('j', 0x6a, 600, "j"),
    g('k', 0x6b, 600, "k"),
    g('l', 0x6c, 600, "l"),
    g('m', 0x6d, 600, "m"),
    g('n', 0x6e, 600, "n"),
    g('o', 0x6f, 600, "o"),
    g('p', 0x70, 600, "p"),
    g('q', 0x71, 600, "q"),
    g('r', 0x72, 600, "r"),
    g('s', 0x73, 600, "s"),
    g('t', 0x74, 600, "t"),
    g('u', 0x75, 600, "u"),
    g('v', 0x76, 600, "v"),
    g('w', 0x77, 600, "w"),
    g('x', 0x78, 600, "x"),
    g('y', 0x79, 600, "y"),
    g('z', 0x7a, 600, "z"),
    g('{', 0x7b, 600, "braceleft"),
    g('|', 0x7c, 600, "bar"),
    g('}', 0x7d, 600, "braceright"),
    g('~', 0x7e, 600, "asciitilde"),
    g('\u{00a1}', 0xa1, 600, "exclamdown"),
    g('\u{00a2}', 0xa2, 600, "cent"),
    g('\u{00a3}', 0xa3, 600, "sterling"),
    g('\u{2044}', 0xa4, 600, "fraction"),
    g('\u{00a5}', 0xa5, 600, "yen"),
    g('\u{0192}', 0xa6, 600, "florin"),
    g('\u{00a7}', 0xa7, 600, "section"),
    g('\u{00a4}', 0xa8, 600, "currency"),
    g('\'', 0xa9, 600, "quotesingle"),
    g('\u{201c}', 0xaa, 600, "quotedblleft"),
    g('\u{00ab}', 0xab, 600, "guillemotleft"),
    g('\u{2039}', 0xac, 600, "guilsinglleft"),
    g('\u{203a}', 0xad, 600, "guilsinglright"),
    g('\u{fb01}', 0xae, 600, "fi"),
    g('\u{fb02}', 0xaf, 600, "fl"),
    g('\u{2013}', 0xb1, 600, "endash"),
    g('\u{2020}', 0xb2, 600, "dagger"),
    g('\u{2021}', 0xb3, 600, "daggerdbl"),
    g('\u{00b7}', 0xb4, 600, "periodcentered"),
    g('\u{00b6}', 0xb6, 600, "paragraph"),
    g('\u{2022}', 0xb7, 600, "bullet"),
    g('\u{201a}', 0xb8, 600, "quotesinglbase"),
    g('\u{201e}', 0xb9, 600, "quotedblbase"),
    g('\u{201d}', 0xba, 600, "quotedblright"),
    g('\u{00bb}', 0xbb, 600, "guillemotright"),
    g('\u{2026}', 0xbc, 600, "ellipsis"),
    g('\u{2030}', 0xbd, 600, "perthousand"),
    g('\u{00bf}', 0xbf, 600, "questiondown"),
    g('`', 0xc1, 600, "grave"),
    g('\u{00b4}', 0xc2, 600, "acute"),
    g('\u{02c6}', 0xc3, 600, "circumflex"),
    g('\u{02dc}', 0xc4, 600, "tilde"),
    g('\u{00af}', 0xc5, 600, "macron"),
    g('\u{02d8}', 0xc6, 600, "breve"),
    g('\u{02d9}', 0xc7, 600, "dotaccent"),
    g('\u{00a8}', 0xc8, 600, "dieresis"),
    g('\u{02da}', 0xca, 600, "ring"),
    g('\u{00b8}', 0xcb, 600, "cedilla"),
    g('\u{02dd}', 0xcd, 600, "hungarumlaut"),
    g('\u{02db}', 0xce, 600, "ogonek"),
    g('\u{02c7}', 0xcf, 600, "caron"),
    g('\u{2014}', 0xd0, 600, "emdash"),
    g('\u{00c6}', 0xe1, 600, "AE"),
    g('\u{00aa}', 0xe3, 600, "ordfeminine"),
    g('\u{0141}', 0xe8, 600, "Lslash"),
    g('\u{00d8}', 0xe9, 600, "Oslash"),
    g('\u{0152}', 0xea, 600, "OE"),
    g('\u{00ba}', 0xeb, 600, "ordmasculine"),
    g('\u{00e6}', 0xf1, 600, "ae"),
    g('\u{0131}', 0xf5, 600, "dotlessi"),
    g('\u{0142}', 0xf8, 600, "lslash"),
    g('\u{00f8}', 0xf9, 600, "oslash"),
    g('\u{0153}', 0xfa, 600, "oe"),
    g('\u{00df}', 0xfb, 600, "germandbls"),
    g('\u{0160}', -1, 600, "Scaron"),
    g('\u{017d}', -1, 600, "Zcaron"),
    g('\u{2122}', -1, 600, "trademark"),
    g('\u{0161}', -1, 600, "scaron"),
    g('\u{017e}', -1, 600, "zcaron"),
    g('\u{0178}', -1, 600, "Ydieresis"),
    g('\u{00a6}', -1, 600, "brokenbar"),
    g('\u{00a9}', -1, 600, "copyright"),
    g('\u{00ac}', -1, 600, "logicalnot"),
    g('\u{00ae}', -1, 600, "registered"),
    g('\u{00b0}', -1, 600, "degree"),
    g('\u{00b1}', -1, 600, "plusminus"),
    g('\u{00b2}', -1, 600, "twosuperior"),
    g('\u{00b3}', -1, 600, "threesuperior"),
    g('\u{03bc}', -1, 600, "mu"),
    g('\u{00b9}', -1, 600, "onesuperior"),
    g('\u{00bc}', -1, 600, "onequarter"),
    g('\u{00bd}', -1, 600, "onehalf"),
    g('\u{00be}', -1, 600, "threequarters"),
    g('\u{00c0}', -1, 600, "Agrave"),
    g('\u{00c1}', -1, 600, "Aacute"),
    g('\u{00c2}', -1, 600, "Acircumflex"),
    g('\u{00c3}', -1, 600, "Atilde"),
    g('\u{00c4}', -1, 600, "Adieresis"),
    g('\u{00c5}', -1, 600, "Aring"),
    g('\u{00c7}', -1, 600, "Ccedilla"),
    g('\u{00c8}', -1, 600, "Egrave"),
    g('\u{00c9}', -1, 600, "Eacute"),
    g('\u{00ca}', -1, 600, "Ecircumflex"),
    g('\u{00cb}', -1, 600, "Edieresis"),
    g('\u{00cc}', -1, 600, "Igrave"),
    g('\u{00cd}', -1, 600, "Iacute"),
    g('\u{00ce}', -1, 600, "Icircumflex"),
    g('\u{00cf}', -1, 600, "Idieresis"),
    g('\u{00d0}', -1, 600, "Eth"),
    g('\u{00d1}', -1, 600, "Ntilde"),
    g('\u{00d2}', -1, 600, "Ograve"),
    g('\u{00d3}', -1, 600, "Oacute"),
    g('\u{00d4}', -1, 600, "Ocircumflex"),
    g('\u{00d5}', -1, 600, "Otilde"),
    g('\u{00d6}', -1, 600, "Odieresis"),
    g('\u{00d7}', -1, 600, "multiply"),
    g('\u{00d9}', -1, 600, "Ugrave"),
    g('\u{00da}', -1, 600, "Uacute"),
    g('\u{00db}', -1, 600, "Ucircumflex"),
    g('\u{00dc}', -1, 600, "Udieresis"),
    g('\u{00dd}', -1, 600, "Yacute"),
    g('\u{00de}', -1, 600, "Thorn"),
    g('\u{00e0}', -1, 600, "agrave"),
    g('\u{00e1}', -1, 600, "aacute"),
    g('\u{00e2}', -1, 600, "acircumflex"),
    g('\u{00e3}', -1, 600, "atilde"),
    g('\u{00e4}', -1, 600, "adieresis"),
    g('\u{00e5}', -1, 600, "aring"),
    g('\u{00e7}', -1, 600, "ccedilla"),
    g('\u{00e8}', -1, 600, "egrave"),
    g('\u{00e9}', -1, 600, "eacute"),
    g('\u{00ea}', -1, 600, "ecircumflex"),
    g('\u{00eb}', -1, 600, "edieresis"),
    g('\u{00ec}', -1, 600, "igrave"),
    g('\u{00ed}', -1, 600, "iacute"),
    g('\u{00ee}', -1, 600, "icircumflex"),
    g('\u{00ef}', -1, 600, "idieresis"),
    g('\u{00f0}', -1, 600, "eth"),
    g('\u{00f1}', -1, 600, "ntilde"),
    g('\u{00f2}', -1, 600, "ograve"),
    g('\u{00f3}', -1, 600, "oacute"),
    g('\u{00f4}', -1, 600, "ocircumflex"),
    g('\u{00f5}', -1, 600, "otilde"),
    g('\u{00f6}', -1, 600, "odieresis"),
    g('\u{00f7}', -1, 600, "divide"),
    g('\u{00f9}', -1, 600, "ugrave"),
    g('\u{00fa}', -1, 600, "uacute"),
    g('\u{00fb}', -1, 600, "ucircumflex"),
    g('\u{00fc}', -1, 600, "udieresis"),
    g('\u{00fd}', -1, 600, "yacute"),
    g('\u{00fe}', -1, 600, "thorn"),
    g('\u{00ff}', -1, 600, "ydieresis"),
    g('\u{2212}', -1, 600, "minus"),
];

pub(crate) static COURIER_BOLD_OBLIQUE: &[GlyphInfo] = &[
    g(' ', 0x20, 600, "space"),
    g('!', 0x21, 600, "exclam"),
    g('"', 0x22, 600, "quotedbl"),
    g('#', 0x23, 600, "numbersign"),
    g('$', 0x24, 600, "dollar"),
    g('%', 0x25, 600, "percent"),
    g('&', 0x26, 600, "ampersand"),
    g('\u{2019}', 0x27, 600, "quoteright"),
    g('(', 0x28, 600, "parenleft"),
    g(')', 0x29, 600, "parenright"),
    g('*', 0x2a, 600, "asterisk"),
    g('+', 0x2b, 600, "plus"),
    g(',', 0x2c, 600, "comma"),
    g('-', 0x2d, 600, "hyphen"),
    g('.', 0x2e, 600, "period"),
    g('/', 0x2f, 600, "slash"),
    g('0', 0x30, 600, "zero"),
    g('1', 0x31, 600, "one"),
    g('2', 0x32, 600, "two"),
    g('3', 0x33, 600, "three"),
    g('4', 0x34, 600, "four"),
    g('5', 0x35, 600, "five"),
    g('6', 0x36, 600, "six"),
    g('7', 0x37, 600, "seven"),
    g('8', 0x38, 600, "eight"),
    g('9', 0x39, 600, "nine"),
    g(':', 0x3a, 600, "colon"),
    g(';', 0x3b, 600, "semicolon"),
    g('<', 0x3c, 600, "less"),
    g('=', 0x3d, 600, "equal"),
    g('>', 0x3e, 600, "greater"),
    g('?', 0x3f, 600, "question"),
    g('@', 0x40, 600, "at"),
    g('A', 0x41, 600, "A"),
    g('B', 0x42, 600, "B"),
    g('C', 0x43, 600, "C"),
    g('D', 0x44, 600, "D"),
    g('E', 0x45, 600, "E"),
    g('F', 0x46, 600, "F"),
    g('G', 0x47, 600, "G"),
    g('H', 0x48, 600, "H"),
    g('I', 0x49, 600, "I"),
    g('J', 0x4a, 600, "J"),
    g('K', 0x4b, 600, "K"),
    g('L', 0x4c, 600, "L"),
    g('M', 0x4d, 600, "M"),
    g('N', 0x4e, 600, "N"),
    g('O', 0x4f, 600, "O"),
    g('P', 0x50, 600, "P"),
    g('Q', 0x51, 600, "Q"),
    g('R', 0x52, 600, "R"),
    g('S', 0x53, 600, "S"),
    g('T', 0x54, 600, "T"),
    g('U', 0x55, 600, "U"),
    g('V', 0x56, 600, "V"),
    g('W', 0x57, 600, "W"),
    g('X', 0x58, 600, "X"),
    g('Y', 0x59, 600, "Y"),
    g('Z', 0x5a, 600, "Z"),
    g('[', 0x5b, 600, "bracketleft"),
    g('\\', 0x5c, 600, "backslash"),
    g(']', 0x5d, 600, "bracketright"),
    g('^', 0x5e, 600, "asciicircum"),
    g('_', 0x5f, 600, "underscore"),
    g('\u{2018}', 0x60, 600, "quoteleft"),
    g('a', 0x61, 600, "a"),
    g('b', 0x62, 600, "b"),
    g('c', 0x63, 600, "c"),
    g('d', 0x64, 600, "d"),
    g('e', 0x65, 600, "e"),
    g('f', 0x66, 600, "f"),
    g('g', 0x67, 600, "g"),
    g('h', 0x68, 600, "h"),
    g('i', 0x69, 600, "i"),
    g('j', 0x6a, 600, "j"),
    g('k', 0x6b, 600, "k"),
    g('l', 0x6c, 600, "l"),
    g('m', 0x6d, 600, "m"),
    g('n', 0x6e, 600, "n"),
    g('o', 0x6f, 600, "o"),
    g('p', 0x70, 600, "p"),
    g('q', 0x71, 600, "q"),
    g('r', 0x72, 600, "r"),
    g('s', 0x73, 600, "s"),
    g('t', 0x74, 600, "t"),
    g('u', 0x75, 600, "u"),
    g('v', 0x76, 600, "v"),
    g('w', 0x77, 600, "w"),
    g('x', 0x78, 600, "x"),
    g('y', 0x79, 600, "y"),
    g('z', 0x7a, 600, "z"),
    g('{', 0x7b, 600, "braceleft"),
    g('|', 0x7c, 600, "bar"),
    g('}', 0x7d, 600, "braceright"),
    g('~', 0x7e, 600, "asciitilde"),
    g('\u{00a1}', 0xa1, 600, "exclamdown"),
    g('\u{00a2}', 0xa2, 600, "cent"),
    g('\u{00a3}', 0xa3, 600, "sterling"),
    g('\u{2044}', 0xa4, 600, "fraction"),
    g('\u{00a5}', 0xa5, 600, "yen"),
    g('\u{0192}', 0xa6, 600, "florin"),
    g('\u{00a7}', 0xa7, 600, "section"),
    g('\u{00a4}', 0xa8, 600, "currency"),
    g('\'', 0xa9, 600, "quotesingle"),
    g('\u{201c}', 0xaa, 600, "quotedblleft"),
    g('\u{00ab}', 0xab, 600, "guillemotleft"),
    g('\u{2039}', 0xac, 600, "guilsinglleft"),
    g('\u{203a}', 0xad, 600, "guilsinglright"),
    g('\u{fb01}', 0xae, 600, "fi"),
    g('\u{fb02}', 0xaf, 600, "fl"),
    g('\u{2013}', 0xb1, 600, "endash"),
    g('\u{2020}', 0xb2, 600, "dagger"),
    g('\u{2021}', 0xb3, 600, "daggerdbl"),
    g('\u{00b7}', 0xb4, 600, "periodcentered"),
    g('\u{00b6}', 0xb6, 600, "paragraph"),
    g('\u{2022}', 0xb7, 600, "bullet"),
    g('\u{201a}', 0xb8, 600, "quotesinglbase"),
    g('\u{201e}', 0xb9, 600, "quotedblbase"),
    g('\u{201d}', 0xba, 600, "quotedblright"),
    g('\u{00bb}', 0xbb, 600, "guillemotright"),
    g('\u{2026}', 0xbc, 600, "ellipsis"),
    g('\u{2030}', 0xbd, 600, "perthousand"),
    g('\u{00bf}', 0xbf, 600, "questiondown"),
    g('`', 0xc1, 600, "grave"),
    g('\u{00b4}', 0xc2, 600, "acute"),
    g('\u{02c6}', 0xc3, 600, "circumflex"),
    g('\u{02dc}', 0xc4, 600, "tilde"),
    g('\u{00af}', 0xc5, 600, "macron"),
    g('\u{02d8}', 0xc6, 600, "breve"),
    g('\u{02d9}', 0xc7, 600, "dotaccent"),
    g('\u{00a8}', 0xc8, 600, "dieresis"),
    g('\u{02da}', 0xca, 600, "ring"),
    g('\u{00b8}', 0xcb, 600, "cedilla"),
    g('\u{02dd}', 0xcd, 600, "hungarumlaut"),
    g('\u{02db}', 0xce, 600, "ogonek"),
    g('\u{02c7}', 0xcf, 600, "caron"),
    g('\u{2014}', 0xd0, 600, "emdash"),
    g('\u{00c6}', 0xe1, 600, "AE"),
    g('\u{00aa}', 0xe3, 600, "ordfeminine"),
    g('\u{0141}', 0xe8, 600, "Lslash"),
    g('\u{00d8}', 0xe9, 600, "Oslash"),
    g('\u{0152}', 0xea, 600, "OE"),
    g('\u{00ba}', 0xeb, 600, "ordmasculine"),
    g('\u{00e6}', 0xf1, 600, "ae"),
    g('\u{0131}', 0xf5, 600, "dotlessi"),
    g('\u{0142}', 0xf8, 600, "lslash"),
    g('\u{00f8}', 0xf9, 600, "oslash"),
    g('\u{0153}', 0xfa, 600, "oe"),
    g('\u{00df}', 0xfb, 600, "germandbls"),
    g('\u{0160}', -1, 600, "Scaron"),
    g('\u{017d}', -1, 600, "Zcaron"),
    g('\u{2122}', -1, 600, "trademark"),
    g('\u{0161}', -1, 600, "scaron"),
    g('\u{017e}', -1, 600, "zcaron"),
    g('\u{0178}', -1, 600, "Ydieresis"),
    g('\u{00a6}', -1, 600, "brokenbar"),
    g('\u{00a9}', -1, 600, "copyright"),
    g('\u{00ac}', -1, 600, "logicalnot"),
    g('\u{00ae}', -1, 600, "registered"),
    g('\u{00b0}', -1, 600, "degree"),
    g('\u{00b1}', -1, 600, "plusminus"),
    g('\u{00b2}', -1, 600, "twosuperior"),
    g('\u{00b3}', -1, 600, "threesuperior"),
    g('\u{03bc}', -1, 600, "mu"),
    g('\u{00b9}', -1, 600, "onesuperior"),
    g('\u{00bc}', -1, 600, "onequarter"),
    g('\u{00bd}', -1, 600, "onehalf"),
    g('\u{00be}', -1, 600, "threequarters"),
    g('\u{00c0}', -1, 600, "Agrave"),
    g('\u{00c1}', -1, 600, "Aacute"),
    g('\u{00c2}', -1, 600, "Acircumflex"),
    g('\u{00c3}', -1, 600, "Atilde"),
    g('\u{00c4}', -1, 600, "Adieresis"),
    g('\u{00c5}', -1, 600, "Aring"),
    g('\u{00c7}', -1, 600, "Ccedilla"),
    g('\u{00c8}', -1, 600, "Egrave"),
    g('\u{00c9}', -1, 600, "Eacute"),
    g('\u{00ca}', -1, 600, "Ecircumflex"),
    g('\u{00cb}', -1, 600, "Edieresis"),
    g('\u{00cc}', -1, 600, "Igrave"),
    g('\u{00cd}', -1, 600, "Iacute"),
    g('\u{00ce}', -1, 600, "Icircumflex"),
    g('\u{00cf}', -1, 600, "Idieresis"),
    g('\u{00d0}', -1, 600, "Eth"),
    g('\u{00d1}', -1, 600, "Ntilde"),
    g('\u{00d2}', -1, 600, "Ograve"),
    g('\u{00d3}', -1, 600, "Oacute"),
    g('\u{00d4}', -1, 600, "Ocircumflex"),
    g('\u{00d5}', -1, 600, "Otilde"),
    g('\u{00d6}', -1, 600, "Odieresis"),
    g('\u{00d7}', -1, 600, "multiply"),
    g('\u{00d9}', -1, 600, "Ugrave"),
    g('\u{00da}', -1, 600, "Uacute"),
    g('\u{00db}', -1, 600, "Ucircumflex"),
    g('\u{00dc}', -1, 600, "Udieresis"),
    g('\u{00dd}', -1, 600, "Yacute"),
    g('\u{00de}', -1, 600, "Thorn"),
    g('\u{00e0}', -1, 600, "agrave"),
    g('\u{00e1}', -1, 600, "aacute"),
    g('\u{00e2}', -1, 600, "acircumflex"),
    g('\u{00e3}', -1, 600, "atilde"),
    g('\u{00e4}', -1, 600, "adieresis"),
    g('\u{00e5}', -1, 600, "aring"),
    g('\u{00e7}', -1, 600, "ccedilla"),
    g('\u{00e8}', -1, 600, "egrave"),
    g('\u{00e9}', -1, 600, "eacute"),
    g('\u{00ea}', -1, 600, "ecircumflex"),
    g('\u{00eb}', -1, 600, "edieresis"),
    g('\u{00ec}', -1, 600, "igrave"),
    g('\u{00ed}', -1, 600, "iacute"),
    g('\u{00ee}', -1, 600, "icircumflex"),
    g('\u{00ef}', -1, 600, "idieresis"),
    g('\u{00f0}', -1, 600, "eth"),
    g('\u{00f1}', -1, 600, "ntilde"),
    g('\u{00f2}', -1, 600, "ograve"),
    g('\u{00f3}', -1, 600, "oacute"),
    g('\u{00f4}', -1, 600, "ocircumflex"),
    g('\u{00f5}', -1, 600, "otilde"),
    g('\u{00f6}', -1, 600, "odieresis"),
    g('\u{00f7}', -1, 600, "divide"),
    g('\u{00f9}', -1, 600, "ugrave"),
    g('\u{00fa}', -1, 600, "uacute"),
    g('\u{00fb}', -1, 600, "ucircumflex"),
    g('\u{00fc}', -1, 600, "udieresis"),
    g('\u{00fd}', -1, 600, "yacute"),
    g('\u{00fe}', -1, 600, "thorn"),
    g('\u{00ff}', -1, 600, "ydieresis"),
    g('\u{2212}', -1, 600, "minus"),
];

pub(crate) static HELVETICA: &[GlyphInfo] = &[
    g(' ', 0x20, 278, "space"),
    g('!', 0x21, 278, "exclam"),
    g('"', 0x22, 355, "quotedbl"),
    g('#', 0x23, 556, "numbersign"),
    g('$', 0x24, 556, "dollar"),
    g('%', 0x25, 889, "percent"),
    g('&', 0x26, 667, "ampersand"),
    g('\u{2019}', 0x27, 222, "quoteright"),
    g('(', 0x28, 333, "parenleft"),
    g(')', 0x29, 333, "parenright"),
    g('*', 0x2a, 389, "asterisk"),
    g('+', 0x2b, 584, "plus"),
    g(',', 0x2c, 278, "comma"),
    g('-', 0x2d, 333, "hyphen"),
    g('.', 0x2e, 278, "period"),
    g('/', 0x2f, 278, "slash"),
    g('0', 0x30, 556, "zero"),
    g('1', 0x31, 556, "one"),
    g('2', 0x32, 556, "two"),
    g('3', 0x33, 556, "three"),
    g('4', 0x34, 556, "four"),
    g('5', 0x35, 556, "five"),
    g('6', 0x36, 556, "six"),
    g('7', 0x37, 556, "seven"),
    g('8', 0x38, 556, "eight"),
    g('9', 0x39, 556, "nine"),
    g(':', 0x3a, 278, "colon"),
    g(';', 0x3b, 278, "semicolon"),
    g('<', 0x3c, 584, "less"),
    g('=', 0x3d, 584, "equal"),
    g('>', 0x3e, 584, "greater"),
    g('?', 0x3f, 556, "question"),
    g('@', 0x40, 1015, "at"),
    g('A', 0x41, 667, "A"),
    g('B', 0x42, 667, "B"),
    g('C', 0x43, 722, "C"),
    g('D', 0x44, 722, "D"),
    g('E', 0x45, 667, "E"),
    g('F', 0x46, 611, "F"),
    g('G', 0x47, 778, "G"),
    g('H', 0x48, 722, "H"),
    g('I', 0x49, 278, "I"),
    g('J', 0x4a, 500, "J"),
    g('K', 0x4b, 667, "K"),
    g('L', 0x4c, 556, "L"),
    g('M', 0x4d, 833, "M"),
    g('N', 0x4e, 722, "N"),
    g('O', 0x4f, 778, "O"),
    g('P', 0x50, 667, "P"),
    g('Q', 0x51, 778, "Q"),
    g('R', 0x52, 722, "R"),
    g('S', 0x53, 667, "S"),
    g('T', 0x54, 611, "T"),
    g('U', 0x55, 722, "U"),
    g('V', 0x56, 667, "V"),
    g('W', 0x57, 944, "W"),
    g('X', 0x58, 667, "X"),
    g('Y', 0x59, 667, "Y"),
    g('Z', 0x5a, 611, "Z"),
    g('[', 0x5b, 278, "bracketleft"),
    g('\\', 0x5c, 278, "backslash"),
    g(']', 0x5d, 278, "bracketright"),
    g('^', 0x5e, 469, "asciicircum"),
    g('_', 0x5f, 556, "underscore"),
    g('\u{2018}', 0x60, 222, "quoteleft"),
    g('a', 0x61, 556, "a"),
    g('b', 0x62, 556, "b"),
    g('c', 0x63, 500, "c"),
    g('d', 0x64, 556, "d"),
    g('e', 0x65, 556, "e"),
    g('f', 0x66, 278, "f"),
    g('g', 0x67, 556, "g"),
    g('h', 0x68, 556, "h"),
    g('i', 0x69, 222, "i"),
    g('j', 0x6a, 222, "j"),
    g('k', 0x6b, 500, "k"),
    g('l', 0x6c, 222, "l"),
    g('m', 0x6d, 833, "m"),
    g('n', 0x6e, 556, "n"),
    g('o', 0x6f, 556, "o"),
    g('p', 0x70, 556, "p"),
    g('q', 0x71, 556, "q"),
    g('r', 0x72, 333, "r"),
    g('s', 0x73, 500, "s"),
    g('t', 0x74, 278, "t"),
    g('u', 0x75, 556, "u"),
    g('v', 0x76, 500, "v"),
    g('w', 0x77, 722, "w"),
    g('x', 0x78, 500, "x"),
    g('y', 0x79, 500, "y"),
    g('z', 0x7a, 500, "z"),
    g('{', 0x7b, 334, "braceleft"),
    g('|', 0x7c, 260, "bar"),
    g('}', 0x7d, 334, "braceright"),
    g('~', 0x7e, 584, "asciitilde"),
    g('\u{00a1}', 0xa1, 333, "exclamdown"),
    g('\u{00a2}', 0xa2, 556, "cent"),
    g('\u{00a3}', 0xa3, 556, "sterling"),
    g('\u{2044}', 0xa4, 167, "fraction"),
    g('\u{00a5}', 0xa5, 556, "yen"),
    g('\u{0192}', 0xa6, 556, "florin"),
    g('\u{00a7}', 0xa7, 556, "section"),
    g('\u{00a4}', 0xa8, 556, "currency"),
    g('\'', 0xa9, 191, "quotesingle"),
    g('\u{201c}', 0xaa, 333, "quotedblleft"),
    g('\u{00ab}', 0xab, 556, "guillemotleft"),
    g('\u{2039}', 0xac, 333, "guilsinglleft"),
    g('\u{203a}', 0xad, 333, "guilsinglright"),
    g('\u{fb01}', 0xae, 500, "fi"),
    g('\u{fb02}', 0xaf, 500, "fl"),
    g('\u{2013}', 0xb1, 556, "endash"),
    g('\u{2020}', 0xb2, 556, "dagger"),
    g('\u{2021}', 0xb3, 556, "daggerdbl"),
    g('\u{00b7}', 0xb4, 278, "periodcentered"),
    g('\u{00b6}', 0xb6, 537, "paragraph"),
    g('\u{2022}', 0xb7, 350, "bullet"),
    g('\u{201a}', 0xb8, 222, "quotesinglbase"),
    g('\u{201e}', 0xb9, 333, "quotedblbase"),
    g('\u{201d}', 0xba, 333, "quotedblright"),
    g('\u{00bb}', 0xbb, 556, "guillemotright"),
    g('\u{2026}', 0xbc, 1000, "ellipsis"),
    g('\u{2030}', 0xbd, 1000, "perthousand"),
    g('\u{00bf}', 0xbf, 611, "questiondown"),
    g('`', 0xc1, 333, "grave"),
    g('\u{00b4}', 0xc2, 333, "acute"),
    g('\u{02c6}', 0xc3, 333, "circumflex"),
    g('\u{02dc}', 0xc4, 333, "tilde"),
    g('\u{00af}', 0xc5, 333, "macron"),
    g('\u{02d8}', 0xc6, 333, "breve"),
    g('\u{02d9}', 0xc7, 333, "dotaccent"),
    g('\u{00a8}', 0xc8, 333, "dieresis"),
    g('\u{02da}', 0xca, 333, "ring"),
    g('\u{00b8}', 0xcb, 333, "cedilla"),
    g('\u{02dd}', 0xcd, 333, "hungarumlaut"),
    g('\u{02db}', 0xce, 333, "ogonek"),
    g('\u{02c7}', 0xcf, 333, "caron"),
    g('\u{2014}', 0xd0, 1000, "emdash"),
    g('\u{00c6}', 0xe1, 1000, "AE"),
    g('\u{00aa}', 0xe3, 370, "ordfeminine"),
    g('\u{0141}', 0xe8, 556, "Lslash"),
    g('\u{00d8}', 0xe9, 778, "Oslash"),
    g('\u{0152}', 0xea, 1000, "OE"),
    g('\u{00ba}', 0xeb, 365, "ordmasculine"),
    g('\u{00e6}', 0xf1, 889, "ae"),
    g('\u{0131}', 0xf5, 278, "dotlessi"),
    g('\u{0142}', 0xf8, 222, "lslash"),
    g('\u{00f8}', 0xf9, 611, "oslash"),
    g('\u{0153}', 0xfa, 944, "oe"),
    g('\u{00df}', 0xfb, 611, "germandbls"),
    g('\u{0160}', -1, 667, "Scaron"),
    g('\u{017d}', -1, 611, "Zcaron"),
    g('\u{2122}', -1, 1000, "trademark"),
    g('\u{0161}', -1, 500, "scaron"),
    g('\u{017e}', -1, 500, "zcaron"),
    g('\u{0178}', -1, 667, "Ydieresis"),
    g('\u{00a6}', -1, 260, "brokenbar"),
    g('\u{00a9}', -1, 737, "copyright"),
    g('\u{00ac}', -1, 584, "logicalnot"),
    g('\u{00ae}', -1, 737, "registered"),
    g('\u{00b0}', -1, 400, "degree"),
    g('\u{00b1}', -1, 584, "plusminus"),
    g('\u{00b2}', -1, 333, "twosuperior"),
    g('\u{00b3}', -1, 333, "threesuperior"),
    g('\u{03bc}', -1, 556, "mu"),
    g('\u{00b9}', -1, 333, "onesuperior"),
    g('\u{00bc}', -1, 834, "onequarter"),
    g('\u{00bd}', -1, 834, "onehalf"),
    g('\u{00be}', -1, 834, "threequarters"),
    g('\u{00c0}', -1, 667, "Agrave"),
    g('\u{00c1}', -1, 667, "Aacute"),
    g('\u{00c2}', -1, 667, "Acircumflex"),
    g('\u{00c3}', -1, 667, "Atilde"),
    g('\u{00c4}', -1, 667, "Adieresis"),
    g('\u{00c5}', -1, 667, "Aring"),
    g('\u{00c7}', -1, 722, "Ccedilla"),
    g('\u{00c8}', -1, 667, "Egrave"),
    g('\u{00c9}', -1, 667, "Eacute"),
    g('\u{00ca}', -1, 667, "Ecircumflex"),
    g('\u{00cb}', -1, 667, "Edieresis"),
    g('\u{00cc}', -1, 278, "Igrave"),
    g('\u{00cd}', -1, 278, "Iacute"),
    g('\u{00ce}', -1, 278, "Icircumflex"),
    g('\u{00cf}', -1, 278, "Idieresis"),
    g('\u{00d0}', -1, 722, "Eth"),
    g('\u{00d1}', -1, 722, "Ntilde"),
    g('\u{00d2}', -1, 778, "Ograve"),
    g('\u{00d3}', -1, 778, "Oacute"),
    g('\u{00d4}', -1, 778, "Ocircumflex"),
    g('\u{00d5}', -1, 778, "Otilde"),
    g('\u{00d6}', -1, 778, "Odieresis"),
    g('\u{00d7}', -1, 584, "multiply"),
    g('\u{00d9}', -1, 722, "Ugrave"),
    g('\u{00da}', -1, 722, "Uacute"),
    g('\u{00db}', -1, 722, "Ucircumflex"),
    g('\u{00dc}', -1, 722, "Udieresis"),
    g('\u{00dd}', -1, 667, "Yacute"),
    g('\u{00de}', -1, 667, "Thorn"),
    g('\u{00e0}', -1, 556, "agrave"),
    g('\u{00e1}', -1, 556, "aacute"),
    g('\u{00e2}', -1, 556, "acircumflex"),
    g('\u{00e3}', -1, 556, "atilde"),
    g('\u{00e4}', -1, 556, "adieresis"),
    g('\u{00e5}', -1, 556, "aring"),
    g('\u{00e7}', -1, 500, "ccedilla"),
    g('\u{00e8}', -1, 556, "egrave"),
    g('\u{00e9}', -1, 556, "eacute"),
    g('\u{00ea}', -1, 556, "ecircumflex"),
    g('\u{00eb}', -1, 556, "edieresis"),
    g('\u{00ec}', -1, 278, "igrave"),
    g('\u{00ed}', -1, 278, "iacute"),
    g('\u{00ee}', -1, 278, "icircumflex"),
    g('\u{00ef}', -1, 278, "idieresis"),
    g('\u{00f0}', -1, 556, "eth"),
    g('\u{00f1}', -1, 556, "ntilde"),
    g('\u{00f2}', -1, 556, "ograve"),
    g('\u{00f3}', -1, 556, "oacute"),
    g('\u{00f4}', -1, 556, "ocircumflex"),
    g('\u{00f5}', -1, 556, "otilde"),
    g('\u{00f6}', -1, 556, "odieresis"),
    g('\u{00f7}', -1, 584, "divide"),
    g('\u{00f9}', -1, 556, "ugrave"),
    g('\u{00fa}', -1, 556, "uacute"),
    g('\u{00fb}', -1, 556, "ucircumflex"),
    g('\u{00fc}', -1, 556, "udieresis"),
    g('\u{00fd}', -1, 500, "yacute"),
    g('\u{00fe}', -1, 556, "thorn"),
    g('\u{00ff}', -1, 500, "ydieresis"),
    g('\u{2212}', -1, 584, "minus"),
];

pub(crate) static HELVETICA_BOLD: &[GlyphInfo] = &[
    g(' ', 0x20, 278, "space"),
    g('!', 0x21, 333, "exclam"),
    g('"', 0x22, 474, "quotedbl"),
    g('#', 0x23, 556, "numbersign"),
    g('$', 0x24, 556, "dollar"),
    g('%', 0x25, 889, "percent"),
    g('&', 0x26, 722, "ampersand"),
    g('\u{2019}', 0x27, 278, "quoteright"),
    g('(', 0x28, 333, "parenleft"),
    g(')', 0x29, 333, "parenright"),
    g('*', 0x2a, 389, "asterisk"),
    g('+', 0x2b, 584, "plus"),
    g(',', 0x2c, 278, "comma"),
    g('-', 0x2d, 333, "hyphen"),
    g('.', 0x2e, 278, "period"),
    g('/', 0x2f, 278, "slash"),
    g('0', 0x30, 556, "zero"),
    g('1', 0x31, 556, "one"),
    g('2', 0x32, 556, "two"),
    g('3', 0x33, 556, "three"),
    g('4', 0x34, 556, "four"),
    g('5', 0x35, 556, "five"),
    g('6', 0x36, 556, "six"),
    g('7', 0x37, 556, "seven"),
    g('8', 0x38, 556, "eight"),
    g('9', 0x39, 556, "nine"),
    g(':', 0x3a, 333, "colon"),
    g(';', 0x3b, 333, "semicolon"),
    g('<', 0x3c, 584, "less"),
    g('=', 0x3d, 584, "equal"),
    g('>', 0x3e, 584, "greater"),
    g('?', 0x3f, 611, "question"),
    g('@', 0x40, 975, "at"),
    g('A', 0x41, 722, "A"),
    g('B', 0x42, 722, "B"),
    g('C', 0x43, 722, "C"),
    g('D', 0x44, 722, "D"),
    g('E', 0x45, 667, "E"),
    g('F', 0x46, 611, "F"),
    g('G', 0x47, 778, "G"),
    g('H', 0x48, 722, "H"),
    g('I', 0x49, 278, "I"),
    g('J', 0x4a, 556, "J"),
    g('K', 0x4b, 722, "K"),
    g('L', 0x4c, 611, "L"),
    g('M', 0x4d, 833, "M"),
    g('N', 0x4e, 722, "N"),
    g('O', 0x4f, 778, "O"),
    g('P', 0x50, 667, "P"),
    g('Q', 0x51, 778, "Q"),
    g('R', 0x52, 722, "R"),
    g('S', 0x53, 667, "S"),
    g('T', 0x54, 611, "T"),
    g('U', 0x55, 722, "U"),
    g('V', 0x56, 667, "V"),
    g('W', 0x57, 944, "W"),
    g('X', 0x58, 667, "X"),
    g('Y', 0x59, 667, "Y"),
    g('Z', 0x5a, 611, "Z"),
    g('[', 0x5b, 333, "bracketleft"),
    g('\\', 0x5c, 278, "backslash"),
    g(']', 0x5d, 333, "bracketright"),
    g('^', 0x5e, 584, "asciicircum"),
    g('_', 0x5f, 556, "underscore"),
    g('\u{2018}', 0x60, 278, "quoteleft"),
    g('a', 0x61, 556, "a"),
    g('b', 0x62, 611, "b"),
    g('c', 0x63, 556, "c"),
    g('d', 0x64, 611, "d"),
    g('e', 0x65, 556, "e"),
    g('f', 0x66, 333, "f"),
    g('g', 0x67, 611, "g"),
    g('h', 0x68, 611, "h"),
    g('i', 0x69, 278, "i"),
    g('j', 0x6a, 278, "j"),
    g('k', 0x6b, 556, "k"),
    g('l', 0x6c, 278, "l"),
    g('m', 0x6d, 889, "m"),
    g('n', 0x6e, 611, "n"),
    g('o', 0x6f, 611, "o"),
    g('p', 0x70, 611, "p"),
    g('q', 0x71, 611, "q"),
    g('r', 0x72, 389, "r"),
    g('s', 0x73, 556, "s"),
    g('t', 0x74, 333, "t"),
    g('u', 0x75, 611, "u"),
    g('v', 0x76, 556, "v"),
    g('w', 0x77, 778, "w"),
    g('x', 0x78, 556, "x"),
    g('y', 0x79, 556, "y"),
    g('z', 0x7a, 500, "z"),
    g('{', 0x7b, 389, "braceleft"),
    g('|', 0x7c, 280, "bar"),
    g('}', 0x7d, 389, "braceright"),
    g('~', 0x7e, 584, "asciitilde"),
    g('\u{00a1}', 0xa1, 333, "exclamdown"),
    g('\u{00a2}', 0xa2, 556, "cent"),
    g('\u{00a3}', 0xa3, 556, "sterling"),
    g('\u{2044}', 0xa4, 167, "fraction"),
    g('\u{00a5}', 0xa5, 556, "yen"),
    g('\u{0192}', 0xa6, 556, "florin"),
    g('\u{00a7}', 0xa7, 556, "section"),
    g('\u{00a4}', 0xa8, 556, "currency"),
    g('\'', 0xa9, 238, "quotesingle"),
    g('\u{201c}', 0xaa, 500, "quotedblleft"),
    g('\u{00ab}', 0xab, 556, "guillemotleft"),
    g('\u{2039}', 0xac, 333, "guilsinglleft"),
    g('\u{203a}', 0xad, 333, "guilsinglright"),
    g('\u{fb01}', 0xae, 611, "fi"),
    g('\u{fb02}', 0xaf, 611, "fl"),
    g('\u{2013}', 0xb1, 556, "endash"),
    g('\u{2020}', 0xb2, 556, "dagger"),
    g('\u{2021}', 0xb3, 556, "daggerdbl"),
    g('\u{00b7}', 0xb4, 278, "periodcentered"),
    g('\u{00b6}', 0xb6, 556, "paragraph"),
    g('\u{2022}', 0xb7, 350, "bullet"),
    g('\u{201a}', 0xb8, 278, "quotesinglbase"),
    g('\u{201e}', 0xb9, 500, "quotedblbase"),
    g('\u{201d}', 0xba, 500, "quotedblright"),
    g('\u{00bb}', 0xbb, 556, "guillemotright"),
    g('\u{2026}', 0xbc, 1000, "ellipsis"),
    g('\u{2030}', 0xbd, 1000, "perthousand"),
    g('\u{00bf}', 0xbf, 611, "questiondown"),
    g('`', 0xc1, 333, "grave"),
    g('\u{00b4}', 0xc2, 333, "acute"),
    g('\u{02c6}', 0xc3, 333, "circumflex"),
    g('\u{02dc}', 0xc4, 333, "tilde"),
    g('\u{00af}', 0xc5, 333, "macron"),
    g('\u{02d8}', 0xc6, 333, "breve"),
    g('\u{02d9}', 0xc7, 333, "dotaccent"),
    g('\u{00a8}', 0xc8, 333, "dieresis"),
    g('\u{02da}', 0xca, 333, "ring"),
    g('\u{00b8}', 0xcb, 333, "cedilla"),
    g('\u{02dd}', 0xcd, 333, "hungarumlaut"),
    g('\u{02db}', 0xce, 333, "ogonek"),
    g('\u{02c7}', 0xcf, 333, "caron"),
    g('\u{2014}', 0xd0, 1000, "emdash"),
    g('\u{00c6}', 0xe1, 1000, "AE"),
    g('\u{00aa}', 0xe3, 370, "ordfeminine"),
    g('\u{0141}', 0xe8, 611, "Lslash"),
    g('\u{00d8}', 0xe9, 778, "Oslash"),
    g('\u{0152}', 0xea, 1000, "OE"),
    g('\u{00ba}', 0xeb, 365, "ordmasculine"),
    g('\u{00e6}', 0xf1, 889, "ae"),
    g('\u{0131}', 0xf5, 278, "dotlessi"),
    g('\u{0142}', 0xf8, 278, "lslash"),
    g('\u{00f8}', 0xf9, 611, "oslash"),
    g('\u{0153}', 0xfa, 944, "oe"),
    g('\u{00df}', 0xfb, 611, "germandbls"),
    g('\u{0160}', -1, 667, "Scaron"),
    g('\u{017d}', -1, 611, "Zcaron"),
    g('\u{2122}', -1, 1000, "trademark"),
    g('\u{0161}', -1, 556, "scaron"),
    g('\u{017e}', -1, 500, "zcaron"),
    g('\u{0178}', -1, 667, "Ydieresis"),
    g('\u{00a6}', -1, 280, "brokenbar"),
    g('\u{00a9}', -1, 737, "copyright"),
    g('\u{00ac}', -1, 584, "logicalnot"),
    g('\u{00ae}', -1, 737, "registered"),
    g('\u{00b0}', -1, 400, "degree"),
    g('\u{00b1}', -1, 584, "plusminus"),
    g('\u{00b2}', -1, 333, "twosuperior"),
    g('\u{00b3}', -1, 333, "threesuperior"),
    g('\u{03bc}', -1, 611, "mu"),
    g('\u{00b9}', -1, 333, "onesuperior"),
    g('\u{00bc}', -1, 834, "onequarter"),
    g('\u{00bd}', -1, 834, "onehalf"),
    g('\u{00be}', -1, 834, "threequarters"),
    g('\u{00c0}', -1, 722, "Agrave"),
    g('\u{00c1}', -1, 722, "Aacute"),
    g('\u{00c2}', -1, 722, "Acircumflex"),
    g('\u{00c3}', -1, 722, "Atilde"),
    g('\u{00c4}', -1, 722, "Adieresis"),
    g('\u{00c5}', -1, 722, "Aring"),
    g('\u{00c7}', -1, 722, "Ccedilla"),
    g('\u{00c8}', -1, 667, "Egrave"),
    g('\u{00c9}', -1, 667, "Eacute"),
    g('\u{00ca}', -1, 667, "Ecircumflex"),
    g('\u{00cb}', -1, 667, "Edieresis"),
    g('\u{00cc}', -1, 278, "Igrave"),
    g('\u{00cd}', -1, 278, "Iacute"),
    g('\u{00ce}', -1, 278, "Icircumflex"),
    g('\u{00cf}', -1, 278, "Idieresis"),
    g('\u{00d0}', -1, 722, "Eth"),
    g('\u{00d1}', -1, 722, "Ntilde"),
    g('\u{00d2}', -1, 778, "Ograve"),
    g('\u{00d3}', -1, 778, "Oacute"),
    g('\u{00d4}', -1, 778, "Ocircumflex"),
    g('\u{00d5}', -1, 778, "Otilde"),
    g('\u{00d6}', -1, 778, "Odieresis"),
    g('\u{00d7}', -1, 584, "multiply"),
    g('\u{00d9}', -1, 722, "Ugrave"),
    g('\u{00da}', -1, 722, "Uacute"),
    g('\u{00db}', -1, 722, "Ucircumflex"),
    g('\u{00dc}', -1, 722, "Udieresis"),
    g('\u{00dd}', -1, 667, "Yacute"),
    g('\u{00de}', -1, 667, "Thorn"),
    g('\u{00e0}', -1, 556, "agrave"),
    g('\u{00e1}', -1, 556, "aacute"),
    g('\u{00e2}', -1, 556, "acircumflex"),
    g('\u{00e3}', -1, 556, "atilde"),
    g('\u{00e4}', -1, 556, "adieresis"),
    g('\u{00e5}', -1, 556, "aring"),
    g('\u{00e7}', -1, 556, "ccedilla"),
    g('\u{00e8}', -1, 556, "egrave"),
    g('\u{00e9}', -1, 556, "eacute"),
    g('\u{00ea}', -1, 556, "ecircumflex"),
    g('\u{00eb}', -1, 556, "edieresis"),
    g('\u{00ec}', -1, 278, "igrave"),
    g('\u{00ed}', -1, 278, "iacute"),
    g('\u{00ee}', -1, 278, "icircumflex"),
    g('\u{00ef}', -1, 278, "idieresis"),
    g('\u{00f0}', -1, 611, "eth"),
    g('\u{00f1}', -1, 611, "ntilde"),
    g('\u{00f2}', -1, 611, "ograve"),
    g('\u{00f3}', -1, 611, "oacute"),
    g('\u{00f4}', -1, 611, "ocircumflex"),
    g('\u{00f5}', -1, 611, "otilde"),
    g('\u{00f6}', -1, 611, "odieresis"),
    g('\u{00f7}', -1, 584, "divide"),
    g('\u{00f9}', -1, 611, "ugrave"),
    g('\u{00fa}', -1, 611, "uacute"),
    g('\u{00fb}', -1, 611, "ucircumflex"),
    g('\u{00fc}', -1, 611, "udieresis"),
    g('\u{00fd}', -1, 556, "yacute"),
    g('\u{00fe}', -1, 611, "thorn"),
    g('\u{00ff}', -1, 556, "ydieresis"),
    g('\u{2212}', -1, 584, "minus"),
];

pub(crate) static HELVETICA_OBLIQUE: &[GlyphInfo] = &[
    g(' ', 0x20, 278, "space"),
    g('!', 0x21, 278, "exclam"),
    g('"', 0x22, 355, "quotedbl"),
    g('#', 0x23, 556, "numbersign"),
    g('$', 0x24, 556, "dollar"),
    g('%', 0x25, 889, "percent"),
    g('&', 0x26, 667, "ampersand"),
    g('\u{2019}', 0x27, 222, "quoteright"),
    g('(', 0x28, 333, "parenleft"),
    g(')', 0x29, 333, "parenright"),
    g('*', 0x2a, 389, "asterisk"),
    g('+', 0x2b, 584, "plus"),
    g(',', 0x2c, 278, "comma"),
    g('-', 0x2d, 333, "hyphen"),
    g('.', 0x2e, 278, "period"),
    g('/', 0x2f, 278, "slash"),
    g('0', 0x30, 556, "zero"),
    g('1', 0x31, 556, "one"),
    g('2', 0x32, 556, "two"),
    g('3', 0x33, 556, "three"),
    g('4', 0x34, 556, "four"),
    g('5', 0x35, 556, "five"),
    g('6', 0x36, 556, "six"),
    g('7', 0x37, 556, "seven"),
    g('8', 0x38, 556, "eight"),
    g('9', 0x39, 556, "nine"),
    g(':', 0x3a, 278, "colon"),
    g(';', 0x3b, 278, "semicolon"),
    g('<', 0x3c, 584, "less"),
    g('=', 0x3d, 584, "equal"),
    g('>', 0x3e, 584, "greater"),
    g('?', 0x3f, 556, "question"),
    g('@', 0x40, 1015, "at"),
    g('A', 0x41, 667, "A"),
    g('B', 0x42, 667, "B"),
    g('C', 0x43, 722, "C"),
    g('D', 0x44, 722, "D"),
    g('E', 0x45, 667, "E"),
    g('F', 0x46, 611, "F"),
    g('G', 0x47, 778, "G"),
    g('H', 0x48, 722, "H"),
    g('I', 0x49, 278, "I"),
    g('J', 0x4a, 500, "J"),
    g('K', 0x4b, 667, "K"),
    g('L', 0x4c, 556, "L"),
    g('M', 0x4d, 833, "M"),
    g('N', 0x4e, 722, "N"),
    g('O', 0x4f, 778, "O"),
    g('P', 0x50, 667, "P"),
    g('Q', 0x51, 778, "Q"),
    g('R', 0x52, 722, "R"),
    g('S', 0x53, 667, "S"),
    g('T', 0x54, 611, "T"),
    g('U', 0x55, 722, "U"),
    g('V', 0x56, 667, "V"),
    g('W', 0x57, 944, "W"),
    g('X', 0x58, 667, "X"),
    g('Y', 0x59, 667, "Y"),
    g('Z', 0x5a, 611, "Z"),
    g('[', 0x5b, 278, "bracketleft"),
    g('\\', 0x5c, 278, "backslash"),
    g(']', 0x5d, 278, "bracketright"),
    g('^', 0x5e, 469, "asciicircum"),
    g('_', 0x5f, 556, "underscore"),
    g('\u{2018}', 0x60, 222, "quoteleft"),
    g('a', 0x61, 556, "a"),
    g('b', 0x62, 556, "b"),
    g('c', 0x63, 500, "c"),
    g('d', 0x64, 556, "d"),
    g('e', 0x65, 556, "e"),
    g('f', 0x66, 278, "f"),
    g('g', 0x67, 556, "g"),
    g('h', 0x68, 556, "h"),
    g('i', 0x69, 222, "i"),
    g('j', 0x6a, 222, "j"),
    g('k', 0x6b, 500, "k"),
    g('l', 0x6c, 222, "l"),
    g('m', 0x6d, 833, "m"),
    g('n', 0x6e, 556, "n"),
    g('o', 0x6f, 556, "o"),
    g('p', 0x70, 556, "p"),
    g('q', 0x71, 556, "q"),
    g('r', 0x72, 333, "r"),
    g('s', 0x73, 500, "s"),
    g('t', 0x74, 278, "t"),
    g('u', 0x75, 556, "u"),
    g('v', 0x76, 500, "v"),
    g('w', 0x77, 722, "w"),
    g('x', 0x78, 500, "x"),
    g('y', 0x79, 500, "y"),
    g('z', 0x7a, 500, "z"),
    g('{', 0x7b, 334, "braceleft"),
    g('|', 0x7c, 260, "bar"),
    g('}', 0x7d, 334, "braceright"),
    g('~', 0x7e, 584, "asciitilde"),
    g('\u{00a1}', 0xa1, 333, "exclamdown"),
    g('\u{00a2}', 0xa2, 556, "cent"),
    g('\u{00a3}', 0xa3, 556, "sterling"),
    g('\u{2044}', 0xa4, 167, "fraction"),
    g('\u{00a5}', 0xa5, 556, "yen"),
    g('\u{0192}', 0xa6, 556, "florin"),
    g('\u{00a7}', 0xa7, 556, "section"),
    g('\u{00a4}', 0xa8, 556, "currency"),
    g('\'', 0xa9, 191, "quotesingle"),
    g('\u{201c}', 0xaa, 333, "quotedblleft"),
    g('\u{00ab}', 0xab, 556, "guillemotleft"),
    g('\u{2039}', 0xac, 333, "guilsinglleft"),
    g('\u{203a}', 0xad, 333, "guilsinglright"),
    g('\u{fb01}', 0xae, 500, "fi"),
    g('\u{fb02}', 0xaf, 500, "fl"),
    g('\u{2013}', 0xb1, 556, "endash"),
    g('\u{2020}', 0xb2, 556, "dagger"),
    g('\u{2021}', 0xb3, 556, "daggerdbl"),
    g('\u{00b7}', 0xb4, 278, "periodcentered"),
    g('\u{00b6}', 0xb6, 537, "paragraph"),
    g('\u{2022}', 0xb7, 350, "bullet"),
    g('\u{201a}', 0xb8, 222, "quotesinglbase"),
    g('\u{201e}', 0xb9, 333, "quotedblbase"),
    g('\u{201d}', 0xba, 333, "quotedblright"),
    g('\u{00bb}', 0xbb, 556, "guillemotright"),
    g('\u{2026}', 0xbc, 1000, "ellipsis"),
    g('\u{2030}', 0xbd, 1000, "perthousand"),
    g('\u{00bf}', 0xbf, 611, "questiondown"),
    g('`', 0xc1, 333, "grave"),
    g('\u{00b4}', 0xc2, 333, "acute"),
    g('\u{02c6}', 0xc3, 333, "circumflex"),
    g('\u{02dc}', 0xc4, 333, "tilde"),
    g('\u{00af}', 0xc5, 333, "macron"),
    g('\u{02d8}', 0xc6, 333, "breve"),
    g('\u{02d9}', 0xc7, 333, "dotaccent"),
    g('\u{00a8}', 0xc8, 333, "dieresis"),
    g('\u{02da}', 0xca, 333, "ring"),
    g('\u{00b8}', 0xcb, 333, "cedilla"),
    g('\u{02dd}', 0xcd, 333, "hungarumlaut"),
    g('\u{02db}', 0xce, 333, "ogonek"),
    g('\u{02c7}', 0xcf, 333, "caron"),
    g('\u{2014}', 0xd0, 1000, "emdash"),
    g('\u{00c6}', 0xe1, 1000, "AE"),
    g('\u{00aa}', 0xe3, 370, "ordfeminine"),
    g('\u{0141}', 0xe8, 556, "Lslash"),
    g('\u{00d8}', 0xe9, 778, "Oslash"),
    g('\u{0152}', 0xea, 1000, "OE"),
    g('\u{00ba}', 0xeb, 365, "ordmasculine"),
    g('\u{00e6}', 0xf1, 889, "ae"),
    g('\u{0131}', 0xf5, 278, "dotlessi"),
    g('\u{0142}', 0xf8, 222, "lslash"),
    g('\u{00f8}', 0xf9, 611, "oslash"),
    g('\u{0153}', 0xfa, 944, "oe"),
    g('\u{00df}', 0xfb, 611, "germandbls"),
    g('\u{0160}', -1, 667, "Scaron"),
    g('\u{017d}', -1, 611, "Zcaron"),
    g('\u{2122}', -1, 1000, "trademark"),
    g('\u{0161}', -1, 500, "scaron"),
    g('\u{017e}', -1, 500, "zcaron"),
    g('\u{0178}', -1, 667, "Ydieresis"),
    g('\u{00a6}', -1, 260, "brokenbar"),
    g('\u{00a9}', -1, 737, "copyright"),
    g('\u{00ac}', -1, 584, "logicalnot"),
    g('\u{00ae}', -1, 737, "registered"),
    g('\u{00b0}', -1, 400, "degree"),
    g('\u{00b1}', -1, 584, "plusminus"),
    g('\u{00b2}', -1, 333, "twosuperior"),
    g('\u{00b3}', -1, 333, "threesuperior"),
    g('\u{03bc}', -1, 556, "mu"),
    g('\u{00b9}', -1, 333, "onesuperior"),
    g('\u{00bc}', -1, 834, "onequarter"),
    g('\u{00bd}', -1, 834, "onehalf"),
    g('\u{00be}', -1, 834, "threequarters"),
    g('\u{00c0}', -1, 667, "Agrave"),
    g('\u{00c1}', -1, 667, "Aacute"),
    g('\u{00c2}', -1, 667, "Acircumflex"),
    g('\u{00c3}', -1, 667, "Atilde"),
    g('\u{00c4}', -1, 667, "Adieresis"),
    g('\u{00c5}', -1, 667, "Aring"),
    g('\u{00c7}', -1, 722, "Ccedilla"),
    g('\u{00c8}', -1, 667, "Egrave"),
    g('\u{00c9}', -1, 667, "Eacute"),
    g('\u{00ca}', -1, 667, "Ecircumflex"),
    g('\u{00cb}', -1, 667, "Edieresis"),
    g('\u{00cc}', -1, 278, "Igrave"),
    g('\u{00cd}', -1, 278, "Iacute"),
    g('\u{00ce}', -1, 278, "Icircumflex"),
    g('\u{00cf}', -1, 278, "Idieresis"),
    g('\u{00d0}', -1, 722, "Eth"),
    g('\u{00d1}', -1, 722, "Ntilde"),
    g('\u{00d2}', -1, 778, "Ograve"),
    g('\u{00d3}', -1, 778, "Oacute"),
    g('\u{00d4}', -1, 778, "Ocircumflex"),
    g('\u{00d5}', -1, 778, "Otilde"),
    g('\u{00d6}', -1, 778, "Odieresis"),
    g('\u{00d7}', -1, 584, "multiply"),
    g('\u{00d9}', -1, 722, "Ugrave"),
    g('\u{00da}', -1, 722, "Uacute"),
    g('\u{00db}', -1, 722, "Ucircumflex"),
    g('\u{00dc}', -1, 722, "Udieresis"),
    g('\u{00dd}', -1, 667, "Yacute"),
    g('\u{00de}', -1, 667, "Thorn"),
    g('\u{00e0}', -1, 556, "agrave"),
    g('\u{00e1}', -1, 556, "aacute"),
    g('\u{00e2}', -1, 556, "acircumflex"),
    g('\u{00e3}', -1, 556, "atilde"),
    g('\u{00e4}', -1, 556, "adieresis"),
    g('\u{00e5}', -1, 556, "aring"),
    g('\u{00e7}', -1, 500, "ccedilla"),
    g('\u{00e8}', -1, 556, "egrave"),
    g('\u{00e9}', -1, 556, "eacute"),
    g('\u{00ea}', -1, 556, "ecircumflex"),
    g('\u{00eb}', -1, 556, "edieresis"),
    g('\u{00ec}', -1, 278, "igrave"),
    g('\u{00ed}', -1, 278, "iacute"),
    g('\u{00ee}', -1, 278, "icircumflex"),
    g('\u{00ef}', -1, 278, "idieresis"),
    g('\u{00f0}', -1, 556, "eth"),
    g('\u{00f1}', -1, 556, "ntilde"),
    g('\u{00f2}', -1, 556, "ograve"),
    g('\u{00f3}', -1, 556, "oacute"),
    g('\u{00f4}', -1, 556, "ocircumflex"),
    g('\u{00f5}', -1, 556, "otilde"),
    g('\u{00f6}', -1, 556, "odieresis"),
    g('\u{00f7}', -1, 584, "divide"),
    g('\u{00f9}', -1, 556, "ugrave"),
    g('\u{00fa}', -1, 556, "uacute"),
    g('\u{00fb}', -1, 556, "ucircumflex"),
    g('\u{00fc}', -1, 556, "udieresis"),
    g('\u{00fd}', -1, 500, "yacute"),
    g('\u{00fe}', -1, 556, "thorn"),
    g('\u{00ff}', -1, 500, "ydieresis"),
    g('\u{2212}', -1, 584, "minus"),
];

pub(crate) static HELVETICA_BOLD_OBLIQUE: &[GlyphInfo] = &[
    g(' ', 0x20, 278, "space"),
    g('!', 0x21, 333, "exclam"),
    g('"', 0x22, 474, "quotedbl"),
    g('#', 0x23, 556, "numbersign"),
    g('$', 0x24, 556, "dollar"),
    g('%', 0x25, 889, "percent"),
    g('&', 0x26, 722, "ampersand"),
    g('\u{2019}', 0x27, 278, "quoteright"),
    g('(', 0x28, 333, "parenleft"),
    g(')', 0x29, 333, "parenright"),
    g('*', 0x2a, 389, "asterisk"),
    g('+', 0x2b, 584, "plus"),
    g(',', 0x2c, 278, "comma"),
    g('-', 0x2d, 333, "hyphen"),
    g('.', 0x2e, 278, "period"),
    g('/', 0x2f, 278, "slash"),
    g('0', 0x30, 556, "zero"),
    g('1', 0x31, 556, "one"),
    g('2', 0x32, 556, "two"),
    g('3', 0x33, 556, "three"),
    g('4', 0x34, 556, "four"),
    g('5', 0x35, 556, "five"),
    g('6', 0x36, 556, "six"),
    g('7', 0x37, 556, "seven"),
    g('8', 0x38, 556, "eight"),
    g('9', 0x39, 556, "nine"),
    g(':', 0x3a, 333, "colon"),
    g(';', 0x3b, 333, "semicolon"),
    g('<', 0x3c, 584, "less"),
    g('=', 0x3d, 584, "equal"),
    g('>', 0x3e, 584, "greater"),
    g('?', 0x3f, 611, "question"),
    g('@', 0x40, 975, "at"),
    g('A', 0x41, 722, "A"),
    g('B', 0x42, 722, "B"),
    g('C', 0x43, 722, "C"),
    g('D', 0x44, 722, "D"),
    g('E', 0x45, 667, "E"),
    g('F', 0x46, 611, "F"),
    g('G', 0x47, 778, "G"),
    g('H', 0x48, 722, "H"),
    g('I', 0x49, 278, "I"),
    g('J', 0x4a, 556, "J"),
    g('K', 0x4b, 722, "K"),
    g('L', 0x4c, 611, "L"),
    g('M', 0x4d, 833, "M"),
    g('N', 0x4e, 722, "N"),
    g('O', 0x4f, 778, "O"),
    g('P', 0x50, 667, "P"),
    g('Q', 0x51, 778, "Q"),
    g('R', 0x52, 722, "R"),
    g('S', 0x53, 667, "S"),
    g('T', 0x54, 611, "T"),
    g('U', 0x55, 722, "U"),
    g('V', 0x56, 667, "V"),
    g('W', 0x57, 944, "W"),
    g('X', 0x58, 667, "X"),
    g('Y', 0x59, 667, "Y"),
    g('Z', 0x5a, 611, "Z"),
    g('[', 0x5b, 333, "bracketleft"),
    g('\\', 0x5c, 278, "backslash"),
    g(']', 0x5d, 333, "bracketright"),
    g('^', 0x5e, 584, "asciicircum"),
    g('_', 0x5f, 556, "underscore"),
    g('\u{2018}', 0x60, 278, "quoteleft"),
    g('a', 0x61, 556, "a"),
    g('b', 0x62, 611, "b"),
    g('c', 0x63, 556, "c"),
    g('d', 0x64, 611, "d"),
    g('e', 0x65, 556, "e"),
    g('f', 0x66, 333, "f"),
    g('g', 0x67, 611, "g"),
    g('h', 0x68, 611, "h"),
    g('i', 0x69, 278, "i"),
    g('j', 0x6a, 278, "j"),
    g('k', 0x6b, 556, "k"),
    g('l', 0x6c, 278, "l"),
    g('m', 0x6d, 889, "m"),
    g('n', 0x6e, 611, "n"),
    g('o', 0x6f, 611, "o"),
    g('p', 0x70, 611, "p"),
    g('q', 0x71, 611, "q"),
    g('r', 0x72, 389, "r"),
    g('s', 0x73, 556, "s"),
    g('t', 0x74, 333, "t"),
    g('u', 0x75, 611, "u"),
    g('v', 0x76, 556, "v"),
    g('w', 0x77, 778, "w"),
    g('x', 0x78, 556, "x"),
    g('y', 0x79, 556, "y"),
    g('z', 0x7a, 500, "z"),
    g('{', 0x7b, 389, "braceleft"),
    g('|', 0x7c, 280, "bar"),
    g('}', 0x7d, 389, "braceright"),
    g('~', 0x7e, 584, "asciitilde"),
    g('\u{00a1}', 0xa1, 333, "exclamdown"),
    g('\u{00a2}', 0xa2, 556, "cent"),
    g('\u{00a3}', 0xa3, 556, "sterling"),
    g('\u{2044}', 0xa4, 167, "fraction"),
    g('\u{00a5}', 0xa5, 556, "yen"),
    g('\u{0192}', 0xa6, 556, "florin"),
    g('\u{00a7}', 0xa7, 556, "section"),
    g('\u{00a4}', 0xa8, 556, "currency"),
    g('\'', 0xa9, 238, "quotesingle"),
    g('\u{201c}', 0xaa, 500, "quotedblleft"),
    g('\u{00ab}', 0xab, 556, "guillemotleft"),
    g('\u{2039}', 0xac, 333, "guilsinglleft"),
    g('\u{203a}', 0xad, 333, "guilsinglright"),
    g('\u{fb01}', 0xae, 611, "fi"),
    g('\u{fb02}', 0xaf, 611, "fl"),
    g('\u{2013}', 0xb1, 556, "endash"),
    g('\u{2020}', 0xb2, 556, "dagger"),
    g('\u{2021}', 0xb3, 556, "daggerdbl"),
    g('\u{00b7}', 0xb4, 278, "periodcentered"),
    g('\u{00b6}', 0xb6, 556, "paragraph"),
    g('\u{2022}', 0xb7, 350, "bullet"),
    g('\u{201a}', 0xb8, 278, "quotesinglbase"),
    g('\u{201e}', 0xb9, 500, "quotedblbase"),
    g('\u{201d}', 0xba, 500, "quotedblright"),
    g('\u{00bb}', 0xbb, 556, "guillemotright"),
    g('\u{2026}', 0xbc, 1000, "ellipsis"),
    g('\u{2030}', 0xbd, 1000, "perthousand"),
    g('\u{00bf}', 0xbf, 611, "questiondown"),
    g('`', 0xc1, 333, "grave"),
    g('\u{00b4}', 0xc2, 333, "acute"),
    g('\u{02c6}', 0xc3, 333, "circumflex"),
    g('\u{02dc}', 0xc4, 333, "tilde"),
    g('\u{00af}', 0xc5, 333, "macron"),
    g('\u{02d8}', 0xc6, 333, "breve"),
    g('\u{02d9}', 0xc7, 333, "dotaccent"),
    g('\u{00a8}', 0xc8, 333, "dieresis"),
    g('\u{02da}', 0xca, 333, "ring"),
    g('\u{00b8}', 0xcb, 333, "cedilla"),
    g('\u{02dd}', 0xcd, 333, "hungarumlaut"),
    g('\u{02db}', 0xce, 333, "ogonek"),
    g('\u{02c7}', 0xcf, 333, "caron"),
    g('\u{2014}', 0xd0, 1000, "emdash"),
    g('\u{00c6}', 0xe1, 1000, "AE"),
    g('\u{00aa}', 0xe3, 370, "ordfeminine"),
    g('\u{0141}', 0xe8, 611, "Lslash"),
    g('\u{00d8}', 0xe9, 778, "Oslash"),
    g('\u{0152}', 0xea, 1000, "OE"),
    g('\u{00ba}', 0xeb, 365, "ordmasculine"),
    g('\u{00e6}', 0xf1, 889, "ae"),
    g('\u{0131}', 0xf5, 278, "dotlessi"),
    g('\u{0142}', 0xf8, 278, "lslash"),
    g('\u{00f8}', 0xf9, 611, "oslash"),
    g('\u{0153}', 0xfa, 944, "oe"),
    g('\u{00df}', 0xfb, 611, "germandbls"),
    g('\u{0160}', -1, 667, "Scaron"),
    g('\u{017d}', -1, 611, "Zcaron"),
    g('\u{2122}', -1, 1000, "trademark"),
    g('\u{0161}', -1, 556, "scaron"),
    g('\u{017e}', -1, 500, "zcaron"),
    g('\u{0178}', -1, 667, "Ydieresis"),
    g('\u{00a6}', -1, 280, "brokenbar"),
    g('\u{00a9}', -1, 737, "copyright"),
    g('\u{00ac}', -1, 584, "logicalnot"),
    g('\u{00ae}', -1, 737, "registered"),
    g('\u{00b0}', -1, 400, "degree"),
    g('\u{00b1}', -1, 584, "plusminus"),
    g('\u{00b2}', -1, 333, "twosuperior"),
    g('\u{00b3}', -1, 333, "threesuperior"),
    g('\u{03bc}', -1, 611, "mu"),
    g('\u{00b9}', -1, 333, "onesuperior"),
    g('\u{00bc}', -1, 834, "onequarter"),
    g('\u{00bd}', -1, 834, "onehalf"),
    g('\u{00be}', -1, 834, "threequarters"),
    g('\u{00c0}', -1, 722, "Agrave"),
    g('\u{00c1}', -1, 722, "Aacute"),
    g('\u{00c2}', -1, 722, "Acircumflex"),
    g('\u{00c3}', -1, 722, "Atilde"),
    g('\u{00c4}', -1, 722, "Adieresis"),
    g('\u{00c5}', -1, 722, "Aring"),
    g('\u{00c7}', -1, 722, "Ccedilla"),
    g('\u{00c8}', -1, 667, "Egrave"),
    g('\u{00c9}', -1, 667, "Eacute"),
    g('\u{00ca}', -1, 667, "Ecircumflex"),
    g('\u{00cb}', -1, 667, "Edieresis"),
    g('\u{00cc}', -1, 278, "Igrave"),
    g('\u{00cd}', -1, 278, "Iacute"),
    g('\u{00ce}', -1, 278, "Icircumflex"),
    g('\u{00cf}', -1, 278, "Idieresis"),
    g('\u{00d0}', -1, 722, "Eth"),
    g('\u{00d1}', -1, 722, "Ntilde"),
    g('\u{00d2}', -1, 778, "Ograve"),
    g('\u{00d3}', -1, 778, "Oacute"),
    g('\u{00d4}', -1, 778, "Ocircumflex"),
    g('\u{00d5}', -1, 778, "Otilde"),
    g('\u{00d6}', -1, 778, "Odieresis"),
    g('\u{00d7}', -1, 584, "multiply"),
    g('\u{00d9}', -1, 722, "Ugrave"),
    g('\u{00da}', -1, 722, "Uacute"),
    g('\u{00db}', -1, 722, "Ucircumflex"),
    g('\u{00dc}', -1, 722, "Udieresis"),
    g('\u{00dd}', -1, 667, "Yacute"),
    g('\u{00de}', -1, 667, "Thorn"),
    g('\u{00e0}', -1, 556, "agrave"),
    g('\u{00e1}', -1, 556, "aacute"),
    g('\u{00e2}', -1, 556, "acircumflex"),
    g('\u{00e3}', -1, 556, "atilde"),
    g('\u{00e4}', -1, 556, "adieresis"),
    g('\u{00e5}', -1, 556, "aring"),
    g('\u{00e7}', -1, 556, "ccedilla"),
    g('\u{00e8}', -1, 556, "egrave"),
    g('\u{00e9}', -1, 556, "eacute"),
    g('\u{00ea}', -1, 556, "ecircumflex"),
    g('\u{00eb}', -1, 556, "edieresis"),
    g('\u{00ec}', -1, 278, "igrave"),
    g('\u{00ed}', -1, 278, "iacute"),
    g('\u{00ee}', -1, 278, "icircumflex"),
    g('\u{00ef}', -1, 278, "idieresis"),
    g('\u{00f0}', -1, 611, "eth"),
    g('\u{00f1}', -1, 611, "ntilde"),
    g('\u{00f2}', -1, 611, "ograve"),
    g('\u{00f3}', -1, 611, "oacute"),
    g('\u{00f4}', -1, 611, "ocircumflex"),
    g('\u{00f5}', -1, 611, "otilde"),
    g('\u{00f6}', -1, 611, "odieresis"),
    g('\u{00f7}', -1, 584, "divide"),
    g('\u{00f9}', -1, 611, "ugrave"),
    g('\u{00fa}', -1, 611, "uacute"),
    g('\u{00fb}', -1, 611, "ucircumflex"),
    g('\u{00fc}', -1, 611, "udieresis"),
    g('\u{00fd}', -1, 556, "yacute"),
    g('\u{00fe}', -1, 611, "thorn"),
    g('\u{00ff}', -1, 556, "ydieresis"),
    g('\u{2212}', -1, 584, "minus"),
];

pub(crate) static TIMES_ROMAN: &[GlyphInfo] = &[
    g(' ', 0x20, 250, "space"),
    g('!', 0x21, 333, "exclam"),
    g('"', 0x22, 408, "quotedbl"),
    g('#', 0x23, 500, "numbersign"),
    g('$', 0x24, 500, "dollar"),
    g('%', 0x25, 833, "percent"),
    g('&', 0x26, 778, "ampersand"),
    g('\u{2019}', 0x27, 333, "quoteright"),
    g('(', 0x28, 333, "parenleft"),
    g(')', 0x29, 333, "parenright"),
    g('*', 0x2a, 500, "asterisk"),
    g('+', 0x2b, 564, "plus"),
    g(',', 0x2c, 250, "comma"),
    g('-', 0x2d, 333, "hyphen"),
    g('.', 0x2e, 250, "period"),
    g('/', 0x2f, 278, "slash"),
    g('0', 0x30, 500, "zero"),
    g('1', 0x31, 500, "one"),
    g('2', 0x32, 500, "two"),
    g('3', 0x33, 500, "three"),
    g('4', 0x34, 500, "four"),
    g('5', 0x35, 500, "five"),
    g('6', 0x36, 500, "six"),
    g('7', 0x37, 500, "seven"),
    g('8', 0x38, 500, "eight"),
    g('9', 0x39, 500, "nine"),
    g(':', 0x3a, 278, "colon"),
    g(';', 0x3b, 278, "semicolon"),
    g('<', 0x3c, 564, "less"),
    g('=', 0x3d, 564, "equal"),
    g('>', 0x3e, 564, "greater"),
    g('?', 0x3f, 444, "question"),
    g('@', 0x40, 921, "at"),
    g('A', 0x41, 722, "A"),
    g('B', 0x42, 667, "B"),
    g('C', 0x43, 667, "C"),
    g('D', 0x44, 722, "D"),
    g('E', 0x45, 611, "E"),
    g('F', 0x46, 556, "F"),
    g('G', 0x47, 722, "G"),
    g('H', 0x48, 722, "H"),
    g('I', 0x49, 333, "I"),
    g('J', 0x4a, 389, "J"),
    g('K', 0x4b, 722, "K"),
    g('L', 0x4c, 611, "L"),
    g('M', 0x4d, 889, "M"),
    g('N', 0x4e, 722, "N"),
    g('O', 0x4f, 722, "O"),
    g('P', 0x50, 556, "P"),
    g('Q', 0x51, 722, "Q"),
    g('R', 0x52, 667, "R"),
    g('S', 0x53, 556, "S"),
    g('T', 0x54, 611, "T"),
    g('U', 0x55, 722, "U"),
    g('V', 0x56, 722, "V"),
    g('W', 0x57, 944, "W"),
    g('X', 0x58, 722, "X"),
    g('Y', 0x59, 722, "Y"),
    g('Z', 0x5a, 611, "Z"),
    g('[', 0x5b, 333, "bracketleft"),
    g('\\', 0x5c, 278, "backslash"),
    g(']', 0x5d, 333, "bracketright"),
    g('^', 0x5e, 469, "asciicircum"),
    g('_', 0x5f, 500, "underscore"),
    g('\u{2018}', 0x60, 333, "quoteleft"),
    g('a', 0x61, 444, "a"),
    g('b', 0x62, 500, "b"),
    g('c', 0x63, 444, "c"),
    g('d', 0x64, 500, "d"),
    g('e', 0x65, 444, "e"),
    g('f', 0x66, 333, "f"),
    g('g', 0x67, 500, "g"),
    g('h', 0x68, 500, "h"),
    g('i', 0x69, 278, "i"),
    g('j', 0x6a, 278, "j"),
    g('k', 0x6b, 500, "k"),
    g('l', 0x6c, 278, "l"),
    g('m', 0x6d, 778, "m"),
    g('n', 0x6e, 500, "n"),
    g('o', 0x6f, 500, "o"),
    g('p', 0x70, 500, "p"),
    g('q', 0x71, 500, "q"),
    g('r', 0x72, 333, "r"),
    g('s', 0x73, 389, "s"),
    g('t', 0x74, 278, "t"),
    g('u', 0x75, 500, "u"),
    g('v', 0x76, 500, "v"),
    g('w', 0x77, 722, "w"),
    g('x', 0x78, 500, "x"),
    g('y', 0x79, 500, "y"),
    g('z', 0x7a, 444, "z"),
    g('{', 0x7b, 480, "braceleft"),
    g('|', 0x7c, 200, "bar"),
    g('}', 0x7d, 480, "braceright"),
    g('~', 0x7e, 541, "asciitilde"),
    g('\u{00a1}', 0xa1, 333, "exclamdown"),
    g('\u{00a2}', 0xa2, 500, "cent"),
    g('\u{00a3}', 0xa3, 500, "sterling"),
    g('\u{2044}', 0xa4, 167, "fraction"),
    g('\u{00a5}', 0xa5, 500, "yen"),
    g('\u{0192}', 0xa6, 500, "florin"),
    g('\u{00a7}', 0xa7, 500, "section"),
    g('\u{00a4}', 0xa8, 500, "currency"),
    g('\'', 0xa9, 180, "quotesingle"),
    g('\u{201c}', 0xaa, 444, "quotedblleft"),
    g('\u{00ab}', 0xab, 500, "guillemotleft"),
    g('\u{2039}', 0xac, 333, "guilsinglleft"),
    g('\u{203a}', 0xad, 333, "guilsinglright"),
    g('\u{fb01}', 0xae, 556, "fi"),
    g('\u{fb02}', 0xaf, 556, "fl"),
    g('\u{2013}', 0xb1, 500, "endash"),
    g('\u{2020}', 0xb2, 500, "dagger"),
    g('\u{2021}', 0xb3, 500, "daggerdbl"),
    g('\u{00b7}', 0xb4, 250, "periodcentered"),
    g('\u{00b6}', 0xb6, 453, "paragraph"),
    g('\u{2022}', 0xb7, 350, "bullet"),
    g('\u{201a}', 0xb8, 333, "quotesinglbase"),
    g('\u{201e}', 0xb9, 444, "quotedblbase"),
    g('\u{201d}', 0xba, 444, "quotedblright"),
    g('\u{00bb}', 0xbb, 500, "guillemotright"),
    g('\u{2026}', 0xbc, 1000, "ellipsis"),
    g('\u{2030}', 0xbd, 1000, "perthousand"),
    g('\u{00bf}', 0xbf, 444, "questiondown"),
    g('`', 0xc1, 333, "grave"),
    g('\u{00b4}', 0xc2, 333, "acute"),
    g('\u{02c6}', 0xc3, 333, "circumflex"),
    g('\u{02dc}', 0xc4, 333, "tilde"),
    g('\u{00af}', 0xc5, 333, "macron"),
    g('\u{02d8}', 0xc6, 333, "breve"),
    g('\u{02d9}', 0xc7, 333, "dotaccent"),
    g('\u{00a8}', 0xc8, 333, "dieresis"),
    g('\u{02da}', 0xca, 333, "ring"),
    g('\u{00b8}', 0xcb, 333, "cedilla"),
    g('\u{02dd}', 0xcd, 333, "hungarumlaut"),
    g('\u{02db}', 0xce, 333, "ogonek"),
    g('\u{02c7}', 0xcf, 333, "caron"),
    g('\u{2014}', 0xd0, 1000, "emdash"),
    g('\u{00c6}', 0xe1, 889, "AE"),
    g('\u{00aa}', 0xe3, 276, "ordfeminine"),
    g('\u{0141}', 0xe8, 611, "Lslash"),
    g('\u{00d8}', 0xe9, 722, "Oslash"),
    g('\u{0152}', 0xea, 889, "OE"),
    g('\u{00ba}', 0xeb, 310, "ordmasculine"),
    g('\u{00e6}', 0xf1, 667, "ae"),
    g('\u{0131}', 0xf5, 278, "dotlessi"),
    g('\u{0142}', 0xf8, 278, "lslash"),
    g('\u{00f8}', 0xf9, 500, "oslash"),
    g('\u{0153}', 0xfa, 722, "oe"),
    g('\u{00df}', 0xfb, 500, "germandbls"),
    g('\u{0160}', -1, 556, "Scaron"),
    g('\u{017d}', -1, 611, "Zcaron"),
    g('\u{2122}', -1, 980, "trademark"),
    g('\u{0161}', -1, 389, "scaron"),
    g('\u{017e}', -1, 444, "zcaron"),
    g('\u{0178}', -1, 722, "Ydieresis"),
    g('\u{00a6}', -1, 200, "brokenbar"),
    g('\u{00a9}', -1, 760, "copyright"),
    g('\u{00ac}', -1, 564, "logicalnot"),
    g('\u{00ae}', -1, 760, "registered"),
    g('\u{00b0}', -1, 400, "degree"),
    g('\u{00b1}', -1, 564, "plusminus"),
    g('\u{00b2}', -1, 300, "twosuperior"),
    g('\u{00b3}', -1, 300, "threesuperior"),
    g('\u{03bc}', -1, 500, "mu"),
    g('\u{00b9}', -1, 300, "onesuperior"),
    g('\u{00bc}', -1, 750, "onequarter"),
    g('\u{00bd}', -1, 750, "onehalf"),
    g('\u{00be}', -1, 750, "threequarters"),
    g('\u{00c0}', -1, 722, "Agrave"),
    g('\u{00c1}', -1, 722, "Aacute"),
    g('\u{00c2}', -1, 722, "Acircumflex"),
    g('\u{00c3}', -1, 722, "Atilde"),
    g('\u{00c4}', -1, 722, "Adieresis"),
    g('\u{00c5}', -1, 722, "Aring"),
    g('\u{00c7}', -1, 667, "Ccedilla"),
    g('\u{00c8}', -1, 611, "Egrave"),
    g('\u{00c9}', -1, 611, "Eacute"),
    g('\u{00ca}', -1, 611, "Ecircumflex"),
    g('\u{00cb}', -1, 611, "Edieresis"),
    g('\u{00cc}', -1, 333, "Igrave"),
    g('\u{00cd}', -1, 333, "Iacute"),
    g('\u{00ce}', -1, 333, "Icircumflex"),
    g('\u{00cf}', -1, 333, "Idieresis"),
    g('\u{00d0}', -1, 722, "Eth"),
    g('\u{00d1}', -1, 722, "Ntilde"),
    g('\u{00d2}', -1, 722, "Ograve"),
    g('\u{00d3}', -1, 722, "Oacute"),
    g('\u{00d4}', -1, 722, "Ocircumflex"),
    g('\u{00d5}', -1, 722, "Otilde"),
    g('\u{00d6}', -1, 722, "Odieresis"),
    g('\u{00d7}', -1, 564, "multiply"),
    g('\u{00d9}', -1, 722, "Ugrave"),
    g('\u{00da}', -1, 722, "Uacute"),
    g('\u{00db}', -1, 722, "Ucircumflex"),
    g('\u{00dc}', -1, 722, "Udieresis"),
    g('\u{00dd}', -1, 722, "Yacute"),
    g('\u{00de}', -1, 556, "Thorn"),
    g('\u{00e0}', -1, 444, "agrave"),
    g('\u{00e1}', -1, 444, "aacute"),
    g('\u{00e2}', -1, 444, "acircumflex"),
    g('\u{00e3}', -1, 444, "atilde"),
    g('\u{00e4}', -1, 444, "adieresis"),
    g('\u{00e5}', -1, 444, "aring"),
    g('\u{00e7}', -1, 444, "ccedilla"),
    g('\u{00e8}', -1, 444, "egrave"),
    g('\u{00e9}', -1, 444, "eacute"),
    g('\u{00ea}', -1, 444, "ecircumflex"),
    g('\u{00eb}', -1, 444, "edieresis"),
    g('\u{00ec}', -1, 278, "igrave"),
    g('\u{00ed}', -1, 278, "iacute"),
    g('\u{00ee}', -1, 278, "icircumflex"),
    g('\u{00ef}', -1, 278, "idieresis"),
    g('\u{00f0}', -1, 500, "eth"),
    g('\u{00f1}', -1, 500, "ntilde"),
    g('\u{00f2}', -1, 500, "ograve"),
    g('\u{00f3}', -1, 500, "oacute"),
    g('\u{00f4}', -1, 500, "ocircumflex"),
    g('\u{00f5}', -1, 500, "otilde"),
    g('\u{00f6}', -1, 500, "odieresis"),
    g('\u{00f7}', -1, 564, "divide"),
    g('\u{00f9}', -1, 500, "ugrave"),
    g('\u{00fa}', -1, 500, "uacute"),
    g('\u{00fb}', -1, 500, "ucircumflex"),
    g('\u{00fc}', -1, 500, "udieresis"),
    g('\u{00fd}', -1, 500, "yacute"),
    g('\u{00fe}', -1, 500, "thorn"),
    g('\u{00ff}', -1, 500, "ydieresis"),
    g('\u{2212}', -1, 564, "minus"),
];

pub(crate) static TIMES_BOLD: &[GlyphInfo] = &[
    g(' ', 0x20, 250, "space"),
    g('!', 0x21, 333, "exclam"),
    g('"', 0x22, 555, "quotedbl"),
    g('#', 0x23, 500, "numbersign"),
    g('$', 0x24, 500, "dollar"),
    g('%', 0x25, 1000, "percent"),
    g('&', 0x26, 833, "ampersand"),
    g('\u{2019}', 0x27, 333, "quoteright"),
    g('(', 0x28, 333, "parenleft"),
    g(')', 0x29, 333, "parenright"),
    g('*', 0x2a, 500, "asterisk"),
    g('+', 0x2b, 570, "plus"),
    g(',', 0x2c, 250, "comma"),
    g('-', 0x2d, 333, "hyphen"),
    g('.', 0x2e, 250, "period"),
    g('/', 0x2f, 278, "slash"),
    g('0', 0x30, 500, "zero"),
    g('1', 0x31, 500, "one"),
    g('2', 0x32, 500, "two"),
    g('3', 0x33, 500, "three"),
    g('4', 0x34, 500, "four"),
    g('5', 0x35, 500, "five"),
    g('6', 0x36, 500, "six"),
    g('7', 0x37, 500, "seven"),
    g('8', 0x38, 500, "eight"),
    g('9', 0x39, 500, "nine"),
    g(':', 0x3a, 333, "colon"),
    g(';', 0x3b, 333, "semicolon"),
    g('<', 0x3c, 570, "less"),
    g('=', 0x3d, 570, "equal"),
    g('>', 0x3e, 570, "greater"),
    g('?', 0x3f, 500, "question"),
    g('@', 0x40, 930, "at"),
    g('A', 0x41, 722, "A"),
    g('B', 0x42, 667, "B"),
    g('C', 0x43, 722, "C"),
    g('D', 0x44, 722, "D"),
    g('E', 0x45, 667, "E"),
    g('F', 0x46, 611, "F"),
    g('G', 0x47, 778, "G"),
    g('H', 0x48, 778, "H"),
    g('I', 0x49, 389, "I"),
    g('J', 0x4a, 500, "J"),
    g('K', 0x4b, 778, "K"),
    g('L', 0x4c, 667, "L"),
    g('M', 0x4d, 944, "M"),
    g('N', 0x4e, 722, "N"),
    g('O', 0x4f, 778, "O"),
    g('P', 0x50, 611, "P"),
    g('Q', 0x51, 778, "Q"),
    g('R', 0x52, 722, "R"),
    g('S', 0x53, 556, "S"),
    g('T', 0x54, 667, "T"),
    g('U', 0x55, 722, "U"),
    g('V', 0x56, 722, "V"),
    g('W', 0x57, 1000, "W"),
    g('X', 0x58, 722, "X"),
    g('Y', 0x59, 722, "Y"),
    g('Z', 0x5a, 667, "Z"),
    g('[', 0x5b, 333, "bracketleft"),
    g('\\', 0x5c, 278, "backslash"),
    g(']', 0x5d, 333, "bracketright"),
    g('^', 0x5e, 581, "asciicircum"),
    g('_', 0x5f, 500, "underscore"),
    g('\u{2018}', 0x60, 333, "quoteleft"),
    g('a', 0x61, 500, "a"),
    g('b', 0x62, 556, "b"),
    g('c', 0x63, 444, "c"),
    g('d', 0x64, 556, "d"),
    g('e', 0x65, 444, "e"),
    g('f', 0x66, 333, "f"),
    g('g', 0x67, 500, "g"),
    g('h', 0x68, 556, "h"),
    g('i', 0x69, 278, "i"),
    g('j', 0x6a, 333, "j"),
    g('k', 0x6b, 556, "k"),
    g('l', 0x6c, 278, "l"),
    g('m', 0x6d, 833, "m"),
    g('n', 0x6e, 556, "n"),
    g('o', 0x6f, 500, "o"),
    g('p', 0x70, 556, "p"),
    g('q', 0x71, 556, "q"),
    g('r', 0x72, 444, "r"),
    g('s', 0x73, 389, "s"),
    g('t', 0x74, 333, "t"),
    g('u', 0x75, 556, "u"),
    g('v', 0x76, 500, "v"),
    g('w', 0x77, 722, "w"),
    g('x', 0x78, 500, "x"),
    g('y', 0x79, 500, "y"),
    g('z', 0x7a, 444, "z"),
    g('{', 0x7b, 394, "braceleft"),
    g('|', 0x7c, 220, "bar"),
    g('}', 0x7d, 394, "braceright"),
    g('~', 0x7e, 520, "asciitilde"),
    g('\u{00a1}', 0xa1, 333, "exclamdown"),
    g('\u{00a2}', 0xa2, 500, "cent"),
    g('\u{00a3}', 0xa3, 500, "sterling"),
    g('\u{2044}', 0xa4, 167, "fraction"),
    g('\u{00a5}', 0xa5, 500, "yen"),
    g('\u{0192}', 0xa6, 500, "florin"),
    g('\u{00a7}', 0xa7, 500, "section"),
    g('\u{00a4}', 0xa8, 500, "currency"),
    g('\'', 0xa9, 278, "quotesingle"),
    g('\u{201c}', 0xaa, 500, "quotedblleft"),
    g('\u{00ab}', 0xab, 500, "guillemotleft"),
    g('\u{2039}', 0xac, 333, "guilsinglleft"),
    g('\u{203a}', 0xad, 333, "guilsinglright"),
    g('\u{fb01}', 0xae, 556, "fi"),
    g('\u{fb02}', 0xaf, 556, "fl"),
    g('\u{2013}', 0xb1, 500, "endash"),
    g('\u{2020}', 0xb2, 500, "dagger"),
    g('\u{2021}', 0xb3, 500, "daggerdbl"),
    g('\u{00b7}', 0xb4, 250, "periodcentered"),
    g('\u{00b6}', 0xb6, 540, "paragraph"),
    g('\u{2022}', 0xb7, 350, "bullet"),
    g('\u{201a}', 0xb8, 333, "quotesinglbase"),
    g('\u{201e}', 0xb9, 500, "quotedblbase"),
    g('\u{201d}', 0xba, 500, "quotedblright"),
    g('\u{00bb}', 0xbb, 500, "guillemotright"),
    g('\u{2026}', 0xbc, 1000, "ellipsis"),
    g('\u{2030}', 0xbd, 1000, "perthousand"),
    g('\u{00bf}', 0xbf, 500, "questiondown"),
    g('`', 0xc1, 333, "grave"),
    g('\u{00b4}', 0xc2, 333, "acute"),
    g('\u{02c6}', 0xc3, 333, "circumflex"),
    g('\u{02dc}', 0xc4, 333, "tilde"),
    g('\u{00af}', 0xc5, 333, "macron"),
    g('\u{02d8}', 0xc6, 333, "breve"),
    g('\u{02d9}', 0xc7, 333, "dotaccent"),
    g('\u{00a8}', 0xc8, 333, "dieresis"),
    g('\u{02da}', 0xca, 333, "ring"),
    g('\u{00b8}', 0xcb, 333, "cedilla"),
    g('\u{02dd}', 0xcd, 333, "hungarumlaut"),
    g('\u{02db}', 0xce, 333, "ogonek"),
    g('\u{02c7}', 0xcf, 333, "caron"),
    g('\u{2014}', 0xd0, 1000, "emdash"),
    g('\u{00c6}', 0xe1, 1000, "AE"),
    g('\u{00aa}', 0xe3, 300, "ordfeminine"),
    g('\u{0141}', 0xe8, 667, "Lslash"),
    g('\u{00d8}', 0xe9, 778, "Oslash"),
    g('\u{0152}', 0xea, 1000, "OE"),
    g('\u{00ba}', 0xeb, 330, "ordmasculine"),
    g('\u{00e6}', 0xf1, 722, "ae"),
    g('\u{0131}', 0xf5, 278, "dotlessi"),
    g('\u{0142}', 0xf8, 278, "lslash"),
    g('\u{00f8}', 0xf9, 500, "oslash"),
    g('\u{0153}', 0xfa, 722, "oe"),
    g('\u{00df}', 0xfb, 556, "germandbls"),
    g('\u{0160}', -1, 556, "Scaron"),
    g('\u{017d}', -1, 667, "Zcaron"),
    g('\u{2122}', -1, 1000, "trademark"),
    g('\u{0161}', -1, 389, "scaron"),
    g('\u{017e}', -1, 444, "zcaron"),
    g('\u{0178}', -1, 722, "Ydieresis"),
    g('\u{00a6}', -1, 220, "brokenbar"),
    g('\u{00a9}', -1, 747, "copyright"),
    g('\u{00ac}', -1, 570, "logicalnot"),
    g('\u{00ae}', -1, 747, "registered"),
    g('\u{00b0}', -1, 400, "degree"),
    g('\u{00b1}', -1, 570, "plusminus"),
    g('\u{00b2}', -1, 300, "twosuperior"),
    g('\u{00b3}', -1, 300, "threesuperior"),
    g('\u{03bc}', -1, 556, "mu"),
    g('\u{00b9}', -1, 300, "onesuperior"),
    g('\u{00bc}', -1, 750, "onequarter"),
    g('\u{00bd}', -1, 750, "onehalf"),
    g('\u{00be}', -1, 750, "threequarters"),
    g('\u{00c0}', -1, 722, "Agrave"),
    g('\u{00c1}', -1, 722, "Aacute"),
    g('\u{00c2}', -1, 722, "Acircumflex"),
    g('\u{00c3}', -1, 722, "Atilde"),
    g('\u{00c4}', -1, 722, "Adieresis"),
    g('\u{00c5}', -1, 722, "Aring"),
    g('\u{00c7}', -1, 722, "Ccedilla"),
    g('\u{00c8}', -1, 667, "Egrave"),
    g('\u{00c9}', -1, 667, "Eacute"),
    g('\u{00ca}', -1, 667, "Ecircumflex"),
    g('\u{00cb}', -1, 667, "Edieresis"),
    g('\u{00cc}', -1, 389, "Igrave"),
    g('\u{00cd}', -1, 389, "Iacute"),
    g('\u{00ce}', -1, 389, "Icircumflex"),
    g('\u{00cf}', -1, 389, "Idieresis"),
    g('\u{00d0}', -1, 722, "Eth"),
    g('\u{00d1}', -1, 722, "Ntilde"),
    g('\u{00d2}', -1, 778, "Ograve"),
    g('\u{00d3}', -1, 778, "Oacute"),
    g('\u{00d4}', -1, 778, "Ocircumflex"),
    g('\u{00d5}', -1, 778, "Otilde"),
    g('\u{00d6}', -1, 778, "Odieresis"),
    g('\u{00d7}', -1, 570, "multiply"),
    g('\u{00d9}', -1, 722, "Ugrave"),
    g('\u{00da}', -1, 722, "Uacute"),
    g('\u{00db}', -1, 722, "Ucircumflex"),
    g('\u{00dc}', -1, 722, "Udieresis"),
    g('\u{00dd}', -1, 722, "Yacute"),
    g('\u{00de}', -1, 611, "Thorn"),
    g('\u{00e0}', -1, 500, "agrave"),
    g('\u{00e1}', -1, 500, "aacute"),
    g('\u{00e2}', -1, 500, "acircumflex"),
    g('\u{00e3}', -1, 500, "atilde"),
    g('\u{00e4}', -1, 500, "adieresis"),
    g('\u{00e5}', -1, 500, "aring"),
    g('\u{00e7}', -1, 444, "ccedilla"),
    g('\u{00e8}', -1, 444, "egrave"),
    g('\u{00e9}', -1, 444, "eacute"),
    g('\u{00ea}', -1, 444, "ecircumflex"),
    g('\u{00eb}', -1, 444, "edieresis"),
    g('\u{00ec}', -1, 278, "igrave"),
    g('\u{00ed}', -1, 278, "iacute"),
    g('\u{00ee}', -1, 278, "icircumflex"),
    g('\u{00ef}', -1, 278, "idieresis"),
    g('\u{00f0}', -1, 500, "eth"),
    g('\u{00f1}', -1, 556, "ntilde"),
    g('\u{00f2}', -1, 500, "ograve"),
    g('\u{00f3}', -1, 500, "oacute"),
    g('\u{00f4}', -1, 500, "ocircumflex"),
    g('\u{00f5}', -1, 500, "otilde"),
    g('\u{00f6}', -1, 500, "odieresis"),
    g('\u{00f7}', -1, 570, "divide"),
    g('\u{00f9}', -1, 556, "ugrave"),
    g('\u{00fa}', -1, 556, "uacute"),
    g('\u{00fb}', -1, 556, "ucircumflex"),
    g('\u{00fc}', -1, 556, "udieresis"),
    g('\u{00fd}', -1, 500, "yacute"),
    g('\u{00fe}', -1, 556, "thorn"),
    g('\u{00ff}', -1, 500, "ydieresis"),
    g('\u{2212}', -1, 570, "minus"),
];

pub(crate) static TIMES_ITALIC: &[GlyphInfo] = &[
    g(' ', 0x20, 250, "space"),
    g('!', 0x21, 333, "exclam"),
    g('"', 0x22, 420, "quotedbl"),
    g('#', 0x23, 500, "numbersign"),
    g('$', 0x24, 500, "dollar"),
    g('%', 0x25, 833, "percent"),
    g('&', 0x26, 778, "ampersand"),
    g('\u{2019}', 0x27, 333, "quoteright"),
    g('(', 0x28, 333, "parenleft"),
    g(')', 0x29, 333, "parenright"),
    g('*', 0x2a, 500, "asterisk"),
    g('+', 0x2b, 675, "plus"),
    g(',', 0x2c, 250, "comma"),
    g('-', 0x2d, 333, "hyphen"),
    g('.', 0x2e, 250, "period"),
    g('/', 0x2f, 278, "slash"),
    g('0', 0x30, 500, "zero"),
    g('1', 0x31, 500, "one"),
    g('2', 0x32, 500, "two"),
    g('3', 0x33, 500, "three"),
    g('4', 0x34, 500, "four"),
    g('5', 0x35, 500, "five"),
    g('6', 0x36, 500, "six"),
    g('7', 0x37, 500, "seven"),
    g('8', 0x38, 500, "eight"),
    g('9', 0x39, 500, "nine"),
    g(':', 0x3a, 333, "colon"),
    g(';', 0x3b, 333, "semicolon"),
    g('<', 0x3c, 675, "less"),
    g('=', 0x3d, 675, "equal"),
    g('>', 0x3e, 675, "greater"),
    g('?', 0x3f, 500, "question"),
    g('@', 0x40, 920, "at"),
    g('A', 0x41, 611, "A"),
    g('B', 0x42, 611, "B"),
    g('C', 0x43, 667, "C"),
    g('D', 0x44, 722, "D"),
    g('E', 0x45, 611, "E"),
    g('F', 0x46, 611, "F"),
    g('G', 0x47, 722, "G"),
    g('H', 0x48, 722, "H"),
    g('I', 0x49, 333, "I"),
    g('J', 0x4a, 444, "J"),
    g('K', 0x4b, 667, "K"),
    g('L', 0x4c, 556, "L"),
    g('M', 0x4d, 833, "M"),
    g('N', 0x4e, 667, "N"),
    g('O', 0x4f, 722, "O"),
    g('P', 0x50, 611, "P"),
    g('Q', 0x51, 722, "Q"),
    g('R', 0x52, 611, "R"),
    g('S', 0x53, 500, "S"),
    g('T', 0x54, 556, "T"),
    g('U', 0x55, 722, "U"),
    g('V', 0x56, 611, "V"),
    g('W', 0x57, 833, "W"),
    g('X', 0x58, 611, "X"),
    g('Y', 0x59, 556, "Y"),
    g('Z', 0x5a, 556, "Z"),
    g('[', 0x5b, 389, "bracketleft"),
    g('\\', 0x5c, 278, "backslash"),
    g(']', 0x5d, 389, "bracketright"),
    g('^', 0x5e, 422, "asciicircum"),
    g('_', 0x5f, 500, "underscore"),
    g('\u{2018}', 0x60, 333, "quoteleft"),
    g('a', 0x61, 500, "a"),
    g('b', 0x62, 500, "b"),
    g('c', 0x63, 444, "c"),
    g('d', 0x64, 500, "d"),
    g('e', 0x65, 444, "e"),
    g('f', 0x66, 278, "f"),
    g('g', 0x67, 500, "g"),
    g('h', 0x68, 500, "h"),
    g('i', 0x69, 278, "i"),
    g('j', 0x6a, 278, "j"),
    g('k', 0x6b, 444, "k"),
    g('l', 0x6c, 278, "l"),
    g('m', 0x6d, 722, "m"),
    g('n', 0x6e, 500, "n"),
    g('o', 0x6f, 500, "o"),
    g('p', 0x70, 500, "p"),
    g('q', 0x71, 500, "q"),
    g('r', 0x72, 389, "r"),
    g('s', 0x73, 389, "s"),
    g('t', 0x74, 278, "t"),
    g('u', 0x75, 500, "u"),
    g('v', 0x76, 444, "v"),
    g('w', 0x77, 667, "w"),
    g('x', 0x78, 444, "x"),
    g('y', 0x79, 444, "y"),
    g('z', 0x7a, 389, "z"),
    g('{', 0x7b, 400, "braceleft"),
    g('|', 0x7c, 275, "bar"),
    g('}', 0x7d, 400, "braceright"),
    g('~', 0x7e, 541, "asciitilde"),
    g('\u{00a1}', 0xa1, 389, "exclamdown"),
    g('\u{00a2}', 0xa2, 500, "cent"),
    g('\u{00a3}', 0xa3, 500, "sterling"),
    g('\u{2044}', 0xa4, 167, "fraction"),
    g('\u{00a5}', 0xa5, 500, "yen"),
    g('\u{0192}', 0xa6, 500, "florin"),
    g('\u{00a7}', 0xa7, 500, "section"),
    g('\u{00a4}', 0xa8, 500, "currency"),
    g('\'', 0xa9, 214, "quotesingle"),
    g('\u{201c}', 0xaa, 556, "quotedblleft"),
    g('\u{00ab}', 0xab, 500, "guillemotleft"),
    g('\u{2039}', 0xac, 333, "guilsinglleft"),
    g('\u{203a}', 0xad, 333, "guilsinglright"),
    g('\u{fb01}', 0xae, 500, "fi"),
    g('\u{fb02}', 0xaf, 500, "fl"),
    g('\u{2013}', 0xb1, 500, "endash"),
    g('\u{2020}', 0xb2, 500, "dagger"),
    g('\u{2021}', 0xb3, 500, "daggerdbl"),
    g('\u{00b7}', 0xb4, 250, "periodcentered"),
    g('\u{00b6}', 0xb6, 523, "paragraph"),
    g('\u{2022}', 0xb7, 350, "bullet"),
    g('\u{201a}', 0xb8, 333, "quotesinglbase"),
    g('\u{201e}', 0xb9, 556, "quotedblbase"),
    g('\u{201d}', 0xba, 556, "quotedblright"),
    g('\u{00bb}', 0xbb, 500, "guillemotright"),
    g('\u{2026}', 0xbc, 889, "ellipsis"),
    g('\u{2030}', 0xbd, 1000, "perthousand"),
    g('\u{00bf}', 0xbf, 500, "questiondown"),
    g('`', 0xc1, 333, "grave"),
    g('\u{00b4}', 0xc2, 333, "acute"),
    g('\u{02c6}', 0xc3, 333, "circumflex"),
    g('\u{02dc}', 0xc4, 333, "tilde"),
    g('\u{00af}', 0xc5, 333, "macron"),
    g('\u{02d8}', 0xc6, 333, "breve"),
    g('\u{02d9}', 0xc7, 333, "dotaccent"),
    g('\u{00a8}', 0xc8, 333, "dieresis"),
    g('\u{02da}', 0xca, 333, "ring"),
    g('\u{00b8}', 0xcb, 333, "cedilla"),
    g('\u{02dd}', 0xcd, 333, "hungarumlaut"),
    g('\u{02db}', 0xce, 333, "ogonek"),
    g('\u{02c7}', 0xcf, 333, "caron"),
    g('\u{2014}', 0xd0, 889, "emdash"),
    g('\u{00c6}', 0xe1, 889, "AE"),
    g('\u{00aa}', 0xe3, 276, "ordfeminine"),
    g('\u{0141}', 0xe8, 556, "Lslash"),
    g('\u{00d8}', 0xe9, 722, "Oslash"),
    g('\u{0152}', 0xea, 944, "OE"),
    g('\u{00ba}', 0xeb, 310, "ordmasculine"),
    g('\u{00e6}', 0xf1, 667, "ae"),
    g('\u{0131}', 0xf5, 278, "dotlessi"),
    g('\u{0142}', 0xf8, 278, "lslash"),
    g('\u{00f8}', 0xf9, 500, "oslash"),
    g('\u{0153}', 0xfa, 667, "oe"),
    g('\u{00df}', 0xfb, 500, "germandbls"),
    g('\u{0160}', -1, 500, "Scaron"),
    g('\u{017d}', -1, 556, "Zcaron"),
    g('\u{2122}', -1, 980, "trademark"),
    g('\u{0161}', -1, 389, "scaron"),
    g('\u{017e}', -1, 389, "zcaron"),
    g('\u{0178}', -1, 556, "Ydieresis"),
    g('\u{00a6}', -1, 275, "brokenbar"),
    g('\u{00a9}', -1, 760, "copyright"),
    g('\u{00ac}', -1, 675, "logicalnot"),
    g('\u{00ae}', -1, 760, "registered"),
    g('\u{00b0}', -1, 400, "degree"),
    g('\u{00b1}', -1, 675, "plusminus"),
    g('\u{00b2}', -1, 300, "twosuperior"),
    g('\u{00b3}', -1, 300, "threesuperior"),
    g('\u{03bc}', -1, 500, "mu"),
    g('\u{00b9}', -1, 300, "onesuperior"),
    g('\u{00bc}', -1, 750, "onequarter"),
    g('\u{00bd}', -1, 750, "onehalf"),
    g('\u{00be}', -1, 750, "threequarters"),
    g('\u{00c0}', -1, 611, "Agrave"),
    g('\u{00c1}', -1, 611, "Aacute"),
    g('\u{00c2}', -1, 611, "Acircumflex"),
    g('\u{00c3}', -1, 611, "Atilde"),
    g('\u{00c4}', -1, 611, "Adieresis"),
    g('\u{00c5}', -1, 611, "Aring"),
    g('\u{00c7}', -1, 667, "Ccedilla"),
    g('\u{00c8}', -1, 611, "Egrave"),
    g('\u{00c9}', -1, 611, "Eacute"),
    g('\u{00ca}', -1, 611, "Ecircumflex"),
    g('\u{00cb}', -1, 611, "Edieresis"),
    g('\u{00cc}', -1, 333, "Igrave"),
    g('\u{00cd}', -1, 333, "Iacute"),
    g('\u{00ce}', -1, 333, "Icircumflex"),
    g('\u{00cf}', -1, 333, "Idieresis"),
    g('\u{00d0}', -1, 722, "Eth"),
    g('\u{00d1}', -1, 667, "Ntilde"),
    g('\u{00d2}', -1, 722, "Ograve"),
    g('\u{00d3}', -1, 722, "Oacute"),
    g('\u{00d4}', -1, 722, "Ocircumflex"),
    g('\u{00d5}', -1, 722, "Otilde"),
    g('\u{00d6}', -1, 722, "Odieresis"),
    g('\u{00d7}', -1, 675, "multiply"),
    g('\u{00d9}', -1, 722, "Ugrave"),
    g('\u{00da}', -1, 722, "Uacute"),
    g('\u{00db}', -1, 722, "Ucircumflex"),
    g('\u{00dc}', -1, 722, "Udieresis"),
    g('\u{00dd}', -1, 556, "Yacute"),
    g('\u{00de}', -1, 611, "Thorn"),
    g('\u{00e0}', -1, 500, "agrave"),
    g('\u{00e1}', -1, 500, "aacute"),
    g('\u{00e2}', -1, 500, "acircumflex"),
    g('\u{00e3}', -1, 500, "atilde"),
    g('\u{00e4}', -1, 500, "adieresis"),
    g('\u{00e5}', -1, 500, "aring"),
    g('\u{00e7}', -1, 444, "ccedilla"),
    g('\u{00e8}', -1, 444, "egrave"),
    g('\u{00e9}', -1, 444, "eacute"),
    g('\u{00ea}', -1, 444, "ecircumflex"),
    g('\u{00eb}', -1, 444, "edieresis"),
    g('\u{00ec}', -1, 278, "igrave"),
    g('\u{00ed}', -1, 278, "iacute"),
    g('\u{00ee}', -1, 278, "icircumflex"),
    g('\u{00ef}', -1, 278, "idieresis"),
    g('\u{00f0}', -1, 500, "eth"),
    g('\u{00f1}', -1, 500, "ntilde"),
    g('\u{00f2}', -1, 500, "ograve"),
    g('\u{00f3}', -1, 500, "oacute"),
    g('\u{00f4}', -1, 500, "ocircumflex"),
    g('\u{00f5}', -1, 500, "otilde"),
    g('\u{00f6}', -1, 500, "odieresis"),
    g('\u{00f7}', -1, 675, "divide"),
    g('\u{00f9}', -1, 500, "ugrave"),
    g('\u{00fa}', -1, 500, "uacute"),
    g('\u{00fb}', -1, 500, "ucircumflex"),
    g('\u{00fc}', -1, 500, "udieresis"),
    g('\u{00fd}', -1, 444, "yacute"),
    g('\u{00fe}', -1, 500, "thorn"),
    g('\u{00ff}', -1, 444, "ydieresis"),
    g('\u{2212}', -1, 675, "minus"),
];

pub(crate) static TIMES_BOLD_ITALIC: &[GlyphInfo] = &[
    g(' ', 0x20, 250, "space"),
    g('!', 0x21, 389, "exclam"),
    g('"', 0x22, 555, "quotedbl"),
    g('#', 0x23, 500, "numbersign"),
    g('$', 0x24, 500, "dollar"),
    g('%', 0x25, 833, "percent"),
    g('&', 0x26, 778, "ampersand"),
    g('\u{2019}', 0x27, 333, "quoteright"),
    g('(', 0x28, 333, "parenleft"),
    g(')', 0x29, 333, "parenright"),
    g('*', 0x2a, 500, "asterisk"),
    g('+', 0x2b, 570, "plus"),
    g(',', 0x2c, 250, "comma"),
    g('-', 0x2d, 333, "hyphen"),
    g('.', 0x2e, 250, "period"),
    g('/', 0x2f, 278, "slash"),
    g('0', 0x30, 500, "zero"),
    g('1', 0x31, 500, "one"),
    g('2', 0x32, 500, "two"),
    g('3', 0x33, 500, "three"),
    g('4', 0x34, 500, "four"),
    g('5', 0x35, 500, "five"),
    g('6', 0x36, 500, "six"),
    g('7', 0x37, 500, "seven"),
    g('8', 0x38, 500, "eight"),
    g('9', 0x39, 500, "nine"),
    g(':', 0x3a, 333, "colon"),
    g(';', 0x3b, 333, "semicolon"),
    g('<', 0x3c, 570, "less"),
    g('=', 0x3d, 570, "equal"),
    g('>', 0x3e, 570, "greater"),
    g('?', 0x3f, 500, "question"),
    g('@', 0x40, 832, "at"),
    g('A', 0x41, 667, "A"),
    g('B', 0x42, 667, "B"),
    g('C', 0x43, 667, "C"),
    g('D', 0x44, 722, "D"),
    g('E', 0x45, 667, "E"),
    g('F', 0x46, 667, "F"),
    g('G', 0x47, 722, "G"),
    g('H', 0x48, 778, "H"),
    g('I', 0x49, 389, "I"),
    g('J', 0x4a, 500, "J"),
    g('K', 0x4b, 667, "K"),
    g('L', 0x4c, 611, "L"),
    g('M', 0x4d, 889, "M"),
    g('N', 0x4e, 722, "N"),
    g('O', 0x4f, 722, "O"),
    g('P', 0x50, 611, "P"),
    g('Q', 0x51, 722, "Q"),
    g('R', 0x52, 667, "R"),
    g('S', 0x53, 556, "S"),
    g('T', 0x54, 611, "T"),
    g('U', 0x55, 722, "U"),
    g('V', 0x56, 667, "V"),
    g('W', 0x57, 889, "W"),
    g('X', 0x58, 667, "X"),
    g('Y', 0x59, 611, "Y"),
    g('Z', 0x5a, 611, "Z"),
    g('[', 0x5b, 333, "bracketleft"),
    g('\\', 0x5c, 278, "backslash"),
    g(']', 0x5d, 333, "bracketright"),
    g('^', 0x5e, 570, "asciicircum"),
    g('_', 0x5f, 500, "underscore"),
    g('\u{2018}', 0x60, 333, "quoteleft"),
    g('a', 0x61, 500, "a"),
    g('b', 0x62, 500, "b"),
    g('c', 0x63, 444, "c"),
    g('d', 0x64, 500, "d"),
    g('e', 0x65, 444, "e"),
    g('f', 0x66, 333, "f"),
    g('g', 0x67, 500, "g"),
    g('h', 0x68, 556, "h"),
    g('i', 0x69, 278, "i"),
    g('j', 0x6a, 278, "j"),
    g('k', 0x6b, 500, "k"),
    g('l', 0x6c, 278, "l"),
    g('m', 0x6d, 778, "m"),
    g('n', 0x6e, 556, "n"),
    g('o', 0x6f, 500, "o"),
    g('p', 0x70, 500, "p"),
    g('q', 0x71, 500, "q"),
    g('r', 0x72, 389, "r"),
    g('s', 0x73, 389, "s"),
    g('t', 0x74, 278, "t"),
    g('u', 0x75, 556, "u"),
    g('v', 0x76, 444, "v"),
    g('w', 0x77, 667, "w"),
    g('x', 0x78, 500, "x"),
    g('y', 0x79, 444, "y"),
    g('z', 0x7a, 389, "z"),
    g('{', 0x7b, 348, "braceleft"),
    g('|', 0x7c, 220, "bar"),
    g('}', 0x7d, 348, "braceright"),
    g('~', 0x7e, 570, "asciitilde"),
    g('\u{00a1}', 0xa1, 389, "exclamdown"),
    g('\u{00a2}', 0xa2, 500, "cent"),
    g('\u{00a3}', 0xa3, 500, "sterling"),
    g('\u{2044}', 0xa4, 167, "fraction"),
    g('\u{00a5}', 0xa5, 500, "yen"),
    g('\u{0192}', 0xa6, 500, "florin"),
    g('\u{00a7}', 0xa7, 500, "section"),
    g('\u{00a4}', 0xa8, 500, "currency"),
    g('\'', 0xa9, 278, "quotesingle"),
    g('\u{201c}', 0xaa, 500, "quotedblleft"),
    g('\u{00ab}', 0xab, 500, "guillemotleft"),
    g('\u{2039}', 0xac, 333, "guilsinglleft"),
    g('\u{203a}', 0xad, 333, "guilsinglright"),
    g('\u{fb01}', 0xae, 556, "fi"),
    g('\u{fb02}', 0xaf, 556, "fl"),
    g('\u{2013}', 0xb1, 500, "endash"),
    g('\u{2020}', 0xb2, 500, "dagger"),
    g('\u{2021}', 0xb3, 500, "daggerdbl"),
    g('\u{00b7}', 0xb4, 250, "periodcentered"),
    g('\u{00b6}', 0xb6, 500, "paragraph"),
    g('\u{2022}', 0xb7, 350, "bullet"),
    g('\u{201a}', 0xb8, 333, "quotesinglbase"),
    g('\u{201e}', 0xb9, 500, "quotedblbase"),
    g('\u{201d}', 0xba, 500, "quotedblright"),
    g('\u{00bb}', 0xbb, 500, "guillemotright"),
    g('\u{2026}', 0xbc, 1000, "ellipsis"),
    g('\u{2030}', 0xbd, 1000, "perthousand"),
    g('\u{00bf}', 0xbf, 500, "questiondown"),
    g('`', 0xc1, 333, "grave"),
    g('\u{00b4}', 0xc2, 333, "acute"),
    g('\u{02c6}', 0xc3, 333, "circumflex"),
    g('\u{02dc}', 0xc4, 333, "tilde"),
    g('\u{00af}', 0xc5, 333, "macron"),
    g('\u{02d8}', 0xc6, 333, "breve"),
    g('\u{02d9}', 0xc7, 333, "dotaccent"),
    g('\u{00a8}', 0xc8, 333, "dieresis"),
    g('\u{02da}', 0xca, 333, "ring"),
    g('\u{00b8}', 0xcb, 333, "cedilla"),
    g('\u{02dd}', 0xcd, 333, "hungarumlaut"),
    g('\u{02db}', 0xce, 333, "ogonek"),
    g('\u{02c7}', 0xcf, 333, "caron"),
    g('\u{2014}', 0xd0, 1000, "emdash"),
    g('\u{00c6}', 0xe1, 944, "AE"),
    g('\u{00aa}', 0xe3, 266, "ordfeminine"),
    g('\u{0141}', 0xe8, 611, "Lslash"),
    g('\u{00d8}', 0xe9, 722, "Oslash"),
    g('\u{0152}', 0xea, 944, "OE"),
    g('\u{00ba}', 0xeb, 300, "ordmasculine"),
    g('\u{00e6}', 0xf1, 722, "ae"),
    g('\u{0131}', 0xf5, 278, "dotlessi"),
    g('\u{0142}', 0xf8, 278, "lslash"),
    g('\u{00f8}', 0xf9, 500, "oslash"),
    g('\u{0153}', 0xfa, 722, "oe"),
    g('\u{00df}', 0xfb, 500, "germandbls"),
    g('\u{0160}', -1, 556, "Scaron"),
    g('\u{017d}', -1, 611, "Zcaron"),
    g('\u{2122}', -1, 1000, "trademark"),
    g('\u{0161}', -1, 389, "scaron"),
    g('\u{017e}', -1, 389, "zcaron"),
    g('\u{0178}', -1, 611, "Ydieresis"),
    g('\u{00a6}', -1, 220, "brokenbar"),
    g('\u{00a9}', -1, 747, "copyright"),
    g('\u{00ac}', -1, 606, "logicalnot"),
    g('\u{00ae}', -1, 747, "registered"),
    g('\u{00b0}', -1, 400, "degree"),
    g('\u{00b1}', -1, 570, "plusminus"),
    g('\u{00b2}', -1, 300, "twosuperior"),
    g('\u{00b3}', -1, 300, "threesuperior"),
    g('\u{03bc}', -1, 576, "mu"),
    g('\u{00b9}', -1, 300, "onesuperior"),
    g('\u{00bc}', -1, 750, "onequarter"),
    g('\u{00bd}', -1, 750, "onehalf"),
    g('\u{00be}', -1, 750, "threequarters"),
    g('\u{00c0}', -1, 667, "Agrave"),
    g('\u{00c1}', -1, 667, "Aacute"),
    g('\u{00c2}', -1, 667, "Acircumflex"),
    g('\u{00c3}', -1, 667, "Atilde"),
    g('\u{00c4}', -1, 667, "Adieresis"),
    g('\u{00c5}', -1, 667, "Aring"),
    g('\u{00c7}', -1, 667, "Ccedilla"),
    g('\u{00c8}', -1, 667, "Egrave"),
    g('\u{00c9}', -1, 667, "Eacute"),
    g('\u{00ca}', -1, 667, "Ecircumflex"),
    g('\u{00cb}', -1, 667, "Edieresis"),
    g('\u{00cc}', -1, 389, "Igrave"),
    g('\u{00cd}', -1, 389, "Iacute"),
    g('\u{00ce}', -1, 389, "Icircumflex"),
    g('\u{00cf}', -1, 389, "Idieresis"),
    g('\u{00d0}', -1, 722, "Eth"),
    g('\u{00d1}', -1, 722, "Ntilde"),
    g('\u{00d2}', -1, 722, "Ograve"),
    g('\u{00d3}', -1, 722, "Oacute"),
    g('\u{00d4}', -1, 722, "Ocircumflex"),
    g('\u{00d5}', -1, 722, "Otilde"),
    g('\u{00d6}', -1, 722, "Odieresis"),
    g('\u{00d7}', -1, 570, "multiply"),
    g('\u{00d9}', -1, 722, "Ugrave"),
    g('\u{00da}', -1, 722, "Uacute"),
    g('\u{00db}', -1, 722, "Ucircumflex"),
    g('\u{00dc}', -1, 722, "Udieresis"),
    g('\u{00dd}', -1, 611, "Yacute"),
    g('\u{00de}', -1, 611, "Thorn"),
    g('\u{00e0}', -1, 500, "agrave"),
    g('\u{00e1}', -1, 500, "aacute"),
    g('\u{00e2}', -1, 500, "acircumflex"),
    g('\u{00e3}', -1, 500, "atilde"),
    g('\u{00e4}', -1, 500, "adieresis"),
    g('\u{00e5}', -1, 500, "aring"),
    g('\u{00e7}', -1, 444, "ccedilla"),
    g('\u{00e8}', -1, 444, "egrave"),
    g('\u{00e9}', -1, 444, "eacute"),
    g('\u{00ea}', -1, 444, "ecircumflex"),
    g('\u{00eb}', -1, 444, "edieresis"),
    g('\u{00ec}', -1, 278, "igrave"),
    g('\u{00ed}', -1, 278, "iacute"),
    g('\u{00ee}', -1, 278, "icircumflex"),
    g('\u{00ef}', -1, 278, "idieresis"),
    g('\u{00f0}', -1, 500, "eth"),
    g('\u{00f1}', -1, 556, "ntilde"),
    g('\u{00f2}', -1, 500, "ograve"),
    g('\u{00f3}', -1, 500, "oacute"),
    g('\u{00f4}', -1, 500, "ocircumflex"),
    g('\u{00f5}', -1, 500, "otilde"),
    g('\u{00f6}', -1, 500, "odieresis"),
    g('\u{00f7}', -1, 570, "divide"),
    g('\u{00f9}', -1, 556, "ugrave"),
    g('\u{00fa}', -1, 556, "uacute"),
    g('\u{00fb}', -1, 556, "ucircumflex"),
    g('\u{00fc}', -1, 556, "udieresis"),
    g('\u{00fd}', -1, 444, "yacute"),
    g('\u{00fe}', -1, 500, "thorn"),
    g('\u{00ff}', -1, 444, "ydieresis"),
    g('\u{2212}', -1, 606, "minus"),
];

pub(crate) static SYMBOL: &[GlyphInfo] = &[
    g(' ', 0x20, 250, "space"),
    g('!', 0x21, 333, "exclam"),
    g('\u{2200}', 0x22, 713, "universal"),
    g('#', 0x23, 500, "numbersign"),
    g('\u{2203}', 0x24, 549, "existential"),
    g('%', 0x25, 833, "percent"),
    g('&', 0x26, 778, "ampersand"),
    g('\u{220b}', 0x27, 439, "suchthat"),
    g('(', 0x28, 333, "parenleft"),
    g(')', 0x29, 333, "parenright"),
    g('\u{2217}', 0x2a, 500, "asteriskmath"),
    g('+', 0x2b, 549, "plus"),
    g(',', 0x2c, 250, "comma"),
    g('\u{2212}', 0x2d, 549, "minus"),
    g('.', 0x2e, 250, "period"),
    g('/', 0x2f, 278, "slash"),
    g('0', 0x30, 500, "zero"),
    g('1', 0x31, 500, "one"),
    g('2', 0x32, 500, "two"),
    g('3', 0x33, 500, "three"),
    g('4', 0x34, 500, "four"),
    g('5', 0x35, 500, "five"),
    g('6', 0x36, 500, "six"),
    g('7', 0x37, 500, "seven"),
    g('8', 0x38, 500, "eight"),
    g('9', 0x39, 500, "nine"),
    g(':', 0x3a, 278, "colon"),
    g(';', 0x3b, 278, "semicolon"),
    g('<', 0x3c, 549, "less"),
    g('=', 0x3d, 549, "equal"),
    g('>', 0x3e, 549, "greater"),
    g('?', 0x3f, 444, "question"),
    g('\u{2245}', 0x40, 549, "congruent"),
    g('\u{0391}', 0x41, 722, "Alpha"),
    g('\u{0392}', 0x42, 667, "Beta"),
    g('\u{03a7}', 0x43, 722, "Chi"),
    g('\u{2206}', 0x44, 612, "Delta"),
    g('\u{0395}', 0x45, 611, "Epsilon"),
    g('\u{03a6}', 0x46, 763, "Phi"),
    g('\u{0393}', 0x47, 603, "Gamma"),
    g('\u{0397}', 0x48, 722, "Eta"),
    g('\u{0399}', 0x49, 333, "Iota"),
    g('\u{03d1}', 0x4a, 631, "theta1"),
    g('\u{039a}', 0x4b, 722, "Kappa"),
    g('\u{039b}', 0x4c, 686, "Lambda"),
    g('\u{039c}', 0x4d, 889, "Mu"),
    g('\u{039d}', 0x4e, 722, "Nu"),
    g('\u{039f}', 0x4f, 722, "Omicron"),
    g('\u{03a0}', 0x50, 768, "Pi"),
    g('\u{0398}', 0x51, 741, "Theta"),
    g('\u{03a1}', 0x52, 556, "Rho"),
    g('\u{03a3}', 0x53, 592, "Sigma"),
    g('\u{03a4}', 0x54, 611, "Tau"),
    g('\u{03a5}', 0x55, 690, "Upsilon"),
    g('\u{03c2}', 0x56, 439, "sigma1"),
    g('\u{2126}', 0x57, 768, "Omega"),
    g('\u{039e}', 0x58, 645, "Xi"),
    g('\u{03a8}', 0x59, 795, "Psi"),
    g('\u{0396}', 0x5a, 611, "Zeta"),
    g('[', 0x5b, 333, "bracketleft"),
    g('\u{2234}', 0x5c, 863, "therefore"),
    g(']', 0x5d, 333, "bracketright"),
    g('\u{22a5}', 0x5e, 658, "perpendicular"),
    g('_', 0x5f, 500, "underscore"),
    g('\u{f8e5}', 0x60, 500, "radicalex"),
    g('\u{03b1}', 0x61, 631, "alpha"),
    g('\u{03b2}', 0x62, 549, "beta"),
    g('\u{03c7}', 0x63, 549, "chi"),
    g('\u{03b4}', 0x64, 494, "delta"),
    g('\u{03b5}', 0x65, 439, "epsilon"),
    g('\u{03c6}', 0x66, 521, "phi"),
    g('\u{03b3}', 0x67, 411, "gamma"),
    g('\u{03b7}', 0x68, 603, "eta"),
    g('\u{03b9}', 0x69, 329, "iota"),
    g('\u{03d5}', 0x6a, 603, "phi1"),
    g('\u{03ba}', 0x6b, 549, "kappa"),
    g('\u{03bb}', 0x6c, 549, "lambda"),
    g('\u{03bc}', 0x6d, 576, "mu"),
    g('\u{03bd}', 0x6e, 521, "nu"),
    g('\u{03bf}', 0x6f, 549, "omicron"),
    g('\u{03c0}', 0x70, 549, "pi"),
    g('\u{03b8}', 0x71, 521, "theta"),
    g('\u{03c1}', 0x72, 549, "rho"),
    g('\u{03c3}', 0x73, 603, "sigma"),
    g('\u{03c4}', 0x74, 439, "tau"),
    g('\u{03c5}', 0x75, 576, "upsilon"),
    g('\u{03d6}', 0x76, 713, "omega1"),
    g('\u{03c9}', 0x77, 686, "omega"),
    g('\u{03be}', 0x78, 493, "xi"),
    g('\u{03c8}', 0x79, 686, "psi"),
    g('\u{03b6}', 0x7a, 494, "zeta"),
    g('{', 0x7b, 480, "braceleft"),
    g('|', 0x7c, 200, "bar"),
    g('}', 0x7d, 480, "braceright"),
    g('\u{223c}', 0x7e, 549, "similar"),
    g('\u{20ac}', 0xa0, 750, "Euro"),
    g('\u{03d2}', 0xa1, 620, "Upsilon1"),
    g('\u{2032}', 0xa2, 247, "minute"),
    g('\u{2264}', 0xa3, 549, "lessequal"),
    g('\u{2044}', 0xa4, 167, "fraction"),
    g('\u{221e}', 0xa5, 713, "infinity"),
    g('\u{0192}', 0xa6, 500, "florin"),
    g('\u{2663}', 0xa7, 753, "club"),
    g('\u{2666}', 0xa8, 753, "diamond"),
    g('\u{2665}', 0xa9, 753, "heart"),
    g('\u{2660}', 0xaa, 753, "spade"),
    g('\u{2194}', 0xab, 1042, "arrowboth"),
    g('\u{2190}', 0xac, 987, "arrowleft"),
    g('\u{2191}', 0xad, 603, "arrowup"),
    g('\u{2192}', 0xae, 987, "arrowright"),
    g('\u{2193}', 0xaf, 603, "arrowdown"),
    g('\u{00b0}', 0xb0, 400, "degree"),
    g('\u{00b1}', 0xb1, 549, "plusminus"),
    g('\u{2033}', 0xb2, 411, "second"),
    g('\u{2265}', 0xb3, 549, "greaterequal"),
    g('\u{00d7}', 0xb4, 549, "multiply"),
    g('\u{221d}', 0xb5, 713, "proportional"),
    g('\u{2202}', 0xb6, 494, "partialdiff"),
    g('\u{2022}', 0xb7, 460, "bullet"),
    g('\u{00f7}', 0xb8, 549, "divide"),
    g('\u{2260}', 0xb9, 549, "notequal"),
    g('\u{2261}', 0xba, 549, "equivalence"),
    g('\u{2248}', 0xbb, 549, "approxequal"),
    g('\u{2026}', 0xbc, 1000, "ellipsis"),
    g('\u{f8e6}', 0xbd, 603, "arrowvertex"),
    g('\u{f8e7}', 0xbe, 1000, "arrowhorizex"),
    g('\u{21b5}', 0xbf, 658, "carriagereturn"),
    g('\u{2135}', 0xc0, 823, "aleph"),
    g('\u{2111}', 0xc1, 686, "Ifraktur"),
    g('\u{211c}', 0xc2, 795, "Rfraktur"),
    g('\u{2118}', 0xc3, 987, "weierstrass"),
    g('\u{2297}', 0xc4, 768, "circlemultiply"),
    g('\u{2295}', 0xc5, 768, "circleplus"),
    g('\u{2205}', 0xc6, 823, "emptyset"),
    g('\u{2229}', 0xc7, 768, "intersection"),
    g('\u{222a}', 0xc8, 768, "union"),
    g('\u{2283}', 0xc9, 713, "propersuperset"),
    g('\u{2287}', 0xca, 713, "reflexsuperset"),
    g('\u{2284}', 0xcb, 713, "notsubset"),
    g('\u{2282}', 0xcc, 713, "propersubset"),
    g('\u{2286}', 0xcd, 713, "reflexsubset"),
    g('\u{2208}', 0xce, 713, "element"),
    g('\u{2209}', 0xcf, 713, "notelement"),
    g('\u{2220}', 0xd0, 768, "angle"),
    g('\u{2207}', 0xd1, 713, "gradient"),
    g('\u{f6da}', 0xd2, 790, "registerserif"),
    g('\u{f6d9}', 0xd3, 790, "copyrightserif"),
    g('\u{f6db}', 0xd4, 890, "trademarkserif"),
    g('\u{220f}', 0xd5, 823, "product"),
    g('\u{221a}', 0xd6, 549, "radical"),
    g('\u{22c5}', 0xd7, 250, "dotmath"),
    g('\u{00ac}', 0xd8, 713, "logicalnot"),
    g('\u{2227}', 0xd9, 603, "logicaland"),
    g('\u{2228}', 0xda, 603, "logicalor"),
    g('\u{21d4}', 0xdb, 1042, "arrowdblboth"),
    g('\u{21d0}', 0xdc, 987, "arrowdblleft"),
    g('\u{21d1}', 0xdd, 603, "arrowdblup"),
    g('\u{21d2}', 0xde, 987, "arrowdblright"),
    g('\u{21d3}', 0xdf, 603, "arrowdbldown"),
    g('\u{25ca}', 0xe0, 494, "lozenge"),
    g('\u{2329}', 0xe1, 329, "angleleft"),
    g('\u{f8e8}', 0xe2, 790, "registersans"),
    g('\u{f8e9}', 0xe3, 790, "copyrightsans"),
    g('\u{f8ea}', 0xe4, 786, "trademarksans"),
    g('\u{2211}', 0xe5, 713, "summation"),
    g('\u{f8eb}', 0xe6, 384, "parenlefttp"),
    g('\u{f8ec}', 0xe7, 384, "parenleftex"),
    g('\u{f8ed}', 0xe8, 384, "parenleftbt"),
    g('\u{f8ee}', 0xe9, 384, "bracketlefttp"),
    g('\u{f8ef}', 0xea, 384, "bracketleftex"),
    g('\u{f8f0}', 0xeb, 384, "bracketleftbt"),
    g('\u{f8f1}', 0xec, 494, "bracelefttp"),
    g('\u{f8f2}', 0xed, 494, "braceleftmid"),
    g('\u{f8f3}', 0xee, 494, "braceleftbt"),
    g('\u{f8f4}', 0xef, 494, "braceex"),
    g('\u{232a}', 0xf1, 329, "angleright"),
    g('\u{222b}', 0xf2, 274, "integral"),
    g('\u{2320}', 0xf3, 686, "integraltp"),
    g('\u{f8f5}', 0xf4, 686, "integralex"),
    g('\u{2321}', 0xf5, 686, "integralbt"),
    g('\u{f8f6}', 0xf6, 384, "parenrighttp"),
    g('\u{f8f7}', 0xf7, 384, "parenrightex"),
    g('\u{f8f8}', 0xf8, 384, "parenrightbt"),
    g('\u{f8f9}', 0xf9, 384, "bracketrighttp"),
    g('\u{f8fa}', 0xfa, 384, "bracketrightex"),
    g('\u{f8fb}', 0xfb, 384, "bracketrightbt"),
    g('\u{f8fc}', 0xfc, 494, "bracerighttp"),
    g('\u{f8fd}', 0xfd, 494, "bracerightmid"),
    g('\u{f8fe}', 0xfe, 494, "bracerightbt"),
    g('\u{f8ff}', -1, 790, "apple"),
];

pub(crate) static ZAPF_DINGBATS: &[GlyphInfo] = &[
    g(' ', 0x20, 278, "space"),
    g('\u{2701}', 0x21, 974, "a1"),
    g('\u{2702}', 0x22, 961, "a2"),
    g('\u{2703}', 0x23, 974, "a202"),
    g('\u{2704}', 0x24, 980, "a3"),
    g('\u{260e}', 0x25, 719, "a4"),
    g('\u{2706}', 0x26, 789, "a5"),
    g('\u{2707}', 0x27, 790, "a119"),
    g('\u{2708}', 0x28, 791, "a118"),
    g('\u{2709}', 0x29, 690, "a117"),
    g('\u{261b}', 0x2a, 960, "a11"),
    g('\u{261e}', 0x2b, 939, "a12"),
    g('\u{270c}', 0x2c, 549, "a13"),
    g('\u{270d}', 0x2d, 855, "a14"),
    g('\u{270e}', 0x2e, 911, "a15"),
    g('\u{270f}', 0x2f, 933, "a16"),
    g('\u{2710}', 0x30, 911, "a105"),
    g('\u{2711}', 0x31, 945, "a17"),
    g('\u{2712}', 0x32, 974, "a18"),
    g('\u{2713}', 0x33, 755, "a19"),
    g('\u{2714}', 0x34, 846, "a20"),
    g('\u{2715}', 0x35, 762, "a21"),
    g('\u{2716}', 0x36, 761, "a22"),
    g('\u{2717}', 0x37, 571, "a23"),
    g('\u{2718}', 0x38, 677, "a24"),
    g('\u{2719}', 0x39, 763, "a25"),
    g('\u{271a}', 0x3a, 760, "a26"),
    g('\u{271b}', 0x3b, 759, "a27"),
    g('\u{271c}', 0x3c, 754, "a28"),
    g('\u{271d}', 0x3d, 494, "a6"),
    g('\u{271e}', 0x3e, 552, "a7"),
    g('\u{271f}', 0x3f, 537, "a8"),
    g('\u{2720}', 0x40, 577, "a9"),
    g('\u{2721}', 0x41, 692, "a10"),
    g('\u{2722}', 0x42, 786, "a29"),
    g('\u{2723}', 0x43, 788, "a30"),
    g('\u{2724}', 0x44, 788, "a31"),
    g('\u{2725}', 0x45, 790, "a32"),
    g('\u{2726}', 0x46, 793, "a33"),
    g('\u{2727}', 0x47, 794, "a34"),
    g('\u{2605}', 0x48, 816, "a35"),
    g('\u{2729}', 0x49, 823, "a36"),
    g('\u{272a}', 0x4a, 789, "a37"),
    g('\u{272b}', 0x4b, 841, "a38"),
    g('\u{272c}', 0x4c, 823, "a39"),
    g('\u{272d}', 0x4d, 833, "a40"),
    g('\u{272e}', 0x4e, 816, "a41"),
    g('\u{272f}', 0x4f, 831, "a42"),
    g('\u{2730}', 0x50, 923, "a43"),
    g('\u{2731}', 0x51, 744, "a44"),
    g('\u{2732}', 0x52, 723, "a45"),
    g('\u{2733}', 0x53, 749, "a46"),
    g('\u{2734}', 0x54, 790, "a47"),
    g('\u{2735}', 0x55, 792, "a48"),
    g('\u{2736}', 0x56, 695, "a49"),
    g('\u{2737}', 0x57, 776, "a50"),
    g('\u{2738}', 0x58, 768, "a51"),
    g('\u{2739}', 0x59, 792, "a52"),
    g('\u{273a}', 0x5a, 759, "a53"),
    g('\u{273b}', 0x5b, 707, "a54"),
    g('\u{273c}', 0x5c, 708, "a55"),
    g('\u{273d}', 0x5d, 682, "a56"),
    g('\u{273e}', 0x5e, 701, "a57"),
    g('\u{273f}', 0x5f, 826, "a58"),
    g('\u{2740}', 0x60, 815, "a59"),
    g('\u{2741}', 0x61, 789, "a60"),
    g('\u{2742}', 0x62, 789, "a61"),
    g('\u{2743}', 0x63, 707, "a62"),
    g('\u{2744}', 0x64, 687, "a63"),
    g('\u{2745}', 0x65, 696, "a64"),
    g('\u{2746}', 0x66, 689, "a65"),
    g('\u{2747}', 0x67, 786, "a66"),
    g('\u{2748}', 0x68, 787, "a67"),
    g('\u{2749}', 0x69, 713, "a68"),
    g('\u{274a}', 0x6a, 791, "a69"),
    g('\u{274b}', 0x6b, 785, "a70"),
    g('\u{25cf}', 0x6c, 791, "a71"),
    g('\u{274d}', 0x6d, 873, "a72"),
    g('\u{25a0}', 0x6e, 761, "a73"),
    g('\u{274f}', 0x6f, 762, "a74"),
    g('\u{2750}', 0x70, 762, "a203"),
    g('\u{2751}', 0x71, 759, "a75"),
    g('\u{2752}', 0x72, 759, "a204"),
    g('\u{25b2}', 0x73, 892, "a76"),
    g('\u{25bc}', 0x74, 892, "a77"),
    g('\u{25c6}', 0x75, 788, "a78"),
    g('\u{2756}', 0x76, 784, "a79"),
    g('\u{25d7}', 0x77, 438, "a81"),
    g('\u{2758}', 0x78, 138, "a82"),
    g('\u{2759}', 0x79, 277, "a83"),
    g('\u{275a}', 0x7a, 415, "a84"),
    g('\u{275b}', 0x7b, 392, "a97"),
    g('\u{275c}', 0x7c, 392, "a98"),
    g('\u{275d}', 0x7d, 668, "a99"),
    g('\u{275e}', 0x7e, 668, "a100"),
    g('\u{2768}', 0x80, 390, "a89"),
    g('\u{2769}', 0x81, 390, "a90"),
    g('\u{276a}', 0x82, 317, "a93"),
    g('\u{276b}', 0x83, 317, "a94"),
    g('\u{276c}', 0x84, 276, "a91"),
    g('\u{276d}', 0x85, 276, "a92"),
    g('\u{276e}', 0x86, 509, "a205"),
    g('\u{276f}', 0x87, 509, "a85"),
    g('\u{2770}', 0x88, 410, "a206"),
    g('\u{2771}', 0x89, 410, "a86"),
    g('\u{2772}', 0x8a, 234, "a87"),
    g('\u{2773}', 0x8b, 234, "a88"),
    g('\u{2774}', 0x8c, 334, "a95"),
    g('\u{2775}', 0x8d, 334, "a96"),
    g('\u{2761}', 0xa1, 732, "a101"),
    g('\u{2762}', 0xa2, 544, "a102"),
    g('\u{2763}', 0xa3, 544, "a103"),
    g('\u{2764}', 0xa4, 910, "a104"),
    g('\u{2765}', 0xa5, 667, "a106"),
    g('\u{2766}', 0xa6, 760, "a107"),
    g('\u{2767}', 0xa7, 760, "a108"),
    g('\u{2663}', 0xa8, 776, "a112"),
    g('\u{2666}', 0xa9, 595, "a111"),
    g('\u{2665}', 0xaa, 694, "a110"),
    g('\u{2660}', 0xab, 626, "a109"),
    g('\u{2460}', 0xac, 788, "a120"),
    g('\u{2461}', 0xad, 788, "a121"),
    g('\u{2462}', 0xae, 788, "a122"),
    g('\u{2463}', 0xaf, 788, "a123"),
    g('\u{2464}', 0xb0, 788, "a124"),
    g('\u{2465}', 0xb1, 788, "a125"),
    g('\u{2466}', 0xb2, 788, "a126"),
    g('\u{2467}', 0xb3, 788, "a127"),
    g('\u{2468}', 0xb4, 788, "a128"),
    g('\u{2469}', 0xb5, 788, "a129"),
    g('\u{2776}', 0xb6, 788, "a130"),
    g('\u{2777}', 0xb7, 788, "a131"),
    g('\u{2778}', 0xb8, 788, "a132"),
    g('\u{2779}', 0xb9, 788, "a133"),
    g('\u{277a}', 0xba, 788, "a134"),
    g('\u{277b}', 0xbb, 788, "a135"),
    g('\u{277c}', 0xbc, 788, "a136"),
    g('\u{277d}', 0xbd, 788, "a137"),
    g('\u{277e}', 0xbe, 788, "a138"),
    g('\u{277f}', 0xbf, 788, "a139"),
    g('\u{2780}', 0xc0, 788, "a140"),
    g('\u{2781}', 0xc1, 788, "a141"),
    g('\u{2782}', 0xc2, 788, "a142"),
    g('\u{2783}', 0xc3, 788, "a143"),
    g('\u{2784}', 0xc4, 788, "a144"),
    g('\u{2785}', 0xc5, 788, "a145"),
    g('\u{2786}', 0xc6, 788, "a146"),
    g('\u{2787}', 0xc7, 788, "a147"),
    g('\u{2788}', 0xc8, 788, "a148"),
    g('\u{2789}', 0xc9, 788, "a149"),
    g('\u{278a}', 0xca, 788, "a150"),
    g('\u{278b}', 0xcb, 788, "a151"),
    g('\u{278c}', 0xcc, 788, "a152"),
    g('\u{278d}', 0xcd, 788, "a153"),
    g('\u{278e}', 0xce, 788, "a154"),
    g('\u{278f}', 0xcf, 788, "a155"),
    g('\u{2790}', 0xd0, 788, "a156"),
    g('\u{2791}', 0xd1, 788, "a157"),
    g('\u{2792}', 0xd2, 788, "a158"),
    g('\u{2793}', 0xd3, 788, "a159"),
    g('\u{2794}', 0xd4, 894, "a160"),
    g('\u{2192}', 0xd5, 838, "a161"),
    g('\u{2194}', 0xd6, 1016, "a163"),
    g('\u{2195}', 0xd7, 458, "a164"),
    g('\u{2798}', 0xd8, 748, "a196"),
    g('\u{2799}', 0xd9, 924, "a165"),
    g('\u{279a}', 0xda, 748, "a192"),
    g('\u{279b}', 0xdb, 918, "a166"),
    g('\u{279c}', 0xdc, 927, "a167"),
    g('\u{279d}', 0xdd, 928, "a168"),
    g('\u{279e}', 0xde, 928, "a169"),
    g('\u{279f}', 0xdf, 834, "a170"),
    g('\u{27a0}', 0xe0, 873, "a171"),
    g('\u{27a1}', 0xe1, 828, "a172"),
    g('\u{27a2}', 0xe2, 924, "a173"),
    g('\u{27a3}', 0xe3, 924, "a162"),
    g('\u{27a4}', 0xe4, 917, "a174"),
    g('\u{27a5}', 0xe5, 930, "a175"),
    g('\u{27a6}', 0xe6, 931, "a176"),
    g('\u{27a7}', 0xe7, 463, "a177"),
    g('\u{27a8}', 0xe8, 883, "a178"),
    g('\u{27a9}', 0xe9, 836, "a179"),
    g('\u{27aa}', 0xea, 836, "a193"),
    g('\u{27ab}', 0xeb, 867, "a180"),
    g('\u{27ac}', 0xec, 867, "a199"),
    g('\u{27ad}', 0xed, 696, "a181"),
    g('\u{27ae}', 0xee, 696, "a200"),
    g('\u{27af}', 0xef, 874, "a182"),
    g('\u{27b1}', 0xf1, 874, "a201"),
    g('\u{27b2}', 0xf2, 760, "a183"),
    g('\u{27b3}', 0xf3, 946, "a184"),
    g('\u{27b4}', 0xf4, 771, "a197"),
    g('\u{27b5}', 0xf5, 865, "a185"),
    g('\u{27b6}', 0xf6, 771, "a194"),
    g('\u{27b7}', 0xf7, 888, "a198"),
    g('\u{27b8}', 0xf8, 967, "a186"),
    g('\u{27b9}', 0xf9, 888, "a195"),
    g('\u{27ba}', 0xfa, 831, "a187"),
    g('\u{27bb}', 0xfb, 873, "a188"),
    g('\u{27bc}', 0xfc, 927, "a189"),
    g('\u{27bd}', 0xfd, 970, "a190"),
    g('\u{27be}', 0xfe, 918, "a191"),
];
