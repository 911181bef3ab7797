//! Rune to byte tables for the predefined single-byte encodings.
//!
//! Generated from the Adobe encoding vectors; do not edit by hand.

pub(crate) static WIN_ANSI: &[(char, u8)] = &[
    (' ', 0x20), // space
    ('!', 0x21), // exclam
    ('"', 0x22), // quotedbl
    ('#', 0x23), // numbersign
    ('$', 0x24), // dollar
    ('%', 0x25), // percent
    ('&', 0x26), // ampersand
    ('\'', 0x27), // quotesingle
    ('(', 0x28), // parenleft
    (')', 0x29), // parenright
    ('*', 0x2a), // asterisk
    ('+', 0x2b), // plus
    (',', 0x2c), // comma
    ('-', 0x2d), // hyphen
    ('.', 0x2e), // period
    ('/', 0x2f), // slash
    ('0', 0x30), // zero
    ('1', 0x31), // one
    ('2', 0x32), // two
    ('3', 0x33), // three
    ('4', 0x34), // four
    ('5', 0x35), // five
    ('6', 0x36), // six
    ('7', 0x37), // seven
    ('8', 0x38), // eight
    ('9', 0x39), // nine
    (':', 0x3a), // colon
    (';', 0x3b), // semicolon
    ('<', 0x3c), // less
    ('=', 0x3d), // equal
    ('>', 0x3e), // greater
    ('?', 0x3f), // question
    ('@', 0x40), // at
    ('A', 0x41),
    ('B', 0x42),
    ('C', 0x43),
    ('D', 0x44),
    ('E', 0x45),
    ('F', 0x46),
    ('G', 0x47),
    ('H', 0x48),
    ('I', 0x49),
    ('J', 0x4a),
    ('K', 0x4b),
    ('L', 0x4c),
    ('M', 0x4d),
    ('N', 0x4e),
    ('O', 0x4f),
    ('P', 0x50),
    ('Q', 0x51),
    ('R', 0x52),
    ('S', 0x53),
    ('T', 0x54),
    ('U', 0x55),
    ('V', 0x56),
    ('W', 0x57),
    ('X', 0x58),
    ('Y', 0x59),
    ('Z', 0x5a),
    ('[', 0x5b), // bracketleft
    ('\\', 0x5c), // backslash
    (']', 0x5d), // bracketright
    ('^', 0x5e), // asciicircum
    ('_', 0x5f), // underscore
    ('`', 0x60), // grave
    ('a', 0x61),
    ('b', 0x62),
    ('c', 0x63),
    ('d', 0x64),
    ('e', 0x65),
    ('f', 0x66),
    ('g', 0x67),
    ('h', 0x68),
    ('i', 0x69),
    ('j', 0x6a),
    ('k', 0x6b),
    ('l', 0x6c),
    ('m', 0x6d),
    ('n', 0x6e),
    ('o', 0x6f),
    ('p', 0x70),
    ('q', 0x71),
    ('r', 0x72),
    ('s', 0x73),
    ('t', 0x74),
    ('u', 0x75),
    ('v', 0x76),
    ('w', 0x77),
    ('x', 0x78),
    ('y', 0x79),
    ('z', 0x7a),
    ('{', 0x7b), // braceleft
    ('|', 0x7c), // bar
    ('}', 0x7d), // braceright
    ('~', 0x7e), // asciitilde
    ('\u{20ac}', 0x80), // Euro
    ('\u{201a}', 0x82), // quotesinglbase
    ('\u{0192}', 0x83), // florin
    ('\u{201e}', 0x84), // quotedblbase
    ('\u{2026}', 0x85), // ellipsis
    ('\u{2020}', 0x86), // dagger
    ('\u{2021}', 0x87), // daggerdbl
    ('\u{02c6}', 0x88), // circumflex
    ('\u{2030}', 0x89), // perthousand
    ('\u{0160}', 0x8a), // Scaron
    ('\u{2039}', 0x8b), // guilsinglleft
    ('\u{0152}', 0x8c), // OE
    ('\u{017d}', 0x8e), // Zcaron
    ('\u{2018}', 0x91), // quoteleft
    ('\u{2019}', 0x92), // quoteright
    ('\u{201c}', 0x93), // quotedblleft
    ('\u{201d}', 0x94), // quotedblright
    ('\u{2022}', 0x95), // bullet
    ('\u{2013}', 0x96), // endash
    ('\u{2014}', 0x97), // emdash
    ('\u{02dc}', 0x98), // tilde
    ('\u{2122}', 0x99), // trademark
    ('\u{0161}', 0x9a), // scaron
    ('\u{203a}', 0x9b), // guilsinglright
    ('\u{0153}', 0x9c), // oe
    ('\u{017e}', 0x9e), // zcaron
    ('\u{0178}', 0x9f), // Ydieresis
    ('\u{00a1}', 0xa1), // exclamdown
    ('\u{00a2}', 0xa2), // cent
    ('\u{00a3}', 0xa3), // sterling
    ('\u{00a4}', 0xa4), // currency
    ('\u{00a5}', 0xa5), // yen
    ('\u{00a6}', 0xa6), // brokenbar
    ('\u{00a7}', 0xa7), // section
    ('\u{00a8}', 0xa8), // dieresis
    ('\u{00a9}', 0xa9), // copyright
    ('\u{00aa}', 0xaa), // ordfeminine
    ('\u{00ab}', 0xab), // guillemotleft
    ('\u{00ac}', 0xac), // logicalnot
    ('\u{00ae}', 0xae), // registered
    ('\u{00af}', 0xaf), // macron
    ('\u{00b0}', 0xb0), // degree
    ('\u{00b1}', 0xb1), // plusminus
    ('\u{00b2}', 0xb2), // twosuperior
    ('\u{00b3}', 0xb3), // threesuperior
    ('\u{00b4}', 0xb4), // acute
    ('\u{03bc}', 0xb5), // mu
    ('\u{00b6}', 0xb6), // paragraph
    ('\u{00b7}', 0xb7), // periodcentered
    ('\u{00b8}', 0xb8), // cedilla
    ('\u{00b9}', 0xb9), // onesuperior
    ('\u{00ba}', 0xba), // ordmasculine
    ('\u{00bb}', 0xbb), // guillemotright
    ('\u{00bc}', 0xbc), // onequarter
    ('\u{00bd}', 0xbd), // onehalf
    ('\u{00be}', 0xbe), // threequarters
    ('\u{00bf}', 0xbf), // questiondown
    ('\u{00c0}', 0xc0), // Agrave
    ('\u{00c1}', 0xc1), // Aacute
    ('\u{00c2}', 0xc2), // Acircumflex
    ('\u{00c3}', 0xc3), // Atilde
    ('\u{00c4}', 0xc4), // Adieresis
    ('\u{00c5}', 0xc5), // Aring
    ('\u{00c6}', 0xc6), // AE
    ('\u{00c7}', 0xc7), // Ccedilla
    ('\u{00c8}', 0xc8), // Egrave
    ('\u{00c9}', 0xc9), // Eacute
    ('\u{00ca}', 0xca), // Ecircumflex
    ('\u{00cb}', 0xcb), // Edieresis
    ('\u{00cc}', 0xcc), // Igrave
    ('\u{00cd}', 0xcd), // Iacute
    ('\u{00ce}', 0xce), // Icircumflex
    ('\u{00cf}', 0xcf), // Idieresis
    ('\u{00d0}', 0xd0), // Eth
    ('\u{00d1}', 0xd1), // Ntilde
    ('\u{00d2}', 0xd2), // Ograve
    ('\u{00d3}', 0xd3), // Oacute
    ('\u{00d4}', 0xd4), // Ocircumflex
    ('\u{00d5}', 0xd5), // Otilde
    ('\u{00d6}', 0xd6), // Odieresis
    ('\u{00d7}', 0xd7), // multiply
    ('\u{00d8}', 0xd8), // Oslash
    ('\u{00d9}', 0xd9), // Ugrave
    ('\u{00da}', 0xda), // Uacute
    ('\u{00db}', 0xdb), // Ucircumflex
    ('\u{00dc}', 0xdc), // Udieresis
    ('\u{00dd}', 0xdd), // Yacute
    ('\u{00de}', 0xde), // Thorn
    ('\u{00df}', 0xdf), // germandbls
    ('\u{00e0}', 0xe0), // agrave
    ('\u{00e1}', 0xe1), // aacute
    ('\u{00e2}', 0xe2), // acircumflex
    ('\u{00e3}', 0xe3), // atilde
    ('\u{00e4}', 0xe4), // adieresis
    ('\u{00e5}', 0xe5), // aring
    ('\u{00e6}', 0xe6), // ae
    ('\u{00e7}', 0xe7), // ccedilla
    ('\u{00e8}', 0xe8), // egrave
    ('\u{00e9}', 0xe9), // eacute
    ('\u{00ea}', 0xea), // ecircumflex
    ('\u{00eb}', 0xeb), // edieresis
    ('\u{00ec}', 0xec), // igrave
    ('\u{00ed}', 0xed), // iacute
    ('\u{00ee}', 0xee), // icircumflex
    ('\u{00ef}', 0xef), // idieresis
    ('\u{00f0}', 0xf0), // eth
    ('\u{00f1}', 0xf1), // ntilde
    ('\u{00f2}', 0xf2), // ograve
    ('\u{00f3}', 0xf3), // oacute
    ('\u{00f4}', 0xf4), // ocircumflex
    ('\u{00f5}', 0xf5), // otilde
    ('\u{00f6}', 0xf6), // odieresis
    ('\u{00f7}', 0xf7), // divide
    ('\u{00f8}', 0xf8), // oslash
    ('\u{00f9}', 0xf9), // ugrave
    ('\u{00fa}', 0xfa), // uacute
    ('\u{00fb}', 0xfb), // ucircumflex
    ('\u{00fc}', 0xfc), // udieresis
    ('\u{00fd}', 0xfd), // yacute
    ('\u{00fe}', 0xfe), // thorn
    ('\u{00ff}', 0xff), // ydieresis
];

pub(crate) static MAC_ROMAN: &[(char, u8)] = &[
    (' ', 0x20), // space
    ('!', 0x21), // exclam
    ('"', 0x22), // quotedbl
    ('#', 0x23), // numbersign
    ('$', 0x24), // dollar
    ('%', 0x25), // percent
    ('&', 0x26), // ampersand
    ('\'', 0x27), // quotesingle
    ('(', 0x28), // parenleft
    (')', 0x29), // parenright
    ('*', 0x2a), // asterisk
    ('+', 0x2b), // plus
    (',', 0x2c), // comma
    ('-', 0x2d), // hyphen
    ('.', 0x2e), // period
    ('/', 0x2f), // slash
    ('0', 0x30), // zero
    ('1', 0x31), // one
    ('2', 0x32), // two
    ('3', 0x33), // three
    ('4', 0x34), // four
    ('5', 0x35), // five
    ('6', 0x36), // six
    ('7', 0x37), // seven
    ('8', 0x38), // eight
    ('9', 0x39), // nine
    (':', 0x3a), // colon
    (';', 0x3b), // semicolon
    ('<', 0x3c), // less
    ('=', 0x3d), // equal
    ('>', 0x3e), // greater
    ('?', 0x3f), // question
    ('@', 0x40), // at
    ('A', 0x41),
    ('B', 0x42),
    ('C', 0x43),
    ('D', 0x44),
    ('E', 0x45),
    ('F', 0x46),
    ('G', 0x47),
    ('H', 0x48),
    ('I', 0x49),
    ('J', 0x4a),
    ('K', 0x4b),
    ('L', 0x4c),
    ('M', 0x4d),
    ('N', 0x4e),
    ('O', 0x4f),
    ('P', 0x50),
    ('Q', 0x51),
    ('R', 0x52),
    ('S', 0x53),
    ('T', 0x54),
    ('U', 0x55),
    ('V', 0x56),
    ('W', 0x57),
    ('X', 0x58),
    ('Y', 0x59),
    ('Z', 0x5a),
    ('[', 0x5b), // bracketleft
    ('\\', 0x5c), // backslash
    (']', 0x5d), // bracketright
    ('^', 0x5e), // asciicircum
    ('_', 0x5f), // underscore
    ('`', 0x60), // grave
    ('a', 0x61),
    ('b', 0x62),
    ('c', 0x63),
    ('d', 0x64),
    ('e', 0x65),
    ('f', 0x66),
    ('g', 0x67),
    ('h', 0x68),
    ('i', 0x69),
    ('j', 0x6a),
    ('k', 0x6b),
    ('l', 0x6c),
    ('m', 0x6d),
    ('n', 0x6e),
    ('o', 0x6f),
    ('p', 0x70),
    ('q', 0x71),
    ('r', 0x72),
    ('s', 0x73),
    ('t', 0x74),
    ('u', 0x75),
    ('v', 0x76),
    ('w', 0x77),
    ('x', 0x78),
    ('y', 0x79),
    ('z', 0x7a),
    ('{', 0x7b), // braceleft
    ('|', 0x7c), // bar
    ('}', 0x7d), // braceright
    ('~', 0x7e), // asciitilde
    ('\u{00c4}', 0x80), // Adieresis
    ('\u{00c5}', 0x81), // Aring
    ('\u{00c7}', 0x82), // Ccedilla
    ('\u{00c9}', 0x83), // Eacute
    ('\u{00d1}', 0x84), // Ntilde
    ('\u{00d6}', 0x85), // Odieresis
    ('\u{00dc}', 0x86), // Udieresis
    ('\u{00e1}', 0x87), // aacute
    ('\u{00e0}', 0x88), // agrave
    ('\u{00e2}', 0x89), // acircumflex
    ('\u{00e4}', 0x8a), // adieresis
    ('\u{00e3}', 0x8b), // atilde
    ('\u{00e5}', 0x8c), // aring
    ('\u{00e7}', 0x8d), // ccedilla
    ('\u{00e9}', 0x8e), // eacute
    ('\u{00e8}', 0x8f), // egrave
    ('\u{00ea}', 0x90), // ecircumflex
    ('\u{00eb}', 0x91), // edieresis
    ('\u{00ed}', 0x92), // iacute
    ('\u{00ec}', 0x93), // igrave
    ('\u{00ee}', 0x94), // icircumflex
    ('\u{00ef}', 0x95), // idieresis
    ('\u{00f1}', 0x96), // ntilde
    ('\u{00f3}', 0x97), // oacute
    ('\u{00f2}', 0x98), // ograve
    ('\u{00f4}', 0x99), // ocircumflex
    ('\u{00f6}', 0x9a), // odieresis
    ('\u{00f5}', 0x9b), // otilde
    ('\u{00fa}', 0x9c), // uacute
    ('\u{00f9}', 0x9d), // ugrave
    ('\u{00fb}', 0x9e), // ucircumflex
    ('\u{00fc}', 0x9f), // udieresis
    ('\u{2020}', 0xa0), // dagger
    ('\u{00b0}', 0xa1), // degree
    ('\u{00a2}', 0xa2), // cent
    ('\u{00a3}', 0xa3), // sterling
    ('\u{00a7}', 0xa4), // section
    ('\u{2022}', 0xa5), // bullet
    ('\u{00b6}', 0xa6), // paragraph
    ('\u{00df}', 0xa7), // germandbls
    ('\u{00ae}', 0xa8), // registered
    ('\u{00a9}', 0xa9), // copyright
    ('\u{2122}', 0xaa), // trademark
    ('\u{00b4}', 0xab), // acute
    ('\u{00a8}', 0xac), // dieresis
    ('\u{00c6}', 0xae), // AE
    ('\u{00d8}', 0xaf), // Oslash
    ('\u{00b1}', 0xb1), // plusminus
    ('\u{00a5}', 0xb4), // yen
    ('\u{03bc}', 0xb5), // mu
    ('\u{00aa}', 0xbb), // ordfeminine
    ('\u{00ba}', 0xbc), // ordmasculine
    ('\u{00e6}', 0xbe), // ae
    ('\u{00f8}', 0xbf), // oslash
    ('\u{00bf}', 0xc0), // questiondown
    ('\u{00a1}', 0xc1), // exclamdown
    ('\u{00ac}', 0xc2), // logicalnot
    ('\u{0192}', 0xc4), // florin
    ('\u{00ab}', 0xc7), // guillemotleft
    ('\u{00bb}', 0xc8), // guillemotright
    ('\u{2026}', 0xc9), // ellipsis
    ('\u{00c0}', 0xcb), // Agrave
    ('\u{00c3}', 0xcc), // Atilde
    ('\u{00d5}', 0xcd), // Otilde
    ('\u{0152}', 0xce), // OE
    ('\u{0153}', 0xcf), // oe
    ('\u{2013}', 0xd0), // endash
    ('\u{2014}', 0xd1), // emdash
    ('\u{201c}', 0xd2), // quotedblleft
    ('\u{201d}', 0xd3), // quotedblright
    ('\u{2018}', 0xd4), // quoteleft
    ('\u{2019}', 0xd5), // quoteright
    ('\u{00f7}', 0xd6), // divide
    ('\u{00ff}', 0xd8), // ydieresis
    ('\u{0178}', 0xd9), // Ydieresis
    ('\u{2044}', 0xda), // fraction
    ('\u{00a4}', 0xdb), // currency
    ('\u{2039}', 0xdc), // guilsinglleft
    ('\u{203a}', 0xdd), // guilsinglright
    ('\u{fb01}', 0xde), // fi
    ('\u{fb02}', 0xdf), // fl
    ('\u{2021}', 0xe0), // daggerdbl
    ('\u{00b7}', 0xe1), // periodcentered
    ('\u{201a}', 0xe2), // quotesinglbase
    ('\u{201e}', 0xe3), // quotedblbase
    ('\u{2030}', 0xe4), // perthousand
    ('\u{00c2}', 0xe5), // Acircumflex
    ('\u{00ca}', 0xe6), // Ecircumflex
    ('\u{00c1}', 0xe7), // Aacute
    ('\u{00cb}', 0xe8), // Edieresis
    ('\u{00c8}', 0xe9), // Egrave
    ('\u{00cd}', 0xea), // Iacute
    ('\u{00ce}', 0xeb), // Icircumflex
    ('\u{00cf}', 0xec), // Idieresis
    ('\u{00cc}', 0xed), // Igrave
    ('\u{00d3}', 0xee), // Oacute
    ('\u{00d4}', 0xef), // Ocircumflex
    ('\u{00d2}', 0xf1), // Ograve
    ('\u{00da}', 0xf2), // Uacute
    ('\u{00db}', 0xf3), // Ucircumflex
    ('\u{00d9}', 0xf4), // Ugrave
    ('\u{0131}', 0xf5), // dotlessi
    ('\u{02c6}', 0xf6), // circumflex
    ('\u{02dc}', 0xf7), // tilde
    ('\u{00af}', 0xf8), // macron
    ('\u{02d8}', 0xf9), // breve
    ('\u{02d9}', 0xfa), // dotaccent
    ('\u{02da}', 0xfb), // ring
    ('\u{00b8}', 0xfc), // cedilla
    ('\u{02dd}', 0xfd), // hungarumlaut
    ('\u{02db}', 0xfe), // ogonek
    ('\u{02c7}', 0xff), // caron
];

pub(crate) static PDF_DOC: &[(char, u8)] = &[
    ('\u{02d8}', 0x18), // breve
    ('\u{02c7}', 0x19), // caron
    ('\u{02c6}', 0x1a), // circumflex
    ('\u{02d9}', 0x1b), // dotaccent
    ('\u{02dd}', 0x1c), // hungarumlaut
    ('\u{02db}', 0x1d), // ogonek
    ('\u{02da}', 0x1e), // ring
    ('\u{02dc}', 0x1f), // tilde
    (' ', 0x20), // space
    ('!', 0x21), // exclam
    ('"', 0x22), // quotedbl
    ('#', 0x23), // numbersign
    ('$', 0x24), // dollar
    ('%', 0x25), // percent
    ('&', 0x26), // ampersand
    ('\'', 0x27), // quotesingle
    ('(', 0x28), // parenleft
    (')', 0x29), // parenright
    ('*', 0x2a), // asterisk
    ('+', 0x2b), // plus
    (',', 0x2c), // comma
    ('-', 0x2d), // hyphen
    ('.', 0x2e), // period
    ('/', 0x2f), // slash
    ('0', 0x30), // zero
    ('1', 0x31), // one
    ('2', 0x32), // two
    ('3', 0x33), // three
    ('4', 0x34), // four
    ('5', 0x35), // five
    ('6', 0x36), // six
    ('7', 0x37), // seven
    ('8', 0x38), // eight
    ('9', 0x39), // nine
    (':', 0x3a), // colon
    (';', 0x3b), // semicolon
    ('<', 0x3c), // less
    ('=', 0x3d), // equal
    ('>', 0x3e), // greater
    ('?', 0x3f), // question
    ('@', 0x40), // at
    ('A', 0x41),
    ('B', 0x42),
    ('C', 0x43),
    ('D', 0x44),
    ('E', 0x45),
    ('F', 0x46),
    ('G', 0x47),
    ('H', 0x48),
    ('I', 0x49),
    ('J', 0x4a),
    ('K', 0x4b),
    ('L', 0x4c),
    ('M', 0x4d),
    ('N', 0x4e),
    ('O', 0x4f),
    ('P', 0x50),
    ('Q', 0x51),
    ('R', 0x52),
    ('S', 0x53),
    ('T', 0x54),
    ('U', 0x55),
    ('V', 0x56),
    ('W', 0x57),
    ('X', 0x58),
    ('Y', 0x59),
    ('Z', 0x5a),
    ('[', 0x5b), // bracketleft
    ('\\', 0x5c), // backslash
    (']', 0x5d), // bracketright
    ('^', 0x5e), // asciicircum
    ('_', 0x5f), // underscore
    ('`', 0x60), // grave
    ('a', 0x61),
    ('b', 0x62),
    ('c', 0x63),
    ('d', 0x64),
    ('e', 0x65),
    ('f', 0x66),
    ('g', 0x67),
    ('h', 0x68),
    ('i', 0x69),
    ('j', 0x6a),
    ('k', 0x6b),
    ('l', 0x6c),
    ('m', 0x6d),
    ('n', 0x6e),
    ('o', 0x6f),
    ('p', 0x70),
    ('q', 0x71),
    ('r', 0x72),
    ('s', 0x73),
    ('t', 0x74),
    ('u', 0x75),
    ('v', 0x76),
    ('w', 0x77),
    ('x', 0x78),
    ('y', 0x79),
    ('z', 0x7a),
    ('{', 0x7b), // braceleft
    ('|', 0x7c), // bar
    ('}', 0x7d), // braceright
    ('~', 0x7e), // asciitilde
    ('\u{2022}', 0x80), // bullet
    ('\u{2020}', 0x81), // dagger
    ('\u{2021}', 0x82), // daggerdbl
    ('\u{2026}', 0x83), // ellipsis
    ('\u{2014}', 0x84), // emdash
    ('\u{2013}', 0x85), // endash
    ('\u{0192}', 0x86), // florin
    ('\u{2044}', 0x87), // fraction
    ('\u{2039}', 0x88), // guilsinglleft
    ('\u{203a}', 0x89), // guilsinglright
    ('\u{2212}', 0x8a), // minus
    ('\u{2030}', 0x8b), // perthousand
    ('\u{201e}', 0x8c), // quotedblbase
    ('\u{201c}', 0x8d), // quotedblleft
    ('\u{201d}', 0x8e), // quotedblright
    ('\u{2018}', 0x8f), // quoteleft
    ('\u{2019}', 0x90), // quoteright
    ('\u{201a}', 0x91), // quotesinglbase
    ('\u{2122}', 0x92), // trademark
    ('\u{fb01}', 0x93), // fi
    ('\u{fb02}', 0x94), // fl
    ('\u{0141}', 0x95), // Lslash
    ('\u{0152}', 0x96), // OE
    ('\u{0160}', 0x97), // Scaron
    ('\u{0178}', 0x98), // Ydieresis
    ('\u{017d}', 0x99), // Zcaron
    ('\u{0131}', 0x9a), // dotlessi
    ('\u{0142}', 0x9b), // lslash
    ('\u{0153}', 0x9c), // oe
    ('\u{0161}', 0x9d), // scaron
    ('\u{017e}', 0x9e), // zcaron
    ('\u{20ac}', 0xa0), // Euro
    ('\u{00a1}', 0xa1), // exclamdown
    ('\u{00a2}', 0xa2), // cent
    ('\u{00a3}', 0xa3), // sterling
    ('\u{00a4}', 0xa4), // currency
    ('\u{00a5}', 0xa5), // yen
    ('\u{00a6}', 0xa6), // brokenbar
    ('\u{00a7}', 0xa7), // section
    ('\u{00a8}', 0xa8), // dieresis
    ('\u{00a9}', 0xa9), // copyright
    ('\u{00aa}', 0xaa), // ordfeminine
    ('\u{00ab}', 0xab), // guillemotleft
    ('\u{00ac}', 0xac), // logicalnot
    ('\u{00ae}', 0xae), // registered
    ('\u{00af}', 0xaf), // macron
    ('\u{00b0}', 0xb0), // degree
    ('\u{00b1}', 0xb1), // plusminus
    ('\u{00b2}', 0xb2), // twosuperior
    ('\u{00b3}', 0xb3), // threesuperior
    ('\u{00b4}', 0xb4), // acute
    ('\u{03bc}', 0xb5), // mu
    ('\u{00b6}', 0xb6), // paragraph
    ('\u{00b7}', 0xb7), // periodcentered
    ('\u{00b8}', 0xb8), // cedilla
    ('\u{00b9}', 0xb9), // onesuperior
    ('\u{00ba}', 0xba), // ordmasculine
    ('\u{00bb}', 0xbb), // guillemotright
    ('\u{00bc}', 0xbc), // onequarter
    ('\u{00bd}', 0xbd), // onehalf
    ('\u{00be}', 0xbe), // threequarters
    ('\u{00bf}', 0xbf), // questiondown
    ('\u{00c0}', 0xc0), // Agrave
    ('\u{00c1}', 0xc1), // Aacute
    ('\u{00c2}', 0xc2), // Acircumflex
    ('\u{00c3}', 0xc3), // Atilde
    ('\u{00c4}', 0xc4), // Adieresis
    ('\u{00c5}', 0xc5), // Aring
    ('\u{00c6}', 0xc6), // AE
    ('\u{00c7}', 0xc7), // Ccedilla
    ('\u{00c8}', 0xc8), // Egrave
    ('\u{00c9}', 0xc9), // Eacute
    ('\u{00ca}', 0xca), // Ecircumflex
    ('\u{00cb}', 0xcb), // Edieresis
    ('\u{00cc}', 0xcc), // Igrave
    ('\u{00cd}', 0xcd), // Iacute
    ('\u{00ce}', 0xce), // Icircumflex
    ('\u{00cf}', 0xcf), // Idieresis
    ('\u{00d0}', 0xd0), // Eth
    ('\u{00d1}', 0xd1), // Ntilde
    ('\u{00d2}', 0xd2), // Ograve
    ('\u{00d3}', 0xd3), // Oacute
    ('\u{00d4}', 0xd4), // Ocircumflex
    ('\u{00d5}', 0xd5), // Otilde
    ('\u{00d6}', 0xd6), // Odieresis
    ('\u{00d7}', 0xd7), // multiply
    ('\u{00d8}', 0xd8), // Oslash
    ('\u{00d9}', 0xd9), // Ugrave
    ('\u{00da}', 0xda), // Uacute
    ('\u{00db}', 0xdb), // Ucircumflex
    ('\u{00dc}', 0xdc), // Udieresis
    ('\u{00dd}', 0xdd), // Yacute
    ('\u{00de}', 0xde), // Thorn
    ('\u{00df}', 0xdf), // germandbls
    ('\u{00e0}', 0xe0), // agrave
    ('\u{00e1}', 0xe1), // aacute
    ('\u{00e2}', 0xe2), // acircumflex
    ('\u{00e3}', 0xe3), // atilde
    ('\u{00e4}', 0xe4), // adieresis
    ('\u{00e5}', 0xe5), // aring
    ('\u{00e6}', 0xe6), // ae
    ('\u{00e7}', 0xe7), // ccedilla
    ('\u{00e8}', 0xe8), // egrave
    ('\u{00e9}', 0xe9), // eacute
    ('\u{00ea}', 0xea), // ecircumflex
    ('\u{00eb}', 0xeb), // edieresis
    ('\u{00ec}', 0xec), // igrave
    ('\u{00ed}', 0xed), // iacute
    ('\u{00ee}', 0xee), // icircumflex
    ('\u{00ef}', 0xef), // idieresis
    ('\u{00f0}', 0xf0), // eth
    ('\u{00f1}', 0xf1), // ntilde
    ('\u{00f2}', 0xf2), // ograve
    ('\u{00f3}', 0xf3), // oacute
    ('\u{00f4}', 0xf4), // ocircumflex
    ('\u{00f5}', 0xf5), // otilde
    ('\u{00f6}', 0xf6), // odieresis
    ('\u{00f7}', 0xf7), // divide
    ('\u{00f8}', 0xf8), // oslash
    ('\u{00f9}', 0xf9), // ugrave
    ('\u{00fa}', 0xfa), // uacute
    ('\u{00fb}', 0xfb), // ucircumflex
    ('\u{00fc}', 0xfc), // udieresis
    ('\u{00fd}', 0xfd), // yacute
    ('\u{00fe}', 0xfe), // thorn
    ('\u{00ff}', 0xff), // ydieresis
];
