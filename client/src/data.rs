//! Syllable catalog for the PRODAI trainer.
//!
//! Each word is split into syllable columns; every column lists the word's
//! own syllable first, followed by the same consonant combined with the
//! other vowels. Audio files are served from the site's static assets.

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;

/// A syllable variation with its pronunciation recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllable {
    pub text: &'static str,
    pub audio: &'static str,
}

/// A word and its syllable columns, in reading order.
#[derive(Debug, Clone, Copy)]
pub struct Word {
    pub word: &'static str,
    pub columns: &'static [&'static [Syllable]],
}

impl Word {
    /// The word's own syllables: the first variation of each column.
    #[must_use]
    pub fn own_syllables(&self) -> impl Iterator<Item = &'static Syllable> {
        self.columns.iter().filter_map(|column| column.first())
    }
}

pub const WORDS: &[Word] = &[
    Word {
        word: "masa",
        columns: &[
            &[
                Syllable { text: "ma", audio: "/audio/masa/ma.mp3" },
                Syllable { text: "me", audio: "/audio/masa/me.mp3" },
                Syllable { text: "mi", audio: "/audio/masa/mi.mp3" },
                Syllable { text: "mo", audio: "/audio/masa/mo.mp3" },
                Syllable { text: "mu", audio: "/audio/masa/mu.mp3" },
            ],
            &[
                Syllable { text: "sa", audio: "/audio/masa/sa.mp3" },
                Syllable { text: "se", audio: "/audio/masa/se.mp3" },
                Syllable { text: "si", audio: "/audio/masa/si.mp3" },
                Syllable { text: "so", audio: "/audio/masa/so.mp3" },
                Syllable { text: "su", audio: "/audio/masa/su.mp3" },
            ],
        ],
    },
    Word {
        word: "limonada",
        columns: &[
            &[
                Syllable { text: "li", audio: "/audio/limonada/li.mp3" },
                Syllable { text: "la", audio: "/audio/limonada/la.mp3" },
                Syllable { text: "le", audio: "/audio/limonada/le.mp3" },
                Syllable { text: "lo", audio: "/audio/limonada/lo.mp3" },
                Syllable { text: "lu", audio: "/audio/limonada/lu.mp3" },
            ],
            &[
                Syllable { text: "mo", audio: "/audio/limonada/mo.mp3" },
                Syllable { text: "ma", audio: "/audio/limonada/ma.mp3" },
                Syllable { text: "me", audio: "/audio/limonada/me.mp3" },
                Syllable { text: "mi", audio: "/audio/limonada/mi.mp3" },
                Syllable { text: "mu", audio: "/audio/limonada/mu.mp3" },
            ],
            &[
                Syllable { text: "na", audio: "/audio/limonada/na.mp3" },
                Syllable { text: "ne", audio: "/audio/limonada/ne.mp3" },
                Syllable { text: "ni", audio: "/audio/limonada/ni.mp3" },
                Syllable { text: "no", audio: "/audio/limonada/no.mp3" },
                Syllable { text: "nu", audio: "/audio/limonada/nu.mp3" },
            ],
            &[
                Syllable { text: "da", audio: "/audio/limonada/da.mp3" },
                Syllable { text: "de", audio: "/audio/limonada/de.mp3" },
                Syllable { text: "di", audio: "/audio/limonada/di.mp3" },
                Syllable { text: "do", audio: "/audio/limonada/do.mp3" },
                Syllable { text: "du", audio: "/audio/limonada/du.mp3" },
            ],
        ],
    },
];

/// Look up a word by its display name.
#[must_use]
pub fn word_by_name(name: &str) -> Option<&'static Word> {
    WORDS.iter().find(|word| word.word == name)
}
