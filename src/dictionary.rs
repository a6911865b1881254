// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, fash, game_config};

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Level {
    #[display("BEGINNER")]
    Beginner,
    #[display("INTERMEDIATE")]
    Intermediate,
    #[display("EXPERT")]
    Expert,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Expert];

    #[inline(always)]
    fn index(self) -> usize {
        self as usize
    }

    // subdirectory holding this level's word lists.
    #[inline(always)]
    pub fn dir_name(self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Expert => "expert",
        }
    }
}

impl std::str::FromStr for Level {
    type Err = error::MyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.dir_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| error::new(format!("invalid level {:?}", s)))
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum DictionaryError {
    #[display("dictionary for {level} is unavailable: {reason}")]
    Unavailable { level: Level, reason: String },
}

// Lowercase words of one level, bucketed by length.
pub struct Lexicon {
    by_len: Box<[fash::MyHashSet<Box<str>>]>,
    min_len: usize,
}

#[derive(Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordsVerdict {
    pub valid: bool,
    pub invalid_words: Vec<String>,
}

impl Lexicon {
    pub fn new(game_config: &game_config::GameConfig) -> Self {
        let range = game_config.word_len_range();
        Self {
            by_len: (0..=*range.end())
                .map(|_| fash::MyHashSet::default())
                .collect(),
            min_len: *range.start(),
        }
    }

    pub fn from_words<I: IntoIterator<Item = S>, S: AsRef<str>>(
        game_config: &game_config::GameConfig,
        words: I,
    ) -> Self {
        let mut lexicon = Self::new(game_config);
        for word in words {
            lexicon.insert(word.as_ref());
        }
        lexicon
    }

    #[inline(always)]
    pub fn max_len(&self) -> usize {
        self.by_len.len() - 1
    }

    // false if the length is out of range.
    pub fn insert(&mut self, word: &str) -> bool {
        let len = word.chars().count();
        if len < self.min_len || len > self.max_len() {
            return false;
        }
        self.by_len[len].insert(word.to_lowercase().into());
        true
    }

    pub fn len(&self) -> usize {
        self.by_len.iter().map(|words| words.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // case-insensitive.
    pub fn contains(&self, word: &str) -> bool {
        let len = word.chars().count();
        if len < self.min_len || len > self.max_len() {
            return false;
        }
        if word.chars().any(char::is_uppercase) {
            self.by_len[len].contains(word.to_lowercase().as_str())
        } else {
            self.by_len[len].contains(word)
        }
    }

    // Overlong words are reported as given, others lowercased.
    pub fn validate_words<S: AsRef<str>>(&self, words: &[S]) -> WordsVerdict {
        let mut invalid_words = Vec::new();
        for word in words {
            let word = word.as_ref();
            if word.chars().count() > self.max_len() {
                invalid_words.push(word.to_string());
                continue;
            }
            let word = word.to_lowercase();
            if !self.contains(&word) {
                invalid_words.push(word);
            }
        }
        WordsVerdict {
            valid: invalid_words.is_empty(),
            invalid_words,
        }
    }

    // Comma-separated words, any number per line. Returns number of words taken.
    pub fn read_csv<R: std::io::Read>(&mut self, reader: R) -> error::Returns<usize> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut num_words = 0;
        for result in csv_reader.records() {
            let record = result?;
            for word in record.iter() {
                if word.is_empty() {
                    continue;
                }
                if self.insert(word) {
                    num_words += 1;
                } else {
                    tracing::warn!(word, "skipping word of unsupported length");
                }
            }
        }
        Ok(num_words)
    }

    // Reads {n}_letter_words.csv for every supported n.
    pub fn load_dir(
        game_config: &game_config::GameConfig,
        dir: &std::path::Path,
    ) -> error::Returns<Self> {
        let mut lexicon = Self::new(game_config);
        for len in game_config.word_len_range() {
            let path = dir.join(format!("{}_letter_words.csv", len));
            let f = match std::fs::File::open(&path) {
                Ok(f) => f,
                Err(err) => {
                    return_error!(format!("cannot open {}: {}", path.display(), err));
                }
            };
            let num_words = lexicon.read_csv(f)?;
            tracing::debug!(path = %path.display(), num_words, "read word list");
        }
        Ok(lexicon)
    }
}

// One lexicon per level, built once and shared read-only.
#[derive(Default)]
pub struct Dictionary {
    lexicons: [Option<Lexicon>; 3],
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_lexicon(&mut self, level: Level, lexicon: Lexicon) {
        self.lexicons[level.index()] = Some(lexicon);
    }

    pub fn lexicon(&self, level: Level) -> Result<&Lexicon, DictionaryError> {
        self.lexicons[level.index()]
            .as_ref()
            .ok_or_else(|| DictionaryError::Unavailable {
                level,
                reason: "not loaded".into(),
            })
    }

    // Never valid for a level that is not loaded.
    pub fn lookup(&self, level: Level, word: &str) -> bool {
        self.lexicons[level.index()]
            .as_ref()
            .is_some_and(|lexicon| lexicon.contains(word))
    }

    // root/beginner, root/intermediate, root/expert.
    pub fn load_dir(
        game_config: &game_config::GameConfig,
        root: &std::path::Path,
    ) -> Result<Self, DictionaryError> {
        let mut dictionary = Self::new();
        for level in Level::ALL {
            let lexicon = Lexicon::load_dir(game_config, &root.join(level.dir_name())).map_err(
                |err| DictionaryError::Unavailable {
                    level,
                    reason: err.to_string(),
                },
            )?;
            tracing::info!(%level, num_words = lexicon.len(), "loaded dictionary");
            dictionary.set_lexicon(level, lexicon);
        }
        Ok(dictionary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon(words: &[&str]) -> Lexicon {
        Lexicon::from_words(&game_config::make_english_game_config(), words)
    }

    #[test]
    fn lookup_is_case_insensitive_and_bucketed() {
        let lexicon = lexicon(&["apple", "QI", "a", "abcdefghijklm"]);
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains("APPLE"));
        assert!(lexicon.contains("apple"));
        assert!(lexicon.contains("qi"));
        assert!(!lexicon.contains("a"));
        assert!(!lexicon.contains("appl"));
        assert!(!lexicon.contains(""));
        assert!(!lexicon.contains("abcdefghijklm"));
    }

    #[test]
    fn validate_words_reports_invalid() {
        let lexicon = lexicon(&["cat", "at"]);
        assert_eq!(
            lexicon.validate_words(&["CAT", "at"]),
            WordsVerdict {
                valid: true,
                invalid_words: vec![],
            }
        );
        assert_eq!(
            lexicon.validate_words(&["CAT", "TAC", "ABCDEFGHIJKLM"]),
            WordsVerdict {
                valid: false,
                invalid_words: vec!["tac".into(), "ABCDEFGHIJKLM".into()],
            }
        );
        let json = serde_json::to_value(lexicon.validate_words(&["X"])).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "valid": false, "invalidWords": ["x"] })
        );
    }

    #[test]
    fn reads_comma_separated_lists() {
        let mut lexicon = lexicon(&[]);
        let n = lexicon
            .read_csv("aa,ab, ad\nzebra,,q\n".as_bytes())
            .unwrap();
        assert_eq!(n, 4);
        assert!(lexicon.contains("AD"));
        assert!(lexicon.contains("zebra"));
        assert!(!lexicon.contains("q"));
    }

    #[test]
    fn levels_parse_and_print() {
        assert_eq!("expert".parse::<Level>().unwrap(), Level::Expert);
        assert_eq!("BEGINNER".parse::<Level>().unwrap(), Level::Beginner);
        assert!("novice".parse::<Level>().is_err());
        assert_eq!(Level::Intermediate.to_string(), "INTERMEDIATE");
        assert_eq!(
            serde_json::to_string(&Level::Expert).unwrap(),
            "\"EXPERT\""
        );
    }

    #[test]
    fn missing_level_is_unavailable() {
        let mut dictionary = Dictionary::new();
        dictionary.set_lexicon(Level::Expert, lexicon(&["cat"]));
        assert!(dictionary.lookup(Level::Expert, "Cat"));
        assert!(!dictionary.lookup(Level::Beginner, "cat"));
        let err = dictionary.lexicon(Level::Beginner).err().unwrap();
        assert_eq!(
            err.to_string(),
            "dictionary for BEGINNER is unavailable: not loaded"
        );
    }

    #[test]
    fn loads_level_directories() {
        let game_config = game_config::make_english_game_config();
        let root = std::env::temp_dir().join(format!("tilewise-dict-{}", std::process::id()));
        for level in Level::ALL {
            let dir = root.join(level.dir_name());
            std::fs::create_dir_all(&dir).unwrap();
            for len in game_config.word_len_range() {
                let words = match len {
                    2 => "at,ta",
                    3 => "cat,act",
                    _ => "",
                };
                std::fs::write(dir.join(format!("{}_letter_words.csv", len)), words).unwrap();
            }
        }
        let dictionary = Dictionary::load_dir(&game_config, &root).unwrap();
        for level in Level::ALL {
            assert_eq!(dictionary.lexicon(level).unwrap().len(), 4);
        }
        assert!(dictionary.lookup(Level::Intermediate, "ACT"));

        std::fs::remove_file(root.join("expert").join("7_letter_words.csv")).unwrap();
        let err = Dictionary::load_dir(&game_config, &root).err().unwrap();
        assert!(err.to_string().starts_with("dictionary for EXPERT is unavailable"));
        std::fs::remove_dir_all(&root).unwrap();
    }
}
