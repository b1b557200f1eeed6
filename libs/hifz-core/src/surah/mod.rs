//! Surah reference table.
//!
//! 114 fixed entries with ayah counts and Juz membership. The table is built
//! once and handed to the scheduler by reference.

mod data;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

/// Number of surahs in the Quran.
pub const SURAH_COUNT: usize = 114;

/// Number of Juz the Quran is divided into.
pub const JUZ_COUNT: u8 = 30;

/// Where a surah was revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Revelation {
    Meccan,
    Medinan,
}

/// Juz membership of a surah: one Juz, or every Juz it straddles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JuzMembership {
    Single(u8),
    Span(Vec<u8>),
}

impl JuzMembership {
    /// Whether the surah has ayahs in `juz`.
    pub fn contains(&self, juz: u8) -> bool {
        match self {
            Self::Single(j) => *j == juz,
            Self::Span(js) => js.contains(&juz),
        }
    }

    /// All Juz numbers, in order.
    pub fn as_slice(&self) -> &[u8] {
        match self {
            Self::Single(j) => std::slice::from_ref(j),
            Self::Span(js) => js,
        }
    }
}

/// One surah's static metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surah {
    pub id: u32,
    pub name: String,
    pub transliteration: String,
    pub translation: String,
    pub total_ayahs: u32,
    pub revelation: Revelation,
    pub juz: JuzMembership,
}

/// Immutable surah table indexed by id.
#[derive(Debug, Clone)]
pub struct SurahTable {
    // Invariant: surahs[i].id == i + 1
    surahs: Vec<Surah>,
}

impl SurahTable {
    /// Build a table from arbitrary entries, validating that it is complete.
    ///
    /// Entries may come in any order; ids 1–114 must each appear exactly once,
    /// every surah needs at least one ayah, and Juz 1–30 must all be covered.
    pub fn new(mut surahs: Vec<Surah>) -> Result<Self> {
        if surahs.len() != SURAH_COUNT {
            return Err(TableError::WrongLength {
                expected: SURAH_COUNT,
                actual: surahs.len(),
            });
        }

        surahs.sort_by_key(|s| s.id);

        if let Some(surah) = surahs
            .iter()
            .find(|s| s.id == 0 || s.id as usize > SURAH_COUNT)
        {
            return Err(TableError::IdOutOfRange { id: surah.id });
        }
        // 114 in-range ids with no repeats means every id is present.
        if let Some(pair) = surahs.windows(2).find(|w| w[0].id == w[1].id) {
            return Err(TableError::DuplicateId { id: pair[0].id });
        }

        let mut covered = [false; JUZ_COUNT as usize];
        for surah in &surahs {
            if surah.total_ayahs == 0 {
                return Err(TableError::NoAyahs { id: surah.id });
            }
            let juz = surah.juz.as_slice();
            if juz.is_empty() {
                return Err(TableError::EmptyJuzSpan { id: surah.id });
            }
            for &j in juz {
                if j == 0 || j > JUZ_COUNT {
                    return Err(TableError::JuzOutOfRange { id: surah.id, juz: j });
                }
                covered[(j - 1) as usize] = true;
            }
        }

        if let Some(missing) = covered.iter().position(|c| !c) {
            return Err(TableError::UncoveredJuz {
                juz: missing as u8 + 1,
            });
        }

        Ok(Self { surahs })
    }

    /// The canonical Hafs table.
    pub fn standard() -> Self {
        Self {
            surahs: data::standard_surahs(),
        }
    }

    /// Look up a surah by id.
    pub fn get(&self, id: u32) -> Option<&Surah> {
        let index = (id as usize).checked_sub(1)?;
        self.surahs.get(index)
    }

    /// Find a surah by its Arabic name or transliteration.
    pub fn find_by_label(&self, label: &str) -> Option<&Surah> {
        let label = label.trim();
        self.surahs
            .iter()
            .find(|s| s.name == label || s.transliteration == label)
    }

    /// Surahs with ayahs in the given Juz, in mushaf order.
    pub fn in_juz(&self, juz: u8) -> impl Iterator<Item = &Surah> {
        self.surahs.iter().filter(move |s| s.juz.contains(juz))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Surah> {
        self.surahs.iter()
    }

    pub fn as_slice(&self) -> &[Surah] {
        &self.surahs
    }

    pub fn len(&self) -> usize {
        self.surahs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surahs.is_empty()
    }
}

impl Default for SurahTable {
    fn default() -> Self {
        Self::standard()
    }
}
