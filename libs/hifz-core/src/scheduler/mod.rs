//! Spaced repetition scheduling for memorized surahs.
//!
//! Memory strength decays exponentially from an error-adjusted ceiling:
//! - Base strength: 100 minus a fixed penalty per recorded error
//! - Strength: base * e^(-rate * days since last review)
//! - Overdue: days since review beyond a one-week grace period

pub mod cache;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::surah::{Surah, SurahTable};
use crate::types::{LessonPosition, MasteryRecord, RevisionItem, RevisionType};

pub use cache::AgendaCache;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Maximum items shown per revision category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaLimits {
    pub sabqi: usize,
    pub sabq_para: usize,
    pub manzil: usize,
}

impl Default for AgendaLimits {
    fn default() -> Self {
        Self {
            sabqi: 1,
            sabq_para: 5,
            manzil: 7,
        }
    }
}

/// Coarse label for a memory strength value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryHealth {
    Strong,
    Fair,
    Weak,
}

impl MemoryHealth {
    pub fn from_strength(strength: u8) -> Self {
        if strength > 70 {
            Self::Strong
        } else if strength > 40 {
            Self::Fair
        } else {
            Self::Weak
        }
    }
}

/// A triaged revision agenda.
///
/// `sabqi`, `sabq_para` and `manzil` are prefixes of `all_items` restricted
/// to their type, so they share its ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionAgenda {
    pub sabqi: Vec<RevisionItem>,
    pub sabq_para: Vec<RevisionItem>,
    pub manzil: Vec<RevisionItem>,
    pub all_items: Vec<RevisionItem>,
    pub overdue_count: usize,
    pub average_strength: u8,
    pub health: MemoryHealth,
}

/// Revision scheduler with configurable decay parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct RevisionScheduler {
    /// Fraction of strength lost per day, applied exponentially.
    pub decay_rate: f64,
    /// Strength ceiling lost per recorded error.
    pub error_penalty: u32,
    /// Days after a review before a surah counts as overdue.
    pub grace_days: u32,
    pub limits: AgendaLimits,
}

impl Default for RevisionScheduler {
    fn default() -> Self {
        Self {
            decay_rate: 0.1,
            error_penalty: 5,
            grace_days: 7,
            limits: AgendaLimits::default(),
        }
    }
}

impl RevisionScheduler {
    /// Whole days elapsed since `last_review`, rounded down.
    ///
    /// A missing review date counts as reviewed at `now`. Future dates give a
    /// negative count.
    pub fn days_since(last_review: Option<DateTime<Utc>>, now: DateTime<Utc>) -> i64 {
        match last_review {
            Some(at) => (now - at).num_milliseconds().div_euclid(MILLIS_PER_DAY),
            None => 0,
        }
    }

    /// Error-adjusted strength ceiling, 0-100.
    pub fn base_strength(&self, error_count: u32) -> u32 {
        100u32.saturating_sub(error_count.saturating_mul(self.error_penalty))
    }

    /// Decayed memory strength, clamped to 0-100.
    pub fn memory_strength(&self, error_count: u32, days_since_review: i64) -> u8 {
        let base = self.base_strength(error_count) as f64;
        let decayed = base * (-self.decay_rate * days_since_review as f64).exp();
        // Future-dated reviews would otherwise grow past the ceiling.
        decayed.round().clamp(0.0, 100.0) as u8
    }

    /// Days past the grace period, never negative.
    pub fn days_overdue(&self, days_since_review: i64) -> u32 {
        let overdue = days_since_review - i64::from(self.grace_days);
        overdue.clamp(0, i64::from(u32::MAX)) as u32
    }

    /// Classify a surah relative to today's lesson.
    pub fn classify(surah: &Surah, position: LessonPosition) -> RevisionType {
        if surah.id == position.current_surah_id {
            RevisionType::Sabqi
        } else if surah.juz.contains(position.current_juz) {
            RevisionType::SabqPara
        } else {
            RevisionType::Manzil
        }
    }

    /// Score every passed record, weakest first.
    ///
    /// Failed records and unknown surah ids produce nothing. Equal strengths
    /// keep their input order.
    pub fn revision_items(
        &self,
        table: &SurahTable,
        records: &[MasteryRecord],
        position: LessonPosition,
        now: DateTime<Utc>,
    ) -> Vec<RevisionItem> {
        let mut items: Vec<RevisionItem> = records
            .iter()
            .filter(|r| r.passed)
            .filter_map(|record| {
                let surah = table.get(record.surah_id)?;
                let days = Self::days_since(record.last_exam_date, now);
                let memory_strength = self.memory_strength(record.error_count, days);

                Some(RevisionItem {
                    surah_id: surah.id,
                    surah_name: surah.name.clone(),
                    surah_transliteration: surah.transliteration.clone(),
                    revision_type: Self::classify(surah, position),
                    priority: memory_strength,
                    memory_strength,
                    last_reviewed_at: record.last_exam_date,
                    days_overdue: self.days_overdue(days),
                })
            })
            .collect();

        // sort_by_key is stable
        items.sort_by_key(|item| item.priority);
        items
    }

    /// Build the full agenda for a mastery snapshot.
    pub fn agenda(
        &self,
        table: &SurahTable,
        records: &[MasteryRecord],
        position: LessonPosition,
        now: DateTime<Utc>,
    ) -> RevisionAgenda {
        let all_items = self.revision_items(table, records, position, now);

        let take = |kind: RevisionType, limit: usize| -> Vec<RevisionItem> {
            all_items
                .iter()
                .filter(|i| i.revision_type == kind)
                .take(limit)
                .cloned()
                .collect()
        };

        let sabqi = take(RevisionType::Sabqi, self.limits.sabqi);
        let sabq_para = take(RevisionType::SabqPara, self.limits.sabq_para);
        let manzil = take(RevisionType::Manzil, self.limits.manzil);

        let overdue_count = all_items.iter().filter(|i| i.days_overdue > 0).count();
        let average_strength = average_strength(&all_items);

        RevisionAgenda {
            sabqi,
            sabq_para,
            manzil,
            all_items,
            overdue_count,
            average_strength,
            health: MemoryHealth::from_strength(average_strength),
        }
    }
}

/// Rounded mean strength; an empty list reports full health.
fn average_strength(items: &[RevisionItem]) -> u8 {
    if items.is_empty() {
        return 100;
    }
    let total: u32 = items.iter().map(|i| u32::from(i.memory_strength)).sum();
    (total as f64 / items.len() as f64).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    fn record(surah_id: u32, days_ago: Option<i64>, error_count: u32, passed: bool) -> MasteryRecord {
        MasteryRecord {
            surah_id,
            last_exam_date: days_ago.map(|d| now() - Duration::days(d)),
            error_count,
            passed,
        }
    }

    fn position(current_surah_id: u32, current_juz: u8) -> LessonPosition {
        LessonPosition {
            current_surah_id,
            current_juz,
        }
    }

    #[test]
    fn an_nas_a_week_ago_is_same_juz_review() {
        let table = SurahTable::standard();
        let scheduler = RevisionScheduler::default();
        let items = scheduler.revision_items(
            &table,
            &[record(114, Some(7), 0, true)],
            position(1, 30),
            now(),
        );

        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.surah_transliteration, "An-Nas");
        assert_eq!(item.revision_type, RevisionType::SabqPara);
        assert_eq!(item.memory_strength, 50);
        assert_eq!(item.priority, 50);
        assert_eq!(item.days_overdue, 0);
    }

    #[test]
    fn undated_current_surah_is_sabqi_at_full_base() {
        let table = SurahTable::standard();
        let scheduler = RevisionScheduler::default();
        let items =
            scheduler.revision_items(&table, &[record(1, None, 2, true)], position(1, 30), now());

        assert_eq!(items[0].revision_type, RevisionType::Sabqi);
        assert_eq!(items[0].memory_strength, 90);
        assert!(items[0].last_reviewed_at.is_none());
    }

    #[test]
    fn unknown_surah_is_dropped() {
        let table = SurahTable::standard();
        let scheduler = RevisionScheduler::default();
        let items = scheduler.revision_items(
            &table,
            &[record(99999, None, 0, true)],
            LessonPosition::default(),
            now(),
        );
        assert!(items.is_empty());
    }

    #[test]
    fn failed_records_are_excluded() {
        let table = SurahTable::standard();
        let scheduler = RevisionScheduler::default();
        let records = vec![
            record(110, Some(3), 0, false),
            record(111, Some(3), 0, true),
            record(112, Some(30), 9, false),
        ];
        let items = scheduler.revision_items(&table, &records, position(1, 30), now());
        let ids: Vec<u32> = items.iter().map(|i| i.surah_id).collect();
        assert_eq!(ids, vec![111]);
    }

    #[test]
    fn other_juz_goes_to_manzil() {
        let table = SurahTable::standard();
        let scheduler = RevisionScheduler::default();
        let items = scheduler.revision_items(
            &table,
            &[record(18, Some(1), 0, true)],
            position(67, 29),
            now(),
        );
        assert_eq!(items[0].revision_type, RevisionType::Manzil);
    }

    #[test]
    fn multi_juz_surah_matches_any_of_its_juz() {
        let table = SurahTable::standard();
        let scheduler = RevisionScheduler::default();
        // Al-Baqarah spans Juz 1-3.
        let items =
            scheduler.revision_items(&table, &[record(2, Some(1), 0, true)], position(3, 2), now());
        assert_eq!(items[0].revision_type, RevisionType::SabqPara);
    }

    #[test]
    fn current_surah_wins_over_same_juz() {
        let table = SurahTable::standard();
        let scheduler = RevisionScheduler::default();
        let items = scheduler.revision_items(
            &table,
            &[record(114, Some(1), 0, true)],
            position(114, 30),
            now(),
        );
        assert_eq!(items[0].revision_type, RevisionType::Sabqi);
    }

    #[test]
    fn errors_lower_the_ceiling() {
        let scheduler = RevisionScheduler::default();
        assert_eq!(scheduler.base_strength(0), 100);
        assert_eq!(scheduler.base_strength(3), 85);
        assert_eq!(scheduler.base_strength(20), 0);
        assert_eq!(scheduler.base_strength(u32::MAX), 0);
        assert_eq!(scheduler.memory_strength(25, 0), 0);
    }

    #[test]
    fn strength_decays_toward_zero() {
        let scheduler = RevisionScheduler::default();
        assert_eq!(scheduler.memory_strength(0, 0), 100);
        assert_eq!(scheduler.memory_strength(0, 1), 90);
        assert_eq!(scheduler.memory_strength(0, 10), 37);
        assert_eq!(scheduler.memory_strength(0, 100), 0);
    }

    #[test]
    fn future_review_is_clamped_to_100() {
        let scheduler = RevisionScheduler::default();
        assert_eq!(scheduler.memory_strength(0, -5), 100);
        // 90 * e^0.5 would be 148
        assert_eq!(scheduler.memory_strength(2, -5), 100);
    }

    #[test]
    fn days_since_floors_partial_days() {
        let n = now();
        assert_eq!(RevisionScheduler::days_since(None, n), 0);
        assert_eq!(RevisionScheduler::days_since(Some(n - Duration::hours(23)), n), 0);
        assert_eq!(RevisionScheduler::days_since(Some(n - Duration::hours(49)), n), 2);
        assert_eq!(RevisionScheduler::days_since(Some(n + Duration::hours(1)), n), -1);
    }

    #[test]
    fn overdue_only_after_a_week() {
        let scheduler = RevisionScheduler::default();
        assert_eq!(scheduler.days_overdue(-3), 0);
        assert_eq!(scheduler.days_overdue(7), 0);
        assert_eq!(scheduler.days_overdue(8), 1);
        assert_eq!(scheduler.days_overdue(30), 23);
    }

    #[test]
    fn items_sorted_weakest_first_with_stable_ties() {
        let table = SurahTable::standard();
        let scheduler = RevisionScheduler::default();
        let records = vec![
            record(113, Some(0), 0, true),
            record(112, Some(20), 0, true),
            record(111, Some(5), 0, true),
            record(110, Some(5), 0, true),
        ];
        let items = scheduler.revision_items(&table, &records, position(1, 30), now());
        let ids: Vec<u32> = items.iter().map(|i| i.surah_id).collect();
        assert_eq!(ids, vec![112, 111, 110, 113]);
        assert!(items.windows(2).all(|w| w[0].priority <= w[1].priority));
        assert!(items.iter().all(|i| i.priority == i.memory_strength));
    }

    #[test]
    fn empty_snapshot_reports_full_health() {
        let table = SurahTable::standard();
        let agenda = RevisionScheduler::default().agenda(&table, &[], LessonPosition::default(), now());
        assert!(agenda.sabqi.is_empty());
        assert!(agenda.sabq_para.is_empty());
        assert!(agenda.manzil.is_empty());
        assert!(agenda.all_items.is_empty());
        assert_eq!(agenda.overdue_count, 0);
        assert_eq!(agenda.average_strength, 100);
        assert_eq!(agenda.health, MemoryHealth::Strong);
    }

    #[test]
    fn agenda_views_are_capped_prefixes() {
        let table = SurahTable::standard();
        let scheduler = RevisionScheduler::default();
        // Juz 30 surahs (78-114) go to sabq_para, Juz 29 (67-77) to manzil.
        let records: Vec<MasteryRecord> = (67..=90)
            .map(|id| record(id, Some(i64::from(id % 13)), 0, true))
            .chain(std::iter::once(record(1, Some(2), 0, true)))
            .collect();
        let agenda = scheduler.agenda(&table, &records, position(1, 30), now());

        assert_eq!(agenda.sabqi.len(), 1);
        assert_eq!(agenda.sabq_para.len(), 5);
        assert_eq!(agenda.manzil.len(), 7);

        for (view, kind) in [
            (&agenda.sabqi, RevisionType::Sabqi),
            (&agenda.sabq_para, RevisionType::SabqPara),
            (&agenda.manzil, RevisionType::Manzil),
        ] {
            let expected: Vec<RevisionItem> = agenda
                .all_items
                .iter()
                .filter(|i| i.revision_type == kind)
                .take(view.len())
                .cloned()
                .collect();
            assert_eq!(view, &expected);
        }
    }

    #[test]
    fn health_counts_overdue_and_rounds_average() {
        let table = SurahTable::standard();
        let scheduler = RevisionScheduler::default();
        let records = vec![
            record(112, Some(7), 0, true),  // 50, on track
            record(113, Some(10), 0, true), // 37, 3 days overdue
            record(114, None, 0, true),     // 100
        ];
        let agenda = scheduler.agenda(&table, &records, position(1, 30), now());
        assert_eq!(agenda.overdue_count, 1);
        // (50 + 37 + 100) / 3 = 62.33
        assert_eq!(agenda.average_strength, 62);
        assert_eq!(agenda.health, MemoryHealth::Fair);
    }

    #[test]
    fn agenda_is_deterministic() {
        let table = SurahTable::standard();
        let scheduler = RevisionScheduler::default();
        let records = vec![record(5, Some(12), 4, true), record(80, Some(2), 1, true)];
        let a = scheduler.agenda(&table, &records, position(80, 30), now());
        let b = scheduler.agenda(&table, &records, position(80, 30), now());
        assert_eq!(a, b);
    }

    #[test]
    fn health_bands() {
        assert_eq!(MemoryHealth::from_strength(100), MemoryHealth::Strong);
        assert_eq!(MemoryHealth::from_strength(71), MemoryHealth::Strong);
        assert_eq!(MemoryHealth::from_strength(70), MemoryHealth::Fair);
        assert_eq!(MemoryHealth::from_strength(41), MemoryHealth::Fair);
        assert_eq!(MemoryHealth::from_strength(40), MemoryHealth::Weak);
        assert_eq!(MemoryHealth::from_strength(0), MemoryHealth::Weak);
    }
}
