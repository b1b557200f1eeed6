//! Memoized agenda computation.
//!
//! Clients that rebuild their agenda on every render hold one `AgendaCache`
//! per student. The cache owns the surah table it computes against, so a
//! remembered agenda always belongs to that table.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::{RevisionAgenda, RevisionScheduler};
use crate::surah::SurahTable;
use crate::types::{LessonPosition, MasteryRecord};

#[derive(Debug, Clone, PartialEq)]
struct AgendaKey {
    records: Vec<MasteryRecord>,
    position: LessonPosition,
    now: DateTime<Utc>,
}

/// Remembers the last agenda and reuses it while the inputs stay the same.
#[derive(Debug, Clone)]
pub struct AgendaCache {
    scheduler: RevisionScheduler,
    table: Arc<SurahTable>,
    last: Option<(AgendaKey, RevisionAgenda)>,
    computations: u64,
}

impl AgendaCache {
    pub fn new(scheduler: RevisionScheduler, table: Arc<SurahTable>) -> Self {
        Self {
            scheduler,
            table,
            last: None,
            computations: 0,
        }
    }

    pub fn scheduler(&self) -> &RevisionScheduler {
        &self.scheduler
    }

    pub fn table(&self) -> &SurahTable {
        &self.table
    }

    /// Swap the surah table. The remembered agenda is dropped.
    pub fn set_table(&mut self, table: Arc<SurahTable>) {
        self.table = table;
        self.last = None;
    }

    /// How many times the agenda was actually recomputed.
    pub fn computations(&self) -> u64 {
        self.computations
    }

    /// Return the agenda for these inputs, recomputing only when they differ
    /// from the previous call.
    pub fn agenda(
        &mut self,
        records: &[MasteryRecord],
        position: LessonPosition,
        now: DateTime<Utc>,
    ) -> &RevisionAgenda {
        let hit = matches!(
            &self.last,
            Some((key, _)) if key.position == position && key.now == now && key.records == records
        );

        if !hit {
            self.last = None;
        }

        let scheduler = &self.scheduler;
        let table = &self.table;
        let computations = &mut self.computations;
        let (_, agenda) = self.last.get_or_insert_with(|| {
            *computations += 1;
            let key = AgendaKey {
                records: records.to_vec(),
                position,
                now,
            };
            (key, scheduler.agenda(table, records, position, now))
        });
        agenda
    }

    /// Drop the remembered agenda.
    pub fn clear(&mut self) {
        self.last = None;
    }
}

impl Default for AgendaCache {
    fn default() -> Self {
        Self::new(RevisionScheduler::default(), Arc::new(SurahTable::standard()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surah::JuzMembership;
    use crate::types::RevisionType;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 10, 8, 0, 0).unwrap()
    }

    fn records() -> Vec<MasteryRecord> {
        vec![MasteryRecord {
            surah_id: 112,
            last_exam_date: Some(Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap()),
            error_count: 1,
            passed: true,
        }]
    }

    #[test]
    fn identical_inputs_reuse_result() {
        let mut cache = AgendaCache::default();
        let records = records();

        let first = cache
            .agenda(&records, LessonPosition::default(), now())
            .clone();
        let second = cache
            .agenda(&records, LessonPosition::default(), now())
            .clone();

        assert_eq!(first, second);
        assert_eq!(cache.computations(), 1);
    }

    #[test]
    fn changed_inputs_recompute() {
        let mut cache = AgendaCache::default();
        let records = records();

        cache.agenda(&records, LessonPosition::default(), now());
        let moved = LessonPosition {
            current_surah_id: 112,
            current_juz: 30,
        };
        let agenda = cache.agenda(&records, moved, now());
        assert_eq!(agenda.sabqi.len(), 1);

        cache.agenda(&records, moved, now() + chrono::Duration::days(1));
        cache.agenda(&[], moved, now() + chrono::Duration::days(1));
        assert_eq!(cache.computations(), 4);
    }

    #[test]
    fn clear_forces_recompute() {
        let mut cache = AgendaCache::default();
        cache.agenda(&records(), LessonPosition::default(), now());
        cache.clear();
        cache.agenda(&records(), LessonPosition::default(), now());
        assert_eq!(cache.computations(), 2);
    }

    #[test]
    fn swapping_table_recomputes() {
        let mut cache = AgendaCache::default();
        let records = vec![MasteryRecord {
            surah_id: 114,
            last_exam_date: None,
            error_count: 0,
            passed: true,
        }];
        let position = LessonPosition {
            current_surah_id: 1,
            current_juz: 29,
        };

        let item = cache.agenda(&records, position, now()).all_items[0].clone();
        assert_eq!(item.surah_transliteration, "An-Nas");
        assert_eq!(item.revision_type, RevisionType::Manzil);

        let surahs = SurahTable::standard()
            .iter()
            .cloned()
            .map(|mut surah| {
                if surah.id == 114 {
                    surah.transliteration = "Renamed".to_string();
                    surah.juz = JuzMembership::Span(vec![29, 30]);
                }
                surah
            })
            .collect();
        cache.set_table(Arc::new(SurahTable::new(surahs).unwrap()));

        let item = cache.agenda(&records, position, now()).all_items[0].clone();
        assert_eq!(item.surah_transliteration, "Renamed");
        assert_eq!(item.revision_type, RevisionType::SabqPara);
        assert_eq!(cache.computations(), 2);
    }
}
