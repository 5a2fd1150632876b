//! Splits the shows attached to a venue or an artist into upcoming and past
//! relative to a reference time.

use chrono::{DateTime, Utc};

/// A show as seen from one side of the booking: the counterpart is the artist
/// when listing a venue's shows and the venue when listing an artist's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledShow {
    pub show_id: i32,
    pub counterpart_id: i32,
    pub counterpart_name: String,
    pub counterpart_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowSchedule {
    pub upcoming: Vec<ScheduledShow>,
    pub past: Vec<ScheduledShow>,
}

/// A show starting exactly at `now` has already started and counts as past.
pub fn is_upcoming(start_time: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    start_time > now
}

impl ShowSchedule {
    /// Both partitions come back sorted by start time, ties broken by show id.
    pub fn partition<I>(now: DateTime<Utc>, shows: I) -> Self
    where
        I: IntoIterator<Item = ScheduledShow>,
    {
        let (mut upcoming, mut past): (Vec<_>, Vec<_>) = shows
            .into_iter()
            .partition(|show| is_upcoming(show.start_time, now));

        upcoming.sort_by_key(|s| (s.start_time, s.show_id));
        past.sort_by_key(|s| (s.start_time, s.show_id));

        Self { upcoming, past }
    }

    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }

    pub fn past_count(&self) -> usize {
        self.past.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty() && self.past.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn show(id: i32, start_time: DateTime<Utc>) -> ScheduledShow {
        ScheduledShow {
            show_id: id,
            counterpart_id: 100 + id,
            counterpart_name: format!("Counterpart {}", id),
            counterpart_image_link: None,
            start_time,
        }
    }

    fn reference_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 20, 0, 0).unwrap()
    }

    #[test]
    fn splits_on_reference_time() {
        let now = reference_time();
        let schedule = ShowSchedule::partition(
            now,
            vec![
                show(1, now - Duration::days(3)),
                show(2, now + Duration::days(1)),
                show(3, now + Duration::minutes(1)),
            ],
        );

        let upcoming: Vec<i32> = schedule.upcoming.iter().map(|s| s.show_id).collect();
        let past: Vec<i32> = schedule.past.iter().map(|s| s.show_id).collect();
        assert_eq!(upcoming, vec![3, 2]);
        assert_eq!(past, vec![1]);
        assert_eq!(schedule.upcoming_count(), 2);
        assert_eq!(schedule.past_count(), 1);
    }

    #[test]
    fn show_starting_now_is_past() {
        let now = reference_time();
        let schedule = ShowSchedule::partition(now, vec![show(1, now)]);

        assert!(schedule.upcoming.is_empty());
        assert_eq!(schedule.past.len(), 1);
    }

    #[test]
    fn partitions_are_sorted_ascending() {
        let now = reference_time();
        let schedule = ShowSchedule::partition(
            now,
            vec![
                show(1, now - Duration::days(1)),
                show(2, now - Duration::days(30)),
                show(3, now + Duration::days(60)),
                show(4, now + Duration::days(2)),
                show(5, now + Duration::days(2)),
            ],
        );

        let upcoming: Vec<i32> = schedule.upcoming.iter().map(|s| s.show_id).collect();
        let past: Vec<i32> = schedule.past.iter().map(|s| s.show_id).collect();
        assert_eq!(upcoming, vec![4, 5, 3]);
        assert_eq!(past, vec![2, 1]);
    }

    #[test]
    fn partitions_are_disjoint_and_cover_input() {
        let now = reference_time();
        let shows: Vec<ScheduledShow> = (0..20)
            .map(|i| show(i, now + Duration::hours(i as i64 * 7 - 70)))
            .collect();

        let schedule = ShowSchedule::partition(now, shows.clone());

        assert_eq!(schedule.upcoming_count() + schedule.past_count(), shows.len());
        for s in &shows {
            let in_upcoming = schedule.upcoming.iter().any(|u| u.show_id == s.show_id);
            let in_past = schedule.past.iter().any(|p| p.show_id == s.show_id);
            assert!(in_upcoming != in_past, "show {} must be in exactly one partition", s.show_id);
            assert_eq!(in_upcoming, s.start_time > now);
        }
    }

    #[test]
    fn empty_input() {
        let schedule = ShowSchedule::partition(reference_time(), Vec::new());
        assert!(schedule.is_empty());
        assert_eq!(schedule, ShowSchedule::default());
    }
}
