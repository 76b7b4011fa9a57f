use std::collections::HashMap;

use chrono::{Duration, NaiveTime};

use crate::error::{Result, StorageError};
use crate::models::{Category, Competitor};

/// Label shown when a competitor's category id does not resolve.
pub const NO_CATEGORY: &str = "No category";

/// One line of the computed start order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartListEntry {
    pub competitor_name: String,
    pub category_name: String,
    pub start_time: String,
}

/// Staggers competitors one minute apart from the enduro's base start time,
/// in the order they were entered.
pub fn build_start_list(
    base_start_time: &str,
    competitors: &[Competitor],
    categories: &[Category],
) -> Result<Vec<StartListEntry>> {
    let base = parse_start_time(base_start_time)?;
    let names: HashMap<i64, &str> = categories
        .iter()
        .map(|category| (category.id, category.name.as_str()))
        .collect();

    Ok(competitors
        .iter()
        .enumerate()
        .map(|(position, competitor)| StartListEntry {
            competitor_name: competitor.name.clone(),
            category_name: names
                .get(&competitor.category_id)
                .map_or_else(|| NO_CATEGORY.to_string(), |name| (*name).to_string()),
            start_time: format_start_time(base + Duration::minutes(position as i64)),
        })
        .collect())
}

/// Start time recorded with a timing entry: the base plus a flat minute.
//
// TODO: stagger by the competitor's position like build_start_list does;
// today a timing entry and the start list disagree for everyone but the
// second starter.
pub fn recorded_start_time(base_start_time: &str) -> Result<String> {
    let base = parse_start_time(base_start_time)?;
    Ok(format_start_time(base + Duration::minutes(1)))
}

/// Parses a stored "HH:MM" start time.
pub fn parse_start_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| StorageError::InvalidTime(value.to_string()))
}

fn format_start_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Formats a second count as HH:MM:SS for display.
pub fn seconds_to_hms(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn competitor(id: i64, name: &str, category_id: i64) -> Competitor {
        Competitor {
            id,
            enduro_id: 1,
            name: name.into(),
            plate: format!("{id:03}"),
            category_id,
        }
    }

    fn category(id: i64, name: &str) -> Category {
        Category {
            id,
            enduro_id: 1,
            name: name.into(),
        }
    }

    #[test]
    fn staggers_one_minute_per_position() {
        let competitors = vec![
            competitor(1, "Ana", 1),
            competitor(2, "Bruno", 2),
            competitor(3, "Carla", 1),
        ];
        let categories = vec![category(1, "Pro"), category(2, "Amateur")];

        let list = build_start_list("08:00", &competitors, &categories).unwrap();

        let times: Vec<&str> = list.iter().map(|e| e.start_time.as_str()).collect();
        assert_eq!(times, ["08:00", "08:01", "08:02"]);
    }

    #[test]
    fn unresolved_category_gets_a_placeholder() {
        let competitors = vec![competitor(1, "Ana", 99)];

        let list = build_start_list("08:00", &competitors, &[]).unwrap();

        assert_eq!(list[0].category_name, NO_CATEGORY);
    }

    #[test]
    fn start_times_wrap_past_midnight() {
        let competitors = vec![competitor(1, "Ana", 1), competitor(2, "Bruno", 1)];

        let list = build_start_list("23:59", &competitors, &[]).unwrap();

        assert_eq!(list[1].start_time, "00:00");
    }

    #[test]
    fn rejects_unparseable_base_time() {
        assert!(matches!(
            build_start_list("soon", &[], &[]),
            Err(StorageError::InvalidTime(_))
        ));
    }

    #[test]
    fn recorded_time_is_base_plus_one_minute() {
        assert_eq!(recorded_start_time("08:00").unwrap(), "08:01");
    }

    #[test]
    fn formats_seconds_as_hms() {
        assert_eq!(seconds_to_hms(125.0), "00:02:05");
        assert_eq!(seconds_to_hms(0.0), "00:00:00");
        assert_eq!(seconds_to_hms(3661.0), "01:01:01");
    }
}
