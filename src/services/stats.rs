use chrono::{Datelike, Weekday};
use std::collections::BTreeMap;

use crate::{
    services::predictor::parse_target_date,
    structs::{
        records::{SalesRecord, Shift},
        stats::{
            ChartPoint, ChartSeries, ShiftStats, StaffingYield, StatsOverview, WeekdayAverage,
        },
    },
};

const WEEKDAYS: [(Weekday, &str); 7] = [
    (Weekday::Mon, "Mon"),
    (Weekday::Tue, "Tue"),
    (Weekday::Wed, "Wed"),
    (Weekday::Thu, "Thu"),
    (Weekday::Fri, "Fri"),
    (Weekday::Sat, "Sat"),
    (Weekday::Sun, "Sun"),
];

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

pub fn shift_stats<'a, I>(records: I) -> ShiftStats
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    let mut shifts = 0usize;
    let mut total_sales = 0.0;
    // 單筆是 u32，加總用 u64 才不會溢位
    let mut total_covers = 0u64;
    let mut total_staff = 0u64;

    for record in records {
        shifts += 1;
        total_sales += record.sales;
        total_covers += u64::from(record.covers);
        total_staff += u64::from(record.foh_staff);
    }

    ShiftStats {
        shifts,
        total_sales,
        total_covers,
        avg_sales_per_cover: ratio(total_sales, total_covers as f64),
        avg_covers_per_staff: ratio(total_covers as f64, total_staff as f64),
        avg_sales_per_staff: ratio(total_sales, total_staff as f64),
        avg_staff_per_shift: ratio(total_staff as f64, shifts as f64),
    }
}

pub fn overview(records: &[SalesRecord]) -> StatsOverview {
    StatsOverview {
        overall: shift_stats(records),
        lunch: shift_stats(records.iter().filter(|r| r.shift == Shift::Lunch)),
        dinner: shift_stats(records.iter().filter(|r| r.shift == Shift::Dinner)),
    }
}

/// 依日期排序，同一天午餐在前
pub fn timeline(records: &[SalesRecord]) -> Vec<ChartPoint> {
    let mut points: Vec<ChartPoint> = records
        .iter()
        .map(|r| ChartPoint {
            date: r.date,
            shift: r.shift,
            sales: r.sales,
            covers: r.covers,
            foh_staff: r.foh_staff,
        })
        .collect();

    points.sort_by_key(|p| (p.date, p.shift));
    points
}

pub fn weekday_averages(records: &[SalesRecord], target: Option<Weekday>) -> Vec<WeekdayAverage> {
    WEEKDAYS
        .iter()
        .flat_map(|&(weekday, day_name)| {
            Shift::ALL.into_iter().map(move |shift| {
                let matching: Vec<&SalesRecord> = records
                    .iter()
                    .filter(|r| r.shift == shift && r.date.weekday() == weekday)
                    .collect();
                let samples = matching.len();
                let covers: f64 = matching.iter().map(|r| r.covers as f64).sum();
                let sales: f64 = matching.iter().map(|r| r.sales).sum();

                WeekdayAverage {
                    day_name,
                    shift,
                    samples,
                    avg_covers: ratio(covers, samples as f64),
                    avg_sales: ratio(sales, samples as f64),
                    is_target_day: target == Some(weekday),
                }
            })
        })
        .collect()
}

pub fn staffing_yield(records: &[SalesRecord]) -> Vec<StaffingYield> {
    let mut groups: BTreeMap<u32, (usize, f64, f64)> = BTreeMap::new();

    for record in records {
        let entry = groups.entry(record.foh_staff).or_default();
        entry.0 += 1;
        entry.1 += record.sales;
        entry.2 += record.covers as f64;
    }

    groups
        .into_iter()
        .map(|(foh_staff, (samples, sales, covers))| StaffingYield {
            foh_staff,
            samples,
            avg_sales: ratio(sales, samples as f64),
            avg_covers: ratio(covers, samples as f64),
        })
        .collect()
}

pub fn chart_series(records: &[SalesRecord], target_date: &str) -> ChartSeries {
    let target = parse_target_date(target_date).map(|d| d.weekday());

    ChartSeries {
        timeline: timeline(records),
        weekday_averages: weekday_averages(records, target),
        staffing_yield: staffing_yield(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(date: &str, shift: Shift, sales: f64, covers: u32, foh_staff: u32) -> SalesRecord {
        SalesRecord {
            id: format!("{date}-{shift}"),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            shift,
            sales,
            foh_staff,
            covers,
            reservations: covers / 2,
            walkins: covers - covers / 2,
        }
    }

    fn history() -> Vec<SalesRecord> {
        vec![
            record("2025-02-08", Shift::Dinner, 2400.0, 80, 3),
            record("2025-02-07", Shift::Dinner, 3000.0, 100, 4),
            record("2025-02-07", Shift::Lunch, 500.0, 20, 1),
        ]
    }

    #[test]
    fn overview_splits_by_shift() {
        let stats = overview(&history());
        assert_eq!(stats.overall.shifts, 3);
        assert_eq!(stats.overall.total_covers, 200);
        assert_eq!(stats.overall.total_sales, 5900.0);
        assert_eq!(stats.overall.avg_sales_per_cover, 29.5);
        assert_eq!(stats.overall.avg_covers_per_staff, 25.0);
        assert_eq!(stats.lunch.shifts, 1);
        assert_eq!(stats.lunch.avg_sales_per_staff, 500.0);
        assert_eq!(stats.dinner.avg_staff_per_shift, 3.5);
    }

    #[test]
    fn empty_overview_has_no_nan() {
        let stats = overview(&[]);
        assert_eq!(stats.overall, ShiftStats::default());
    }

    #[test]
    fn huge_covers_do_not_overflow_totals() {
        let records = vec![
            record("2025-02-07", Shift::Lunch, 900.0, 3_000_000_000, u32::MAX),
            record("2025-02-08", Shift::Lunch, 900.0, 3_000_000_000, u32::MAX),
        ];
        let stats = overview(&records);

        assert_eq!(stats.lunch.total_covers, 6_000_000_000);
        assert_eq!(stats.overall.avg_covers_per_staff, 6_000_000_000.0 / (2.0 * u32::MAX as f64));
        assert_eq!(stats.overall.avg_staff_per_shift, u32::MAX as f64);
    }

    #[test]
    fn timeline_is_chronological() {
        let points = timeline(&history());
        let order: Vec<(String, Shift)> = points
            .iter()
            .map(|p| (p.date.to_string(), p.shift))
            .collect();
        assert_eq!(
            order,
            vec![
                ("2025-02-07".to_string(), Shift::Lunch),
                ("2025-02-07".to_string(), Shift::Dinner),
                ("2025-02-08".to_string(), Shift::Dinner),
            ]
        );
    }

    #[test]
    fn weekday_averages_flag_target_day() {
        let averages = weekday_averages(&history(), Some(Weekday::Fri));
        assert_eq!(averages.len(), 14);

        let friday_dinner = averages
            .iter()
            .find(|a| a.day_name == "Fri" && a.shift == Shift::Dinner)
            .unwrap();
        assert!(friday_dinner.is_target_day);
        assert_eq!(friday_dinner.samples, 1);
        assert_eq!(friday_dinner.avg_covers, 100.0);

        let monday_lunch = averages
            .iter()
            .find(|a| a.day_name == "Mon" && a.shift == Shift::Lunch)
            .unwrap();
        assert!(!monday_lunch.is_target_day);
        assert_eq!(monday_lunch.avg_sales, 0.0);
    }

    #[test]
    fn staffing_yield_groups_by_staff_count() {
        let rows = staffing_yield(&history());
        let staff: Vec<u32> = rows.iter().map(|r| r.foh_staff).collect();
        assert_eq!(staff, vec![1, 3, 4]);
        assert_eq!(rows[2].avg_sales, 3000.0);
    }
}
