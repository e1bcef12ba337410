//! Property tests for roll conventions and schedule generation.

use accrual_core::calendars::{Adjuster, BusinessDayCalendar, BusinessDayConvention, Calendar};
use accrual_core::{Date, Tenor};
use accrual_schedule::{RollConvention, Schedule};
use proptest::prelude::*;

fn sifma() -> BusinessDayCalendar {
    BusinessDayCalendar::from_strings(
        [
            "2025-01-01",
            "2025-01-20",
            "2025-02-17",
            "2025-04-18",
            "2025-05-26",
            "2025-06-19",
            "2025-07-04",
            "2025-09-01",
            "2025-10-13",
            "2025-11-11",
            "2025-11-27",
            "2025-12-25",
        ],
        "1111100",
    )
    .unwrap()
}

fn date_2024_2026() -> impl Strategy<Value = Date> {
    (0i64..3 * 366).prop_map(|offset| Date::from_ymd(2024, 1, 1).unwrap().add_days(offset))
}

fn monthly_tenor() -> impl Strategy<Value = Tenor> {
    prop_oneof![
        prop::sample::select(vec![1, 2, 3, 6, 12]).prop_map(Tenor::months),
        (1i32..3).prop_map(Tenor::years),
    ]
}

fn convention() -> impl Strategy<Value = BusinessDayConvention> {
    prop::sample::select(BusinessDayConvention::all().to_vec())
}

fn roll() -> impl Strategy<Value = RollConvention> {
    prop_oneof![
        (1u32..=31).prop_map(RollConvention::DayOfMonth),
        Just(RollConvention::EndOfMonth),
        Just(RollConvention::StartOfMonth),
    ]
}

/// Walks `steps` regular dates from `start`.
fn walk(roll: RollConvention, start: Date, tenor: Tenor, steps: usize) -> Date {
    (0..steps).fold(start, |d, _| roll.next(d, tenor).unwrap())
}

proptest! {
    #[test]
    fn next_and_previous_straddle_the_date(
        roll in roll(),
        tenor in monthly_tenor(),
        date in date_2024_2026(),
    ) {
        prop_assert!(roll.previous(date, tenor).unwrap() < date);
        prop_assert!(roll.next(date, tenor).unwrap() > date);
    }

    #[test]
    fn regular_schedule_is_contiguous_and_regular(
        start in date_2024_2026(),
        tenor in monthly_tenor(),
        steps in 1usize..40,
        eom in any::<bool>(),
        conv in convention(),
    ) {
        let effective = if eom { start.end_of_month() } else { start };
        let roll = RollConvention::from_flags(effective, eom, false).unwrap();
        let termination = walk(roll, effective, tenor, steps);

        let schedule = Schedule::builder(effective, termination, tenor, sifma(), conv)
            .end_of_month(eom)
            .build()
            .unwrap();

        prop_assert_eq!(schedule.len(), steps);
        prop_assert_eq!(schedule.roll_convention(), roll);
        prop_assert_eq!(schedule.periods()[0].unadj_start(), effective);
        prop_assert_eq!(schedule.periods()[steps - 1].unadj_end(), termination);
        for pair in schedule.periods().windows(2) {
            prop_assert_eq!(pair[0].unadj_end(), pair[1].unadj_start());
            prop_assert_eq!(pair[0].end(), pair[1].start());
        }
        prop_assert_eq!(schedule.regular_periods().unwrap().len(), steps);
    }

    #[test]
    fn adjusted_boundaries_come_from_the_adjuster(
        start in date_2024_2026(),
        steps in 1usize..24,
        conv in convention(),
    ) {
        let tenor = Tenor::months(1);
        let termination = walk(RollConvention::DayOfMonth(start.day()), start, tenor, steps);
        let schedule = Schedule::builder(start, termination, tenor, sifma(), conv)
            .build()
            .unwrap();

        let adjuster = Adjuster::new(sifma(), conv);
        for period in &schedule {
            prop_assert_eq!(period.start(), adjuster.adjust(period.unadj_start()).unwrap());
            prop_assert_eq!(period.end(), adjuster.adjust(period.unadj_end()).unwrap());
            if conv != BusinessDayConvention::Unadjusted {
                prop_assert!(schedule.adjuster().calendar().is_business_day(period.end()));
            }
        }
    }

    #[test]
    fn stubs_bracket_the_regular_grid(
        effective in date_2024_2026(),
        front_gap in 1i64..90,
        steps in 0usize..10,
        back_gap in 1i64..90,
    ) {
        let tenor = Tenor::months(3);
        let front = effective.add_days(front_gap);
        let back = walk(RollConvention::DayOfMonth(front.day()), front, tenor, steps);
        let termination = back.add_days(back_gap);

        let schedule = Schedule::builder(
            effective,
            termination,
            tenor,
            sifma(),
            BusinessDayConvention::ModifiedFollowing,
        )
        .front_stub(front)
        .back_stub(back)
        .build()
        .unwrap();

        prop_assert_eq!(schedule.len(), steps + 2);
        prop_assert_eq!(schedule.effective(), effective);
        prop_assert_eq!(schedule.termination(), termination);
        let dates = schedule.unadjusted_dates();
        prop_assert_eq!(dates.len(), schedule.len() + 1);
        prop_assert!(dates.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(dates[1], front);
        prop_assert_eq!(dates[dates.len() - 2], back);
    }
}
