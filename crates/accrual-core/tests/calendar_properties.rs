//! Property tests for calendars, business day adjustment and day counts.

use accrual_core::calendars::{
    Adjuster, BusinessDayCalendar, BusinessDayConvention, Calendar, Weekmask,
};
use accrual_core::daycounts::{Act360, DayCount};
use accrual_core::types::Date;
use proptest::prelude::*;

const HOLIDAYS: [&str; 12] = [
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
];

fn sifma() -> BusinessDayCalendar {
    BusinessDayCalendar::from_strings(HOLIDAYS, "1111100").unwrap()
}

fn date_2024_2026() -> impl Strategy<Value = Date> {
    (0i64..3 * 366).prop_map(|offset| Date::from_ymd(2024, 1, 1).unwrap().add_days(offset))
}

fn weekmask() -> impl Strategy<Value = [bool; 7]> {
    prop::array::uniform7(any::<bool>()).prop_filter("needs a business day", |m| {
        m.iter().any(|&b| b)
    })
}

fn convention() -> impl Strategy<Value = BusinessDayConvention> {
    prop::sample::select(BusinessDayConvention::all().to_vec())
}

proptest! {
    #[test]
    fn business_day_matches_weekmask_and_holidays(
        flags in weekmask(),
        date in date_2024_2026(),
    ) {
        let mask = Weekmask::new(flags).unwrap();
        let cal = BusinessDayCalendar::new(
            HOLIDAYS.iter().map(|s| Date::parse(s).unwrap()),
            mask,
        ).unwrap();

        let weekday_bit = flags[date.weekday().num_days_from_monday() as usize];
        let listed = HOLIDAYS.contains(&date.to_string().as_str());
        prop_assert_eq!(cal.is_business_day(date), weekday_bit && !listed);
    }

    #[test]
    fn adjustment_lands_on_business_day(conv in convention(), date in date_2024_2026()) {
        let adjuster = Adjuster::new(sifma(), conv);
        let adjusted = adjuster.adjust(date).unwrap();
        if conv == BusinessDayConvention::Unadjusted {
            prop_assert_eq!(adjusted, date);
        } else {
            prop_assert!(adjuster.calendar().is_business_day(adjusted));
        }
    }

    #[test]
    fn adjustment_is_identity_on_business_days(conv in convention(), date in date_2024_2026()) {
        let cal = sifma();
        prop_assume!(cal.is_business_day(date));
        let adjuster = Adjuster::new(cal, conv);
        prop_assert_eq!(adjuster.adjust(date).unwrap(), date);
    }

    #[test]
    fn adjustment_is_idempotent(conv in convention(), date in date_2024_2026()) {
        let adjuster = Adjuster::new(sifma(), conv);
        let once = adjuster.adjust(date).unwrap();
        prop_assert_eq!(adjuster.adjust(once).unwrap(), once);
    }

    #[test]
    fn following_and_preceding_bracket_the_date(date in date_2024_2026()) {
        let cal = sifma();
        let following = cal.adjust(date, BusinessDayConvention::Following).unwrap();
        let preceding = cal.adjust(date, BusinessDayConvention::Preceding).unwrap();
        prop_assert!(preceding <= date);
        prop_assert!(date <= following);
        for offset in 1..following.days_between(&date).abs() {
            prop_assert!(!cal.is_business_day(date.add_days(offset)));
        }
    }

    #[test]
    fn modified_conventions_stay_in_month(date in date_2024_2026()) {
        let cal = sifma();
        let mf = cal.adjust(date, BusinessDayConvention::ModifiedFollowing).unwrap();
        let mp = cal.adjust(date, BusinessDayConvention::ModifiedPreceding).unwrap();
        prop_assert!(mf.same_month(&date));
        prop_assert!(mp.same_month(&date));
    }

    #[test]
    fn act360_is_antisymmetric(a in date_2024_2026(), b in date_2024_2026()) {
        let dc = Act360;
        prop_assert_eq!(dc.year_fraction(a, b), -dc.year_fraction(b, a));
        prop_assert_eq!(dc.day_count(a, b), b - a);
    }
}

#[test]
fn act360_zero_on_same_day() {
    let d = Date::from_ymd(2025, 3, 14).unwrap();
    assert_eq!(Act360.year_fraction(d, d), 0.0);
}
