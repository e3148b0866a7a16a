//! Property-based tests for the validated value types.

use super::{BookingDate, DateRange, HotelId, Price, RoomNumber};
use chrono::NaiveDate;
use proptest::prelude::*;

fn date_strategy() -> impl Strategy<Value = BookingDate> {
    (1970i32..2100, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| {
        BookingDate::try_from(NaiveDate::from_ymd_opt(y, m, d).expect("day 1..=28 exists in every month"))
            .expect("year within 1..=9999")
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Ids accept exactly the positive integers
    #[test]
    fn id_accepts_only_positive(value in any::<i64>()) {
        let id = HotelId::try_from(value);
        prop_assert_eq!(id.is_ok(), value >= 1);
        if let Ok(id) = id {
            prop_assert_eq!(id.value(), value);
        }
    }

    // Parsing the display form of a room number gives the same room number
    #[test]
    fn room_number_display_parses_back(value in 1i64..1_000_000) {
        let room = RoomNumber::try_from(value).unwrap();
        prop_assert_eq!(room.to_string().parse::<RoomNumber>().unwrap(), room);
    }

    // Prices are accepted iff finite and non-negative
    #[test]
    fn price_validation(value in any::<f64>()) {
        let price = Price::try_from(value);
        prop_assert_eq!(price.is_ok(), value.is_finite() && value >= 0.0);
    }

    // Text order of ISO dates equals date order
    #[test]
    fn iso_text_order_matches_date_order(a in date_strategy(), b in date_strategy()) {
        prop_assert_eq!(a.cmp(&b), a.to_string().cmp(&b.to_string()));
    }

    // A range built from ordered bounds contains both of them
    #[test]
    fn range_contains_its_bounds(a in date_strategy(), b in date_strategy()) {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let range = DateRange::new(start, end).unwrap();
        prop_assert!(range.contains(start));
        prop_assert!(range.contains(end));
    }

    // Reversed bounds are always rejected
    #[test]
    fn range_rejects_reversed_bounds(a in date_strategy(), b in date_strategy()) {
        prop_assume!(a != b);
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(DateRange::new(end, start).is_err());
    }
}
