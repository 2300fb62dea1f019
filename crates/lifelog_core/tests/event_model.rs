use chrono::NaiveDate;
use lifelog_core::{parse_date, Event, EventValidationError};
use uuid::Uuid;

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn new_trims_title_and_generates_id() {
    let event = Event::new("  Team Meeting ", day(2024, 5, 10)).unwrap();

    assert!(!event.id.is_nil());
    assert_eq!(event.title, "Team Meeting");
    assert_eq!(event.date, day(2024, 5, 10));
    assert!(event.validate().is_ok());
}

#[test]
fn new_rejects_whitespace_only_title() {
    let err = Event::new("   \t ", day(2024, 5, 10)).unwrap_err();
    assert_eq!(err, EventValidationError::EmptyTitle);
}

#[test]
fn with_id_rejects_nil_uuid() {
    let err = Event::with_id(Uuid::nil(), "valid title", day(2024, 5, 10)).unwrap_err();
    assert_eq!(err, EventValidationError::NilUuid);
}

#[test]
fn parse_date_accepts_iso_input() {
    assert_eq!(parse_date("2024-03-01").unwrap(), day(2024, 3, 1));
    assert_eq!(parse_date(" 2024-03-01 ").unwrap(), day(2024, 3, 1));
}

#[test]
fn parse_date_rejects_non_iso_input() {
    for input in ["03/01/2024", "2024-13-01", "tomorrow", ""] {
        let err = parse_date(input).unwrap_err();
        assert_eq!(
            err,
            EventValidationError::InvalidDate {
                input: input.to_string()
            },
            "input `{input}` should be rejected"
        );
    }
}

#[test]
fn event_serialization_uses_expected_wire_fields() {
    let event_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let event = Event::with_id(event_id, "Doctor Visit", day(2024, 3, 1)).unwrap();

    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["id"], event_id.to_string());
    assert_eq!(json["title"], "Doctor Visit");
    assert_eq!(json["date"], "2024-03-01");

    let decoded: Event = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, event);
}

#[test]
fn deserialize_rejects_blank_title() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "   ",
        "date": "2024-03-01"
    });

    let err = serde_json::from_value::<Event>(value).unwrap_err();
    assert!(
        err.to_string().contains("empty or whitespace-only"),
        "unexpected error: {err}"
    );
}
