// tests/filter_json.rs
//! Rendering of complete filter trees into the query endpoint's JSON grammar.

use chrono::NaiveDate;
use notion_sdk::filter::{
    and, or, ArrayCondition, Checkbox, Date, Files, Filter, Formula, MultiSelect, Number, People,
    Relation, Rollup, Select, Text, Timestamp,
};
use notion_sdk::model::SelectOption;
use notion_sdk::types::ValidationError;
use pretty_assertions::assert_eq;
use serde_json::json;

fn nested_tags() -> serde_json::Value {
    json!({"and": [
        {"property": "Done", "checkbox": {"equals": true}},
        {"or": [
            {"property": "Tags", "multi_select": {"contains": "A"}},
            {"property": "Tags", "multi_select": {"contains": "B"}},
        ]},
    ]})
}

#[test]
fn nested_compound_preserves_order() {
    let filter = and([
        Checkbox::new("Done").equals(true).into(),
        or([
            MultiSelect::new("Tags").contains("A").into(),
            MultiSelect::new("Tags").contains("B").into(),
        ])
        .into(),
    ]);
    assert_eq!(filter.to_json().unwrap(), nested_tags());
}

#[test]
fn operators_match_explicit_compounds() {
    let filter = Checkbox::new("Done").equals(true)
        & (MultiSelect::new("Tags").contains("A") | MultiSelect::new("Tags").contains("B"));
    assert_eq!(filter.to_json().unwrap(), nested_tags());
}

#[test]
fn chained_operators_nest_left_to_right() {
    let filter = Number::new("A").equals(1) & Number::new("B").equals(2) & Number::new("C").equals(3);
    assert_eq!(
        filter.to_json().unwrap(),
        json!({"and": [
            {"and": [
                {"property": "A", "number": {"equals": 1}},
                {"property": "B", "number": {"equals": 2}},
            ]},
            {"property": "C", "number": {"equals": 3}},
        ]})
    );
}

#[test]
fn timestamp_windows_render_empty_objects() {
    let filter = Timestamp::new("created_time").unwrap().past_week();
    assert_eq!(
        filter.to_json().unwrap(),
        json!({"timestamp": "created_time", "created_time": {"past_week": {}}})
    );
}

#[test]
fn formula_renders_like_its_inner_filter() {
    let filter = Formula::new(Checkbox::new("Formula").equals(true));
    assert_eq!(
        filter.to_json().unwrap(),
        json!({"property": "Formula", "checkbox": {"equals": true}})
    );
}

#[test]
fn rollup_nests_under_rollup_key() {
    assert_eq!(
        Rollup::new(Number::new("Todo Count").equals(2)).to_json().unwrap(),
        json!({"property": "Todo Count", "rollup": {"number": {"equals": 2}}})
    );
    assert_eq!(
        Rollup::any(Number::new("Todo Count").equals(2)).to_json().unwrap(),
        json!({"property": "Todo Count", "rollup": {"any": {"number": {"equals": 2}}}})
    );
    assert_eq!(
        Rollup::matching(ArrayCondition::Every, Date::new("Due").past_month())
            .to_json()
            .unwrap(),
        json!({"property": "Due", "rollup": {"every": {"date": {"past_month": {}}}}})
    );
}

#[test]
fn families_without_dedicated_tests_elsewhere() {
    let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let filter = and([
        Select::new("Status").does_not_equal("Done").into(),
        Date::new("Due").on_or_before(day).into(),
        People::new("Owner").contains("d40e767c-d7af-4b18-a86d-55c61f1e39a4").into(),
        Files::new("Attachments").is_not_empty().into(),
        Relation::new("Project").is_empty().into(),
        Text::new("Notes").does_not_contain("draft").into(),
    ]);
    assert_eq!(
        filter.to_json().unwrap(),
        json!({"and": [
            {"property": "Status", "select": {"does_not_equal": "Done"}},
            {"property": "Due", "date": {"on_or_before": "2024-03-01"}},
            {"property": "Owner", "people": {"contains": "d40e767c-d7af-4b18-a86d-55c61f1e39a4"}},
            {"property": "Attachments", "files": {"is_not_empty": true}},
            {"property": "Project", "relation": {"is_empty": true}},
            {"property": "Notes", "rich_text": {"does_not_contain": "draft"}},
        ]})
    );
}

#[test]
fn rendering_is_repeatable() {
    let filter: Filter = (Text::new("Name").contains("x") | Timestamp::last_edited_time().next_year()).into();
    let first = filter.to_json().unwrap();
    assert_eq!(filter.to_json().unwrap(), first);
    assert_eq!(serde_json::to_value(&filter).unwrap(), first);
}

#[test]
fn unknown_timestamp_is_rejected() {
    match Timestamp::new("bogus") {
        Err(ValidationError::InvalidTimestamp { value, supported }) => {
            assert_eq!(value, "bogus");
            assert_eq!(supported, vec!["created_time", "last_edited_time"]);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn unknown_select_color_lists_supported_colors() {
    let err = SelectOption::new("X", "not-a-color").unwrap_err();
    let message = err.to_string();
    assert!(matches!(err, ValidationError::InvalidColor { .. }));
    for color in ["default", "gray", "brown", "orange", "yellow", "green", "blue", "purple", "pink", "red"] {
        assert!(message.contains(color), "{message} should list {color}");
    }
}

#[test]
fn incomplete_member_fails_the_whole_tree() {
    let filter = Checkbox::new("Done").equals(true) & Number::new("Points");
    assert_eq!(
        filter.to_json().unwrap_err(),
        ValidationError::IncompleteFilter {
            target: "Points".to_string()
        }
    );
}
