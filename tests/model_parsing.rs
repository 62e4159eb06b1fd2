// tests/model_parsing.rs
//! Deserialization of API responses into the typed model.

use notion_sdk::model::{
    Block, BlockKind, Comment, Database, NotionObject, Page, Parent, PropertySchema, User,
};
use notion_sdk::types::NotionId;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

const PAGE_ID: &str = "59833787-2cf9-4fdf-8782-e53db20768a5";
const DATABASE_ID: &str = "bc1211ca-e3f1-4939-ae34-5260b16f627c";
const USER_ID: &str = "ee5f0f84-409a-440f-983a-a5315961c6e4";

fn page_json() -> Value {
    json!({
        "object": "page",
        "id": PAGE_ID,
        "created_time": "2022-03-01T19:05:00.000Z",
        "last_edited_time": "2022-07-06T20:25:00.000Z",
        "created_by": {"object": "user", "id": USER_ID},
        "last_edited_by": {"object": "user", "id": USER_ID},
        "cover": {"type": "external", "external": {"url": "https://upload.wikimedia.org/kale.jpg"}},
        "icon": {"type": "emoji", "emoji": "🥬"},
        "parent": {"type": "database_id", "database_id": DATABASE_ID},
        "archived": false,
        "properties": {
            "Store availability": {
                "id": "%3AUPp",
                "type": "multi_select",
                "multi_select": [{"id": "t|O@", "name": "Gus's Community Market", "color": "yellow"}]
            },
            "Name": {
                "id": "title",
                "type": "title",
                "title": [
                    {"type": "text", "text": {"content": "Tuscan ", "link": null}, "plain_text": "Tuscan ", "href": null},
                    {"type": "text", "text": {"content": "kale", "link": null}, "plain_text": "kale", "href": null}
                ]
            }
        },
        "url": "https://www.notion.so/Tuscan-kale-598337872cf94fdf8782e53db20768a5"
    })
}

fn database_json() -> Value {
    json!({
        "object": "database",
        "id": DATABASE_ID,
        "created_time": "2021-07-08T23:50:00.000Z",
        "last_edited_time": "2021-07-08T23:50:00.000Z",
        "title": [{"type": "text", "text": {"content": "Grocery List", "link": null}, "plain_text": "Grocery List", "href": null}],
        "description": [],
        "parent": {"type": "page_id", "page_id": PAGE_ID},
        "is_inline": false,
        "archived": false,
        "properties": {
            "Name": {"id": "title", "name": "Name", "type": "title", "title": {}},
            "Price": {"id": "evWq", "name": "Price", "type": "number", "number": {"format": "dollar"}},
            "Food group": {
                "id": "TJmr",
                "name": "Food group",
                "type": "select",
                "select": {"options": [{"id": "96eb622f", "name": "🥦Vegetable", "color": "green"}]}
            },
            "In stock": {"id": "Zp%3F", "name": "In stock", "type": "checkbox", "checkbox": {}}
        },
        "url": "https://www.notion.so/bc1211cae3f14939ae345260b16f627c"
    })
}

#[test]
fn page_title_comes_from_title_property() {
    let page: Page = serde_json::from_value(page_json()).unwrap();
    assert_eq!(page.id, NotionId::parse(PAGE_ID).unwrap());
    assert_eq!(page.title_property_name(), Some("Name"));
    assert_eq!(page.title().as_deref(), Some("Tuscan kale"));
    assert_eq!(page.parent, Parent::database(NotionId::parse(DATABASE_ID).unwrap()));
    assert!(page.property("Store availability").is_some());
}

#[test]
fn page_properties_keep_api_order() {
    let page: Page = serde_json::from_value(page_json()).unwrap();
    let names: Vec<&str> = page.properties.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["Store availability", "Name"]);
}

#[test]
fn database_schema_is_typed() {
    let database: Database = serde_json::from_value(database_json()).unwrap();
    assert_eq!(database.title_text(), "Grocery List");
    assert_eq!(database.properties.len(), 4);

    let price = database.property("Price").unwrap();
    assert_eq!(price.schema.type_name(), "number");
    assert_eq!(price.schema, PropertySchema::number("dollar"));

    match &database.property("Food group").unwrap().schema {
        PropertySchema::Select(config) => assert_eq!(config.options[0].name, "🥦Vegetable"),
        other => panic!("unexpected schema: {other:?}"),
    }
}

#[test]
fn search_results_are_told_apart_by_object() {
    let results: Vec<NotionObject> =
        serde_json::from_value(json!([page_json(), database_json()])).unwrap();
    let kinds: Vec<&str> = results.iter().map(NotionObject::object_type_name).collect();
    assert_eq!(kinds, vec!["page", "database"]);
    assert_eq!(results[0].display_title(), "Tuscan kale");
    assert_eq!(results[1].display_title(), "Grocery List");
}

#[test]
fn unknown_property_types_do_not_fail_the_database() {
    let mut raw = database_json();
    raw["properties"]["Where"] = json!({"id": "abc", "name": "Where", "type": "place", "place": {}});

    let database: Database = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(database.properties.len(), 5);
    assert_eq!(database.property("Where").unwrap().schema.type_name(), "place");
    assert!(matches!(
        database.property("Where").unwrap().schema,
        PropertySchema::Unsupported(_)
    ));
    assert_eq!(
        database.property("Price").unwrap().schema,
        PropertySchema::number("dollar")
    );

    let results: Vec<NotionObject> = serde_json::from_value(json!([page_json(), raw])).unwrap();
    assert_eq!(results[1].display_title(), "Grocery List");
}

#[test]
fn blocks_parse_known_and_unknown_types() {
    let blocks: Vec<Block> = serde_json::from_value(json!([
        {
            "object": "block",
            "id": "c02fc1d3-db8b-45c5-a222-27595b15aea7",
            "parent": {"type": "page_id", "page_id": PAGE_ID},
            "created_time": "2022-03-01T19:05:00.000Z",
            "last_edited_time": "2022-03-01T19:05:00.000Z",
            "has_children": false,
            "archived": false,
            "type": "heading_2",
            "heading_2": {
                "rich_text": [{"type": "text", "text": {"content": "Lacinato kale", "link": null}, "plain_text": "Lacinato kale", "href": null}],
                "color": "default",
                "is_toggleable": false
            }
        },
        {
            "object": "block",
            "id": "acc7eb06-05cd-4603-a384-5e1e4f1f4e72",
            "has_children": false,
            "archived": false,
            "type": "to_do",
            "to_do": {
                "rich_text": [{"type": "text", "text": {"content": "Buy", "link": null}, "plain_text": "Buy", "href": null}],
                "checked": true,
                "color": "default"
            }
        },
        {
            "object": "block",
            "id": "2e5bd9c6-6c2a-4a3e-9a5b-1f3c6a9e4f10",
            "has_children": false,
            "archived": false,
            "type": "ai_block",
            "ai_block": {}
        }
    ]))
    .unwrap();

    assert_eq!(blocks[0].block_type(), "heading_2");
    assert_eq!(blocks[0].plain_text().as_deref(), Some("Lacinato kale"));
    assert!(matches!(&blocks[1].kind, BlockKind::ToDo { to_do } if to_do.checked));
    assert_eq!(blocks[2].block_type(), "unsupported");
}

#[test]
fn users_distinguish_people_and_bots() {
    let users: Vec<User> = serde_json::from_value(json!([
        {
            "object": "user",
            "id": USER_ID,
            "type": "person",
            "person": {"email": "avo@example.org"},
            "name": "Avocado Lovelace",
            "avatar_url": null
        },
        {
            "object": "user",
            "id": "9a3b5ae0-c6e6-482d-b0e1-ed315ee6dc57",
            "type": "bot",
            "bot": {"owner": {"type": "workspace", "workspace": true}, "workspace_name": "Kitchen"},
            "name": "Doug Engelbot",
            "avatar_url": null
        }
    ]))
    .unwrap();

    assert_eq!(users[0].email(), Some("avo@example.org"));
    assert!(!users[0].is_bot());
    assert!(users[1].is_bot());
    assert_eq!(users[1].to_string(), "Doug Engelbot");
}

#[test]
fn comment_text_and_discussion() {
    let comment: Comment = serde_json::from_value(json!({
        "object": "comment",
        "id": "94cc56ab-9f02-409d-9f99-1037e9fe502f",
        "parent": {"type": "page_id", "page_id": PAGE_ID},
        "discussion_id": "f1407351-36f5-4c49-a13c-49f8ba11776d",
        "created_time": "2022-07-15T16:52:00.000Z",
        "last_edited_time": "2022-07-15T19:16:00.000Z",
        "created_by": {"object": "user", "id": USER_ID},
        "rich_text": [{"type": "text", "text": {"content": "Single comment", "link": null}, "plain_text": "Single comment", "href": null}]
    }))
    .unwrap();

    assert_eq!(comment.text(), "Single comment");
    assert_eq!(comment.parent.id(), Some(&NotionId::parse(PAGE_ID).unwrap()));
}
