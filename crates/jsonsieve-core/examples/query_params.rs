//! Filters a dummy API result set with a query-parameter-style filter string.
//!
//! ```bash
//! cargo run --example query_params
//! cargo run --example query_params -- "Key1=val1,val2:Maps.entry1.key1=val5,val4"
//! ```

use std::collections::HashMap;

use serde::Serialize;

use jsonsieve_core::{Field, Filter, Filterable, Shape};

#[derive(Debug, Clone, Serialize)]
struct SecondStruct {
    #[serde(rename = "skey", skip_serializing_if = "Option::is_none")]
    sub_key: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
struct StructExample {
    #[serde(rename = "key1")]
    key1: String,
    #[serde(rename = "composed", skip_serializing_if = "Option::is_none")]
    composed: Option<SecondStruct>,
    #[serde(rename = "array")]
    array: Vec<SecondStruct>,
    #[serde(rename = "arraysimple")]
    array_simple: Vec<String>,
    #[serde(rename = "maps")]
    maps: HashMap<String, StructEntry>,
    #[serde(rename = "matrix")]
    matrix: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
struct StructEntry {
    #[serde(rename = "key1")]
    key1: String,
}

impl Filterable for StructExample {
    fn shape() -> Shape {
        let second = Shape::record([
            Field::new("SubKey", Shape::optional(Shape::scalar())).renamed("skey"),
        ]);
        Shape::record([
            Field::new("Key1", Shape::scalar()).renamed("key1"),
            Field::new("Composed", Shape::optional(second.clone())).renamed("composed"),
            Field::new("Array", Shape::sequence(second)).renamed("array"),
            Field::new("ArraySimple", Shape::sequence(Shape::scalar())).renamed("arraysimple"),
            Field::new(
                "Maps",
                Shape::map(Shape::record([
                    Field::new("Key1", Shape::scalar()).renamed("key1"),
                ])),
            )
            .renamed("maps"),
            Field::new("Matrix", Shape::sequence(Shape::sequence(Shape::scalar())))
                .renamed("matrix"),
        ])
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // In a real service this arrives as a query parameter, e.g.
    // GET /orders?filters=Key1=val1,val2:composed.SubKey=val3
    let filter_value = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Key1=val1,val2:composed.SubKey=val3".to_string());

    let mut filter = Filter::new();
    filter.init::<StructExample>(&filter_value)?;

    // Results as they would come back from the datastore.
    let results = dummy_results();
    let kept = filter.apply(&results)?;

    println!("filter:  {filter}");
    println!("input:   {} records", results.len());
    println!("kept:    {}", serde_json::to_string_pretty(&kept)?);
    Ok(())
}

fn dummy_results() -> Vec<StructExample> {
    let second = |v: &str| SecondStruct {
        sub_key: Some(v.to_string()),
    };
    let entry = |v: &str| StructEntry {
        key1: v.to_string(),
    };

    vec![
        StructExample {
            key1: "val1".to_string(),
            composed: Some(second("val3")),
            array: vec![second("valArray")],
            array_simple: vec!["valArray2".to_string()],
            maps: HashMap::from([
                ("entry1".to_string(), entry("val4")),
                ("entry2".to_string(), entry("val4")),
            ]),
            matrix: vec![
                vec!["AA".to_string(), "AB".to_string(), "AC".to_string()],
                vec!["BA".to_string(), "BB".to_string(), "BC".to_string()],
                vec!["CA".to_string(), "CB".to_string(), "CC".to_string()],
            ],
        },
        StructExample {
            key1: "val2".to_string(),
            composed: Some(second("val3")),
            maps: HashMap::from([("entry1".to_string(), entry("val5"))]),
            ..StructExample::default()
        },
        StructExample {
            key1: "val2".to_string(),
            composed: Some(second("val")),
            ..StructExample::default()
        },
        StructExample {
            key1: "val1".to_string(),
            maps: HashMap::from([
                ("entry1".to_string(), entry("val6")),
                ("entry2".to_string(), entry("val4")),
            ]),
            ..StructExample::default()
        },
    ]
}
