//! Day 27: Introduction to JSON and APIs.
//!
//! JSON with serde_json first, then one real HTTP GET. A network
//! failure is reported and the lesson carries on; learning to parse
//! JSON must not require a working connection.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::fs;

use crate::domain::ports::{Lesson, LessonContext};
use crate::utils::error::Result;

pub struct JsonAndApis;

/// Formats the interesting fields of a JSONPlaceholder-style user.
pub fn render_user(user: &Value) -> String {
    let name = user.get("name").and_then(Value::as_str).unwrap_or("?");
    let email = user.get("email").and_then(Value::as_str).unwrap_or("?");
    let company = user
        .pointer("/company/name")
        .and_then(Value::as_str)
        .unwrap_or("?");
    format!("User: {name}\nEmail: {email}\nCompany: {company}")
}

/// Fetches one user as JSON.
pub async fn fetch_user(endpoint: &str) -> Result<Value> {
    let response = reqwest::get(endpoint).await?;
    let response = response.error_for_status()?;
    Ok(response.json().await?)
}

#[async_trait]
impl Lesson for JsonAndApis {
    fn day(&self) -> u8 {
        27
    }

    async fn run(&self, ctx: &LessonContext) -> Result<()> {
        println!("=== JSON basics ===");
        let data = json!({
            "name": "Alice",
            "age": 30,
            "city": "Wonderland",
            "is_student": false,
            "hobbies": ["reading", "coding", "gaming"],
            "address": { "street": "123 Main St", "zip": "12345" }
        });

        let pretty = serde_json::to_string_pretty(&data)?;
        println!("{pretty}");

        // Parse a string back into a Value and reach into it.
        let parsed: Value = serde_json::from_str(&pretty)?;
        println!(
            "\nParsed back: {} is {} years old",
            parsed["name"].as_str().unwrap_or("?"),
            parsed["age"]
        );

        // Save to a file and load it again.
        ctx.ensure_workspace()?;
        let path = ctx.scratch_path("user_data.json");
        fs::write(&path, &pretty)?;
        let loaded: Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
        println!("Loaded from file: {}", loaded["city"].as_str().unwrap_or("?"));

        println!("\n=== API example ===");
        println!("GET {}", ctx.api_endpoint);
        match fetch_user(&ctx.api_endpoint).await {
            Ok(user) => println!("{}", render_user(&user)),
            Err(e) => println!("Network error: {e}"),
        }
        Ok(())
    }
}
