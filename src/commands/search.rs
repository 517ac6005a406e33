//! The search command
//!
//! Queries the Maven Central search API and lists matches with a
//! humanized age. Results sort newest first when the query names a
//! group; ages over two and five years render progressively dimmer.

use crate::cli::{Cli, SearchArgs};
use crate::domain::{Age, Coordinate};
use crate::registry::{HttpClient, SearchClient, SearchDoc, SearchRequest};
use colored::{ColoredString, Colorize};

pub async fn run(cli: &Cli, args: &SearchArgs) -> anyhow::Result<()> {
    let client = HttpClient::new()?;
    let search = SearchClient::new(client);

    // a parseable query is treated as a coordinate against the gav core
    let (request, sort_by_time) = match Coordinate::parse(&args.query) {
        Ok(coord) => {
            let sort = coord.group_id.is_some();
            (SearchRequest::for_coordinate(&coord, args.rows), sort)
        }
        Err(_) => (SearchRequest::new(args.query.clone(), None, 0, args.rows), false),
    };

    if cli.debug {
        eprintln!("query = {}", request.q);
    }

    let result = search.search(&request).await?;

    let mut docs = result.response.docs;
    if sort_by_time {
        docs.sort_by_key(|d| std::cmp::Reverse(d.timestamp));
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&docs)?);
        return Ok(());
    }

    println!("Found {}", result.response.num_found);
    for doc in &docs {
        println!("{}", format_doc(doc));
    }

    Ok(())
}

fn format_doc(doc: &SearchDoc) -> String {
    let age = Age::from_timestamp_millis(doc.timestamp);
    format!("{:<72} {:>15}", doc.id, age_text(&age))
}

fn age_text(age: &Age) -> ColoredString {
    let text = age.humanize();
    let years = age.years();
    if years > 5 {
        text.dimmed()
    } else if years > 2 {
        text.yellow()
    } else {
        text.green()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn doc_with_timestamp(id: &str, timestamp: i64) -> SearchDoc {
        SearchDoc {
            id: id.to_string(),
            g: "g".to_string(),
            a: "a".to_string(),
            v: None,
            latest_version: None,
            timestamp,
        }
    }

    #[test]
    fn test_format_doc_alignment() {
        let doc = doc_with_timestamp("org.slf4j:slf4j-api:2.0.17", 0);
        let line = format_doc(&doc);
        assert!(line.starts_with("org.slf4j:slf4j-api:2.0.17"));
        assert!(line.contains("ago"));
    }

    #[test]
    fn test_age_text_recent_is_green() {
        let recent = (Utc::now() - Duration::days(30)).timestamp_millis();
        let age = Age::from_timestamp_millis(recent);
        let colored = age_text(&age);
        assert_eq!(colored.fgcolor(), Some(colored::Color::Green));
    }

    #[test]
    fn test_age_text_middle_aged_is_yellow() {
        let middling = (Utc::now() - Duration::days(3 * 365 + 10)).timestamp_millis();
        let age = Age::from_timestamp_millis(middling);
        let colored = age_text(&age);
        assert_eq!(colored.fgcolor(), Some(colored::Color::Yellow));
    }

    #[test]
    fn test_age_text_old_is_dimmed() {
        let old = (Utc::now() - Duration::days(6 * 365 + 10)).timestamp_millis();
        let age = Age::from_timestamp_millis(old);
        let colored = age_text(&age);
        // dimmed output carries no foreground color
        assert_eq!(colored.fgcolor(), None);
    }
}
