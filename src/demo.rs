//! Demo Harness
//!
//! Scripted walk through every public cache operation, printing what it
//! observes. Output goes to any writer so the transcript can be tested.

use std::io::Write;

use anyhow::Context;
use tracing::{info, warn};

use crate::cache::LruCache;
use crate::config::{Config, DisplayFormat};
use crate::error::CacheError;
use crate::models::StatsSnapshot;

type DemoCache = LruCache<i32, String>;

fn header<W: Write>(out: &mut W, title: &str) -> std::io::Result<()> {
    let rule = "=".repeat(50);
    writeln!(out, "\n{}\n {}\n{}", rule, title, rule)
}

fn sub_header<W: Write>(out: &mut W, title: &str) -> std::io::Result<()> {
    writeln!(out, "\n--- {} ---", title)
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn show<W: Write>(out: &mut W, cache: &DemoCache, format: DisplayFormat) -> anyhow::Result<()> {
    match format {
        DisplayFormat::Text => writeln!(out, "\n{}", cache)?,
        DisplayFormat::Json => {
            let json = serde_json::to_string_pretty(&cache.snapshot())
                .context("failed to serialize cache snapshot")?;
            writeln!(out, "\n{}", json)?;
        }
    }
    Ok(())
}

/// Looks up `key`, rendering a miss inline so smaller capacities still run.
fn value_of(cache: &mut DemoCache, key: i32) -> String {
    match cache.get(&key) {
        Ok(value) => value.clone(),
        Err(err) => format!("<{}>", err),
    }
}

/// Runs the scripted demonstration against a fresh cache.
pub fn run_demo<W: Write>(out: &mut W, config: &Config) -> anyhow::Result<()> {
    let format = config.display_format;
    header(out, "LRU Cache Demo")?;

    sub_header(
        out,
        &format!("Test 1: Creating cache with capacity {}", config.capacity),
    )?;
    let mut cache: DemoCache = LruCache::new(config.capacity)?;
    info!(capacity = config.capacity, "demo cache created");
    writeln!(out, "Cache created successfully!")?;
    writeln!(out, "Initial state - Empty: {}", yes_no(cache.is_empty()))?;
    writeln!(out, "Initial size: {}", cache.len())?;

    sub_header(out, "Test 2: Adding entries (1, 2, 3)")?;
    for (key, value) in [(1, "One"), (2, "Two"), (3, "Three")] {
        cache.put(key, value.to_string());
        writeln!(out, "Added: {} -> {}", key, value)?;
    }
    show(out, &cache, format)?;

    sub_header(out, "Test 3: Accessing key 1 (should move to front)")?;
    writeln!(out, "Value for key 1: {}", value_of(&mut cache, 1))?;
    show(out, &cache, format)?;

    sub_header(out, "Test 4: Adding key 4 when cache is full")?;
    writeln!(out, "Adding: 4 -> Four")?;
    writeln!(out, "Expected: Key 2 should be evicted (least recently used)")?;
    if let Some((key, value)) = cache.put(4, "Four".to_string()) {
        info!(key, %value, "demo observed eviction");
    }
    show(out, &cache, format)?;

    sub_header(out, "Test 5: Verifying eviction of key 2")?;
    for key in [2, 1, 3, 4] {
        writeln!(out, "Contains key {}: {}", key, yes_no(cache.contains(&key)))?;
    }

    sub_header(out, "Test 6: Accessing non-existent key")?;
    writeln!(out, "Attempting to get key 2...")?;
    match cache.get(&2) {
        Ok(value) => writeln!(out, "Unexpected value: {}", value)?,
        Err(err @ CacheError::NotFound) => {
            warn!(key = 2, "demo lookup missed");
            writeln!(out, "Error caught: {}", err)?;
        }
        Err(err) => return Err(err.into()),
    }

    sub_header(out, "Test 7: Updating existing entry")?;
    writeln!(out, "Current value for key 3: {}", value_of(&mut cache, 3))?;
    cache.put(3, "Three Updated".to_string());
    writeln!(out, "Updated key 3 to: Three Updated")?;
    writeln!(out, "New value for key 3: {}", value_of(&mut cache, 3))?;
    show(out, &cache, format)?;

    sub_header(out, "Test 8: Testing LRU order with multiple accesses")?;
    for key in [4, 1] {
        value_of(&mut cache, key);
        writeln!(out, "Accessed key {}", key)?;
    }
    show(out, &cache, format)?;
    writeln!(out, "Order should be: 1 (most recent) -> 4 -> 3 (least recent)")?;

    sub_header(out, "Test 9: Adding key 5 (should evict key 3)")?;
    cache.put(5, "Five".to_string());
    writeln!(out, "Added: 5 -> Five")?;
    show(out, &cache, format)?;
    writeln!(out, "Contains key 3: {}", yes_no(cache.contains(&3)))?;

    sub_header(out, "Test 10: Cache size verification")?;
    writeln!(out, "Current size: {}", cache.len())?;
    writeln!(out, "Is empty: {}", yes_no(cache.is_empty()))?;

    sub_header(out, "Test 11: Clearing cache")?;
    cache.clear();
    writeln!(out, "Cache cleared!")?;
    show(out, &cache, format)?;
    writeln!(out, "Is empty after clear: {}", yes_no(cache.is_empty()))?;
    writeln!(out, "Size after clear: {}", cache.len())?;

    sub_header(out, "Test 12: Using cache after clear")?;
    cache.put(100, "Hundred".to_string());
    cache.put(200, "Two Hundred".to_string());
    writeln!(out, "Added new entries after clear")?;
    show(out, &cache, format)?;

    let stats = StatsSnapshot::from(cache.stats());
    info!(
        hits = stats.hits,
        misses = stats.misses,
        evictions = stats.evictions,
        hit_rate = stats.hit_rate,
        "demo finished"
    );
    writeln!(
        out,
        "\nStats: {}",
        serde_json::to_string(&stats).context("failed to serialize stats")?
    )?;

    header(out, "All Tests Completed Successfully!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_no() {
        assert_eq!(yes_no(true), "Yes");
        assert_eq!(yes_no(false), "No");
    }

    #[test]
    fn test_header_format() {
        let mut out = Vec::new();
        header(&mut out, "Title").unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, format!("\n{0}\n Title\n{0}\n", "=".repeat(50)));
    }

    #[test]
    fn test_value_of_renders_miss() {
        let mut cache: DemoCache = LruCache::new(1).unwrap();
        cache.put(1, "One".to_string());
        assert_eq!(value_of(&mut cache, 1), "One");
        assert_eq!(value_of(&mut cache, 2), "<Key not found>");
    }

    #[test]
    fn test_demo_rejects_zero_capacity() {
        let config = Config {
            capacity: 0,
            ..Config::default()
        };
        let err = run_demo(&mut Vec::<u8>::new(), &config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CacheError>(),
            Some(CacheError::InvalidCapacity(0))
        ));
    }
}
