//! Time-of-day greeting for the home page hero.

#[cfg(test)]
#[path = "greeting_test.rs"]
mod greeting_test;

/// Greeting for a local wall-clock `hour` in `0..24`.
#[must_use]
pub fn for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "🌅 Good morning, ramen hero!"
    } else if hour < 18 {
        "☀️ Good afternoon! Perfect time for noodles!"
    } else {
        "🌙 Good evening, hungry shinobi!"
    }
}

