// Request Defense Demo
//
// Walks a hostile request through the full defense pipeline:
// rate limiting, payload sanitization, field validation, and CSRF.

use gateguard::{guard, metrics, RateLimitConfig, RateLimiter};
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    println!("=== Request Defense Demo ===\n");

    metrics::init()?;

    // Small window so the demo shows a denial quickly
    std::env::set_var("GATEGUARD_MAX_REQUESTS", "3");
    std::env::set_var("GATEGUARD_WINDOW_SECS", "60");

    println!("1. Building rate limiter from environment...");
    let limiter = RateLimiter::new(RateLimitConfig::from_env())?;
    limiter.start_sweeper().await;
    println!(
        "   ✓ {} requests per {}s window\n",
        limiter.config().max_requests,
        limiter.config().window_secs
    );

    println!("2. Admitting requests for client 203.0.113.7:");
    for attempt in 1..=4 {
        let decision = limiter.check("203.0.113.7");
        if decision.allowed {
            println!(
                "   - Attempt {}: allowed ({} remaining)",
                attempt, decision.remaining
            );
        } else {
            println!(
                "   - Attempt {}: denied, retry in {:?}",
                attempt, decision.reset_in
            );
        }
    }
    println!();

    println!("3. Sanitizing a hostile profile payload:");
    let payload = json!({
        "name": "<script>alert('xss')</script>Mallory",
        "bio": "<b>Hi there</b> \"friend\"",
        "links": ["https://example.com", "<img src=x onerror=alert(1)>"],
    });
    let clean = guard::sanitize_value(payload.clone());
    println!("   - Before: {}", payload);
    println!("   - After:  {}\n", clean);

    println!("4. Validating submitted fields:");
    let checks = [
        ("email", "mallory@example.com", guard::is_valid_email("mallory@example.com")),
        ("date", "2025-02-29", guard::is_valid_date("2025-02-29")),
        ("country", "DE", guard::is_valid_country_code("DE")),
        ("url", "https://example.com/profile", guard::is_valid_url("https://example.com/profile")),
    ];
    for (field, value, ok) in checks {
        println!("   - {:<8} {:<28} {}", field, value, if ok { "✓" } else { "✗" });
    }
    let probe = "1 OR 1=1; DROP TABLE users";
    println!(
        "   - SQL injection pattern in {:?}: {}\n",
        probe,
        guard::has_sql_injection_pattern(probe)
    );

    println!("5. CSRF token round trip:");
    let token = guard::generate_token();
    println!("   - Issued:  {}", token);
    println!("   - Matches itself: {}", guard::validate_token(&token, &token));
    let mut tampered = token.clone();
    tampered.replace_range(63..64, if token.ends_with('0') { "1" } else { "0" });
    println!("   - Matches tampered copy: {}\n", guard::validate_token(&tampered, &token));

    println!("6. Metrics snapshot:");
    for line in metrics::gather_metrics()?.lines() {
        if !line.starts_with('#') && !line.is_empty() {
            println!("   {}", line);
        }
    }

    limiter.stop_sweeper().await;
    println!("\n=== Demo Complete ===");
    Ok(())
}
