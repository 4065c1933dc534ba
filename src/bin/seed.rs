//! Resets the database to the demo dataset: two users and five events.
//!
//! ```bash
//! DATABASE_URL=postgres://... cargo run --bin seed
//! ```

use anyhow::Context;
use chrono::{DateTime, TimeZone, Utc};

use eventbook::database::Database;

const BCRYPT_COST: u32 = 10;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let db = Database::new(&database_url, 5)
        .await
        .context("failed to connect to database")?;
    println!("Connected to Postgres");

    db.run_migrations().await.context("migrations failed")?;

    // Children first, FKs forbid the other order
    sqlx::query("DELETE FROM bookings").execute(&db.pool).await?;
    sqlx::query("DELETE FROM events").execute(&db.pool).await?;
    sqlx::query("DELETE FROM users").execute(&db.pool).await?;
    println!("Cleared existing data");

    let users = [
        ("Swapnil Patil", "swapnil@gmail.com", "password123"),
        ("Vishal Sharma", "vishal@gmail.com", "password456"),
    ];

    for (name, email, password) in users {
        let password_hash = bcrypt::hash(password, BCRYPT_COST)?;
        sqlx::query("INSERT INTO users (name, email, password_hash) VALUES ($1, $2, $3)")
            .bind(name)
            .bind(email)
            .bind(&password_hash)
            .execute(&db.pool)
            .await?;
    }
    println!("Users seeded");

    let events: [(&str, &str, DateTime<Utc>, &str, i32); 5] = [
        (
            "India Tech Summit 2026",
            "Premier gathering of technology leaders, developers, and innovators from across India.",
            Utc.with_ymd_and_hms(2026, 3, 15, 9, 0, 0).unwrap(),
            "Bengaluru, Karnataka",
            100,
        ),
        (
            "Startup Pitch Night Mumbai",
            "Founders pitch their ideas live to a panel of top Indian investors in a competitive format.",
            Utc.with_ymd_and_hms(2026, 4, 10, 18, 0, 0).unwrap(),
            "Mumbai, Maharashtra",
            80,
        ),
        (
            "Sunburn Music Festival",
            "India's biggest electronic music festival featuring top DJs and artists from around the world.",
            Utc.with_ymd_and_hms(2026, 5, 5, 14, 0, 0).unwrap(),
            "Pune, Maharashtra",
            500,
        ),
        (
            "Yoga and Wellness Retreat",
            "A three-day wellness retreat with yoga sessions, Ayurveda workshops, and meditation classes.",
            Utc.with_ymd_and_hms(2026, 6, 21, 6, 0, 0).unwrap(),
            "Rishikesh, Uttarakhand",
            60,
        ),
        (
            "Jaipur Literature Festival",
            "Annual celebration of literature, ideas, and culture bringing together authors and thinkers.",
            Utc.with_ymd_and_hms(2026, 7, 18, 10, 0, 0).unwrap(),
            "Jaipur, Rajasthan",
            200,
        ),
    ];

    for (name, description, date, location, total_seats) in events {
        sqlx::query(
            "INSERT INTO events (name, description, date, location, total_seats, booked_seats)
             VALUES ($1, $2, $3, $4, $5, 0)",
        )
        .bind(name)
        .bind(description)
        .bind(date)
        .bind(location)
        .bind(total_seats)
        .execute(&db.pool)
        .await?;
    }
    println!("Events seeded");

    println!("\nSeed complete.");
    println!("  swapnil@gmail.com / password123");
    println!("  vishal@gmail.com  / password456");

    Ok(())
}
