//! Database seeder for local development.
//!
//! Inserts a couple of sample monthly reports through the report service so
//! timestamps and validation match what the API would produce. Skips seeding
//! when the table already has rows.
//!
//! Usage: cargo run --bin seeder

use std::sync::Arc;

use fieldreport_core::report::{ActivityCounts, ReportFields, ReportService};
use fieldreport_db::{ReportRepository, connect};
use fieldreport_shared::AppConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().expect("Failed to load configuration");
    let timezone = config
        .reports
        .timezone()
        .expect("Invalid report timezone");

    println!("Connecting to database...");
    let db = connect(&config.database)
        .await
        .expect("Failed to connect to database");

    let service = ReportService::new(Arc::new(ReportRepository::new(db)), timezone);

    let existing = service
        .find_all()
        .await
        .expect("Failed to list existing reports");
    if !existing.is_empty() {
        println!("  {} reports already exist, skipping...", existing.len());
        return;
    }

    println!("Seeding sample reports...");
    let mut inserted = 0;
    for request in sample_reports() {
        match service.create(request).await {
            Ok(report) => {
                println!(
                    "  Inserted report {} ({}, {})",
                    report.id, report.fields.worker_name, report.fields.month_of
                );
                inserted += 1;
            }
            Err(e) => eprintln!("Failed to insert report: {e}"),
        }
    }

    println!("Seeding complete! Inserted {inserted} reports.");
}

fn sample_reports() -> Vec<ReportFields> {
    vec![
        ReportFields {
            month_of: "January 2024".to_string(),
            worker_name: "Juan Dela Cruz".to_string(),
            area_of_assignment: "Region IV-A".to_string(),
            name_of_church: "Grace Chapel".to_string(),
            activities: ActivityCounts {
                worship_service: vec![42, 45, 40, 47],
                sunday_school: vec![18, 20, 17, 21],
                prayer_meetings: vec![12, 10, 14, 11],
                bible_studies: vec![3, 4, 3, 5],
                youth_fellowships: vec![15, 0, 16, 0],
                home_visited: vec![6, 8, 5, 7],
                person_newly_contacted: vec![2, 3, 1, 4],
                person_followed_up: vec![4, 4, 5, 3],
                person_led_to_christ: vec![0, 1, 0, 1],
                ..ActivityCounts::default()
            },
            average_attendance: 43.5,
            names: vec!["Maria Santos".to_string(), "Pedro Reyes".to_string()],
            narrative_report: "Attendance held steady through the month.".to_string(),
            challenges_and_problem_encountered: "Heavy rain on the third Sunday.".to_string(),
            prayer_request: "Funds for roof repairs.".to_string(),
        },
        ReportFields {
            month_of: "February 2024".to_string(),
            worker_name: "Ana Villanueva".to_string(),
            area_of_assignment: "Region VII".to_string(),
            name_of_church: "Living Word Fellowship".to_string(),
            activities: ActivityCounts {
                worship_service: vec![30, 33, 35, 31],
                sunday_school: vec![12, 14, 15, 13],
                womens_fellowships: vec![9, 0, 10, 0],
                outreach: vec![0, 1, 0, 1],
                sermon_or_message_preached: vec![2, 2, 2, 2],
                tithes_and_offerings: vec![4500, 5200, 4800, 5100],
                ..ActivityCounts::default()
            },
            average_attendance: 32.25,
            names: vec!["Liza Ramos".to_string()],
            narrative_report: "Started a new outreach in the barangay.".to_string(),
            challenges_and_problem_encountered: String::new(),
            prayer_request: "Health of the congregation.".to_string(),
        },
    ]
}
