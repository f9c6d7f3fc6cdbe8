//! Report data types.

use std::borrow::Cow;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

/// Store-assigned report identifier.
pub type ReportId = i32;

/// Arithmetic mean of a weekly series. An empty series averages to `0.0`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average(values: &[i32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: i64 = values.iter().copied().map(i64::from).sum();
    sum as f64 / values.len() as f64
}

/// Reads a list field, treating an explicit `null` as empty.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Declares the activity series once and derives the enum, the per-week
/// counts struct and the averages struct from the same list.
macro_rules! activities {
    ($( $variant:ident => $counts:ident, $avg:ident, $label:literal; )*) => {
        /// One weekly activity series tracked by a report.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Activity {
            $(
                #[doc = $label]
                $variant,
            )*
        }

        impl Activity {
            /// Every series, in export order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// Row label used in the spreadsheet export.
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)*
                }
            }
        }

        /// Weekly counts per activity, one entry per week of the month.
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct ActivityCounts {
            $(
                #[doc = $label]
                #[serde(deserialize_with = "null_as_empty")]
                pub $counts: Vec<i32>,
            )*
        }

        impl ActivityCounts {
            /// Returns the weekly values recorded for `activity`.
            #[must_use]
            pub fn series(&self, activity: Activity) -> &[i32] {
                match activity {
                    $(Activity::$variant => &self.$counts,)*
                }
            }
        }

        /// Mean of every activity series, computed at read time.
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct ActivityAverages {
            $(
                #[doc = $label]
                pub $avg: f64,
            )*
        }

        impl ActivityAverages {
            /// Averages each series of `counts`.
            #[must_use]
            pub fn from_counts(counts: &ActivityCounts) -> Self {
                Self {
                    $($avg: average(&counts.$counts),)*
                }
            }

            /// Returns the average computed for `activity`.
            #[must_use]
            pub const fn get(&self, activity: Activity) -> f64 {
                match activity {
                    $(Activity::$variant => self.$avg,)*
                }
            }
        }
    };
}

activities! {
    WorshipService => worship_service, worship_service_avg, "Worship Service:";
    SundaySchool => sunday_school, sunday_school_avg, "Sunday School:";
    PrayerMeetings => prayer_meetings, prayer_meetings_avg, "Prayer Meetings:";
    BibleStudies => bible_studies, bible_studies_avg, "Bible Studies:";
    MensFellowships => mens_fellowships, mens_fellowships_avg, "Mens Fellowships:";
    WomensFellowships => womens_fellowships, womens_fellowships_avg, "Womens Fellowships:";
    YouthFellowships => youth_fellowships, youth_fellowships_avg, "Youth Fellowships:";
    ChildFellowships => child_fellowships, child_fellowships_avg, "Child Fellowships:";
    Outreach => outreach, outreach_avg, "Outreach:";
    TrainingOrSeminars => training_or_seminars, training_or_seminars_avg, "Training Or Seminars:";
    LeadershipConferences => leadership_conferences, leadership_conferences_avg, "Leadership Conferences:";
    LeadershipTraining => leadership_training, leadership_training_avg, "Leadership Training:";
    Others => others, others_avg, "Others:";
    FamilyDays => family_days, family_days_avg, "Family Days:";
    TithesAndOfferings => tithes_and_offerings, tithes_and_offerings_avg, "Tithes And Offerings:";
    HomeVisited => home_visited, home_visited_avg, "Home Visited:";
    BibleStudyOrGroupLed => bible_study_or_group_led, bible_study_or_group_led_avg, "Bible Study Or Group Led:";
    SermonOrMessagePreached => sermon_or_message_preached, sermon_or_message_preached_avg, "Sermon Or Message Preached:";
    PersonNewlyContacted => person_newly_contacted, person_newly_contacted_avg, "Person Newly Contacted:";
    PersonFollowedUp => person_followed_up, person_followed_up_avg, "Person Followed-Up:";
    PersonLedToChrist => person_led_to_christ, person_led_to_christ_avg, "Person Led To Christ:";
}

fn non_negative_counts(counts: &ActivityCounts) -> Result<(), ValidationError> {
    let negative = Activity::ALL
        .iter()
        .copied()
        .find(|&activity| counts.series(activity).iter().any(|&v| v < 0));

    match negative {
        Some(activity) => Err(ValidationError::new("negative_count").with_message(Cow::Owned(
            format!(
                "{} counts must not be negative",
                activity.label().trim_end_matches(':')
            ),
        ))),
        None => Ok(()),
    }
}

/// Every caller-supplied attribute of a report.
///
/// Create and update requests carry exactly this shape, and both the stored
/// entity and the read view embed it, so field mapping happens in one place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportFields {
    /// Reporting period label, e.g. "January 2024".
    #[validate(length(min = 1, message = "monthOf is required"))]
    pub month_of: String,
    /// Name of the reporting worker.
    #[validate(length(min = 1, message = "workerName is required"))]
    pub worker_name: String,
    /// Area the worker is assigned to.
    #[validate(length(min = 1, message = "areaOfAssignment is required"))]
    pub area_of_assignment: String,
    /// Church the worker serves.
    #[validate(length(min = 1, message = "nameOfChurch is required"))]
    pub name_of_church: String,
    /// Weekly activity counts.
    #[serde(flatten)]
    #[validate(custom(function = "non_negative_counts"))]
    pub activities: ActivityCounts,
    /// Average attendance as reported by the worker (not derived).
    #[validate(range(min = 0.0, message = "averageAttendance must not be negative"))]
    pub average_attendance: f64,
    /// Names listed on the report.
    #[serde(deserialize_with = "null_as_empty")]
    pub names: Vec<String>,
    /// Narrative report.
    pub narrative_report: String,
    /// Challenges and problems encountered.
    pub challenges_and_problem_encountered: String,
    /// Prayer requests.
    pub prayer_request: String,
}

/// Body of a create or update request.
pub type ReportRequest = ReportFields;

/// A report handed to the store for insertion; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReport {
    /// Report contents.
    pub fields: ReportFields,
    /// Creation time, zone-local.
    pub created_at: DateTime<FixedOffset>,
    /// Last update time, zone-local.
    pub updated_at: DateTime<FixedOffset>,
}

/// A persisted monthly report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerReport {
    /// Store-assigned identifier.
    pub id: ReportId,
    /// Report contents.
    #[serde(flatten)]
    pub fields: ReportFields,
    /// Creation time, never changed after insert.
    pub created_at: DateTime<FixedOffset>,
    /// Last update time.
    pub updated_at: DateTime<FixedOffset>,
}

/// A report as returned to clients, with per-series averages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportView {
    /// Report identifier.
    pub id: ReportId,
    /// Report contents.
    #[serde(flatten)]
    pub fields: ReportFields,
    /// Mean of each activity series.
    #[serde(flatten)]
    pub averages: ActivityAverages,
    /// Creation time.
    pub created_at: DateTime<FixedOffset>,
    /// Last update time.
    pub updated_at: DateTime<FixedOffset>,
}

impl From<WorkerReport> for ReportView {
    fn from(report: WorkerReport) -> Self {
        let averages = ActivityAverages::from_counts(&report.fields.activities);
        Self {
            id: report.id,
            fields: report.fields,
            averages,
            created_at: report.created_at,
            updated_at: report.updated_at,
        }
    }
}
