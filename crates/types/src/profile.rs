//! Static user-profile data shown on the profile page

use chrono::{DateTime, Local, Months, TimeDelta};
use serde::{Deserialize, Serialize};

/// One entry in the recent-activity feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub action: String,
    pub date: DateTime<Local>,
}

/// Read-only account information for the profile view
///
/// There is no authentication or multi-user state; the profile is a fixed
/// sample record with dates anchored relative to the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
    pub company: String,
    pub location: String,
    pub phone_number: String,
    pub total_logins: u32,
    pub last_login: DateTime<Local>,
    pub account_created: DateTime<Local>,
    pub recent_activity: Vec<ActivityEntry>,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    pub projects_completed: u32,
    pub team_size: u32,
}

impl UserProfile {
    /// The built-in sample account
    pub fn sample() -> Self {
        let now = Local::now();
        let days_ago = |days: i64| now - TimeDelta::days(days);
        let activity = |action: &str, days: i64| ActivityEntry {
            action: action.to_string(),
            date: days_ago(days),
        };

        Self {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            role: "Cloud Administrator".to_string(),
            department: "IT Operations".to_string(),
            company: "TechCorp Solutions".to_string(),
            location: "New York, NY".to_string(),
            phone_number: "+1 (555) 123-4567".to_string(),
            total_logins: 152,
            last_login: now,
            account_created: now
                .checked_sub_months(Months::new(6))
                .unwrap_or(now),
            recent_activity: vec![
                activity("Updated resource allocation", 2),
                activity("Generated monthly report", 7),
                activity("Added new team member", 14),
                activity("Optimized cloud storage", 21),
                activity("Conducted security audit", 30),
            ],
            skills: [
                "AWS",
                "Azure",
                "Docker",
                "Kubernetes",
                "Terraform",
                "Python",
                "Node.js",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            certifications: [
                "AWS Certified Solutions Architect",
                "Google Cloud Professional Cloud Architect",
                "Certified Kubernetes Administrator",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            projects_completed: 23,
            team_size: 8,
        }
    }

    /// Whole days since the account was created
    pub fn account_age_days(&self) -> i64 {
        (Local::now() - self.account_created).num_days().max(0)
    }

    /// Uppercase initials used for the avatar placeholder
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .map(|c| c.to_ascii_uppercase())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_profile() {
        let profile = UserProfile::sample();
        assert_eq!(profile.recent_activity.len(), 5);
        assert_eq!(profile.skills.len(), 7);
        assert_eq!(profile.certifications.len(), 3);
        // Six months back, allowing for month-length wobble
        let age = profile.account_age_days();
        assert!((150..=200).contains(&age), "unexpected account age {age}");
    }

    #[test]
    fn test_initials() {
        let profile = UserProfile::sample();
        assert_eq!(profile.initials(), "JD");
    }
}
