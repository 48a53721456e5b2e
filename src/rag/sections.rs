//! Static catalog of profile sections

use crate::models::ProfileCategory;
use crate::models::ProfileSection;

fn describe(category: ProfileCategory) -> (&'static str, &'static str) {
    match category {
        ProfileCategory::Intro => ("Introduction", "Professional summary and pitch"),
        ProfileCategory::Education => ("Education", "Academic background and certifications"),
        ProfileCategory::Experience => ("Experience", "Professional work history"),
        ProfileCategory::TechnicalSkills => (
            "Technical Skills",
            "Programming languages, frameworks, and tools",
        ),
        ProfileCategory::Projects => ("Projects", "Notable projects and implementations"),
        ProfileCategory::Achievements => ("Achievements", "Awards, recognitions, and milestones"),
        ProfileCategory::Goals => ("Career Goals", "Professional aspirations and vision"),
        ProfileCategory::InterviewPrep => (
            "Interview Preparation",
            "Behavioral and technical preparation",
        ),
    }
}

/// One section per category, in category order
pub fn profile_sections() -> Vec<ProfileSection> {
    ProfileCategory::ALL
        .into_iter()
        .map(|category| {
            let (name, description) = describe(category);
            ProfileSection {
                name: name.to_string(),
                section_type: category,
                description: description.to_string(),
                count: None,
            }
        })
        .collect()
}
