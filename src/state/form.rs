//! Onboarding form state and wire types

use serde::Serialize;
use std::fmt;

/// Industry vertical a mentee can express interest in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Vertical {
    Health,
    Government,
    Academia,
}

impl Vertical {
    pub const ALL: [Vertical; 3] = [Vertical::Health, Vertical::Government, Vertical::Academia];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Health => "Health",
            Self::Government => "Government",
            Self::Academia => "Academia",
        }
    }
}

impl fmt::Display for Vertical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Career-stage persona
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persona {
    RecentCollegeGrad,
    RisingStar,
    ConsistentContributor,
    FastFollower,
    SeasonedExec,
}

impl Persona {
    pub const ALL: [Persona; 5] = [
        Persona::RecentCollegeGrad,
        Persona::RisingStar,
        Persona::ConsistentContributor,
        Persona::FastFollower,
        Persona::SeasonedExec,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::RecentCollegeGrad => "Recent College Grad",
            Self::RisingStar => "Rising Star",
            Self::ConsistentContributor => "Consistent Contributor",
            Self::FastFollower => "Fast Follower",
            Self::SeasonedExec => "Seasoned Exec",
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current goal of the mentee
///
/// The labels are the exact strings the backend expects, typographic
/// punctuation included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    DontKnowYet,
    ActivelyJobHunting,
    ActivelySeekingPromotion,
    NewToJobIndustry,
    BuildingProfessionalBrand,
}

impl Intent {
    pub const ALL: [Intent; 5] = [
        Intent::DontKnowYet,
        Intent::ActivelyJobHunting,
        Intent::ActivelySeekingPromotion,
        Intent::NewToJobIndustry,
        Intent::BuildingProfessionalBrand,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::DontKnowYet => "Don’t Know Yet – open to change",
            Self::ActivelyJobHunting => "Actively Job Hunting",
            Self::ActivelySeekingPromotion => "Actively Seeking Promotion",
            Self::NewToJobIndustry => "New to Job Industry",
            Self::BuildingProfessionalBrand => "Building my Professional Brand",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// In-memory state of the onboarding form
///
/// Created empty, mutated in place by the key handlers, reset to empty
/// after a successful submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OnboardingForm {
    pub job_title: String,
    pub verticals: Vec<Vertical>,
    pub persona: Option<Persona>,
    pub intent: Option<Intent>,
}

impl OnboardingForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a character to the job title
    pub fn push_job_title_char(&mut self, c: char) {
        self.job_title.push(c);
    }

    /// Remove the last character from the job title
    pub fn pop_job_title_char(&mut self) {
        self.job_title.pop();
    }

    /// Replace the job title unconditionally
    #[allow(dead_code)]
    pub fn set_job_title(&mut self, value: String) {
        self.job_title = value;
    }

    /// Add the vertical if absent, remove it if present
    ///
    /// First-toggle order is preserved, so the serialized array reads in
    /// the order the user picked.
    pub fn toggle_vertical(&mut self, vertical: Vertical) {
        if let Some(pos) = self.verticals.iter().position(|v| *v == vertical) {
            self.verticals.remove(pos);
        } else {
            self.verticals.push(vertical);
        }
    }

    pub fn has_vertical(&self, vertical: Vertical) -> bool {
        self.verticals.contains(&vertical)
    }

    /// Replace the selected persona
    pub fn set_persona(&mut self, persona: Persona) {
        self.persona = Some(persona);
    }

    /// Replace the selected intent
    pub fn set_intent(&mut self, intent: Intent) {
        self.intent = Some(intent);
    }

    /// Label of the first unmet required field, if any
    ///
    /// Job title and intent carry the `required` semantics of the form;
    /// verticals and persona may be left empty.
    pub fn missing_required(&self) -> Option<&'static str> {
        if self.job_title.trim().is_empty() {
            return Some("Job Title");
        }
        if self.intent.is_none() {
            return Some("Intent");
        }
        None
    }

    /// Reset all fields to their empty initial values
    pub fn reset(&mut self) {
        self.job_title.clear();
        self.verticals.clear();
        self.persona = None;
        self.intent = None;
    }

    /// Build the wire payload for the current field values
    pub fn to_submission(&self) -> OnboardingSubmission {
        OnboardingSubmission {
            job_title: self.job_title.clone(),
            verticals: self.verticals.clone(),
            persona: self.persona.map(|p| p.label().to_string()).unwrap_or_default(),
            intent: self.intent.map(|i| i.label().to_string()).unwrap_or_default(),
        }
    }
}

/// JSON document POSTed to the backend
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OnboardingSubmission {
    #[serde(rename = "jobTitle")]
    pub job_title: String,
    pub verticals: Vec<Vertical>,
    pub persona: String,
    pub intent: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_form_is_empty() {
        let form = OnboardingForm::new();
        assert_eq!(form.job_title, "");
        assert!(form.verticals.is_empty());
        assert!(form.persona.is_none());
        assert!(form.intent.is_none());
    }

    #[test]
    fn test_job_title_push_and_pop() {
        let mut form = OnboardingForm::new();
        for c in "Engineer".chars() {
            form.push_job_title_char(c);
        }
        assert_eq!(form.job_title, "Engineer");
        form.pop_job_title_char();
        assert_eq!(form.job_title, "Enginee");
    }

    #[test]
    fn test_toggle_vertical_adds_then_removes() {
        let mut form = OnboardingForm::new();
        form.toggle_vertical(Vertical::Health);
        assert!(form.has_vertical(Vertical::Health));
        form.toggle_vertical(Vertical::Health);
        assert!(form.verticals.is_empty());
    }

    #[test]
    fn test_toggle_vertical_has_no_duplicates() {
        let mut form = OnboardingForm::new();
        form.toggle_vertical(Vertical::Health);
        form.toggle_vertical(Vertical::Government);
        form.toggle_vertical(Vertical::Health);
        form.toggle_vertical(Vertical::Health);
        assert_eq!(form.verticals, vec![Vertical::Government, Vertical::Health]);
    }

    #[test]
    fn test_toggle_sequence_keeps_odd_toggles() {
        // Health x3, Government x2, Academia x1 -> Health and Academia remain
        let mut form = OnboardingForm::new();
        let sequence = [
            Vertical::Health,
            Vertical::Government,
            Vertical::Health,
            Vertical::Academia,
            Vertical::Government,
            Vertical::Health,
        ];
        for v in sequence {
            form.toggle_vertical(v);
        }
        assert_eq!(form.verticals, vec![Vertical::Academia, Vertical::Health]);
    }

    #[test]
    fn test_set_persona_replaces_selection() {
        let mut form = OnboardingForm::new();
        form.set_persona(Persona::RisingStar);
        form.set_persona(Persona::SeasonedExec);
        assert_eq!(form.persona, Some(Persona::SeasonedExec));
    }

    #[test]
    fn test_set_intent_replaces_selection() {
        let mut form = OnboardingForm::new();
        form.set_intent(Intent::NewToJobIndustry);
        form.set_intent(Intent::ActivelyJobHunting);
        assert_eq!(form.intent, Some(Intent::ActivelyJobHunting));
    }

    #[test]
    fn test_missing_required_job_title_first() {
        let mut form = OnboardingForm::new();
        assert_eq!(form.missing_required(), Some("Job Title"));
        form.set_job_title("Engineer".to_string());
        assert_eq!(form.missing_required(), Some("Intent"));
        form.set_intent(Intent::ActivelyJobHunting);
        assert_eq!(form.missing_required(), None);
    }

    #[test]
    fn test_whitespace_job_title_is_missing() {
        let mut form = OnboardingForm::new();
        form.set_job_title("   ".to_string());
        assert_eq!(form.missing_required(), Some("Job Title"));
    }

    #[test]
    fn test_reset_returns_to_initial_value() {
        let mut form = OnboardingForm::new();
        form.set_job_title("Engineer".to_string());
        form.toggle_vertical(Vertical::Academia);
        form.set_persona(Persona::FastFollower);
        form.set_intent(Intent::DontKnowYet);
        form.reset();
        assert_eq!(form, OnboardingForm::new());
    }

    #[test]
    fn test_submission_json_shape() {
        let mut form = OnboardingForm::new();
        form.set_job_title("Engineer".to_string());
        form.toggle_vertical(Vertical::Health);
        form.set_persona(Persona::RisingStar);
        form.set_intent(Intent::ActivelyJobHunting);

        let json = serde_json::to_value(form.to_submission()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "jobTitle": "Engineer",
                "verticals": ["Health"],
                "persona": "Rising Star",
                "intent": "Actively Job Hunting",
            })
        );
    }

    #[test]
    fn test_submission_unset_selects_serialize_empty() {
        let mut form = OnboardingForm::new();
        form.set_job_title("Engineer".to_string());

        let json = serde_json::to_value(form.to_submission()).unwrap();
        assert_eq!(json["persona"], "");
        assert_eq!(json["intent"], "");
        assert_eq!(json["verticals"], serde_json::json!([]));
    }

    #[test]
    fn test_intent_labels_are_exact_literals() {
        assert_eq!(
            Intent::DontKnowYet.label(),
            "Don’t Know Yet – open to change"
        );
        assert_eq!(
            Intent::BuildingProfessionalBrand.label(),
            "Building my Professional Brand"
        );
    }

    #[test]
    fn test_vertical_serializes_as_label() {
        let json = serde_json::to_string(&Vertical::Government).unwrap();
        assert_eq!(json, "\"Government\"");
    }
}
