use liftlog_domain::{self as domain, VariationChoice};

use super::state::Action;

/// Existing exercise that the new exercise can be grouped with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub base: domain::ExerciseBaseID,
    pub variation: Option<domain::VariationID>,
    pub name: String,
}

impl Candidate {
    /// Action that toggles this candidate.
    ///
    /// A candidate that already belongs to a variation grouping is joined. Otherwise a new
    /// grouping is created for both exercises on submission.
    #[must_use]
    pub fn select(&self) -> Action {
        match self.variation {
            Some(variation) => Action::ToggleVariation(variation),
            None => Action::ToggleNewVariationBase(self.base),
        }
    }

    #[must_use]
    pub fn is_selected(&self, choice: VariationChoice) -> bool {
        match (choice, self.variation) {
            (VariationChoice::Existing(id), Some(variation)) => id == variation,
            (VariationChoice::New(base), None) => base == self.base,
            _ => false,
        }
    }
}

/// Candidate list of the variation step with its text filter.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VariationStep {
    candidates: Vec<Candidate>,
    filter: String,
}

impl VariationStep {
    #[must_use]
    pub fn new(bases: &[domain::ExerciseBase], language: domain::LanguageID) -> Self {
        let mut candidates = bases
            .iter()
            .filter_map(|base| {
                Some(Candidate {
                    base: base.id,
                    variation: base.variation,
                    name: base.name(language)?.to_string(),
                })
            })
            .collect::<Vec<_>>();
        candidates.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            candidates,
            filter: String::new(),
        }
    }

    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: String) {
        self.filter = filter;
    }

    /// Candidates whose name contains the filter, ignoring case.
    pub fn visible_candidates(&self) -> impl Iterator<Item = &Candidate> {
        let filter = self.filter.trim().to_lowercase();
        self.candidates
            .iter()
            .filter(move |c| c.name.to_lowercase().contains(&filter))
    }
}
