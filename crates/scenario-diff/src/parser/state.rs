//! The parser's single piece of "currently open" state.
//!
//! Each transition consumes the current state and returns the next one,
//! flushing whatever it closes into the [`Document`]. There are no nullable
//! cursors: a scenario inside a rule travels together with that rule.

use crate::document::{Background, Document, Rule, Scenario, Step};

/// Container currently receiving steps.
#[derive(Debug, Default)]
pub(super) enum Open {
    /// Nothing open.
    #[default]
    TopLevel,
    /// Collecting background steps.
    Background(Background),
    /// Collecting steps of a scenario outside any rule.
    TopScenario(Scenario),
    /// Inside a rule, before its first scenario.
    Rule(Rule),
    /// Collecting steps of a scenario owned by the rule.
    RuleScenario(Rule, Scenario),
}

impl Open {
    /// Flush every open container to its owner.
    pub(super) fn close(self, doc: &mut Document) {
        match self {
            Self::TopLevel => {}
            Self::Background(background) => doc.background = Some(background),
            Self::TopScenario(scenario) => doc.scenarios.push(scenario),
            Self::Rule(rule) => doc.rules.push(rule),
            Self::RuleScenario(mut rule, scenario) => {
                rule.scenarios.push(scenario);
                doc.rules.push(rule);
            }
        }
    }

    /// `Background:` closes any open scenario or rule.
    pub(super) fn open_background(self, doc: &mut Document) -> Self {
        self.close(doc);
        Self::Background(Background::default())
    }

    /// `Rule:` closes any open scenario and rule.
    pub(super) fn open_rule(self, doc: &mut Document, title: &str) -> Self {
        self.close(doc);
        Self::Rule(Rule::new(title))
    }

    /// `Scenario:`/`Example:` stays inside the current rule when there is
    /// one; otherwise it closes the background or previous top-level
    /// scenario.
    pub(super) fn open_scenario(self, doc: &mut Document, title: Option<&str>) -> Self {
        let scenario = Scenario::new(title.map(str::to_string));
        match self {
            Self::Rule(rule) => Self::RuleScenario(rule, scenario),
            Self::RuleScenario(mut rule, previous) => {
                rule.scenarios.push(previous);
                Self::RuleScenario(rule, scenario)
            }
            other @ (Self::TopLevel | Self::Background(_) | Self::TopScenario(_)) => {
                other.close(doc);
                Self::TopScenario(scenario)
            }
        }
    }

    /// Append a step to the open container. Hands the step back when
    /// nothing can receive it.
    pub(super) fn push_step(&mut self, step: Step) -> Result<(), Step> {
        match self {
            Self::Background(background) => background.steps.push(step),
            Self::TopScenario(scenario) | Self::RuleScenario(_, scenario) => {
                scenario.steps.push(step);
            }
            Self::TopLevel | Self::Rule(_) => return Err(step),
        }
        Ok(())
    }
}
