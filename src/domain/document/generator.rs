//! Values document generator.
//!
//! Renders an [`EthicalProfile`] into a markdown document suitable for
//! pasting into an AI system prompt. A pure function of its inputs: the
//! same profile, template, and options always yield a byte-identical
//! string. No network or storage access.

use crate::domain::catalog::Catalog;
use crate::domain::profile::{EthicalProfile, MotifTally};

use super::{ComplexityLevel, GenerationError, GenerationOptions, TargetAudience, TemplateId};

/// Motifs shown at the `essential` complexity level.
const ESSENTIAL_MOTIF_LIMIT: usize = 3;

/// Renders ethical profiles into markdown values documents.
#[derive(Debug, Clone)]
pub struct ValuesDocumentGenerator<'a> {
    catalog: &'a Catalog,
}

impl<'a> ValuesDocumentGenerator<'a> {
    /// Creates a generator that resolves motif text from `catalog`.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Generates the markdown values document.
    ///
    /// # Errors
    ///
    /// - `EmptyProfile` if the profile holds no motif tallies; the
    ///   analyzer never produces such a profile, so this guards against
    ///   hand-built input only
    pub fn generate(
        &self,
        profile: &EthicalProfile,
        template: TemplateId,
        options: &GenerationOptions,
    ) -> Result<String, GenerationError> {
        if profile.motif_tallies().is_empty() {
            return Err(GenerationError::EmptyProfile);
        }

        let shown = self.shown_motifs(profile, options);
        let mut doc = String::new();

        doc.push_str(&self.header(profile, template));
        doc.push_str(&self.motif_section(&shown, template, options));
        if options.include_framework_alignment {
            doc.push_str(&self.framework_section(profile, template));
        }
        if options.include_decision_patterns {
            doc.push_str(&self.patterns_section(profile, &shown));
        }
        doc.push_str(&self.instructions_section(&shown, options));
        doc.push_str("---\n\n*Generated by VALUES.md*\n");

        Ok(doc)
    }

    /// Selects which tallies the document shows, per complexity level.
    fn shown_motifs(
        &self,
        profile: &EthicalProfile,
        options: &GenerationOptions,
    ) -> Vec<MotifTally> {
        let tallies = profile.motif_tallies();
        let limit = match options.complexity_level {
            ComplexityLevel::Essential => ESSENTIAL_MOTIF_LIMIT.min(profile.primary_motifs().len()),
            ComplexityLevel::Nuanced => profile.primary_motifs().len(),
            ComplexityLevel::Comprehensive => tallies.len(),
        };
        tallies.iter().take(limit).cloned().collect()
    }

    fn motif_name(&self, tally: &MotifTally) -> String {
        self.catalog
            .motif(&tally.motif)
            .map(|m| m.name.clone())
            .unwrap_or_else(|| tally.motif.as_str().to_string())
    }

    fn motif_description(&self, tally: &MotifTally) -> Option<String> {
        self.catalog
            .motif(&tally.motif)
            .map(|m| m.description.clone())
    }

    fn header(&self, profile: &EthicalProfile, template: TemplateId) -> String {
        let n = profile.response_count();
        match template {
            TemplateId::Standard => {
                format!("# My Values\n\n> Derived from {} answered ethical dilemmas.\n\n", n)
            }
            TemplateId::Narrative => format!(
                "# How I Weigh Hard Choices\n\nThese notes describe the pattern behind {} answered dilemmas. \
                 They are a profile of tendencies, not a rulebook.\n\n",
                n
            ),
            TemplateId::Minimal => String::from("# Values\n\n"),
            TemplateId::Technical => {
                format!("# Values Profile\n\n> Source: {} dilemma responses.\n\n", n)
            }
        }
    }

    fn motif_section(
        &self,
        shown: &[MotifTally],
        template: TemplateId,
        options: &GenerationOptions,
    ) -> String {
        let mut section = String::new();
        match template {
            TemplateId::Standard => {
                section.push_str("## Core Ethical Motifs\n\n");
                for (i, tally) in shown.iter().enumerate() {
                    let name = self.motif_name(tally);
                    match options.complexity_level {
                        ComplexityLevel::Essential => {
                            section.push_str(&format!(
                                "{}. **{}** ({} of responses)\n",
                                i + 1,
                                name,
                                tally.share
                            ));
                        }
                        _ => {
                            let description = self
                                .motif_description(tally)
                                .unwrap_or_else(|| String::from("No description available."));
                            section.push_str(&format!(
                                "{}. **{}** ({} of responses): {}\n",
                                i + 1,
                                name,
                                tally.share,
                                description
                            ));
                        }
                    }
                }
                section.push('\n');
            }
            TemplateId::Narrative => {
                section.push_str("## What I Kept Choosing\n\n");
                for tally in shown {
                    let name = self.motif_name(tally);
                    let description = self
                        .motif_description(tally)
                        .unwrap_or_else(|| String::from("No description available."));
                    section.push_str(&format!(
                        "When the options pulled in different directions, I chose **{}** in {} of my responses. {}\n\n",
                        name, tally.share, description
                    ));
                }
            }
            TemplateId::Minimal => {
                for tally in shown {
                    section.push_str(&format!(
                        "- **{}** ({})\n",
                        self.motif_name(tally),
                        tally.share
                    ));
                }
                section.push('\n');
            }
            TemplateId::Technical => {
                section.push_str("## Motif Tally\n\n");
                section.push_str("| # | Motif | Count | Share |\n");
                section.push_str("|---|-------|------:|------:|\n");
                for (i, tally) in shown.iter().enumerate() {
                    section.push_str(&format!(
                        "| {} | {} | {} | {} |\n",
                        i + 1,
                        self.motif_name(tally),
                        tally.count,
                        tally.share
                    ));
                }
                section.push('\n');
            }
        }
        section
    }

    fn framework_section(&self, profile: &EthicalProfile, template: TemplateId) -> String {
        let mut section = String::new();
        match template {
            TemplateId::Technical => {
                section.push_str("## Framework Alignment\n\n");
                section.push_str("| Framework | Share |\n");
                section.push_str("|-----------|------:|\n");
                for share in profile.framework_alignment() {
                    section.push_str(&format!(
                        "| {} | {} |\n",
                        share.framework.label(),
                        share.percentage
                    ));
                }
                section.push('\n');
            }
            TemplateId::Narrative => {
                section.push_str("## Where I Lean\n\n");
                if let Some(dominant) = profile.dominant_framework() {
                    section.push_str(&format!(
                        "Taken together, these answers lean {} ({} of the weighted pull).\n\n",
                        dominant.framework.label(),
                        dominant.percentage
                    ));
                }
                for share in profile.framework_alignment() {
                    section.push_str(&format!(
                        "- {}: {}\n",
                        share.framework.label(),
                        share.percentage
                    ));
                }
                section.push('\n');
            }
            _ => {
                section.push_str("## Ethical Framework Alignment\n\n");
                for share in profile.framework_alignment() {
                    section.push_str(&format!(
                        "- {}: {}\n",
                        share.framework.label(),
                        share.percentage
                    ));
                }
                section.push('\n');
            }
        }
        section
    }

    fn patterns_section(&self, profile: &EthicalProfile, shown: &[MotifTally]) -> String {
        let mut lines = Vec::new();

        for (i, a) in shown.iter().enumerate() {
            for b in shown.iter().skip(i + 1) {
                let (Some(motif_a), Some(_)) =
                    (self.catalog.motif(&a.motif), self.catalog.motif(&b.motif))
                else {
                    continue;
                };
                if motif_a.conflicts_with(&b.motif) {
                    lines.push(format!(
                        "- **{}** sits in tension with **{}**; both show up in these answers.",
                        self.motif_name(a),
                        self.motif_name(b)
                    ));
                } else if motif_a.synergizes_with(&b.motif) {
                    lines.push(format!(
                        "- **{}** reinforces **{}**.",
                        self.motif_name(a),
                        self.motif_name(b)
                    ));
                }
            }
        }

        if let Some(signal) = profile.reasoning() {
            lines.push(format!(
                "- Reasoning style (best-effort estimate): {}, with qualifying language in {} places across {} explanations.",
                signal.depth.label(),
                signal.qualifier_hits,
                signal.responses_with_reasoning
            ));
        }

        let mut section = String::from("## Decision Patterns\n\n");
        if lines.is_empty() {
            section.push_str("*No recurring patterns surfaced.*\n\n");
        } else {
            for line in lines {
                section.push_str(&line);
                section.push('\n');
            }
            section.push('\n');
        }
        section
    }

    fn instructions_section(
        &self,
        shown: &[MotifTally],
        options: &GenerationOptions,
    ) -> String {
        let mut section = String::from("## Instructions for AI Systems\n\n");
        for tally in shown {
            let name = self.motif_name(tally);
            section.push_str(&format!(
                "- Favor \"{}\" reasoning when options conflict ({} of observed choices).\n",
                name, tally.share
            ));
        }
        section.push_str("- Surface motif conflicts explicitly instead of resolving them silently.\n");
        match options.target_audience {
            TargetAudience::Personal => {
                section.push_str(
                    "- Address me directly, and flag any recommendation that cuts against the motifs above.\n",
                );
            }
            TargetAudience::Technical => {
                section.push_str(
                    "- Treat the shares above as soft priors over the user's decision policy, not hard constraints.\n",
                );
            }
        }
        section.push('\n');
        section
    }
}
