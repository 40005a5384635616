//! Text report for `contest evaluate`.
//!
//! Scores are shown with one decimal place; the JSON output keeps full
//! precision.

use std::fmt;

use contest_core::Evaluation;

use crate::catalog::nature_multipliers;

/// Renders an [`Evaluation`] as a multi-line text report.
pub struct EvaluationReport<'a> {
    evaluation: &'a Evaluation,
}

impl<'a> EvaluationReport<'a> {
    pub fn new(evaluation: &'a Evaluation) -> Self {
        Self { evaluation }
    }

    fn write_monster(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let monster = &self.evaluation.monster;
        let template = &monster.template;

        writeln!(
            f,
            "No.{} {} ({}, {} phase, stamina {})",
            template.catalog_label(),
            template.name,
            template.archetype.label(),
            template.phase.label(),
            template.stamina_max
        )?;
        writeln!(
            f,
            "  Personality   {} ({})",
            monster.nature.label(),
            nature_multipliers(monster.nature).summary()
        )?;
        writeln!(f, "  Mood          {}", monster.active_mood.label())
    }

    fn write_stats(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = &self.evaluation.stats;
        writeln!(f, "  Base stats    {}", stats.base)?;
        writeln!(f, "  Personality   {}", stats.effective)?;

        writeln!(f, "  Gambits")?;
        for (index, slot) in self.evaluation.gambits.slots().iter().enumerate() {
            match slot {
                Some(gambit) => writeln!(
                    f,
                    "    {}. {} ({})",
                    index + 1,
                    gambit.name,
                    gambit.multipliers.summary()
                )?,
                None => writeln!(f, "    {}. -", index + 1)?,
            }
        }
        writeln!(f, "  After gambits {}", stats.after_gambits)?;

        let appeal = &self.evaluation.appeal;
        match &appeal.appeal {
            Some(profile) => writeln!(
                f,
                "  Appeal        {} x{} ({} per use)",
                profile.name,
                appeal.uses.max(0),
                profile.multipliers.summary_without_neutral()
            )?,
            None => writeln!(f, "  Appeal        none")?,
        }
        writeln!(f, "  Final stats   {}", stats.final_stats)
    }

    fn write_stages(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let evaluation = self.evaluation;
        let mut results = evaluation.sheet.stages.iter().peekable();

        for (slot, stage) in evaluation.stages.iter().enumerate() {
            let Some(stage) = stage else {
                writeln!(f, "Stage {}: -", slot + 1)?;
                continue;
            };
            writeln!(
                f,
                "Stage {}: {} ({})",
                slot + 1,
                stage.name,
                stage.bias_summary()
            )?;

            let Some(result) = results.next_if(|result| result.slot == slot) else {
                continue;
            };
            for score in &result.judges {
                let Some(judge) = evaluation.judges.get(score.slot).and_then(Option::as_ref)
                else {
                    continue;
                };
                writeln!(
                    f,
                    "  {:<20} {:<28} {:>7.1}",
                    judge.name,
                    judge.formula().to_string(),
                    score.score
                )?;
            }
            writeln!(f, "  {:<49} {:>7.1}", "Stage total", result.total)?;
        }
        Ok(())
    }
}

impl fmt::Display for EvaluationReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_monster(f)?;
        self.write_stats(f)?;
        writeln!(f)?;
        self.write_stages(f)?;
        writeln!(f)?;

        let sheet = &self.evaluation.sheet;
        writeln!(f, "Grand total   {:.1}", sheet.grand_total)?;
        writeln!(
            f,
            "Average       {:.1} over {} stage(s)",
            sheet.average,
            sheet.valid_stage_count()
        )
    }
}
