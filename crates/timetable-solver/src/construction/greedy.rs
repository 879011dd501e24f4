use std::time::Instant;

use rand::seq::SliceRandom;
use rand::Rng;
use timetable_config::GreedyConfig;
use timetable_core::{ClassId, Day, Hour, ProfId, ScheduleState, SubjectId};
use tracing::{debug, info};

use super::{required_hours, ConstructionReport, Constructor};

/// Greedy constructor.
///
/// For each class, subjects are placed by weekly hours descending. Ties are
/// broken at random, redrawn for each class. Each subject goes to the least
/// loaded professor that has enough hours free together with the class,
/// scanning days in random order and taking at most the daily cap per day.
/// When no professor fits, the cheaper relaxation per the cost weights is
/// applied: allowing the unavailable day, or raising the daily cap by one
/// hour. Once the day is full and the unavailable day is allowed, the best
/// partial placement is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreedyConstructor {
    respect_unavailability: bool,
}

impl Default for GreedyConstructor {
    fn default() -> Self {
        Self::new()
    }
}

impl GreedyConstructor {
    pub fn new() -> Self {
        Self {
            respect_unavailability: true,
        }
    }

    pub fn from_config(config: &GreedyConfig) -> Self {
        Self {
            respect_unavailability: config.respect_unavailability,
        }
    }

    /// Whether to start by keeping professors off their unavailable day.
    pub fn with_respect_unavailability(mut self, respect: bool) -> Self {
        self.respect_unavailability = respect;
        self
    }

    fn place_subject<R: Rng>(
        &self,
        state: &mut ScheduleState<'_>,
        class: ClassId,
        subject: SubjectId,
        rng: &mut R,
        report: &mut ConstructionReport,
    ) {
        let problem = state.problem();
        let needed = state.weekly_subject_residual_hours(class, subject);
        if needed <= 0 {
            return;
        }
        let needed = needed as usize;
        let weights = problem.weights();
        let cap = problem.subject_max_hours_per_day();
        let hours_per_day = problem.hours_per_day();
        let mut extra = 0;
        let mut avoid_unavailable = self.respect_unavailability;

        loop {
            let profs = ranked_professors(state, class, subject, rng);
            let mut best: Option<(ProfId, Vec<(Day, Hour)>)> = None;
            for p in profs {
                let hours = free_hours(state, class, p, needed, cap + extra, avoid_unavailable, rng);
                if best.as_ref().map_or(true, |(_, b)| hours.len() > b.len()) {
                    best = Some((p, hours));
                }
                if best.as_ref().is_some_and(|(_, b)| b.len() == needed) {
                    break;
                }
            }

            let fits = best.as_ref().is_some_and(|(_, b)| b.len() == needed);
            let exhausted = !avoid_unavailable && cap + extra >= hours_per_day;
            if fits || exhausted {
                if let Some((p, hours)) = best {
                    for (d, h) in hours {
                        if state.assign_hour(class, d, h, p) {
                            report.placed_hours += 1;
                        }
                    }
                }
                let missing = state.weekly_subject_residual_hours(class, subject).max(0) as usize;
                if missing > 0 {
                    debug!(
                        event = "greedy_unplaced",
                        class = problem.class_name(class),
                        subject = problem.subject_name(subject),
                        missing,
                    );
                }
                report.unplaced_hours += missing;
                return;
            }

            if avoid_unavailable
                && (weights.professor_unavailability
                    < (extra as i64 + 1) * weights.max_subject_hours_per_day
                    || cap + extra >= hours_per_day)
            {
                avoid_unavailable = false;
                report.unavailability_relaxations += 1;
                debug!(
                    event = "greedy_relax",
                    kind = "unavailability",
                    class = problem.class_name(class),
                    subject = problem.subject_name(subject),
                );
            } else {
                extra += 1;
                report.daily_cap_relaxations += 1;
                debug!(
                    event = "greedy_relax",
                    kind = "daily_cap",
                    class = problem.class_name(class),
                    subject = problem.subject_name(subject),
                    per_day = cap + extra,
                );
            }
        }
    }
}

impl Constructor for GreedyConstructor {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn construct<R: Rng>(&self, state: &mut ScheduleState<'_>, rng: &mut R) -> ConstructionReport {
        let start = Instant::now();
        let problem = state.problem();
        info!(
            event = "construction_start",
            constructor = self.name(),
            classes = problem.class_count() as u64,
            required_hours = required_hours(state) as u64,
        );

        let mut report = ConstructionReport::default();
        for c in problem.classes() {
            let mut subjects: Vec<SubjectId> = problem.subjects().collect();
            subjects.shuffle(rng);
            subjects.sort_by_key(|&s| std::cmp::Reverse(problem.subject_weekly_hours(s)));

            for s in subjects {
                self.place_subject(state, c, s, rng, &mut report);
            }
            debug!(
                event = "class_constructed",
                class = problem.class_name(c),
                empty_slots = state.empty_slot_count() as u64,
            );
        }

        report.duration = start.elapsed();
        info!(
            event = "construction_end",
            constructor = self.name(),
            duration_ms = report.duration.as_millis() as u64,
            placed_hours = report.placed_hours as u64,
            unplaced_hours = report.unplaced_hours as u64,
        );
        report
    }
}

// The professor already teaching the subject to the class, or every
// professor of the subject shuffled and then ordered by weekly load.
fn ranked_professors<R: Rng>(
    state: &ScheduleState<'_>,
    class: ClassId,
    subject: SubjectId,
    rng: &mut R,
) -> Vec<ProfId> {
    if let Some(p) = state.subject_prof(class, subject) {
        return vec![p];
    }
    let mut profs = state.problem().subject_professors(subject).to_vec();
    profs.shuffle(rng);
    profs.sort_by_key(|&p| state.prof_weekly_hours(p));
    profs
}

// Up to `needed` hours free for both `class` and `prof`, visiting days in
// random order and taking at most `per_day` hours of the subject per day.
fn free_hours<R: Rng>(
    state: &ScheduleState<'_>,
    class: ClassId,
    prof: ProfId,
    needed: usize,
    per_day: usize,
    avoid_unavailable: bool,
    rng: &mut R,
) -> Vec<(Day, Hour)> {
    let problem = state.problem();
    let subject = problem.professor_subject(prof);
    let unavailable = problem.professor_unavailable_day(prof);
    let mut days: Vec<Day> = (0..problem.days()).collect();
    days.shuffle(rng);

    let mut out = Vec::with_capacity(needed);
    for d in days {
        if avoid_unavailable && d == unavailable {
            continue;
        }
        let mut taken = state.daily_subject_hours(class, d, subject);
        for h in 0..problem.hours_per_day() {
            if out.len() == needed || taken >= per_day {
                break;
            }
            if state.is_class_hour_free(class, d, h) && state.is_prof_hour_free(prof, d, h) {
                out.push((d, h));
                taken += 1;
            }
        }
        if out.len() == needed {
            break;
        }
    }
    out
}
