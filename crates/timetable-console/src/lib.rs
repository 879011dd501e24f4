//! Colorful console output for timetable search events.
//!
//! Provides a custom `tracing` layer that formats construction and
//! neighborhood events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Construction start/end
//! - **DEBUG**: Relaxations, empty neighborhoods, new best schedules
//! - **TRACE**: Individual moves

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "timetable_solver=info";

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and installs the tracing subscriber.
pub fn init() {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);
        print_banner();

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(TimetableConsoleLayer)
            .try_init();
    });
}

fn elapsed_secs() -> f64 {
    EPOCH.get().map_or(0.0, |epoch| epoch.elapsed().as_secs_f64())
}

fn print_banner() {
    let banner = r#"
 _____ _                _        _     _
|_   _(_)_ __ ___   ___| |_ __ _| |__ | | ___
  | | | | '_ ` _ \ / _ \ __/ _` | '_ \| |/ _ \
  | | | | | | | | |  __/ || (_| | |_) | |  __/
  |_| |_|_| |_| |_|\___|\__\__,_|_.__/|_|\___|
"#;

    let version_line = format!("          v{} - Weekly Timetable Search\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats timetable events with colors.
pub struct TimetableConsoleLayer;

impl<S: Subscriber> Layer<S> for TimetableConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("timetable_") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    constructor: Option<String>,
    neighborhood: Option<String>,
    kind: Option<String>,
    class: Option<String>,
    subject: Option<String>,
    cost: Option<String>,
    mv: Option<String>,
    classes: Option<u64>,
    required_hours: Option<u64>,
    placed_hours: Option<u64>,
    unplaced_hours: Option<u64>,
    duration_ms: Option<u64>,
    attempts: Option<u64>,
    moves: Option<u64>,
    per_day: Option<u64>,
    applied: Option<bool>,
}

impl EventVisitor {
    fn set_text(&mut self, name: &str, value: String) {
        let slot = match name {
            "event" => &mut self.event,
            "constructor" => &mut self.constructor,
            "neighborhood" => &mut self.neighborhood,
            "kind" => &mut self.kind,
            "class" => &mut self.class,
            "subject" => &mut self.subject,
            "cost" => &mut self.cost,
            "mv" => &mut self.mv,
            _ => return,
        };
        *slot = Some(value);
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set_text(field.name(), s.trim_matches('"').to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "classes" => self.classes = Some(value),
            "required_hours" => self.required_hours = Some(value),
            "placed_hours" => self.placed_hours = Some(value),
            "unplaced_hours" => self.unplaced_hours = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "attempts" => self.attempts = Some(value),
            "moves" => self.moves = Some(value),
            "per_day" => self.per_day = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "applied" {
            self.applied = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_text(field.name(), value.to_string());
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "construction_start" => format_construction_start(v),
        "construction_end" => format_construction_end(v),
        "greedy_relax" => format_relax(v),
        "neighborhood_empty" => format_neighborhood_empty(v),
        "new_best" => format_new_best(v),
        "make_move" => format_move(v, level),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_construction_start(v: &EventVisitor) -> String {
    let constructor = v.constructor.as_deref().unwrap_or("unknown");
    format!(
        "{} {} {} construction │ {} classes │ {} hours to place",
        format_elapsed(),
        "▶".bright_blue(),
        constructor.white().bold(),
        v.classes
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_yellow(),
        v.required_hours
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_yellow()
    )
}

fn format_construction_end(v: &EventVisitor) -> String {
    let constructor = v.constructor.as_deref().unwrap_or("unknown");
    let unplaced = v.unplaced_hours.unwrap_or(0);
    let status = if unplaced == 0 {
        "COMPLETE".bright_green().bold().to_string()
    } else {
        format!("{} unplaced", unplaced.to_formatted_string(&Locale::en))
            .bright_red()
            .bold()
            .to_string()
    };

    format!(
        "{} {} {} construction ended │ {} │ {} placed │ {}",
        format_elapsed(),
        "◀".bright_blue(),
        constructor.white().bold(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        v.placed_hours
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .white(),
        status
    )
}

fn format_relax(v: &EventVisitor) -> String {
    let what = match (v.kind.as_deref(), v.per_day) {
        (Some("daily_cap"), Some(n)) => format!("daily cap raised to {}", n),
        (Some("unavailability"), _) => "unavailable day allowed".to_string(),
        (kind, _) => kind.unwrap_or("relaxed").to_string(),
    };
    format!(
        "{} {} {} / {} │ {}",
        format_elapsed(),
        "~".yellow(),
        v.class.as_deref().unwrap_or("?"),
        v.subject.as_deref().unwrap_or("?"),
        what.yellow()
    )
}

fn format_neighborhood_empty(v: &EventVisitor) -> String {
    format!(
        "{} {} {} neighborhood empty after {} draws",
        format_elapsed(),
        "∅".bright_red(),
        v.neighborhood.as_deref().unwrap_or("unknown").white().bold(),
        v.attempts
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_black()
    )
}

fn format_new_best(v: &EventVisitor) -> String {
    format!(
        "    {} Move {:>7} │ {}",
        "->".bright_blue(),
        v.moves
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .white(),
        format_cost(v.cost.as_deref().unwrap_or("N/A"))
    )
}

fn format_move(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }
    let icon = if v.applied.unwrap_or(false) {
        "✓".bright_green().to_string()
    } else {
        "✗".bright_red().to_string()
    };
    format!(
        "{} {} {} │ {}",
        format_elapsed(),
        icon,
        v.neighborhood.as_deref().unwrap_or("?").bright_black(),
        v.mv.as_deref().unwrap_or("?").bright_black()
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

// Costs are minimized: any positive part is a violation.
fn format_cost(cost: &str) -> String {
    let Some((hard, soft)) = parse_cost(cost) else {
        return cost.white().to_string();
    };

    let hard_str = if hard > 0 {
        format!("{}hard", hard).bright_red().to_string()
    } else {
        format!("{}hard", hard).bright_green().to_string()
    };
    let soft_str = if soft > 0 {
        format!("{}soft", soft).yellow().to_string()
    } else {
        format!("{}soft", soft).white().to_string()
    };
    format!("{}/{}", hard_str, soft_str)
}

/// Splits `"{h}hard/{s}soft"`; anything else is `None`.
fn parse_cost(cost: &str) -> Option<(i64, i64)> {
    let (hard, soft) = cost.split_once('/')?;
    let hard = hard.strip_suffix("hard")?.parse().ok()?;
    let soft = soft.strip_suffix("soft")?.parse().ok()?;
    Some((hard, soft))
}
