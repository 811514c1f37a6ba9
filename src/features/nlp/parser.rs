//! Natural language task parser.
//!
//! Parses strings like "Call client Rajeev tomorrow 5pm P1" into a task
//! name, an assignee, a due date, a due time and a priority.
//!
//! Extraction runs as a fixed sequence of stages (priority, time, date,
//! assignee, name). Each stage removes what it recognized from a working
//! remainder, so a later stage never sees text an earlier one claimed.
//! Within a stage, candidate patterns are tried in order and the first one
//! that yields a usable value wins.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::{Captures, Match, Regex};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{month_from_name, normalize_time, DueTime};
use crate::error::TaskflowError;

/// Name used when nothing in the input looks like a task title.
pub const DEFAULT_NAME: &str = "Untitled Task";

/// Assignee used when no person is mentioned.
pub const DEFAULT_ASSIGNEE: &str = "Unassigned";

/// Priority levels for tasks, P1 being the most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    /// Urgent.
    P1,
    P2,
    /// Normal; used when the input names no priority.
    #[default]
    P3,
    /// Whenever.
    P4,
}

impl Priority {
    /// Whether this is the urgent tier (P1).
    #[must_use]
    pub const fn is_urgent(&self) -> bool {
        matches!(self, Self::P1)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::P1 => "P1",
            Self::P2 => "P2",
            Self::P3 => "P3",
            Self::P4 => "P4",
        })
    }
}

impl FromStr for Priority {
    type Err = TaskflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "P1" => Ok(Self::P1),
            "P2" => Ok(Self::P2),
            "P3" => Ok(Self::P3),
            "P4" => Ok(Self::P4),
            _ => Err(TaskflowError::InvalidInput(format!(
                "invalid priority: {s:?} (expected P1-P4)"
            ))),
        }
    }
}

/// Result of parsing a natural language task string.
///
/// Every field is always populated; missing information is filled with
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedTask {
    /// The task title (what is left after extracting everything else).
    pub name: String,
    /// The person the task is for.
    pub assignee: String,
    /// Due date, serialized as `YYYY-MM-DD`.
    pub due_date: NaiveDate,
    /// Due time, serialized as `H:MM AM|PM`.
    pub due_time: DueTime,
    /// Priority tier.
    pub priority: Priority,
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("Invalid regex {pattern:?}: {e}"))
}

// Compiled regex patterns
static PRIORITY_PATTERN: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\bP[1-4]\b"));

static TIME_PATTERNS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        // 11pm, 5:30 pm
        compile(r"(?i)\b\d{1,2}(?::\d{2})?\s*(?:am|pm)\b"),
        // 14:00, 8:15
        compile(r"\b\d{1,2}:\d{2}\b"),
        // 5 pm
        compile(r"(?i)\b\d{1,2}\s*(?:am|pm)\b"),
    ]
});

static TOMORROW_PATTERN: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\btomorrow\b"));

static TODAY_PATTERN: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\btoday\b"));

/// A date pattern and the function that turns its captures into a date.
struct DatePattern {
    regex: Regex,
    /// Reject matches glued to another date-like run (`2025-06-10`
    /// contains `06-10`).
    standalone: bool,
    extract: fn(&Captures<'_>, i32) -> Option<NaiveDate>,
}

impl DatePattern {
    /// First match in `text` that resolves to a real calendar date.
    fn first_date(&self, text: &str, current_year: i32) -> Option<(NaiveDate, Range<usize>)> {
        self.regex.captures_iter(text).find_map(|caps| {
            let whole = caps.get(0)?;
            if self.standalone && !is_standalone(text, &whole) {
                return None;
            }
            (self.extract)(&caps, current_year).map(|date| (date, whole.range()))
        })
    }
}

static DATE_PATTERNS: Lazy<[DatePattern; 4]> = Lazy::new(|| {
    [
        // 20th June, 3 Jan 2026
        DatePattern {
            regex: compile(
                r"(?i)\b(\d{1,2})(?:st|nd|rd|th)?\s+(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*(?:\s+(\d{4}))?\b",
            ),
            standalone: false,
            extract: day_month_name,
        },
        // 20/6, 20/06/2025
        DatePattern {
            regex: compile(r"\b(\d{1,2})/(\d{1,2})(?:/(\d{4}))?\b"),
            standalone: true,
            extract: day_month,
        },
        // 20-6, 20-06-2025
        DatePattern {
            regex: compile(r"\b(\d{1,2})-(\d{1,2})(?:-(\d{4}))?\b"),
            standalone: true,
            extract: day_month,
        },
        // 2025-06-20
        DatePattern {
            regex: compile(r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b"),
            standalone: false,
            extract: year_month_day,
        },
    ]
});

static ASSIGNEE_PATTERNS: Lazy<[Regex; 2]> = Lazy::new(|| {
    [
        // "... for Priya Shah", "... to Bob"
        compile(r"\b(?i:by|to|for)\s+(\p{Lu}[\p{L}'-]*(?:\s+\p{Lu}[\p{L}'-]*)*)"),
        // "... page Aman by" once the date has been cut away.
        // The leading space keeps a sentence-initial verb from qualifying.
        compile(r"\s(\p{Lu}[\p{L}'-]*(?:\s+\p{Lu}[\p{L}'-]*)*)\s+(?i:by|at|on)\b"),
    ]
});

static NAME_KEYWORDS: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\b(?:by|to|for|at|on)\b"));

static FALLBACK_SPLIT: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\b(?:by|to|for)\b"));

/// Working state threaded through the extraction stages.
#[derive(Debug, Clone, Default)]
struct Draft {
    remaining: String,
    priority: Option<Priority>,
    due_time: Option<DueTime>,
    due_date: Option<NaiveDate>,
    assignee: Option<String>,
    name: Option<String>,
}

struct Context<'a> {
    original: &'a str,
    today: NaiveDate,
}

type Stage = fn(Draft, &Context<'_>) -> Draft;

const STAGES: [(&str, Stage); 5] = [
    ("priority", extract_priority),
    ("time", extract_time),
    ("date", extract_date),
    ("assignee", extract_assignee),
    ("name", extract_name),
];

/// Parse a natural language task string, resolving dates against the local
/// current date.
///
/// # Examples
///
/// ```
/// use taskflow::features::nlp::{parse_task, Priority};
///
/// let task = parse_task("Call client Rajeev tomorrow 5pm P1");
/// assert_eq!(task.name, "Call client Rajeev");
/// assert_eq!(task.due_time.to_string(), "5:00 PM");
/// assert_eq!(task.priority, Priority::P1);
/// ```
#[must_use]
pub fn parse_task(input: &str) -> ParsedTask {
    parse_task_on(input, Local::now().date_naive())
}

/// Parse a natural language task string against an explicit "today".
///
/// Never fails: anything that cannot be recognized falls back to a default.
#[must_use]
pub fn parse_task_on(input: &str, today: NaiveDate) -> ParsedTask {
    debug!(input, %today, "parsing task");

    let ctx = Context {
        original: input,
        today,
    };
    let start = Draft {
        remaining: tidy(input),
        ..Draft::default()
    };

    let draft = STAGES.iter().fold(start, |draft, (stage, run)| {
        let next = run(draft, &ctx);
        debug!(stage, remaining = %next.remaining, "extraction stage done");
        next
    });

    let task = ParsedTask {
        name: draft.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
        assignee: draft.assignee.unwrap_or_else(|| DEFAULT_ASSIGNEE.to_string()),
        due_date: draft.due_date.unwrap_or(today),
        due_time: draft.due_time.unwrap_or_default(),
        priority: draft.priority.unwrap_or_default(),
    };
    debug!(?task, "parsed task");
    task
}

/// Reduce leftover text to a task title: drop connective keywords
/// (`by`, `to`, `for`, `at`, `on`) and collapse whitespace.
///
/// Applying it to its own output changes nothing.
#[must_use]
pub fn clean_name(text: &str) -> String {
    tidy(&NAME_KEYWORDS.replace_all(text, " "))
}

fn extract_priority(draft: Draft, ctx: &Context<'_>) -> Draft {
    // The first token in the untouched input decides; every token is stripped.
    let priority = PRIORITY_PATTERN
        .find(ctx.original)
        .and_then(|m| m.as_str().parse().ok());

    Draft {
        remaining: tidy(&PRIORITY_PATTERN.replace_all(&draft.remaining, " ")),
        priority,
        ..draft
    }
}

fn extract_time(draft: Draft, _ctx: &Context<'_>) -> Draft {
    let found = TIME_PATTERNS.iter().find_map(|pattern| {
        pattern
            .find_iter(&draft.remaining)
            .find_map(|m| normalize_time(m.as_str()).map(|time| (time, m.range())))
    });

    match found {
        Some((time, span)) => Draft {
            remaining: cut(&draft.remaining, span),
            due_time: Some(time),
            ..draft
        },
        None => draft,
    }
}

fn extract_date(draft: Draft, ctx: &Context<'_>) -> Draft {
    let relative: [(&Regex, fn(NaiveDate) -> Option<NaiveDate>); 2] = [
        (&*TOMORROW_PATTERN, |today| today.succ_opt()),
        (&*TODAY_PATTERN, Some),
    ];

    let found = relative
        .iter()
        .find_map(|(pattern, resolve)| {
            pattern
                .find(&draft.remaining)
                .and_then(|m| resolve(ctx.today).map(|date| (date, m.range())))
        })
        .or_else(|| {
            DATE_PATTERNS
                .iter()
                .find_map(|pattern| pattern.first_date(&draft.remaining, ctx.today.year()))
        });

    match found {
        Some((date, span)) => Draft {
            remaining: cut(&draft.remaining, span),
            due_date: Some(date),
            ..draft
        },
        None => draft,
    }
}

fn extract_assignee(draft: Draft, _ctx: &Context<'_>) -> Draft {
    let found = ASSIGNEE_PATTERNS.iter().find_map(|pattern| {
        let caps = pattern.captures(&draft.remaining)?;
        let who = caps.get(1)?.as_str().to_string();
        Some((who, caps.get(0)?.range()))
    });

    match found {
        Some((who, span)) => Draft {
            remaining: cut(&draft.remaining, span),
            assignee: Some(who),
            ..draft
        },
        None => draft,
    }
}

fn extract_name(draft: Draft, ctx: &Context<'_>) -> Draft {
    let mut name = clean_name(&draft.remaining);

    if name.is_empty() {
        // Everything was consumed; fall back to whatever preceded the first
        // assignment keyword in the original input.
        let head = FALLBACK_SPLIT.split(ctx.original).next().unwrap_or_default();
        name = tidy(&PRIORITY_PATTERN.replace_all(head, " "));
    }

    Draft {
        name: Some(name).filter(|n| !n.is_empty()),
        ..draft
    }
}

fn day_month_name(caps: &Captures<'_>, current_year: i32) -> Option<NaiveDate> {
    let day = caps.get(1)?.as_str().parse().ok()?;
    let month = month_from_name(caps.get(2)?.as_str())?;
    let year = year_or_current(caps.get(3), current_year)?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn day_month(caps: &Captures<'_>, current_year: i32) -> Option<NaiveDate> {
    let day = caps.get(1)?.as_str().parse().ok()?;
    let month = caps.get(2)?.as_str().parse().ok()?;
    let year = year_or_current(caps.get(3), current_year)?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn year_month_day(caps: &Captures<'_>, _current_year: i32) -> Option<NaiveDate> {
    let year = caps.get(1)?.as_str().parse().ok()?;
    let month = caps.get(2)?.as_str().parse().ok()?;
    let day = caps.get(3)?.as_str().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn year_or_current(m: Option<Match<'_>>, current_year: i32) -> Option<i32> {
    m.map_or(Some(current_year), |m| m.as_str().parse().ok())
}

/// True unless the match is glued to a `-` or `/` on either side.
fn is_standalone(text: &str, m: &Match<'_>) -> bool {
    let glued = |c: char| c == '-' || c == '/';
    let before = text[..m.start()].chars().next_back();
    let after = text[m.end()..].chars().next();
    !before.is_some_and(glued) && !after.is_some_and(glued)
}

/// Remove `span` from `text`, leaving a single space in its place.
fn cut(text: &str, span: Range<usize>) -> String {
    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..span.start]);
    out.push(' ');
    out.push_str(&text[span.end..]);
    tidy(&out)
}

fn tidy(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
