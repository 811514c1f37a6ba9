use std::fmt::Write;

use colored::{ColoredString, Colorize};
use unicode_width::UnicodeWidthStr;

use crate::core::{format_card_date, format_table_datetime};
use crate::features::board::{BoardStats, Task, TaskList, ViewMode};
use crate::features::nlp::{ParsedTask, Priority};

/// Colored priority badge.
fn priority_badge(priority: Priority) -> ColoredString {
    let label = priority.to_string();
    match priority {
        Priority::P1 => label.red().bold(),
        Priority::P2 => label.yellow().bold(),
        Priority::P3 => label.blue(),
        Priority::P4 => label.dimmed(),
    }
}

fn checkbox(task: &Task) -> ColoredString {
    if task.completed {
        "[x]".green()
    } else {
        "[ ]".white()
    }
}

/// Format a parse result (nothing stored).
pub fn format_parsed_task_pretty(task: &ParsedTask) -> String {
    let mut output = format!("{}\n", "Parsed Task".yellow().bold());
    writeln!(output, "  {} {}", "Name:".cyan().bold(), task.name).ok();
    writeln!(output, "  {} {}", "Assignee:".magenta(), task.assignee).ok();
    writeln!(output, "  {} {}", "Due Date:".cyan(), task.due_date.format("%Y-%m-%d")).ok();
    writeln!(output, "  {} {}", "Due Time:".cyan(), task.due_time).ok();
    writeln!(output, "  {} {}", "Priority:".red(), priority_badge(task.priority)).ok();
    output
}

/// Format a single task record with all of its fields.
pub fn format_task_pretty(task: &Task) -> String {
    let mut output = format!("{} {}\n", checkbox(task), task.name.bold());
    writeln!(output, "  {}: {}", "ID".dimmed(), task.id).ok();
    writeln!(output, "  {}: {}", "Assignee".dimmed(), task.assignee).ok();
    writeln!(
        output,
        "  {}: {}, {}",
        "Due".dimmed(),
        task.due_time,
        format_card_date(task.due_date)
    )
    .ok();
    writeln!(output, "  {}: {}", "Priority".dimmed(), priority_badge(task.priority)).ok();
    writeln!(
        output,
        "  {}: {}",
        "Status".dimmed(),
        if task.completed { "completed" } else { "pending" }
    )
    .ok();
    writeln!(
        output,
        "  {}: {}",
        "Created".dimmed(),
        task.created_at.format("%Y-%m-%d %H:%M UTC")
    )
    .ok();
    output
}

/// Compact two-line card used by the cards view.
fn format_card(task: &Task) -> String {
    let name = if task.completed {
        task.name.dimmed().strikethrough()
    } else {
        task.name.bold()
    };

    format!(
        "{} {}  {}\n      {}  {}  {}  {}\n",
        checkbox(task),
        name,
        priority_badge(task.priority),
        format!("#{}", task.id).dimmed(),
        task.assignee.magenta(),
        task.due_time.to_string().yellow(),
        format_card_date(task.due_date).yellow()
    )
}

fn format_stats_tiles(stats: &BoardStats) -> String {
    stats
        .tiles()
        .iter()
        .map(|(label, value)| format!("{} {}", format!("{label}:").dimmed(), value.to_string().bold()))
        .collect::<Vec<_>>()
        .join("   ")
}

fn format_section<'a>(
    output: &mut String,
    title: String,
    empty_text: &str,
    tasks: impl Iterator<Item = &'a Task>,
) {
    writeln!(output, "{}", title.bold()).ok();
    let mut any = false;
    for task in tasks {
        output.push_str(&format_card(task));
        any = true;
    }
    if !any {
        writeln!(output, "  {}", empty_text.dimmed()).ok();
    }
}

fn format_cards_view(list: &TaskList, stats: &BoardStats, output: &mut String) {
    format_section(
        output,
        format!("Pending Tasks ({})", stats.pending),
        "No pending tasks",
        list.pending(),
    );
    output.push('\n');
    format_section(
        output,
        format!("Completed Tasks ({})", stats.completed),
        "No completed tasks",
        list.completed(),
    );

    if stats.urgent > 0 {
        output.push('\n');
        writeln!(
            output,
            "{}",
            format!("Urgent Tasks (P1) - {}", stats.urgent).red().bold()
        )
        .ok();
        for task in list.urgent() {
            output.push_str(&format_card(task));
        }
    }
}

fn format_table_view(list: &TaskList, output: &mut String) {
    writeln!(output, "{}", format!("Task List ({} items)", list.len()).bold()).ok();
    if list.is_empty() {
        writeln!(output, "  {}", "No tasks".dimmed()).ok();
        return;
    }

    let when: Vec<String> = list
        .tasks()
        .iter()
        .map(|t| format_table_datetime(t.due_date, t.due_time))
        .collect();
    let name_width = column_width("Task", list.tasks().iter().map(|t| t.name.as_str()));
    let assignee_width =
        column_width("Assigned To", list.tasks().iter().map(|t| t.assignee.as_str()));
    let when_width = column_width("Due Date/Time", when.iter().map(String::as_str));

    writeln!(
        output,
        "    {}  {}  {}  {}",
        pad("Task", name_width).dimmed(),
        pad("Assigned To", assignee_width).dimmed(),
        pad("Due Date/Time", when_width).dimmed(),
        "Priority".dimmed()
    )
    .ok();

    for (task, when) in list.tasks().iter().zip(&when) {
        let name = pad(&task.name, name_width);
        let name = if task.completed {
            name.dimmed().strikethrough()
        } else {
            name.normal()
        };
        writeln!(
            output,
            "{} {}  {}  {}  {}",
            checkbox(task),
            name,
            pad(&task.assignee, assignee_width),
            pad(when, when_width),
            priority_badge(task.priority)
        )
        .ok();
    }
}

/// Format the whole board: stats tiles followed by the chosen view.
pub fn format_board_pretty(list: &TaskList, view: ViewMode) -> String {
    let stats = BoardStats::calculate(list.tasks());
    let mut output = format_stats_tiles(&stats);
    output.push('\n');
    output.push_str(&"─".repeat(60));
    output.push('\n');

    match view {
        ViewMode::Cards => format_cards_view(list, &stats, &mut output),
        ViewMode::Table => format_table_view(list, &mut output),
    }

    output
}

/// Widest terminal width among the header and values.
fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(UnicodeWidthStr::width)
        .chain(std::iter::once(header.width()))
        .max()
        .unwrap_or_default()
}

/// Left-align `text` to `width` terminal columns. Wide (CJK) characters
/// count as two.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}
