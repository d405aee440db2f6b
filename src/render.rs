//! Colored terminal summaries of what was written.

use owo_colors::OwoColorize;
use weektaak_core::pipeline::CalendarReport;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for CalendarReport {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        if self.removed > 0 {
            let label = format!("({} old {} removed)", self.removed, pluralize("calendar", self.removed));
            lines.push(format!("{} {}", "-".red(), label.dimmed()));
        }

        let people = self.personal.len();
        lines.push(format!(
            "{} {} {} from {} {}",
            "✓".green(),
            people,
            pluralize("calendar", people),
            self.weeks,
            pluralize("week", self.weeks)
        ));
        for path in &self.personal {
            lines.push(format!("   {}", path.display().dimmed()));
        }

        if let Some(admin) = &self.admin {
            lines.push(format!("{} admin {}", "✓".green(), admin.display().dimmed()));
        }

        lines.join("\n")
    }
}

pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
