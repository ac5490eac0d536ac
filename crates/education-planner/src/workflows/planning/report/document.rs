use super::views::PlanReport;
use super::ReportError;
use std::path::Path;

pub const DEFAULT_LINES_PER_PAGE: usize = 54;
pub const DEFAULT_WIDTH: usize = 78;
pub const MIN_LINES_PER_PAGE: usize = 10;
pub const MIN_WIDTH: usize = 40;

/// Blank separator plus the "Page n of m" line.
const FOOTER_LINES: usize = 2;
const PAGE_BREAK: char = '\u{000C}';

/// Page geometry for the plain-text plan document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    lines_per_page: usize,
    width: usize,
}

impl PageLayout {
    pub fn new(lines_per_page: usize, width: usize) -> Result<Self, ReportError> {
        if lines_per_page < MIN_LINES_PER_PAGE || width < MIN_WIDTH {
            return Err(ReportError::InvalidLayout {
                lines_per_page,
                width,
            });
        }
        Ok(Self {
            lines_per_page,
            width,
        })
    }

    pub fn lines_per_page(&self) -> usize {
        self.lines_per_page
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn body_lines(&self) -> usize {
        self.lines_per_page - FOOTER_LINES
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            lines_per_page: DEFAULT_LINES_PER_PAGE,
            width: DEFAULT_WIDTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub number: usize,
    pub lines: Vec<String>,
}

/// Paginated, human-readable plan ready to save or print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanDocument {
    layout: PageLayout,
    pages: Vec<Page>,
}

impl PlanDocument {
    pub fn render(report: &PlanReport, layout: PageLayout) -> Self {
        let lines = compose(report, layout.width());
        let pages = paginate(lines, layout.body_lines());
        Self { layout, pages }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Pages separated by form feeds, each closed by its page footer.
    pub fn to_text(&self) -> String {
        let total = self.pages.len();
        let width = self.layout.width();
        self.pages
            .iter()
            .map(|page| {
                let mut text = page.lines.join("\n");
                text.push_str("\n\n");
                let footer = format!("Page {} of {}", page.number, total);
                text.push_str(&format!("{footer:>width$}"));
                text.push('\n');
                text
            })
            .collect::<Vec<_>>()
            .join(&PAGE_BREAK.to_string())
    }

    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), ReportError> {
        std::fs::write(path, self.to_text())?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    /// Section heading, kept on the same page as the line after it.
    Heading(String),
    Text(String),
    Blank,
}

fn compose(report: &PlanReport, width: usize) -> Vec<Line> {
    let mut lines = Vec::new();

    lines.push(Line::Heading(report.title.heading.clone()));
    lines.push(Line::Text(underline(&report.title.heading, '=')));
    if let Some(prepared_for) = &report.title.prepared_for {
        lines.push(Line::Text(prepared_for.clone()));
    }
    lines.push(Line::Text(format!("Generated {}", report.title.generated_on)));
    lines.push(Line::Blank);

    push_section(&mut lines, "Overview");
    let overview = &report.overview;
    lines.push(Line::Text(format!(
        "Schools selected: {}",
        overview.schools_selected
    )));
    lines.push(Line::Text(format!("Budget: {}", overview.budget_label)));
    lines.push(Line::Text(format!("Child age: {}", overview.child_age)));
    lines.push(Line::Blank);

    push_section(&mut lines, "Selected Schools");
    if report.schools.is_empty() {
        lines.push(Line::Text("No schools selected.".to_string()));
    }
    for (index, school) in report.schools.iter().enumerate() {
        let header = format!(
            "{}. {} ({})",
            index + 1,
            school.name,
            school.category_label
        );
        lines.extend(wrap_text(&header, width, "", "   "));
        let details = [
            format!("{} | {}", school.location, school.grade_range),
            format!(
                "Tuition: {} | Deadline: {}",
                school.tuition_label, school.application_deadline
            ),
            format!("Specialties: {}", school.specialties.join(", ")),
            format!("Competitiveness: {}", school.competitiveness_label),
        ];
        for detail in details {
            lines.extend(wrap_text(&detail, width, "   ", "     "));
        }
        if !school.preparation_tips.is_empty() {
            let tips = format!("Preparation: {}", school.preparation_tips.join("; "));
            lines.extend(wrap_text(&tips, width, "   ", "     "));
        }
        if !school.timeline.is_empty() {
            lines.push(Line::Text("   Timeline:".to_string()));
            for milestone in &school.timeline {
                let step = format!("{}: {}", milestone.window, milestone.task);
                lines.extend(wrap_text(&step, width, "     - ", "       "));
            }
        }
        lines.push(Line::Blank);
    }

    if !report.calendar.is_empty() {
        push_section(&mut lines, "Application Timeline");
        for phase in &report.calendar {
            let header = format!("{} ({})", phase.phase, phase.timeframe);
            lines.extend(wrap_text(&header, width, "", "   "));
            for task in phase.tasks {
                lines.extend(wrap_text(task, width, "  - ", "    "));
            }
        }
        lines.push(Line::Blank);
    }

    for section in &report.advice {
        push_section(&mut lines, &format!("Action Plan: {}", section.horizon));
        for bullet in &section.bullets {
            lines.extend(wrap_text(bullet, width, "  - ", "    "));
        }
        lines.push(Line::Blank);
    }

    if !report.support.is_empty() {
        push_section(&mut lines, "Admissions Support");
        for resource in &report.support {
            let header = format!("{} ({})", resource.name, resource.location);
            lines.extend(wrap_text(&header, width, "", "   "));
            lines.extend(wrap_text(resource.focus, width, "   ", "   "));
            let services = format!("Services: {}", resource.services.join(", "));
            lines.extend(wrap_text(&services, width, "   ", "     "));
        }
        lines.push(Line::Blank);
    }

    while lines.last() == Some(&Line::Blank) {
        lines.pop();
    }
    lines
}

fn push_section(lines: &mut Vec<Line>, title: &str) {
    lines.push(Line::Heading(title.to_string()));
    lines.push(Line::Text(underline(title, '-')));
}

fn underline(text: &str, ch: char) -> String {
    std::iter::repeat(ch).take(text.chars().count()).collect()
}

fn wrap_text(text: &str, width: usize, first_prefix: &str, rest_prefix: &str) -> Vec<Line> {
    wrap(text, width, first_prefix, rest_prefix)
        .into_iter()
        .map(Line::Text)
        .collect()
}

/// Greedy word wrap. Words longer than the line are left intact.
fn wrap(text: &str, width: usize, first_prefix: &str, rest_prefix: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = first_prefix.to_string();
    let mut current_len = first_prefix.chars().count();
    let mut fresh = true;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if !fresh && current_len + 1 + word_len > width {
            lines.push(std::mem::replace(&mut current, rest_prefix.to_string()));
            current_len = rest_prefix.chars().count();
            fresh = true;
        }
        if !fresh {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
        fresh = false;
    }

    if !fresh || lines.is_empty() {
        lines.push(current.trim_end().to_string());
    }
    lines
}

fn paginate(lines: Vec<Line>, capacity: usize) -> Vec<Page> {
    let mut pages: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut iter = lines.into_iter().peekable();

    while let Some(line) = iter.next() {
        let needed = match &line {
            Line::Heading(_) if iter.peek().is_some() => 2,
            _ => 1,
        };
        if !current.is_empty() && current.len() + needed > capacity {
            pages.push(std::mem::take(&mut current));
        }

        match line {
            Line::Blank if current.is_empty() => {}
            Line::Blank => current.push(String::new()),
            Line::Heading(text) | Line::Text(text) => current.push(text),
        }
    }

    if !current.is_empty() || pages.is_empty() {
        pages.push(current);
    }

    pages
        .into_iter()
        .enumerate()
        .map(|(index, lines)| Page {
            number: index + 1,
            lines,
        })
        .collect()
}
