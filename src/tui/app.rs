use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use tracing::{info, warn};
use tui_input::{Input, InputRequest};

use rutherford_scholarship::{
    config::Config,
    error::Result,
    report::{build_report, export_path, export_report, ExportFormat, Report, ReportRow, StudentFilter, Summary, VerdictFormatter},
    storage::{Database, StudentStore},
};

use crate::tui::theme::Theme;

const MAX_LOGS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: LogLevel,
    pub message: String,
}

/// What the dashboard is currently showing. Owned by the session, never global.
#[derive(Debug, Clone, Default)]
pub struct DashboardFilter {
    pub name: Input,
    pub grade_level: Option<String>,
}

impl DashboardFilter {
    pub fn student_filter(&self) -> StudentFilter {
        match &self.grade_level {
            Some(level) => StudentFilter::GradeLevel(level.clone()),
            None => StudentFilter::All,
        }
    }

    /// Case-insensitive substring match on the name input.
    pub fn matches(&self, row: &ReportRow) -> bool {
        let needle = self.name.value().trim().to_lowercase();
        needle.is_empty() || row.student_name.to_lowercase().contains(&needle)
    }

    pub fn grade_label(&self) -> &str {
        self.grade_level.as_deref().unwrap_or("All grades")
    }

    /// All → each level in order → All.
    pub fn cycle_grade_level(&mut self, levels: &[String]) {
        self.grade_level = match &self.grade_level {
            None => levels.first().cloned(),
            Some(current) => levels
                .iter()
                .position(|level| level == current)
                .and_then(|i| levels.get(i + 1))
                .cloned(),
        };
    }
}

/// Rows for the dashboard: the store query for the grade level, then the name filter.
pub fn build_view<S: StudentStore + ?Sized>(store: &S, filter: &DashboardFilter) -> Result<Report> {
    let mut report = build_report(store, &filter.student_filter())?;
    report.rows.retain(|row| filter.matches(row));
    Ok(report)
}

pub struct App {
    // UI State
    pub should_quit: bool,
    pub show_help: bool,
    pub input_mode: InputMode,
    pub selected_index: usize,
    pub status_message: String,
    pub theme: Theme,

    // Data
    pub filter: DashboardFilter,
    pub grade_levels: Vec<String>,
    pub report: Report,
    pub summary: Summary,
    pub logs: Vec<LogEntry>,

    // Backend
    pub config: Config,
    pub formatter: VerdictFormatter,
    db: Database,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let db = Database::new(&config.database.path)?;
        Self::with_database(config, db)
    }

    pub fn with_database(config: Config, db: Database) -> Result<Self> {
        let mut app = Self {
            should_quit: false,
            show_help: false,
            input_mode: InputMode::Normal,
            selected_index: 0,
            status_message: "Ready".to_string(),
            theme: Theme::default(),
            filter: DashboardFilter::default(),
            grade_levels: Vec::new(),
            report: Report {
                filter: StudentFilter::All,
                rows: Vec::new(),
            },
            summary: Summary::default(),
            logs: Vec::new(),
            formatter: VerdictFormatter::from_config(&config),
            config,
            db,
        };
        app.reload()?;
        Ok(app)
    }

    /// Re-read grade levels and students from the store.
    pub fn reload(&mut self) -> Result<()> {
        self.grade_levels = self.db.grade_levels()?;
        let stale = self
            .filter
            .grade_level
            .as_ref()
            .map_or(false, |level| !self.grade_levels.contains(level));
        if stale {
            self.filter.grade_level = None;
        }

        self.refresh_view()?;
        let stored = self.db.count()?;
        if stored == 0 {
            self.add_log(LogLevel::Warning, "Student store is empty; run `scholarship-checker seed`");
        } else {
            self.add_log(
                LogLevel::Info,
                &format!("Loaded {} students in {} grade levels", stored, self.grade_levels.len()),
            );
        }
        Ok(())
    }

    fn refresh_view(&mut self) -> Result<()> {
        self.report = build_view(&self.db, &self.filter)?;
        self.summary = self.report.summary();
        if self.selected_index >= self.report.rows.len() {
            self.selected_index = self.report.rows.len().saturating_sub(1);
        }
        self.status_message = format!("{} | {} shown", self.filter.grade_label(), self.report.rows.len());
        Ok(())
    }

    pub fn selected_row(&self) -> Option<&ReportRow> {
        self.report.rows.get(self.selected_index)
    }

    pub fn next_item(&mut self) {
        let len = self.report.rows.len();
        if len > 0 {
            self.selected_index = (self.selected_index + 1) % len;
        }
    }

    pub fn previous_item(&mut self) {
        let len = self.report.rows.len();
        if len > 0 {
            if self.selected_index == 0 {
                self.selected_index = len - 1;
            } else {
                self.selected_index -= 1;
            }
        }
    }

    pub fn cycle_grade_level(&mut self) -> Result<()> {
        self.filter.cycle_grade_level(&self.grade_levels);
        self.selected_index = 0;
        self.refresh_view()?;
        self.add_log(LogLevel::Info, &format!("Showing {}", self.filter.grade_label()));
        Ok(())
    }

    /// Write the rows currently on screen to a timestamped CSV file.
    pub fn export_csv(&mut self) -> Result<PathBuf> {
        let stem = format!("scholarship_results_{}", Local::now().format("%Y%m%d_%H%M%S"));
        let path = export_path(&self.config.export_dir(), &stem, ExportFormat::Csv);
        export_report(&self.report, &self.formatter, &path, ExportFormat::Csv)?;
        Ok(path)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C quits from any mode, including while typing a name.
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.input_mode == InputMode::Editing {
            self.handle_editing_key(key);
            return;
        }

        let result = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                Ok(())
            }
            KeyCode::Char('/') => {
                self.input_mode = InputMode::Editing;
                self.status_message = "Type a name; Enter or Esc to finish".to_string();
                Ok(())
            }
            KeyCode::Char('g') => self.cycle_grade_level(),
            KeyCode::Down | KeyCode::Char('j') => {
                self.next_item();
                Ok(())
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.previous_item();
                Ok(())
            }
            KeyCode::Char('r') => self.reload(),
            KeyCode::Char('e') => match self.export_csv() {
                Ok(path) => {
                    info!("Dashboard export written to {}", path.display());
                    let message = format!("✓ Exported {} rows to {}", self.report.rows.len(), path.display());
                    self.status_message = message.clone();
                    self.add_log(LogLevel::Success, &message);
                    Ok(())
                }
                Err(e) => Err(e),
            },
            KeyCode::Char('?') | KeyCode::Char('h') => {
                self.show_help = !self.show_help;
                Ok(())
            }
            _ => Ok(()),
        };

        if let Err(e) = result {
            warn!("Dashboard action failed: {}", e);
            self.status_message = format!("Error: {}", e);
            self.add_log(LogLevel::Error, &e.to_string());
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                let value = self.filter.name.value().trim().to_string();
                if !value.is_empty() {
                    self.add_log(LogLevel::Info, &format!("Name filter: {}", value));
                }
                // Restores the grade/count status line.
                if let Err(e) = self.refresh_view() {
                    self.add_log(LogLevel::Error, &e.to_string());
                }
            }
            _ => {
                let Some(request) = input_request(key) else {
                    return;
                };
                if self.filter.name.handle(request).is_some() {
                    self.selected_index = 0;
                    if let Err(e) = self.refresh_view() {
                        self.add_log(LogLevel::Error, &e.to_string());
                    }
                }
            }
        }
    }

    pub fn add_log(&mut self, level: LogLevel, message: &str) {
        self.logs.push(LogEntry {
            timestamp: Local::now(),
            level,
            message: message.to_string(),
        });
        if self.logs.len() > MAX_LOGS {
            self.logs.remove(0);
        }
    }
}

/// Line-editing keys for the name filter.
fn input_request(key: KeyEvent) -> Option<InputRequest> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('u') if ctrl => Some(InputRequest::DeleteLine),
        KeyCode::Char('w') if ctrl => Some(InputRequest::DeletePrevWord),
        KeyCode::Char(c) if !ctrl => Some(InputRequest::InsertChar(c)),
        KeyCode::Backspace => Some(InputRequest::DeletePrevChar),
        KeyCode::Delete => Some(InputRequest::DeleteNextChar),
        KeyCode::Left => Some(InputRequest::GoToPrevChar),
        KeyCode::Right => Some(InputRequest::GoToNextChar),
        KeyCode::Home => Some(InputRequest::GoToStart),
        KeyCode::End => Some(InputRequest::GoToEnd),
        _ => None,
    }
}
