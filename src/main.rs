mod cli;
#[cfg(feature = "tui")]
mod tui;

use clap::Parser;
use cli::{Cli, Commands, OutputArgs, OutputFormat};
use colored::*;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rutherford_scholarship::{
    config::Config,
    eligibility::{self, CourseGrade, CourseGrades, CourseGroup},
    error::{self, ScholarshipError},
    report::{self, ExportFormat, Report, StudentFilter, Summary, VerdictFormatter},
    storage::{seed, Database, StudentStore},
    utils,
};

const DEFAULT_LOG_FILTER: &str = "rutherford_scholarship=info,scholarship_checker=info,warn";

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_logging(cli.logs_to_terminal());

    let config = match Config::load(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Init => initialize(&config, &cli.config),

        Commands::Seed { yes } => seed_roster(&config, yes),

        Commands::Check { names, all, output } => {
            let filter = if all {
                StudentFilter::All
            } else {
                StudentFilter::Names(names)
            };
            info!("Checking {}", filter);
            check_students(&config, &filter, &output, "🎓 Scholarship Eligibility Summary:")
        }

        Commands::Grade { level, output } => {
            let filter = StudentFilter::grade_level(&level);
            info!("Checking grade level {}", level);
            check_students(
                &config,
                &filter,
                &output,
                &format!("🎓 Scholarship Results for {}:", level.trim()),
            )
        }

        Commands::Evaluate { grades, format } => evaluate_grades(&config, &grades, format),

        Commands::Courses => {
            list_courses();
            Ok(())
        }

        Commands::Stats { format } => show_stats(&config, format),

        Commands::Interactive => run_interactive(&config),

        #[cfg(feature = "tui")]
        Commands::Tui => tui::run_tui(config).await,
    };

    if let Err(e) = result {
        error!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

impl Cli {
    /// The dashboard owns the terminal; tracing output would tear the screen.
    fn logs_to_terminal(&self) -> bool {
        match self.command {
            #[cfg(feature = "tui")]
            Commands::Tui => false,
            _ => true,
        }
    }
}

fn init_logging(enabled: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    if enabled {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::sink)
            .init();
    }
}

fn open_database(config: &Config) -> error::Result<Database> {
    Database::new(&config.database.path)
}

fn initialize(config: &Config, config_path: &str) -> error::Result<()> {
    println!("{}", "Initializing Scholarship Checker...".green());

    let db = open_database(config)?;
    println!("{}", "✓ Database initialized".green());

    match config.write_default_file(config_path)? {
        Some(path) => println!("{} {}", "✓ Configuration written to".green(), path.display()),
        None => println!("{}", "✓ Configuration loaded".green()),
    }

    println!("\n{}", "Configuration:".cyan());
    println!("  Database:       {}", config.database.path);
    println!("  Top award:      {}", VerdictFormatter::currency(config.awards.top_amount));
    println!("  Reduced award:  {}", VerdictFormatter::currency(config.awards.reduced_amount));
    println!("  Icons:          {}", config.display.icons);
    println!("  Export dir:     {}", config.export.directory);
    println!("  Students:       {}", db.count()?);

    println!("\n{}", "Ready to use! Try running:".cyan());
    println!("  {} to load the demo roster", "scholarship-checker seed".yellow());
    println!("  {} to check everyone", "scholarship-checker check --all".yellow());
    println!("  {} to launch TUI dashboard", "scholarship-checker tui".yellow());
    Ok(())
}

fn seed_roster(config: &Config, yes: bool) -> error::Result<()> {
    let mut db = open_database(config)?;

    let existing = db.count()?;
    if existing > 0 && !yes {
        let prompt = format!("Replace {} existing student(s) with the demo roster?", existing);
        if !utils::confirm_action(&prompt)? {
            println!("Cancelled");
            return Ok(());
        }
    }

    let stored = seed::seed_demo_roster(&mut db, true)?;
    println!("{} {} students stored in {}", "✓".green(), stored, config.database.path);
    Ok(())
}

fn check_students(config: &Config, filter: &StudentFilter, output: &OutputArgs, title: &str) -> error::Result<()> {
    // Validate the export format before doing any work.
    let export_format = match &output.export {
        Some(_) => Some(output.export_format.parse::<ExportFormat>()?),
        None => None,
    };

    let db = open_database(config)?;
    let formatter = VerdictFormatter::from_config(config);
    let report = report::build_report(&db, filter)?;

    if let StudentFilter::GradeLevel(level) = filter {
        if report.is_empty() {
            println!("{}", format!("No students found in {}.", level).yellow());
            return Ok(());
        }
    }

    match output.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => cli::output::print_report(&report, &formatter, title),
    }

    if let (Some(stem), Some(format)) = (&output.export, export_format) {
        export(config, &report, &formatter, stem, format)?;
    }

    Ok(())
}

fn export(config: &Config, report: &Report, formatter: &VerdictFormatter, stem: &str, format: ExportFormat) -> error::Result<()> {
    let path = report::export_path(&config.export_dir(), stem, format);
    report::export_report(report, formatter, &path, format)?;
    println!("{} Results exported to {}", "✓".green(), path.display());
    Ok(())
}

fn evaluate_grades(config: &Config, entries: &[String], format: OutputFormat) -> error::Result<()> {
    let grades: CourseGrades = entries
        .iter()
        .map(|entry| CourseGrade::parse(entry))
        .collect::<error::Result<Vec<_>>>()?
        .into_iter()
        .collect();

    for entry in grades.iter() {
        if !eligibility::is_catalog_course(&entry.course) {
            println!("{}", format!("Note: '{}' is not a qualifying course and is ignored", entry.course).yellow());
        }
    }

    let verdict = eligibility::evaluate(&grades);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
        return Ok(());
    }

    let formatter = VerdictFormatter::from_config(config);
    let line = formatter.summary_line(&verdict);
    println!("{}", utils::colorize_tier(&line, Some(verdict.tier())));

    if !verdict.selected().is_empty() {
        println!("\n{}", "Counted courses:".cyan());
        for course in verdict.selected() {
            println!("  {:<28} {:>3}", course.course, course.grade);
        }
    }
    Ok(())
}

fn list_courses() {
    let mut current = None;
    for (course, group) in eligibility::catalog() {
        if current != Some(group) {
            let rule = match group {
                CourseGroup::Language | CourseGroup::SocialStudies => "best one counts, required",
                CourseGroup::Elective => "best three count",
            };
            println!("{} ({})", group.to_string().cyan().bold(), rule);
            current = Some(group);
        }
        println!("  {}", course);
    }
}

fn show_stats(config: &Config, format: OutputFormat) -> error::Result<()> {
    let db = open_database(config)?;
    let report = report::build_report(&db, &StudentFilter::All)?;
    let overall = report.summary();
    let by_level = report.summary_by_grade_level();

    if format == OutputFormat::Json {
        let json = serde_json::json!({
            "overall": overall,
            "grade_levels": by_level,
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    let formatter = VerdictFormatter::from_config(config);
    println!("{}", "=== Scholarship Statistics ===".cyan().bold());
    print_summary("All students", &overall, &formatter);

    for level in db.grade_levels()? {
        if let Some(summary) = by_level.get(&level) {
            print_summary(&level, summary, &formatter);
        }
    }

    Ok(())
}

fn print_summary(label: &str, summary: &Summary, formatter: &VerdictFormatter) {
    let top = formatter.award_amount(eligibility::AwardTier::Top).unwrap_or(0);
    let reduced = formatter.award_amount(eligibility::AwardTier::Reduced).unwrap_or(0);
    let committed = summary.top as u64 * top as u64 + summary.reduced as u64 * reduced as u64;

    println!("\n{}:", label.yellow());
    println!("  Students:    {}", summary.evaluated());
    println!("  Eligible:    {}", summary.eligible());
    println!("  Top award:   {}", summary.top.to_string().green());
    println!("  Reduced:     {}", summary.reduced.to_string().yellow());
    println!("  Ineligible:  {}", summary.ineligible.to_string().red());
    println!("  Total award: ${}", committed);
}

fn run_interactive(config: &Config) -> error::Result<()> {
    let db = open_database(config)?;
    if db.count()? == 0 {
        return Err(ScholarshipError::Config(
            "student store is empty; run `scholarship-checker seed` first".to_string(),
        ));
    }

    let stdin = io::stdin();
    let mut session = cli::interactive::InteractiveSession::new(
        &db,
        VerdictFormatter::from_config(config),
        config.export_dir(),
        stdin.lock(),
        io::stdout(),
    );
    session.run()
}
