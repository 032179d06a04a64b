use civpath::app::App;
use civpath::build_info;
use civpath::config::{self, AppConfig};
use civpath::data::{era_path, Civilization, DatasetLoader, Datasets, Era, Leader, LEADERS_PATH};
use civpath::logging::{self, LogTarget};
use civpath::selection::{filter_leaders, visible_civilizations, SelectionContext, TraitFilter};
use civpath::ui;
use civpath::unlock::{describe_fallback_conditions, evaluate};
use clap::{Parser, Subcommand};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "civpath")]
#[command(about = "Browse which civilizations each leader and earlier pick unlocks")]
struct Cli {
    /// Directory containing leaders/, antiquity/, exploration/ and modern/ datasets
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Base URL serving the same dataset layout
    #[arg(long, global = true)]
    url: Option<String>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Show version information
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show which unlock rules a civilization satisfies
    Check {
        /// Era of the civilization to check
        era: Era,

        /// Id of the civilization to check
        civilization: String,

        /// Selected leader id
        #[arg(long)]
        leader: Option<String>,

        /// Selected antiquity civilization id
        #[arg(long)]
        antiquity: Option<String>,

        /// Selected exploration civilization id
        #[arg(long)]
        exploration: Option<String>,
    },

    /// Print a dataset sorted by name
    List {
        /// leaders, antiquity, exploration or modern
        dataset: String,

        /// Only entries with this trait (civilizations need filter_civilizations)
        #[arg(long, default_value = "all")]
        filter: TraitFilter,
    },
}

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!("civpath {}", build_info::version_string());
        return;
    }

    let (mut config, config_error) = AppConfig::load_or_default();
    if let Some(dir) = cli.data.clone() {
        config.data_dir = Some(dir);
        config.data_url = None;
    }
    if let Some(url) = cli.url.clone() {
        config.data_url = Some(url);
    }

    init_logging(cli.command.is_none(), cli.verbose, &config);
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "Ignoring invalid config file");
    }

    let result = match cli.command {
        None => run_tui(&config),
        Some(command) => run_command(command, &config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// The TUI owns the terminal, so it logs to a file; commands log to stderr.
fn init_logging(tui: bool, verbose: bool, config: &AppConfig) {
    let target = if tui {
        match config::log_dir() {
            Some(dir) => LogTarget::File(logging::log_file_path(&dir)),
            None => return,
        }
    } else {
        LogTarget::Stderr
    };
    let filter = logging::env_filter(verbose, &config.log_level);
    if let Err(e) = logging::init(target, filter) {
        eprintln!("Failed to initialize logging: {}", e);
    }
}

fn load(config: &AppConfig) -> Datasets {
    DatasetLoader::with_timeout(config.data_source(), config.http_timeout()).load_all()
}

fn run_command(command: Commands, config: &AppConfig) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Check {
            era,
            civilization,
            leader,
            antiquity,
            exploration,
        } => {
            let datasets = load(config);
            let context = build_context(
                &datasets,
                leader.as_deref(),
                antiquity.as_deref(),
                exploration.as_deref(),
            )?;
            let candidate = datasets
                .find_civilization(era, &civilization)
                .ok_or_else(|| format!("No {} civilization with id '{}'", era, civilization))?;

            let matches = evaluate(&context, era, candidate);
            if matches.is_empty() {
                match describe_fallback_conditions(candidate) {
                    Some(fallback) => println!("{}", fallback),
                    None => println!("{}: no unlock rule applies", candidate.name),
                }
            } else {
                for m in &matches {
                    println!("✔ {}", m);
                }
            }
            Ok(())
        }
        Commands::List { dataset, filter } => {
            let loader = DatasetLoader::with_timeout(config.data_source(), config.http_timeout());
            if dataset.eq_ignore_ascii_case("leaders") {
                let leaders: Vec<Leader> = loader.load_dataset(LEADERS_PATH)?;
                for leader in filter_leaders(&leaders, filter) {
                    println!("{:<16} {}", leader.id, leader.name);
                }
            } else {
                let era: Era = dataset.parse()?;
                if filter != TraitFilter::All && !config.filter_civilizations {
                    return Err(format!(
                        "--filter only applies to {} when filter_civilizations is enabled in the config",
                        era.key()
                    )
                    .into());
                }
                let civs: Vec<Civilization> = loader.load_dataset(&era_path(era))?;
                for civ in visible_civilizations(&civs, filter, config.filter_civilizations) {
                    println!("{:<16} {}", civ.id, civ.name);
                }
            }
            Ok(())
        }
    }
}

/// Replay the given picks in order so the cascading reset applies.
fn build_context(
    datasets: &Datasets,
    leader: Option<&str>,
    antiquity: Option<&str>,
    exploration: Option<&str>,
) -> Result<SelectionContext, Box<dyn Error>> {
    let mut context = SelectionContext::new();
    if let Some(id) = leader {
        let leader = datasets
            .find_leader(id)
            .ok_or_else(|| format!("No leader with id '{}'", id))?;
        context.select_leader(leader.clone());
    }
    for (era, id) in [(Era::Antiquity, antiquity), (Era::Exploration, exploration)] {
        if let Some(id) = id {
            let civ = datasets
                .find_civilization(era, id)
                .ok_or_else(|| format!("No {} civilization with id '{}'", era, id))?;
            context.select(era, civ.clone());
        }
    }
    Ok(context)
}

fn run_tui(config: &AppConfig) -> Result<(), Box<dyn Error>> {
    let datasets = load(config);
    let mut app = App::new(datasets, config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn Error>> {
    while !app.should_quit {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                // Windows reports both press and release
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }
    }
    Ok(())
}
