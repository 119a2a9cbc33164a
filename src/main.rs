// vim: set ai et ts=4 sts=4 sw=4:
use std::fs;
use std::io::{self, Read};
use std::process;
use clap::{App, Arg, ArgMatches};
use log::{LevelFilter, debug, warn, error};

use picross::{Puzzle, Solver, prompt};
use picross::puzzle::Error;
use picross::render::Board;
use picross::util::is_a_tty;

struct Args {
    puzzle_file: Option<String>,
    interactive: bool,
    plain: bool,
    subdivision: Option<usize>,
    color: bool,
    strict: bool,
    log_level: LevelFilter,
}

impl Args {
    fn from_matches(matches: &ArgMatches) -> Result<Self, String> {
        let subdivision = match matches.value_of("subdivision") {
            Some(s) => s.parse::<usize>()
                        .map_err(|_| format!("invalid subdivision size: {}", s))?,
            None    => 5,
        };
        let color = match matches.value_of("color").unwrap_or("auto") {
            "always" => true,
            "never"  => false,
            _        => is_a_tty(io::stdout()),
        };
        let log_level = if matches.is_present("quiet") {
            LevelFilter::Error
        } else {
            match matches.occurrences_of("verbose") {
                0 => LevelFilter::Warn,
                1 => LevelFilter::Info,
                2 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            }
        };
        Ok(Args {
            puzzle_file: matches.value_of("PUZZLE").map(String::from),
            interactive: matches.is_present("interactive"),
            plain:       matches.is_present("plain"),
            subdivision: if subdivision == 0 { None } else { Some(subdivision) },
            color,
            strict:      matches.is_present("strict"),
            log_level,
        })
    }
}

fn parse_args() -> ArgMatches<'static> {
    App::new("picross")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Solves nonogram puzzles using line logic")
        .arg(Arg::with_name("PUZZLE")
                 .help("YAML puzzle file with 'rows' and 'cols' clue lists ('-' reads stdin)")
                 .required_unless("interactive")
                 .index(1))
        .arg(Arg::with_name("interactive")
                 .short("i")
                 .long("interactive")
                 .help("Prompt for the dimensions and clues")
                 .conflicts_with("PUZZLE"))
        .arg(Arg::with_name("plain")
                 .short("p")
                 .long("plain")
                 .help("Print only the grid, one line per row"))
        .arg(Arg::with_name("subdivision")
                 .long("subdivision")
                 .takes_value(true)
                 .value_name("N")
                 .help("Draw a separator every N squares (0 disables, default 5)"))
        .arg(Arg::with_name("color")
                 .long("color")
                 .takes_value(true)
                 .possible_values(&["auto", "always", "never"])
                 .help("When to dim the clues of solved lines"))
        .arg(Arg::with_name("strict")
                 .long("strict")
                 .help("Exit with status 2 if the puzzle can't be fully solved"))
        .arg(Arg::with_name("verbose")
                 .short("v")
                 .multiple(true)
                 .help("Increase logging verbosity"))
        .arg(Arg::with_name("quiet")
                 .short("q")
                 .long("quiet")
                 .conflicts_with("verbose")
                 .help("Only log errors"))
        .get_matches()
}

fn setup_logging(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}][{}] {}", record.level(), record.target(), message))
        })
        .level(level)
        .chain(io::stderr())
        .apply()
}

fn load_puzzle(args: &Args) -> Result<Puzzle, Error> {
    if args.interactive {
        let stdin = io::stdin();
        let stdout = io::stdout();
        return prompt::ask_puzzle(&mut stdin.lock(), &mut stdout.lock());
    }
    let text = match args.puzzle_file.as_deref() {
        Some("-") | None => {
            let mut s = String::new();
            io::stdin().read_to_string(&mut s)?;
            s
        }
        Some(path) => fs::read_to_string(path)?,
    };
    Puzzle::from_yaml_str(&text)
}

fn run(args: &Args) -> Result<bool, Error> {
    let puzzle = load_puzzle(args)?;
    let mut solver = Solver::new(&puzzle);
    let sweeps = solver.by_ref().count();
    let grid = solver.run();

    if grid.is_solved() {
        // contradictory clues can still leave every square known
        match Puzzle::from_solution(&grid) {
            Ok(ref found) if *found == puzzle => debug!("solution matches all clues after {} sweep(s)", sweeps),
            _ => warn!("the solved grid does not match the clues; the puzzle is contradictory"),
        }
    } else {
        for line in puzzle.lines().filter(|line| !line.is_completed(&grid)) {
            debug!("{} is not fully solved", line);
        }
    }

    if args.plain {
        print!("{}", grid);
    } else {
        let mut board = Board::new(&puzzle, &grid);
        board.subdivision = args.subdivision;
        board.color = args.color;
        print!("{}", board);
    }
    Ok(grid.is_solved())
}

fn main() {
    let matches = parse_args();
    let args = match Args::from_matches(&matches) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("error: {}", msg);
            process::exit(1);
        }
    };
    if let Err(err) = setup_logging(args.log_level) {
        eprintln!("error: could not set up logging: {}", err);
    }

    match run(&args) {
        Ok(true) => {}
        Ok(false) => {
            if args.strict {
                error!("line logic alone could not solve this puzzle");
                process::exit(2);
            }
        }
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(1);
        }
    }
}
