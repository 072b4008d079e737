use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use structopt::StructOpt;
use wordle_caddy::*;

#[derive(Debug, StructOpt)]
struct Args {
    /// Path to a dictionary file, with one word per line. Every word should be as long as the
    /// first one.
    #[structopt(default_value = "target_words.txt", parse(from_os_str))]
    dictionary_path: PathBuf,

    /// Word to suggest before there's any feedback.
    #[structopt(long, default_value = "crane")]
    opener: String,

    /// Seed for picking suggestions, to make them repeatable.
    #[structopt(long)]
    seed: Option<u64>,

    /// Play against this word instead of reading commands.
    #[structopt(long)]
    word: Option<String>,

    /// Enable debug output?
    #[structopt(short = "v", long)]
    verbose: bool,
}

const INTRO: &str = "Welcome to Wordle Caddy: a Wordle word filterer.\nType help for a list of commands.";

const HELP: &str = "\
Commands:
  ipick [guess] <feedback>  apply the feedback for a guess (default: the last suggestion)
                            and suggest another word. Guess and feedback can also be
                            separated by ':'.
                            feedback codes: gray = - _ . g, yellow = o ? y, green = x +
  find <regex>              search the whole dictionary
  sub <regex>               search within the current results
  contains <letters>        require letters (no letters: forget required letters,
                            except ones already green)
  not <letters>             rule out letters (no letters: forget ruled-out letters)
  suggest                   suggest a word from the current results
  reset                     start over
  quit                      exit";

fn main() -> io::Result<()> {
    let args = Args::from_args();

    let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if args.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let dictionary = match Dictionary::open(&args.dictionary_path) {
        Ok(d) => d,
        Err(e) => {
            println!("dictionary file {:?} could not be loaded: {}", args.dictionary_path, e);
            println!("to use a different file, specify it in command line arguments");
            Args::clap().print_help().ok();
            println!();
            std::process::exit(1);
        }
    };

    let session = match args.seed {
        Some(seed) => Session::seeded(&dictionary, &args.opener, seed),
        None => Session::new(&dictionary, &args.opener),
    };
    let mut session = match session {
        Ok(s) => s,
        Err(e) => {
            println!("bad opener {:?}: {}", args.opener, e);
            std::process::exit(1);
        }
    };

    if let Some(word) = args.word {
        println!("{} words in dictionary", dictionary.len());
        println!("checking: {}", word);
        let turns = match session.play_against(&word) {
            Ok(turns) => turns,
            Err(e) => {
                println!("{}", e);
                std::process::exit(1);
            }
        };
        for (guess_num, turn) in turns.iter().enumerate() {
            println!("  {}: guessing {} -> {}", guess_num + 1, turn.guess, feedback_code(&turn.infos));
            println!("    {} candidates left", turn.remaining);
        }
        match turns.last() {
            Some(turn) if turn.is_win() => println!("{} guesses required", turns.len()),
            _ => println!("dunno lol\nis the word in the dictionary?"),
        }
        return Ok(());
    }

    println!("{}", INTRO);
    println!("Try opening with: {}", session.opener());
    run(&mut session)
}

fn run(session: &mut Session) -> io::Result<()> {
    let stdin = io::stdin();
    loop {
        print!("(wordle) ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            println!("Bye!");
            return Ok(());
        }

        let line = line.trim();
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };

        match command {
            "" => continue,
            "ipick" => {
                let parts = arg.split(|c: char| c.is_whitespace() || c == ':')
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>();
                let result = match parts[..] {
                    [feedback] => session.ipick(None, feedback),
                    [guess, feedback] => session.ipick(Some(guess), feedback),
                    _ => {
                        println!("usage: ipick [guess] <feedback>");
                        continue;
                    }
                };
                match result {
                    Ok(suggestion) => {
                        print_words("candidates", session.candidates().iter());
                        print_suggestion(&suggestion);
                    }
                    Err(e) => println!("Error: {}", e),
                }
            }
            "find" | "sub" => {
                let result = if command == "find" {
                    session.find(arg)
                } else {
                    session.sub(arg)
                };
                match result {
                    Ok(words) => print_words("matches", words.iter()),
                    Err(e) => println!("Error: {}", e),
                }
            }
            "contains" => print_words("candidates", session.contains(arg).iter()),
            "not" => print_words("candidates", session.not(arg).iter()),
            "suggest" => print_suggestion(&session.suggest()),
            "reset" => {
                session.reset();
                println!("Search reset.");
            }
            "help" | "?" => println!("{}", HELP),
            "quit" | "exit" => {
                println!("Bye!");
                return Ok(());
            }
            other => println!("unknown command {:?}; type help for a list of commands", other),
        }
    }
}

fn print_suggestion(suggestion: &Suggestion) {
    match suggestion {
        Suggestion::New(word) => println!("Suggested: {}", word),
        Suggestion::Unchanged(_) => println!("No new suggestion."),
        Suggestion::Unavailable => println!("No suggestions available."),
    }
}

fn print_words<T: AsRef<str>>(msg: &str, words: impl ExactSizeIterator<Item=T>) {
    print!("{} ({}): ", msg, words.len());
    let mut it = words.enumerate().peekable();
    while let Some((i, word)) = it.next() {
        print!("{}", word.as_ref());
        if i == 9 {
            break;
        }
        if it.peek().is_some() {
            print!(", ");
        }
    }
    let cnt = it.count();
    if cnt > 0 {
        println!(", and {} more", cnt);
    } else {
        println!();
    }
}
