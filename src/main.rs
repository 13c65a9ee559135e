use minitrees::prelude::*;
use minitrees::common::constants::DEFAULT_ALPHAS;
use minitrees::report;

use std::process;


const USAGE: &str = "\
[USAGE] ./minitrees [table file] [label,label,...] [--header] [--json] [--dot]

Grows a decision tree for each alpha in {0, 0.5, 1, 2, 99, inf}
with the Rényi entropy of order alpha, and compares the trees.

    --header  read the column labels from the first line
    --json    write each tree to `output_{alpha}.json`
    --dot     write each tree to `diagram_{alpha}.dot`

Progress is logged through `env_logger`, e.g. `RUST_LOG=debug`.
";


/// Command line arguments.
#[derive(Debug, Default, PartialEq)]
struct Args {
    path:       String,
    labels:     Option<Vec<String>>,
    has_header: bool,
    write_json: bool,
    write_dot:  bool,
}


/// What the command line asks for.
#[derive(Debug, PartialEq)]
enum Command {
    Run(Args),
    Help,
    Invalid,
}


fn parse_args<I>(args: I) -> Command
    where I: IntoIterator<Item = String>,
{
    let mut positional = Vec::new();
    let mut parsed = Args::default();

    for arg in args {
        match arg.as_str() {
            "--header" => { parsed.has_header = true; },
            "--json" => { parsed.write_json = true; },
            "--dot" => { parsed.write_dot = true; },
            "-h" | "--help" => { return Command::Help; },
            _ => { positional.push(arg); },
        }
    }

    let mut positional = positional.into_iter();
    let Some(path) = positional.next() else {
        return Command::Invalid;
    };
    parsed.path = path;
    parsed.labels = positional.next()
        .map(|arg| {
            arg.split(',')
                .map(|name| name.trim().to_string())
                .collect()
        });
    if positional.next().is_some() {
        return Command::Invalid;
    }

    Command::Run(parsed)
}


fn main() {
    env_logger::init();

    let args = match parse_args(std::env::args().skip(1)) {
        Command::Run(args) => args,
        Command::Help => {
            print!("{USAGE}");
            return;
        },
        Command::Invalid => {
            eprint!("{USAGE}");
            process::exit(2);
        },
    };

    if let Err(e) = run(args) {
        eprintln!("{e}");
        process::exit(1);
    }
}


fn read_table(args: &Args) -> Result<Table> {
    let mut reader = TableReader::default()
        .file(&args.path)
        .has_header(args.has_header);
    if let Some(labels) = &args.labels {
        reader = reader.labels(labels.iter().cloned());
    }
    reader.read()
}


fn run(args: Args) -> Result<()> {
    let table = read_table(&args)?;

    report::print_target_distribution(&table);

    let mut results = Vec::with_capacity(DEFAULT_ALPHAS.len());
    for alpha in DEFAULT_ALPHAS {
        let tree = DecisionTreeBuilder::new()
            .entropy(Measure::renyi(alpha)?)
            .build();

        let summary = report::summarize(&tree, &table)?;
        report::print_summary(&format!("alpha = {alpha}"), &summary, &table);

        let f = tree.produce(&table)?;
        if args.write_json {
            f.to_json_file(format!("output_{alpha}.json"))?;
        }
        if args.write_dot {
            f.to_dot_file(format!("diagram_{alpha}.dot"))?;
        }
        results.push((format!("{alpha}"), f));
    }

    report::print_comparison(&results);
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Command {
        parse_args(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn test_parse_flags() {
        let command = parse(&["golf.data", "--header", "--dot"]);
        let expected = Args {
            path: "golf.data".into(),
            has_header: true,
            write_dot: true,
            ..Args::default()
        };
        assert_eq!(command, Command::Run(expected));
    }

    #[test]
    fn test_parse_labels() {
        let command = parse(&["--json", "golf.data", "Outlook, Play"]);
        let expected = Args {
            path: "golf.data".into(),
            labels: Some(vec!["Outlook".into(), "Play".into()]),
            write_json: true,
            ..Args::default()
        };
        assert_eq!(command, Command::Run(expected));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse(&[]), Command::Invalid);
        assert_eq!(parse(&["--json"]), Command::Invalid);
        assert_eq!(parse(&["a", "b", "c"]), Command::Invalid);
        assert_eq!(parse(&["a", "--help"]), Command::Help);
    }

    #[test]
    fn test_usage_lists_options() {
        for option in ["--header", "--json", "--dot", "RUST_LOG"] {
            assert!(USAGE.contains(option), "missing {option}");
        }
    }

    #[test]
    fn test_header_file() {
        let mut path = std::env::temp_dir();
        path.push(format!("minitrees-{}-header.data", process::id()));
        std::fs::write(&path, "Outlook,Play\nSunny,No\nRainy,Yes\n").unwrap();

        let args = Args {
            path: path.to_string_lossy().into_owned(),
            has_header: true,
            ..Args::default()
        };
        let table = read_table(&args).unwrap();
        assert_eq!(table.labels(), &["Outlook", "Play"]);
        assert_eq!(table.shape(), (2, 2));

        let result = run(args);
        std::fs::remove_file(&path).unwrap();
        assert!(result.is_ok(), "got {result:?}");
    }
}
