use std::io::Read;

use qsim_engine::core::sample_counts;
use qsim_engine::{EngineConfig, Interpreter, Outcome};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        None | Some("demo")           => run_all_demos(),
        Some("run")                   => cli_run(&args[2..]),
        Some("config")                => cli_config(&args[2..]),
        Some("help") | Some("--help") => print_help(),
        Some(unknown) => {
            eprintln!("Unknown command '{}'. Run 'qsim help' for usage.", unknown);
            std::process::exit(1);
        }
    }
}

// ── CLI ───────────────────────────────────────────────────────────────────

struct RunOptions {
    path: String,
    config: EngineConfig,
    shots: Option<u64>,
    seed: Option<u64>,
}

fn parse_run_options(args: &[String]) -> Result<RunOptions, String> {
    let mut path = None;
    let mut config = EngineConfig::default();
    let mut shots = None;
    let mut seed = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let file = iter.next().ok_or("--config expects a file path")?;
                config = EngineConfig::from_json_file(file).map_err(|e| e.to_string())?;
            }
            "--shots" => {
                let n = iter.next().ok_or("--shots expects a count")?;
                shots = Some(n.parse().map_err(|_| format!("invalid shot count '{n}'"))?);
            }
            "--seed" => {
                let s = iter.next().ok_or("--seed expects an integer")?;
                seed = Some(s.parse().map_err(|_| format!("invalid seed '{s}'"))?);
            }
            other if path.is_none() => path = Some(other.to_string()),
            other => return Err(format!("unexpected argument '{other}'")),
        }
    }

    Ok(RunOptions {
        path: path.ok_or("Usage: qsim run <file|-> [--config <file.json>] [--shots N] [--seed S]")?,
        config,
        shots,
        seed,
    })
}

fn read_source(path: &str) -> Result<String, String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("Cannot read stdin: {e}"))?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).map_err(|e| format!("Cannot read '{}': {}", path, e))
    }
}

fn cli_run(args: &[String]) {
    let opts = match parse_run_options(args) {
        Ok(o) => o,
        Err(e) => { eprintln!("{e}"); std::process::exit(1); }
    };
    let source = match read_source(&opts.path) {
        Ok(s) => s,
        Err(e) => { eprintln!("{e}"); std::process::exit(1); }
    };
    let interpreter = match Interpreter::new(opts.config) {
        Ok(i) => i,
        Err(e) => { eprintln!("{e}"); std::process::exit(1); }
    };

    let outcome = match interpreter.run(source.lines()) {
        Ok(o) => o,
        Err(e) => { eprintln!("Error: {e}"); std::process::exit(1); }
    };

    print_outcome(&outcome);

    if let Some(shots) = opts.shots {
        let mut rng = match opts.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        match sample_counts(&outcome.probabilities, shots, &mut rng) {
            Ok(counts) => print_counts(outcome.num_qubits, &counts, shots),
            Err(e) => { eprintln!("Error: {e}"); std::process::exit(1); }
        }
    }

    if !outcome.diagnostics.is_empty() {
        eprintln!("Diagnostics:");
        for d in &outcome.diagnostics {
            eprintln!("  {d}");
        }
    }
}

/// `qsim config [--config <file.json>]`: print the effective configuration.
fn cli_config(args: &[String]) {
    let config = match args {
        [] => EngineConfig::default(),
        [flag, file] if flag == "--config" => match EngineConfig::from_json_file(file) {
            Ok(c) => c,
            Err(e) => { eprintln!("{e}"); std::process::exit(1); }
        },
        _ => {
            eprintln!("Usage: qsim config [--config <file.json>]");
            std::process::exit(1);
        }
    };
    let interpreter = match Interpreter::new(config) {
        Ok(i) => i,
        Err(e) => { eprintln!("{e}"); std::process::exit(1); }
    };
    match render_config(interpreter.config()) {
        Ok(json) => println!("{json}"),
        Err(e) => { eprintln!("{e}"); std::process::exit(1); }
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────

fn render_config(config: &EngineConfig) -> Result<String, String> {
    serde_json::to_string_pretty(config).map_err(|e| format!("Cannot render config: {e}"))
}

fn basis_label(index: usize, num_qubits: usize) -> String {
    format!("{index:0>num_qubits$b}")
}

fn print_outcome(outcome: &Outcome) {
    let n = outcome.num_qubits;

    println!("Final state ({n} qubit(s)):");
    for (i, amp) in outcome.amplitudes.iter().enumerate() {
        if amp.im.abs() > 1e-6 {
            println!("  |{}>: {:.3} + {:.3}i", basis_label(i, n), amp.re, amp.im);
        } else {
            println!("  |{}>: {:.3}", basis_label(i, n), amp.re);
        }
    }
    println!();

    println!("Probabilities:");
    for (i, p) in outcome.probabilities.iter().enumerate() {
        println!("  P(|{}>) = {:.3}", basis_label(i, n), p);
    }
    println!();
}

fn print_counts(num_qubits: usize, counts: &[u64], shots: u64) {
    println!("Sampling {shots} shot(s):");
    for (i, &c) in counts.iter().enumerate().filter(|(_, &c)| c > 0) {
        println!("  |{}>  {c}", basis_label(i, num_qubits));
    }
    println!();
}

fn print_help() {
    println!("Usage: qsim [COMMAND] [ARGS]\n");
    println!("Commands:");
    println!("  demo                      Run built-in demonstration circuits");
    println!("  run <file|->              Interpret a circuit file (or stdin)");
    println!("  config                    Print the effective engine configuration as JSON");
    println!("  help                      Show this message\n");
    println!("Options for 'run' and 'config':");
    println!("  --config <file.json>      Engine configuration\n");
    println!("Options for 'run':");
    println!("  --shots <N>               Sample N outcomes from the final distribution");
    println!("  --seed <S>                Seed for --shots\n");
    println!("Circuit commands (one per line, case-insensitive):");
    println!("  init <n>                  Reset to n qubits in |0...0>");
    println!("  h <q>                     Hadamard on qubit q");
    println!("  x <q>                     Pauli-X on qubit q");
    println!("  anything else             Ignored\n");
    println!("Logging: set RUST_LOG (e.g. RUST_LOG=qsim_engine=debug)");
}

// ── Demos ─────────────────────────────────────────────────────────────────

fn run_all_demos() {
    let demos: &[(&str, &[&str])] = &[
        ("Single-qubit superposition", &["init 1", "h 0"]),
        ("Bit flip on qubit 0", &["init 2", "x 0"]),
        ("Uniform superposition", &["init 2", "h 0", "h 1"]),
    ];

    let interpreter = Interpreter::default();
    for (title, lines) in demos {
        println!("━━━ {title} ━━━");
        for line in *lines {
            println!("  {line}");
        }
        println!();
        match interpreter.run(lines.iter()) {
            Ok(outcome) => print_outcome(&outcome),
            Err(e) => eprintln!("Error: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_basis_label_width() {
        assert_eq!(basis_label(1, 3), "001");
        assert_eq!(basis_label(5, 3), "101");
        assert_eq!(basis_label(0, 1), "0");
    }

    #[test]
    fn test_render_config_reloads() {
        let config = EngineConfig::strict().with_max_qubits(12);
        let json = render_config(&config).unwrap();
        assert!(json.contains("\"on_malformed_init\": \"reject\""));
        assert_eq!(EngineConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_parse_run_options() {
        let opts = parse_run_options(&args(&["circuit.txt", "--shots", "100", "--seed", "7"])).unwrap();
        assert_eq!(opts.path, "circuit.txt");
        assert_eq!(opts.shots, Some(100));
        assert_eq!(opts.seed, Some(7));
        assert_eq!(opts.config, EngineConfig::default());
    }

    #[test]
    fn test_parse_run_options_errors() {
        assert!(parse_run_options(&args(&[])).is_err());
        assert!(parse_run_options(&args(&["a", "b"])).is_err());
        assert!(parse_run_options(&args(&["a", "--shots", "many"])).is_err());
        assert!(parse_run_options(&args(&["a", "--seed"])).is_err());
    }
}
