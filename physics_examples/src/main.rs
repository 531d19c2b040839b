use std::env;
use std::process::ExitCode;

use physics_demos::{Demo, DemoConfig, DemoError, DemoKind};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod visual;

const DEFAULT_TICKS: u64 = 200;
const REPORT_EVERY: u64 = 50;

const USAGE: &str = "usage: physics_examples [visual] <demo> [ticks] [--config <file.json>] [--seed <n>]\n\
                     demos: slide_and_joint, slide_and_pin_joint, bouncing_basketballs, colliding_balls";

#[derive(Debug, PartialEq)]
struct Args {
    visual: bool,
    kind: DemoKind,
    ticks: u64,
    config_path: Option<String>,
    seed: Option<u64>,
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut visual = false;
    let mut positional = Vec::new();
    let mut config_path = None;
    let mut seed = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().ok_or("--config needs a path")?;
                config_path = Some(path.clone());
            }
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a number")?;
                seed = Some(value.parse::<u64>().map_err(|_| format!("invalid seed '{}'", value))?);
            }
            "visual" if positional.is_empty() && !visual => visual = true,
            _ => positional.push(arg.as_str()),
        }
    }

    let kind = match positional.first() {
        Some(name) => name.parse::<DemoKind>().map_err(|e| e.to_string())?,
        None => DemoKind::SlideAndJoint,
    };
    let ticks = match positional.get(1) {
        Some(n) => n.parse::<u64>().map_err(|_| format!("invalid tick count '{}'", n))?,
        None => DEFAULT_TICKS,
    };
    if positional.len() > 2 {
        return Err(format!("unexpected argument '{}'", positional[2]));
    }

    Ok(Args {
        visual,
        kind,
        ticks,
        config_path,
        seed,
    })
}

fn load_config(args: &Args) -> Result<DemoConfig, DemoError> {
    let mut config = args.kind.default_config();
    if let Some(path) = &args.config_path {
        config.apply_overrides_from_file(path)?;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    Ok(config)
}

fn run_headless(kind: DemoKind, config: DemoConfig, ticks: u64) -> Result<(), DemoError> {
    let mut demo = kind.build(config)?;
    info!("Simulating {} for {} ticks", kind, ticks);
    for tick in 1..=ticks {
        demo.tick();
        if tick % REPORT_EVERY == 0 {
            info!("{}", demo.stats());
        }
    }
    info!("Finished: {}", demo.stats());
    Ok(())
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("physics_demos=info,physics_examples=info"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let raw: Vec<String> = env::args().skip(1).collect();
    let args = match parse_args(&raw) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}\n{}", message, USAGE);
            return ExitCode::FAILURE;
        }
    };

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Running example: {}", args.kind);

    if args.visual {
        if let Err(e) = visual::run_visual(args.kind, config) {
            error!("Error running visual example: {}", e);
            return ExitCode::FAILURE;
        }
    } else if let Err(e) = run_headless(args.kind, config, args.ticks) {
        error!("Error running example: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let parsed = parse_args(&[]).unwrap();
        assert!(!parsed.visual);
        assert_eq!(parsed.kind, DemoKind::SlideAndJoint);
        assert_eq!(parsed.ticks, DEFAULT_TICKS);
    }

    #[test]
    fn test_visual_with_flags() {
        let parsed = parse_args(&args(&[
            "visual",
            "colliding_balls",
            "--seed",
            "4",
            "--config",
            "demo.json",
        ]))
        .unwrap();
        assert_eq!(
            parsed,
            Args {
                visual: true,
                kind: DemoKind::CollidingBalls,
                ticks: DEFAULT_TICKS,
                config_path: Some("demo.json".to_string()),
                seed: Some(4),
            }
        );
    }

    #[test]
    fn test_headless_ticks() {
        let parsed = parse_args(&args(&["bouncing_basketballs", "30"])).unwrap();
        assert_eq!(parsed.kind, DemoKind::BouncingBasketballs);
        assert_eq!(parsed.ticks, 30);
    }

    #[test]
    fn test_bad_arguments() {
        assert!(parse_args(&args(&["ragdoll"])).is_err());
        assert!(parse_args(&args(&["colliding_balls", "many"])).is_err());
        assert!(parse_args(&args(&["--seed"])).is_err());
        assert!(parse_args(&args(&["colliding_balls", "10", "extra"])).is_err());
    }

    #[test]
    fn test_seed_flag_overrides_config() {
        let parsed = parse_args(&args(&["colliding_balls", "--seed", "12"])).unwrap();
        let config = load_config(&parsed).unwrap();
        assert_eq!(config.seed, Some(12));
        assert_eq!(config.width, 500.0);
    }

    #[test]
    fn test_run_headless() {
        let mut config = DemoKind::SlideAndJoint.default_config();
        config.seed = Some(1);
        assert!(run_headless(DemoKind::SlideAndJoint, config, 20).is_ok());
    }
}
